//! Terminal console for recycling operations.
//!
//! Elm-style seams: `model` holds all display state, `update` is the pure
//! state machine, `render` draws frames, and `runtime` is the only module
//! that performs I/O.

#![allow(missing_docs)]

pub mod input;
pub mod model;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod update;
pub mod widgets;

pub use runtime::run;
