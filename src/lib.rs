#![forbid(unsafe_code)]

//! Recycle Ops (rops) — terminal operations console for recycling pickup
//! logistics.
//!
//! Seven pages over in-memory seed data:
//! 1. **Overview** — live metrics, activity feed, and system status board
//! 2. **Pickups / Reviews / Routes / Users** — filterable list views with
//!    selection, bulk actions, and record detail overlays
//! 3. **Analytics** — aggregations computed by pure functions over the seed
//! 4. **Settings** — the one surface that persists anything (console prefs)
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use recycle_ops::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use recycle_ops::core::config::Config;
//! use recycle_ops::domain::listview::{FilterCriteria, ListView};
//! ```

pub mod prelude;

#[cfg(feature = "cli")]
pub mod cli_app;
pub mod core;
pub mod domain;
#[cfg(feature = "tui")]
pub mod tui;
