//! Domain model: record types, seed data, list-view state, aggregations.

pub mod analytics;
pub mod listview;
pub mod records;
pub mod seed;
