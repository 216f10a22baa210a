//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use recycle_ops::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{OpsError, Result};

// Records
pub use crate::domain::records::{
    AccountStatus, ActivityEvent, Driver, Pickup, PickupPoint, PickupStatus, Priority, Record,
    ReviewStatus, RoutePlan, RouteStatus, RewardTransaction, ServiceStatus, StatusKind,
    Submission, Tier, UserAccount,
};

// List views
pub use crate::domain::listview::{
    FilterCriteria, ListView, SelectionSet, StatusFilter, TierFilter,
};

// Analytics
pub use crate::domain::analytics::{FleetSummary, Kpi, fleet_summary, kpis, status_counts};

// Seed data
pub use crate::domain::seed;
