//! Domain record types and their closed status enums.
//!
//! Every list page renders one of these record types. Statuses are closed
//! enums implementing [`StatusKind`] so filters can only ever name a real
//! status, and the theme layer can map each variant exhaustively.

#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A closed status vocabulary: the ordered set of variants a filter cycles
/// through, plus a display label per variant.
pub trait StatusKind: Copy + Eq + std::fmt::Debug + 'static {
    /// All variants in filter-cycle order.
    const ALL: &'static [Self];

    /// Human-readable label.
    fn label(self) -> &'static str;
}

/// A record that can live in a filterable list view.
pub trait Record {
    type Status: StatusKind;

    /// Stable unique identifier (e.g. `PK001`).
    fn id(&self) -> &str;

    fn status(&self) -> Self::Status;

    /// Fields matched by the case-insensitive substring search.
    /// The id is always one of them.
    fn search_fields(&self) -> [&str; 3];
}

// ──────────────────── pickups ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickupStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl StatusKind for PickupStatus {
    const ALL: &'static [Self] = &[
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

/// A scheduled recycling pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: String,
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub material: String,
    pub quantity: String,
    pub scheduled_at: NaiveDateTime,
    pub status: PickupStatus,
    pub driver: String,
    pub truck: String,
    pub priority: Priority,
    pub notes: String,
}

impl Record for Pickup {
    type Status = PickupStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> PickupStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.customer, &self.address, &self.id]
    }
}

// ──────────────────── drivers ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    Available,
    OnRoute,
}

impl DriverStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnRoute => "on-route",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub truck: String,
    pub status: DriverStatus,
}

// ──────────────────── review submissions ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl StatusKind for ReviewStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected];

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A recyclable-item submission awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub user: String,
    pub email: String,
    pub location: String,
    pub material: String,
    pub quantity: String,
    pub submitted_at: NaiveDateTime,
    pub status: ReviewStatus,
    pub image_count: usize,
    pub estimated_weight_kg: f64,
    pub notes: String,
}

impl Record for Submission {
    type Status = ReviewStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ReviewStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.user, &self.material, &self.id]
    }
}

// ──────────────────── routes ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Planned,
    Completed,
}

impl StatusKind for RouteStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Planned, Self::Completed];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Planned => "planned",
            Self::Completed => "completed",
        }
    }
}

/// A pickup route assigned to a driver and truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub truck: String,
    pub pickups: u32,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    pub fuel_cost_cents: u32,
    pub status: RouteStatus,
    /// Route efficiency percentage, 0-100.
    pub efficiency: u8,
}

impl Record for RoutePlan {
    type Status = RouteStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> RouteStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.driver, &self.id]
    }
}

// ──────────────────── pickup points ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Residential,
    Commercial,
}

impl SiteKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
        }
    }
}

/// An unassigned stop available to the route planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub id: String,
    pub address: String,
    pub kind: SiteKind,
    pub priority: Priority,
    pub items: String,
}

// ──────────────────── user accounts ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

impl StatusKind for AccountStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Suspended];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl StatusKind for Tier {
    const ALL: &'static [Self] = &[Self::Bronze, Self::Silver, Self::Gold];

    fn label(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }
}

/// A platform user account with recycling history and reward balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub joined: NaiveDate,
    pub status: AccountStatus,
    pub tier: Tier,
    pub total_pickups: u32,
    pub total_recycled_kg: f64,
    pub reward_points: u32,
}

impl Record for UserAccount {
    type Status = AccountStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> AccountStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.id]
    }
}

// ──────────────────── reward transactions ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    RewardEarned,
    RewardRedeemed,
}

impl TransactionKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RewardEarned => "earned",
            Self::RewardRedeemed => "redeemed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTransaction {
    pub id: String,
    pub user_id: String,
    pub kind: TransactionKind,
    /// Signed point delta; negative for redemptions.
    pub points: i32,
    pub description: String,
    pub date: NaiveDate,
}

// ──────────────────── overview feed and status board ────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Approval,
    Pickup,
    Rejection,
    User,
    Route,
}

impl ActivityKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approval => "approval",
            Self::Pickup => "pickup",
            Self::Rejection => "rejection",
            Self::User => "user",
            Self::Route => "route",
        }
    }
}

/// One entry in the Overview activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub actor: String,
    pub minutes_ago: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Operational,
    Maintenance,
}

impl ServiceState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Health of one backing subsystem on the Overview status board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub state: ServiceState,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_distinct_per_enum() {
        fn assert_distinct<S: StatusKind>() {
            let labels: Vec<&str> = S::ALL.iter().map(|s| s.label()).collect();
            let unique: std::collections::HashSet<&&str> = labels.iter().collect();
            assert_eq!(labels.len(), unique.len(), "labels: {labels:?}");
        }
        assert_distinct::<PickupStatus>();
        assert_distinct::<ReviewStatus>();
        assert_distinct::<RouteStatus>();
        assert_distinct::<AccountStatus>();
        assert_distinct::<Tier>();
    }

    #[test]
    fn search_fields_include_id() {
        let pickup = Pickup {
            id: "PK999".to_string(),
            customer: "Test".to_string(),
            phone: String::new(),
            address: String::new(),
            material: String::new(),
            quantity: String::new(),
            scheduled_at: NaiveDate::from_ymd_opt(2024, 1, 20)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            status: PickupStatus::Scheduled,
            driver: String::new(),
            truck: String::new(),
            priority: Priority::Normal,
            notes: String::new(),
        };
        assert!(pickup.search_fields().contains(&"PK999"));
    }

    #[test]
    fn pickup_status_serde_uses_kebab_case() {
        let rendered = serde_json::to_string(&PickupStatus::InProgress).unwrap();
        assert_eq!(rendered, "\"in-progress\"");
    }

    #[test]
    fn transaction_kind_serde_uses_snake_case() {
        let rendered = serde_json::to_string(&TransactionKind::RewardEarned).unwrap();
        assert_eq!(rendered, "\"reward_earned\"");
    }
}
