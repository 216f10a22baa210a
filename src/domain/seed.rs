//! In-memory seed collections.
//!
//! The console operates entirely on these collections; there is no backing
//! store. Constructors return fresh vectors so each console session starts
//! from the same state.

use chrono::{NaiveDate, NaiveDateTime};

use super::records::{
    AccountStatus, ActivityEvent, ActivityKind, Driver, DriverStatus, Pickup, PickupPoint,
    PickupStatus, Priority, ReviewStatus, RewardTransaction, RoutePlan, RouteStatus, ServiceState,
    ServiceStatus, SiteKind, Submission, Tier, TransactionKind, UserAccount,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

/// Scheduled pickups for the Pickups page.
#[must_use]
pub fn pickups() -> Vec<Pickup> {
    vec![
        Pickup {
            id: "PK001".to_string(),
            customer: "John Doe".to_string(),
            phone: "+1 234-567-8900".to_string(),
            address: "123 Main St, Downtown".to_string(),
            material: "Plastic Bottles".to_string(),
            quantity: "25 bottles".to_string(),
            scheduled_at: datetime(2024, 1, 20, 14, 0),
            status: PickupStatus::Scheduled,
            driver: "Mike Wilson".to_string(),
            truck: "Truck A".to_string(),
            priority: Priority::Normal,
            notes: "Second floor apartment, ring doorbell".to_string(),
        },
        Pickup {
            id: "PK002".to_string(),
            customer: "Sarah Johnson".to_string(),
            phone: "+1 234-567-8901".to_string(),
            address: "456 Oak Ave, Suburban".to_string(),
            material: "Cardboard".to_string(),
            quantity: "10 boxes".to_string(),
            scheduled_at: datetime(2024, 1, 20, 15, 30),
            status: PickupStatus::InProgress,
            driver: "Tom Anderson".to_string(),
            truck: "Truck B".to_string(),
            priority: Priority::High,
            notes: "Large items, may need assistance".to_string(),
        },
        Pickup {
            id: "PK003".to_string(),
            customer: "Emily Davis".to_string(),
            phone: "+1 234-567-8902".to_string(),
            address: "789 Pine St, Business District".to_string(),
            material: "Electronics".to_string(),
            quantity: "3 items".to_string(),
            scheduled_at: datetime(2024, 1, 20, 16, 0),
            status: PickupStatus::Completed,
            driver: "Jake Miller".to_string(),
            truck: "Truck C".to_string(),
            priority: Priority::Normal,
            notes: "Office building, security desk".to_string(),
        },
    ]
}

/// Fleet drivers shown on the Pickups page driver panel.
#[must_use]
pub fn drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: "D001".to_string(),
            name: "Mike Wilson".to_string(),
            truck: "Truck A".to_string(),
            status: DriverStatus::Available,
        },
        Driver {
            id: "D002".to_string(),
            name: "Tom Anderson".to_string(),
            truck: "Truck B".to_string(),
            status: DriverStatus::OnRoute,
        },
        Driver {
            id: "D003".to_string(),
            name: "Jake Miller".to_string(),
            truck: "Truck C".to_string(),
            status: DriverStatus::Available,
        },
    ]
}

/// Item submissions for the Reviews queue.
#[must_use]
pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "RV001".to_string(),
            user: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            location: "Downtown Area".to_string(),
            material: "Plastic Bottles".to_string(),
            quantity: "25 bottles".to_string(),
            submitted_at: datetime(2024, 1, 20, 9, 30),
            status: ReviewStatus::Pending,
            image_count: 2,
            estimated_weight_kg: 2.5,
            notes: "Clean bottles, separated by color".to_string(),
        },
        Submission {
            id: "RV002".to_string(),
            user: "Sarah Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            location: "Suburban District".to_string(),
            material: "Cardboard".to_string(),
            quantity: "10 boxes".to_string(),
            submitted_at: datetime(2024, 1, 20, 8, 15),
            status: ReviewStatus::Approved,
            image_count: 1,
            estimated_weight_kg: 5.2,
            notes: "Flattened boxes, dry condition".to_string(),
        },
        Submission {
            id: "RV003".to_string(),
            user: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
            location: "Business District".to_string(),
            material: "Electronics".to_string(),
            quantity: "3 items".to_string(),
            submitted_at: datetime(2024, 1, 20, 7, 45),
            status: ReviewStatus::Rejected,
            image_count: 3,
            estimated_weight_kg: 8.1,
            notes: "Old computer parts, batteries removed".to_string(),
        },
    ]
}

/// Pickup routes for the Routes page.
#[must_use]
pub fn routes() -> Vec<RoutePlan> {
    vec![
        RoutePlan {
            id: "RT001".to_string(),
            name: "Downtown Route A".to_string(),
            driver: "Mike Wilson".to_string(),
            truck: "Truck A".to_string(),
            pickups: 8,
            distance_km: 24.5,
            estimated_minutes: 225,
            fuel_cost_cents: 1_850,
            status: RouteStatus::Active,
            efficiency: 92,
        },
        RoutePlan {
            id: "RT002".to_string(),
            name: "Suburban Route B".to_string(),
            driver: "Tom Anderson".to_string(),
            truck: "Truck B".to_string(),
            pickups: 12,
            distance_km: 32.1,
            estimated_minutes: 260,
            fuel_cost_cents: 2_430,
            status: RouteStatus::Planned,
            efficiency: 87,
        },
        RoutePlan {
            id: "RT003".to_string(),
            name: "Business District Route C".to_string(),
            driver: "Jake Miller".to_string(),
            truck: "Truck C".to_string(),
            pickups: 6,
            distance_km: 18.2,
            estimated_minutes: 170,
            fuel_cost_cents: 1_380,
            status: RouteStatus::Completed,
            efficiency: 95,
        },
    ]
}

/// Unassigned stops available to the route planner.
#[must_use]
pub fn pickup_points() -> Vec<PickupPoint> {
    vec![
        PickupPoint {
            id: "P001".to_string(),
            address: "123 Main St".to_string(),
            kind: SiteKind::Residential,
            priority: Priority::Normal,
            items: "Plastic".to_string(),
        },
        PickupPoint {
            id: "P002".to_string(),
            address: "456 Oak Ave".to_string(),
            kind: SiteKind::Commercial,
            priority: Priority::High,
            items: "Cardboard".to_string(),
        },
        PickupPoint {
            id: "P003".to_string(),
            address: "789 Pine St".to_string(),
            kind: SiteKind::Residential,
            priority: Priority::Normal,
            items: "Electronics".to_string(),
        },
        PickupPoint {
            id: "P004".to_string(),
            address: "321 Elm St".to_string(),
            kind: SiteKind::Commercial,
            priority: Priority::Low,
            items: "Glass".to_string(),
        },
        PickupPoint {
            id: "P005".to_string(),
            address: "654 Maple Dr".to_string(),
            kind: SiteKind::Residential,
            priority: Priority::Normal,
            items: "Plastic".to_string(),
        },
    ]
}

/// Platform user accounts for the Users page.
#[must_use]
pub fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "U001".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+1 234-567-8900".to_string(),
            address: "123 Main St, Downtown".to_string(),
            joined: date(2024, 1, 15),
            status: AccountStatus::Active,
            tier: Tier::Gold,
            total_pickups: 47,
            total_recycled_kg: 245.8,
            reward_points: 1_250,
        },
        UserAccount {
            id: "U002".to_string(),
            name: "Sarah Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "+1 234-567-8901".to_string(),
            address: "456 Oak Ave, Suburban".to_string(),
            joined: date(2024, 2, 20),
            status: AccountStatus::Active,
            tier: Tier::Silver,
            total_pickups: 23,
            total_recycled_kg: 158.3,
            reward_points: 780,
        },
        UserAccount {
            id: "U003".to_string(),
            name: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
            phone: "+1 234-567-8902".to_string(),
            address: "789 Pine St, Business".to_string(),
            joined: date(2023, 12, 10),
            status: AccountStatus::Suspended,
            tier: Tier::Bronze,
            total_pickups: 12,
            total_recycled_kg: 89.2,
            reward_points: 340,
        },
    ]
}

/// Reward point transactions shown in the user profile dialog.
#[must_use]
pub fn transactions() -> Vec<RewardTransaction> {
    vec![
        RewardTransaction {
            id: "T001".to_string(),
            user_id: "U001".to_string(),
            kind: TransactionKind::RewardEarned,
            points: 150,
            description: "Plastic recycling pickup".to_string(),
            date: date(2024, 1, 20),
        },
        RewardTransaction {
            id: "T002".to_string(),
            user_id: "U001".to_string(),
            kind: TransactionKind::RewardRedeemed,
            points: -500,
            description: "Gift card redemption".to_string(),
            date: date(2024, 1, 18),
        },
    ]
}

/// Recent activity entries for the Overview feed.
#[must_use]
pub fn activity_feed() -> Vec<ActivityEvent> {
    vec![
        ActivityEvent {
            kind: ActivityKind::Approval,
            title: "Item approved".to_string(),
            description: "Plastic bottle #PL-2024-001 approved for pickup".to_string(),
            actor: "Admin".to_string(),
            minutes_ago: 2,
        },
        ActivityEvent {
            kind: ActivityKind::Pickup,
            title: "Pickup completed".to_string(),
            description: "Route #RT-001 completed with 15 items collected".to_string(),
            actor: "Driver Mike".to_string(),
            minutes_ago: 15,
        },
        ActivityEvent {
            kind: ActivityKind::Rejection,
            title: "Item rejected".to_string(),
            description: "Glass container #GL-2024-032 rejected - contaminated".to_string(),
            actor: "Admin".to_string(),
            minutes_ago: 32,
        },
        ActivityEvent {
            kind: ActivityKind::User,
            title: "New user registered".to_string(),
            description: "Sarah Johnson joined the recycling program".to_string(),
            actor: "System".to_string(),
            minutes_ago: 60,
        },
        ActivityEvent {
            kind: ActivityKind::Route,
            title: "Route optimized".to_string(),
            description: "Route #RT-002 optimized for tomorrow's pickups".to_string(),
            actor: "System".to_string(),
            minutes_ago: 120,
        },
    ]
}

/// Subsystem health entries for the Overview status board.
#[must_use]
pub fn service_statuses() -> Vec<ServiceStatus> {
    vec![
        ServiceStatus {
            name: "API Services".to_string(),
            state: ServiceState::Operational,
            detail: "Operational".to_string(),
        },
        ServiceStatus {
            name: "GPS Tracking".to_string(),
            state: ServiceState::Operational,
            detail: "Online".to_string(),
        },
        ServiceStatus {
            name: "Payment Gateway".to_string(),
            state: ServiceState::Maintenance,
            detail: "Maintenance".to_string(),
        },
        ServiceStatus {
            name: "Image Processing".to_string(),
            state: ServiceState::Operational,
            detail: "Active".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Record;

    #[test]
    fn pickup_seed_covers_three_statuses() {
        let seeded = pickups();
        assert_eq!(seeded.len(), 3);
        let statuses: Vec<PickupStatus> = seeded.iter().map(|p| p.status).collect();
        assert!(statuses.contains(&PickupStatus::Scheduled));
        assert!(statuses.contains(&PickupStatus::InProgress));
        assert!(statuses.contains(&PickupStatus::Completed));
    }

    #[test]
    fn seed_ids_are_unique_within_each_collection() {
        fn assert_unique(ids: Vec<&str>) {
            let unique: std::collections::HashSet<&&str> = ids.iter().collect();
            assert_eq!(ids.len(), unique.len(), "ids: {ids:?}");
        }
        let p = pickups();
        assert_unique(p.iter().map(Record::id).collect());
        let s = submissions();
        assert_unique(s.iter().map(Record::id).collect());
        let r = routes();
        assert_unique(r.iter().map(Record::id).collect());
        let u = users();
        assert_unique(u.iter().map(Record::id).collect());
    }

    #[test]
    fn transactions_all_reference_seeded_users() {
        let user_ids: Vec<String> = users().into_iter().map(|u| u.id).collect();
        for tx in transactions() {
            assert!(user_ids.contains(&tx.user_id), "orphan transaction {}", tx.id);
        }
    }

    #[test]
    fn route_efficiency_within_percent_range() {
        for route in routes() {
            assert!(route.efficiency <= 100);
        }
    }

    #[test]
    fn seed_constructors_are_deterministic() {
        assert_eq!(pickups(), pickups());
        assert_eq!(users(), users());
        assert_eq!(routes(), routes());
    }
}
