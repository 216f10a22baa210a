//! Pure aggregations for the Overview and Analytics pages.
//!
//! Everything derivable is computed from the seed collections; headline
//! figures with no in-memory source (platform totals, growth rates) are
//! carried as constants from the reporting backend they were captured from.

use super::records::{Record, RoutePlan, RouteStatus, StatusKind, Tier, UserAccount};

/// Count records per status, in `StatusKind::ALL` order.
#[must_use]
pub fn status_counts<R: Record>(records: &[R]) -> Vec<(R::Status, usize)> {
    R::Status::ALL
        .iter()
        .map(|status| {
            let count = records.iter().filter(|r| r.status() == *status).count();
            (*status, count)
        })
        .collect()
}

/// Count user accounts per reward tier, in tier order.
#[must_use]
pub fn tier_counts(users: &[UserAccount]) -> Vec<(Tier, usize)> {
    Tier::ALL
        .iter()
        .map(|tier| {
            let count = users.iter().filter(|u| u.tier == *tier).count();
            (*tier, count)
        })
        .collect()
}

/// Users ranked by reward points, highest first, capped at `limit`.
#[must_use]
pub fn top_users(users: &[UserAccount], limit: usize) -> Vec<&UserAccount> {
    let mut ranked: Vec<&UserAccount> = users.iter().collect();
    ranked.sort_by(|a, b| b.reward_points.cmp(&a.reward_points));
    ranked.truncate(limit);
    ranked
}

/// Aggregate route fleet figures for the Routes page header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetSummary {
    pub route_count: usize,
    pub active_routes: usize,
    pub mean_efficiency: f64,
    pub total_fuel_cost_cents: u64,
    pub mean_minutes: u32,
}

#[must_use]
pub fn fleet_summary(routes: &[RoutePlan]) -> FleetSummary {
    let route_count = routes.len();
    let active_routes = routes
        .iter()
        .filter(|r| r.status == RouteStatus::Active)
        .count();
    let total_fuel_cost_cents = routes.iter().map(|r| u64::from(r.fuel_cost_cents)).sum();
    let (mean_efficiency, mean_minutes) = if route_count == 0 {
        (0.0, 0)
    } else {
        let efficiency_sum: u32 = routes.iter().map(|r| u32::from(r.efficiency)).sum();
        let minutes_sum: u32 = routes.iter().map(|r| r.estimated_minutes).sum();
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let mean_eff = f64::from(efficiency_sum) / route_count as f64;
        #[allow(clippy::cast_possible_truncation)]
        let mean_min = minutes_sum / route_count as u32;
        (mean_eff, mean_min)
    };
    FleetSummary {
        route_count,
        active_routes,
        mean_efficiency,
        total_fuel_cost_cents,
        mean_minutes,
    }
}

/// Efficiency display band: >= 90 good, >= 80 fair, otherwise poor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    Good,
    Fair,
    Poor,
}

#[must_use]
pub const fn efficiency_band(efficiency: u8) -> EfficiencyBand {
    if efficiency >= 90 {
        EfficiencyBand::Good
    } else if efficiency >= 80 {
        EfficiencyBand::Fair
    } else {
        EfficiencyBand::Poor
    }
}

/// One KPI headline card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Analytics page KPI cards (platform-wide figures, not derivable from
/// the seed slice).
#[must_use]
pub fn kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            title: "Total Users",
            value: "1,247",
            change: "+8.2%",
        },
        Kpi {
            title: "Items Recycled",
            value: "15,834",
            change: "+12.5%",
        },
        Kpi {
            title: "CO2 Saved",
            value: "2.8 tons",
            change: "+18.3%",
        },
        Kpi {
            title: "Revenue",
            value: "$24,680",
            change: "+5.7%",
        },
    ]
}

/// Overview page headline metric cards.
#[must_use]
pub fn overview_metrics() -> Vec<Kpi> {
    vec![
        Kpi {
            title: "Total Pickups Today",
            value: "47",
            change: "+12%",
        },
        Kpi {
            title: "Pending Reviews",
            value: "12",
            change: "+3",
        },
        Kpi {
            title: "Active Users",
            value: "1,247",
            change: "+8.2%",
        },
        Kpi {
            title: "Items Recycled",
            value: "2,834",
            change: "+15%",
        },
    ]
}

/// One slice of the material breakdown chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSlice {
    pub material: &'static str,
    pub share_pct: f64,
    pub weight_kg: u32,
}

#[must_use]
pub fn material_breakdown() -> Vec<MaterialSlice> {
    vec![
        MaterialSlice {
            material: "Plastic",
            share_pct: 45.3,
            weight_kg: 2_847,
        },
        MaterialSlice {
            material: "Cardboard",
            share_pct: 28.7,
            weight_kg: 1_802,
        },
        MaterialSlice {
            material: "Electronics",
            share_pct: 15.2,
            weight_kg: 956,
        },
        MaterialSlice {
            material: "Glass",
            share_pct: 10.8,
            weight_kg: 678,
        },
    ]
}

/// One row of the regional performance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalStat {
    pub region: &'static str,
    pub pickups: u32,
    pub growth: &'static str,
    pub efficiency: u8,
}

#[must_use]
pub fn regional_summary() -> Vec<RegionalStat> {
    vec![
        RegionalStat {
            region: "Downtown",
            pickups: 156,
            growth: "+12%",
            efficiency: 94,
        },
        RegionalStat {
            region: "Suburban",
            pickups: 134,
            growth: "+8%",
            efficiency: 87,
        },
        RegionalStat {
            region: "Business District",
            pickups: 98,
            growth: "+15%",
            efficiency: 91,
        },
        RegionalStat {
            region: "Residential Area",
            pickups: 87,
            growth: "+6%",
            efficiency: 83,
        },
    ]
}
