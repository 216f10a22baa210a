//! Rendering for the operations console.
//!
//! Pure view layer: reads the model immutably and draws one frame. Layout is
//! header, page body, hint footer, with toasts and overlays drawn on top.

#![allow(missing_docs)]
#![allow(clippy::cast_possible_truncation)]

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::domain::analytics::{
    efficiency_band, fleet_summary, kpis, material_breakdown, overview_metrics, regional_summary,
    top_users,
};
use crate::domain::records::StatusKind;

use super::input::{self, InputContext};
use super::model::{ConfirmAction, ConsoleModel, FocusedRecord, Overlay, Page, SettingsField};
use super::theme::{
    SemanticToken, Theme, account_status_token, driver_status_token, efficiency_band_token,
    notification_token, pickup_status_token, priority_token, review_status_token,
    route_status_token, service_state_token, tier_token,
};
use super::widgets::{cursor_mark, dollars, minutes_ago_label, percent_bar, selection_mark, truncate};

/// Draw one complete frame.
pub fn render_frame(frame: &mut Frame<'_>, model: &ConsoleModel, theme: &Theme) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, areas[0], model, theme);
    render_body(frame, areas[1], model, theme);
    render_footer(frame, areas[2], model, theme);
    render_toasts(frame, model, theme);

    match model.active_overlay {
        Some(Overlay::Help) => render_help_overlay(frame, model, theme),
        Some(Overlay::Detail) => render_detail_overlay(frame, model, theme),
        Some(Overlay::Confirmation(action)) => {
            render_confirmation_overlay(frame, model, theme, action);
        }
        None => {}
    }
}

// ──────────────────── chrome ────────────────────

fn render_header(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let mut spans = Vec::new();
    for n in 1..=7u8 {
        let Some(page) = Page::from_number(n) else {
            continue;
        };
        let label = format!(" {n} {} ", page.title());
        let style = if page == model.page {
            theme.emphasis(SemanticToken::Accent)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(label, style));
    }
    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recycle Ops Console"),
    );
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let line = if model.search_active {
        let query = model.active_query().unwrap_or("");
        Line::from(vec![
            Span::styled("search: ", theme.style(SemanticToken::Accent)),
            Span::raw(query.to_string()),
            Span::styled("▌", theme.style(SemanticToken::Accent)),
            Span::styled("  Esc/Enter to finish", theme.muted()),
        ])
    } else {
        let hint = match model.page {
            Page::Overview | Page::Analytics => "1-7 pages · ? help · q quit",
            Page::Pickups => "j/k move · f filter · / search · s/c/d status · ? help",
            Page::Reviews => "j/k move · Space select · o/r row · A/R bulk · ? help",
            Page::Routes => "j/k move · f filter · s start · o optimize · ? help",
            Page::Users => "j/k move · f status · t tier · A/S bulk · ? help",
            Page::Settings => "j/k field · h/l adjust · s save · r reset · ? help",
        };
        Line::from(Span::styled(hint, theme.muted()))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_toasts(frame: &mut Frame<'_>, model: &ConsoleModel, theme: &Theme) {
    if model.notifications.is_empty() {
        return;
    }
    let area = frame.area();
    let width = area.width.min(44);
    let x = area.width.saturating_sub(width);
    for (slot, notification) in model.notifications.iter().rev().enumerate() {
        let y = 3 + (slot as u16) * 2;
        if y + 2 > area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 2);
        let style = theme.style(notification_token(notification.level));
        let lines = vec![
            Line::from(Span::styled(
                truncate(&notification.title, width as usize),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&notification.detail, width as usize),
                theme.muted(),
            )),
        ];
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines), rect);
    }
}

// ──────────────────── page bodies ────────────────────

fn render_body(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    match model.page {
        Page::Overview => render_overview(frame, area, model, theme),
        Page::Pickups => render_pickups(frame, area, model, theme),
        Page::Reviews => render_reviews(frame, area, model, theme),
        Page::Routes => render_routes(frame, area, model, theme),
        Page::Users => render_users(frame, area, model, theme),
        Page::Analytics => render_analytics(frame, area, model, theme),
        Page::Settings => render_settings(frame, area, model, theme),
    }
}

fn render_overview(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    // Headline metric cards.
    let metrics = overview_metrics();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, metrics.len() as u32);
            metrics.len()
        ])
        .split(rows[0]);
    for (metric, slot) in metrics.iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", metric.value, metric.change),
                theme.emphasis(SemanticToken::Accent),
            )),
            Line::from(Span::styled(metric.title, theme.muted())),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *slot);
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    // Recent activity feed.
    let mut activity_lines = Vec::new();
    for event in &model.activity {
        activity_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", minutes_ago_label(event.minutes_ago)),
                theme.muted(),
            ),
            Span::raw(format!("{} — {}", event.title, event.description)),
        ]));
    }
    let activity = Paragraph::new(activity_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Recent Activity"));
    frame.render_widget(activity, panes[0]);

    // Subsystem status board.
    let mut service_lines = Vec::new();
    for service in &model.services {
        service_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", service.state.label()),
                theme.style(service_state_token(service.state)),
            ),
            Span::raw(service.name.clone()),
        ]));
    }
    let services = Paragraph::new(service_lines)
        .block(Block::default().borders(Borders::ALL).title("System Status"));
    frame.render_widget(services, panes[1]);
}

/// Filter/selection strip shown above every table.
fn filter_line(
    status_label: &str,
    extra: Option<&str>,
    query: &str,
    visible: usize,
    selected: usize,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled("filter: ", theme.muted()),
        Span::styled(status_label.to_string(), theme.style(SemanticToken::Accent)),
    ];
    if let Some(extra) = extra {
        spans.push(Span::styled(" · tier: ", theme.muted()));
        spans.push(Span::styled(
            extra.to_string(),
            theme.style(SemanticToken::Accent),
        ));
    }
    if !query.is_empty() {
        spans.push(Span::styled(" · search: ", theme.muted()));
        spans.push(Span::raw(format!("\"{query}\"")));
    }
    spans.push(Span::styled(
        format!(" · {visible} shown"),
        theme.muted(),
    ));
    if selected > 0 {
        spans.push(Span::styled(
            format!(" · {selected} selected"),
            theme.style(SemanticToken::Warning),
        ));
    }
    Line::from(spans)
}

/// Explicit empty state shown when a filter leaves no visible rows.
fn render_empty_state(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    message: &'static str,
    theme: &Theme,
) {
    let body = Paragraph::new(Line::from(Span::styled(message, theme.muted())))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body, area);
}

fn render_pickups(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let view = &model.pickups;
    frame.render_widget(
        Paragraph::new(filter_line(
            view.criteria.status.label(),
            None,
            &view.criteria.query,
            view.visible_len(),
            view.selection.len(),
            theme,
        )),
        rows_area[0],
    );

    let visible = view.visible_indices();
    if visible.is_empty() {
        render_empty_state(
            frame,
            rows_area[1],
            "Pickups",
            "No pickups match the current filter",
            theme,
        );
        return;
    }
    let mut table_rows = Vec::with_capacity(visible.len());
    for (row_index, record_index) in visible.iter().enumerate() {
        let pickup = &view.records()[*record_index];
        let under_cursor = row_index == view.cursor();
        let row = Row::new(vec![
            Cell::from(cursor_mark(under_cursor)),
            Cell::from(selection_mark(view.selection.is_selected(&pickup.id))),
            Cell::from(pickup.id.clone()),
            Cell::from(pickup.customer.clone()),
            Cell::from(pickup.material.clone()),
            Cell::from(Span::styled(
                pickup.status.label(),
                theme.style(pickup_status_token(pickup.status)),
            )),
            Cell::from(Span::styled(
                pickup.priority.label(),
                theme.style(priority_token(pickup.priority)),
            )),
            Cell::from(pickup.driver.clone()),
        ]);
        table_rows.push(if under_cursor {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        });
    }
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["", "", "ID", "Customer", "Material", "Status", "Prio", "Driver"]))
    .block(Block::default().borders(Borders::ALL).title("Pickups"));
    frame.render_widget(table, rows_area[1]);
}

fn render_reviews(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let view = &model.reviews;
    frame.render_widget(
        Paragraph::new(filter_line(
            view.criteria.status.label(),
            None,
            &view.criteria.query,
            view.visible_len(),
            view.selection.len(),
            theme,
        )),
        rows_area[0],
    );

    let visible = view.visible_indices();
    if visible.is_empty() {
        render_empty_state(
            frame,
            rows_area[1],
            "Item Reviews",
            "No submissions match the current filter",
            theme,
        );
        return;
    }
    let mut table_rows = Vec::with_capacity(visible.len());
    for (row_index, record_index) in visible.iter().enumerate() {
        let submission = &view.records()[*record_index];
        let under_cursor = row_index == view.cursor();
        let row = Row::new(vec![
            Cell::from(cursor_mark(under_cursor)),
            Cell::from(selection_mark(view.selection.is_selected(&submission.id))),
            Cell::from(submission.id.clone()),
            Cell::from(submission.user.clone()),
            Cell::from(submission.material.clone()),
            Cell::from(submission.quantity.clone()),
            Cell::from(Span::styled(
                submission.status.label(),
                theme.style(review_status_token(submission.status)),
            )),
            Cell::from(format!("{:.1} kg", submission.estimated_weight_kg)),
        ]);
        table_rows.push(if under_cursor {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        });
    }
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .header(Row::new(vec!["", "", "ID", "User", "Material", "Quantity", "Status", "Weight"]))
    .block(Block::default().borders(Borders::ALL).title("Item Reviews"));
    frame.render_widget(table, rows_area[1]);
}

fn render_routes(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let summary = fleet_summary(model.routes.records());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "{} routes · {} active · mean efficiency {:.1}% · fuel {}",
                summary.route_count,
                summary.active_routes,
                summary.mean_efficiency,
                dollars(summary.total_fuel_cost_cents),
            ),
            theme.muted(),
        ))),
        rows_area[0],
    );

    // Driver availability strip.
    let mut driver_spans = vec![Span::styled("drivers: ", theme.muted())];
    for driver in &model.drivers {
        driver_spans.push(Span::styled(
            format!("{} ({}) ", driver.name, driver.status.label()),
            theme.style(driver_status_token(driver.status)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(driver_spans)), rows_area[1]);

    let view = &model.routes;
    frame.render_widget(
        Paragraph::new(filter_line(
            view.criteria.status.label(),
            None,
            &view.criteria.query,
            view.visible_len(),
            view.selection.len(),
            theme,
        )),
        rows_area[2],
    );

    let visible = view.visible_indices();
    if visible.is_empty() {
        render_empty_state(
            frame,
            rows_area[3],
            "Route Planning",
            "No routes match the current filter",
            theme,
        );
        return;
    }
    let mut table_rows = Vec::with_capacity(visible.len());
    for (row_index, record_index) in visible.iter().enumerate() {
        let route = &view.records()[*record_index];
        let under_cursor = row_index == view.cursor();
        let band = efficiency_band(route.efficiency);
        let row = Row::new(vec![
            Cell::from(cursor_mark(under_cursor)),
            Cell::from(route.id.clone()),
            Cell::from(route.name.clone()),
            Cell::from(route.driver.clone()),
            Cell::from(Span::styled(
                route.status.label(),
                theme.style(route_status_token(route.status)),
            )),
            Cell::from(format!("{} stops", route.pickups)),
            Cell::from(format!("{:.1} km", route.distance_km)),
            Cell::from(Span::styled(
                format!("{}% {}", route.efficiency, percent_bar(f64::from(route.efficiency), 8)),
                theme.style(efficiency_band_token(band)),
            )),
        ]);
        table_rows.push(if under_cursor {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        });
    }
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(24),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Min(12),
        ],
    )
    .header(Row::new(vec!["", "ID", "Route", "Driver", "Status", "Stops", "Dist", "Efficiency"]))
    .block(Block::default().borders(Borders::ALL).title("Route Planning"));
    frame.render_widget(table, rows_area[3]);
}

fn render_users(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let view = &model.users;
    frame.render_widget(
        Paragraph::new(filter_line(
            view.criteria.status.label(),
            Some(view.extra.0.label()),
            &view.criteria.query,
            view.visible_len(),
            view.selection.len(),
            theme,
        )),
        rows_area[0],
    );

    let visible = view.visible_indices();
    if visible.is_empty() {
        render_empty_state(
            frame,
            rows_area[1],
            "User Management",
            "No users match the current filter",
            theme,
        );
        return;
    }
    let mut table_rows = Vec::with_capacity(visible.len());
    for (row_index, record_index) in visible.iter().enumerate() {
        let user = &view.records()[*record_index];
        let under_cursor = row_index == view.cursor();
        let row = Row::new(vec![
            Cell::from(cursor_mark(under_cursor)),
            Cell::from(selection_mark(view.selection.is_selected(&user.id))),
            Cell::from(user.id.clone()),
            Cell::from(user.name.clone()),
            Cell::from(user.email.clone()),
            Cell::from(Span::styled(
                user.status.label(),
                theme.style(account_status_token(user.status)),
            )),
            Cell::from(Span::styled(
                user.tier.label(),
                theme.style(tier_token(user.tier)),
            )),
            Cell::from(format!("{} pts", user.reward_points)),
        ]);
        table_rows.push(if under_cursor {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        });
    }
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(9),
        ],
    )
    .header(Row::new(vec!["", "", "ID", "Name", "Email", "Status", "Tier", "Points"]))
    .block(Block::default().borders(Borders::ALL).title("User Management"));
    frame.render_widget(table, rows_area[1]);
}

fn render_analytics(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let cards_data = kpis();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, cards_data.len() as u32);
            cards_data.len()
        ])
        .split(rows[0]);
    for (kpi, slot) in cards_data.iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", kpi.value, kpi.change),
                theme.emphasis(SemanticToken::Success),
            )),
            Line::from(Span::styled(kpi.title, theme.muted())),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *slot);
    }

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    // Material breakdown with share bars.
    let mut material_lines = Vec::new();
    for slice in material_breakdown() {
        material_lines.push(Line::from(vec![
            Span::raw(format!("{:<12}", slice.material)),
            Span::styled(
                percent_bar(slice.share_pct, 16),
                theme.style(SemanticToken::Accent),
            ),
            Span::styled(
                format!(" {:>5.1}% · {} kg", slice.share_pct, slice.weight_kg),
                theme.muted(),
            ),
        ]));
    }
    let materials = Paragraph::new(material_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Material Breakdown"),
    );
    frame.render_widget(materials, panes[0]);

    // Regional table.
    let mut regional_lines = Vec::new();
    for stat in regional_summary() {
        regional_lines.push(Line::from(vec![
            Span::raw(format!("{:<18}", stat.region)),
            Span::raw(format!("{:>4} pickups ", stat.pickups)),
            Span::styled(format!("{:>5} ", stat.growth), theme.style(SemanticToken::Success)),
            Span::styled(
                format!("{}%", stat.efficiency),
                theme.style(efficiency_band_token(efficiency_band(stat.efficiency))),
            ),
        ]));
    }
    let regional = Paragraph::new(regional_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Regional Performance"),
    );
    frame.render_widget(regional, panes[1]);

    // Top recyclers by reward points.
    let mut top_lines = Vec::new();
    for (rank, user) in top_users(model.users.records(), 5).iter().enumerate() {
        top_lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", rank + 1), theme.muted()),
            Span::raw(format!("{:<16}", user.name)),
            Span::styled(
                format!("{:>6} pts ", user.reward_points),
                theme.style(SemanticToken::Success),
            ),
            Span::styled(user.tier.label(), theme.style(tier_token(user.tier))),
        ]));
    }
    let top = Paragraph::new(top_lines)
        .block(Block::default().borders(Borders::ALL).title("Top Recyclers"));
    frame.render_widget(top, panes[2]);
}

fn render_settings(frame: &mut Frame<'_>, area: Rect, model: &ConsoleModel, theme: &Theme) {
    let mut lines = Vec::with_capacity(SettingsField::ALL.len() + 2);
    for (index, field) in SettingsField::ALL.iter().enumerate() {
        let under_cursor = index == model.settings_cursor;
        let value = settings_value(model, *field);
        let label_style = if under_cursor {
            theme.emphasis(SemanticToken::Accent)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", cursor_mark(under_cursor))),
            Span::styled(format!("{:<24}", field.label()), label_style),
            Span::raw(value),
        ]));
    }
    lines.push(Line::default());
    if model.settings_dirty() {
        lines.push(Line::from(Span::styled(
            "Unsaved changes · s to save, r to reset",
            theme.style(SemanticToken::Warning),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Draft matches the effective configuration",
            theme.muted(),
        )));
    }
    let settings = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    frame.render_widget(settings, area);
}

fn settings_value(model: &ConsoleModel, field: SettingsField) -> String {
    let draft = &model.draft;
    match field {
        SettingsField::RefreshInterval => format!("{} ms", draft.console.refresh_interval_ms),
        SettingsField::StartPage => Page::from_number(draft.console.start_page)
            .map_or_else(|| draft.console.start_page.to_string(), |p| {
                format!("{} ({})", draft.console.start_page, p.title())
            }),
        SettingsField::HighContrast => on_off(draft.display.high_contrast),
        SettingsField::OptimizeFor => draft.routing.optimize_for.label().to_string(),
        SettingsField::MaxPickupsPerRoute => draft.routing.max_pickups_per_route.to_string(),
        SettingsField::AvoidHighways => on_off(draft.routing.avoid_highways),
    }
}

fn on_off(value: bool) -> String {
    if value { "on".to_string() } else { "off".to_string() }
}

// ──────────────────── overlays ────────────────────

/// Centered overlay rect sized as a percentage of the frame.
fn centered_rect(pct_x: u16, pct_y: u16, container: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - pct_y) / 2),
            Constraint::Percentage(pct_y),
            Constraint::Percentage((100 - pct_y) / 2),
        ])
        .split(container);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - pct_x) / 2),
            Constraint::Percentage(pct_x),
            Constraint::Percentage((100 - pct_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn render_help_overlay(frame: &mut Frame<'_>, model: &ConsoleModel, theme: &Theme) {
    let help = input::contextual_help(InputContext {
        page: model.page,
        active_overlay: None,
        search_active: model.search_active,
    });
    let mut lines = vec![
        Line::from(Span::styled(help.page_hint, theme.muted())),
        Line::default(),
    ];
    for binding in &help.bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", binding.keys),
                theme.style(SemanticToken::Accent),
            ),
            Span::raw(binding.description),
        ]));
    }
    let rect = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(help.title)),
        rect,
    );
}

fn render_detail_overlay(frame: &mut Frame<'_>, model: &ConsoleModel, theme: &Theme) {
    let Some(focused) = &model.focused else {
        return;
    };
    let (title, lines) = detail_lines(focused, model, theme);
    let rect = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        rect,
    );
}

fn detail_field(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), theme.muted()),
        Span::raw(value),
    ])
}

fn detail_lines(
    focused: &FocusedRecord,
    model: &ConsoleModel,
    theme: &Theme,
) -> (String, Vec<Line<'static>>) {
    match focused {
        FocusedRecord::Pickup(pickup) => (
            format!("Pickup {}", pickup.id),
            vec![
                detail_field("Customer", pickup.customer.clone(), theme),
                detail_field("Phone", pickup.phone.clone(), theme),
                detail_field("Address", pickup.address.clone(), theme),
                detail_field(
                    "Material",
                    format!("{} ({})", pickup.material, pickup.quantity),
                    theme,
                ),
                detail_field(
                    "Scheduled",
                    pickup.scheduled_at.format("%Y-%m-%d %H:%M").to_string(),
                    theme,
                ),
                Line::from(vec![
                    Span::styled(format!("{:<16}", "Status"), theme.muted()),
                    Span::styled(
                        pickup.status.label(),
                        theme.style(pickup_status_token(pickup.status)),
                    ),
                ]),
                detail_field(
                    "Assignment",
                    format!("{} · {}", pickup.driver, pickup.truck),
                    theme,
                ),
                detail_field("Notes", pickup.notes.clone(), theme),
            ],
        ),
        FocusedRecord::Submission(submission) => (
            format!("Submission {}", submission.id),
            vec![
                detail_field(
                    "User",
                    format!("{} <{}>", submission.user, submission.email),
                    theme,
                ),
                detail_field("Location", submission.location.clone(), theme),
                detail_field(
                    "Material",
                    format!("{} ({})", submission.material, submission.quantity),
                    theme,
                ),
                detail_field(
                    "Submitted",
                    submission.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
                    theme,
                ),
                Line::from(vec![
                    Span::styled(format!("{:<16}", "Status"), theme.muted()),
                    Span::styled(
                        submission.status.label(),
                        theme.style(review_status_token(submission.status)),
                    ),
                ]),
                detail_field(
                    "Evidence",
                    format!(
                        "{} photos · est. {:.1} kg",
                        submission.image_count, submission.estimated_weight_kg
                    ),
                    theme,
                ),
                detail_field("Notes", submission.notes.clone(), theme),
            ],
        ),
        FocusedRecord::Route(route) => {
            let band = efficiency_band(route.efficiency);
            let mut lines = vec![
                detail_field("Name", route.name.clone(), theme),
                detail_field(
                    "Assignment",
                    format!("{} · {}", route.driver, route.truck),
                    theme,
                ),
                Line::from(vec![
                    Span::styled(format!("{:<16}", "Status"), theme.muted()),
                    Span::styled(
                        route.status.label(),
                        theme.style(route_status_token(route.status)),
                    ),
                ]),
                detail_field(
                    "Plan",
                    format!(
                        "{} stops · {:.1} km · {} min",
                        route.pickups, route.distance_km, route.estimated_minutes
                    ),
                    theme,
                ),
                detail_field("Fuel cost", dollars(u64::from(route.fuel_cost_cents)), theme),
                Line::from(vec![
                    Span::styled(format!("{:<16}", "Efficiency"), theme.muted()),
                    Span::styled(
                        format!(
                            "{}% {}",
                            route.efficiency,
                            percent_bar(f64::from(route.efficiency), 12)
                        ),
                        theme.style(efficiency_band_token(band)),
                    ),
                ]),
                Line::default(),
                Line::from(Span::styled("Pickup points", theme.muted())),
            ];
            for point in &model.pickup_points {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {:<6}{:<22}", point.id, point.address)),
                    Span::styled(point.kind.label(), theme.muted()),
                ]));
            }
            (format!("Route {}", route.id), lines)
        }
        FocusedRecord::User(user) => {
            let mut lines = vec![
                detail_field("Name", user.name.clone(), theme),
                detail_field(
                    "Contact",
                    format!("{} · {}", user.email, user.phone),
                    theme,
                ),
                detail_field("Joined", user.joined.format("%Y-%m-%d").to_string(), theme),
                Line::from(vec![
                    Span::styled(format!("{:<16}", "Status"), theme.muted()),
                    Span::styled(
                        user.status.label(),
                        theme.style(account_status_token(user.status)),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(format!("{:<16}", "Tier"), theme.muted()),
                    Span::styled(user.tier.label(), theme.style(tier_token(user.tier))),
                ]),
                detail_field(
                    "Totals",
                    format!(
                        "{} pickups · {:.1} kg recycled · {} pts",
                        user.total_pickups, user.total_recycled_kg, user.reward_points
                    ),
                    theme,
                ),
            ];
            let history: Vec<_> = model
                .transactions
                .iter()
                .filter(|t| t.user_id == user.id)
                .collect();
            if !history.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Reward history", theme.muted())));
                for transaction in history {
                    let token = if transaction.points >= 0 {
                        SemanticToken::Success
                    } else {
                        SemanticToken::Warning
                    };
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {:>+5} pts  ", transaction.points), theme.style(token)),
                        Span::raw(transaction.description.clone()),
                    ]));
                }
            }
            (format!("User {}", user.id), lines)
        }
    }
}

fn render_confirmation_overlay(
    frame: &mut Frame<'_>,
    model: &ConsoleModel,
    theme: &Theme,
    action: ConfirmAction,
) {
    let count = model.selection_count_for(action);
    let noun = match action.page() {
        Page::Users => "user",
        _ => "submission",
    };
    let plural = if count == 1 { String::new() } else { "s".to_string() };
    let lines = vec![
        Line::from(Span::raw(format!(
            "{} {count} {noun}{plural}?",
            capitalize(action.verb()),
        ))),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter/y", theme.style(SemanticToken::Success)),
            Span::raw(" confirm   "),
            Span::styled("Esc/n", theme.style(SemanticToken::Danger)),
            Span::raw(" cancel"),
        ]),
    ];
    let rect = centered_rect(44, 24, frame.area());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Confirm")),
        rect,
    );
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ──────────────────── tests ────────────────────
