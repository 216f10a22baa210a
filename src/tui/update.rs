//! Pure update function for the Elm-style operations console.
//!
//! `update()` takes the current model and a message, mutates the model, and
//! returns a command describing any side-effects the runtime should execute.
//!
//! **Design invariant:** this module performs zero I/O. All effects are
//! described as [`ConsoleCmd`] values. Commit actions raise toasts; the only
//! real side-effect in the console is persisting settings.

#![allow(clippy::too_many_lines)]

use crossterm::event::KeyEventKind;

use super::input::{InputAction, InputContext};
use super::model::{
    ConfirmAction, ConsoleCmd, ConsoleModel, ConsoleMsg, FocusedRecord, NotificationLevel, Overlay,
    Page,
};
use crate::domain::listview::TierFilter;

/// Apply a message to the model and return the next command for the runtime.
///
/// This is the core state machine of the console. Every state transition
/// goes through this function, making the console deterministic and testable.
pub fn update(model: &mut ConsoleModel, msg: ConsoleMsg) -> ConsoleCmd {
    match msg {
        ConsoleMsg::Tick => {
            model.tick = model.tick.wrapping_add(1);
            ConsoleCmd::None
        }

        ConsoleMsg::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return ConsoleCmd::None;
            }
            // Centralized precedence: search capture → overlay → global → page.
            let context = InputContext {
                page: model.page,
                active_overlay: model.active_overlay,
                search_active: model.search_active,
            };
            let resolution = super::input::resolve_key_event(&key, context);
            match resolution.action {
                Some(action) => apply_input_action(model, action),
                None => ConsoleCmd::None,
            }
        }

        ConsoleMsg::Resize { cols, rows } => {
            model.terminal_size = (cols, rows);
            ConsoleCmd::None
        }

        ConsoleMsg::NotificationExpired(id) => {
            model.expire_notification(id);
            ConsoleCmd::None
        }

        ConsoleMsg::SettingsSaved { ok, detail } => {
            if ok {
                model.config = model.draft.clone();
                toast(model, NotificationLevel::Success, "Settings saved", detail)
            } else {
                toast(model, NotificationLevel::Error, "Settings not saved", detail)
            }
        }
    }
}

/// Push a toast and schedule its auto-dismiss.
fn toast(
    model: &mut ConsoleModel,
    level: NotificationLevel,
    title: impl Into<String>,
    detail: impl Into<String>,
) -> ConsoleCmd {
    let id = model.push_notification(level, title, detail);
    ConsoleCmd::ScheduleToastExpiry {
        id,
        after: model.toast_ttl(),
    }
}

/// Translate a resolved [`InputAction`] into model mutations and a command.
fn apply_input_action(model: &mut ConsoleModel, action: InputAction) -> ConsoleCmd {
    match action {
        InputAction::Quit => {
            model.quit = true;
            ConsoleCmd::Quit
        }
        InputAction::BackOrQuit => {
            if model.navigate_back() {
                ConsoleCmd::None
            } else {
                model.quit = true;
                ConsoleCmd::Quit
            }
        }
        InputAction::CloseOverlay => {
            model.close_overlay();
            ConsoleCmd::None
        }
        InputAction::ToggleHelp => {
            model.active_overlay = Some(Overlay::Help);
            ConsoleCmd::None
        }
        InputAction::Navigate(page) => {
            model.navigate_to(page);
            ConsoleCmd::None
        }
        InputAction::NavigatePrev => {
            let prev = model.page.prev();
            model.navigate_to(prev);
            ConsoleCmd::None
        }
        InputAction::NavigateNext => {
            let next = model.page.next();
            model.navigate_to(next);
            ConsoleCmd::None
        }

        // ── cursor movement ──
        InputAction::CursorUp => {
            match model.page {
                Page::Pickups => {
                    model.pickups.cursor_up();
                }
                Page::Reviews => {
                    model.reviews.cursor_up();
                }
                Page::Routes => {
                    model.routes.cursor_up();
                }
                Page::Users => {
                    model.users.cursor_up();
                }
                Page::Settings => {
                    model.settings_cursor_up();
                }
                Page::Overview | Page::Analytics => {}
            }
            ConsoleCmd::None
        }
        InputAction::CursorDown => {
            match model.page {
                Page::Pickups => {
                    model.pickups.cursor_down();
                }
                Page::Reviews => {
                    model.reviews.cursor_down();
                }
                Page::Routes => {
                    model.routes.cursor_down();
                }
                Page::Users => {
                    model.users.cursor_down();
                }
                Page::Settings => {
                    model.settings_cursor_down();
                }
                Page::Overview | Page::Analytics => {}
            }
            ConsoleCmd::None
        }

        // ── filters ──
        InputAction::CycleStatusFilter => {
            match model.page {
                Page::Pickups => model.pickups.cycle_status(),
                Page::Reviews => model.reviews.cycle_status(),
                Page::Routes => model.routes.cycle_status(),
                Page::Users => model.users.cycle_status(),
                _ => {}
            }
            ConsoleCmd::None
        }
        InputAction::CycleTierFilter => {
            model.users.extra = TierFilter(model.users.extra.0.cycle());
            model.users.clamp_cursor();
            ConsoleCmd::None
        }

        // ── search ──
        InputAction::BeginSearch => {
            model.search_active = true;
            ConsoleCmd::None
        }
        InputAction::SearchChar(c) => {
            model.search_push(c);
            ConsoleCmd::None
        }
        InputAction::SearchBackspace => {
            model.search_pop();
            ConsoleCmd::None
        }
        InputAction::EndSearch => {
            model.search_active = false;
            ConsoleCmd::None
        }

        // ── selection ──
        InputAction::ToggleSelect => {
            match model.page {
                Page::Pickups => {
                    model.pickups.toggle_current();
                }
                Page::Reviews => {
                    model.reviews.toggle_current();
                }
                Page::Routes => {
                    model.routes.toggle_current();
                }
                Page::Users => {
                    model.users.toggle_current();
                }
                _ => {}
            }
            ConsoleCmd::None
        }
        InputAction::SelectAllVisible => {
            match model.page {
                Page::Pickups => model.pickups.select_all_visible(),
                Page::Reviews => model.reviews.select_all_visible(),
                Page::Routes => model.routes.select_all_visible(),
                Page::Users => model.users.select_all_visible(),
                _ => {}
            }
            ConsoleCmd::None
        }
        InputAction::ClearSelection => {
            match model.page {
                Page::Pickups => model.pickups.clear_selection(),
                Page::Reviews => model.reviews.clear_selection(),
                Page::Routes => model.routes.clear_selection(),
                Page::Users => model.users.clear_selection(),
                _ => {}
            }
            ConsoleCmd::None
        }

        // ── detail dialog ──
        InputAction::OpenDetail => {
            let snapshot = match model.page {
                Page::Pickups => model.pickups.current().cloned().map(FocusedRecord::Pickup),
                Page::Reviews => model
                    .reviews
                    .current()
                    .cloned()
                    .map(FocusedRecord::Submission),
                Page::Routes => model.routes.current().cloned().map(FocusedRecord::Route),
                Page::Users => model.users.current().cloned().map(FocusedRecord::User),
                _ => None,
            };
            if let Some(record) = snapshot {
                model.open_detail(record);
            }
            ConsoleCmd::None
        }

        // ── pickup status actions ──
        InputAction::StartPickup => match model.pickups.current().cloned() {
            Some(pickup) => toast(
                model,
                NotificationLevel::Info,
                format!("Pickup {} started", pickup.id),
                format!("{} is now in progress", pickup.customer),
            ),
            None => ConsoleCmd::None,
        },
        InputAction::CompletePickup => match model.pickups.current().cloned() {
            Some(pickup) => toast(
                model,
                NotificationLevel::Success,
                format!("Pickup {} completed", pickup.id),
                format!("{} · {}", pickup.customer, pickup.address),
            ),
            None => ConsoleCmd::None,
        },
        InputAction::CancelPickup => match model.pickups.current().cloned() {
            Some(pickup) => toast(
                model,
                NotificationLevel::Info,
                format!("Pickup {} cancelled", pickup.id),
                format!("{} has been notified", pickup.customer),
            ),
            None => ConsoleCmd::None,
        },

        // ── review actions ──
        InputAction::ApproveCurrent => match model.reviews.current().cloned() {
            Some(submission) => toast(
                model,
                NotificationLevel::Success,
                format!("Submission {} approved", submission.id),
                format!("{} · {}", submission.user, submission.material),
            ),
            None => ConsoleCmd::None,
        },
        InputAction::RejectCurrent => match model.reviews.current().cloned() {
            Some(submission) => toast(
                model,
                NotificationLevel::Info,
                format!("Submission {} rejected", submission.id),
                format!("{} · {}", submission.user, submission.material),
            ),
            None => ConsoleCmd::None,
        },

        // ── bulk commit flow ──
        InputAction::RequestConfirm(confirm) => {
            if model.selection_count_for(confirm) == 0 {
                toast(
                    model,
                    NotificationLevel::Info,
                    "No rows selected",
                    "Select rows with Space or a first",
                )
            } else {
                model.active_overlay = Some(Overlay::Confirmation(confirm));
                ConsoleCmd::None
            }
        }
        InputAction::Confirm(confirm) => commit_confirmed(model, confirm),

        // ── route actions ──
        InputAction::StartRoute => match model.routes.current().cloned() {
            Some(route) => toast(
                model,
                NotificationLevel::Success,
                format!("Route {} started", route.id),
                format!("{} dispatched on {}", route.driver, route.name),
            ),
            None => ConsoleCmd::None,
        },
        InputAction::OptimizeRoute => match model.routes.current().cloned() {
            Some(route) => {
                let routing = &model.config.routing;
                let detail = format!(
                    "Optimizing for {}, max {} pickups{}",
                    routing.optimize_for.label(),
                    routing.max_pickups_per_route,
                    if routing.avoid_highways {
                        ", avoiding highways"
                    } else {
                        ""
                    },
                );
                toast(
                    model,
                    NotificationLevel::Info,
                    format!("Route {} optimization queued", route.id),
                    detail,
                )
            }
            None => ConsoleCmd::None,
        },

        // ── settings editor ──
        InputAction::SettingsIncrease => {
            model.settings_adjust(true);
            ConsoleCmd::None
        }
        InputAction::SettingsDecrease => {
            model.settings_adjust(false);
            ConsoleCmd::None
        }
        InputAction::SaveSettings => {
            if model.settings_dirty() {
                ConsoleCmd::SaveSettings(Box::new(model.draft.clone()))
            } else {
                toast(
                    model,
                    NotificationLevel::Info,
                    "No changes to save",
                    "The draft matches the effective configuration",
                )
            }
        }
        InputAction::ResetSettings => {
            model.draft = model.config.clone();
            toast(
                model,
                NotificationLevel::Info,
                "Draft reset",
                "Settings restored to the effective configuration",
            )
        }
    }
}

/// Commit a confirmed bulk action: toast, close the overlay, clear the
/// selection it targeted.
fn commit_confirmed(model: &mut ConsoleModel, confirm: ConfirmAction) -> ConsoleCmd {
    let count = model.selection_count_for(confirm);
    model.close_overlay();
    let (title, noun) = match confirm {
        ConfirmAction::ApproveSelected => ("Submissions approved", "submission"),
        ConfirmAction::RejectSelected => ("Submissions rejected", "submission"),
        ConfirmAction::ActivateSelected => ("Users activated", "user"),
        ConfirmAction::SuspendSelected => ("Users suspended", "user"),
    };
    let done = past_tense(confirm.verb());
    let detail = if count == 1 {
        format!("1 {noun} {done}")
    } else {
        format!("{count} {noun}s {done}")
    };
    match confirm.page() {
        Page::Reviews => model.reviews.clear_selection(),
        Page::Users => model.users.clear_selection(),
        _ => {}
    }
    toast(model, NotificationLevel::Success, title, detail)
}

/// "approve" → "approved", "suspend" → "suspended". Every confirm verb is
/// regular, so this suffix rule is total.
fn past_tense(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{verb}d")
    } else {
        format!("{verb}ed")
    }
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::core::config::Config;
    use crate::domain::listview::StatusFilter;
    use crate::domain::records::{AccountStatus, Tier};

    fn test_model() -> ConsoleModel {
        ConsoleModel::new(Config::default(), (100, 30))
    }

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn press(model: &mut ConsoleModel, code: KeyCode) -> ConsoleCmd {
        update(model, ConsoleMsg::Key(make_key(code)))
    }

    // ── exit keys ──

    #[test]
    fn quit_on_q_key() {
        let mut model = test_model();
        let cmd = press(&mut model, KeyCode::Char('q'));
        assert!(model.quit);
        assert_eq!(cmd, ConsoleCmd::Quit);
    }

    #[test]
    fn ctrl_c_quits_even_with_overlay_active() {
        let mut model = test_model();
        model.active_overlay = Some(Overlay::Help);
        let cmd = update(&mut model, ConsoleMsg::Key(make_key_ctrl(KeyCode::Char('c'))));
        assert!(model.quit);
        assert_eq!(cmd, ConsoleCmd::Quit);
    }

    #[test]
    fn esc_cascade_back_then_quit() {
        let mut model = test_model();
        model.navigate_to(Page::Pickups);
        model.navigate_to(Page::Users);

        press(&mut model, KeyCode::Esc);
        assert_eq!(model.page, Page::Pickups);
        assert!(!model.quit);

        press(&mut model, KeyCode::Esc);
        assert_eq!(model.page, Page::Overview);
        assert!(!model.quit);

        let cmd = press(&mut model, KeyCode::Esc);
        assert!(model.quit);
        assert_eq!(cmd, ConsoleCmd::Quit);
    }

    // ── navigation ──

    #[test]
    fn number_keys_navigate_to_pages() {
        let mut model = test_model();
        for (key, expected) in [
            ('2', Page::Pickups),
            ('3', Page::Reviews),
            ('4', Page::Routes),
            ('5', Page::Users),
            ('6', Page::Analytics),
            ('7', Page::Settings),
        ] {
            model.page = Page::Overview;
            model.page_history.clear();
            press(&mut model, KeyCode::Char(key));
            assert_eq!(model.page, expected, "key '{key}'");
        }
    }

    #[test]
    fn bracket_keys_wrap_around() {
        let mut model = test_model();
        press(&mut model, KeyCode::Char('['));
        assert_eq!(model.page, Page::Settings);

        press(&mut model, KeyCode::Char(']'));
        assert_eq!(model.page, Page::Overview);
    }

    #[test]
    fn navigation_leaves_search_mode() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char('/'));
        assert!(model.search_active);
        // Esc ends search capture first; the next Esc navigates back.
        press(&mut model, KeyCode::Esc);
        assert!(!model.search_active);
        assert_eq!(model.page, Page::Users);
    }

    // ── overlays ──

    #[test]
    fn question_mark_toggles_help_overlay() {
        let mut model = test_model();
        press(&mut model, KeyCode::Char('?'));
        assert_eq!(model.active_overlay, Some(Overlay::Help));
        press(&mut model, KeyCode::Char('?'));
        assert_eq!(model.active_overlay, None);
    }

    #[test]
    fn overlay_consumes_navigation_keys() {
        let mut model = test_model();
        model.active_overlay = Some(Overlay::Help);
        press(&mut model, KeyCode::Char('3'));
        assert_eq!(model.page, Page::Overview);
        assert!(model.active_overlay.is_some());
    }

    // ── cursor and filters ──

    #[test]
    fn j_k_move_pickup_cursor() {
        let mut model = test_model();
        model.navigate_to(Page::Pickups);
        press(&mut model, KeyCode::Char('j'));
        assert_eq!(model.pickups.cursor(), 1);
        press(&mut model, KeyCode::Char('k'));
        assert_eq!(model.pickups.cursor(), 0);
    }

    #[test]
    fn f_cycles_status_filter_on_active_page() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char('f'));
        assert_eq!(
            model.users.criteria.status,
            StatusFilter::Only(AccountStatus::Active)
        );
        // Other pages untouched.
        assert_eq!(model.pickups.criteria.status, StatusFilter::All);
    }

    #[test]
    fn t_cycles_tier_filter_on_users_page() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char('t'));
        assert_eq!(model.users.extra.0, StatusFilter::Only(Tier::Bronze));
        press(&mut model, KeyCode::Char('t'));
        assert_eq!(model.users.extra.0, StatusFilter::Only(Tier::Silver));
    }

    // ── search ──

    #[test]
    fn search_flow_edits_query_and_filters_rows() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char('/'));
        for c in "sarah".chars() {
            press(&mut model, KeyCode::Char(c));
        }
        press(&mut model, KeyCode::Enter);
        assert!(!model.search_active);
        assert_eq!(model.users.visible_ids(), vec!["U002".to_string()]);
    }

    #[test]
    fn search_captures_global_keys() {
        let mut model = test_model();
        model.navigate_to(Page::Pickups);
        press(&mut model, KeyCode::Char('/'));
        press(&mut model, KeyCode::Char('q'));
        assert!(!model.quit);
        assert_eq!(model.pickups.criteria.query, "q");
    }

    // ── selection ──

    #[test]
    fn space_toggles_and_a_selects_all_visible() {
        let mut model = test_model();
        model.navigate_to(Page::Reviews);
        press(&mut model, KeyCode::Char(' '));
        assert!(model.reviews.selection.is_selected("RV001"));

        press(&mut model, KeyCode::Char('a'));
        assert_eq!(model.reviews.selection.len(), 3);

        press(&mut model, KeyCode::Char('x'));
        assert!(model.reviews.selection.is_empty());
    }

    // ── detail dialog ──

    #[test]
    fn enter_opens_detail_for_cursor_row() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char('j'));
        press(&mut model, KeyCode::Enter);
        assert_eq!(model.active_overlay, Some(Overlay::Detail));
        assert_eq!(model.focused.as_ref().map(FocusedRecord::id), Some("U002"));

        press(&mut model, KeyCode::Esc);
        assert_eq!(model.active_overlay, None);
        assert!(model.focused.is_none());
    }

    #[test]
    fn enter_on_empty_view_is_noop() {
        let mut model = test_model();
        model.navigate_to(Page::Pickups);
        model.pickups.set_query("zzz-no-match");
        press(&mut model, KeyCode::Enter);
        assert_eq!(model.active_overlay, None);
    }

    // ── commit actions are notification-only ──

    #[test]
    fn complete_pickup_raises_toast_and_schedules_expiry() {
        let mut model = test_model();
        model.navigate_to(Page::Pickups);
        let cmd = press(&mut model, KeyCode::Char('c'));
        assert_eq!(model.notifications.len(), 1);
        assert!(model.notifications[0].title.contains("PK001"));
        assert!(matches!(cmd, ConsoleCmd::ScheduleToastExpiry { .. }));
        // Seed data itself is never rewritten.
        assert_eq!(model.pickups.records().len(), 3);
    }

    #[test]
    fn approve_current_submission_toasts_with_id() {
        let mut model = test_model();
        model.navigate_to(Page::Reviews);
        press(&mut model, KeyCode::Char('o'));
        assert!(model.notifications[0].title.contains("RV001 approved"));
        assert_eq!(model.notifications[0].level, NotificationLevel::Success);
    }

    #[test]
    fn start_route_toasts_with_driver() {
        let mut model = test_model();
        model.navigate_to(Page::Routes);
        press(&mut model, KeyCode::Char('s'));
        assert!(model.notifications[0].title.contains("RT001"));
        assert!(model.notifications[0].detail.contains("Mike Wilson"));
    }

    #[test]
    fn optimize_route_reports_optimizer_settings() {
        let mut model = test_model();
        model.navigate_to(Page::Routes);
        press(&mut model, KeyCode::Char('o'));
        assert!(model.notifications[0].detail.contains("time"));
        assert!(model.notifications[0].detail.contains("15"));
    }

    // ── bulk confirm flow ──

    #[test]
    fn bulk_action_without_selection_toasts_instead_of_confirming() {
        let mut model = test_model();
        model.navigate_to(Page::Reviews);
        press(&mut model, KeyCode::Char('A'));
        assert_eq!(model.active_overlay, None);
        assert_eq!(model.notifications[0].title, "No rows selected");
    }

    #[test]
    fn bulk_approve_confirms_then_commits_and_clears_selection() {
        let mut model = test_model();
        model.navigate_to(Page::Reviews);
        press(&mut model, KeyCode::Char('a'));
        assert_eq!(model.reviews.selection.len(), 3);

        press(&mut model, KeyCode::Char('A'));
        assert_eq!(
            model.active_overlay,
            Some(Overlay::Confirmation(ConfirmAction::ApproveSelected))
        );

        let cmd = press(&mut model, KeyCode::Char('y'));
        assert_eq!(model.active_overlay, None);
        assert!(model.reviews.selection.is_empty());
        assert!(matches!(cmd, ConsoleCmd::ScheduleToastExpiry { .. }));
        let last = model.notifications.last().expect("commit toast");
        assert_eq!(last.title, "Submissions approved");
        assert_eq!(last.detail, "3 submissions approved");
    }

    #[test]
    fn bulk_suspend_cancel_keeps_selection() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char(' '));
        press(&mut model, KeyCode::Char('S'));
        assert_eq!(
            model.active_overlay,
            Some(Overlay::Confirmation(ConfirmAction::SuspendSelected))
        );

        press(&mut model, KeyCode::Char('n'));
        assert_eq!(model.active_overlay, None);
        assert_eq!(model.users.selection.len(), 1);
        assert!(model.notifications.is_empty());
    }

    #[test]
    fn single_row_commit_uses_singular_detail() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        press(&mut model, KeyCode::Char(' '));
        press(&mut model, KeyCode::Char('A'));
        press(&mut model, KeyCode::Enter);
        let last = model.notifications.last().expect("commit toast");
        assert_eq!(last.detail, "1 user activated");
    }

    // ── settings ──

    #[test]
    fn settings_adjust_keys_edit_the_draft() {
        let mut model = test_model();
        model.navigate_to(Page::Settings);
        press(&mut model, KeyCode::Right);
        assert_eq!(model.draft.console.refresh_interval_ms, 1100);
        press(&mut model, KeyCode::Left);
        assert!(!model.settings_dirty());
    }

    #[test]
    fn save_dirty_draft_returns_persist_command() {
        let mut model = test_model();
        model.navigate_to(Page::Settings);
        press(&mut model, KeyCode::Right);
        let cmd = press(&mut model, KeyCode::Char('s'));
        match cmd {
            ConsoleCmd::SaveSettings(config) => {
                assert_eq!(config.console.refresh_interval_ms, 1100);
            }
            other => panic!("expected SaveSettings, got {other:?}"),
        }
    }

    #[test]
    fn save_clean_draft_only_toasts() {
        let mut model = test_model();
        model.navigate_to(Page::Settings);
        let cmd = press(&mut model, KeyCode::Char('s'));
        assert!(matches!(cmd, ConsoleCmd::ScheduleToastExpiry { .. }));
        assert_eq!(model.notifications[0].title, "No changes to save");
    }

    #[test]
    fn reset_restores_draft_to_effective_config() {
        let mut model = test_model();
        model.navigate_to(Page::Settings);
        press(&mut model, KeyCode::Right);
        assert!(model.settings_dirty());
        press(&mut model, KeyCode::Char('r'));
        assert!(!model.settings_dirty());
    }

    #[test]
    fn settings_saved_ok_promotes_draft_and_toasts_success() {
        let mut model = test_model();
        model.draft.console.refresh_interval_ms = 2000;
        update(
            &mut model,
            ConsoleMsg::SettingsSaved {
                ok: true,
                detail: "/tmp/config.toml".to_string(),
            },
        );
        assert_eq!(model.config.console.refresh_interval_ms, 2000);
        assert_eq!(model.notifications[0].level, NotificationLevel::Success);
    }

    #[test]
    fn settings_saved_failure_keeps_effective_config() {
        let mut model = test_model();
        let original = model.config.clone();
        model.draft.console.refresh_interval_ms = 2000;
        update(
            &mut model,
            ConsoleMsg::SettingsSaved {
                ok: false,
                detail: "disk full".to_string(),
            },
        );
        assert_eq!(model.config, original);
        assert_eq!(model.notifications[0].level, NotificationLevel::Error);
    }

    // ── chrome messages ──

    #[test]
    fn resize_updates_terminal_size() {
        let mut model = test_model();
        let cmd = update(&mut model, ConsoleMsg::Resize { cols: 120, rows: 40 });
        assert_eq!(model.terminal_size, (120, 40));
        assert_eq!(cmd, ConsoleCmd::None);
    }

    #[test]
    fn tick_wraps_at_u64_max() {
        let mut model = test_model();
        model.tick = u64::MAX;
        update(&mut model, ConsoleMsg::Tick);
        assert_eq!(model.tick, 0);
    }

    #[test]
    fn notification_expired_removes_notification() {
        let mut model = test_model();
        let id = model.push_notification(NotificationLevel::Info, "test", "");
        update(&mut model, ConsoleMsg::NotificationExpired(id));
        assert!(model.notifications.is_empty());
    }

    #[test]
    fn unknown_key_is_noop() {
        let mut model = test_model();
        let cmd = press(&mut model, KeyCode::Char('z'));
        assert!(!model.quit);
        assert_eq!(cmd, ConsoleCmd::None);
    }
}
