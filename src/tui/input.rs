//! Key routing for the operations console.
//!
//! Resolution precedence is deterministic: search capture first, then
//! overlay keys, then global keys, then page-level keys. A consumed key
//! never falls through to a lower layer.

#![allow(missing_docs)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::model::{ConfirmAction, Overlay, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub page: Page,
    pub active_overlay: Option<Overlay>,
    pub search_active: bool,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            page: Page::Overview,
            active_overlay: None,
            search_active: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    BackOrQuit,
    CloseOverlay,
    ToggleHelp,
    Navigate(Page),
    NavigatePrev,
    NavigateNext,
    CursorUp,
    CursorDown,
    CycleStatusFilter,
    CycleTierFilter,
    BeginSearch,
    SearchChar(char),
    SearchBackspace,
    EndSearch,
    ToggleSelect,
    SelectAllVisible,
    ClearSelection,
    OpenDetail,
    StartPickup,
    CompletePickup,
    CancelPickup,
    ApproveCurrent,
    RejectCurrent,
    RequestConfirm(ConfirmAction),
    Confirm(ConfirmAction),
    StartRoute,
    OptimizeRoute,
    SettingsIncrease,
    SettingsDecrease,
    SaveSettings,
    ResetSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResolution {
    pub action: Option<InputAction>,
    pub consumed: bool,
}

impl InputResolution {
    const fn action(action: InputAction) -> Self {
        Self {
            action: Some(action),
            consumed: true,
        }
    }

    const fn consumed_without_action() -> Self {
        Self {
            action: None,
            consumed: true,
        }
    }

    const fn passthrough() -> Self {
        Self {
            action: None,
            consumed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualHelp {
    pub title: &'static str,
    pub page_hint: &'static str,
    pub bindings: Vec<HelpBinding>,
}

/// Resolve a key event using deterministic precedence rules:
/// search capture, then overlay keys, then global keys, then page keys.
#[must_use]
pub fn resolve_key_event(key: &KeyEvent, context: InputContext) -> InputResolution {
    if context.search_active {
        return resolve_search_key(key);
    }
    if let Some(overlay) = context.active_overlay {
        return resolve_overlay_key(key, overlay);
    }
    let global = resolve_global_key(key);
    if global.consumed {
        return global;
    }
    resolve_page_key(key, context.page)
}

/// Build contextual help entries for the current page/overlay state.
#[must_use]
pub fn contextual_help(context: InputContext) -> ContextualHelp {
    match context.active_overlay {
        Some(overlay) => overlay_help(overlay),
        None => page_help(context.page),
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn resolve_search_key(key: &KeyEvent) -> InputResolution {
    if is_ctrl_c(key) {
        return InputResolution::action(InputAction::Quit);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter => InputResolution::action(InputAction::EndSearch),
        KeyCode::Backspace => InputResolution::action(InputAction::SearchBackspace),
        KeyCode::Char(c) => InputResolution::action(InputAction::SearchChar(c)),
        _ => InputResolution::consumed_without_action(),
    }
}

fn resolve_overlay_key(key: &KeyEvent, overlay: Overlay) -> InputResolution {
    if is_ctrl_c(key) {
        return InputResolution::action(InputAction::Quit);
    }
    match overlay {
        Overlay::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => {
                InputResolution::action(InputAction::CloseOverlay)
            }
            _ => InputResolution::consumed_without_action(),
        },
        Overlay::Detail => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                InputResolution::action(InputAction::CloseOverlay)
            }
            _ => InputResolution::consumed_without_action(),
        },
        Overlay::Confirmation(action) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                InputResolution::action(InputAction::Confirm(action))
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                InputResolution::action(InputAction::CloseOverlay)
            }
            _ => InputResolution::consumed_without_action(),
        },
    }
}

fn resolve_global_key(key: &KeyEvent) -> InputResolution {
    if is_ctrl_c(key) {
        return InputResolution::action(InputAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') => InputResolution::action(InputAction::Quit),
        KeyCode::Esc => InputResolution::action(InputAction::BackOrQuit),
        KeyCode::Char(c @ '1'..='7') => match Page::from_number(c as u8 - b'0') {
            Some(page) => InputResolution::action(InputAction::Navigate(page)),
            None => InputResolution::passthrough(),
        },
        KeyCode::Char('[') => InputResolution::action(InputAction::NavigatePrev),
        KeyCode::Char(']') => InputResolution::action(InputAction::NavigateNext),
        KeyCode::Char('?') => InputResolution::action(InputAction::ToggleHelp),
        _ => InputResolution::passthrough(),
    }
}

fn resolve_page_key(key: &KeyEvent, page: Page) -> InputResolution {
    match page {
        Page::Overview | Page::Analytics => InputResolution::passthrough(),
        Page::Settings => resolve_settings_key(key),
        Page::Pickups => resolve_list_key(key).unwrap_or_else(|| match key.code {
            KeyCode::Char('s') => InputResolution::action(InputAction::StartPickup),
            KeyCode::Char('c') => InputResolution::action(InputAction::CompletePickup),
            KeyCode::Char('d') => InputResolution::action(InputAction::CancelPickup),
            _ => InputResolution::passthrough(),
        }),
        Page::Reviews => resolve_list_key(key).unwrap_or_else(|| match key.code {
            KeyCode::Char('o') => InputResolution::action(InputAction::ApproveCurrent),
            KeyCode::Char('r') => InputResolution::action(InputAction::RejectCurrent),
            KeyCode::Char('A') => {
                InputResolution::action(InputAction::RequestConfirm(ConfirmAction::ApproveSelected))
            }
            KeyCode::Char('R') => {
                InputResolution::action(InputAction::RequestConfirm(ConfirmAction::RejectSelected))
            }
            _ => InputResolution::passthrough(),
        }),
        Page::Routes => resolve_list_key(key).unwrap_or_else(|| match key.code {
            KeyCode::Char('s') => InputResolution::action(InputAction::StartRoute),
            KeyCode::Char('o') => InputResolution::action(InputAction::OptimizeRoute),
            _ => InputResolution::passthrough(),
        }),
        Page::Users => resolve_list_key(key).unwrap_or_else(|| match key.code {
            KeyCode::Char('t') => InputResolution::action(InputAction::CycleTierFilter),
            KeyCode::Char('A') => InputResolution::action(InputAction::RequestConfirm(
                ConfirmAction::ActivateSelected,
            )),
            KeyCode::Char('S') => {
                InputResolution::action(InputAction::RequestConfirm(ConfirmAction::SuspendSelected))
            }
            _ => InputResolution::passthrough(),
        }),
    }
}

/// Keys shared by every table page. Returns `None` when the key is not a
/// list key so the page-specific layer can try it.
fn resolve_list_key(key: &KeyEvent) -> Option<InputResolution> {
    let resolution = match key.code {
        KeyCode::Char('k') | KeyCode::Up => InputResolution::action(InputAction::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => InputResolution::action(InputAction::CursorDown),
        KeyCode::Char('f') => InputResolution::action(InputAction::CycleStatusFilter),
        KeyCode::Char('/') => InputResolution::action(InputAction::BeginSearch),
        KeyCode::Char(' ') => InputResolution::action(InputAction::ToggleSelect),
        KeyCode::Char('a') => InputResolution::action(InputAction::SelectAllVisible),
        KeyCode::Char('x') => InputResolution::action(InputAction::ClearSelection),
        KeyCode::Enter => InputResolution::action(InputAction::OpenDetail),
        _ => return None,
    };
    Some(resolution)
}

fn resolve_settings_key(key: &KeyEvent) -> InputResolution {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => InputResolution::action(InputAction::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => InputResolution::action(InputAction::CursorDown),
        KeyCode::Char('l' | '+') | KeyCode::Right => {
            InputResolution::action(InputAction::SettingsIncrease)
        }
        KeyCode::Char('h' | '-') | KeyCode::Left => {
            InputResolution::action(InputAction::SettingsDecrease)
        }
        KeyCode::Char('s') | KeyCode::Enter => InputResolution::action(InputAction::SaveSettings),
        KeyCode::Char('r') => InputResolution::action(InputAction::ResetSettings),
        _ => InputResolution::passthrough(),
    }
}

fn overlay_help(overlay: Overlay) -> ContextualHelp {
    match overlay {
        Overlay::Help => ContextualHelp {
            title: "Help Overlay",
            page_hint: "Shows global and page-level bindings.",
            bindings: vec![
                HelpBinding {
                    keys: "Esc or ?",
                    description: "Close help overlay",
                },
            ],
        },
        Overlay::Detail => ContextualHelp {
            title: "Detail Dialog",
            page_hint: "Full record snapshot for the focused row.",
            bindings: vec![
                HelpBinding {
                    keys: "Esc or Enter",
                    description: "Close detail dialog",
                },
            ],
        },
        Overlay::Confirmation(_) => ContextualHelp {
            title: "Confirmation",
            page_hint: "Bulk actions require explicit confirmation.",
            bindings: vec![
                HelpBinding {
                    keys: "Enter or y",
                    description: "Confirm action",
                },
                HelpBinding {
                    keys: "Esc or n",
                    description: "Cancel",
                },
            ],
        },
    }
}

fn page_help(page: Page) -> ContextualHelp {
    let mut bindings = Vec::with_capacity(GLOBAL_HELP_BINDINGS.len() + 8);
    bindings.extend_from_slice(&GLOBAL_HELP_BINDINGS);
    if !matches!(page, Page::Overview | Page::Analytics | Page::Settings) {
        bindings.extend_from_slice(&LIST_HELP_BINDINGS);
    }
    bindings.extend_from_slice(page_bindings(page));

    ContextualHelp {
        title: "Key Bindings",
        page_hint: page_hint(page),
        bindings,
    }
}

const GLOBAL_HELP_BINDINGS: [HelpBinding; 5] = [
    HelpBinding {
        keys: "1..7",
        description: "Jump directly to page",
    },
    HelpBinding {
        keys: "[ / ]",
        description: "Previous/next page",
    },
    HelpBinding {
        keys: "Esc",
        description: "Back (or quit when history is empty)",
    },
    HelpBinding {
        keys: "q / Ctrl-C",
        description: "Quit console",
    },
    HelpBinding {
        keys: "?",
        description: "Toggle this help",
    },
];

const LIST_HELP_BINDINGS: [HelpBinding; 5] = [
    HelpBinding {
        keys: "j/k",
        description: "Move cursor",
    },
    HelpBinding {
        keys: "f",
        description: "Cycle status filter",
    },
    HelpBinding {
        keys: "/",
        description: "Edit search query (Esc/Enter to finish)",
    },
    HelpBinding {
        keys: "Space / a / x",
        description: "Toggle row / select all visible / clear selection",
    },
    HelpBinding {
        keys: "Enter",
        description: "Open detail dialog",
    },
];

fn page_bindings(page: Page) -> &'static [HelpBinding] {
    match page {
        Page::Overview | Page::Analytics => &[],
        Page::Pickups => &[
            HelpBinding {
                keys: "s / c / d",
                description: "Start / complete / cancel pickup under cursor",
            },
        ],
        Page::Reviews => &[
            HelpBinding {
                keys: "o / r",
                description: "Approve / reject submission under cursor",
            },
            HelpBinding {
                keys: "A / R",
                description: "Approve / reject all selected (confirms first)",
            },
        ],
        Page::Routes => &[
            HelpBinding {
                keys: "s / o",
                description: "Start / optimize route under cursor",
            },
        ],
        Page::Users => &[
            HelpBinding {
                keys: "t",
                description: "Cycle tier filter",
            },
            HelpBinding {
                keys: "A / S",
                description: "Activate / suspend all selected (confirms first)",
            },
        ],
        Page::Settings => &[
            HelpBinding {
                keys: "h/l",
                description: "Adjust field under cursor",
            },
            HelpBinding {
                keys: "s / r",
                description: "Save draft / reset to effective config",
            },
        ],
    }
}

fn page_hint(page: Page) -> &'static str {
    match page {
        Page::Overview => "Overview: headline metrics, activity feed, subsystem status",
        Page::Pickups => "Pickups: schedule, status filters, per-row status actions",
        Page::Reviews => "Reviews: submission queue with bulk approve/reject",
        Page::Routes => "Routes: fleet list, efficiency bands, optimizer settings",
        Page::Users => "Users: accounts with status and tier filters",
        Page::Analytics => "Analytics: KPIs, material breakdown, regional summary",
        Page::Settings => "Settings: console preference editor",
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn page_ctx(page: Page) -> InputContext {
        InputContext {
            page,
            ..InputContext::default()
        }
    }

    #[test]
    fn global_keys_resolve_to_actions() {
        let ctx = InputContext::default();
        let nav = resolve_key_event(&key(KeyCode::Char('5')), ctx);
        let help = resolve_key_event(&key(KeyCode::Char('?')), ctx);
        let unknown = resolve_key_event(&key(KeyCode::Char('z')), ctx);

        assert_eq!(nav.action, Some(InputAction::Navigate(Page::Users)));
        assert_eq!(help.action, Some(InputAction::ToggleHelp));
        assert!(!unknown.consumed);
        assert!(unknown.action.is_none());
    }

    #[test]
    fn ctrl_c_quits_in_every_layer() {
        let layers = [
            InputContext::default(),
            InputContext {
                active_overlay: Some(Overlay::Help),
                ..InputContext::default()
            },
            InputContext {
                search_active: true,
                ..InputContext::default()
            },
        ];
        for ctx in layers {
            let quit = resolve_key_event(&ctrl(KeyCode::Char('c')), ctx);
            assert_eq!(quit.action, Some(InputAction::Quit));
        }
    }

    #[test]
    fn overlay_precedence_consumes_unmapped_keys() {
        let ctx = InputContext {
            active_overlay: Some(Overlay::Help),
            ..InputContext::default()
        };
        let resolution = resolve_key_event(&key(KeyCode::Char('3')), ctx);
        assert!(resolution.consumed);
        assert!(resolution.action.is_none());
    }

    #[test]
    fn search_capture_takes_precedence_over_globals() {
        let ctx = InputContext {
            page: Page::Users,
            search_active: true,
            ..InputContext::default()
        };
        let ch = resolve_key_event(&key(KeyCode::Char('q')), ctx);
        assert_eq!(ch.action, Some(InputAction::SearchChar('q')));

        let done = resolve_key_event(&key(KeyCode::Esc), ctx);
        assert_eq!(done.action, Some(InputAction::EndSearch));
    }

    #[test]
    fn list_keys_resolve_on_table_pages_only() {
        let toggle = resolve_key_event(&key(KeyCode::Char(' ')), page_ctx(Page::Pickups));
        assert_eq!(toggle.action, Some(InputAction::ToggleSelect));

        let inert = resolve_key_event(&key(KeyCode::Char(' ')), page_ctx(Page::Overview));
        assert!(!inert.consumed);
    }

    #[test]
    fn pickup_page_status_actions() {
        let ctx = page_ctx(Page::Pickups);
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('s')), ctx).action,
            Some(InputAction::StartPickup)
        );
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('c')), ctx).action,
            Some(InputAction::CompletePickup)
        );
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('d')), ctx).action,
            Some(InputAction::CancelPickup)
        );
    }

    #[test]
    fn review_bulk_keys_request_confirmation() {
        let ctx = page_ctx(Page::Reviews);
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('A')), ctx).action,
            Some(InputAction::RequestConfirm(ConfirmAction::ApproveSelected))
        );
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('r')), ctx).action,
            Some(InputAction::RejectCurrent)
        );
    }

    #[test]
    fn user_page_has_tier_filter_and_bulk_actions() {
        let ctx = page_ctx(Page::Users);
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('t')), ctx).action,
            Some(InputAction::CycleTierFilter)
        );
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('S')), ctx).action,
            Some(InputAction::RequestConfirm(ConfirmAction::SuspendSelected))
        );
    }

    #[test]
    fn confirmation_overlay_resolves_yes_and_no() {
        let ctx = InputContext {
            active_overlay: Some(Overlay::Confirmation(ConfirmAction::ApproveSelected)),
            ..InputContext::default()
        };
        let yes = resolve_key_event(&key(KeyCode::Char('y')), ctx);
        assert_eq!(
            yes.action,
            Some(InputAction::Confirm(ConfirmAction::ApproveSelected))
        );
        let no = resolve_key_event(&key(KeyCode::Esc), ctx);
        assert_eq!(no.action, Some(InputAction::CloseOverlay));
    }

    #[test]
    fn settings_keys_adjust_save_and_reset() {
        let ctx = page_ctx(Page::Settings);
        assert_eq!(
            resolve_key_event(&key(KeyCode::Right), ctx).action,
            Some(InputAction::SettingsIncrease)
        );
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('s')), ctx).action,
            Some(InputAction::SaveSettings)
        );
        assert_eq!(
            resolve_key_event(&key(KeyCode::Char('r')), ctx).action,
            Some(InputAction::ResetSettings)
        );
    }

    #[test]
    fn contextual_help_reflects_overlay_and_page_context() {
        let help = contextual_help(page_ctx(Page::Routes));
        assert_eq!(help.title, "Key Bindings");
        assert!(help.page_hint.contains("efficiency"));
        assert!(help.bindings.iter().any(|line| line.keys == "j/k"));

        let overlay = contextual_help(InputContext {
            active_overlay: Some(Overlay::Confirmation(ConfirmAction::SuspendSelected)),
            ..InputContext::default()
        });
        assert_eq!(overlay.title, "Confirmation");
        assert!(
            overlay
                .bindings
                .iter()
                .any(|line| line.description.contains("Confirm"))
        );
    }

    #[test]
    fn overview_page_contributes_no_list_bindings() {
        let help = contextual_help(page_ctx(Page::Overview));
        assert!(!help.bindings.iter().any(|line| line.keys == "j/k"));
    }
}
