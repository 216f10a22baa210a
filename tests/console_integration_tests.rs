//! End-to-end console scenarios driven through the update function.
//!
//! Each test plays a realistic key sequence against a fresh model and
//! asserts on the resulting state and commands, the same way the runtime
//! would apply them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use recycle_ops::core::config::Config;
use recycle_ops::tui::model::{
    ConfirmAction, ConsoleCmd, ConsoleModel, ConsoleMsg, NotificationLevel, Overlay, Page,
};
use recycle_ops::tui::update::update;

fn new_model() -> ConsoleModel {
    ConsoleModel::new(Config::default(), (120, 40))
}

fn press(model: &mut ConsoleModel, code: KeyCode) -> ConsoleCmd {
    update(
        model,
        ConsoleMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)),
    )
}

fn press_char(model: &mut ConsoleModel, ch: char) -> ConsoleCmd {
    press(model, KeyCode::Char(ch))
}

fn type_chars(model: &mut ConsoleModel, text: &str) {
    for ch in text.chars() {
        press_char(model, ch);
    }
}

#[test]
fn completed_filter_shows_exactly_the_completed_pickup() {
    let mut model = new_model();
    press_char(&mut model, '2');
    assert_eq!(model.page, Page::Pickups);

    // scheduled → in-progress → completed
    press_char(&mut model, 'f');
    press_char(&mut model, 'f');
    press_char(&mut model, 'f');

    assert_eq!(model.pickups.visible_ids(), vec!["PK003"]);
    // Cursor stays valid on the narrowed view.
    assert_eq!(model.pickups.current().map(|p| p.id.as_str()), Some("PK003"));
}

#[test]
fn case_insensitive_search_finds_sarah_only() {
    let mut model = new_model();
    press_char(&mut model, '5');
    press_char(&mut model, '/');
    assert!(model.search_active);

    type_chars(&mut model, "SAr");
    assert_eq!(model.users.visible_ids(), vec!["U002"]);

    // Enter ends capture but keeps the query applied.
    press(&mut model, KeyCode::Enter);
    assert!(!model.search_active);
    assert_eq!(model.users.visible_ids(), vec!["U002"]);

    // Backspacing during a new capture widens the view again.
    press_char(&mut model, '/');
    press(&mut model, KeyCode::Backspace);
    press(&mut model, KeyCode::Backspace);
    press(&mut model, KeyCode::Backspace);
    assert_eq!(model.users.visible_len(), 3);
}

#[test]
fn bulk_approve_commits_and_clears_selection() {
    let mut model = new_model();
    press_char(&mut model, '3');
    press_char(&mut model, ' ');
    assert_eq!(model.reviews.selection.len(), 1);

    press_char(&mut model, 'A');
    assert_eq!(
        model.active_overlay,
        Some(Overlay::Confirmation(ConfirmAction::ApproveSelected))
    );

    let cmd = press(&mut model, KeyCode::Enter);
    assert!(matches!(cmd, ConsoleCmd::ScheduleToastExpiry { .. }));
    assert_eq!(model.active_overlay, None);
    assert!(model.reviews.selection.is_empty());

    let toast = model.notifications.last().expect("commit toast");
    assert_eq!(toast.level, NotificationLevel::Success);
    assert_eq!(toast.title, "Submissions approved");
    assert_eq!(toast.detail, "1 submission approved");
}

#[test]
fn bulk_action_without_selection_raises_info_toast() {
    let mut model = new_model();
    press_char(&mut model, '5');
    press_char(&mut model, 'S');

    assert_eq!(model.active_overlay, None);
    let toast = model.notifications.last().expect("no-selection toast");
    assert_eq!(toast.level, NotificationLevel::Info);
}

#[test]
fn confirmation_can_be_dismissed_without_committing() {
    let mut model = new_model();
    press_char(&mut model, '5');
    press_char(&mut model, 'a');
    assert_eq!(model.users.selection.len(), 3);

    press_char(&mut model, 'S');
    press_char(&mut model, 'n');

    assert_eq!(model.active_overlay, None);
    // Selection survives a declined confirmation.
    assert_eq!(model.users.selection.len(), 3);
}

#[test]
fn detail_overlay_opens_and_closes() {
    let mut model = new_model();
    press_char(&mut model, '2');
    press(&mut model, KeyCode::Enter);

    assert_eq!(model.active_overlay, Some(Overlay::Detail));
    assert_eq!(model.focused.as_ref().map(|f| f.id()), Some("PK001"));

    press(&mut model, KeyCode::Esc);
    assert_eq!(model.active_overlay, None);
    assert!(model.focused.is_none());
}

#[test]
fn settings_save_roundtrip_promotes_the_draft() {
    let mut model = new_model();
    press_char(&mut model, '7');
    press_char(&mut model, 'l');
    assert!(model.settings_dirty());

    let cmd = press_char(&mut model, 's');
    let ConsoleCmd::SaveSettings(draft) = cmd else {
        panic!("expected SaveSettings, got {cmd:?}");
    };
    assert_eq!(*draft, model.draft);

    // The runtime reports a successful write back into the model.
    update(
        &mut model,
        ConsoleMsg::SettingsSaved {
            ok: true,
            detail: "/tmp/config.toml".to_string(),
        },
    );
    assert_eq!(model.config, model.draft);
    assert!(!model.settings_dirty());
    let toast = model.notifications.last().expect("save toast");
    assert_eq!(toast.title, "Settings saved");
}

#[test]
fn saving_a_clean_draft_is_a_noop_toast() {
    let mut model = new_model();
    press_char(&mut model, '7');
    let cmd = press_char(&mut model, 's');
    assert!(matches!(cmd, ConsoleCmd::ScheduleToastExpiry { .. }));
    assert!(!model.notifications.is_empty());
    assert_eq!(model.config, model.draft);
}

#[test]
fn escape_walks_back_through_navigation_history_then_quits() {
    let mut model = new_model();
    press_char(&mut model, '2');
    press_char(&mut model, '5');
    assert_eq!(model.page, Page::Users);

    press(&mut model, KeyCode::Esc);
    assert_eq!(model.page, Page::Pickups);
    press(&mut model, KeyCode::Esc);
    assert_eq!(model.page, Page::Overview);

    let cmd = press(&mut model, KeyCode::Esc);
    assert_eq!(cmd, ConsoleCmd::Quit);
}

#[test]
fn pickup_action_toast_expires_via_runtime_roundtrip() {
    let mut model = new_model();
    press_char(&mut model, '2');
    let cmd = press_char(&mut model, 'c');

    let ConsoleCmd::ScheduleToastExpiry { id, .. } = cmd else {
        panic!("expected toast schedule, got {cmd:?}");
    };
    assert_eq!(model.notifications.len(), 1);
    assert!(model.notifications[0].title.contains("PK001"));
    // Notification-only action: the record itself is untouched.
    assert_eq!(model.pickups.records().len(), 3);

    update(&mut model, ConsoleMsg::NotificationExpired(id));
    assert!(model.notifications.is_empty());
}

#[test]
fn bracket_keys_cycle_pages_with_wraparound() {
    let mut model = new_model();
    press_char(&mut model, '[');
    assert_eq!(model.page, Page::Settings);
    press_char(&mut model, ']');
    assert_eq!(model.page, Page::Overview);
}

#[test]
fn help_overlay_blocks_page_keys_until_closed() {
    let mut model = new_model();
    press_char(&mut model, '2');
    press_char(&mut model, '?');
    assert_eq!(model.active_overlay, Some(Overlay::Help));

    // Page hotkeys are inert while the overlay is up.
    press_char(&mut model, '5');
    assert_eq!(model.page, Page::Pickups);

    press_char(&mut model, '?');
    assert_eq!(model.active_overlay, None);
    press_char(&mut model, '5');
    assert_eq!(model.page, Page::Users);
}
