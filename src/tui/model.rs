//! Elm-style state model for the operations console.
//!
//! All display state lives in [`ConsoleModel`]. Input and timer events
//! arrive as [`ConsoleMsg`] values; side-effects are represented as
//! [`ConsoleCmd`] values returned from the update function.
//!
//! **Design invariant:** the model is deterministic and testable — no I/O
//! happens here. Commit actions (approve, reject, status changes, bulk
//! operations) only raise notifications; they never rewrite the seed
//! collections.

use std::time::Duration;

use crate::core::config::{Config, OptimizeFor};
use crate::domain::listview::{ListView, TierFilter};
use crate::domain::records::{
    ActivityEvent, Driver, Pickup, PickupPoint, PickupStatus, RewardTransaction, RoutePlan,
    ServiceStatus, Submission, UserAccount,
};
use crate::domain::seed;

// ──────────────────── pages ────────────────────

/// Top-level pages in the console navigation model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// P1: Headline metrics, activity feed, subsystem status board.
    #[default]
    Overview,
    /// P2: Pickup schedule with per-row status actions.
    Pickups,
    /// P3: Submission review queue with bulk approve/reject.
    Reviews,
    /// P4: Route list with efficiency bands and optimizer settings.
    Routes,
    /// P5: User accounts with status and tier filters.
    Users,
    /// P6: KPIs, material breakdown, top users, regional summary.
    Analytics,
    /// P7: Console preference editor.
    Settings,
}

/// Total number of pages (used for prev/next wrapping).
const PAGE_COUNT: u8 = 7;

impl Page {
    /// 1-based page number for hotkey mapping (keys `1`-`7`).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Overview => 1,
            Self::Pickups => 2,
            Self::Reviews => 3,
            Self::Routes => 4,
            Self::Users => 5,
            Self::Analytics => 6,
            Self::Settings => 7,
        }
    }

    /// Resolve a 1-based number key to a page. Returns `None` for out-of-range.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Overview),
            2 => Some(Self::Pickups),
            3 => Some(Self::Reviews),
            4 => Some(Self::Routes),
            5 => Some(Self::Users),
            6 => Some(Self::Analytics),
            7 => Some(Self::Settings),
            _ => None,
        }
    }

    /// Next page in navigation order, wrapping P7 → P1 (`]` key).
    #[must_use]
    pub const fn next(self) -> Self {
        let n = self.number() % PAGE_COUNT + 1;
        match Self::from_number(n) {
            Some(page) => page,
            None => Self::Overview,
        }
    }

    /// Previous page in navigation order, wrapping P1 → P7 (`[` key).
    #[must_use]
    pub const fn prev(self) -> Self {
        let n = if self.number() == 1 {
            PAGE_COUNT
        } else {
            self.number() - 1
        };
        match Self::from_number(n) {
            Some(page) => page,
            None => Self::Settings,
        }
    }

    /// Header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Pickups => "Pickup Management",
            Self::Reviews => "Item Reviews",
            Self::Routes => "Route Planning",
            Self::Users => "User Management",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

// ──────────────────── overlays ────────────────────

/// Floating surfaces that overlay the current page.
///
/// Only one overlay can be active at a time; overlay keys take precedence
/// over page-level keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Contextual key map for the current page (`?`).
    Help,
    /// Detail dialog for the focused record (Enter on a row).
    Detail,
    /// Modal confirmation for bulk actions.
    Confirmation(ConfirmAction),
}

/// Bulk actions that require modal confirmation before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Approve every selected submission.
    ApproveSelected,
    /// Reject every selected submission.
    RejectSelected,
    /// Activate every selected user account.
    ActivateSelected,
    /// Suspend every selected user account.
    SuspendSelected,
}

impl ConfirmAction {
    /// Verb used in the confirmation prompt and the commit toast.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::ApproveSelected => "approve",
            Self::RejectSelected => "reject",
            Self::ActivateSelected => "activate",
            Self::SuspendSelected => "suspend",
        }
    }

    /// Which page's selection the action commits against.
    #[must_use]
    pub const fn page(self) -> Page {
        match self {
            Self::ApproveSelected | Self::RejectSelected => Page::Reviews,
            Self::ActivateSelected | Self::SuspendSelected => Page::Users,
        }
    }
}

// ──────────────────── focused record ────────────────────

/// Cloned snapshot of the record shown in the detail dialog.
///
/// At most one record is focused at a time. Opening a dialog for another
/// record replaces the snapshot wholesale; closing the dialog clears it.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusedRecord {
    Pickup(Pickup),
    Submission(Submission),
    Route(RoutePlan),
    User(UserAccount),
}

impl FocusedRecord {
    /// Id of the snapshot, whatever its type.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Pickup(p) => &p.id,
            Self::Submission(s) => &s.id,
            Self::Route(r) => &r.id,
            Self::User(u) => &u.id,
        }
    }
}

// ──────────────────── notifications ────────────────────

/// Toast notification displayed in the top-right corner.
///
/// Toasts auto-dismiss after the configured TTL. The visible count is
/// capped; older toasts are evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Monotonic ID for expiry tracking.
    pub id: u64,
    pub level: NotificationLevel,
    pub title: String,
    pub detail: String,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

// ──────────────────── settings editor ────────────────────

/// Editable rows on the Settings page, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    RefreshInterval,
    StartPage,
    HighContrast,
    OptimizeFor,
    MaxPickupsPerRoute,
    AvoidHighways,
}

impl SettingsField {
    /// All fields in display order.
    pub const ALL: &'static [Self] = &[
        Self::RefreshInterval,
        Self::StartPage,
        Self::HighContrast,
        Self::OptimizeFor,
        Self::MaxPickupsPerRoute,
        Self::AvoidHighways,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RefreshInterval => "Refresh interval (ms)",
            Self::StartPage => "Start page",
            Self::HighContrast => "High contrast",
            Self::OptimizeFor => "Optimize routes for",
            Self::MaxPickupsPerRoute => "Max pickups per route",
            Self::AvoidHighways => "Avoid highways",
        }
    }
}

// ──────────────────── model ────────────────────

/// Complete display state for the operations console.
///
/// The single source of truth for the view layer. The update function
/// mutates it; the render function reads it immutably.
#[derive(Debug)]
pub struct ConsoleModel {
    /// Active page.
    pub page: Page,
    /// Page navigation history for back-navigation (most recent last).
    pub page_history: Vec<Page>,
    /// Currently active overlay, if any.
    pub active_overlay: Option<Overlay>,
    /// Snapshot shown in the detail dialog. `Some` iff the Detail overlay
    /// is (or was just) open.
    pub focused: Option<FocusedRecord>,
    /// Whether keystrokes are being captured into the active page's search
    /// query (`/` toggles).
    pub search_active: bool,

    // ── list pages ──
    pub pickups: ListView<Pickup>,
    pub reviews: ListView<Submission>,
    pub routes: ListView<RoutePlan>,
    pub users: ListView<UserAccount, TierFilter>,

    // ── supporting collections ──
    pub drivers: Vec<Driver>,
    pub pickup_points: Vec<PickupPoint>,
    pub transactions: Vec<RewardTransaction>,
    pub activity: Vec<ActivityEvent>,
    pub services: Vec<ServiceStatus>,

    // ── settings editor ──
    /// Effective configuration the console was started with.
    pub config: Config,
    /// Draft edited on the Settings page; committed by Save.
    pub draft: Config,
    /// Cursor into [`SettingsField::ALL`].
    pub settings_cursor: usize,

    // ── chrome ──
    /// Terminal dimensions (columns, rows).
    pub terminal_size: (u16, u16),
    /// Monotonic tick counter.
    pub tick: u64,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Active toasts (oldest first).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    pub next_notification_id: u64,
}

impl ConsoleModel {
    /// Create a model seeded with the in-memory collections.
    #[must_use]
    pub fn new(config: Config, terminal_size: (u16, u16)) -> Self {
        let page = Page::from_number(config.console.start_page).unwrap_or_default();
        Self {
            page,
            page_history: Vec::new(),
            active_overlay: None,
            focused: None,
            search_active: false,
            pickups: ListView::new(seed::pickups()),
            reviews: ListView::new(seed::submissions()),
            routes: ListView::new(seed::routes()),
            users: ListView::new(seed::users()),
            drivers: seed::drivers(),
            pickup_points: seed::pickup_points(),
            transactions: seed::transactions(),
            activity: seed::activity_feed(),
            services: seed::service_statuses(),
            draft: config.clone(),
            config,
            settings_cursor: 0,
            terminal_size,
            tick: 0,
            quit: false,
            notifications: Vec::new(),
            next_notification_id: 0,
        }
    }

    /// Toast auto-dismiss TTL from the effective config.
    #[must_use]
    pub const fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.config.console.toast_ttl_ms)
    }

    /// Push a notification, evicting the oldest beyond the configured cap.
    /// Returns the assigned notification ID.
    pub fn push_notification(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            level,
            title: title.into(),
            detail: detail.into(),
        });
        while self.notifications.len() > self.config.console.max_visible_toasts {
            self.notifications.remove(0);
        }
        id
    }

    /// Drop a notification by id (expiry or manual dismiss).
    pub fn expire_notification(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Navigate to a page, recording the current page in history.
    /// No-op if already on the target page. Returns `true` if navigation
    /// occurred.
    pub fn navigate_to(&mut self, target: Page) -> bool {
        if target == self.page {
            return false;
        }
        self.page_history.push(self.page);
        self.page = target;
        self.search_active = false;
        true
    }

    /// Go back to the previous page. Returns `true` if history was non-empty.
    pub fn navigate_back(&mut self) -> bool {
        if let Some(prev) = self.page_history.pop() {
            self.page = prev;
            self.search_active = false;
            true
        } else {
            false
        }
    }

    /// Open the detail dialog for a record snapshot, replacing any previous
    /// snapshot wholesale.
    pub fn open_detail(&mut self, record: FocusedRecord) {
        self.focused = Some(record);
        self.active_overlay = Some(Overlay::Detail);
    }

    /// Close the active overlay. Closing the detail dialog clears the
    /// focused snapshot.
    pub fn close_overlay(&mut self) {
        if self.active_overlay == Some(Overlay::Detail) {
            self.focused = None;
        }
        self.active_overlay = None;
    }

    /// Number of ids selected on the page a confirm action targets.
    #[must_use]
    pub fn selection_count_for(&self, action: ConfirmAction) -> usize {
        match action.page() {
            Page::Reviews => self.reviews.selection.len(),
            Page::Users => self.users.selection.len(),
            _ => 0,
        }
    }

    // ── settings editor ──

    /// Field under the settings cursor.
    #[must_use]
    pub fn settings_field(&self) -> SettingsField {
        SettingsField::ALL[self.settings_cursor.min(SettingsField::ALL.len() - 1)]
    }

    pub fn settings_cursor_up(&mut self) -> bool {
        if self.settings_cursor > 0 {
            self.settings_cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn settings_cursor_down(&mut self) -> bool {
        if self.settings_cursor + 1 < SettingsField::ALL.len() {
            self.settings_cursor += 1;
            true
        } else {
            false
        }
    }

    /// Adjust the field under the cursor by one step in the given direction.
    pub fn settings_adjust(&mut self, increase: bool) {
        match self.settings_field() {
            SettingsField::RefreshInterval => {
                let step = 100;
                let current = self.draft.console.refresh_interval_ms;
                self.draft.console.refresh_interval_ms = if increase {
                    (current + step).min(60_000)
                } else {
                    current.saturating_sub(step).max(100)
                };
            }
            SettingsField::StartPage => {
                let current = self.draft.console.start_page;
                self.draft.console.start_page = if increase {
                    if current >= PAGE_COUNT { 1 } else { current + 1 }
                } else if current <= 1 {
                    PAGE_COUNT
                } else {
                    current - 1
                };
            }
            SettingsField::HighContrast => {
                self.draft.display.high_contrast = !self.draft.display.high_contrast;
            }
            SettingsField::OptimizeFor => {
                self.draft.routing.optimize_for = match self.draft.routing.optimize_for {
                    OptimizeFor::Time => OptimizeFor::Distance,
                    OptimizeFor::Distance => OptimizeFor::Fuel,
                    OptimizeFor::Fuel => OptimizeFor::Time,
                };
            }
            SettingsField::MaxPickupsPerRoute => {
                let current = self.draft.routing.max_pickups_per_route;
                self.draft.routing.max_pickups_per_route = if increase {
                    (current + 1).min(50)
                } else {
                    current.saturating_sub(1).max(1)
                };
            }
            SettingsField::AvoidHighways => {
                self.draft.routing.avoid_highways = !self.draft.routing.avoid_highways;
            }
        }
    }

    /// Whether the draft differs from the effective config.
    #[must_use]
    pub fn settings_dirty(&self) -> bool {
        self.draft != self.config
    }

    // ── search input ──

    /// Append a character to the active page's search query.
    pub fn search_push(&mut self, ch: char) {
        match self.page {
            Page::Pickups => {
                let mut q = self.pickups.criteria.query.clone();
                q.push(ch);
                self.pickups.set_query(q);
            }
            Page::Reviews => {
                let mut q = self.reviews.criteria.query.clone();
                q.push(ch);
                self.reviews.set_query(q);
            }
            Page::Routes => {
                let mut q = self.routes.criteria.query.clone();
                q.push(ch);
                self.routes.set_query(q);
            }
            Page::Users => {
                let mut q = self.users.criteria.query.clone();
                q.push(ch);
                self.users.set_query(q);
            }
            _ => {}
        }
    }

    /// Remove the last character from the active page's search query.
    pub fn search_pop(&mut self) {
        match self.page {
            Page::Pickups => {
                let mut q = self.pickups.criteria.query.clone();
                q.pop();
                self.pickups.set_query(q);
            }
            Page::Reviews => {
                let mut q = self.reviews.criteria.query.clone();
                q.pop();
                self.reviews.set_query(q);
            }
            Page::Routes => {
                let mut q = self.routes.criteria.query.clone();
                q.pop();
                self.routes.set_query(q);
            }
            Page::Users => {
                let mut q = self.users.criteria.query.clone();
                q.pop();
                self.users.set_query(q);
            }
            _ => {}
        }
    }

    /// Search query of the active page, if it has one.
    #[must_use]
    pub fn active_query(&self) -> Option<&str> {
        match self.page {
            Page::Pickups => Some(&self.pickups.criteria.query),
            Page::Reviews => Some(&self.reviews.criteria.query),
            Page::Routes => Some(&self.routes.criteria.query),
            Page::Users => Some(&self.users.criteria.query),
            _ => None,
        }
    }

    /// Count of pickups currently in the given status.
    #[must_use]
    pub fn pickup_status_count(&self, status: PickupStatus) -> usize {
        self.pickups
            .records()
            .iter()
            .filter(|p| p.status == status)
            .count()
    }
}

// ──────────────────── messages ────────────────────

/// Events that drive state transitions in the console model.
#[derive(Debug, Clone)]
pub enum ConsoleMsg {
    /// Periodic timer tick.
    Tick,
    /// Terminal key press event.
    Key(crossterm::event::KeyEvent),
    /// Terminal was resized.
    Resize { cols: u16, rows: u16 },
    /// A toast's auto-dismiss timer expired.
    NotificationExpired(u64),
    /// The runtime finished persisting settings.
    SettingsSaved { ok: bool, detail: String },
}

// ──────────────────── commands ────────────────────

/// Side-effects returned by the update function for the runtime to execute.
///
/// The update function never performs I/O directly; every effect flows
/// through a command, keeping the state machine deterministic and testable.
#[derive(Debug, PartialEq)]
pub enum ConsoleCmd {
    /// No side-effect.
    None,
    /// Terminate the event loop.
    Quit,
    /// Execute multiple commands.
    Batch(Vec<Self>),
    /// Schedule a toast auto-dismiss after the given duration.
    ScheduleToastExpiry { id: u64, after: Duration },
    /// Persist the given configuration to disk.
    SaveSettings(Box<Config>),
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{AccountStatus, StatusKind};

    fn test_model() -> ConsoleModel {
        ConsoleModel::new(Config::default(), (100, 30))
    }

    // ── Page enum ──

    #[test]
    fn default_page_is_overview() {
        assert_eq!(Page::default(), Page::Overview);
    }

    #[test]
    fn page_numbers_round_trip() {
        for n in 1..=7 {
            let page = Page::from_number(n).expect("pages 1-7 exist");
            assert_eq!(page.number(), n);
        }
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(8), None);
    }

    #[test]
    fn page_next_prev_cycle_all_seven() {
        let mut page = Page::Overview;
        for _ in 0..7 {
            page = page.next();
        }
        assert_eq!(page, Page::Overview);

        assert_eq!(Page::Overview.prev(), Page::Settings);
        assert_eq!(Page::Settings.next(), Page::Overview);
    }

    #[test]
    fn start_page_config_selects_initial_page() {
        let mut config = Config::default();
        config.console.start_page = 4;
        let model = ConsoleModel::new(config, (80, 24));
        assert_eq!(model.page, Page::Routes);
    }

    // ── navigation ──

    #[test]
    fn navigate_records_history_and_back_pops_it() {
        let mut model = test_model();
        assert!(model.navigate_to(Page::Users));
        assert!(model.navigate_to(Page::Reviews));
        assert_eq!(model.page_history, vec![Page::Overview, Page::Users]);

        assert!(model.navigate_back());
        assert_eq!(model.page, Page::Users);
        assert!(model.navigate_back());
        assert_eq!(model.page, Page::Overview);
        assert!(!model.navigate_back());
    }

    #[test]
    fn navigate_to_current_page_is_noop() {
        let mut model = test_model();
        assert!(!model.navigate_to(Page::Overview));
        assert!(model.page_history.is_empty());
    }

    // ── notifications ──

    #[test]
    fn push_notification_assigns_monotonic_ids() {
        let mut model = test_model();
        let a = model.push_notification(NotificationLevel::Info, "first", "");
        let b = model.push_notification(NotificationLevel::Info, "second", "");
        assert!(b > a);
    }

    #[test]
    fn push_notification_evicts_oldest_beyond_cap() {
        let mut model = test_model();
        let cap = model.config.console.max_visible_toasts;
        for i in 0..=cap {
            model.push_notification(NotificationLevel::Info, format!("toast {i}"), "");
        }
        assert_eq!(model.notifications.len(), cap);
        assert_eq!(model.notifications[0].title, "toast 1");
    }

    #[test]
    fn expire_notification_removes_by_id() {
        let mut model = test_model();
        let id = model.push_notification(NotificationLevel::Success, "done", "");
        model.expire_notification(id);
        assert!(model.notifications.is_empty());
    }

    // ── detail dialog ──

    #[test]
    fn open_detail_replaces_previous_snapshot() {
        let mut model = test_model();
        let first = model.users.records()[0].clone();
        let second = model.users.records()[1].clone();

        model.open_detail(FocusedRecord::User(first));
        assert_eq!(model.focused.as_ref().map(FocusedRecord::id), Some("U001"));

        model.open_detail(FocusedRecord::User(second));
        assert_eq!(model.focused.as_ref().map(FocusedRecord::id), Some("U002"));
        match &model.focused {
            Some(FocusedRecord::User(user)) => assert_eq!(user.name, "Sarah Wilson"),
            other => panic!("unexpected focus: {other:?}"),
        }
    }

    #[test]
    fn closing_detail_clears_focus() {
        let mut model = test_model();
        let user = model.users.records()[0].clone();
        model.open_detail(FocusedRecord::User(user));
        model.close_overlay();
        assert_eq!(model.active_overlay, None);
        assert!(model.focused.is_none());
    }

    #[test]
    fn closing_help_keeps_focus_untouched() {
        let mut model = test_model();
        let user = model.users.records()[0].clone();
        model.open_detail(FocusedRecord::User(user));
        // A help overlay opened on top replaces the detail overlay.
        model.active_overlay = Some(Overlay::Help);
        model.close_overlay();
        assert!(model.focused.is_some());
    }

    // ── settings editor ──

    #[test]
    fn settings_cursor_walks_all_fields() {
        let mut model = test_model();
        assert_eq!(model.settings_field(), SettingsField::RefreshInterval);
        for _ in 0..SettingsField::ALL.len() {
            model.settings_cursor_down();
        }
        assert_eq!(model.settings_field(), SettingsField::AvoidHighways);
        assert!(!model.settings_cursor_down());
    }

    #[test]
    fn settings_adjust_respects_bounds() {
        let mut model = test_model();
        model.draft.console.refresh_interval_ms = 100;
        model.settings_adjust(false);
        assert_eq!(model.draft.console.refresh_interval_ms, 100);
        model.settings_adjust(true);
        assert_eq!(model.draft.console.refresh_interval_ms, 200);
    }

    #[test]
    fn settings_start_page_wraps_both_ways() {
        let mut model = test_model();
        model.settings_cursor = 1;
        model.draft.console.start_page = 7;
        model.settings_adjust(true);
        assert_eq!(model.draft.console.start_page, 1);
        model.settings_adjust(false);
        assert_eq!(model.draft.console.start_page, 7);
    }

    #[test]
    fn settings_dirty_tracks_draft_divergence() {
        let mut model = test_model();
        assert!(!model.settings_dirty());
        model.settings_adjust(true);
        assert!(model.settings_dirty());
    }

    // ── search ──

    #[test]
    fn search_push_and_pop_edit_active_page_query() {
        let mut model = test_model();
        model.navigate_to(Page::Users);
        model.search_push('s');
        model.search_push('a');
        assert_eq!(model.active_query(), Some("sa"));
        model.search_pop();
        assert_eq!(model.active_query(), Some("s"));
    }

    #[test]
    fn search_is_inert_on_pages_without_lists() {
        let mut model = test_model();
        model.search_push('x');
        assert_eq!(model.active_query(), None);
    }

    // ── confirm actions ──

    #[test]
    fn confirm_action_counts_target_page_selection() {
        let mut model = test_model();
        model.reviews.selection.toggle("RV001");
        model.reviews.selection.toggle("RV002");
        model.users.selection.toggle("U001");
        assert_eq!(model.selection_count_for(ConfirmAction::ApproveSelected), 2);
        assert_eq!(model.selection_count_for(ConfirmAction::SuspendSelected), 1);
    }

    #[test]
    fn pickup_status_counts_match_seed() {
        let model = test_model();
        assert_eq!(model.pickup_status_count(PickupStatus::Scheduled), 1);
        assert_eq!(model.pickup_status_count(PickupStatus::Completed), 1);
        assert_eq!(model.pickup_status_count(PickupStatus::Cancelled), 0);
    }

    #[test]
    fn account_status_axis_is_three_valued() {
        // Guard for the Users page filter cycle length.
        assert_eq!(AccountStatus::ALL.len(), 3);
    }
}
