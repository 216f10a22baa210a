//! Generic filterable list state shared by every table page.
//!
//! A [`ListView`] owns a record collection plus the three pieces of
//! interaction state every page repeats: filter criteria, a selection set
//! for bulk actions, and a cursor over the filtered rows. Filtering is pure
//! and order-preserving; the selection set deliberately survives filter
//! changes (a bulk action can therefore target rows that are currently
//! filtered out — callers that want view-local semantics re-select).

use super::records::{Record, StatusKind, Tier, UserAccount};

/// Status axis of the filter: everything, or exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S: StatusKind> {
    All,
    Only(S),
}

impl<S: StatusKind> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: StatusKind> StatusFilter<S> {
    /// Advance to the next filter state, wrapping `All → S1 → … → Sn → All`.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::All => S::ALL.first().copied().map_or(Self::All, Self::Only),
            Self::Only(current) => {
                let position = S::ALL.iter().position(|s| *s == current);
                match position {
                    Some(index) if index + 1 < S::ALL.len() => Self::Only(S::ALL[index + 1]),
                    _ => Self::All,
                }
            }
        }
    }

    #[must_use]
    pub fn matches(self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.label(),
        }
    }
}

/// Combined filter: status axis plus case-insensitive substring search.
///
/// Invalid criteria are unrepresentable; any value of this type is a valid
/// filter. An empty query matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<S: StatusKind> {
    pub status: StatusFilter<S>,
    pub query: String,
}

// Manual impl: a derive would require `S: Default`, which status enums
// deliberately do not implement.
impl<S: StatusKind> Default for FilterCriteria<S> {
    fn default() -> Self {
        Self {
            status: StatusFilter::default(),
            query: String::new(),
        }
    }
}

impl<S: StatusKind> FilterCriteria<S> {
    #[must_use]
    pub fn matches<R: Record<Status = S>>(&self, record: &R) -> bool {
        if !self.status.matches(record.status()) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Pure, order-preserving filter over a record slice.
#[must_use]
pub fn filter_records<'a, R: Record>(
    records: &'a [R],
    criteria: &FilterCriteria<R::Status>,
) -> Vec<&'a R> {
    records.iter().filter(|r| criteria.matches(*r)).collect()
}

/// Secondary filter axis layered under the status/search criteria.
///
/// Most pages have no secondary axis; the Users page filters by reward tier
/// in addition to account status.
pub trait ExtraFilter<R>: Default {
    fn admits(&self, record: &R) -> bool;
}

/// The trivial secondary axis: admits everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoExtra;

impl<R> ExtraFilter<R> for NoExtra {
    fn admits(&self, _record: &R) -> bool {
        true
    }
}

/// Reward-tier axis for the Users page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierFilter(pub StatusFilter<Tier>);

impl ExtraFilter<UserAccount> for TierFilter {
    fn admits(&self, record: &UserAccount) -> bool {
        self.0.matches(record.tier)
    }
}

/// Ordered set of selected record ids.
///
/// Selection is independent of the active filter: changing criteria never
/// prunes it. `select_all` replaces the set with the ids handed to it
/// (callers pass the currently visible ids).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if let Some(position) = self.ids.iter().position(|known| known == id) {
            self.ids.remove(position);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Replace the selection with the given ids, dropping duplicates.
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ids.clear();
        for id in ids {
            let id = id.into();
            if !self.is_selected(&id) {
                self.ids.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Interaction state for one table page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R: Record, X: ExtraFilter<R> = NoExtra> {
    records: Vec<R>,
    pub criteria: FilterCriteria<R::Status>,
    pub extra: X,
    pub selection: SelectionSet,
    cursor: usize,
}

impl<R: Record + Clone, X: ExtraFilter<R>> ListView<R, X> {
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            criteria: FilterCriteria::default(),
            extra: X::default(),
            selection: SelectionSet::default(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Indices into `records()` that pass both filter axes, source order.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.criteria.matches(*r) && self.extra.admits(r))
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible_indices().len()
    }

    /// Ids of the currently visible rows, in render order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_indices()
            .into_iter()
            .map(|index| self.records[index].id().to_string())
            .collect()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Record under the cursor, if any row is visible.
    #[must_use]
    pub fn current(&self) -> Option<&R> {
        let visible = self.visible_indices();
        visible.get(self.cursor).map(|&index| &self.records[index])
    }

    /// Move the cursor up one visible row. Returns whether it moved.
    pub fn cursor_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor down one visible row. Returns whether it moved.
    pub fn cursor_down(&mut self) -> bool {
        let len = self.visible_len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Clamp the cursor into the current visible range after a filter change.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Advance the status filter and reset the cursor to the top.
    pub fn cycle_status(&mut self) {
        self.criteria.status = self.criteria.status.cycle();
        self.cursor = 0;
    }

    /// Replace the search query, clamping the cursor to the new view.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.clamp_cursor();
    }

    /// Toggle selection of the row under the cursor. Returns the id if a row
    /// was visible.
    pub fn toggle_current(&mut self) -> Option<String> {
        let id = self.current().map(|record| record.id().to_string())?;
        self.selection.toggle(&id);
        Some(id)
    }

    /// Select exactly the currently visible rows.
    pub fn select_all_visible(&mut self) {
        let ids = self.visible_ids();
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Record with the given id, regardless of filter visibility.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }
}
