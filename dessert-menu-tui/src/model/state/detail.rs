//! 详情弹窗状态
//!
//! `selected` and `visible` are private: they only change together, through
//! [`DetailState::show`] and [`DetailState::dismiss`], so a visible sheet
//! always has a record and never shows one from an abandoned request.

use dessert_menu_provider::DetailItem;

/// Detail lifecycle, derived from the state below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    NoSelection,
    Loading,
    Shown,
}

/// The detail request currently waited on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDetail {
    id: String,
    generation: u64,
}

/// 详情弹窗状态
#[derive(Debug, Default)]
pub struct DetailState {
    selected: Option<DetailItem>,
    visible: bool,
    pending: Option<PendingDetail>,
    /// Bumped for every detail request
    generation: u64,
    /// 滚动偏移
    pub scroll: u16,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&DetailItem> {
        self.selected.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> DetailPhase {
        if self.visible {
            DetailPhase::Shown
        } else if self.pending.is_some() {
            DetailPhase::Loading
        } else {
            DetailPhase::NoSelection
        }
    }

    /// Start waiting for `id`; any earlier request becomes stale.
    pub fn begin_request(&mut self, id: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some(PendingDetail {
            id: id.into(),
            generation: self.generation,
        });
        self.generation
    }

    /// Whether a request for `id` is already in flight.
    pub fn is_pending_for(&self, id: &str) -> bool {
        self.pending.as_ref().is_some_and(|p| p.id == id)
    }

    /// Whether a completion stamped `generation` is the one being waited on.
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.generation == generation)
    }

    /// Present a fetched record. Stale completions are ignored (`false`).
    pub fn show(&mut self, generation: u64, item: DetailItem) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        self.selected = Some(item);
        self.visible = true;
        self.scroll = 0;
        true
    }

    /// Give up on a failed request, leaving the previous record as it was.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Hide the sheet and abandon any in-flight request. The record is kept.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.pending = None;
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}
