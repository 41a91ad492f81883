//! 食谱列表状态

use dessert_menu_provider::ListItem;

/// Catalog lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; the previous items are still shown
    Failed(String),
}

/// 食谱列表状态
#[derive(Debug, Default)]
pub struct CatalogState {
    /// Items in server order; only ever replaced as a whole
    items: Vec<ListItem>,
    /// 当前选中的索引
    pub selected: usize,
    pub phase: LoadPhase,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Enter `Loading`. Returns `false` if a fetch is already in flight.
    pub fn begin_loading(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Swap in a freshly fetched list.
    ///
    /// The cursor stays on the same recipe if it is still listed, otherwise
    /// it goes back to the top.
    pub fn replace_items(&mut self, items: Vec<ListItem>) {
        let previous_id = self.selected_item().map(|item| item.id.clone());
        self.items = items;
        self.selected = previous_id
            .and_then(|id| self.items.iter().position(|item| item.id == id))
            .unwrap_or(0);
        self.phase = LoadPhase::Loaded;
    }

    /// Record a failed fetch without touching the items.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed(message.into());
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    /// 获取当前选中的食谱
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.get(self.selected)
    }
}
