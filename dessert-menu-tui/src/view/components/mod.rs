//! 可复用 UI 组件

pub mod detail_sheet;
pub mod statusbar;
