//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!     ┌──────────────────────────────────────┐
//!     │ 标题栏                               │
//!     ├──────────────────────────────────────┤
//!     │ 食谱列表 (pages/catalog)             │
//!     │          ┌────────────────┐          │
//!     │          │ 详情弹窗        │          │
//!     │          │ (detail_sheet) │          │
//!     │          └────────────────┘          │
//!     ├──────────────────────────────────────┤
//!     │ 状态栏 (components/statusbar)         │
//!     └──────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
mod theme;

pub use layout::render;
