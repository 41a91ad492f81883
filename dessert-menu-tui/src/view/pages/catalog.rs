//! 食谱列表页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::{App, LoadPhase};
use crate::view::theme::{colors, Styles};

/// 渲染食谱列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.catalog.is_empty() {
        render_empty(app, frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let (headline, hint, color) = match &app.catalog.phase {
        LoadPhase::Loading => ("Loading recipes...".to_string(), "", c.fg),
        LoadPhase::Failed(message) => (
            format!("Could not load recipes: {message}"),
            "Press r to retry",
            c.error,
        ),
        LoadPhase::Idle | LoadPhase::Loaded => {
            ("No recipes found".to_string(), "Press r to refresh", c.muted)
        }
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {headline}"), Style::default().fg(color)),
        Line::from(""),
        Line::styled(format!("  {hint}"), Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染食谱列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == app.catalog.selected;

            let (marker, name_style, id_style) = if is_selected {
                ("▶ ", Styles::selected(), Styles::selected())
            } else {
                ("  ", Style::default().fg(colors().fg), Styles::muted())
            };

            let line = Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(item.name.as_str(), name_style),
                Span::styled(format!("  #{}", item.id), id_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.catalog.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
