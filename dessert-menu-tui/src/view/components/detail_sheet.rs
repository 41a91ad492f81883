//! 详情弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use dessert_menu_provider::DetailItem;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染详情弹窗（如果可见）
pub fn render(app: &App, frame: &mut Frame) {
    if !app.detail.is_visible() {
        return;
    }
    let Some(item) = app.detail.selected() else {
        return;
    };

    let screen = frame.area();
    let width = (screen.width / 5 * 4).max(40);
    let height = (screen.height / 5 * 4).max(10);
    let area = centered_rect(width, height, screen);

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", item.name))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 缩略图地址
            Constraint::Min(1),    // 配料 + 做法
        ])
        .split(inner);

    render_header(item, frame, sections[0]);
    render_body(item, app.detail.scroll, frame, sections[1]);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_header(item: &DetailItem, frame: &mut Frame, area: Rect) {
    let thumbnail = if item.thumbnail_url.is_empty() {
        Span::styled("(no image)", Styles::muted())
    } else {
        Span::styled(item.thumbnail_url.as_str(), Styles::muted())
    };
    let line = Line::from(vec![Span::styled("Image: ", Styles::hint_desc()), thumbnail]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_body(item: &DetailItem, scroll: u16, frame: &mut Frame, area: Rect) {
    let c = colors();
    let ingredients = item.ingredients_display();

    let mut lines = vec![
        Line::styled("Ingredients", Styles::title()),
        if ingredients.is_empty() {
            Line::styled("None listed", Styles::muted())
        } else {
            Line::styled(ingredients, Style::default().fg(c.fg))
        },
        Line::from(""),
        Line::styled("Instructions", Styles::title()),
    ];
    lines.extend(
        item.instructions
            .lines()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(c.fg))),
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
