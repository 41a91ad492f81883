//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area);
    render_page_content(app, frame, content_area);
    components::statusbar::render(app, frame, status_area);

    // 渲染详情弹窗（在最上层）
    components::detail_sheet::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Dessert Menu v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染列表内容区
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    // 弹窗打开时列表失去焦点
    let border_style = if app.detail.is_visible() {
        Styles::border()
    } else {
        Styles::border_focused()
    };

    let block = Block::default()
        .title(format!(" {} ", app.config.category))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::catalog::render(app, frame, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dessert_menu_provider::{DetailItem, IngredientSlots, ListItem, ListResponse};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::message::{AppMessage, CatalogMessage};
    use crate::update::update;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn renders_catalog_names() {
        let mut app = App::default();
        let items = ["Apam balik", "Bakewell tart"]
            .iter()
            .enumerate()
            .map(|(i, name)| ListItem {
                id: i.to_string(),
                name: (*name).to_string(),
                thumbnail_url: String::new(),
            })
            .collect();
        update(
            &mut app,
            AppMessage::Catalog(CatalogMessage::Loaded(Ok(ListResponse { items }))),
        );

        let screen = draw(&app);
        assert!(screen.contains("Apam balik"));
        assert!(screen.contains("Bakewell tart"));
        assert!(screen.contains("Dessert"));
    }

    #[test]
    fn renders_detail_sheet() {
        let mut app = App::default();
        let generation = app.detail.begin_request("52855");
        app.detail.show(
            generation,
            DetailItem {
                id: "52855".to_string(),
                name: "Banana Pancakes".to_string(),
                thumbnail_url: String::new(),
                instructions: "Mash the banana.".to_string(),
                ingredients: ["banana", "eggs"].into_iter().collect::<IngredientSlots>(),
            },
        );

        let screen = draw(&app);
        assert!(screen.contains("Banana Pancakes"));
        assert!(screen.contains("Banana, Eggs"));
        assert!(screen.contains("Mash the banana."));
    }

    #[test]
    fn renders_empty_state() {
        let screen = draw(&App::default());
        assert!(screen.contains("No recipes"));
    }
}
