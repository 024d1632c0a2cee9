//! Help modal listing keybindings

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme::Theme;
use super::widgets::centered_rect;
use crate::input::KeybindingEntry;

pub fn render_help(frame: &mut Frame, keybindings: &[KeybindingEntry], scroll: usize) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(" Help ")
        .title_style(Theme::title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut last_category = "";
    for entry in keybindings {
        if entry.category != last_category {
            if !last_category.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(entry.category, Theme::title())));
            last_category = entry.category;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", entry.key), Theme::help_key()),
            Span::styled(entry.description.clone(), Theme::help_desc()),
        ]));
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll)
        .take(inner.height as usize)
        .collect();

    let paragraph = Paragraph::new(visible);
    frame.render_widget(paragraph, inner);
}
