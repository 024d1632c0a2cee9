use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::status_bar::{StatusInfo, status_bar};
use super::theme::Theme;
use super::widgets::{error_bar, help_bar, truncate_string};
use crate::app::state::AppState;

pub fn render_drafts(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Status bar
            Constraint::Percentage(40), // Draft list
            Constraint::Min(0),         // Selected draft preview
            Constraint::Length(1),      // Help bar
        ])
        .split(frame.area());

    status_bar(
        frame,
        chunks[0],
        &StatusInfo {
            loading: state.status.loading,
            tone: state.tone.label(),
            draft_count: state.drafts.len(),
            message: &state.status.message,
            has_error: state.status.has_unacknowledged_error,
            token_configured: state.token_configured,
        },
    );

    // Draft list
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(format!(" Saved Drafts ({}) ", state.drafts.len()))
        .title_style(Theme::title());

    if state.drafts.is_empty() {
        let inner = list_block.inner(chunks[1]);
        frame.render_widget(list_block, chunks[1]);
        let paragraph = Paragraph::new("No saved drafts yet. Generate a reply and press Ctrl+S.")
            .style(Theme::text_muted());
        frame.render_widget(paragraph, inner);
    } else {
        let item_width = chunks[1].width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = state
            .drafts
            .iter()
            .enumerate()
            .map(|(idx, draft)| {
                let first_line = draft.reply.lines().next().unwrap_or("");
                let preview_len = item_width.saturating_sub(draft.date.chars().count() + 3);
                let line = Line::from(vec![
                    Span::styled(draft.date.clone(), Theme::text_accent()),
                    Span::styled("  ", Theme::text_muted()),
                    Span::styled(truncate_string(first_line, preview_len), Theme::text()),
                ]);
                let item = ListItem::new(line);
                if idx == state.drafts_view.selected {
                    item.style(Theme::selected())
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items).block(list_block);
        let mut list_state = ListState::default().with_selected(Some(state.drafts_view.selected));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    // Preview of the selected draft
    let preview_title = match state.selected_draft() {
        Some(draft) => format!(" Draft from {} ", draft.date),
        None => " Draft ".to_string(),
    };
    let preview_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(preview_title);

    let inner = preview_block.inner(chunks[2]);
    frame.render_widget(preview_block, chunks[2]);

    if let Some(draft) = state.selected_draft() {
        let paragraph = Paragraph::new(draft.reply.as_str())
            .style(Theme::text())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    // Help bar or error
    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[3], error);
    } else {
        help_bar(
            frame,
            chunks[3],
            &[
                ("j/k", "navigate"),
                ("y", "copy"),
                ("Esc", "back"),
                ("Ctrl+Q", "quit"),
            ],
        );
    }
}
