use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::status_bar::{StatusInfo, status_bar};
use super::theme::Theme;
use super::widgets::{error_bar, help_bar};
use crate::ai::Tone;
use crate::app::state::{AppState, Field};

struct ComposeLayout {
    status_area: Rect,
    email_area: Rect,
    tone_area: Rect,
    reply_area: Rect,
    help_area: Rect,
}

fn compute_layout(area: Rect) -> ComposeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Status bar
            Constraint::Percentage(35), // Email input
            Constraint::Length(3),      // Tone selector
            Constraint::Min(0),         // Generated reply
            Constraint::Length(1),      // Help bar
        ])
        .split(area);

    ComposeLayout {
        status_area: chunks[0],
        email_area: chunks[1],
        tone_area: chunks[2],
        reply_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn render_compose(frame: &mut Frame, state: &AppState) {
    let layout = compute_layout(frame.area());

    status_bar(
        frame,
        layout.status_area,
        &StatusInfo {
            loading: state.status.loading,
            tone: state.tone.label(),
            draft_count: state.drafts.len(),
            message: &state.status.message,
            has_error: state.status.has_unacknowledged_error,
            token_configured: state.token_configured,
        },
    );

    render_email_field(
        frame,
        layout.email_area,
        &state.email_input,
        state.focus == Field::Email,
    );

    render_tone_selector(frame, layout.tone_area, state.tone, state.focus == Field::Tone);

    render_reply_pane(frame, layout.reply_area, state);

    // Help bar or error
    if let Some(ref error) = state.status.error {
        error_bar(frame, layout.help_area, error);
    } else {
        let hints: &[(&str, &str)] = if state.reply.is_some() {
            &[
                ("Ctrl+R", "regenerate"),
                ("Ctrl+Y", "copy"),
                ("Ctrl+S", "save draft"),
                ("Ctrl+D", "drafts"),
                ("F1", "help"),
                ("Ctrl+Q", "quit"),
            ]
        } else {
            &[
                ("Ctrl+G", "generate"),
                ("Tab", "focus"),
                ("Ctrl+D", "drafts"),
                ("F1", "help"),
                ("Ctrl+Q", "quit"),
            ]
        };
        help_bar(frame, layout.help_area, hints);
    }
}

fn render_email_field(frame: &mut Frame, area: Rect, value: &str, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let char_count = value.chars().count();
    let title = format!(" Email ({} chars) ", char_count);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if value.is_empty() && !focused {
        let placeholder = Paragraph::new("Paste the email you want to reply to here...")
            .style(Theme::text_muted());
        frame.render_widget(placeholder, inner);
        return;
    }

    let style = if focused {
        Theme::text()
    } else {
        Theme::text_secondary()
    };

    let text = if focused {
        format!("{}│", value)
    } else {
        value.to_string()
    };

    // Keep the cursor visible for long inputs: scroll past lines that do
    // not fit the pane.
    let line_count = text.lines().count() as u16;
    let overflow = line_count.saturating_sub(inner.height);

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((overflow, 0));
    frame.render_widget(paragraph, inner);
}

fn render_tone_selector(frame: &mut Frame, area: Rect, tone: Tone, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Tone ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = Vec::new();
    for (i, t) in Tone::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Theme::text_muted()));
        }
        let style = if *t == tone {
            Theme::selected()
        } else if focused {
            Theme::text()
        } else {
            Theme::text_secondary()
        };
        spans.push(Span::styled(format!(" {} ", t.label()), style));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, inner);
}

fn render_reply_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.status.loading {
        " Generated Reply (working...) ".to_string()
    } else {
        " Generated Reply ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.status.loading {
        let paragraph = Paragraph::new("Contacting the generation service...")
            .style(Theme::text_muted());
        frame.render_widget(paragraph, inner);
        return;
    }

    match &state.reply {
        Some(reply) => {
            let paragraph = Paragraph::new(reply.as_str())
                .style(Theme::text())
                .wrap(Wrap { trim: false })
                .scroll((state.reply_scroll as u16, 0));
            frame.render_widget(paragraph, inner);
        }
        None => {
            let paragraph = Paragraph::new("No reply yet. Press Ctrl+G to generate one.")
                .style(Theme::text_muted());
            frame.render_widget(paragraph, inner);
        }
    }
}
