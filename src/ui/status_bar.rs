//! Status bar rendering

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Theme;
use crate::constants::SPINNER_FRAME_MS;

/// Status bar info for rendering
pub struct StatusInfo<'a> {
    pub loading: bool,
    pub tone: &'a str,
    pub draft_count: usize,
    pub message: &'a str,
    /// Whether there's an unacknowledged error (show indicator)
    pub has_error: bool,
    pub token_configured: bool,
}

/// Calculate display width of a string (accounting for Unicode)
fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

pub fn status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo) {
    let style = Theme::status_bar();
    let width = area.width as usize;

    // Left side: activity indicator, tone, draft count
    let (indicator, indicator_style) = if info.loading {
        (format!(" {} ", spinner_char()), Theme::status_loading())
    } else {
        (" ● ".to_string(), Theme::status_ready())
    };

    let error_indicator = if info.has_error { "! " } else { "" };

    let left_info = format!("redraft │ Tone: {} │ Drafts: {}", info.tone, info.draft_count);

    // Right side: status message, missing-token warning
    let token_warning = if info.token_configured {
        String::new()
    } else {
        " no token ".to_string()
    };
    let message = if info.message.is_empty() {
        String::new()
    } else {
        format!("{} ", info.message)
    };

    let left_width = display_width(&indicator) + display_width(error_indicator) + display_width(&left_info);
    let right_width = display_width(&message) + display_width(&token_warning);
    let padding = " ".repeat(width.saturating_sub(left_width + right_width));

    let mut spans = vec![Span::styled(indicator, indicator_style)];
    if info.has_error {
        spans.push(Span::styled(error_indicator, Theme::status_warn()));
    }
    spans.push(Span::styled(left_info, style));
    spans.push(Span::styled(padding, style));
    spans.push(Span::styled(message, style));
    if !info.token_configured {
        spans.push(Span::styled(token_warning, Theme::status_warn()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).style(style);
    frame.render_widget(paragraph, area);
}

/// Get an animated spinner character for loading states
pub fn spinner_char() -> char {
    let spinner = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    let idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis()
        / SPINNER_FRAME_MS) as usize
        % spinner.chars().count();

    spinner.chars().nth(idx).unwrap_or('*')
}
