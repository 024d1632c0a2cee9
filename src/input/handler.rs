use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::{AppState, Field, View};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) => handle_key(key_event, state, bindings),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    // Check if we're in the help modal
    if state.modal.is_help() {
        return handle_help_input(key, bindings);
    }

    // Check if we're in the drafts view
    if matches!(state.view, View::Drafts) {
        return handle_drafts_input(key, bindings);
    }

    // Compose view: global chords first, then field-specific input
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    match state.focus {
        Field::Email => handle_email_input(key),
        Field::Tone => handle_tone_input(key),
    }
}

fn handle_help_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // In help modal: Up/Down scroll, Esc or F1 closes
    if let Some(action) = bindings.get(&key) {
        match action {
            Action::Help | Action::Up | Action::Down => return InputResult::Action(action),
            Action::Quit => return InputResult::Quit,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputResult::Action(Action::Help),
        KeyCode::Char('k') => InputResult::Action(Action::Up),
        KeyCode::Char('j') => InputResult::Action(Action::Down),
        _ => InputResult::Continue,
    }
}

fn handle_drafts_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // No text entry here, so vim keys work alongside the chords
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    match key.code {
        KeyCode::Char('k') => InputResult::Action(Action::Up),
        KeyCode::Char('j') => InputResult::Action(Action::Down),
        KeyCode::Char('y') => InputResult::Action(Action::CopyReply),
        KeyCode::Char('q') => InputResult::Action(Action::Back),
        KeyCode::Enter => InputResult::Action(Action::CopyReply),
        _ => InputResult::Continue,
    }
}

fn handle_email_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char(c) => {
            // SHIFT produces uppercase chars; other modifier combos are not
            // text input
            if key
                .modifiers
                .difference(KeyModifiers::SHIFT)
                .is_empty()
            {
                InputResult::Char(c)
            } else {
                InputResult::Continue
            }
        }
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => InputResult::Char('\n'),
        _ => InputResult::Continue,
    }
}

fn handle_tone_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Left => InputResult::Action(Action::Up),
        KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Right => {
            InputResult::Action(Action::Down)
        }
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_q_quits() {
        let bindings = KeyBindings::new();
        let state = AppState::default();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let result = handle_key(key, &state, &bindings);

        assert!(matches!(result, InputResult::Quit));
    }

    #[test]
    fn test_plain_char_reaches_email_field() {
        let bindings = KeyBindings::new();
        let state = AppState::default(); // focus defaults to Email

        let key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        let result = handle_key(key, &state, &bindings);

        assert!(matches!(result, InputResult::Char('g')));
    }

    #[test]
    fn test_enter_inserts_newline_in_email_field() {
        let bindings = KeyBindings::new();
        let state = AppState::default();

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let result = handle_key(key, &state, &bindings);

        assert!(matches!(result, InputResult::Char('\n')));
    }

    #[test]
    fn test_tone_focus_cycles_with_arrows() {
        let bindings = KeyBindings::new();
        let state = AppState {
            focus: Field::Tone,
            ..Default::default()
        };

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let result = handle_key(key, &state, &bindings);

        assert!(matches!(result, InputResult::Action(Action::Down)));
    }

    #[test]
    fn test_drafts_view_vim_navigation() {
        let bindings = KeyBindings::new();
        let state = AppState {
            view: View::Drafts,
            ..Default::default()
        };

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            handle_key(key, &state, &bindings),
            InputResult::Action(Action::Down)
        ));

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            handle_key(key, &state, &bindings),
            InputResult::Action(Action::Back)
        ));
    }
}
