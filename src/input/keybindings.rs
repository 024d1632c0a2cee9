use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    Up,
    Down,
    PageUp,
    PageDown,
    NextField,
    PrevField,

    // Generation
    Generate,
    Regenerate,

    // Reply handling
    SaveDraft,
    CopyReply,

    // Views
    ToggleDrafts,
    Back,
    Help,
    Quit,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

/// A displayable keybinding entry
#[derive(Debug, Clone)]
pub struct KeybindingEntry {
    pub key: String,
    pub description: String,
    pub category: &'static str,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut map = HashMap::new();

        // The email field owns plain characters, so every global action is
        // a control chord, a function key, or a non-text key.
        map.insert(ctrl_key('g'), Action::Generate);
        map.insert(ctrl_key('r'), Action::Regenerate);
        map.insert(ctrl_key('s'), Action::SaveDraft);
        map.insert(ctrl_key('y'), Action::CopyReply);
        map.insert(ctrl_key('d'), Action::ToggleDrafts);
        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(key_code(KeyCode::F(1)), Action::Help);

        map.insert(key_code(KeyCode::Tab), Action::NextField);
        map.insert(key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(key_code(KeyCode::Esc), Action::Back);

        map.insert(key_code(KeyCode::Up), Action::Up);
        map.insert(key_code(KeyCode::Down), Action::Down);
        map.insert(key_code(KeyCode::PageUp), Action::PageUp);
        map.insert(key_code(KeyCode::PageDown), Action::PageDown);

        Self { bindings: map }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Get all keybindings as displayable entries grouped by category
    pub fn all_bindings(&self) -> Vec<KeybindingEntry> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(event, action)| KeybindingEntry {
                key: format_key_event(event),
                description: action_description(action).to_string(),
                category: action_category(action),
            })
            .collect();

        entries.sort_by(|a, b| {
            let cat_order = category_order(a.category).cmp(&category_order(b.category));
            if cat_order == std::cmp::Ordering::Equal {
                a.description.cmp(&b.description)
            } else {
                cat_order
            }
        });
        entries
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn format_key_event(event: &KeyEvent) -> String {
    let key = match event.code {
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{:?}", other),
    };

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", key)
    } else {
        key
    }
}

fn action_description(action: &Action) -> &'static str {
    match action {
        Action::Up => "Move up / previous tone",
        Action::Down => "Move down / next tone",
        Action::PageUp => "Scroll reply up",
        Action::PageDown => "Scroll reply down",
        Action::NextField => "Focus next field",
        Action::PrevField => "Focus previous field",
        Action::Generate => "Generate reply",
        Action::Regenerate => "Regenerate reply",
        Action::SaveDraft => "Save reply as draft",
        Action::CopyReply => "Copy reply to clipboard",
        Action::ToggleDrafts => "Open/close drafts",
        Action::Back => "Back / dismiss",
        Action::Help => "Toggle help",
        Action::Quit => "Quit",
    }
}

fn action_category(action: &Action) -> &'static str {
    match action {
        Action::Up | Action::Down | Action::PageUp | Action::PageDown => "Navigation",
        Action::NextField | Action::PrevField => "Navigation",
        Action::Generate | Action::Regenerate => "Generation",
        Action::SaveDraft | Action::CopyReply => "Reply",
        Action::ToggleDrafts | Action::Back | Action::Help | Action::Quit => "General",
    }
}

fn category_order(category: &str) -> usize {
    match category {
        "Generation" => 0,
        "Reply" => 1,
        "Navigation" => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_binding() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.get(&ctrl_key('g')), Some(Action::Generate));
    }

    #[test]
    fn test_plain_chars_unbound() {
        // Plain characters must reach the email input untouched
        let bindings = KeyBindings::new();
        let g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(bindings.get(&g), None);
    }

    #[test]
    fn test_all_bindings_listed_for_help() {
        let entries = KeyBindings::new().all_bindings();
        assert!(entries.iter().any(|e| e.description.contains("Generate")));
        assert!(entries.iter().any(|e| e.key == "Ctrl+Q"));
    }
}
