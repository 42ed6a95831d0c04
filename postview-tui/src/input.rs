use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::selection::Selection;
use postview_core::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Previous,
    Next,
    First,
    Last,
}

impl Action {
    /// Apply a navigation action. Returns true when the loop should stop.
    pub fn apply(self, selection: &mut Selection, posts: &[Post]) -> bool {
        match self {
            Self::Quit => return true,
            Self::Previous => selection.previous(posts),
            Self::Next => selection.next(posts),
            Self::First => selection.first(posts),
            Self::Last => selection.last(posts),
        }
        false
    }
}

pub fn action_for_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Previous),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Next),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
        _ => None,
    }
}
