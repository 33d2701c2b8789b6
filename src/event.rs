//! Keyboard and mouse event handling.
//!
//! This module maps terminal input to actions:
//! - `Left` / `Right`: previous / next slide (through the key handler)
//! - `f` / `F`: toggle fullscreen
//! - `q`, `Esc`, `Ctrl+C`: quit
//! - Left click on the prev / next control or an indicator dot

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::model::{Input, NavKey};
use crate::ui::{ChromeLayout, Target};

/// Actions that can be triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (input not recognized)
    None,
    /// Quit the application
    Quit,
    /// Feed a navigation input to the controller
    Navigate(Input),
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for terminal events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action.
///
/// Mouse clicks are resolved against `layout`, the layout of the last frame.
pub fn handle_event(event: Event, layout: &ChromeLayout) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, layout),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Maps a key to the navigation keys the controller understands.
pub fn nav_key(code: KeyCode) -> NavKey {
    match code {
        KeyCode::Left => NavKey::ArrowLeft,
        KeyCode::Right => NavKey::ArrowRight,
        _ => NavKey::Other,
    }
}

fn handle_key_event(key: KeyEvent) -> Action {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('f') | KeyCode::Char('F') => Action::ToggleFullscreen,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        code => match nav_key(code) {
            NavKey::Other => Action::None,
            key => Action::Navigate(Input::Key(key)),
        },
    }
}

fn handle_mouse_event(mouse: MouseEvent, layout: &ChromeLayout) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::None;
    }

    match layout.hit(mouse.column, mouse.row) {
        Some(Target::Prev) => Action::Navigate(Input::Prev),
        Some(Target::Next) => Action::Navigate(Input::Next),
        Some(Target::Indicator(index)) => Action::Navigate(Input::GoTo(index)),
        None => Action::None,
    }
}
