//! Application controller.
//!
//! This module orchestrates the main application loop:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - Navigation updates, fullscreen toggling and rendering

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::event::{handle_event, poll_event, Action};
use crate::fullscreen::{toggle_fullscreen, Fullscreen, TerminalFullscreen};
use crate::model::Deck;
use crate::navigation::NavigationController;
use crate::ui::glyphs::{self, Glyphs};
use crate::ui::{render, ChromeLayout, TerminalSurface};

/// Viewer options collected from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    /// Use Unicode arrows and dots instead of ASCII
    pub fancy: bool,
    /// Whether fullscreen requests are forwarded to the terminal
    pub allow_fullscreen: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fancy: false,
            allow_fullscreen: true,
        }
    }
}

/// Applies an action to the navigation and fullscreen state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action<F: Fullscreen>(
    navigation: &mut NavigationController<TerminalSurface>,
    fullscreen: &mut F,
    action: Action,
) -> bool {
    match action {
        Action::None => {}
        Action::Quit => return false,
        Action::Navigate(input) => navigation.dispatch(input),
        Action::ToggleFullscreen => toggle_fullscreen(fullscreen),
        Action::Resize(_, _) => {
            // The next draw picks up the new size
        }
    }
    true
}

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Navigation over the deck
    navigation: NavigationController<TerminalSurface>,
    /// Terminal fullscreen capability
    fullscreen: TerminalFullscreen<Stdout>,
    /// Layout of the last drawn frame, for mouse hit-testing
    layout: ChromeLayout,
    glyphs: Glyphs,
    /// Event poll timeout
    tick_rate: Duration,
}

impl App {
    /// Creates a new application presenting `deck`.
    pub fn new(deck: Deck, options: AppOptions) -> Result<Self> {
        let navigation = NavigationController::new(TerminalSurface::new(deck))?;

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            navigation,
            fullscreen: TerminalFullscreen::new(io::stdout(), options.allow_fullscreen),
            layout: ChromeLayout::default(),
            glyphs: glyphs::select(options.fancy),
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Explicit handle on the navigation controller.
    pub fn navigation_mut(&mut self) -> &mut NavigationController<TerminalSurface> {
        &mut self.navigation
    }

    /// Runs the main application loop.
    pub fn run(&mut self) -> Result<()> {
        info!("presenting {} slides", self.navigation.total_slides());

        loop {
            // Render
            let size = self.terminal.size()?;
            self.layout = ChromeLayout::compute(
                Rect::new(0, 0, size.width, size.height),
                self.navigation.total_slides(),
                self.navigation.current_slide(),
                self.fullscreen.is_active(),
            );
            self.terminal.draw(|frame| {
                render(frame, self.navigation.surface(), &self.layout, &self.glyphs);
            })?;

            // Handle events
            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, &self.layout);
                if action != Action::None {
                    debug!("action: {:?}", action);
                }

                if !apply_action(&mut self.navigation, &mut self.fullscreen, action) {
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        if self.fullscreen.is_active() {
            let _ = self.fullscreen.exit();
        }
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Convenience function to run the viewer on a deck.
pub fn run_app(deck: Deck, options: AppOptions) -> Result<()> {
    let mut app = App::new(deck, options)?;
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fullscreen::FullscreenError;
    use crate::model::{Input, NavKey, Slide};

    struct RejectingFullscreen {
        requests: usize,
    }

    impl Fullscreen for RejectingFullscreen {
        fn request(&mut self) -> Result<(), FullscreenError> {
            self.requests += 1;
            Err(FullscreenError::RequestFailed(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }

        fn exit(&mut self) -> Result<(), FullscreenError> {
            Ok(())
        }

        fn is_active(&self) -> bool {
            false
        }
    }

    fn fs_rejecting() -> RejectingFullscreen {
        RejectingFullscreen { requests: 0 }
    }

    fn navigation(count: usize) -> NavigationController<TerminalSurface> {
        let slides = (0..count).map(|i| Slide::titled(format!("{}", i))).collect();
        NavigationController::new(TerminalSurface::new(Deck::new(slides))).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = AppOptions::default();
        assert!(!options.fancy);
        assert!(options.allow_fullscreen);
    }

    #[test]
    fn test_apply_navigation_and_quit() {
        let mut nav = navigation(3);
        let mut fs = fs_rejecting();

        assert!(apply_action(&mut nav, &mut fs, Action::Navigate(Input::Key(NavKey::ArrowRight))));
        assert_eq!(nav.current_slide(), 1);

        assert!(apply_action(&mut nav, &mut fs, Action::Resize(10, 10)));
        assert_eq!(nav.current_slide(), 1);

        assert!(!apply_action(&mut nav, &mut fs, Action::Quit));
    }

    #[test]
    fn test_rejected_fullscreen_leaves_navigation_alone() {
        let mut nav = navigation(3);
        nav.go_to_slide(1);
        let surface = nav.surface();
        let before = (
            surface.offset_vw(),
            surface.is_slide_active(1),
            surface.is_indicator_active(1),
        );

        assert!(apply_action(&mut nav, &mut fs_rejecting(), Action::ToggleFullscreen));

        let surface = nav.surface();
        assert_eq!(nav.current_slide(), 1);
        assert_eq!(
            before,
            (
                surface.offset_vw(),
                surface.is_slide_active(1),
                surface.is_indicator_active(1),
            )
        );
    }

    #[test]
    fn test_fullscreen_request_issued_once() {
        let mut nav = navigation(2);
        let mut fs = fs_rejecting();
        apply_action(&mut nav, &mut fs, Action::ToggleFullscreen);
        assert_eq!(fs.requests, 1);
    }
}
