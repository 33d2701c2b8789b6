//! Slide navigation controller.
//!
//! This module binds navigation inputs to the current slide index and
//! reflects that index onto a [`RenderSurface`]:
//! - `go_to_slide`: jump to an index (out of range is ignored)
//! - `go_to_next_slide` / `go_to_prev_slide`: step, inert at the ends
//! - `handle_key_press`: Left/Right arrows
//!
//! State changes go through [`NavigationState::reduce`]; every accepted
//! input is followed by a full, deterministic render of the new state.

use log::debug;

use crate::model::{Input, NavKey, NavigationState};
use crate::surface::{Control, Element, RenderSurface, SurfaceError, TextField};

/// Width of one slide in the horizontal strip, in viewport-width percent.
const SLIDE_WIDTH_VW: i64 = 100;

/// Horizontal strip offset that brings slide `current` on screen.
pub fn slide_offset(current: usize) -> i64 {
    -(current as i64) * SLIDE_WIDTH_VW
}

/// Owns the navigation state and the surface it renders to.
#[derive(Debug)]
pub struct NavigationController<S: RenderSurface> {
    state: NavigationState,
    surface: S,
}

impl<S: RenderSurface> NavigationController<S> {
    /// Initializes navigation on `surface`.
    ///
    /// Fails if a required element is missing. An empty deck is accepted;
    /// every navigation call on it is a no-op.
    pub fn new(mut surface: S) -> Result<Self, SurfaceError> {
        if let Some(missing) = Element::REQUIRED
            .into_iter()
            .find(|&element| !surface.has_element(element))
        {
            return Err(SurfaceError::MissingElement(missing));
        }

        let total = surface.slide_count();
        surface.set_text(TextField::Total, &total.to_string());
        for index in 0..total {
            surface.create_indicator(index, index == 0);
        }

        let mut controller = Self {
            state: NavigationState::new(total),
            surface,
        };
        controller.render();
        debug!("navigation initialized with {} slides", total);
        Ok(controller)
    }

    /// Returns the current navigation state.
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Returns the current slide index (0-based).
    pub fn current_slide(&self) -> usize {
        self.state.current_slide()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total_slides()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Applies `input`; no-op inputs leave both state and surface untouched.
    pub fn dispatch(&mut self, input: Input) {
        match self.state.reduce(input) {
            Some(next) => {
                self.state = next;
                self.render();
                debug!(
                    "{:?}: now at slide {}/{}",
                    input,
                    self.state.current_slide() + 1,
                    self.state.total_slides()
                );
            }
            None => debug!("{:?}: ignored", input),
        }
    }

    /// Jumps to slide `index`. Out-of-range indices are silently ignored.
    pub fn go_to_slide(&mut self, index: usize) {
        self.dispatch(Input::GoTo(index));
    }

    /// Advances one slide unless already on the last one.
    pub fn go_to_next_slide(&mut self) {
        self.dispatch(Input::Next);
    }

    /// Goes back one slide unless already on the first one.
    pub fn go_to_prev_slide(&mut self) {
        self.dispatch(Input::Prev);
    }

    /// Left arrow goes back, right arrow advances, anything else is ignored.
    pub fn handle_key_press(&mut self, key: NavKey) {
        self.dispatch(Input::Key(key));
    }

    /// Positions the slide strip so the current slide is on screen.
    pub fn update_slide_position(&mut self) {
        self.surface
            .set_offset(slide_offset(self.state.current_slide()));
    }

    /// Disables prev on the first slide and next on the last one.
    pub fn update_button_states(&mut self) {
        // An empty deck has nowhere to go: both controls stay disabled.
        let next_enabled = self.state.current_slide() + 1 < self.state.total_slides();
        self.surface
            .set_control_enabled(Control::Prev, !self.state.is_first());
        self.surface.set_control_enabled(Control::Next, next_enabled);
    }

    /// Marks exactly the current indicator active.
    pub fn update_indicators(&mut self) {
        let current = self.state.current_slide();
        for index in 0..self.state.total_slides() {
            self.surface.set_indicator_active(index, index == current);
        }
    }

    fn update_active_slide(&mut self) {
        let current = self.state.current_slide();
        for index in 0..self.state.total_slides() {
            self.surface.set_slide_active(index, index == current);
        }
    }

    /// Reflects the whole state onto the surface.
    fn render(&mut self) {
        self.update_slide_position();
        self.update_button_states();
        self.update_indicators();

        let current = if self.state.total_slides() == 0 {
            0
        } else {
            self.state.current_slide() + 1
        };
        self.surface.set_text(TextField::Current, &current.to_string());

        self.update_active_slide();
    }
}
