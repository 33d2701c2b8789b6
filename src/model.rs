//! Data model for the presentation viewer.
//!
//! This module contains the data structures for representing:
//! - Slides and decks
//! - Navigation inputs
//! - Navigation state and its reducer
//!
//! Navigation only ever sees positions: a slide is identified by its
//! 0-based index in the deck, the content is for rendering alone.

/// A single slide: an optional title and body text lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    /// The slide title (from the `# ` line, without the marker)
    pub title: Option<String>,
    /// Body lines, in order, interior blank lines preserved
    pub body: Vec<String>,
}

impl Slide {
    /// Creates a new slide.
    pub fn new(title: Option<String>, body: Vec<String>) -> Self {
        Self { title, body }
    }

    /// Creates a slide with a title and no body.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Vec::new(),
        }
    }

    /// Returns true if the slide has neither title nor body.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_empty()
    }
}

/// An ordered, fixed-length sequence of slides.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Creates a new deck from a vector of slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Returns the number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns true if the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Gets a slide by index.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Iterates over the slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// Keys the navigation state machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    /// Any other key (ignored)
    Other,
}

/// Discrete navigation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Prev control clicked
    Prev,
    /// Next control clicked
    Next,
    /// Indicator clicked, or a direct jump
    GoTo(usize),
    /// Key press routed through the key handler
    Key(NavKey),
}

/// Current position in the deck.
///
/// `current_slide` is always in `0..total_slides` when the deck is not
/// empty, and stays `0` for an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_slide: usize,
    total_slides: usize,
}

impl NavigationState {
    /// Creates the initial state for a deck of `total_slides` slides.
    pub fn new(total_slides: usize) -> Self {
        Self {
            current_slide: 0,
            total_slides,
        }
    }

    /// Returns the current slide index (0-based).
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Returns the number of slides.
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Returns true if the current slide is the first one.
    pub fn is_first(&self) -> bool {
        self.current_slide == 0
    }

    /// Returns true if the current slide is the last one.
    ///
    /// An empty deck has no last slide.
    pub fn is_last(&self) -> bool {
        self.total_slides > 0 && self.current_slide == self.total_slides - 1
    }

    /// Computes the state after `input`.
    ///
    /// Returns `None` when the input is a no-op: out-of-range jumps, next on
    /// the last slide, prev on the first one, unrecognized keys and any
    /// input on an empty deck. A valid jump to the current slide returns
    /// `Some` so the caller re-asserts the same state.
    pub fn reduce(&self, input: Input) -> Option<NavigationState> {
        match input {
            Input::GoTo(index) => {
                if index >= self.total_slides {
                    return None;
                }
                Some(Self {
                    current_slide: index,
                    ..*self
                })
            }
            Input::Next => {
                if self.current_slide + 1 < self.total_slides {
                    self.reduce(Input::GoTo(self.current_slide + 1))
                } else {
                    None
                }
            }
            Input::Prev => {
                if self.current_slide > 0 {
                    self.reduce(Input::GoTo(self.current_slide - 1))
                } else {
                    None
                }
            }
            Input::Key(NavKey::ArrowLeft) => self.reduce(Input::Prev),
            Input::Key(NavKey::ArrowRight) => self.reduce(Input::Next),
            Input::Key(NavKey::Other) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_creation() {
        let deck = Deck::new(vec![Slide::titled("One"), Slide::titled("Two")]);
        assert_eq!(deck.len(), 2);
        assert!(!deck.is_empty());
        assert_eq!(deck.get(1).unwrap().title.as_deref(), Some("Two"));
        assert!(deck.get(2).is_none());
    }

    #[test]
    fn test_slide_is_empty() {
        assert!(Slide::default().is_empty());
        assert!(!Slide::titled("x").is_empty());
        assert!(!Slide::new(None, vec!["body".to_string()]).is_empty());
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new(5);
        assert_eq!(state.current_slide(), 0);
        assert_eq!(state.total_slides(), 5);
        assert!(state.is_first());
        assert!(!state.is_last());
    }

    #[test]
    fn test_goto_out_of_range_is_noop() {
        let state = NavigationState::new(3);
        assert_eq!(state.reduce(Input::GoTo(3)), None);
        assert_eq!(state.reduce(Input::GoTo(usize::MAX)), None);
        assert_eq!(state.reduce(Input::GoTo(2)).unwrap().current_slide(), 2);
    }

    #[test]
    fn test_goto_current_reasserts() {
        let state = NavigationState::new(3);
        assert_eq!(state.reduce(Input::GoTo(0)), Some(state));
    }

    #[test]
    fn test_boundaries() {
        let mut state = NavigationState::new(5);
        assert_eq!(state.reduce(Input::Prev), None);

        for _ in 0..4 {
            state = state.reduce(Input::Next).unwrap();
        }
        assert_eq!(state.current_slide(), 4);
        assert!(state.is_last());

        // Next at the end is inert
        assert_eq!(state.reduce(Input::Next), None);
    }

    #[test]
    fn test_keys() {
        let state = NavigationState::new(3);
        assert_eq!(state.reduce(Input::Key(NavKey::ArrowLeft)), None);
        assert_eq!(
            state.reduce(Input::Key(NavKey::ArrowRight)).unwrap().current_slide(),
            1
        );
        assert_eq!(state.reduce(Input::Key(NavKey::Other)), None);
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let state = NavigationState::new(0);
        assert!(state.is_first());
        assert!(!state.is_last());
        for input in [
            Input::Prev,
            Input::Next,
            Input::GoTo(0),
            Input::Key(NavKey::ArrowLeft),
            Input::Key(NavKey::ArrowRight),
        ] {
            assert_eq!(state.reduce(input), None);
        }
    }

    #[test]
    fn test_random_walk_stays_in_range() {
        let inputs = [Input::Next, Input::Prev, Input::Next, Input::Next, Input::Prev];
        for total in 1..6 {
            let mut state = NavigationState::new(total);
            for step in 0..50 {
                let input = inputs[(step * 7 + total) % inputs.len()];
                if let Some(next) = state.reduce(input) {
                    state = next;
                }
                assert!(state.current_slide() < total);
            }
        }
    }
}
