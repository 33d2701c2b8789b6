//! Deck file parser.
//!
//! This module handles reading and parsing slide deck files.
//!
//! ## Deck Format
//!
//! ```text
//! # First slide title
//! Some body text
//! ---
//! # Second slide
//! - a bullet
//! - another bullet
//! ```
//!
//! Slides are separated by a line holding only `---`. The first `# ` line of
//! a slide is its title, everything else is body text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::model::{Deck, Slide};

/// Slide separator line (surrounding whitespace ignored).
const SEPARATOR: &str = "---";
/// Title marker at the start of a line.
const TITLE_MARKER: &str = "# ";

/// Errors that can occur while reading a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read deck: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slide {slide} has a second title at line {line}")]
    DuplicateTitle { slide: usize, line: usize },
}

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Parses a deck file.
///
/// # Examples
///
/// ```no_run
/// use slidedeck::deck::parse_deck_file;
///
/// let deck = parse_deck_file("talk.deck").unwrap();
/// println!("Loaded {} slides", deck.len());
/// ```
pub fn parse_deck_file<P: AsRef<Path>>(path: P) -> DeckResult<Deck> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_deck(reader)
}

/// Parses deck content from a reader.
///
/// A deck without any slide content is valid and yields an empty deck.
pub fn parse_deck<R: BufRead>(reader: R) -> DeckResult<Deck> {
    let mut slides = Vec::new();
    let mut current = SlideBuilder::default();
    let mut line_number = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;

        if line.trim() == SEPARATOR {
            if let Some(slide) = std::mem::take(&mut current).finish() {
                slides.push(slide);
            }
            continue;
        }

        if let Some(title) = line.strip_prefix(TITLE_MARKER) {
            if current.title.is_some() {
                return Err(DeckError::DuplicateTitle {
                    slide: slides.len() + 1,
                    line: line_number,
                });
            }
            current.title = Some(title.trim().to_string());
        } else {
            current.body.push(line.trim_end().to_string());
        }
    }

    // Don't forget the last slide
    if let Some(slide) = current.finish() {
        slides.push(slide);
    }

    Ok(Deck::new(slides))
}

/// Parses deck content from a string.
pub fn parse_deck_str(content: &str) -> DeckResult<Deck> {
    parse_deck(content.as_bytes())
}

/// Accumulates the lines of one slide.
#[derive(Default)]
struct SlideBuilder {
    title: Option<String>,
    body: Vec<String>,
}

impl SlideBuilder {
    /// Trims blank edges and returns the slide, or `None` if nothing is left.
    fn finish(mut self) -> Option<Slide> {
        while self.body.last().is_some_and(|l| l.trim().is_empty()) {
            self.body.pop();
        }
        let leading = self.body.iter().take_while(|l| l.trim().is_empty()).count();
        self.body.drain(..leading);

        let slide = Slide::new(self.title, self.body);
        (!slide.is_empty()).then_some(slide)
    }
}
