//! # slidedeck - Terminal Slide Presentation Viewer
//!
//! A terminal-based slide presentation viewer using ratatui.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture with clear separation:
//! - `model`: Slides, decks, navigation inputs and the navigation reducer
//! - `deck`: Deck file parsing
//! - `surface`: The render surface interface navigation draws through
//! - `navigation`: The navigation controller (current slide, controls, indicators)
//! - `fullscreen`: Fullscreen capability and toggle
//! - `event`: Keyboard and mouse event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: Orchestration of the application loop

pub mod controller;
pub mod deck;
pub mod event;
pub mod fullscreen;
pub mod model;
pub mod navigation;
pub mod surface;
pub mod ui;
