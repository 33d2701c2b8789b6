//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - A horizontal slide strip positioned by the navigation offset
//! - Chrome below the slides: prev control, indicator dots, counter, next control
//! - Hit-testing of mouse clicks against the chrome
//!
//! [`TerminalSurface`] is the terminal's [`RenderSurface`]: the navigation
//! controller writes view state into it and [`render`] draws that state.

pub mod glyphs;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Deck;
use crate::surface::{Control, Element, RenderSurface, TextField};
use glyphs::Glyphs;

/// Height of the chrome bar (including borders).
const CHROME_HEIGHT: u16 = 3;
/// Width of the prev/next controls.
const CONTROL_WIDTH: u16 = 8;
/// Width of the "current / total" counter.
const COUNTER_WIDTH: u16 = 11;
/// Columns taken by one indicator dot (glyph + gap).
const INDICATOR_WIDTH: u16 = 2;

/// Clickable chrome targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Prev,
    Next,
    Indicator(usize),
}

/// Screen regions of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeLayout {
    pub slides: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub counter: Rect,
    /// Slide index of the first dot in `indicators`
    pub first_indicator: usize,
    /// One rect per visible indicator, in slide order
    pub indicators: Vec<Rect>,
}

impl ChromeLayout {
    /// Computes the layout for a terminal `area` and a deck of `total` slides
    /// currently showing slide `current`.
    ///
    /// In fullscreen the slides take the whole area and there is no chrome.
    pub fn compute(area: Rect, total: usize, current: usize, fullscreen: bool) -> Self {
        if fullscreen {
            return Self {
                slides: area,
                ..Self::default()
            };
        }

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(CHROME_HEIGHT)])
            .split(area);

        let bar = main_layout[1];
        let bar_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CONTROL_WIDTH),
                Constraint::Min(1),
                Constraint::Length(COUNTER_WIDTH),
                Constraint::Length(CONTROL_WIDTH),
            ])
            .split(bar);

        let (first_indicator, indicators) = indicator_rects(bar_layout[1], total, current);

        Self {
            slides: main_layout[0],
            prev: bar_layout[0],
            next: bar_layout[3],
            counter: bar_layout[2],
            first_indicator,
            indicators,
        }
    }

    /// Returns what lies under the terminal cell (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if contains(self.prev, column, row) {
            return Some(Target::Prev);
        }
        if contains(self.next, column, row) {
            return Some(Target::Next);
        }
        self.indicators
            .iter()
            .position(|&rect| contains(rect, column, row))
            .map(|offset| Target::Indicator(self.first_indicator + offset))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Centers the indicator dots on the middle row of `area`.
///
/// When the dots do not all fit, a window around `current` is shown.
/// Returns the slide index of the first visible dot and the dot rects.
fn indicator_rects(area: Rect, total: usize, current: usize) -> (usize, Vec<Rect>) {
    if area.height == 0 {
        return (0, Vec::new());
    }
    let fit = (area.width / INDICATOR_WIDTH) as usize;
    let shown = total.min(fit);
    let first = current
        .saturating_sub(shown / 2)
        .min(total - shown);
    let used = shown as u16 * INDICATOR_WIDTH;
    let start_x = area.x + (area.width - used) / 2;
    let y = area.y + area.height / 2;

    let rects = (0..shown as u16)
        .map(|i| Rect::new(start_x + i * INDICATOR_WIDTH, y, INDICATOR_WIDTH, 1))
        .collect();
    (first, rects)
}

/// Where slide `index` lands on the strip shifted by `offset_vw` percent.
///
/// Returns `None` if the slide is entirely off screen.
pub fn strip_rect(area: Rect, index: usize, offset_vw: i64) -> Option<Rect> {
    let width = area.width as i64;
    if width == 0 {
        return None;
    }
    let left = (index as i64 * 100 + offset_vw) * width / 100;
    if left <= -width || left >= width {
        return None;
    }
    let start = left.max(0);
    let end = (left + width).min(width);
    Some(Rect::new(
        area.x + start as u16,
        area.y,
        (end - start) as u16,
        area.height,
    ))
}

/// View state of the terminal, written by the navigation controller.
#[derive(Debug)]
pub struct TerminalSurface {
    deck: Deck,
    slide_active: Vec<bool>,
    indicators: Vec<bool>,
    offset_vw: i64,
    prev_enabled: bool,
    next_enabled: bool,
    current_text: String,
    total_text: String,
}

impl TerminalSurface {
    /// Creates a surface presenting `deck`.
    pub fn new(deck: Deck) -> Self {
        let count = deck.len();
        Self {
            deck,
            slide_active: vec![false; count],
            indicators: Vec::new(),
            offset_vw: 0,
            prev_enabled: false,
            next_enabled: false,
            current_text: String::new(),
            total_text: String::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn offset_vw(&self) -> i64 {
        self.offset_vw
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.slide_active.get(index).copied().unwrap_or(false)
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Prev => self.prev_enabled,
            Control::Next => self.next_enabled,
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Current => &self.current_text,
            TextField::Total => &self.total_text,
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn has_element(&self, _element: Element) -> bool {
        // The terminal draws every element itself.
        true
    }

    fn slide_count(&self) -> usize {
        self.deck.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.slide_active.get_mut(index) {
            *flag = active;
        }
    }

    fn create_indicator(&mut self, _index: usize, active: bool) {
        self.indicators.push(active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
    }

    fn set_offset(&mut self, offset_vw: i64) {
        self.offset_vw = offset_vw;
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Prev => self.prev_enabled = enabled,
            Control::Next => self.next_enabled = enabled,
        }
    }

    fn set_text(&mut self, field: TextField, text: &str) {
        match field {
            TextField::Current => self.current_text = text.to_string(),
            TextField::Total => self.total_text = text.to_string(),
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, surface: &TerminalSurface, layout: &ChromeLayout, glyphs: &Glyphs) {
    render_slides(frame, surface, layout.slides);

    if layout.prev.width > 0 {
        render_control(frame, surface, Control::Prev, layout.prev, glyphs);
        render_control(frame, surface, Control::Next, layout.next, glyphs);
        render_indicators(frame, surface, layout, glyphs);
        render_counter(frame, surface, layout.counter, glyphs);
    }
}

/// Renders every slide that overlaps the visible strip.
fn render_slides(frame: &mut Frame, surface: &TerminalSurface, area: Rect) {
    if surface.deck().is_empty() {
        let paragraph = Paragraph::new("No slides")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        return;
    }

    for (index, slide) in surface.deck().iter().enumerate() {
        let Some(rect) = strip_rect(area, index, surface.offset_vw()) else {
            continue;
        };

        let border_style = if surface.is_slide_active(index) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        // -2 for borders, -2 for padding
        let text_width = (rect.width.saturating_sub(4) as usize).max(1);
        let mut lines: Vec<Line> = Vec::new();

        if let Some(title) = &slide.title {
            lines.push(Line::from(Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        for body_line in &slide.body {
            if body_line.is_empty() {
                lines.push(Line::default());
                continue;
            }
            for wrapped in textwrap::wrap(body_line, text_width) {
                lines.push(Line::from(wrapped.into_owned()));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, rect);
    }
}

fn render_control(
    frame: &mut Frame,
    surface: &TerminalSurface,
    control: Control,
    area: Rect,
    glyphs: &Glyphs,
) {
    let label = match control {
        Control::Prev => glyphs.arrow_left,
        Control::Next => glyphs.arrow_right,
    };

    let style = if surface.is_enabled(control) {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(paragraph, area);
}

fn render_indicators(
    frame: &mut Frame,
    surface: &TerminalSurface,
    layout: &ChromeLayout,
    glyphs: &Glyphs,
) {
    for (offset, &rect) in layout.indicators.iter().enumerate() {
        let index = layout.first_indicator + offset;
        let span = if surface.is_indicator_active(index) {
            Span::styled(
                glyphs.dot_active,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(glyphs.dot_inactive, Style::default().fg(Color::Gray))
        };
        frame.render_widget(Paragraph::new(span), rect);
    }
}

fn render_counter(frame: &mut Frame, surface: &TerminalSurface, area: Rect, glyphs: &Glyphs) {
    let counter = format!(
        "{} {} {}",
        surface.text(TextField::Current),
        glyphs.counter_separator,
        surface.text(TextField::Total)
    );

    let paragraph = Paragraph::new(counter)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::Slide;
    use crate::navigation::NavigationController;

    fn deck(count: usize) -> Deck {
        Deck::new(
            (1..=count)
                .map(|i| Slide::new(Some(format!("Title {}", i)), vec![format!("Body {}", i)]))
                .collect(),
        )
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_regions() {
        let layout = ChromeLayout::compute(Rect::new(0, 0, 80, 24), 5, 0, false);

        assert_eq!(layout.slides, Rect::new(0, 0, 80, 21));
        assert_eq!(layout.prev, Rect::new(0, 21, CONTROL_WIDTH, CHROME_HEIGHT));
        assert_eq!(layout.next.x, 80 - CONTROL_WIDTH);
        assert_eq!(layout.indicators.len(), 5);
        // Dots sit on the middle row of the bar
        assert!(layout.indicators.iter().all(|r| r.y == 22));
    }

    #[test]
    fn test_fullscreen_layout_has_no_chrome() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ChromeLayout::compute(area, 5, 0, true);

        assert_eq!(layout.slides, area);
        assert!(layout.indicators.is_empty());
        assert_eq!(layout.hit(0, 23), None);
    }

    #[test]
    fn test_hit_testing() {
        let layout = ChromeLayout::compute(Rect::new(0, 0, 80, 24), 3, 0, false);

        assert_eq!(layout.hit(1, 22), Some(Target::Prev));
        assert_eq!(layout.hit(79, 22), Some(Target::Next));
        let third = layout.indicators[2];
        assert_eq!(layout.hit(third.x, third.y), Some(Target::Indicator(2)));
        // Slide area is not clickable
        assert_eq!(layout.hit(40, 5), None);
    }

    #[test]
    fn test_indicators_truncated_when_narrow() {
        let (first, rects) = indicator_rects(Rect::new(0, 0, 7, 1), 10, 0);
        assert_eq!((first, rects.len()), (0, 3));
        assert_eq!(indicator_rects(Rect::new(0, 0, 7, 0), 10, 0).1.len(), 0);

        // The window follows the current slide and stops at the deck end
        assert_eq!(indicator_rects(Rect::new(0, 0, 7, 1), 10, 5).0, 4);
        assert_eq!(indicator_rects(Rect::new(0, 0, 7, 1), 10, 9).0, 7);
    }

    #[test]
    fn test_strip_rect() {
        let area = Rect::new(0, 0, 50, 10);

        assert_eq!(strip_rect(area, 0, 0), Some(area));
        assert_eq!(strip_rect(area, 1, 0), None);
        assert_eq!(strip_rect(area, 2, -200), Some(area));
        assert_eq!(strip_rect(area, 1, -200), None);

        // Half-way positions are clipped
        assert_eq!(strip_rect(area, 1, -50), Some(Rect::new(25, 0, 25, 10)));
        assert_eq!(strip_rect(area, 0, -50), Some(Rect::new(0, 0, 25, 10)));
    }

    #[test]
    fn test_surface_tracks_navigation() {
        let mut nav = NavigationController::new(TerminalSurface::new(deck(3))).unwrap();
        nav.go_to_slide(2);

        let surface = nav.surface();
        assert_eq!(surface.offset_vw(), -200);
        assert_eq!(surface.text(TextField::Current), "3");
        assert_eq!(surface.text(TextField::Total), "3");
        assert_eq!(surface.indicator_count(), 3);
        assert!(surface.is_slide_active(2) && !surface.is_slide_active(0));
        assert!(surface.is_indicator_active(2) && !surface.is_indicator_active(1));
        assert!(surface.is_enabled(Control::Prev));
        assert!(!surface.is_enabled(Control::Next));
    }

    #[test]
    fn test_render_current_slide() {
        let mut nav = NavigationController::new(TerminalSurface::new(deck(3))).unwrap();
        nav.go_to_next_slide();

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let layout = ChromeLayout::compute(Rect::new(0, 0, 60, 16), 3, 1, false);
        let glyphs = glyphs::select(false);
        terminal
            .draw(|frame| render(frame, nav.surface(), &layout, &glyphs))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Title 2"));
        assert!(!text.contains("Title 1"));
        assert!(!text.contains("Title 3"));
        assert!(text.contains("2 / 3"));
        assert!(text.contains(". * ."));
    }

    #[test]
    fn test_large_deck_keeps_current_dot_visible() {
        let mut nav = NavigationController::new(TerminalSurface::new(deck(40))).unwrap();
        nav.go_to_slide(35);

        let area = Rect::new(0, 0, 80, 24);
        let layout = ChromeLayout::compute(area, 40, nav.current_slide(), false);
        let shown = layout.indicators.len();
        assert!(shown < 40);
        assert!(layout.first_indicator <= 35 && 35 < layout.first_indicator + shown);

        // Clicking a dot reaches its own slide, not its screen position
        let active = layout.indicators[35 - layout.first_indicator];
        assert_eq!(layout.hit(active.x, active.y), Some(Target::Indicator(35)));
        let last = layout.indicators[shown - 1];
        assert_eq!(layout.hit(last.x, last.y), Some(Target::Indicator(39)));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let glyphs = glyphs::select(false);
        terminal
            .draw(|frame| render(frame, nav.surface(), &layout, &glyphs))
            .unwrap();

        let chrome_row = screen_text(&terminal).lines().nth(22).unwrap().to_string();
        assert_eq!(chrome_row.chars().nth(active.x as usize), Some('*'));
        assert_eq!(chrome_row.matches('*').count(), 1);
        assert!(chrome_row.contains("36 / 40"));
    }

    #[test]
    fn test_render_empty_deck() {
        let nav = NavigationController::new(TerminalSurface::new(Deck::default())).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let layout = ChromeLayout::compute(Rect::new(0, 0, 40, 10), 0, 0, false);
        let glyphs = glyphs::select(false);
        terminal
            .draw(|frame| render(frame, nav.surface(), &layout, &glyphs))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No slides"));
        assert!(text.contains("0 / 0"));
    }
}
