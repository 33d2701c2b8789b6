//! Render surface abstraction.
//!
//! The navigation controller never touches a terminal directly. It drives a
//! [`RenderSurface`], a small capability set that the terminal UI implements
//! and that tests replace with a recording fake.

use thiserror::Error;

/// Nodes the controller needs to find on the surface at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    SlidesWrapper,
    PrevControl,
    NextControl,
    IndicatorContainer,
    CurrentDisplay,
    TotalDisplay,
}

impl Element {
    /// Every element the controller requires.
    pub const REQUIRED: [Element; 6] = [
        Element::SlidesWrapper,
        Element::PrevControl,
        Element::NextControl,
        Element::IndicatorContainer,
        Element::CurrentDisplay,
        Element::TotalDisplay,
    ];
}

/// The two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
}

/// Text-bearing nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// 1-based index of the current slide
    Current,
    /// Number of slides
    Total,
}

/// Errors raised by a render surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Required element not found: {0:?}")]
    MissingElement(Element),
}

/// The set of rendering operations the navigation controller relies on.
pub trait RenderSurface {
    /// Returns true if the surface provides `element`.
    fn has_element(&self, element: Element) -> bool;

    /// Number of slides discovered on the surface.
    fn slide_count(&self) -> usize;

    /// Marks slide `index` active or inactive.
    fn set_slide_active(&mut self, index: usize, active: bool);

    /// Appends indicator `index` to the indicator container.
    fn create_indicator(&mut self, index: usize, active: bool);

    /// Marks indicator `index` active or inactive.
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Applies the horizontal offset of the slide strip, in viewport-width percent.
    fn set_offset(&mut self, offset_vw: i64);

    fn set_control_enabled(&mut self, control: Control, enabled: bool);

    fn set_text(&mut self, field: TextField, text: &str);
}
