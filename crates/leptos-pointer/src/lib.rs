//! Leptos Pointer Utilities
//!
//! Pointer-follow highlight for Leptos cards.
//! Bounding boxes are measured on every move, never cached, so the highlight
//! stays centered under the pointer whatever the card size or scroll position.

use leptos::prelude::*;

/// Top-left position of the highlight inside its card, in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub left: f64,
    pub top: f64,
}

impl PointerOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Inline style for an absolutely positioned highlight element
    pub fn to_style(&self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Viewport-relative top-left corner of a mounted element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn from_rect(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.x(), rect.y())
    }
}

/// Offset that centers a circle of `diameter` on the pointer.
///
/// Pointer coordinates and `card` must be in the same (viewport) space.
pub fn centered_offset(pointer_x: f64, pointer_y: f64, card: Bounds, diameter: f64) -> PointerOffset {
    let radius = diameter / 2.0;
    PointerOffset {
        left: pointer_x - card.left - radius,
        top: pointer_y - card.top - radius,
    }
}

/// Measure both elements now and compute the centered offset.
/// The highlight diameter is its rendered width.
pub fn measure_offset(
    ev: &web_sys::MouseEvent,
    card: &web_sys::Element,
    highlight: &web_sys::Element,
) -> PointerOffset {
    let card_bounds = Bounds::from_rect(&card.get_bounding_client_rect());
    let diameter = highlight.get_bounding_client_rect().width();
    centered_offset(ev.client_x() as f64, ev.client_y() as f64, card_bounds, diameter)
}

/// Highlight state signals, one pair per card
#[derive(Clone, Copy)]
pub struct HighlightSignals {
    pub offset_read: ReadSignal<PointerOffset>,
    pub offset_write: WriteSignal<PointerOffset>,
}

pub fn create_highlight_signals() -> HighlightSignals {
    let (offset_read, offset_write) = signal(PointerOffset::default());
    HighlightSignals {
        offset_read,
        offset_write,
    }
}

/// Create mousemove handler for a card.
///
/// `locate` returns the card and highlight elements, or `None` while either is
/// unmounted, in which case the previous offset is kept. Nothing resets the
/// offset when the pointer leaves; the highlight stays where it was last seen.
pub fn make_on_pointer_move<F>(
    highlight: HighlightSignals,
    locate: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn() -> Option<(web_sys::Element, web_sys::Element)> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let measured = locate().map(|(card, effect)| measure_offset(&ev, &card, &effect));
        apply_measurement(highlight, measured);
    }
}

/// Store a fresh measurement; `None` keeps the previous offset
pub fn apply_measurement(highlight: HighlightSignals, measured: Option<PointerOffset>) {
    if let Some(offset) = measured {
        highlight.offset_write.set(offset);
    }
}
