//! Ripple placement math.

/// Axis-aligned box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Distance from the viewport's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge.
    pub top: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

/// Pointer position in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Square overlay centred on a click, relative to the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Side length; the larger of the host's width and height.
    pub size: f64,
    /// Offset of the overlay's left edge from the host's left edge.
    pub left: f64,
    /// Offset of the overlay's top edge from the host's top edge.
    pub top: f64,
}

impl RippleGeometry {
    /// Place an overlay so its centre sits on `click`.
    #[must_use]
    pub fn from_click(bounds: Rect, click: Point) -> Self {
        let size = bounds.width.max(bounds.height);
        let half = size / 2.0;
        Self {
            size,
            left: click.x - bounds.left - half,
            top: click.y - bounds.top - half,
        }
    }

    /// Inline style declarations (`property`, `value`) positioning the overlay.
    #[must_use]
    pub fn style_declarations(&self) -> [(&'static str, String); 4] {
        let size = px(self.size);
        [
            ("width", size.clone()),
            ("height", size),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

/// Format a CSS pixel length, dropping a redundant `.0`.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
