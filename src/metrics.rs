//! Scroll measurements along the active axis.

/// A snapshot of a scroll surface along the active axis.
///
/// Captured transiently on every update; never stored by hosts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// The extent of the visible viewport.
    pub viewport: f32,
    /// The extent of the scrollable content.
    pub content: f32,
    /// The current scroll offset, measured from the leading edge.
    pub offset: f32,
}

impl ScrollMetrics {
    /// Creates a new [`ScrollMetrics`] from the given measurements.
    pub const fn new(viewport: f32, content: f32, offset: f32) -> Self {
        Self {
            viewport,
            content,
            offset,
        }
    }

    /// The scrollable overflow; zero when the content fits the viewport.
    pub fn overflow(self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }
}
