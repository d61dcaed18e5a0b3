//! Configure which edges fade, and how.

use crate::axis::Axis;
use crate::time::Duration;

/// The default size of the fade band, in length units.
pub const DEFAULT_FADE_SIZE: f32 = 30.0;

/// The default duration of fade transitions.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

/// The size of the fade band along the scroll axis.
///
/// The mode is always selected explicitly; an absolute length is never
/// reinterpreted as a fraction, or vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FadeSize {
    /// A fixed length, in the same units as the surface extents.
    Absolute(f32),
    /// A fraction of the viewport extent, resolved on every update.
    Relative(f32),
}

impl FadeSize {
    /// Resolves the fade size to an absolute length against the given
    /// viewport extent.
    pub fn resolve(self, viewport: f32) -> f32 {
        match self {
            FadeSize::Absolute(size) => size,
            FadeSize::Relative(fraction) => fraction * viewport,
        }
    }

    /// Whether the size is non-negative.
    pub fn is_valid(self) -> bool {
        match self {
            FadeSize::Absolute(value) | FadeSize::Relative(value) => value >= 0.0,
        }
    }
}

impl Default for FadeSize {
    fn default() -> Self {
        FadeSize::Absolute(DEFAULT_FADE_SIZE)
    }
}

impl From<f32> for FadeSize {
    fn from(size: f32) -> Self {
        FadeSize::Absolute(size)
    }
}

/// The set of edges that fade, in the older edge-set naming.
///
/// This is a convenience adapter over the two per-edge flags of
/// [`FadeConfig`]; the flags remain the canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FadeEdges {
    /// Fade both the leading and trailing edge.
    Both,
    /// Fade only the leading edge (top, or left).
    Leading,
    /// Fade only the trailing edge (bottom, or right).
    Trailing,
}

/// The fade configuration of a scroll surface.
///
/// # Example
/// ```
/// use scroll_fade::{Axis, FadeConfig, FadeSize};
///
/// let config = FadeConfig::new()
///     .axis(Axis::Horizontal)
///     .fade_size(FadeSize::Relative(0.15))
///     .fade_trailing(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FadeConfig {
    /// The scroll axis the fade applies to.
    pub axis: Axis,
    /// Whether the leading edge fades.
    pub fade_leading: bool,
    /// Whether the trailing edge fades.
    pub fade_trailing: bool,
    /// The size of the fade band.
    pub fade_size: FadeSize,
    /// The duration of fade transitions.
    pub fade_duration: Duration,
    /// Whether scroll indicators are kept out of the fade.
    pub mask_indicators: bool,
}

impl FadeConfig {
    /// Creates a [`FadeConfig`] with the default values: vertical axis, both
    /// edges fading over a band of [`DEFAULT_FADE_SIZE`], transitions of
    /// [`DEFAULT_FADE_DURATION`], and indicators masked out of the fade.
    pub fn new() -> Self {
        Self {
            axis: Axis::default(),
            fade_leading: true,
            fade_trailing: true,
            fade_size: FadeSize::default(),
            fade_duration: DEFAULT_FADE_DURATION,
            mask_indicators: true,
        }
    }

    /// Sets the scroll [`Axis`] the fade applies to.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets whether the leading edge fades.
    pub fn fade_leading(mut self, fade: bool) -> Self {
        self.fade_leading = fade;
        self
    }

    /// Sets whether the trailing edge fades.
    pub fn fade_trailing(mut self, fade: bool) -> Self {
        self.fade_trailing = fade;
        self
    }

    /// Sets the faded edges from a [`FadeEdges`] set.
    pub fn edges(mut self, edges: FadeEdges) -> Self {
        (self.fade_leading, self.fade_trailing) = match edges {
            FadeEdges::Both => (true, true),
            FadeEdges::Leading => (true, false),
            FadeEdges::Trailing => (false, true),
        };
        self
    }

    /// Sets the [`FadeSize`] of the fade band.
    ///
    /// A negative size is rejected; the previous value is kept.
    pub fn fade_size(mut self, size: impl Into<FadeSize>) -> Self {
        let size = size.into();

        if size.is_valid() {
            self.fade_size = size;
        } else {
            log::warn!("ignoring negative fade size {size:?}");
        }

        self
    }

    /// Sets the duration of fade transitions.
    ///
    /// A zero duration disables transitions; opacity changes apply
    /// immediately.
    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Sets whether scroll indicators are kept out of the fade.
    pub fn mask_indicators(mut self, mask: bool) -> Self {
        self.mask_indicators = mask;
        self
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::new()
    }
}
