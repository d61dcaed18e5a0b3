//! The fade mask and its per-edge state.

use crate::config::FadeConfig;
use crate::geometry::Rectangle;
use crate::gradient::LinearGradient;
use crate::metrics::ScrollMetrics;

/// The rendering layer a fade mask is applied to.
///
/// This is a structural choice made when the mask is installed, not a
/// per-frame computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskLayer {
    /// Only the content-rendering layer; scroll indicators composite above
    /// the mask at full opacity.
    Content,
    /// The composited surface, scroll indicators included.
    Composite,
}

/// The fade visibility of each edge, in `[0, 1]`.
///
/// These are the exact targets computed from [`ScrollMetrics`]; the
/// presented values converge on them through eased transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskState {
    /// The fade visibility of the leading edge.
    pub leading: f32,
    /// The fade visibility of the trailing edge.
    pub trailing: f32,
}

impl MaskState {
    /// The state with both fades hidden.
    pub const HIDDEN: Self = Self {
        leading: 0.0,
        trailing: 0.0,
    };

    /// Computes the fade visibility of each edge.
    ///
    /// An edge is fully faded once the offset sits at least one fade length
    /// away from it, and hidden exactly at its extreme. When the content
    /// fits the viewport, or an edge is disabled, that edge stays hidden.
    ///
    /// A fade size of zero degrades to a step function: the fade jumps
    /// between `0` and `1` at the exact boundary.
    pub fn compute(metrics: ScrollMetrics, config: &FadeConfig) -> Self {
        let overflow = metrics.overflow();

        if overflow <= 0.0 {
            return Self::HIDDEN;
        }

        let fade = config.fade_size.resolve(metrics.viewport).max(0.0);

        Self {
            leading: if config.fade_leading {
                edge_visibility(metrics.offset, fade)
            } else {
                0.0
            },
            trailing: if config.fade_trailing {
                edge_visibility(overflow - metrics.offset, fade)
            } else {
                0.0
            },
        }
    }
}

/// Fade visibility of an edge whose extreme lies `distance` away.
fn edge_visibility(distance: f32, fade: f32) -> f32 {
    if fade <= 0.0 {
        if distance > 0.0 { 1.0 } else { 0.0 }
    } else {
        (distance / fade).clamp(0.0, 1.0)
    }
}

/// A gradient fade mask, ready for a host to install.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask {
    /// The frame of the mask, sized to the viewport.
    pub frame: Rectangle,
    /// The alpha gradient running along the fade axis.
    pub gradient: LinearGradient,
    /// Regions kept fully opaque regardless of the gradient.
    ///
    /// Used to protect scroll indicators on hosts that can only mask the
    /// composited surface; empty otherwise.
    pub cutouts: Vec<Rectangle>,
}
