//! Linear gradients with alpha-only stops.
//!
//! A fade mask is a per-pixel opacity multiplier: alpha `1.0` leaves content
//! untouched, alpha `0.0` hides it. Colors never matter here, so stops carry
//! only an alpha value.

use crate::axis::Axis;
use crate::geometry::Point;

/// A stop of a [`LinearGradient`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// The position of the stop along the gradient line, in `[0, 1]`.
    pub offset: f32,
    /// The opacity multiplier at the stop, in `[0, 1]`.
    pub alpha: f32,
}

/// A linear alpha gradient in unit coordinates of the mask frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    /// The start point of the gradient line.
    pub start: Point,
    /// The end point of the gradient line.
    pub end: Point,
    /// The stops along the line, in ascending offset order.
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Builds the edge-fade gradient for the given axis.
    ///
    /// `band` is the fade band as a fraction of the viewport extent (see
    /// [`fade_band`]). `leading` and `trailing` are the presented fade
    /// opacities of each edge, or `None` for an edge that does not fade at
    /// all; an edge at opacity `0.0` still contributes stops, pinned fully
    /// opaque, so later transitions only move alphas and never restructure
    /// the stop list.
    pub fn edge_fade(
        axis: Axis,
        band: f32,
        leading: Option<f32>,
        trailing: Option<f32>,
    ) -> Self {
        let (start, end) = axis.gradient_line();
        let mut stops = Vec::with_capacity(4);

        if let Some(leading) = leading {
            stops.push(ColorStop {
                offset: 0.0,
                alpha: 1.0 - leading.clamp(0.0, 1.0),
            });
            stops.push(ColorStop {
                offset: band,
                alpha: 1.0,
            });
        }

        if let Some(trailing) = trailing {
            stops.push(ColorStop {
                offset: 1.0 - band,
                alpha: 1.0,
            });
            stops.push(ColorStop {
                offset: 1.0,
                alpha: 1.0 - trailing.clamp(0.0, 1.0),
            });
        }

        Self { start, end, stops }
    }
}

/// Resolves the fade band as a fraction of the viewport extent.
///
/// When both edges fade, each band is capped at half the viewport so the
/// bands never overlap; a single band may cover the whole viewport.
pub fn fade_band(fade: f32, viewport: f32, both_edges: bool) -> f32 {
    if viewport <= 0.0 {
        return 0.0;
    }

    let cap = if both_edges { 0.5 } else { 1.0 };

    (fade.max(0.0) / viewport).min(cap)
}
