//! The seam between the fade controller and the host UI framework.

use crate::axis::Axis;
use crate::geometry::Rectangle;
use crate::mask::{Mask, MaskLayer};

use thiserror::Error;

/// A handle to a scrollable surface of the host UI framework.
///
/// The controller only ever reads extents and offsets through this trait
/// and hands back [`Mask`] values; compositing, event delivery, and
/// rendering stay on the host side.
///
/// Extents and offsets are expressed in the same length units; offsets are
/// measured from the leading edge and may momentarily leave the valid range
/// (e.g. rubber-banding) — the controller clamps.
pub trait ScrollSurface {
    /// The extent of the visible viewport along `axis`.
    fn viewport_extent(&self, axis: Axis) -> f32;

    /// The extent of the scrollable content along `axis`.
    fn content_extent(&self, axis: Axis) -> f32;

    /// The current scroll offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f32;

    /// Installs, replaces, or removes (`None`) the fade mask on `layer`.
    fn apply_mask(&mut self, layer: MaskLayer, mask: Option<&Mask>);

    /// Whether the handle still points at a live surface.
    ///
    /// Handles backed by a dead weak reference report `false`.
    fn is_valid(&self) -> bool {
        true
    }

    /// Whether the surface can apply a mask to the given layer.
    ///
    /// Hosts that cannot mask the content layer separately report `false`
    /// for [`MaskLayer::Content`]; the controller then falls back to a
    /// composite mask with indicator cutouts.
    fn supports_layer(&self, layer: MaskLayer) -> bool {
        let _ = layer;
        true
    }

    /// The current scroll indicator rectangles, in viewport coordinates.
    ///
    /// Only consulted for the composite-mask fallback; the default reports
    /// none.
    fn indicator_bounds(&self) -> Vec<Rectangle> {
        Vec::new()
    }
}

/// An error produced when attaching to a [`ScrollSurface`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttachError {
    /// The surface handle no longer points at a live surface.
    #[error("the scroll surface handle is no longer valid")]
    InvalidSurface,
}
