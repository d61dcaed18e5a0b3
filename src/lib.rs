//! Edge-fade gradient masks for scrollable surfaces.
//!
//! A scroll surface with more content than fits its viewport can hint at
//! the overflow by fading its content out near the scrollable edges. This
//! crate computes that fade: an [`EdgeFade`] controller watches a
//! [`ScrollSurface`], derives the per-edge fade visibility from the scroll
//! offset and extents, eases changes over a configurable duration, and
//! hands the host a [`Mask`] — a linear alpha gradient plus optional opaque
//! cutouts — to composite however its rendering stack likes.
//!
//! Scroll indicators are kept out of the fade by default: the mask targets
//! the content layer where the host supports it, and falls back to opaque
//! indicator cutouts where it does not.
//!
//! # Example
//! ```
//! use scroll_fade::time::Instant;
//! use scroll_fade::{
//!     Axis, EdgeFade, FadeConfig, Mask, MaskLayer, ScrollSurface, SurfaceEvent,
//! };
//!
//! struct Surface {
//!     offset: f32,
//!     mask: Option<Mask>,
//! }
//!
//! impl ScrollSurface for Surface {
//!     fn viewport_extent(&self, _axis: Axis) -> f32 {
//!         100.0
//!     }
//!
//!     fn content_extent(&self, _axis: Axis) -> f32 {
//!         300.0
//!     }
//!
//!     fn scroll_offset(&self, _axis: Axis) -> f32 {
//!         self.offset
//!     }
//!
//!     fn apply_mask(&mut self, _layer: MaskLayer, mask: Option<&Mask>) {
//!         self.mask = mask.cloned();
//!     }
//! }
//!
//! let mut fade = EdgeFade::new(FadeConfig::new());
//! fade.attach(Surface {
//!     offset: 120.0,
//!     mask: None,
//! })
//! .expect("surface is valid");
//!
//! // Scrolled well past the top: the leading fade is fully visible.
//! let _ = fade.update(SurfaceEvent::Scrolled, Instant::now());
//! assert_eq!(fade.mask_state().leading, 1.0);
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod animation;
pub mod axis;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod gradient;
pub mod mask;
pub mod metrics;
pub mod surface;
pub mod time;

pub use animation::{Animation, Easing, Transition};
pub use axis::Axis;
pub use config::{DEFAULT_FADE_DURATION, DEFAULT_FADE_SIZE, FadeConfig, FadeEdges, FadeSize};
pub use controller::{EdgeFade, OPACITY_EPSILON, SurfaceEvent};
pub use geometry::{Point, Rectangle, Size};
pub use gradient::{ColorStop, LinearGradient, fade_band};
pub use mask::{Mask, MaskLayer, MaskState};
pub use metrics::ScrollMetrics;
pub use surface::{AttachError, ScrollSurface};
