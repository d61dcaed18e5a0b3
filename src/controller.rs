//! The edge-fade controller.

use crate::animation::Transition;
use crate::axis::Axis;
use crate::config::{FadeConfig, FadeSize};
use crate::geometry::Rectangle;
use crate::gradient::{self, LinearGradient};
use crate::mask::{Mask, MaskLayer, MaskState};
use crate::metrics::ScrollMetrics;
use crate::surface::{AttachError, ScrollSurface};
use crate::time::{Duration, Instant};

/// Fade changes at or below this threshold apply without a transition.
pub const OPACITY_EPSILON: f32 = 1e-3;

/// A change notification delivered by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The scroll offset changed.
    Scrolled,
    /// The viewport or content extents changed.
    Resized,
    /// The host is about to draw a frame.
    RedrawRequested,
}

/// Fades the edges of a scrollable surface with an animated gradient mask.
///
/// The controller owns the mask it installs: it recomputes the per-edge
/// fade targets whenever the host reports a scroll or bounds change, eases
/// the presented values toward them, and pushes the resulting [`Mask`]
/// through [`ScrollSurface::apply_mask`]. All work happens synchronously on
/// the caller's thread; `now` is always supplied by the host.
pub struct EdgeFade<S>
where
    S: ScrollSurface,
{
    config: FadeConfig,
    surface: Option<S>,
    layer: MaskLayer,
    leading: Channel,
    trailing: Channel,
    mask: Option<Mask>,
}

impl<S> EdgeFade<S>
where
    S: ScrollSurface,
{
    /// Creates a new, detached [`EdgeFade`] with the given configuration.
    pub fn new(config: FadeConfig) -> Self {
        Self {
            config,
            surface: None,
            layer: MaskLayer::Composite,
            leading: Channel::default(),
            trailing: Channel::default(),
            mask: None,
        }
    }

    /// Attaches the controller to a surface and installs the initial mask.
    ///
    /// The initial fade state is computed from the surface's current
    /// metrics and applied without a transition. A previously attached
    /// surface is detached first. Change notifications are delivered by the
    /// host calling [`update`](Self::update).
    ///
    /// Fails only when the handle reports itself invalid; nothing is
    /// installed in that case.
    pub fn attach(&mut self, surface: S) -> Result<(), AttachError> {
        if !surface.is_valid() {
            return Err(AttachError::InvalidSurface);
        }

        if self.surface.is_some() {
            let _ = self.detach();
        }

        self.surface = Some(surface);
        self.layer = self.select_layer();
        self.reset();

        log::debug!("installed edge fade mask on {:?} layer", self.layer);

        Ok(())
    }

    /// Detaches the controller, removing the installed mask, and returns
    /// the surface handle.
    pub fn detach(&mut self) -> Option<S> {
        let mut surface = self.surface.take()?;

        if self.mask.take().is_some() {
            surface.apply_mask(self.layer, None);
        }

        self.leading = Channel::default();
        self.trailing = Channel::default();

        Some(surface)
    }

    /// Handles a change notification from the host event loop.
    ///
    /// Scroll and bounds changes recompute the fade targets and retarget
    /// any in-flight transitions; redraw notifications re-sample the
    /// presented values. Returns whether a transition is still in flight,
    /// in which case the host should keep scheduling redraws.
    ///
    /// Recomputation is idempotent: a second call with unchanged metrics
    /// leaves the mask state untouched and starts no transition. A viewport
    /// extent of zero skips recomputation entirely, keeping the last known
    /// mask state.
    pub fn update(&mut self, event: SurfaceEvent, now: Instant) -> bool {
        if self.surface.is_none() {
            return false;
        }

        match event {
            SurfaceEvent::Scrolled | SurfaceEvent::Resized => self.refresh(now),
            SurfaceEvent::RedrawRequested => self.apply(now),
        }

        self.is_animating(now)
    }

    /// Sets the scroll [`Axis`] the fade applies to.
    ///
    /// Geometry computed for the previous axis is discarded: the mask is
    /// rebuilt from the new axis' metrics immediately, without a
    /// transition.
    pub fn set_axis(&mut self, axis: Axis) {
        if self.config.axis == axis {
            return;
        }

        self.config.axis = axis;
        self.reset();
    }

    /// Sets the [`FadeSize`] of the fade band.
    ///
    /// A negative size is rejected; the previous value is kept.
    pub fn set_fade_size(&mut self, size: impl Into<FadeSize>, now: Instant) {
        let size = size.into();

        if !size.is_valid() {
            log::warn!("ignoring negative fade size {size:?}");
            return;
        }

        if self.config.fade_size != size {
            self.config.fade_size = size;
            self.refresh(now);
        }
    }

    /// Sets the duration of fade transitions.
    ///
    /// Applies to transitions started afterwards; an in-flight transition
    /// keeps its original duration.
    pub fn set_fade_duration(&mut self, duration: Duration) {
        self.config.fade_duration = duration;
    }

    /// Sets whether each edge fades.
    ///
    /// Disabling an edge is structural: its gradient stops are removed
    /// immediately, without a transition.
    pub fn set_edges(&mut self, leading: bool, trailing: bool, now: Instant) {
        if (self.config.fade_leading, self.config.fade_trailing) == (leading, trailing) {
            return;
        }

        self.config.fade_leading = leading;
        self.config.fade_trailing = trailing;

        if !leading {
            self.leading.snap(0.0);
        }
        if !trailing {
            self.trailing.snap(0.0);
        }

        self.refresh(now);
    }

    /// Sets whether scroll indicators are kept out of the fade.
    ///
    /// This is structural: the mask moves between the content layer and the
    /// composited surface (or gains indicator cutouts on hosts without
    /// separate content masking).
    pub fn set_mask_indicators(&mut self, enabled: bool, now: Instant) {
        if self.config.mask_indicators == enabled {
            return;
        }

        self.config.mask_indicators = enabled;

        let previous = self.layer;
        self.layer = self.select_layer();

        if self.layer != previous
            && self.mask.take().is_some()
            && let Some(surface) = self.surface.as_mut()
        {
            surface.apply_mask(previous, None);
        }

        self.apply(now);
    }

    /// The current fade targets of both edges.
    pub fn mask_state(&self) -> MaskState {
        MaskState {
            leading: self.leading.target,
            trailing: self.trailing.target,
        }
    }

    /// The last mask applied to the surface, if any.
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// The layer the mask is installed on.
    pub fn layer(&self) -> MaskLayer {
        self.layer
    }

    /// The current configuration.
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// Whether a surface is attached.
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Whether a fade transition is in flight at the given time.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.leading.is_animating(now) || self.trailing.is_animating(now)
    }

    /// A shared reference to the attached surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// An exclusive reference to the attached surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Recomputes the fade targets and re-applies the mask, easing toward
    /// any changed target.
    fn refresh(&mut self, now: Instant) {
        let Some(metrics) = self.metrics() else {
            return;
        };

        let state = MaskState::compute(metrics, &self.config);
        self.leading
            .retarget(state.leading, self.config.fade_duration, now);
        self.trailing
            .retarget(state.trailing, self.config.fade_duration, now);

        self.apply(now);
    }

    /// Recomputes the fade targets and applies them without transitions.
    fn reset(&mut self) {
        let Some(metrics) = self.metrics() else {
            return;
        };

        let state = MaskState::compute(metrics, &self.config);
        self.leading.snap(state.leading);
        self.trailing.snap(state.trailing);

        self.rebuild_mask(state.leading, state.trailing);
    }

    /// Re-applies the mask at the presented values for the given time.
    fn apply(&mut self, now: Instant) {
        let leading = self.leading.sample(now);
        let trailing = self.trailing.sample(now);

        self.rebuild_mask(leading, trailing);
    }

    /// Builds the mask at the given presented values and pushes it to the
    /// surface if it differs from the last applied one.
    fn rebuild_mask(&mut self, leading: f32, trailing: f32) {
        let Some(metrics) = self.metrics() else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let fade = self.config.fade_size.resolve(metrics.viewport);
        let band = gradient::fade_band(
            fade,
            metrics.viewport,
            self.config.fade_leading && self.config.fade_trailing,
        );

        let gradient = LinearGradient::edge_fade(
            self.config.axis,
            band,
            self.config.fade_leading.then_some(leading),
            self.config.fade_trailing.then_some(trailing),
        );

        let frame = Rectangle::new(
            0.0,
            0.0,
            surface.viewport_extent(Axis::Horizontal),
            surface.viewport_extent(Axis::Vertical),
        );

        let cutouts = if self.layer == MaskLayer::Composite && self.config.mask_indicators {
            surface.indicator_bounds()
        } else {
            Vec::new()
        };

        let mask = Mask {
            frame,
            gradient,
            cutouts,
        };

        if self.mask.as_ref() != Some(&mask) {
            surface.apply_mask(self.layer, Some(&mask));
            self.mask = Some(mask);
        }
    }

    /// Reads the surface metrics along the active axis; `None` while
    /// detached or while the viewport has no extent.
    fn metrics(&self) -> Option<ScrollMetrics> {
        let surface = self.surface.as_ref()?;
        let axis = self.config.axis;

        let metrics = ScrollMetrics::new(
            surface.viewport_extent(axis),
            surface.content_extent(axis),
            surface.scroll_offset(axis),
        );

        (metrics.viewport > 0.0).then_some(metrics)
    }

    /// Picks the layer the mask should live on, given the configuration
    /// and the surface's capabilities.
    fn select_layer(&self) -> MaskLayer {
        match &self.surface {
            Some(surface)
                if self.config.mask_indicators
                    && surface.supports_layer(MaskLayer::Content) =>
            {
                MaskLayer::Content
            }
            _ => MaskLayer::Composite,
        }
    }
}

impl<S> Default for EdgeFade<S>
where
    S: ScrollSurface,
{
    fn default() -> Self {
        Self::new(FadeConfig::new())
    }
}

/// The fade of one edge: an exact target plus an optional transition
/// easing the presented value toward it.
#[derive(Debug, Clone, Default)]
struct Channel {
    target: f32,
    transition: Option<Transition>,
}

impl Channel {
    /// Moves the target, starting an eased transition from the currently
    /// presented value when the change is more than negligible.
    fn retarget(&mut self, target: f32, duration: Duration, now: Instant) {
        if (target - self.target).abs() <= OPACITY_EPSILON {
            // Negligible move; any in-flight transition keeps converging.
            self.target = target;
            return;
        }

        let presented = self.sample(now);
        self.target = target;

        self.transition = if duration.is_zero() || (target - presented).abs() <= OPACITY_EPSILON {
            None
        } else {
            Some(Transition::new(presented, duration, now))
        };
    }

    /// Jumps straight to the target, dropping any transition.
    fn snap(&mut self, target: f32) {
        self.target = target;
        self.transition = None;
    }

    /// The presented value at the given time.
    fn sample(&self, now: Instant) -> f32 {
        match &self.transition {
            Some(transition) if transition.is_animating(now) => {
                transition.sample(self.target, now)
            }
            _ => self.target,
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| transition.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    struct TestSurface {
        viewport: (f32, f32),
        content: (f32, f32),
        offset: (f32, f32),
        valid: bool,
        content_layer: bool,
        indicators: Vec<Rectangle>,
        applied: Vec<(MaskLayer, Option<Mask>)>,
    }

    impl Default for TestSurface {
        fn default() -> Self {
            Self {
                viewport: (100.0, 100.0),
                content: (300.0, 200.0),
                offset: (0.0, 0.0),
                valid: true,
                content_layer: true,
                indicators: Vec::new(),
                applied: Vec::new(),
            }
        }
    }

    impl ScrollSurface for TestSurface {
        fn viewport_extent(&self, axis: Axis) -> f32 {
            match axis {
                Axis::Horizontal => self.viewport.0,
                Axis::Vertical => self.viewport.1,
            }
        }

        fn content_extent(&self, axis: Axis) -> f32 {
            match axis {
                Axis::Horizontal => self.content.0,
                Axis::Vertical => self.content.1,
            }
        }

        fn scroll_offset(&self, axis: Axis) -> f32 {
            match axis {
                Axis::Horizontal => self.offset.0,
                Axis::Vertical => self.offset.1,
            }
        }

        fn apply_mask(&mut self, layer: MaskLayer, mask: Option<&Mask>) {
            self.applied.push((layer, mask.cloned()));
        }

        fn is_valid(&self) -> bool {
            self.valid
        }

        fn supports_layer(&self, layer: MaskLayer) -> bool {
            layer == MaskLayer::Composite || self.content_layer
        }

        fn indicator_bounds(&self) -> Vec<Rectangle> {
            self.indicators.clone()
        }
    }

    fn applied(fade: &EdgeFade<TestSurface>) -> &[(MaskLayer, Option<Mask>)] {
        &fade.surface().unwrap().applied
    }

    #[test]
    fn test_attach_rejects_invalid_surface() {
        let mut fade = EdgeFade::new(FadeConfig::new());
        let surface = TestSurface {
            valid: false,
            ..TestSurface::default()
        };

        assert_eq!(fade.attach(surface), Err(AttachError::InvalidSurface));
        assert!(!fade.is_attached());
        assert!(fade.mask().is_none());
    }

    #[test]
    fn test_attach_installs_snapped_mask() {
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface {
            offset: (0.0, 15.0),
            ..TestSurface::default()
        })
        .expect("surface is valid");

        assert_eq!(fade.mask_state().leading, 0.5);
        assert_eq!(fade.mask_state().trailing, 1.0);
        assert!(!fade.is_animating(Instant::now()));

        assert_eq!(applied(&fade).len(), 1);
        let (layer, mask) = &applied(&fade)[0];
        assert_eq!(*layer, MaskLayer::Content);

        let mask = mask.as_ref().unwrap();
        assert_eq!(mask.frame, Rectangle::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(mask.gradient.stops[0].alpha, 0.5);
        assert_eq!(mask.gradient.stops[1].offset, 0.3);
        assert_eq!(mask.gradient.stops[3].alpha, 0.0);
        assert!(mask.cutouts.is_empty());
    }

    #[test]
    fn test_update_while_detached_is_a_no_op() {
        let mut fade: EdgeFade<TestSurface> = EdgeFade::default();

        assert!(!fade.update(SurfaceEvent::Scrolled, Instant::now()));
        assert!(fade.mask().is_none());
    }

    #[test]
    fn test_scroll_starts_transition() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface::default()).expect("surface is valid");

        fade.surface_mut().unwrap().offset.1 = 60.0;

        assert!(fade.update(SurfaceEvent::Scrolled, now));
        assert_eq!(fade.mask_state().leading, 1.0);
        assert!(fade.is_animating(now));

        let mid = now + Duration::from_millis(150);
        assert!(fade.update(SurfaceEvent::RedrawRequested, mid));

        let alpha = fade.mask().unwrap().gradient.stops[0].alpha;
        assert!(alpha > 0.0 && alpha < 1.0);

        let done = now + Duration::from_millis(400);
        assert!(!fade.update(SurfaceEvent::RedrawRequested, done));
        assert_eq!(fade.mask().unwrap().gradient.stops[0].alpha, 0.0);
    }

    #[test]
    fn test_identical_metrics_are_idempotent() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface {
            offset: (0.0, 60.0),
            ..TestSurface::default()
        })
        .expect("surface is valid");

        let installs = applied(&fade).len();
        let state = fade.mask_state();

        assert!(!fade.update(SurfaceEvent::Scrolled, now));
        assert!(!fade.update(SurfaceEvent::Scrolled, now));

        assert_eq!(fade.mask_state(), state);
        assert!(!fade.is_animating(now));
        assert_eq!(applied(&fade).len(), installs);
    }

    #[test]
    fn test_retargeting_supersedes_in_flight_transition() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface::default()).expect("surface is valid");

        fade.surface_mut().unwrap().offset.1 = 60.0;
        assert!(fade.update(SurfaceEvent::Scrolled, now));

        // Scroll back before the fade-in finishes; the transition retargets.
        let back = now + Duration::from_millis(100);
        fade.surface_mut().unwrap().offset.1 = 0.0;
        assert!(fade.update(SurfaceEvent::Scrolled, back));
        assert_eq!(fade.mask_state().leading, 0.0);

        let done = back + Duration::from_millis(400);
        assert!(!fade.update(SurfaceEvent::RedrawRequested, done));
        assert_eq!(fade.mask().unwrap().gradient.stops[0].alpha, 1.0);
    }

    #[test]
    fn test_zero_viewport_keeps_last_state() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface {
            offset: (0.0, 60.0),
            ..TestSurface::default()
        })
        .expect("surface is valid");

        let installs = applied(&fade).len();
        fade.surface_mut().unwrap().viewport = (100.0, 0.0);

        assert!(!fade.update(SurfaceEvent::Resized, now));
        assert_eq!(fade.mask_state().leading, 1.0);
        assert_eq!(applied(&fade).len(), installs);
    }

    #[test]
    fn test_axis_switch_discards_stale_geometry() {
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface {
            offset: (0.0, 60.0),
            ..TestSurface::default()
        })
        .expect("surface is valid");

        assert_eq!(fade.mask_state().leading, 1.0);

        fade.set_axis(Axis::Horizontal);

        // Horizontal offset is 0: the leading fade is gone, with no
        // cross-axis transition.
        assert_eq!(fade.mask_state().leading, 0.0);
        assert!(!fade.is_animating(Instant::now()));

        let gradient = &fade.mask().unwrap().gradient;
        assert_eq!(gradient.start, Point::new(0.0, 0.5));
        assert_eq!(gradient.end, Point::new(1.0, 0.5));
    }

    #[test]
    fn test_disabling_an_edge_is_structural() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface {
            offset: (0.0, 60.0),
            ..TestSurface::default()
        })
        .expect("surface is valid");

        fade.set_edges(false, true, now);

        assert_eq!(fade.mask_state().leading, 0.0);
        assert!(!fade.is_animating(now));
        assert_eq!(fade.mask().unwrap().gradient.stops.len(), 2);
    }

    #[test]
    fn test_indicator_masking_picks_the_content_layer() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface::default()).expect("surface is valid");

        assert_eq!(fade.layer(), MaskLayer::Content);
        assert!(fade.mask().unwrap().cutouts.is_empty());

        fade.set_mask_indicators(false, now);

        assert_eq!(fade.layer(), MaskLayer::Composite);
        assert!(
            applied(&fade)
                .iter()
                .any(|(layer, mask)| *layer == MaskLayer::Content && mask.is_none())
        );
        assert_eq!(applied(&fade).last().unwrap().0, MaskLayer::Composite);
    }

    #[test]
    fn test_composite_fallback_carves_indicator_cutouts() {
        let indicator = Rectangle::new(96.0, 10.0, 3.0, 40.0);
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface {
            content_layer: false,
            indicators: vec![indicator],
            ..TestSurface::default()
        })
        .expect("surface is valid");

        assert_eq!(fade.layer(), MaskLayer::Composite);
        assert_eq!(fade.mask().unwrap().cutouts, vec![indicator]);
    }

    #[test]
    fn test_detach_removes_the_mask() {
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface::default()).expect("surface is valid");

        let surface = fade.detach().unwrap();

        assert!(surface.applied.last().unwrap().1.is_none());
        assert!(!fade.is_attached());
        assert!(fade.mask().is_none());
        assert!(fade.detach().is_none());
    }

    #[test]
    fn test_set_fade_size_rejects_negative_values() {
        let now = Instant::now();
        let mut fade = EdgeFade::new(FadeConfig::new());
        fade.attach(TestSurface::default()).expect("surface is valid");

        fade.set_fade_size(-3.0, now);
        assert_eq!(fade.config().fade_size, FadeSize::Absolute(30.0));

        fade.set_fade_size(10.0, now);
        assert_eq!(fade.config().fade_size, FadeSize::Absolute(10.0));
    }
}
