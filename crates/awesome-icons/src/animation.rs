//! Spinning icon animation.

use std::time::Duration;

use awesome_icons_core::Signal;
use awesome_icons_core::logging::targets;
use awesome_icons_render::{Painter, Rect};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct SpinState {
    angle: f32,
    armed: bool,
}

/// Rotates an icon around its center.
///
/// Attach it to an icon through the `anim` option. The first paint only arms
/// the animation; from then on the host calls [`tick`](Self::tick) every
/// [`interval`](Self::interval) and repaints when [`updated`](Self::updated)
/// fires.
///
/// ```
/// use std::sync::Arc;
/// use awesome_icons::SpinAnimation;
///
/// let spin = Arc::new(SpinAnimation::new());
/// spin.updated().connect(|angle| println!("repaint at {angle} degrees"));
/// spin.tick();
/// assert_eq!(spin.angle(), 1.0);
/// ```
pub struct SpinAnimation {
    interval: Duration,
    step: f32,
    state: Mutex<SpinState>,
    updated: Signal<f32>,
}

impl SpinAnimation {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);
    pub const DEFAULT_STEP: f32 = 1.0;

    pub fn new() -> Self {
        Self::with_params(Self::DEFAULT_INTERVAL, Self::DEFAULT_STEP)
    }

    /// Creates an animation that advances `step` degrees every `interval`.
    pub fn with_params(interval: Duration, step: f32) -> Self {
        Self {
            interval,
            step,
            state: Mutex::new(SpinState::default()),
            updated: Signal::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Current rotation in degrees, in `0.0..360.0`.
    pub fn angle(&self) -> f32 {
        self.state.lock().angle
    }

    /// Whether a paint has armed the animation.
    pub fn is_running(&self) -> bool {
        self.state.lock().armed
    }

    /// Emitted with the new angle after every tick.
    pub fn updated(&self) -> &Signal<f32> {
        &self.updated
    }

    /// Prepares `painter` for drawing into `rect`.
    ///
    /// The first call arms the animation and leaves the painter alone. Later
    /// calls rotate the painter by the current angle around the rect center.
    pub fn setup(&self, painter: &mut dyn Painter, rect: Rect) {
        let angle = {
            let mut state = self.state.lock();
            if !state.armed {
                state.armed = true;
                tracing::debug!(
                    target: targets::PAINT,
                    interval_ms = self.interval.as_millis() as u64,
                    "spin animation armed"
                );
                return;
            }
            state.angle
        };

        let center = rect.center();
        painter.translate(center.x, center.y);
        painter.rotate(angle.to_radians());
        painter.translate(-center.x, -center.y);
    }

    /// Advances the angle by one step and emits [`updated`](Self::updated).
    pub fn tick(&self) -> f32 {
        let angle = {
            let mut state = self.state.lock();
            state.angle = (state.angle + self.step).rem_euclid(360.0);
            state.angle
        };
        self.updated.emit(angle);
        angle
    }

    /// Disarms the animation and resets the angle.
    pub fn stop(&self) {
        let mut state = self.state.lock();
        state.armed = false;
        state.angle = 0.0;
    }
}

impl Default for SpinAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpinAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SpinAnimation")
            .field("interval", &self.interval)
            .field("step", &self.step)
            .field("angle", &state.angle)
            .field("armed", &state.armed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use awesome_icons_render::{DisplayList, Size};

    use super::*;

    #[test]
    fn test_first_setup_only_arms() {
        let spin = SpinAnimation::new();
        let mut list = DisplayList::new(Size::new(20.0, 20.0));
        let bounds = list.bounds();
        spin.setup(&mut list, bounds);
        assert!(spin.is_running());
        list.fill_rect(bounds, awesome_icons_render::Color::RED);
        assert!(list.commands()[0].transform().is_identity());
    }

    #[test]
    fn test_setup_rotates_around_center() {
        let spin = SpinAnimation::with_params(Duration::from_millis(10), 90.0);
        let mut list = DisplayList::new(Size::new(20.0, 20.0));
        let rect = list.bounds();
        spin.setup(&mut list, rect);
        spin.tick();
        spin.setup(&mut list, rect);
        list.fill_rect(rect, awesome_icons_render::Color::RED);

        let transform = list.commands()[0].transform();
        let center = transform.transform_point(rect.center());
        assert!((center.x - 10.0).abs() < 1e-4);
        assert!((center.y - 10.0).abs() < 1e-4);
        assert!((transform.rotation() - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_tick_wraps_and_emits() {
        let spin = SpinAnimation::with_params(Duration::from_millis(5), 250.0);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        spin.updated().connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(spin.tick(), 250.0);
        assert_eq!(spin.tick(), 140.0);
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        spin.stop();
        assert_eq!(spin.angle(), 0.0);
        assert!(!spin.is_running());
    }
}
