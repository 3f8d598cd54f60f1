//! # Joystick Axis Layout
//!
//! Translates a backend's flat axis array into the two joystick motion
//! surfaces.
//!
//! | Surface | Default axes |
//! |---------|--------------|
//! | [`MotionSurface::JoystickAxes`](crate::input::MotionSurface::JoystickAxes) | 0 (x), 1 (y) |
//! | [`MotionSurface::JoystickRotation`](crate::input::MotionSurface::JoystickRotation) | 2 (x), 3 (y) |
//!
//! A surface none of whose axes are reported is skipped for that tick. When
//! only one axis of a pair is reported, the missing component is `0.0`.
//!
//! ## Deadzone
//!
//! Values within the deadzone are mapped to `0.0`; values outside are scaled so
//! the remaining range still reaches `±1.0`.

use crate::config::DevicesConfig;
use crate::input::Position;

/// Axis indices and deadzone used when polling joysticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLayout {
    movement: [usize; 2],
    rotation: [usize; 2],
    deadzone: f32,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self::from_config(&DevicesConfig::default())
    }
}

impl AxisLayout {
    /// Creates a layout. The deadzone is clamped to `0.0..=0.25`.
    #[must_use]
    pub fn new(movement: [usize; 2], rotation: [usize; 2], deadzone: f32) -> Self {
        Self {
            movement,
            rotation,
            deadzone: deadzone.clamp(0.0, 0.25),
        }
    }

    #[must_use]
    pub fn from_config(config: &DevicesConfig) -> Self {
        Self::new(config.movement_axes, config.rotation_axes, config.axis_deadzone)
    }

    #[must_use]
    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Splits `axes` into (movement, rotation) positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_signals::dispatch::AxisLayout;
    /// use input_signals::input::Position;
    ///
    /// let layout = AxisLayout::default();
    ///
    /// let (movement, rotation) = layout.split(&[0.5, -0.5, 1.0, 0.0]);
    /// assert_eq!(movement, Some(Position::new(0.5, -0.5)));
    /// assert_eq!(rotation, Some(Position::new(1.0, 0.0)));
    ///
    /// let (movement, rotation) = layout.split(&[0.5, -0.5]);
    /// assert!(movement.is_some());
    /// assert!(rotation.is_none());
    /// ```
    #[must_use]
    pub fn split(&self, axes: &[f32]) -> (Option<Position>, Option<Position>) {
        (self.pair(axes, self.movement), self.pair(axes, self.rotation))
    }

    fn pair(&self, axes: &[f32], [ix, iy]: [usize; 2]) -> Option<Position> {
        let x = axes.get(ix).copied();
        let y = axes.get(iy).copied();
        if x.is_none() && y.is_none() {
            return None;
        }

        Some(Position::new(
            f64::from(self.apply_deadzone(x.unwrap_or(0.0))),
            f64::from(self.apply_deadzone(y.unwrap_or(0.0))),
        ))
    }

    #[inline]
    fn apply_deadzone(&self, value: f32) -> f32 {
        if self.deadzone == 0.0 {
            return value;
        }

        let abs_value = value.abs();
        if abs_value <= self.deadzone {
            0.0
        } else {
            value.signum() * (abs_value - self.deadzone) / (1.0 - self.deadzone)
        }
    }
}
