//! # Input Module
//!
//! Value types shared by mappings, controls and the dispatcher.
//!
//! ## Events
//!
//! | Event | Origin | Fired |
//! |-------|--------|-------|
//! | [`Event::ButtonPress`] | backend | once, on the low→high transition |
//! | [`Event::ButtonDown`] | [`Dispatcher::tick`](crate::dispatch::Dispatcher::tick) | every tick while held |
//! | [`Event::ButtonRelease`] | backend | once, on the high→low transition |
//!
//! ## Input codes
//!
//! An [`Input`] is an opaque code whose meaning depends on the device class it
//! came from. Keyboard, mouse and joystick codes share one numeric space, so a
//! mouse button and a joystick button may carry the same value. Lookups never
//! cross device classes because each control resolves through its own mapping.
//! The [`keys`] module lists the GLFW-compatible codes.

pub mod keys;

use std::fmt;

/// Numeric code identifying a physical key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Input(pub i32);

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a button as seen by a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Just pressed.
    ButtonPress,
    /// Held; synthesized once per tick.
    ButtonDown,
    /// Just released.
    ButtonRelease,
}

/// Connectivity change of a multi-instance device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceEvent {
    Connected,
    Disconnected,
}

/// An (event, input) pair. Two input events are equal when both fields are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    pub event: Event,
    pub input: Input,
}

impl InputEvent {
    #[must_use]
    pub fn new(event: Event, input: Input) -> Self {
        Self { event, input }
    }
}

/// Transition code reported by a backend for a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Release,
    Press,
    /// Key auto-repeat. Ignored by transition entry points.
    Repeat,
}

impl Action {
    /// Convert a GLFW-style action code (`0` release, `1` press, `2` repeat).
    ///
    /// # Examples
    ///
    /// ```
    /// use input_signals::input::Action;
    ///
    /// assert_eq!(Action::from_raw(1), Some(Action::Press));
    /// assert_eq!(Action::from_raw(7), None);
    /// ```
    #[must_use]
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Action::Release),
            1 => Some(Action::Press),
            2 => Some(Action::Repeat),
            _ => None,
        }
    }

    /// The edge event this action produces, if any.
    #[must_use]
    pub fn event(self) -> Option<Event> {
        match self {
            Action::Release => Some(Event::ButtonRelease),
            Action::Press => Some(Event::ButtonPress),
            Action::Repeat => None,
        }
    }
}

/// A point (or delta) on a motion surface.
///
/// `z` is only present for sources that report a third axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    #[must_use]
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Componentwise difference `self - previous`.
    ///
    /// `z` is only present when both positions carry it.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_signals::input::Position;
    ///
    /// let delta = Position::new(5.0, 5.0).delta_from(&Position::new(2.0, 2.0));
    /// assert_eq!(delta, Position::new(3.0, 3.0));
    /// ```
    #[must_use]
    pub fn delta_from(&self, previous: &Position) -> Position {
        Position {
            x: self.x - previous.x,
            y: self.y - previous.y,
            z: match (self.z, previous.z) {
                (Some(current), Some(prev)) => Some(current - prev),
                _ => None,
            },
        }
    }
}

/// An independent motion channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionSurface {
    MouseCursor,
    MouseWheel,
    /// First joystick axis pair (movement).
    JoystickAxes,
    /// Second joystick axis pair (rotation).
    JoystickRotation,
}

/// Motion report handed to a mapping's motion handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    /// Absolute sample; `None` for surfaces without a coordinate space.
    pub position: Option<Position>,
    /// Change since the previous sample; `None` on a surface's first sample.
    pub relative: Option<Position>,
    pub surface: MotionSurface,
}

/// Backend-assigned identifier of a multi-instance device (joystick slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
