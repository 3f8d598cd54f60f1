//! # Control Module
//!
//! Per-device-instance input state.
//!
//! This module handles:
//! - Tracking which buttons are held ([`ButtonState`])
//! - Tracking motion per surface ([`MotionState`])
//! - Binding a control to the [`Mapping`] it resolves signals through
//! - Pairing a control with a backend device id ([`Device`])
//!
//! A [`Control`] is either [`ControlKind::Simple`] (keyboard) or
//! [`ControlKind::Motion`] (mouse, joystick). Only motion controls track
//! positions and call the mapping's motion handler.
//!
//! ## Sharing
//!
//! Controls and mappings are owned by the host and shared with the
//! [`Dispatcher`](crate::dispatch::Dispatcher) as [`Shared`] handles. Handles
//! are `Rc<RefCell<_>>` and therefore confined to the polling thread.
//!
//! ## Usage
//!
//! ```
//! use input_signals::control::{shared, Control};
//! use input_signals::input::{keys, Event, InputEvent};
//! use input_signals::mapping::Mapping;
//!
//! let mapping = shared(Mapping::new());
//! mapping.borrow_mut().on(Event::ButtonDown, keys::KEY_W, "move_forward")?;
//!
//! let mut keyboard = Control::keyboard();
//! keyboard.bind(mapping);
//! keyboard.handle(&InputEvent::new(Event::ButtonPress, keys::KEY_W));
//!
//! assert_eq!(keyboard.held(), vec![keys::KEY_W]);
//! assert_eq!(
//!     keyboard.resolve(&InputEvent::new(Event::ButtonDown, keys::KEY_W)).as_deref(),
//!     Some("move_forward")
//! );
//! # Ok::<(), input_signals::error::InputError>(())
//! ```

pub mod buttons;
pub mod device;
pub mod motion;

pub use buttons::ButtonState;
pub use device::{Device, DeviceRef};
pub use motion::MotionState;

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::input::{DeviceEvent, Input, InputEvent, MotionEvent, MotionSurface, Position};
use crate::mapping::Mapping;

/// Host-owned handle shared with the dispatcher.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps `value` in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Capabilities of a control.
#[derive(Debug, Clone)]
pub enum ControlKind {
    /// Buttons only.
    Simple,
    /// Buttons plus motion surfaces.
    Motion(MotionState),
}

/// Held-state tracker bound to at most one mapping.
#[derive(Debug, Clone)]
pub struct Control {
    kind: ControlKind,
    buttons: ButtonState,
    mapping: Option<Shared<Mapping>>,
}

impl Control {
    /// Creates an unbound control of the given kind.
    #[must_use]
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            buttons: ButtonState::new(),
            mapping: None,
        }
    }

    /// Creates a button-only control.
    #[must_use]
    pub fn keyboard() -> Self {
        Self::new(ControlKind::Simple)
    }

    /// Creates a control with motion tracking.
    #[must_use]
    pub fn motion() -> Self {
        Self::new(ControlKind::Motion(MotionState::new()))
    }

    /// Creates a mouse control; same as [`Control::motion`].
    #[must_use]
    pub fn mouse() -> Self {
        Self::motion()
    }

    #[must_use]
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    #[must_use]
    pub fn is_motion(&self) -> bool {
        matches!(self.kind, ControlKind::Motion(_))
    }

    /// Binds `mapping`, replacing any previous binding.
    pub fn bind(&mut self, mapping: Shared<Mapping>) {
        self.mapping = Some(mapping);
    }

    pub fn unbind(&mut self) {
        self.mapping = None;
    }

    #[must_use]
    pub fn mapping(&self) -> Option<&Shared<Mapping>> {
        self.mapping.as_ref()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.mapping.is_some()
    }

    /// Updates held state from a transition.
    pub fn handle(&mut self, event: &InputEvent) {
        self.buttons.handle(event);
    }

    /// Inputs currently held, ascending.
    #[must_use]
    pub fn held(&self) -> Vec<Input> {
        self.buttons.held()
    }

    #[must_use]
    pub fn is_held(&self, input: Input) -> bool {
        self.buttons.is_held(input)
    }

    /// Signal bound to `event` in this control's mapping.
    ///
    /// Always `None` for an unbound control.
    #[must_use]
    pub fn resolve(&self, event: &InputEvent) -> Option<String> {
        let mapping = self.mapping.as_ref()?;
        let mapping = mapping.borrow();
        mapping.resolve(event.event, event.input).map(str::to_owned)
    }

    /// Signal bound to a device event in this control's mapping.
    #[must_use]
    pub fn resolve_device(&self, event: DeviceEvent) -> Option<String> {
        let mapping = self.mapping.as_ref()?;
        let mapping = mapping.borrow();
        mapping.resolve_device(event).map(str::to_owned)
    }

    /// Records an absolute sample on `surface` and notifies the mapping's
    /// motion handler.
    ///
    /// Returns the motion event, or `None` for a [`ControlKind::Simple`]
    /// control. The handler must not borrow this control's mapping.
    pub fn position_changed(
        &mut self,
        position: Position,
        surface: MotionSurface,
    ) -> Option<MotionEvent> {
        let ControlKind::Motion(state) = &mut self.kind else {
            debug!("Ignoring {:?} sample on a control without motion", surface);
            return None;
        };

        let event = state.track_position(position, surface);
        self.notify(&event);
        Some(event)
    }

    /// Reports a delta on a surface without absolute coordinates (wheel).
    pub fn relative_changed(
        &mut self,
        delta: Position,
        surface: MotionSurface,
    ) -> Option<MotionEvent> {
        let ControlKind::Motion(state) = &mut self.kind else {
            debug!("Ignoring {:?} delta on a control without motion", surface);
            return None;
        };

        let event = state.track_relative(delta, surface);
        self.notify(&event);
        Some(event)
    }

    #[must_use]
    pub fn last_position(&self, surface: MotionSurface) -> Option<Position> {
        match &self.kind {
            ControlKind::Motion(state) => state.last_position(surface),
            ControlKind::Simple => None,
        }
    }

    #[must_use]
    pub fn last_relative(&self, surface: MotionSurface) -> Option<Position> {
        match &self.kind {
            ControlKind::Motion(state) => state.last_relative(surface),
            ControlKind::Simple => None,
        }
    }

    fn notify(&self, event: &MotionEvent) {
        if let Some(mapping) = &self.mapping {
            mapping.borrow_mut().notify_motion(event);
        }
    }
}
