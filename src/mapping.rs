//! # Mapping Module
//!
//! A [`Mapping`] binds input events and device events to signal names, and can
//! carry one motion handler for the control it is bound to.
//!
//! ## Lookup rules
//!
//! Bindings are kept in registration order. Lookups return the **first**
//! binding whose event and input both match, so registering the same pair twice
//! keeps both entries and the earlier one shadows the later.
//!
//! ## Usage
//!
//! ```
//! use input_signals::input::{keys, DeviceEvent, Event};
//! use input_signals::mapping::Mapping;
//!
//! let mut mapping = Mapping::new();
//! mapping.on(Event::ButtonRelease, keys::KEY_ESCAPE, "exit")?;
//! mapping.on_device(DeviceEvent::Connected, "player_joined");
//!
//! assert_eq!(mapping.resolve(Event::ButtonRelease, keys::KEY_ESCAPE), Some("exit"));
//! assert_eq!(mapping.resolve(Event::ButtonPress, keys::KEY_ESCAPE), None);
//! assert_eq!(mapping.resolve_device(DeviceEvent::Connected), Some("player_joined"));
//! # Ok::<(), input_signals::error::InputError>(())
//! ```

use std::fmt;
use tracing::debug;

use crate::config::Config;
use crate::diagnostics::{report, DiagnosticKind, Policy, Severity};
use crate::error::{InputError, Result};
use crate::input::{DeviceEvent, Event, Input, InputEvent, MotionEvent};
use crate::signal::is_valid_signal_name;

/// An input event bound to a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedInputEvent {
    pub input_event: InputEvent,
    pub signal: String,
}

/// A device event bound to a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedDeviceEvent {
    pub device_event: DeviceEvent,
    pub signal: String,
}

/// Callback invoked with every motion on a bound control.
pub type MotionHandler = Box<dyn FnMut(&MotionEvent)>;

/// Ordered signal bindings for one device class.
pub struct Mapping {
    inputs: Vec<MappedInputEvent>,
    devices: Vec<MappedDeviceEvent>,
    on_move: Option<MotionHandler>,
    policy: Policy,
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("inputs", &self.inputs)
            .field("devices", &self.devices)
            .field("on_move", &self.on_move.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapping {
    /// Creates an empty mapping that treats invalid signal names as fatal.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(Policy::default())
    }

    /// Creates an empty mapping reporting invalid signal names with `policy`.
    #[must_use]
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            inputs: Vec::new(),
            devices: Vec::new(),
            on_move: None,
            policy,
        }
    }

    /// Creates an empty mapping using the `invalid_signal_name` policy from
    /// `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_signals::config::Config;
    /// use input_signals::input::{keys, Event};
    /// use input_signals::mapping::Mapping;
    ///
    /// let config = Config::parse("[diagnostics]\ninvalid_signal_name = \"warn\"")?;
    /// let mut mapping = Mapping::from_config(&config);
    /// assert!(mapping.on(Event::ButtonPress, keys::KEY_SPACE, "Jump").is_ok());
    /// # Ok::<(), input_signals::error::InputError>(())
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(config.diagnostics.invalid_signal_name)
    }

    /// Policy applied to invalid signal names.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Binds `event` on `input` to `signal`.
    ///
    /// The binding is appended even when `signal` is not a valid name; the
    /// violation is reported through the mapping's [`Policy`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidSignalName`] when the name is invalid and
    /// the policy is [`Policy::Fatal`]. The binding has been stored by then.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_signals::diagnostics::Policy;
    /// use input_signals::input::{keys, Event};
    /// use input_signals::mapping::Mapping;
    ///
    /// let mut mapping = Mapping::with_policy(Policy::Fatal);
    /// assert!(mapping.on(Event::ButtonPress, keys::KEY_SPACE, "Jump").is_err());
    ///
    /// // Still stored.
    /// assert_eq!(mapping.resolve(Event::ButtonPress, keys::KEY_SPACE), Some("Jump"));
    /// ```
    pub fn on(&mut self, event: Event, input: Input, signal: impl Into<String>) -> Result<()> {
        let signal = signal.into();
        let valid = is_valid_signal_name(&signal);

        debug!("Binding {:?} on input {} to '{}'", event, input, signal);
        self.inputs.push(MappedInputEvent {
            input_event: InputEvent::new(event, input),
            signal: signal.clone(),
        });

        if !valid {
            let diagnostic = report(self.policy, DiagnosticKind::InvalidSignalName, &signal);
            if diagnostic.is_some_and(|d| d.severity == Severity::Fatal) {
                return Err(InputError::InvalidSignalName(signal));
            }
        }

        Ok(())
    }

    /// Binds a device event to `signal`. Device signal names are not validated.
    pub fn on_device(&mut self, device_event: DeviceEvent, signal: impl Into<String>) {
        let signal = signal.into();
        debug!("Binding device event {:?} to '{}'", device_event, signal);
        self.devices.push(MappedDeviceEvent {
            device_event,
            signal,
        });
    }

    /// Signal of the first binding matching `event` on `input`.
    #[must_use]
    pub fn resolve(&self, event: Event, input: Input) -> Option<&str> {
        let wanted = InputEvent::new(event, input);
        self.inputs
            .iter()
            .find(|mapped| mapped.input_event == wanted)
            .map(|mapped| mapped.signal.as_str())
    }

    /// Signal of the first binding matching `device_event`.
    #[must_use]
    pub fn resolve_device(&self, device_event: DeviceEvent) -> Option<&str> {
        self.devices
            .iter()
            .find(|mapped| mapped.device_event == device_event)
            .map(|mapped| mapped.signal.as_str())
    }

    /// Input bindings in registration order.
    #[must_use]
    pub fn input_bindings(&self) -> &[MappedInputEvent] {
        &self.inputs
    }

    /// Device bindings in registration order.
    #[must_use]
    pub fn device_bindings(&self) -> &[MappedDeviceEvent] {
        &self.devices
    }

    /// Sets the motion handler, replacing any previous one.
    pub fn set_motion_handler(&mut self, handler: impl FnMut(&MotionEvent) + 'static) {
        self.on_move = Some(Box::new(handler));
    }

    pub fn clear_motion_handler(&mut self) {
        self.on_move = None;
    }

    #[must_use]
    pub fn has_motion_handler(&self) -> bool {
        self.on_move.is_some()
    }

    /// Hands `event` to the motion handler. Returns `false` when there is none.
    pub fn notify_motion(&mut self, event: &MotionEvent) -> bool {
        match self.on_move.as_mut() {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}
