//! # Dispatch Module
//!
//! The [`Dispatcher`] receives raw input from the host, keeps the bound
//! controls up to date, resolves signals through their mappings and invokes the
//! registered handlers.
//!
//! ## Entry points
//!
//! | Method | Source | Effect |
//! |--------|--------|--------|
//! | [`Dispatcher::key_event`] | keyboard press/release | update keyboard, dispatch press/release signal |
//! | [`Dispatcher::mouse_button_event`] | mouse press/release | update mouse, dispatch press/release signal |
//! | [`Dispatcher::cursor_moved`] | cursor sample | mouse motion handler ([`MotionSurface::MouseCursor`]) |
//! | [`Dispatcher::scrolled`] | wheel delta | mouse motion handler ([`MotionSurface::MouseWheel`]) |
//! | [`Dispatcher::device_event`] | joystick (dis)connect | dispatch device signal per tracked device |
//! | [`Dispatcher::tick`] | host loop | `ButtonDown` signals, joystick polling |
//!
//! ## Threading
//!
//! Everything runs synchronously on the host's polling thread. Handlers must
//! not mutate mappings or rebind the dispatcher's controls while a
//! [`tick`](Dispatcher::tick) is in progress; doing so is unsupported.
//!
//! ## Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use input_signals::control::{shared, Control};
//! use input_signals::dispatch::Dispatcher;
//! use input_signals::input::{keys, Action, Event};
//! use input_signals::mapping::Mapping;
//!
//! let mapping = shared(Mapping::new());
//! mapping.borrow_mut().on(Event::ButtonDown, keys::KEY_W, "move_forward")?;
//!
//! let keyboard = shared(Control::keyboard());
//! keyboard.borrow_mut().bind(mapping);
//!
//! let steps = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&steps);
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.bind_keyboard(Some(keyboard));
//! dispatcher.listen_for("move_forward", move |_| counter.set(counter.get() + 1));
//!
//! dispatcher.key_event(keys::KEY_W, Action::Press);
//! dispatcher.tick();
//! dispatcher.tick();
//! assert_eq!(steps.get(), 2);
//! # Ok::<(), input_signals::error::InputError>(())
//! ```

pub mod axes;
mod signals;

pub use axes::AxisLayout;
pub use signals::{ReceivedSignal, SignalHandler};

use std::fmt;
use tracing::{debug, trace};

use crate::backend::DeviceBackend;
use crate::config::Config;
use crate::control::{Control, Device, Shared};
use crate::diagnostics::Diagnostic;
use crate::input::{Action, DeviceEvent, Event, Input, InputEvent, MotionSurface, Position};
use signals::SignalTable;

/// Routes raw input to signal handlers.
pub struct Dispatcher {
    keyboard: Option<Shared<Control>>,
    mouse: Option<Shared<Control>>,
    devices: Vec<Shared<Device>>,
    signals: SignalTable,
    backend: Option<Box<dyn DeviceBackend>>,
    layout: AxisLayout,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("keyboard", &self.keyboard.is_some())
            .field("mouse", &self.mouse.is_some())
            .field("devices", &self.devices.len())
            .field("signals", &self.signals)
            .field("backend", &self.backend.is_some())
            .field("layout", &self.layout)
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a dispatcher using the unhandled-signal policy and joystick
    /// axis layout from `config`. A fatal unhandled-signal policy is reported
    /// at error severity.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            keyboard: None,
            mouse: None,
            devices: Vec::new(),
            signals: SignalTable::new(config.diagnostics.unhandled_signal),
            backend: None,
            layout: AxisLayout::from_config(&config.devices),
        }
    }

    // ==================== Subscription ====================

    /// Registers `handler` for `signal`, replacing any previous handler.
    pub fn listen_for(
        &mut self,
        signal: impl Into<String>,
        handler: impl FnMut(&ReceivedSignal) + 'static,
    ) {
        self.signals.listen(signal.into(), Box::new(handler));
    }

    /// Removes the handler for `signal`. Returns `false` if there was none.
    pub fn stop_listening(&mut self, signal: &str) -> bool {
        self.signals.forget(signal)
    }

    #[must_use]
    pub fn is_listening(&self, signal: &str) -> bool {
        self.signals.contains(signal)
    }

    /// Receives every unhandled-signal diagnostic that the policy lets through.
    pub fn set_diagnostic_sink(&mut self, sink: impl FnMut(&Diagnostic) + 'static) {
        self.signals.set_sink(Some(Box::new(sink)));
    }

    pub fn clear_diagnostic_sink(&mut self) {
        self.signals.set_sink(None);
    }

    // ==================== Binding ====================

    /// Sets the active keyboard; `None` unbinds it.
    pub fn bind_keyboard(&mut self, keyboard: Option<Shared<Control>>) {
        self.keyboard = keyboard;
    }

    /// Sets the active mouse; `None` unbinds it.
    pub fn bind_mouse(&mut self, mouse: Option<Shared<Control>>) {
        self.mouse = mouse;
    }

    /// Replaces the tracked devices; an empty list unbinds them all.
    pub fn bind_devices(&mut self, devices: Vec<Shared<Device>>) {
        debug!("Tracking {} device(s)", devices.len());
        self.devices = devices;
    }

    /// Sets the backend queried for joystick state during [`tick`](Self::tick).
    pub fn set_backend(&mut self, backend: impl DeviceBackend + 'static) {
        self.backend = Some(Box::new(backend));
    }

    #[must_use]
    pub fn keyboard(&self) -> Option<&Shared<Control>> {
        self.keyboard.as_ref()
    }

    #[must_use]
    pub fn mouse(&self) -> Option<&Shared<Control>> {
        self.mouse.as_ref()
    }

    #[must_use]
    pub fn devices(&self) -> &[Shared<Device>] {
        &self.devices
    }

    // ==================== Raw events ====================

    /// Keyboard transition. [`Action::Repeat`] is ignored.
    pub fn key_event(&mut self, key: Input, action: Action) {
        let keyboard = self.keyboard.clone();
        self.transition(keyboard, key, action);
    }

    /// Mouse button transition. [`Action::Repeat`] is ignored.
    pub fn mouse_button_event(&mut self, button: Input, action: Action) {
        let mouse = self.mouse.clone();
        self.transition(mouse, button, action);
    }

    /// Absolute cursor sample.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if let Some(mouse) = &self.mouse {
            mouse
                .borrow_mut()
                .position_changed(Position::new(x, y), MotionSurface::MouseCursor);
        }
    }

    /// Scroll wheel delta.
    pub fn scrolled(&mut self, dx: f64, dy: f64) {
        if let Some(mouse) = &self.mouse {
            mouse
                .borrow_mut()
                .relative_changed(Position::new(dx, dy), MotionSurface::MouseWheel);
        }
    }

    /// A device was connected or disconnected.
    ///
    /// Every tracked device whose mapping binds `event` gets its signal
    /// dispatched, carrying that device's identity.
    pub fn device_event(&mut self, event: DeviceEvent) {
        debug!("Device event {:?}", event);
        for device in &self.devices {
            let (signal, origin) = {
                let device = device.borrow();
                (device.control().resolve_device(event), device.device_ref())
            };

            if let Some(signal) = signal {
                self.signals.dispatch(&signal, Some(origin));
            }
        }
    }

    fn transition(&mut self, control: Option<Shared<Control>>, input: Input, action: Action) {
        let Some(control) = control else {
            return;
        };
        let Some(event) = action.event() else {
            trace!("Ignoring repeat on input {}", input);
            return;
        };

        let input_event = InputEvent::new(event, input);
        let signal = {
            let mut control = control.borrow_mut();
            control.handle(&input_event);
            control.resolve(&input_event)
        };

        if let Some(signal) = signal {
            self.signals.dispatch(&signal, None);
        }
    }

    // ==================== Tick ====================

    /// Runs one reconciliation pass.
    ///
    /// 1. Dispatches a `ButtonDown` signal for every held keyboard and mouse
    ///    input, in ascending input order.
    /// 2. For every tracked device that is bound and present: dispatches
    ///    press/release signals for button edges, then `ButtonDown` signals for
    ///    held buttons, then feeds the axis pairs to its motion surfaces.
    ///
    /// Unhandled signals are reported and never stop the pass.
    pub fn tick(&mut self) {
        for control in [self.keyboard.clone(), self.mouse.clone()].into_iter().flatten() {
            let signals = held_signals(&control.borrow());
            for signal in signals {
                self.signals.dispatch(&signal, None);
            }
        }

        self.poll_devices();
    }

    fn poll_devices(&mut self) {
        if self.devices.is_empty() {
            return;
        }
        let Some(backend) = self.backend.as_deref() else {
            debug!("No device backend set, skipping {} device(s)", self.devices.len());
            return;
        };

        for device in &self.devices {
            let (origin, signals) = {
                let mut device = device.borrow_mut();
                let id = device.id();
                if !device.control().is_bound() || !backend.is_present(id) {
                    continue;
                }

                let buttons = backend.buttons(id);
                let signals = sync_buttons(device.control_mut(), &buttons);
                (device.device_ref(), signals)
            };

            for signal in &signals {
                self.signals.dispatch(signal, Some(origin.clone()));
            }

            if let Some(axes) = backend.axes(origin.id) {
                let (movement, rotation) = self.layout.split(&axes);
                let mut device = device.borrow_mut();
                let control = device.control_mut();
                if let Some(position) = movement {
                    control.position_changed(position, MotionSurface::JoystickAxes);
                }
                if let Some(position) = rotation {
                    control.position_changed(position, MotionSurface::JoystickRotation);
                }
            }
        }
    }
}

/// `ButtonDown` signals for every held input of `control`.
fn held_signals(control: &Control) -> Vec<String> {
    control
        .held()
        .into_iter()
        .filter_map(|input| control.resolve(&InputEvent::new(Event::ButtonDown, input)))
        .collect()
}

/// Brings `control` in line with a polled button array and returns the edge
/// signals followed by the held signals.
///
/// Only indices below `buttons.len()` are read. Held inputs outside the
/// reported range are released.
fn sync_buttons(control: &mut Control, buttons: &[bool]) -> Vec<String> {
    let mut edges = Vec::new();

    for (index, &pressed) in buttons.iter().enumerate() {
        let input = Input(index as i32);
        if pressed != control.is_held(input) {
            let event = if pressed { Event::ButtonPress } else { Event::ButtonRelease };
            edges.push(InputEvent::new(event, input));
        }
    }

    for input in control.held() {
        let in_range = usize::try_from(input.0).map_or(false, |index| index < buttons.len());
        if !in_range {
            edges.push(InputEvent::new(Event::ButtonRelease, input));
        }
    }

    let mut signals = Vec::new();
    for edge in &edges {
        control.handle(edge);
        signals.extend(control.resolve(edge));
    }
    signals.extend(held_signals(control));
    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockDeviceBackend;
    use crate::control::shared;
    use crate::diagnostics::{DiagnosticKind, Policy, Severity};
    use crate::input::{keys, DeviceId, MotionEvent};
    use crate::mapping::Mapping;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log<T> = Rc<RefCell<Vec<T>>>;

    /// Registers recording handlers for `names` and returns the shared log.
    fn record(dispatcher: &mut Dispatcher, names: &[&str]) -> Log<ReceivedSignal> {
        let log: Log<ReceivedSignal> = Rc::new(RefCell::new(Vec::new()));
        for name in names {
            let log = Rc::clone(&log);
            dispatcher.listen_for(*name, move |signal| log.borrow_mut().push(signal.clone()));
        }
        log
    }

    fn signal_names(log: &Log<ReceivedSignal>) -> Vec<String> {
        log.borrow().iter().map(|s| s.signal.clone()).collect()
    }

    fn bound_keyboard(bindings: &[(Event, Input, &str)]) -> Shared<Control> {
        let mapping = shared(Mapping::new());
        for (event, input, signal) in bindings {
            mapping.borrow_mut().on(*event, *input, *signal).unwrap();
        }
        let keyboard = shared(Control::keyboard());
        keyboard.borrow_mut().bind(mapping);
        keyboard
    }

    fn motion_log(mapping: &Shared<Mapping>) -> Log<MotionEvent> {
        let log: Log<MotionEvent> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        mapping
            .borrow_mut()
            .set_motion_handler(move |event| sink.borrow_mut().push(*event));
        log
    }

    // ==================== Transition Tests ====================

    #[test]
    fn test_key_press_and_release_dispatch() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonPress, keys::KEY_SPACE, "jump"),
            (Event::ButtonRelease, keys::KEY_ESCAPE, "exit"),
        ])));
        let log = record(&mut dispatcher, &["jump", "exit"]);

        dispatcher.key_event(keys::KEY_SPACE, Action::Press);
        dispatcher.key_event(keys::KEY_ESCAPE, Action::Press);
        dispatcher.key_event(keys::KEY_ESCAPE, Action::Release);

        assert_eq!(signal_names(&log), vec!["jump", "exit"]);
        assert!(log.borrow().iter().all(|s| s.device.is_none()));
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let keyboard = bound_keyboard(&[(Event::ButtonPress, keys::KEY_SPACE, "jump")]);
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(Rc::clone(&keyboard)));
        let log = record(&mut dispatcher, &["jump"]);

        dispatcher.key_event(keys::KEY_SPACE, Action::Repeat);

        assert!(log.borrow().is_empty());
        assert!(!keyboard.borrow().is_held(keys::KEY_SPACE));
    }

    #[test]
    fn test_unmapped_key_updates_state_silently() {
        let keyboard = bound_keyboard(&[]);
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(Rc::clone(&keyboard)));

        let diagnostics = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&diagnostics);
        dispatcher.set_diagnostic_sink(move |_| *sink.borrow_mut() += 1);

        dispatcher.key_event(keys::KEY_Q, Action::Press);

        assert!(keyboard.borrow().is_held(keys::KEY_Q));
        assert_eq!(*diagnostics.borrow(), 0);
    }

    #[test]
    fn test_key_event_without_keyboard_is_noop() {
        let mut dispatcher = Dispatcher::new();
        let log = record(&mut dispatcher, &["jump"]);
        dispatcher.key_event(keys::KEY_SPACE, Action::Press);
        dispatcher.tick();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unbinding_keyboard_stops_dispatch() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonPress, keys::KEY_SPACE, "jump"),
        ])));
        let log = record(&mut dispatcher, &["jump"]);

        dispatcher.bind_keyboard(None);
        dispatcher.key_event(keys::KEY_SPACE, Action::Press);

        assert!(dispatcher.keyboard().is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_mouse_button_dispatch() {
        let mapping = shared(Mapping::new());
        mapping
            .borrow_mut()
            .on(Event::ButtonPress, keys::MOUSE_PRIMARY, "shoot")
            .unwrap();
        let mouse = shared(Control::mouse());
        mouse.borrow_mut().bind(mapping);

        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_mouse(Some(Rc::clone(&mouse)));
        let log = record(&mut dispatcher, &["shoot"]);

        dispatcher.mouse_button_event(keys::MOUSE_PRIMARY, Action::Press);

        assert_eq!(signal_names(&log), vec!["shoot"]);
        assert_eq!(mouse.borrow().held(), vec![keys::MOUSE_PRIMARY]);
    }

    #[test]
    fn test_listen_for_overwrites() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonPress, keys::KEY_SPACE, "jump"),
        ])));
        let first = record(&mut dispatcher, &["jump"]);
        let second = record(&mut dispatcher, &["jump"]);

        dispatcher.key_event(keys::KEY_SPACE, Action::Press);

        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn test_stop_listening() {
        let mut dispatcher = Dispatcher::new();
        record(&mut dispatcher, &["jump"]);
        assert!(dispatcher.is_listening("jump"));
        assert!(dispatcher.stop_listening("jump"));
        assert!(!dispatcher.is_listening("jump"));
    }

    // ==================== Tick Tests ====================

    #[test]
    fn test_tick_dispatches_held_once_per_tick() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonDown, keys::KEY_W, "move_forward"),
        ])));
        let log = record(&mut dispatcher, &["move_forward"]);

        dispatcher.key_event(keys::KEY_W, Action::Press);
        assert!(log.borrow().is_empty());

        dispatcher.tick();
        assert_eq!(log.borrow().len(), 1);
        dispatcher.tick();
        assert_eq!(log.borrow().len(), 2);

        dispatcher.key_event(keys::KEY_W, Action::Release);
        dispatcher.tick();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_tick_without_held_inputs_invokes_nothing() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonDown, keys::KEY_W, "move_forward"),
        ])));
        let log = record(&mut dispatcher, &["move_forward"]);

        dispatcher.tick();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_tick_orders_held_inputs_ascending() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonDown, keys::KEY_D, "move_right"),
            (Event::ButtonDown, keys::KEY_A, "move_left"),
        ])));
        let log = record(&mut dispatcher, &["move_right", "move_left"]);

        dispatcher.key_event(keys::KEY_D, Action::Press);
        dispatcher.key_event(keys::KEY_A, Action::Press);
        dispatcher.tick();

        assert_eq!(signal_names(&log), vec!["move_left", "move_right"]);
    }

    #[test]
    fn test_unhandled_signal_does_not_stop_tick() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonDown, keys::KEY_A, "jump"),
            (Event::ButtonDown, keys::KEY_D, "move_right"),
        ])));
        let log = record(&mut dispatcher, &["move_right"]);

        let diagnostics: Log<Diagnostic> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&diagnostics);
        dispatcher.set_diagnostic_sink(move |d| sink.borrow_mut().push(d.clone()));

        dispatcher.key_event(keys::KEY_A, Action::Press);
        dispatcher.key_event(keys::KEY_D, Action::Press);
        dispatcher.tick();

        assert_eq!(signal_names(&log), vec!["move_right"]);
        let diagnostics = diagnostics.borrow();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnhandledSignal);
        assert_eq!(diagnostics[0].signal, "jump");
    }

    #[test]
    fn test_silent_unhandled_policy_from_config() {
        let mut config = Config::default();
        config.diagnostics.unhandled_signal = Policy::Silent;

        let mut dispatcher = Dispatcher::from_config(&config);
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonPress, keys::KEY_SPACE, "jump"),
        ])));

        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        dispatcher.set_diagnostic_sink(move |_| *sink.borrow_mut() += 1);

        dispatcher.key_event(keys::KEY_SPACE, Action::Press);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_fatal_unhandled_policy_is_downgraded() {
        let mut config = Config::default();
        config.diagnostics.unhandled_signal = Policy::Fatal;

        let mut dispatcher = Dispatcher::from_config(&config);
        dispatcher.bind_keyboard(Some(bound_keyboard(&[
            (Event::ButtonPress, keys::KEY_SPACE, "jump"),
            (Event::ButtonDown, keys::KEY_SPACE, "airborne"),
        ])));
        let log = record(&mut dispatcher, &["airborne"]);

        let severities = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&severities);
        dispatcher.set_diagnostic_sink(move |d| sink.borrow_mut().push(d.severity));

        dispatcher.key_event(keys::KEY_SPACE, Action::Press);
        dispatcher.tick();

        assert_eq!(*severities.borrow(), vec![Severity::Error]);
        assert_eq!(signal_names(&log), vec!["airborne"]);
    }

    #[test]
    fn test_unbound_control_dispatches_after_binding() {
        let keyboard = shared(Control::keyboard());
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_keyboard(Some(Rc::clone(&keyboard)));
        let log = record(&mut dispatcher, &["crouch"]);

        dispatcher.key_event(keys::KEY_C, Action::Press);
        dispatcher.tick();
        assert!(log.borrow().is_empty());

        let mapping = shared(Mapping::new());
        mapping
            .borrow_mut()
            .on(Event::ButtonDown, keys::KEY_C, "crouch")
            .unwrap();
        keyboard.borrow_mut().bind(mapping);

        dispatcher.tick();
        assert_eq!(signal_names(&log), vec!["crouch"]);
    }

    // ==================== Mouse Motion Tests ====================

    #[test]
    fn test_cursor_and_wheel_reach_motion_handler() {
        let mapping = shared(Mapping::new());
        let motions = motion_log(&mapping);
        let mouse = shared(Control::mouse());
        mouse.borrow_mut().bind(mapping);

        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_mouse(Some(mouse));

        dispatcher.cursor_moved(2.0, 2.0);
        dispatcher.cursor_moved(5.0, 5.0);
        dispatcher.scrolled(0.0, -1.0);

        let motions = motions.borrow();
        assert_eq!(motions.len(), 3);

        assert_eq!(motions[0].surface, MotionSurface::MouseCursor);
        assert!(motions[0].relative.is_none());

        assert_eq!(motions[1].position, Some(Position::new(5.0, 5.0)));
        assert_eq!(motions[1].relative, Some(Position::new(3.0, 3.0)));

        assert_eq!(motions[2].surface, MotionSurface::MouseWheel);
        assert!(motions[2].position.is_none());
        assert_eq!(motions[2].relative, Some(Position::new(0.0, -1.0)));
    }

    #[test]
    fn test_motion_bypasses_signal_table() {
        let mouse = shared(Control::mouse());
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_mouse(Some(Rc::clone(&mouse)));

        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        dispatcher.set_diagnostic_sink(move |_| *sink.borrow_mut() += 1);

        dispatcher.cursor_moved(1.0, 1.0);

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(
            mouse.borrow().last_position(MotionSurface::MouseCursor),
            Some(Position::new(1.0, 1.0))
        );
    }

    // ==================== Device Tests ====================

    fn joystick(id: u32, bindings: &[(Event, Input, &str)]) -> (Shared<Device>, Shared<Mapping>) {
        let mapping = shared(Mapping::new());
        for (event, input, signal) in bindings {
            mapping.borrow_mut().on(*event, *input, *signal).unwrap();
        }
        let mut device = Device::new(DeviceId(id));
        device.bind(Rc::clone(&mapping));
        (shared(device), mapping)
    }

    #[test]
    fn test_device_event_dispatches_per_device() {
        let (first, first_mapping) = joystick(0, &[]);
        first_mapping
            .borrow_mut()
            .on_device(DeviceEvent::Connected, "pad_connected");
        first.borrow_mut().set_user_id(Some(1));

        let (second, second_mapping) = joystick(1, &[]);
        second_mapping
            .borrow_mut()
            .on_device(DeviceEvent::Disconnected, "pad_lost");

        let unbound = shared(Device::new(DeviceId(2)));

        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_devices(vec![first, second, unbound]);
        let log = record(&mut dispatcher, &["pad_connected", "pad_lost"]);

        dispatcher.device_event(DeviceEvent::Connected);

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].signal, "pad_connected");
        let origin = log[0].device.as_ref().unwrap();
        assert_eq!(origin.id, DeviceId(0));
        assert_eq!(origin.user_id, Some(1));
    }

    #[test]
    fn test_tick_polls_joystick_buttons_and_axes() {
        let (device, mapping) = joystick(
            3,
            &[
                (Event::ButtonPress, keys::joystick_button(1), "fire"),
                (Event::ButtonDown, keys::joystick_button(1), "firing"),
            ],
        );
        let motions = motion_log(&mapping);

        let mut backend = MockDeviceBackend::new();
        backend.expect_is_present().with(mockall::predicate::eq(DeviceId(3))).returning(|_| true);
        backend.expect_buttons().returning(|_| vec![false, true]);
        backend.expect_axes().returning(|_| Some(vec![0.5, -0.5, 0.25, 1.0]));

        let mut dispatcher = Dispatcher::new();
        dispatcher.set_backend(backend);
        dispatcher.bind_devices(vec![Rc::clone(&device)]);
        let log = record(&mut dispatcher, &["fire", "firing"]);

        dispatcher.tick();
        assert_eq!(signal_names(&log), vec!["fire", "firing"]);
        assert!(log.borrow().iter().all(|s| s.device.as_ref().map(|d| d.id) == Some(DeviceId(3))));

        dispatcher.tick();
        assert_eq!(signal_names(&log), vec!["fire", "firing", "firing"]);

        let motions = motions.borrow();
        assert_eq!(motions.len(), 4);
        assert_eq!(motions[0].surface, MotionSurface::JoystickAxes);
        assert_eq!(motions[0].position, Some(Position::new(0.5, -0.5)));
        assert_eq!(motions[1].surface, MotionSurface::JoystickRotation);
        assert_eq!(motions[1].position, Some(Position::new(0.25, 1.0)));
        assert_eq!(motions[2].relative, Some(Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_tick_dispatches_joystick_release_edge() {
        let (device, _mapping) =
            joystick(0, &[(Event::ButtonRelease, keys::joystick_button(0), "reload")]);

        let mut polls = 0;
        let mut backend = MockDeviceBackend::new();
        backend.expect_is_present().returning(|_| true);
        backend.expect_buttons().returning(move |_| {
            polls += 1;
            vec![polls == 1]
        });
        backend.expect_axes().returning(|_| None);

        let mut dispatcher = Dispatcher::new();
        dispatcher.set_backend(backend);
        dispatcher.bind_devices(vec![Rc::clone(&device)]);
        let log = record(&mut dispatcher, &["reload"]);

        dispatcher.tick();
        assert!(log.borrow().is_empty());
        assert!(device.borrow().control().is_held(Input(0)));

        dispatcher.tick();
        assert_eq!(signal_names(&log), vec!["reload"]);
        assert!(device.borrow().control().held().is_empty());
    }

    #[test]
    fn test_tick_releases_buttons_beyond_reported_count() {
        let (device, _mapping) =
            joystick(0, &[(Event::ButtonRelease, keys::joystick_button(2), "drop")]);

        let mut polls = 0;
        let mut backend = MockDeviceBackend::new();
        backend.expect_is_present().returning(|_| true);
        backend.expect_buttons().returning(move |_| {
            polls += 1;
            if polls == 1 {
                vec![false, false, true]
            } else {
                vec![false]
            }
        });
        backend.expect_axes().returning(|_| None);

        let mut dispatcher = Dispatcher::new();
        dispatcher.set_backend(backend);
        dispatcher.bind_devices(vec![device]);
        let log = record(&mut dispatcher, &["drop"]);

        dispatcher.tick();
        dispatcher.tick();
        assert_eq!(signal_names(&log), vec!["drop"]);
    }

    #[test]
    fn test_tick_skips_disconnected_device() {
        let (device, _mapping) =
            joystick(0, &[(Event::ButtonDown, keys::joystick_button(0), "fire")]);

        let mut backend = MockDeviceBackend::new();
        backend.expect_is_present().returning(|_| false);
        backend.expect_buttons().never();
        backend.expect_axes().never();

        let mut dispatcher = Dispatcher::new();
        dispatcher.set_backend(backend);
        dispatcher.bind_devices(vec![device]);
        dispatcher.tick();
    }

    #[test]
    fn test_tick_skips_unbound_device() {
        let mut backend = MockDeviceBackend::new();
        backend.expect_is_present().never();
        backend.expect_buttons().never();

        let mut dispatcher = Dispatcher::new();
        dispatcher.set_backend(backend);
        dispatcher.bind_devices(vec![shared(Device::new(DeviceId(0)))]);
        dispatcher.tick();
    }

    #[test]
    fn test_tick_without_backend_skips_devices() {
        let (device, _mapping) =
            joystick(0, &[(Event::ButtonDown, keys::joystick_button(0), "fire")]);
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_devices(vec![device]);
        let log = record(&mut dispatcher, &["fire"]);

        dispatcher.tick();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_tick_with_partial_axes() {
        let (device, mapping) = joystick(0, &[]);
        let motions = motion_log(&mapping);

        let mut backend = MockDeviceBackend::new();
        backend.expect_is_present().returning(|_| true);
        backend.expect_buttons().returning(|_| Vec::new());
        backend.expect_axes().returning(|_| Some(vec![0.5]));

        let mut dispatcher = Dispatcher::new();
        dispatcher.set_backend(backend);
        dispatcher.bind_devices(vec![device]);
        dispatcher.tick();

        let motions = motions.borrow();
        assert_eq!(motions.len(), 1);
        assert_eq!(motions[0].surface, MotionSurface::JoystickAxes);
        assert_eq!(motions[0].position, Some(Position::new(0.5, 0.0)));
    }

    #[test]
    fn test_bind_devices_empty_unbinds() {
        let (device, _mapping) = joystick(0, &[]);
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind_devices(vec![device]);
        assert_eq!(dispatcher.devices().len(), 1);

        dispatcher.bind_devices(Vec::new());
        assert!(dispatcher.devices().is_empty());
    }
}
