//! Trait abstraction for per-tick device queries to enable testing

use crate::input::DeviceId;

/// Device queries the dispatcher makes while polling multi-instance devices.
///
/// Keyboard and mouse transitions are pushed into the
/// [`Dispatcher`](crate::dispatch::Dispatcher) by the host; joysticks are
/// pulled through this trait once per tick.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceBackend {
    /// Whether a device is attached in slot `id`.
    fn is_present(&self, id: DeviceId) -> bool;

    /// Held state of every button, indexed by button number.
    fn buttons(&self, id: DeviceId) -> Vec<bool>;

    /// Current axis values, or `None` if the device reports no axes.
    fn axes(&self, id: DeviceId) -> Option<Vec<f32>>;

    /// Human-readable device name.
    fn name(&self, id: DeviceId) -> Option<String>;
}
