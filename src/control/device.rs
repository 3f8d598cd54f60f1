//! Multi-instance devices (joysticks, gamepads).
//!
//! A [`Device`] pairs a motion [`Control`] with the backend's device id. The
//! device name is captured when the device is opened; backends cannot report it
//! once the device is gone.

use tracing::debug;

use super::{Control, Shared};
use crate::backend::DeviceBackend;
use crate::input::DeviceId;
use crate::mapping::Mapping;

/// Identity of the device a signal originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRef {
    pub id: DeviceId,
    pub name: Option<String>,
    /// Host-assigned player/user number.
    pub user_id: Option<u32>,
}

/// A control tied to one backend device slot.
#[derive(Debug, Clone)]
pub struct Device {
    id: DeviceId,
    name: Option<String>,
    user_id: Option<u32>,
    control: Control,
}

impl Device {
    /// Creates a device without asking the backend for its name.
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            name: None,
            user_id: None,
            control: Control::motion(),
        }
    }

    /// Creates a device and captures its name from `backend`.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_signals::backend::DeviceBackend;
    /// use input_signals::control::Device;
    /// use input_signals::input::DeviceId;
    ///
    /// struct Pad;
    ///
    /// impl DeviceBackend for Pad {
    ///     fn is_present(&self, _: DeviceId) -> bool { true }
    ///     fn buttons(&self, _: DeviceId) -> Vec<bool> { Vec::new() }
    ///     fn axes(&self, _: DeviceId) -> Option<Vec<f32>> { None }
    ///     fn name(&self, _: DeviceId) -> Option<String> { Some("Wireless Controller".into()) }
    /// }
    ///
    /// let device = Device::open(DeviceId(0), &Pad);
    /// assert_eq!(device.name(), Some("Wireless Controller"));
    /// ```
    #[must_use]
    pub fn open(id: DeviceId, backend: &dyn DeviceBackend) -> Self {
        let name = backend.name(id);
        debug!("Opened device {} ({})", id, name.as_deref().unwrap_or("unnamed"));
        Self {
            name,
            ..Self::new(id)
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Name captured at creation.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<u32> {
        self.user_id
    }

    pub fn set_user_id(&mut self, user_id: Option<u32>) {
        self.user_id = user_id;
    }

    /// Binds the device's control to `mapping`.
    pub fn bind(&mut self, mapping: Shared<Mapping>) {
        self.control.bind(mapping);
    }

    #[must_use]
    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// Identity carried by signals from this device.
    #[must_use]
    pub fn device_ref(&self) -> DeviceRef {
        DeviceRef {
            id: self.id,
            name: self.name.clone(),
            user_id: self.user_id,
        }
    }
}
