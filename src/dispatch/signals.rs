//! Signal → handler table.

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::control::DeviceRef;
use crate::diagnostics::{report, DiagnosticKind, DiagnosticSink, Policy};

/// A signal delivered to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedSignal {
    pub signal: String,
    /// Originating device, for device events and joystick buttons.
    pub device: Option<DeviceRef>,
}

/// Callback registered for a signal name.
pub type SignalHandler = Box<dyn FnMut(&ReceivedSignal)>;

/// Handlers keyed by signal name, plus unhandled-signal reporting.
pub(crate) struct SignalTable {
    handlers: HashMap<String, SignalHandler>,
    unhandled: Policy,
    sink: Option<DiagnosticSink>,
}

impl fmt::Debug for SignalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("SignalTable")
            .field("handlers", &names)
            .field("unhandled", &self.unhandled)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl SignalTable {
    /// Unhandled signals never stop dispatch, so [`Policy::Fatal`] is
    /// reported as [`Policy::Error`].
    pub(crate) fn new(unhandled: Policy) -> Self {
        let unhandled = match unhandled {
            Policy::Fatal => Policy::Error,
            policy => policy,
        };
        Self {
            handlers: HashMap::new(),
            unhandled,
            sink: None,
        }
    }

    pub(crate) fn listen(&mut self, signal: String, handler: SignalHandler) {
        if self.handlers.insert(signal.clone(), handler).is_some() {
            debug!("Replaced handler for '{}'", signal);
        }
    }

    pub(crate) fn forget(&mut self, signal: &str) -> bool {
        self.handlers.remove(signal).is_some()
    }

    pub(crate) fn contains(&self, signal: &str) -> bool {
        self.handlers.contains_key(signal)
    }

    pub(crate) fn set_sink(&mut self, sink: Option<DiagnosticSink>) {
        self.sink = sink;
    }

    /// Invokes the handler for `signal` once. Returns `false` and reports an
    /// unhandled-signal diagnostic when no handler is registered.
    pub(crate) fn dispatch(&mut self, signal: &str, device: Option<DeviceRef>) -> bool {
        if let Some(handler) = self.handlers.get_mut(signal) {
            handler(&ReceivedSignal {
                signal: signal.to_string(),
                device,
            });
            return true;
        }

        if let Some(diagnostic) = report(self.unhandled, DiagnosticKind::UnhandledSignal, signal) {
            if let Some(sink) = self.sink.as_mut() {
                sink(&diagnostic);
            }
        }
        false
    }
}
