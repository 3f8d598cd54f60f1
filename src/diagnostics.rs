//! # Diagnostics Module
//!
//! Severity-tagged diagnostics for conditions that are worth reporting but
//! never abort processing on their own.
//!
//! Each condition is routed through a [`Policy`] which decides whether it is
//! dropped, logged through `tracing` as a warning or an error, or escalated to
//! the caller as fatal.
//!
//! | Kind | Raised by | Can be fatal |
//! |------|-----------|--------------|
//! | [`DiagnosticKind::InvalidSignalName`] | [`Mapping::on`](crate::mapping::Mapping::on) | yes |
//! | [`DiagnosticKind::UnhandledSignal`] | [`Dispatcher`](crate::dispatch::Dispatcher) | no |

use serde::Deserialize;
use std::fmt;
use tracing::{error, warn};

/// How a diagnostic is delivered.
///
/// Deserialized from lowercase strings (`"silent"`, `"warn"`, `"error"`,
/// `"fatal"`) in the `[diagnostics]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Drop the diagnostic.
    Silent,
    /// Log through `tracing::warn!`.
    Warn,
    /// Log through `tracing::error!`.
    Error,
    /// Log through `tracing::error!` and hand the failure back to the caller.
    #[default]
    Fatal,
}

/// Severity attached to a delivered diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

/// Condition that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A signal name failed validation at registration time.
    InvalidSignalName,
    /// A resolved signal had no handler registered.
    UnhandledSignal,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::InvalidSignalName => write!(f, "invalid signal name"),
            DiagnosticKind::UnhandledSignal => write!(f, "unhandled signal"),
        }
    }
}

/// A delivered diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// The signal name the diagnostic is about.
    pub signal: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.signal)
    }
}

/// Callback receiving every delivered diagnostic.
pub type DiagnosticSink = Box<dyn FnMut(&Diagnostic)>;

/// Deliver a diagnostic according to `policy`.
///
/// Returns the diagnostic that was logged, or `None` when the policy is
/// [`Policy::Silent`]. Callers decide what a [`Severity::Fatal`] result means
/// for them.
///
/// # Examples
///
/// ```
/// use input_signals::diagnostics::{report, DiagnosticKind, Policy, Severity};
///
/// let diagnostic = report(Policy::Warn, DiagnosticKind::UnhandledSignal, "jump").unwrap();
/// assert_eq!(diagnostic.severity, Severity::Warning);
///
/// assert!(report(Policy::Silent, DiagnosticKind::UnhandledSignal, "jump").is_none());
/// ```
pub fn report(policy: Policy, kind: DiagnosticKind, signal: &str) -> Option<Diagnostic> {
    let severity = match policy {
        Policy::Silent => return None,
        Policy::Warn => Severity::Warning,
        Policy::Error => Severity::Error,
        Policy::Fatal => Severity::Fatal,
    };

    match severity {
        Severity::Warning => warn!("{}: {}", kind, signal),
        Severity::Error | Severity::Fatal => error!("{}: {}", kind, signal),
    }

    Some(Diagnostic {
        kind,
        severity,
        signal: signal.to_string(),
    })
}
