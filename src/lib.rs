//! # Input Signals Library
//!
//! Map keyboard, mouse and joystick input to named signals and dispatch them
//! to handlers.
//!
//! The host pushes raw key, button, cursor and scroll events into a
//! [`Dispatcher`](dispatch::Dispatcher) and calls
//! [`tick`](dispatch::Dispatcher::tick) once per frame. Controls track which
//! inputs are held, [`Mapping`](mapping::Mapping)s turn them into signal names,
//! and the dispatcher invokes whatever handler listens for each signal.

pub mod backend;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod logging;
pub mod mapping;
pub mod signal;
