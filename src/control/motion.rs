//! Per-surface motion tracking.
//!
//! Each [`MotionSurface`] keeps its own last sample and last delta. A surface's
//! first sample has no delta; afterwards the delta is the componentwise
//! difference to the previous sample (see [`Position::delta_from`]).
//!
//! The motion event reports the **new** sample as its `position`.

use std::collections::HashMap;

use crate::input::{MotionEvent, MotionSurface, Position};

/// Last sample and last delta per surface.
#[derive(Debug, Clone, Default)]
pub struct MotionState {
    last: HashMap<MotionSurface, Position>,
    relative: HashMap<MotionSurface, Position>,
}

impl MotionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an absolute sample and returns the resulting motion event.
    pub fn track_position(&mut self, position: Position, surface: MotionSurface) -> MotionEvent {
        let relative = self
            .last
            .get(&surface)
            .map(|previous| position.delta_from(previous));

        if let Some(delta) = relative {
            self.relative.insert(surface, delta);
        }
        self.last.insert(surface, position);

        MotionEvent {
            position: Some(position),
            relative,
            surface,
        }
    }

    /// Builds the motion event for a relative-only surface. The last sample is
    /// left alone.
    pub fn track_relative(&mut self, delta: Position, surface: MotionSurface) -> MotionEvent {
        self.relative.insert(surface, delta);

        MotionEvent {
            position: None,
            relative: Some(delta),
            surface,
        }
    }

    #[must_use]
    pub fn last_position(&self, surface: MotionSurface) -> Option<Position> {
        self.last.get(&surface).copied()
    }

    #[must_use]
    pub fn last_relative(&self, surface: MotionSurface) -> Option<Position> {
        self.relative.get(&surface).copied()
    }
}
