//! Down-state tracking for buttons and keys.

use std::collections::BTreeMap;

use crate::input::{Event, Input, InputEvent};

/// Tracks which inputs are currently held.
///
/// Entries are created on the first press and flipped on release; iteration is
/// in ascending input order.
#[derive(Debug, Clone, Default)]
pub struct ButtonState {
    down: BTreeMap<Input, bool>,
}

impl ButtonState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a transition. `ButtonDown` is never a raw event and is ignored.
    pub fn handle(&mut self, event: &InputEvent) {
        match event.event {
            Event::ButtonPress => {
                self.down.insert(event.input, true);
            }
            Event::ButtonRelease => {
                self.down.insert(event.input, false);
            }
            Event::ButtonDown => {}
        }
    }

    /// Inputs currently held, ascending.
    #[must_use]
    pub fn held(&self) -> Vec<Input> {
        self.down
            .iter()
            .filter(|&(_, &down)| down)
            .map(|(&input, _)| input)
            .collect()
    }

    #[must_use]
    pub fn is_held(&self, input: Input) -> bool {
        self.down.get(&input).copied().unwrap_or(false)
    }
}
