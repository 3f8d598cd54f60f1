//! # Input Codes
//!
//! GLFW-compatible codes for keyboard keys, mouse buttons and joystick buttons.
//!
//! Mouse and joystick codes overlap with each other (both start at `0`); they
//! are only meaningful within the mapping of their own device class.
//!
//! | Range | Class |
//! |-------|-------|
//! | `0..=7` | mouse buttons |
//! | `0..` | joystick buttons (button index) |
//! | `32..=96` | printable keys |
//! | `256..=348` | function, navigation and modifier keys |

use super::Input;

// Special keys
pub const KEY_ESCAPE: Input = Input(256);
pub const KEY_ENTER: Input = Input(257);
pub const KEY_TAB: Input = Input(258);
pub const KEY_BACKSPACE: Input = Input(259);
pub const KEY_INSERT: Input = Input(260);
pub const KEY_DELETE: Input = Input(261);
pub const KEY_CAPS_LOCK: Input = Input(280);
pub const KEY_SCROLL_LOCK: Input = Input(281);
pub const KEY_NUM_LOCK: Input = Input(282);
pub const KEY_PRINT_SCREEN: Input = Input(283);
pub const KEY_PAUSE: Input = Input(284);
pub const KEY_SPACE: Input = Input(32);

// Modifiers
pub const KEY_SHIFT_LEFT: Input = Input(340);
pub const KEY_CTRL_LEFT: Input = Input(341);
pub const KEY_ALT_LEFT: Input = Input(342);
pub const KEY_SHIFT_RIGHT: Input = Input(344);
pub const KEY_CTRL_RIGHT: Input = Input(345);
pub const KEY_ALT_RIGHT: Input = Input(346);

// Arrows and navigation
pub const KEY_RIGHT: Input = Input(262);
pub const KEY_LEFT: Input = Input(263);
pub const KEY_DOWN: Input = Input(264);
pub const KEY_UP: Input = Input(265);
pub const KEY_PAGE_UP: Input = Input(266);
pub const KEY_PAGE_DOWN: Input = Input(267);
pub const KEY_HOME: Input = Input(268);
pub const KEY_END: Input = Input(269);

// Punctuation
pub const KEY_APOSTROPHE: Input = Input(39);
pub const KEY_COMMA: Input = Input(44);
pub const KEY_DASH: Input = Input(45);
pub const KEY_PERIOD: Input = Input(46);
pub const KEY_SLASH: Input = Input(47);
pub const KEY_SEMICOLON: Input = Input(59);
pub const KEY_EQUAL: Input = Input(61);
pub const KEY_BRACKET_LEFT: Input = Input(91);
pub const KEY_BRACKET_RIGHT: Input = Input(93);
pub const KEY_GRAVE_ACCENT: Input = Input(96);

// Letters
pub const KEY_A: Input = Input(65);
pub const KEY_B: Input = Input(66);
pub const KEY_C: Input = Input(67);
pub const KEY_D: Input = Input(68);
pub const KEY_E: Input = Input(69);
pub const KEY_F: Input = Input(70);
pub const KEY_G: Input = Input(71);
pub const KEY_H: Input = Input(72);
pub const KEY_I: Input = Input(73);
pub const KEY_J: Input = Input(74);
pub const KEY_K: Input = Input(75);
pub const KEY_L: Input = Input(76);
pub const KEY_M: Input = Input(77);
pub const KEY_N: Input = Input(78);
pub const KEY_O: Input = Input(79);
pub const KEY_P: Input = Input(80);
pub const KEY_Q: Input = Input(81);
pub const KEY_R: Input = Input(82);
pub const KEY_S: Input = Input(83);
pub const KEY_T: Input = Input(84);
pub const KEY_U: Input = Input(85);
pub const KEY_V: Input = Input(86);
pub const KEY_W: Input = Input(87);
pub const KEY_X: Input = Input(88);
pub const KEY_Y: Input = Input(89);
pub const KEY_Z: Input = Input(90);

// Number row
pub const KEY_0: Input = Input(48);
pub const KEY_1: Input = Input(49);
pub const KEY_2: Input = Input(50);
pub const KEY_3: Input = Input(51);
pub const KEY_4: Input = Input(52);
pub const KEY_5: Input = Input(53);
pub const KEY_6: Input = Input(54);
pub const KEY_7: Input = Input(55);
pub const KEY_8: Input = Input(56);
pub const KEY_9: Input = Input(57);

// Function keys
pub const KEY_F1: Input = Input(290);
pub const KEY_F2: Input = Input(291);
pub const KEY_F3: Input = Input(292);
pub const KEY_F4: Input = Input(293);
pub const KEY_F5: Input = Input(294);
pub const KEY_F6: Input = Input(295);
pub const KEY_F7: Input = Input(296);
pub const KEY_F8: Input = Input(297);
pub const KEY_F9: Input = Input(298);
pub const KEY_F10: Input = Input(299);
pub const KEY_F11: Input = Input(300);
pub const KEY_F12: Input = Input(301);

// Keypad
pub const KEY_NUMPAD_0: Input = Input(320);
pub const KEY_NUMPAD_1: Input = Input(321);
pub const KEY_NUMPAD_2: Input = Input(322);
pub const KEY_NUMPAD_3: Input = Input(323);
pub const KEY_NUMPAD_4: Input = Input(324);
pub const KEY_NUMPAD_5: Input = Input(325);
pub const KEY_NUMPAD_6: Input = Input(326);
pub const KEY_NUMPAD_7: Input = Input(327);
pub const KEY_NUMPAD_8: Input = Input(328);
pub const KEY_NUMPAD_9: Input = Input(329);
pub const KEY_NUMPAD_DECIMAL: Input = Input(330);
pub const KEY_NUMPAD_DIVIDE: Input = Input(331);
pub const KEY_NUMPAD_MULTIPLY: Input = Input(332);
pub const KEY_NUMPAD_SUBTRACT: Input = Input(333);
pub const KEY_NUMPAD_ADD: Input = Input(334);
pub const KEY_NUMPAD_ENTER: Input = Input(335);
pub const KEY_NUMPAD_EQUAL: Input = Input(336);

// Mouse buttons. GLFW's "left" and "right" are really primary and secondary.
pub const MOUSE_PRIMARY: Input = Input(0);
pub const MOUSE_SECONDARY: Input = Input(1);
pub const MOUSE_MIDDLE: Input = Input(2);
pub const MOUSE_BUTTON_4: Input = Input(3);
pub const MOUSE_BUTTON_5: Input = Input(4);
pub const MOUSE_BUTTON_6: Input = Input(5);
pub const MOUSE_BUTTON_7: Input = Input(6);
pub const MOUSE_BUTTON_8: Input = Input(7);

/// Code of the joystick button at `index` in the backend's button array.
///
/// # Examples
///
/// ```
/// use input_signals::input::{keys, Input};
///
/// assert_eq!(keys::joystick_button(0), Input(0));
/// assert_eq!(keys::joystick_button(11), Input(11));
/// ```
#[must_use]
pub const fn joystick_button(index: u16) -> Input {
    Input(index as i32)
}
