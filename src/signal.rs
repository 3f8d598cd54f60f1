//! Signal name validation.
//!
//! Signal names are lowercase words joined by single underscores, i.e. they
//! match `^[a-z]+(_[a-z]+)*$`.

/// Returns `true` if `name` is a valid signal name.
///
/// # Examples
///
/// ```
/// use input_signals::signal::is_valid_signal_name;
///
/// assert!(is_valid_signal_name("move_left"));
/// assert!(!is_valid_signal_name("move-left"));
/// ```
#[must_use]
pub fn is_valid_signal_name(name: &str) -> bool {
    // Splitting on '_' yields an empty word for a leading, trailing or doubled
    // underscore, and for the empty string.
    name.split('_')
        .all(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
}
