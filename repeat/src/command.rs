//! User command matching

use regex::Regex;

/// Pattern-based command matcher.
///
/// APRS users type terse commands, so a plugin usually matches on the first letter of the
/// message rather than on a whole word.
///
/// # Example
///
/// ```rust
/// use repeat::command::Command;
/// let command = Command::new("^[nN]");
/// assert!(command.matches("n 3 70cm"));
/// assert!(command.matches("Nearest"));
/// assert!(!command.matches("o 70cm"));
/// ```
#[derive(Debug, Clone)]
pub struct Command {
    /// The pattern to match against.
    pattern: Regex,
}

impl Command {
    /// Creates a new command matcher from a regular expression.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    #[must_use]
    pub fn new(pattern: &str) -> Command {
        let pattern = Regex::new(pattern).expect("invalid command pattern");

        Command { pattern }
    }

    /// Returns true if the message text matches the command pattern.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}
