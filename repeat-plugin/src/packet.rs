/// An incoming text message addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Callsign of the station that sent the message.
    pub from: String,
    /// The message body.
    pub message_text: String,
}

impl Packet {
    /// Creates a new packet from `from` carrying `message_text`.
    pub fn new(from: impl Into<String>, message_text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            message_text: message_text.into(),
        }
    }
}

/// What a plugin wants sent back to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single message.
    Text(String),
    /// One message per line, in order.
    Lines(Vec<String>),
}

impl Reply {
    /// Flattens the reply into the individual messages to send.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Reply::Text(text) => vec![text],
            Reply::Lines(lines) => lines,
        }
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl From<Vec<String>> for Reply {
    fn from(lines: Vec<String>) -> Self {
        Reply::Lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_lines_flattens_every_variant() {
        assert!(Reply::from(vec![]).into_lines().is_empty());
        assert_eq!(Reply::from("hi").into_lines(), vec!["hi"]);
        assert_eq!(
            Reply::from(vec!["a".to_string(), "b".to_string()]).into_lines(),
            vec!["a", "b"]
        );
    }
}
