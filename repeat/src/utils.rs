use std::borrow::Cow;

/// Helpers for fitting text into a fixed number of characters.
pub trait Truncatable {
    /// Cuts the text to at most `len` characters, appending `suffix` if anything was cut.
    fn truncate_with_suffix(&self, len: usize, suffix: &str) -> Cow<'_, str>;
}

impl Truncatable for str {
    fn truncate_with_suffix(&self, len: usize, suffix: &str) -> Cow<'_, str> {
        match self.char_indices().nth(len) {
            Some((byte_idx, _)) => Cow::Owned(format!("{}{suffix}", &self[..byte_idx])),
            None => Cow::Borrowed(self),
        }
    }
}

impl Truncatable for String {
    fn truncate_with_suffix(&self, len: usize, suffix: &str) -> Cow<'_, str> {
        self.as_str().truncate_with_suffix(len, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_borrowed() {
        let line = "W6CX 147.06+ T100.0 1.2mi NE";

        assert!(matches!(line.truncate_with_suffix(67, ""), Cow::Borrowed(_)));
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let line = "ÆØÅ repeater list".to_string();

        assert_eq!(line.truncate_with_suffix(3, ""), "ÆØÅ");
        assert_eq!(line.truncate_with_suffix(8, "~"), "ÆØÅ repe~");
    }
}
