//! Parsing of `n [count] [band] [+filter]...` requests.

use thiserror::Error;
use tracing::{debug, warn};

use crate::band::{self, DEFAULT_BAND};

/// Reply sent when a request contains a parameter we don't understand.
pub const USAGE: &str = "Usage: n [num] [band] [+filter]";

/// A nearest-repeater request as understood from the user's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Number of repeaters to return.
    pub count: u64,
    /// Name of the band to search in.
    pub band: &'static str,
    /// Database columns the repeaters must have set, in the order they were given.
    pub filters: Vec<&'static str>,
}

impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            count: 1,
            band: DEFAULT_BAND,
            filters: vec![],
        }
    }
}

impl ParsedRequest {
    /// Returns the filters as the comma separated list the repeater database expects, or `None`
    /// when no filters were requested.
    #[must_use]
    pub fn filters_param(&self) -> Option<String> {
        (!self.filters.is_empty()).then(|| self.filters.join(","))
    }
}

/// The request contained a parameter that is neither a count, a band nor a filter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized request parameter `{token}`")]
pub struct UsageError {
    /// The offending parameter.
    pub token: String,
}

/// What a single request parameter turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Count(u64),
    Band(&'static str),
    UnknownBand(&'a str),
    Filter(&'static str),
    UnknownFilter(&'a str),
    Invalid(&'a str),
}

/// Parses an optionally signed decimal integer of any length.
///
/// Negative numbers come back as `0`, numbers beyond `u64::MAX` saturate.
fn parse_count(part: &str) -> Option<u64> {
    let (negative, digits) = match part.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, part.strip_prefix('+').unwrap_or(part)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if negative {
        Some(0)
    } else {
        Some(digits.parse().unwrap_or(u64::MAX))
    }
}

impl<'a> Token<'a> {
    fn classify(part: &'a str) -> Token<'a> {
        if let Some(count) = parse_count(part) {
            Token::Count(count)
        } else if part.ends_with('m') {
            match band::find_band(part) {
                Some(band) => Token::Band(band.name),
                None => Token::UnknownBand(part),
            }
        } else if let Some(alias) = part.strip_prefix('+') {
            match band::find_filter(&alias.to_lowercase()) {
                Some(column) => Token::Filter(column),
                None => Token::UnknownFilter(alias),
            }
        } else {
            Token::Invalid(part)
        }
    }
}

/// Parses the message text of a request. The first word is the command itself and is skipped.
///
/// # Errors
///
/// Returns a [`UsageError`] for the first parameter that can't be classified. Unknown bands and
/// unknown filters are not errors; they are ignored.
pub fn parse(message_text: &str) -> Result<ParsedRequest, UsageError> {
    parse_args(message_text.split_whitespace().skip(1))
}

/// Parses request parameters that have already been split into words.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<ParsedRequest, UsageError> {
    let mut request = ParsedRequest::default();

    for part in args {
        debug!(%part, "classifying request parameter");

        match Token::classify(part) {
            Token::Count(count) => request.count = count.max(1),
            Token::Band(band) => request.band = band,
            Token::UnknownBand(band) => {
                warn!(%band, "user tried to use an invalid frequency band");
            }
            Token::Filter(column) => {
                if !request.filters.contains(&column) {
                    request.filters.push(column);
                }
            }
            Token::UnknownFilter(filter) => {
                debug!(%filter, "ignoring unknown filter");
            }
            Token::Invalid(token) => {
                return Err(UsageError {
                    token: token.to_string(),
                });
            }
        }
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_command_uses_defaults() {
        let request = parse("n").unwrap();

        assert_eq!(
            request,
            ParsedRequest {
                count: 1,
                band: "2m",
                filters: vec![]
            }
        );
    }

    #[test]
    fn parses_count_band_and_filter() {
        let request = parse("n 3 70cm +echo").unwrap();

        assert_eq!(request.count, 3);
        assert_eq!(request.band, "70cm");
        assert_eq!(request.filters, vec!["echolink_node"]);
    }

    #[test]
    fn count_is_taken_verbatim() {
        for count in [1, 2, 5, 10, 25, 4096] {
            let request = parse(&format!("n {count}")).unwrap();

            assert_eq!(request.count, count);
        }
    }

    #[test]
    fn non_positive_count_falls_back_to_default() {
        assert_eq!(parse("n 0").unwrap().count, 1);
        assert_eq!(parse("n -4").unwrap().count, 1);
        assert_eq!(parse("n -99999999999999999999").unwrap().count, 1);
    }

    #[test]
    fn large_counts_are_kept() {
        assert_eq!(parse("n 5000000000").unwrap().count, 5_000_000_000);
        assert_eq!(parse("n 18446744073709551615").unwrap().count, u64::MAX);
    }

    #[test]
    fn count_beyond_u64_saturates() {
        assert_eq!(parse("n 99999999999999999999").unwrap().count, u64::MAX);
    }

    #[test]
    fn later_parameters_override_earlier_ones() {
        let request = parse("n 2 6m 5 70cm").unwrap();

        assert_eq!(request.count, 5);
        assert_eq!(request.band, "70cm");
    }

    #[test]
    fn unknown_band_is_ignored() {
        let request = parse("n 2 11m").unwrap();

        assert_eq!(request.count, 2);
        assert_eq!(request.band, "2m");
    }

    #[test]
    fn filters_are_case_insensitive_and_deduplicated() {
        let request = parse("N +ECHO +echolink +irlp +p25").unwrap();

        assert_eq!(request.filters, vec!["echolink_node", "irlp_node"]);
        assert_eq!(
            request.filters_param().as_deref(),
            Some("echolink_node,irlp_node")
        );
    }

    #[test]
    fn signed_number_is_a_count_not_a_filter() {
        assert_eq!(parse("n +3").unwrap().count, 3);
    }

    #[test]
    fn unrecognized_parameter_aborts() {
        let err = parse("n 3 please +echo").unwrap_err();

        assert_eq!(err.token, "please");
    }

    #[test]
    fn no_filters_yields_no_param() {
        assert_eq!(ParsedRequest::default().filters_param(), None);
    }

    #[test]
    fn classify_orders_checks() {
        assert_eq!(Token::classify("12"), Token::Count(12));
        assert_eq!(Token::classify("-12"), Token::Count(0));
        assert_eq!(Token::classify("+"), Token::UnknownFilter(""));
        assert_eq!(Token::classify("1e3"), Token::Invalid("1e3"));
        assert_eq!(Token::classify("2m"), Token::Band("2m"));
        assert_eq!(Token::classify("mm"), Token::UnknownBand("mm"));
        assert_eq!(Token::classify("+dmr"), Token::Filter("dmr"));
        assert_eq!(Token::classify("+x"), Token::UnknownFilter("x"));
        assert_eq!(Token::classify("hello"), Token::Invalid("hello"));
    }
}
