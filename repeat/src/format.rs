//! Turns repeater records into short APRS message replies.

use repeat_plugin::Reply;

use crate::repeater::{Loose, RepeaterRecord};

/// Reply sent when the repeater database returned nothing.
pub const NONE_FOUND: &str = "None Found";

const METERS_PER_MILE: f64 = 1609.0;
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Countries whose users expect distances in miles.
const IMPERIAL_COUNTRIES: &[&str] = &["united states", "united kingdom"];

/// Returns `+` for a positive offset, `-` for everything else including non-numeric offsets.
#[must_use]
pub fn offset_sign(offset: &Loose) -> char {
    match offset.as_f64() {
        Some(offset) if offset > 0.0 => '+',
        _ => '-',
    }
}

/// Formats a distance in meters as miles or kilometers depending on the country.
///
/// Non-numeric distances are returned as-is without a unit.
#[must_use]
pub fn format_distance(distance: &Loose, country: &Loose) -> String {
    let Some(meters) = distance.as_f64() else {
        return distance.to_string();
    };

    let country = country.as_str().to_lowercase();

    if IMPERIAL_COUNTRIES.contains(&country.as_str()) {
        format!("{:.1}mi", meters / METERS_PER_MILE)
    } else {
        format!("{:.1}km", meters / METERS_PER_KILOMETER)
    }
}

/// Formats a CTCSS tone to one decimal, passing non-numeric values through.
#[must_use]
pub fn format_tone(tone: &Loose) -> String {
    tone.as_f64()
        .map_or_else(|| tone.to_string(), |tone| format!("{tone:.1}"))
}

/// Formats the offset the way the APRS object `r` extension expects: two decimals without the
/// decimal point, e.g. `0.6` becomes `060`.
#[must_use]
pub fn offset_digits(offset: &Loose) -> String {
    match offset.as_f64() {
        Some(offset) => format!("{offset:.2}").replace('.', ""),
        None => offset.to_string(),
    }
}

/// Formats a single repeater as `<callsign> <frequency><sign> T<tone> <distance> <direction>`.
#[must_use]
pub fn format_entry(record: &RepeaterRecord) -> String {
    format!(
        "{} {}{} T{} {} {}",
        record.callsign,
        record.frequency,
        offset_sign(&record.offset),
        format_tone(&record.uplink_offset),
        format_distance(&record.distance, &record.country),
        record.direction,
    )
}

/// Formats every record as its own line, in order.
#[must_use]
pub fn format_list(records: &[RepeaterRecord]) -> Reply {
    if records.is_empty() {
        return Reply::from(NONE_FOUND);
    }

    Reply::Lines(records.iter().map(format_entry).collect())
}

/// Encodes the first record as an APRS item-in-message object, see
/// <http://www.aprs.org/aprs12/item-in-msg.txt>.
#[must_use]
pub fn format_object(records: &[RepeaterRecord]) -> Reply {
    let Some(record) = records.first() else {
        return Reply::from(NONE_FOUND);
    };

    Reply::Text(format!(
        "){:<9.9}!{:.2}N/{:.2}Wr{}Mhz T{} {}",
        record.callsign,
        record.lat,
        record.long,
        record.frequency,
        format_tone(&record.uplink_offset),
        offset_digits(&record.offset),
    ))
}
