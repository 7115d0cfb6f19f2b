//! Static catalogs of amateur radio bands and repeater feature filters.

/// A named amateur radio band and its edges, in MHz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPlan {
    /// The name users type, e.g. `2m` or `70cm`.
    pub name: &'static str,
    /// Lower band edge in MHz.
    pub low: f64,
    /// Upper band edge in MHz.
    pub high: f64,
    /// Human readable description.
    pub description: &'static str,
}

/// The band used when a request doesn't name one.
pub const DEFAULT_BAND: &str = "2m";

/// Band plan after <http://www.arrl.org/band-plan>.
pub const BAND_PLAN: &[BandPlan] = &[
    band("160m", 1.8, 2.0, "160 Meters (1.8-2.0 MHz)"),
    band("80m", 3.5, 4.0, "80 Meters (3.5-4.0 MHz)"),
    band("60m", 5.0, 5.9, "60 Meters (5 MHz channels)"),
    band("40m", 7.0, 7.3, "40 Meters (7.0 - 7.3 MHz)"),
    band("30m", 10.1, 10.15, "30 Meters (10.1 - 10.15 MHz)"),
    band("20m", 14.0, 14.35, "20 Meters (14.0 - 14.35 MHz)"),
    band("17m", 18.068, 18.168, "17 Meters (18.068 - 18.168 MHz)"),
    band("15m", 21.0, 21.45, "15 Meters (21.0 - 21.45 MHz)"),
    band("12m", 24.89, 24.99, "12 Meters (24.89 - 24.99 MHz)"),
    band("10m", 28.0, 29.7, "10 Meters (28 - 29.7 MHz)"),
    band("6m", 50.0, 54.0, "6 Meters (50 - 54 MHz)"),
    band("2m", 144.0, 148.0, "2 Meters (144 - 148 MHz)"),
    band("1.25m", 222.0, 225.0, "1.25 Meters (222 - 225 MHz)"),
    band("70cm", 420.0, 450.0, "70 Centimeters (420 - 450 MHz)"),
    band("33cm", 902.0, 928.0, "33 Centimeters (902 - 928 MHz)"),
    band("23cm", 1240.0, 1300.0, "23 Centimeters (1240 - 1300 MHz)"),
    band(
        "13cm",
        2300.0,
        2450.0,
        "13 Centimeters (2300 - 2310 and 2390 - 2450 MHz)",
    ),
    band("9cm", 3300.0, 3500.0, "9 Centimeters (3300 - 3500 MHz)"),
    band("5cm", 5650.0, 5925.0, "5 Centimeters (5650 - 5925 MHz)"),
    band("3cm", 10000.0, 10500.0, "3 Centimeters (10000 - 10500 MHz)"),
];

/// Maps the filter names users type (after the `+`) to repeater database columns.
pub const FILTERS: &[(&str, &str)] = &[
    ("ares", "ares"),
    ("races", "races"),
    ("skywarn", "skywarn"),
    ("allstar", "allstar_node"),
    ("echolink", "echolink_node"),
    ("echo", "echolink_node"),
    ("irlp", "irlp_node"),
    ("wires", "wires_node"),
    ("fm", "fm_analog"),
    ("dmr", "dmr"),
    ("dstar", "dstar"),
];

const fn band(
    name: &'static str,
    low: f64,
    high: f64,
    description: &'static str,
) -> BandPlan {
    BandPlan {
        name,
        low,
        high,
        description,
    }
}

/// Looks up a band by its exact name.
#[must_use]
pub fn find_band(name: &str) -> Option<&'static BandPlan> {
    BAND_PLAN.iter().find(|band| band.name == name)
}

/// Looks up the database column for a lowercase filter alias.
#[must_use]
pub fn find_filter(alias: &str) -> Option<&'static str> {
    FILTERS
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, column)| *column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_names_are_unique() {
        for (i, band) in BAND_PLAN.iter().enumerate() {
            assert!(
                BAND_PLAN[i + 1..].iter().all(|other| other.name != band.name),
                "duplicate band {}",
                band.name
            );
        }
    }

    #[test]
    fn band_edges_are_ordered() {
        for band in BAND_PLAN {
            assert!(band.low < band.high, "{} has inverted edges", band.name);
        }
    }

    #[test]
    fn find_band_is_exact() {
        assert_eq!(find_band("70cm").map(|b| b.low), Some(420.0));
        assert_eq!(find_band("1.25m").map(|b| b.high), Some(225.0));
        assert!(find_band("2M").is_none());
        assert!(find_band("11m").is_none());
    }

    #[test]
    fn filter_aliases_map_to_columns() {
        assert_eq!(find_filter("echo"), Some("echolink_node"));
        assert_eq!(find_filter("echolink"), Some("echolink_node"));
        assert_eq!(find_filter("fm"), Some("fm_analog"));
        assert_eq!(find_filter("p25"), None);
    }
}
