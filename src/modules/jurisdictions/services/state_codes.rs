use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::{AppError, Result};

/// FIPS numeric state codes mapped to two-letter US postal abbreviations.
///
/// Keys run "01" through "56" with gaps at the FIPS numbers never assigned
/// to a state (03, 07, 14, 43, 52). Covers the 50 states plus DC. Read-only
/// for the life of the process.
pub static FIPS_TO_POSTAL: &[(&str, &str)] = &[
    ("01", "AL"),
    ("02", "AK"),
    ("04", "AZ"),
    ("05", "AR"),
    ("06", "CA"),
    ("08", "CO"),
    ("09", "CT"),
    ("10", "DE"),
    ("11", "DC"),
    ("12", "FL"),
    ("13", "GA"),
    ("15", "HI"),
    ("16", "ID"),
    ("17", "IL"),
    ("18", "IN"),
    ("19", "IA"),
    ("20", "KS"),
    ("21", "KY"),
    ("22", "LA"),
    ("23", "ME"),
    ("24", "MD"),
    ("25", "MA"),
    ("26", "MI"),
    ("27", "MN"),
    ("28", "MS"),
    ("29", "MO"),
    ("30", "MT"),
    ("31", "NE"),
    ("32", "NV"),
    ("33", "NH"),
    ("34", "NJ"),
    ("35", "NM"),
    ("36", "NY"),
    ("37", "NC"),
    ("38", "ND"),
    ("39", "OH"),
    ("40", "OK"),
    ("41", "OR"),
    ("42", "PA"),
    ("44", "RI"),
    ("45", "SC"),
    ("46", "SD"),
    ("47", "TN"),
    ("48", "TX"),
    ("49", "UT"),
    ("50", "VT"),
    ("51", "VA"),
    ("53", "WA"),
    ("54", "WV"),
    ("55", "WI"),
    ("56", "WY"),
];

static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static str> {
    TABLE.get_or_init(|| FIPS_TO_POSTAL.iter().copied().collect())
}

/// Look up the postal abbreviation for a two-digit FIPS state key.
pub fn postal_for_fips(fips: &str) -> Option<&'static str> {
    table().get(fips).copied()
}

/// Validate the table against the full 50-state + DC set.
///
/// Called once at configuration time; the source scripts carried this table
/// in several incomplete copies, so the single canonical copy is checked.
pub fn verify_table() -> Result<()> {
    if FIPS_TO_POSTAL.len() != 51 {
        return Err(AppError::configuration(format!(
            "FIPS state table must hold 51 entries (50 states + DC), found {}",
            FIPS_TO_POSTAL.len()
        )));
    }

    for (fips, postal) in FIPS_TO_POSTAL {
        if fips.len() != 2 || !fips.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::configuration(format!(
                "FIPS key {:?} is not two digits",
                fips
            )));
        }
        if postal.len() != 2 || !postal.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(AppError::configuration(format!(
                "postal abbreviation {:?} is not two uppercase letters",
                postal
            )));
        }
    }

    if table().len() != FIPS_TO_POSTAL.len() {
        return Err(AppError::configuration(
            "FIPS state table contains duplicate keys",
        ));
    }

    Ok(())
}
