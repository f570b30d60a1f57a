use crate::workflows::pipeline::{APPLIED_ON_FORMAT, UNKNOWN_APPLIED_ON};
use chrono::{DateTime, NaiveDate};

/// Render an exported applied-on value in the dashboard's `DD-MM-YYYY` form.
///
/// Values already in display form are kept, ISO dates and RFC 3339
/// timestamps are reformatted, blanks become `"N/A"`. Anything else is kept
/// verbatim so the pipeline can count it as malformed.
pub(crate) fn display_applied_on(value: Option<&str>) -> String {
    let Some(trimmed) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return UNKNOWN_APPLIED_ON.to_string();
    };

    if let Some(date) = parse_export_date(trimmed) {
        return date.format(APPLIED_ON_FORMAT).to_string();
    }

    trimmed.to_string()
}

fn parse_export_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, APPLIED_ON_FORMAT) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
