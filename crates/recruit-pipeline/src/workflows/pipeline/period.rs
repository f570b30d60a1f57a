use super::domain::UNKNOWN_APPLIED_ON;
use chrono::{Datelike, Month, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Display format used for applied dates across the dashboard.
pub const APPLIED_ON_FORMAT: &str = "%d-%m-%Y";

const MONTH_NAMES: [(&str, Month); 12] = [
    ("January", Month::January),
    ("February", Month::February),
    ("March", Month::March),
    ("April", Month::April),
    ("May", Month::May),
    ("June", Month::June),
    ("July", Month::July),
    ("August", Month::August),
    ("September", Month::September),
    ("October", Month::October),
    ("November", Month::November),
    ("December", Month::December),
];

/// Error raised when a caller builds a period window from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("unknown month name '{0}'; expected an English month such as 'January'")]
    UnknownMonth(String),
    #[error("unknown quarter '{0}'; expected one of Q1, Q2, Q3, Q4")]
    UnknownQuarter(String),
    #[error("invalid date '{0}'; expected DD-MM-YYYY")]
    InvalidDate(String),
    #[error("unknown period kind '{0}'; expected daily, monthly, or quarterly")]
    UnknownKind(String),
}

/// Calendar quarter used by the quarterly window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const fn months(self) -> [u32; 3] {
        match self {
            Self::Q1 => [1, 2, 3],
            Self::Q2 => [4, 5, 6],
            Self::Q3 => [7, 8, 9],
            Self::Q4 => [10, 11, 12],
        }
    }

    pub fn contains(self, month: u32) -> bool {
        self.months().contains(&month)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl FromStr for Quarter {
    type Err = PeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            _ => Err(PeriodError::UnknownQuarter(value.to_string())),
        }
    }
}

/// Resolve an English month name to its calendar month.
pub fn month_from_name(name: &str) -> Result<Month, PeriodError> {
    let trimmed = name.trim();
    MONTH_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(trimmed))
        .map(|(_, month)| *month)
        .ok_or_else(|| PeriodError::UnknownMonth(name.to_string()))
}

/// Window granularity offered by the dashboard filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Daily,
    Monthly,
    Quarterly,
}

impl FromStr for PeriodKind {
    type Err = PeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "monthly" | "month" => Ok(Self::Monthly),
            "quarterly" | "quarter" => Ok(Self::Quarterly),
            _ => Err(PeriodError::UnknownKind(value.to_string())),
        }
    }
}

/// Caller-selected time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSpec {
    Daily { date: NaiveDate },
    Monthly { month: Month, year: i32 },
    Quarterly { quarter: Quarter, year: i32 },
}

impl PeriodSpec {
    pub fn daily(date: NaiveDate) -> Self {
        Self::Daily { date }
    }

    /// Build a daily window from a `DD-MM-YYYY` string.
    pub fn daily_from_display(value: &str) -> Result<Self, PeriodError> {
        NaiveDate::parse_from_str(value.trim(), APPLIED_ON_FORMAT)
            .map(Self::daily)
            .map_err(|_| PeriodError::InvalidDate(value.to_string()))
    }

    pub fn monthly(month_name: &str, year: i32) -> Result<Self, PeriodError> {
        let month = month_from_name(month_name)?;
        Ok(Self::Monthly { month, year })
    }

    pub fn quarterly(quarter: &str, year: i32) -> Result<Self, PeriodError> {
        let quarter = quarter.parse::<Quarter>()?;
        Ok(Self::Quarterly { quarter, year })
    }

    /// Window of the given kind that contains `today`.
    pub fn containing(kind: PeriodKind, today: NaiveDate) -> Self {
        match kind {
            PeriodKind::Daily => Self::Daily { date: today },
            PeriodKind::Monthly => Self::Monthly {
                month: MONTH_NAMES[today.month0() as usize].1,
                year: today.year(),
            },
            PeriodKind::Quarterly => Self::Quarterly {
                quarter: match today.month0() / 3 {
                    0 => Quarter::Q1,
                    1 => Quarter::Q2,
                    2 => Quarter::Q3,
                    _ => Quarter::Q4,
                },
                year: today.year(),
            },
        }
    }

    pub const fn kind(&self) -> PeriodKind {
        match self {
            Self::Daily { .. } => PeriodKind::Daily,
            Self::Monthly { .. } => PeriodKind::Monthly,
            Self::Quarterly { .. } => PeriodKind::Quarterly,
        }
    }

    /// Whether the window covers the given applied date.
    ///
    /// Only the integer day, month, and year components are compared.
    pub fn contains(&self, applied: &AppliedDate) -> bool {
        match self {
            Self::Daily { date } => {
                applied.day == date.day()
                    && applied.month == date.month()
                    && applied.year == date.year()
            }
            Self::Monthly { month, year } => {
                applied.month == month.number_from_month() && applied.year == *year
            }
            Self::Quarterly { quarter, year } => {
                quarter.contains(applied.month) && applied.year == *year
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Daily { date } => date.format(APPLIED_ON_FORMAT).to_string(),
            Self::Monthly { month, year } => format!("{} {}", month.name(), year),
            Self::Quarterly { quarter, year } => format!("{} {}", quarter.label(), year),
        }
    }
}

impl fmt::Display for PeriodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Why an applied-date string could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedDateIssue {
    /// `"N/A"` or blank.
    Missing,
    /// Present but not three integer components, or a day/month that no
    /// calendar has (an ISO `YYYY-MM-DD` string lands here).
    Malformed,
}

/// Integer components of a `DD-MM-YYYY` applied date.
///
/// Day and month are bounded to 1-31 and 1-12 only; `31-02-2025` still
/// parses and is compared component-wise like any other date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl AppliedDate {
    pub fn parse(value: &str) -> Result<Self, AppliedDateIssue> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_APPLIED_ON) {
            return Err(AppliedDateIssue::Missing);
        }

        let mut parts = trimmed.split('-');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AppliedDateIssue::Malformed);
        };

        let component = |raw: &str| raw.trim().parse::<u32>().ok();
        match (component(day), component(month), year.trim().parse::<i32>().ok()) {
            (Some(day @ 1..=31), Some(month @ 1..=12), Some(year)) => {
                Ok(Self { day, month, year })
            }
            _ => Err(AppliedDateIssue::Malformed),
        }
    }
}

/// Whether an application's applied date falls inside the window.
///
/// Unreadable dates never match. Without a window every readable date
/// matches; callers wanting an all-time view skip the filter instead.
pub fn matches(applied_on: &str, period: Option<&PeriodSpec>) -> bool {
    match AppliedDate::parse(applied_on) {
        Ok(applied) => period.map_or(true, |period| period.contains(&applied)),
        Err(_) => false,
    }
}
