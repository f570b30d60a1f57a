use chrono::NaiveDate;
use recruit_pipeline::workflows::intake::ExportFormat;
use recruit_pipeline::workflows::pipeline::PeriodKind;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_export_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse::<ExportFormat>().map_err(|err| err.to_string())
}

pub(crate) fn parse_period_kind(raw: &str) -> Result<PeriodKind, String> {
    raw.parse::<PeriodKind>().map_err(|err| err.to_string())
}
