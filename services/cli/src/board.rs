use crate::infra::{parse_date, parse_export_format, parse_period_kind};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use recruit_pipeline::config::AppConfig;
use recruit_pipeline::error::AppError;
use recruit_pipeline::telemetry;
use recruit_pipeline::workflows::intake::{ApplicationIntake, ExportFormat};
use recruit_pipeline::workflows::pipeline::{
    aggregate, normalize, BoardSummary, ExclusionDiagnostics, PeriodError, PeriodKind,
    PeriodSpec, Stage,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct BoardArgs {
    /// Application export to load (defaults to APP_APPLICATIONS_PATH)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Export encoding, csv or json (inferred from the extension when omitted)
    #[arg(long, value_parser = parse_export_format)]
    pub(crate) input_format: Option<ExportFormat>,
    /// Only applications received on this day (DD-MM-YYYY)
    #[arg(long, conflicts_with_all = ["monthly", "quarterly", "current"])]
    pub(crate) daily: Option<String>,
    /// Only applications received in this month (English month name)
    #[arg(long, requires = "year", conflicts_with_all = ["quarterly", "current"])]
    pub(crate) monthly: Option<String>,
    /// Only applications received in this quarter (Q1-Q4)
    #[arg(long, requires = "year", conflicts_with = "current")]
    pub(crate) quarterly: Option<String>,
    /// Year for --monthly and --quarterly
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Use the daily, monthly, or quarterly window containing --today
    #[arg(long, value_parser = parse_period_kind)]
    pub(crate) current: Option<PeriodKind>,
    /// Reference date for --current (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Include a row per candidate under each stage
    #[arg(long)]
    pub(crate) list_applications: bool,
    /// Print the board summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatusArgs {
    /// Upstream status labels to normalize
    #[arg(required = true)]
    pub(crate) labels: Vec<String>,
}

pub(crate) fn run_board(args: BoardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, log_level = %config.telemetry.log_level, "pipeline-cli starting");

    let path = args
        .input
        .clone()
        .or_else(|| config.intake.applications_path.clone())
        .ok_or(AppError::MissingInput)?;
    let format = args.input_format.or(config.intake.format);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let period = period_from_args(&args, today)?;

    let applications = ApplicationIntake::from_path(&path, format)?;
    let board = aggregate(&applications, period.as_ref());
    log_exclusions(&board.diagnostics, period.as_ref());

    let summary = board.summary(period.as_ref());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_board(&summary, args.list_applications));
    }

    Ok(())
}

pub(crate) fn run_status(args: StatusArgs) -> Result<(), AppError> {
    for label in &args.labels {
        let status = normalize(label);
        let placement = match Stage::for_status(&status) {
            Some(stage) => stage.label(),
            None if status.is_excluded() => "excluded from board",
            None => "unrecognized, not placed",
        };
        println!("{label:?} -> {status} ({placement})");
    }
    Ok(())
}

pub(crate) fn period_from_args(
    args: &BoardArgs,
    today: NaiveDate,
) -> Result<Option<PeriodSpec>, PeriodError> {
    let year = args.year.unwrap_or_else(|| today.year());

    if let Some(day) = &args.daily {
        return PeriodSpec::daily_from_display(day).map(Some);
    }
    if let Some(month) = &args.monthly {
        return PeriodSpec::monthly(month, year).map(Some);
    }
    if let Some(quarter) = &args.quarterly {
        return PeriodSpec::quarterly(quarter, year).map(Some);
    }

    Ok(args
        .current
        .map(|kind| PeriodSpec::containing(kind, today)))
}

fn log_exclusions(diagnostics: &ExclusionDiagnostics, period: Option<&PeriodSpec>) {
    let window = period.map_or_else(|| "all time".to_string(), PeriodSpec::label);

    info!(
        %window,
        examined = diagnostics.examined,
        placed = diagnostics.placed,
        outside_period = diagnostics.outside_period,
        archived = diagnostics.archived,
        screened_out = diagnostics.screened_out,
        "pipeline board built"
    );

    if diagnostics.data_quality_issues() > 0 {
        warn!(
            missing_date = diagnostics.missing_date,
            malformed_date = diagnostics.malformed_date,
            unrecognized_status = diagnostics.unrecognized_status,
            labels = ?diagnostics.unrecognized_labels,
            "applications dropped for data quality issues"
        );
    }
}

pub(crate) fn render_board(summary: &BoardSummary, list_applications: bool) -> String {
    let mut out = String::new();
    let window = summary.period.as_deref().unwrap_or("all time");

    let _ = writeln!(out, "Pipeline board ({window})");
    let _ = writeln!(
        out,
        "{} of {} applications placed",
        summary.placed, summary.examined
    );

    let _ = writeln!(out, "\nStages");
    for column in &summary.columns {
        let _ = writeln!(out, "- {}: {}", column.stage_label, column.count);
        if !list_applications {
            continue;
        }
        if column.is_empty() {
            let _ = writeln!(out, "    No candidates");
        }
        for card in &column.applications {
            let _ = writeln!(
                out,
                "    {} | {} | {} @ {} | {} | applied {} | {}",
                card.id,
                card.candidate_name,
                card.role_applied,
                card.company,
                card.location,
                card.applied_on,
                card.status_label
            );
        }
    }

    if summary.exclusions.is_empty() {
        let _ = writeln!(out, "\nExclusions: none");
    } else {
        let _ = writeln!(out, "\nExclusions");
        for entry in &summary.exclusions {
            let _ = writeln!(out, "- {}: {}", entry.reason_label, entry.count);
        }
    }

    if !summary.unrecognized_labels.is_empty() {
        let _ = writeln!(out, "\nUnrecognized statuses");
        for (label, count) in &summary.unrecognized_labels {
            let _ = writeln!(out, "- {label:?}: {count}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_pipeline::workflows::pipeline::{Application, ApplicationId};

    fn board_args() -> BoardArgs {
        BoardArgs {
            input: None,
            input_format: None,
            daily: None,
            monthly: None,
            quarterly: None,
            year: None,
            current: None,
            today: None,
            list_applications: false,
            json: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date")
    }

    fn application(id: &str, applied_on: &str, status: &str) -> Application {
        Application {
            id: ApplicationId(id.to_string()),
            candidate_name: "Asha Rao".to_string(),
            company: "Northwind".to_string(),
            role_applied: "Data Engineer".to_string(),
            location: "Pune".to_string(),
            experience: "4 years".to_string(),
            applied_on: applied_on.to_string(),
            raw_status: status.to_string(),
        }
    }

    #[test]
    fn no_window_flags_mean_all_time() {
        let period = period_from_args(&board_args(), today()).expect("valid args");
        assert!(period.is_none());
    }

    #[test]
    fn explicit_windows_are_built_from_flags() {
        let mut args = board_args();
        args.monthly = Some("March".to_string());
        args.year = Some(2025);
        assert_eq!(
            period_from_args(&args, today()).expect("valid month"),
            Some(PeriodSpec::monthly("March", 2025).expect("valid month"))
        );

        let mut args = board_args();
        args.daily = Some("15-03-2025".to_string());
        assert_eq!(
            period_from_args(&args, today()).expect("valid day"),
            Some(PeriodSpec::daily_from_display("15-03-2025").expect("valid day"))
        );
    }

    #[test]
    fn current_window_follows_reference_date() {
        let mut args = board_args();
        args.current = Some(PeriodKind::Quarterly);
        let period = period_from_args(&args, today())
            .expect("valid args")
            .expect("window built");
        assert_eq!(period.label(), "Q2 2025");
    }

    #[test]
    fn invalid_month_is_a_hard_error() {
        let mut args = board_args();
        args.monthly = Some("Smarch".to_string());
        args.year = Some(2025);
        let error = period_from_args(&args, today()).expect_err("month rejected");
        assert_eq!(error, PeriodError::UnknownMonth("Smarch".to_string()));
    }

    #[test]
    fn render_lists_counts_and_exclusions() {
        let applications = vec![
            application("APP-1", "15-03-2025", "HR Round"),
            application("APP-2", "N/A", "HR Round"),
            application("APP-3", "16-03-2025", "On Hold"),
        ];
        let period = PeriodSpec::monthly("March", 2025).expect("valid month");
        let board = aggregate(&applications, Some(&period));
        let output = render_board(&board.summary(Some(&period)), true);

        assert!(output.starts_with("Pipeline board (March 2025)"));
        assert!(output.contains("1 of 3 applications placed"));
        assert!(output.contains("- HR Round: 1"));
        assert!(output.contains("APP-1 | Asha Rao | Data Engineer @ Northwind"));
        assert!(output.contains("- Sourced: 0\n    No candidates"));
        assert!(output.contains("- missing applied date: 1"));
        assert!(output.contains("- unrecognized status: 1"));
        assert!(output.contains("\"On Hold\": 1"));
    }

    #[test]
    fn render_without_listing_omits_candidates() {
        let applications = vec![application("APP-1", "15-03-2025", "Closure")];
        let board = aggregate(&applications, None);
        let output = render_board(&board.summary(None), false);

        assert!(output.starts_with("Pipeline board (all time)"));
        assert!(output.contains("- Closure: 1"));
        assert!(!output.contains("APP-1"));
        assert!(output.contains("Exclusions: none"));
    }
}
