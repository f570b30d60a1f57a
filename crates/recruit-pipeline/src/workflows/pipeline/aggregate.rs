use super::domain::Application;
use super::period::{AppliedDate, AppliedDateIssue, PeriodSpec};
use super::stage::Stage;
use super::status::PipelineStatus;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Reason an application was left off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    MissingDate,
    MalformedDate,
    OutsidePeriod,
    Archived,
    ScreenedOut,
    UnrecognizedStatus,
}

impl ExclusionReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MissingDate => "missing applied date",
            Self::MalformedDate => "malformed applied date",
            Self::OutsidePeriod => "outside selected period",
            Self::Archived => "archived",
            Self::ScreenedOut => "screened out",
            Self::UnrecognizedStatus => "unrecognized status",
        }
    }
}

/// Per-reason tally of records the aggregator dropped.
///
/// Dropping stays silent for the board, these counters are what make dirty
/// upstream data visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionDiagnostics {
    pub examined: usize,
    pub placed: usize,
    pub missing_date: usize,
    pub malformed_date: usize,
    pub outside_period: usize,
    pub archived: usize,
    pub screened_out: usize,
    pub unrecognized_status: usize,
    /// Raw labels that fell through normalization, with occurrence counts.
    pub unrecognized_labels: BTreeMap<String, usize>,
}

impl ExclusionDiagnostics {
    fn record(&mut self, reason: ExclusionReason) {
        let counter = match reason {
            ExclusionReason::MissingDate => &mut self.missing_date,
            ExclusionReason::MalformedDate => &mut self.malformed_date,
            ExclusionReason::OutsidePeriod => &mut self.outside_period,
            ExclusionReason::Archived => &mut self.archived,
            ExclusionReason::ScreenedOut => &mut self.screened_out,
            ExclusionReason::UnrecognizedStatus => &mut self.unrecognized_status,
        };
        *counter += 1;
    }

    pub fn count(&self, reason: ExclusionReason) -> usize {
        match reason {
            ExclusionReason::MissingDate => self.missing_date,
            ExclusionReason::MalformedDate => self.malformed_date,
            ExclusionReason::OutsidePeriod => self.outside_period,
            ExclusionReason::Archived => self.archived,
            ExclusionReason::ScreenedOut => self.screened_out,
            ExclusionReason::UnrecognizedStatus => self.unrecognized_status,
        }
    }

    pub fn excluded(&self) -> usize {
        self.examined - self.placed
    }

    /// Exclusions caused by bad upstream data rather than by the filter or
    /// by terminal statuses.
    pub fn data_quality_issues(&self) -> usize {
        self.missing_date + self.malformed_date + self.unrecognized_status
    }
}

/// Applications grouped per board stage, plus counts and exclusion tallies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineAggregate<'a> {
    pub stages: BTreeMap<Stage, Vec<&'a Application>>,
    pub counts: BTreeMap<Stage, usize>,
    pub diagnostics: ExclusionDiagnostics,
}

impl<'a> PipelineAggregate<'a> {
    pub fn applications(&self, stage: Stage) -> &[&'a Application] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.counts.get(&stage).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Bucket applications into board stages.
///
/// Records are dropped, never rejected: an unreadable date or an
/// unrecognized status only shows up in the returned diagnostics. Without a
/// period the date filter is skipped entirely, so undated records still
/// appear in the all-time view.
pub fn aggregate<'a>(
    applications: &'a [Application],
    period: Option<&PeriodSpec>,
) -> PipelineAggregate<'a> {
    let mut stages: BTreeMap<Stage, Vec<&'a Application>> = Stage::ordered()
        .into_iter()
        .map(|stage| (stage, Vec::new()))
        .collect();
    let mut diagnostics = ExclusionDiagnostics {
        examined: applications.len(),
        ..ExclusionDiagnostics::default()
    };

    for application in applications {
        let status = application.status();
        match place(application, &status, period) {
            Ok(stage) => {
                stages.entry(stage).or_default().push(application);
                diagnostics.placed += 1;
            }
            Err(reason) => {
                debug!(
                    application_id = %application.id,
                    status = %status,
                    applied_on = %application.applied_on,
                    reason = reason.label(),
                    "application excluded from pipeline board"
                );
                diagnostics.record(reason);
                if let PipelineStatus::Other(raw) = status {
                    if reason == ExclusionReason::UnrecognizedStatus {
                        *diagnostics.unrecognized_labels.entry(raw).or_default() += 1;
                    }
                }
            }
        }
    }

    let counts = stages
        .iter()
        .map(|(stage, members)| (*stage, members.len()))
        .collect();

    PipelineAggregate {
        stages,
        counts,
        diagnostics,
    }
}

fn place(
    application: &Application,
    status: &PipelineStatus,
    period: Option<&PeriodSpec>,
) -> Result<Stage, ExclusionReason> {
    if let Some(period) = period {
        let applied = AppliedDate::parse(&application.applied_on).map_err(|issue| match issue {
            AppliedDateIssue::Missing => ExclusionReason::MissingDate,
            AppliedDateIssue::Malformed => ExclusionReason::MalformedDate,
        })?;
        if !period.contains(&applied) {
            return Err(ExclusionReason::OutsidePeriod);
        }
    }

    match status {
        PipelineStatus::Archived => Err(ExclusionReason::Archived),
        PipelineStatus::ScreenedOut => Err(ExclusionReason::ScreenedOut),
        other => Stage::for_status(other).ok_or(ExclusionReason::UnrecognizedStatus),
    }
}
