//! Pipeline board engine: status normalization, period filtering, and stage
//! bucketing for candidate applications.

pub mod aggregate;
pub mod domain;
pub mod period;
pub mod report;
pub mod stage;
pub mod status;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, ExclusionDiagnostics, ExclusionReason, PipelineAggregate};
pub use domain::{Application, ApplicationId, UNKNOWN_APPLIED_ON};
pub use period::{
    matches, month_from_name, AppliedDate, AppliedDateIssue, PeriodError, PeriodKind, PeriodSpec,
    Quarter, APPLIED_ON_FORMAT,
};
pub use report::views::{ApplicationCardView, BoardSummary, ExclusionEntry, StageColumnView};
pub use stage::Stage;
pub use status::{normalize, PipelineStatus};
