use super::super::aggregate::{ExclusionReason, PipelineAggregate};
use super::super::domain::Application;
use super::super::period::PeriodSpec;
use super::super::stage::Stage;
use super::views::{ApplicationCardView, BoardSummary, ExclusionEntry, StageColumnView};

const EXCLUSION_ORDER: [ExclusionReason; 6] = [
    ExclusionReason::MissingDate,
    ExclusionReason::MalformedDate,
    ExclusionReason::OutsidePeriod,
    ExclusionReason::Archived,
    ExclusionReason::ScreenedOut,
    ExclusionReason::UnrecognizedStatus,
];

impl PipelineAggregate<'_> {
    /// Flatten the aggregate into board columns in stage order.
    pub fn summary(&self, period: Option<&PeriodSpec>) -> BoardSummary {
        summarize(self, period)
    }
}

fn summarize(aggregate: &PipelineAggregate<'_>, period: Option<&PeriodSpec>) -> BoardSummary {
    let columns = Stage::ordered()
        .into_iter()
        .map(|stage| StageColumnView {
            stage,
            stage_label: stage.label(),
            count: aggregate.count(stage),
            applications: aggregate
                .applications(stage)
                .iter()
                .copied()
                .map(card)
                .collect(),
        })
        .collect();

    let diagnostics = &aggregate.diagnostics;
    let exclusions = EXCLUSION_ORDER
        .into_iter()
        .filter_map(|reason| {
            let count = diagnostics.count(reason);
            (count > 0).then_some(ExclusionEntry {
                reason,
                reason_label: reason.label(),
                count,
            })
        })
        .collect();

    BoardSummary {
        period: period.map(PeriodSpec::label),
        examined: diagnostics.examined,
        placed: diagnostics.placed,
        columns,
        counts: aggregate.counts.clone(),
        exclusions,
        unrecognized_labels: diagnostics.unrecognized_labels.clone(),
    }
}

fn card(application: &Application) -> ApplicationCardView {
    ApplicationCardView {
        id: application.id.clone(),
        candidate_name: application.candidate_name.clone(),
        company: application.company.clone(),
        role_applied: application.role_applied.clone(),
        location: application.location.clone(),
        experience: application.experience.clone(),
        applied_on: application.applied_on.clone(),
        status_label: application.status().label().to_string(),
    }
}
