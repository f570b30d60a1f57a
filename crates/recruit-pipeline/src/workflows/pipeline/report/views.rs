use super::super::aggregate::ExclusionReason;
use super::super::domain::ApplicationId;
use super::super::stage::Stage;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCardView {
    pub id: ApplicationId,
    pub candidate_name: String,
    pub company: String,
    pub role_applied: String,
    pub location: String,
    pub experience: String,
    pub applied_on: String,
    pub status_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageColumnView {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub count: usize,
    pub applications: Vec<ApplicationCardView>,
}

impl StageColumnView {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExclusionEntry {
    pub reason: ExclusionReason,
    pub reason_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub examined: usize,
    pub placed: usize,
    pub columns: Vec<StageColumnView>,
    pub counts: BTreeMap<Stage, usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<ExclusionEntry>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unrecognized_labels: BTreeMap<String, usize>,
}
