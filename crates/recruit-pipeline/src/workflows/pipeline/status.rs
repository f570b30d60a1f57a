use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical status vocabulary derived from upstream status labels.
///
/// `Other` carries any label the normalizer does not recognize, verbatim, so a
/// record is never lost to an unexpected spelling before it reaches the
/// aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PipelineStatus {
    InProcess,
    Shortlisted,
    Rejected,
    Reviewed,
    ScreenedOut,
    L1,
    L2,
    L3,
    FinalRound,
    HRRound,
    Selected,
    IntroCall,
    Assignment,
    OfferStage,
    Closure,
    Joined,
    OfferDrop,
    Declined,
    Archived,
    Other(String),
}

impl PipelineStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::InProcess => "In Process",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
            Self::Reviewed => "Reviewed",
            Self::ScreenedOut => "Screened Out",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::FinalRound => "Final Round",
            Self::HRRound => "HR Round",
            Self::Selected => "Selected",
            Self::IntroCall => "Intro Call",
            Self::Assignment => "Assignment",
            Self::OfferStage => "Offer Stage",
            Self::Closure => "Closure",
            Self::Joined => "Joined",
            Self::OfferDrop => "Offer Drop",
            Self::Declined => "Declined",
            Self::Archived => "Archived",
            Self::Other(raw) => raw,
        }
    }

    /// Archived and screened-out applications never appear on the board.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Archived | Self::ScreenedOut)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Map an upstream status label onto the canonical vocabulary.
///
/// Matching is exact and case-sensitive on the label as stored upstream.
/// Several labels collapse onto one status (`Selected` and `Offer Stage`,
/// `Closure` and `Joined`, `Offer Drop` and `Declined`).
pub fn normalize(raw: &str) -> PipelineStatus {
    match raw {
        "In Process" | "In-Process" | "Applied" => PipelineStatus::InProcess,
        "Shortlisted" => PipelineStatus::Shortlisted,
        "Rejected" => PipelineStatus::Rejected,
        "Reviewed" => PipelineStatus::Reviewed,
        "Screened Out" => PipelineStatus::ScreenedOut,
        "L1" | "Interview Scheduled" => PipelineStatus::L1,
        "L2" => PipelineStatus::L2,
        "L3" => PipelineStatus::L3,
        "Final Round" => PipelineStatus::FinalRound,
        "HR Round" => PipelineStatus::HRRound,
        "Selected" | "Offer Stage" => PipelineStatus::OfferStage,
        "Intro Call" => PipelineStatus::IntroCall,
        "Assignment" => PipelineStatus::Assignment,
        "Closure" | "Joined" => PipelineStatus::Closure,
        "Offer Drop" | "Declined" => PipelineStatus::OfferDrop,
        "Archived" => PipelineStatus::Archived,
        other => PipelineStatus::Other(other.to_string()),
    }
}

impl From<&str> for PipelineStatus {
    fn from(value: &str) -> Self {
        normalize(value)
    }
}

impl From<String> for PipelineStatus {
    fn from(value: String) -> Self {
        match normalize(&value) {
            PipelineStatus::Other(_) => PipelineStatus::Other(value),
            status => status,
        }
    }
}

impl From<PipelineStatus> for String {
    fn from(value: PipelineStatus) -> Self {
        match value {
            PipelineStatus::Other(raw) => raw,
            status => status.label().to_string(),
        }
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interview_scheduled_lands_in_first_round() {
        assert_eq!(normalize("Interview Scheduled"), PipelineStatus::L1);
        assert_eq!(normalize("L1"), PipelineStatus::L1);
    }

    #[test]
    fn reviewed_keeps_its_own_status() {
        assert_eq!(normalize("Reviewed"), PipelineStatus::Reviewed);
        assert_eq!(normalize("Reviewed").label(), "Reviewed");
    }

    #[test]
    fn collapsing_labels_share_a_status() {
        assert_eq!(normalize("Joined"), PipelineStatus::Closure);
        assert_eq!(normalize("Closure"), PipelineStatus::Closure);
        assert_eq!(normalize("Selected"), PipelineStatus::OfferStage);
        assert_eq!(normalize("Offer Stage"), PipelineStatus::OfferStage);
        assert_eq!(normalize("Declined"), PipelineStatus::OfferDrop);
        assert_eq!(normalize("Offer Drop"), PipelineStatus::OfferDrop);
        assert_eq!(normalize("In-Process"), PipelineStatus::InProcess);
        assert_eq!(normalize("Applied"), PipelineStatus::InProcess);
    }

    #[test]
    fn unknown_labels_pass_through_verbatim() {
        assert_eq!(normalize(""), PipelineStatus::Other(String::new()));
        assert_eq!(
            normalize("On Hold"),
            PipelineStatus::Other("On Hold".to_string())
        );
        // Matching is case-sensitive.
        assert_eq!(
            normalize("shortlisted"),
            PipelineStatus::Other("shortlisted".to_string())
        );
        assert_eq!(normalize("On Hold").label(), "On Hold");
    }

    #[test]
    fn terminal_statuses_are_flagged() {
        assert!(normalize("Archived").is_excluded());
        assert!(normalize("Screened Out").is_excluded());
        assert!(!normalize("Rejected").is_excluded());
        assert!(!normalize("Withdrawn").is_recognized());
    }

    #[test]
    fn serializes_as_label_and_round_trips_through_normalizer() {
        let json = serde_json::to_string(&PipelineStatus::HRRound).expect("serialize");
        assert_eq!(json, "\"HR Round\"");

        let parsed: PipelineStatus = serde_json::from_str("\"Joined\"").expect("deserialize");
        assert_eq!(parsed, PipelineStatus::Closure);

        let parsed: PipelineStatus = serde_json::from_str("\"Parked\"").expect("deserialize");
        assert_eq!(parsed, PipelineStatus::Other("Parked".to_string()));
    }
}
