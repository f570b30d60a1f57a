use super::status::PipelineStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of the pipeline board, declared in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Sourced,
    Shortlisted,
    IntroCall,
    Assignment,
    L1,
    L2,
    L3,
    FinalRound,
    HRRound,
    OfferStage,
    Closure,
    OfferDrop,
    Rejected,
}

impl Stage {
    pub const COUNT: usize = 13;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Sourced,
            Self::Shortlisted,
            Self::IntroCall,
            Self::Assignment,
            Self::L1,
            Self::L2,
            Self::L3,
            Self::FinalRound,
            Self::HRRound,
            Self::OfferStage,
            Self::Closure,
            Self::OfferDrop,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sourced => "Sourced",
            Self::Shortlisted => "Shortlisted",
            Self::IntroCall => "Intro Call",
            Self::Assignment => "Assignment",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::FinalRound => "Final Round",
            Self::HRRound => "HR Round",
            Self::OfferStage => "Offer Stage",
            Self::Closure => "Closure",
            Self::OfferDrop => "Offer Drop",
            Self::Rejected => "Rejected",
        }
    }

    /// Stage a canonical status is displayed under.
    ///
    /// Returns `None` for archived and screened-out applications and for
    /// unrecognized labels, none of which can be placed on the board.
    pub fn for_status(status: &PipelineStatus) -> Option<Self> {
        let stage = match status {
            PipelineStatus::InProcess | PipelineStatus::Reviewed => Self::Sourced,
            PipelineStatus::Shortlisted => Self::Shortlisted,
            PipelineStatus::IntroCall => Self::IntroCall,
            PipelineStatus::Assignment => Self::Assignment,
            PipelineStatus::L1 => Self::L1,
            PipelineStatus::L2 => Self::L2,
            PipelineStatus::L3 => Self::L3,
            PipelineStatus::FinalRound => Self::FinalRound,
            PipelineStatus::HRRound => Self::HRRound,
            PipelineStatus::OfferStage | PipelineStatus::Selected => Self::OfferStage,
            PipelineStatus::Closure | PipelineStatus::Joined => Self::Closure,
            PipelineStatus::OfferDrop | PipelineStatus::Declined => Self::OfferDrop,
            PipelineStatus::Rejected => Self::Rejected,
            PipelineStatus::Archived | PipelineStatus::ScreenedOut | PipelineStatus::Other(_) => {
                return None
            }
        };
        Some(stage)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_matches_declaration_order() {
        let ordered = Stage::ordered();
        assert_eq!(ordered.len(), 13);
        assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ordered[0], Stage::Sourced);
        assert_eq!(ordered[12], Stage::Rejected);
    }

    #[test]
    fn every_placeable_status_has_a_stage() {
        let placeable = [
            PipelineStatus::InProcess,
            PipelineStatus::Shortlisted,
            PipelineStatus::Rejected,
            PipelineStatus::Reviewed,
            PipelineStatus::L1,
            PipelineStatus::L2,
            PipelineStatus::L3,
            PipelineStatus::FinalRound,
            PipelineStatus::HRRound,
            PipelineStatus::Selected,
            PipelineStatus::IntroCall,
            PipelineStatus::Assignment,
            PipelineStatus::OfferStage,
            PipelineStatus::Closure,
            PipelineStatus::Joined,
            PipelineStatus::OfferDrop,
            PipelineStatus::Declined,
        ];

        for status in placeable {
            assert!(
                Stage::for_status(&status).is_some(),
                "{status} should map to a stage"
            );
        }
    }

    #[test]
    fn excluded_and_unknown_statuses_have_no_stage() {
        assert_eq!(Stage::for_status(&PipelineStatus::Archived), None);
        assert_eq!(Stage::for_status(&PipelineStatus::ScreenedOut), None);
        assert_eq!(
            Stage::for_status(&PipelineStatus::Other("On Hold".to_string())),
            None
        );
    }

    #[test]
    fn sourced_collects_in_process_applications() {
        assert_eq!(
            Stage::for_status(&PipelineStatus::InProcess),
            Some(Stage::Sourced)
        );
        assert_eq!(Stage::HRRound.label(), "HR Round");
    }
}
