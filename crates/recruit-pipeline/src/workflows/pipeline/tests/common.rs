use crate::workflows::pipeline::domain::{Application, ApplicationId};

pub(super) fn application(id: &str, applied_on: &str, status: &str) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        candidate_name: format!("Candidate {id}"),
        company: "Northwind Traders".to_string(),
        role_applied: "Backend Engineer".to_string(),
        location: "Bengaluru".to_string(),
        experience: "5 years".to_string(),
        applied_on: applied_on.to_string(),
        raw_status: status.to_string(),
    }
}

/// A board's worth of applications covering every upstream label in use.
pub(super) fn mixed_board() -> Vec<Application> {
    vec![
        application("app-001", "03-01-2025", "In Process"),
        application("app-002", "15-03-2025", "Shortlisted"),
        application("app-003", "15-03-2025", "Interview Scheduled"),
        application("app-004", "20-03-2025", "L1"),
        application("app-005", "02-04-2025", "L2"),
        application("app-006", "11-02-2025", "L3"),
        application("app-007", "15-03-2025", "Final Round"),
        application("app-008", "28-03-2025", "HR Round"),
        application("app-009", "15-03-2025", "Selected"),
        application("app-010", "15-03-2025", "Offer Stage"),
        application("app-011", "09-03-2025", "Joined"),
        application("app-012", "10-03-2025", "Closure"),
        application("app-013", "15-03-2025", "Declined"),
        application("app-014", "15-03-2025", "Rejected"),
        application("app-015", "15-03-2025", "Archived"),
        application("app-016", "15-03-2025", "Screened Out"),
        application("app-017", "15-03-2025", "On Hold"),
        application("app-018", "N/A", "Shortlisted"),
        application("app-019", "2025-03-15", "Shortlisted"),
        application("app-020", "01-03-2025", "Intro Call"),
        application("app-021", "05-03-2025", "Assignment"),
        application("app-022", "06-03-2025", "Applied"),
    ]
}

pub(super) fn ids(applications: &[&Application]) -> Vec<String> {
    applications
        .iter()
        .map(|application| application.id.0.clone())
        .collect()
}
