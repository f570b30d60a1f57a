use super::dates::display_applied_on;
use crate::workflows::pipeline::{Application, ApplicationId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<Application>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        let row = record?;
        applications.push(row.into_application());
    }

    Ok(applications)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<Application>, serde_json::Error> {
    let applications: Vec<Application> = serde_json::from_reader(reader)?;
    Ok(applications
        .into_iter()
        .map(|application| Application {
            applied_on: display_applied_on(Some(application.applied_on.as_str())),
            ..application
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Candidate Name", default)]
    candidate_name: String,
    #[serde(rename = "Company", default)]
    company: String,
    #[serde(rename = "Role Applied", default)]
    role_applied: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Experience", default)]
    experience: String,
    #[serde(
        rename = "Applied On",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    applied_on: Option<String>,
    #[serde(rename = "Status", default)]
    status: String,
}

impl ApplicationRow {
    fn into_application(self) -> Application {
        Application {
            applied_on: display_applied_on(self.applied_on.as_deref()),
            id: ApplicationId(self.id),
            candidate_name: self.candidate_name,
            company: self.company,
            role_applied: self.role_applied,
            location: self.location,
            experience: self.experience,
            raw_status: self.status,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
