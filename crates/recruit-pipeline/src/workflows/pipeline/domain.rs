use serde::{Deserialize, Deserializer, Serialize};

/// Literal the data layer uses when an application has no applied date.
pub const UNKNOWN_APPLIED_ON: &str = "N/A";

/// Identifier wrapper for candidate applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Candidate application as returned by the list-all-applications query.
///
/// Display fields are opaque to the pipeline; only `applied_on` and
/// `raw_status` drive filtering and stage placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: ApplicationId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidate_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role_applied: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: String,
    /// `DD-MM-YYYY`, or `"N/A"` when unknown.
    #[serde(default = "unknown_applied_on", deserialize_with = "null_as_unknown_date")]
    pub applied_on: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub raw_status: String,
}

fn unknown_applied_on() -> String {
    UNKNOWN_APPLIED_ON.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<ApplicationId, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    };
    Ok(ApplicationId(id))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_applied_on))
}

impl Application {
    /// Canonical status for this record's upstream label.
    pub fn status(&self) -> super::PipelineStatus {
        super::status::normalize(&self.raw_status)
    }
}
