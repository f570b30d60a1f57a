//! Loads application lists exported from the dashboard's data layer.

mod dates;
mod parser;

use crate::workflows::pipeline::Application;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownFormat(String),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read application export: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid application CSV data: {}", err),
            IntakeError::Json(err) => write!(f, "invalid application JSON data: {}", err),
            IntakeError::UnknownFormat(value) => {
                write!(f, "unknown export format '{}'; expected csv or json", value)
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::Json(err) => Some(err),
            IntakeError::UnknownFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Encoding of an application export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = IntakeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(IntakeError::UnknownFormat(value.to_string())),
        }
    }
}

pub struct ApplicationIntake;

impl ApplicationIntake {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        format: Option<ExportFormat>,
    ) -> Result<Vec<Application>, IntakeError> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| ExportFormat::from_path(path));
        let file = File::open(path)?;
        let applications = Self::from_reader(file, format)?;
        info!(
            path = %path.display(),
            ?format,
            count = applications.len(),
            "loaded application export"
        );
        Ok(applications)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: ExportFormat,
    ) -> Result<Vec<Application>, IntakeError> {
        match format {
            ExportFormat::Csv => Self::from_csv_reader(reader),
            ExportFormat::Json => Self::from_json_reader(reader),
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Application>, IntakeError> {
        Ok(parser::parse_csv(reader)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Application>, IntakeError> {
        Ok(parser::parse_json(reader)?)
    }
}
