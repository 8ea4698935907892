//! Export and import of the destination list as a portable JSON file.
//!
//! Import is destructive: a valid file replaces the whole list with no merge
//! and no confirmation step. An invalid file is rejected before anything is
//! touched, with a distinct error per failure mode.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{error, info};

use crate::backend::domain::commands::transfer::{ExportFile, ImportResult};
use crate::backend::domain::destination_service::DestinationService;
use crate::backend::domain::models::destination::Destination;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Failed to parse file. Ensure it is valid JSON ({0})")]
    MalformedJson(String),
    #[error("Invalid file format. Data must be an array")]
    NotAnArray,
    #[error("Invalid file format. Entry {index} is missing a non-empty id or name")]
    MissingFields { index: usize },
    #[error("Invalid file format. Entry {index} could not be read: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("Invalid file format. Destination id {id} appears more than once")]
    DuplicateId { id: String },
    #[error("Invalid file format. Entry {index} uses option id {id} more than once")]
    DuplicateOptionId { index: usize, id: String },
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("trip-plan-{}.json", date.format("%Y-%m-%d"))
}

/// Pretty-printed JSON array of destination records
pub fn export_to_file(destinations: &[Destination], date: NaiveDate) -> Result<ExportFile> {
    let bytes = serde_json::to_vec_pretty(destinations)?;
    Ok(ExportFile {
        filename: export_filename(date),
        bytes,
    })
}

/// Parse and validate an export file without touching any state
pub fn import_from_file(bytes: &[u8]) -> Result<Vec<Destination>, ImportError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ImportError::MalformedJson(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    // Check required fields across the whole file before decoding any record
    if let Some(index) = items.iter().position(|item| !has_required_fields(item)) {
        return Err(ImportError::MissingFields { index });
    }

    let mut seen = HashSet::new();
    let mut destinations = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let destination: Destination = serde_json::from_value(item).map_err(|e| ImportError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
        destination.validate().map_err(|e| ImportError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
        if let Some(id) = destination.duplicate_option_id() {
            return Err(ImportError::DuplicateOptionId {
                index,
                id: id.to_string(),
            });
        }
        if !seen.insert(destination.id.clone()) {
            return Err(ImportError::DuplicateId { id: destination.id });
        }
        destinations.push(destination);
    }

    Ok(destinations)
}

fn has_required_fields(item: &Value) -> bool {
    let non_empty = |field: &str| {
        item.get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };
    non_empty("id") && non_empty("name")
}

#[derive(Clone)]
pub struct TransferService {
    destination_service: DestinationService,
}

impl TransferService {
    pub fn new(destination_service: DestinationService) -> Self {
        Self { destination_service }
    }

    pub async fn export(&self) -> Result<ExportFile> {
        let destinations = self.destination_service.list_destinations().await.destinations;
        let file = export_to_file(&destinations, Utc::now().date_naive())?;
        info!(
            "Exported {} destinations to {} ({} bytes)",
            destinations.len(),
            file.filename,
            file.bytes.len()
        );
        Ok(file)
    }

    /// Replace every destination with the file's contents, or fail leaving state as it was
    pub async fn import(&self, bytes: &[u8]) -> Result<ImportResult> {
        info!("Importing destinations from {} bytes", bytes.len());

        let destinations = import_from_file(bytes).map_err(|e| {
            error!("Rejected import: {}", e);
            e
        })?;

        let replaced = self.destination_service.replace_all(destinations).await;
        info!("Imported {} destinations", replaced.destination_count);

        Ok(ImportResult {
            imported_count: replaced.destination_count,
            active_destination_id: replaced.active_destination_id,
            persisted: replaced.persisted,
        })
    }
}
