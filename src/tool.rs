//! A configured-once filter applying the same column selection to every
//! batch it is handed.

use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::filter::filter_columns;

/// Configuration for a [`ColumnFilter`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Names of the columns to keep, or to remove when `invert` is set.
    /// When no names are configured, batches pass through unchanged.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    /// Flips the selection: remove the named columns and keep the rest.
    #[serde(default)]
    pub invert: bool,
}

impl FilterOptions {
    /// Reads options from a JSON document.
    ///
    /// Missing keys fall back to their defaults: no column list, no
    /// inversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the options
    /// layout.
    pub fn from_value(value: Value) -> Result<Self, FilterError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Removes columns from record batches by name.
///
/// By default only the columns named in the options are kept. With
/// `invert` set the meaning flips: the named columns are removed and
/// the others kept instead.
#[derive(Clone, Debug)]
pub struct ColumnFilter {
    name: String,
    options: FilterOptions,
}

impl ColumnFilter {
    /// Creates a filter named `name` with the given options.
    #[must_use]
    pub fn new(name: &str, options: FilterOptions) -> Self {
        info!(name, ?options, "configured column filter");
        if options.columns.is_none() {
            warn!(
                name,
                "no columns option provided; returning original record batches"
            );
        }
        Self {
            name: name.to_string(),
            options,
        }
    }

    /// Returns the name given to this filter instance.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Applies the configured selection to `batch`, returning a batch
    /// stripped of the unselected columns. The output shares the
    /// input's column arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the filtered batch cannot be assembled.
    pub fn execute(&self, batch: &RecordBatch) -> Result<RecordBatch, FilterError> {
        let Some(columns) = &self.options.columns else {
            return Ok(batch.clone());
        };
        Ok(filter_columns(batch, columns, self.options.invert)?)
    }
}

/// Errors that may occur while filtering record batches.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to assemble filtered batch: {0}")]
    Batch(#[from] ArrowError),
    #[error("invalid filter options: {0}")]
    Options(#[from] serde_json::Error),
}
