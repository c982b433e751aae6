//! Name-based column selection over a record batch.

use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::error::ArrowError;
use arrow::record_batch::{RecordBatch, RecordBatchOptions};

/// Creates a new record batch holding only the columns of `batch` whose
/// names appear in `columns`, in the batch's original column order.
///
/// Names are compared byte for byte. Each entry in `columns` matches at
/// most one field: once a field has consumed an entry, a later field
/// with the same name is selected only if the name was listed again.
/// With `invert` set the selection flips, removing the named columns
/// and keeping the others.
///
/// The returned batch shares the input's column arrays rather than
/// copying them, and keeps the input's row count even when no columns
/// remain.
///
/// # Errors
///
/// Returns an error if the filtered batch cannot be assembled.
pub fn filter_columns<S>(
    batch: &RecordBatch,
    columns: &[S],
    invert: bool,
) -> Result<RecordBatch, ArrowError>
where
    S: AsRef<str>,
{
    let mut remaining: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    let schema = batch.schema();
    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut arrays = Vec::with_capacity(batch.num_columns());
    for (i, field) in schema.fields().iter().enumerate() {
        let keep = match remaining.iter().position(|n| *n == field.name().as_str()) {
            Some(j) => {
                remaining.remove(j);
                !invert
            }
            None => invert,
        };
        if keep {
            fields.push(field.clone());
            arrays.push(Arc::clone(batch.column(i)));
        }
    }
    let filtered = Schema::new_with_metadata(fields, schema.metadata().clone());
    RecordBatch::try_new_with_options(
        Arc::new(filtered),
        arrays,
        &RecordBatchOptions::new().with_row_count(Some(batch.num_rows())),
    )
}
