//! Polars column helpers.
//!
//! Series in, series out: the output has the input's name (unless given
//! another), length and row order, and nulls stay null. Columns of any
//! dtype other than `String` (or all-null) are rejected before any row is
//! read.

use polars::prelude::*;
use strclean_common::string_chunked;
use strclean_naming::detect_naming_convention;
use strclean_normalization::Pipeline;

use crate::error::{Result, TransformError};

/// Apply `f` to every non-null row of a string series.
pub fn map_series<F>(series: &Series, f: F) -> Result<Series>
where
    F: Fn(&str) -> String,
{
    let ca = string_chunked(series)?;
    let mapped: StringChunked = ca.iter().map(|value| value.map(&f)).collect();
    Ok(mapped.with_name(series.name().clone()).into_series())
}

/// Run `pipeline` over a string series.
pub fn normalize_series(series: &Series, pipeline: &Pipeline) -> Result<Series> {
    map_series(series, |s| pipeline.apply(s))
}

/// Naming-convention label (`"snake_case"`, `"mixed"`, ...) for every row.
pub fn detect_series(series: &Series, output_name: &str) -> Result<Series> {
    let labelled = map_series(series, |s| detect_naming_convention(s).to_string())?;
    Ok(labelled.with_name(output_name.into()))
}

fn column_series<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Series> {
    df.column(column)
        .map(Column::as_materialized_series)
        .map_err(|_| TransformError::ColumnNotFound(column.to_string()))
}

/// Replace `column` in place with its normalized values.
pub fn normalize_column(df: &mut DataFrame, column: &str, pipeline: &Pipeline) -> Result<()> {
    let normalized = normalize_series(column_series(df, column)?, pipeline)?;
    tracing::debug!(
        column = %column,
        rows = normalized.len(),
        nulls = normalized.null_count(),
        steps = ?pipeline.step_names(),
        "Normalized column"
    );
    df.with_column(normalized)?;
    Ok(())
}

/// Add a column `output` holding the naming convention of each row of
/// `column`. An existing `output` column is replaced.
pub fn detect_column(df: &mut DataFrame, column: &str, output: &str) -> Result<()> {
    let labels = detect_series(column_series(df, column)?, output)?;
    tracing::debug!(
        column = %column,
        output = %output,
        rows = labels.len(),
        "Detected naming conventions"
    );
    df.with_column(labels)?;
    Ok(())
}
