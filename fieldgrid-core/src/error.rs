use thiserror::Error;

/// Errors raised at the construction boundary.
///
/// Past construction the controller never fails: a missing surface or a
/// detached viewport makes an operation skip its work instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid field dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: i32, columns: i32 },

    #[error("invalid cell metrics: dimension {dimension}, spacing {spacing}")]
    InvalidCellMetrics { dimension: f32, spacing: f32 },

    #[error("invalid zoom bounds: max scale {max_scale} is below 1.0")]
    InvalidZoomBounds { max_scale: f32 },
}
