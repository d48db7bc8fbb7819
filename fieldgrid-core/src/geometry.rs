/// Field grid geometry
///
/// This module is the pure layout engine: given row/column counts, a cell
/// dimension and inter-cell spacing it derives:
/// - Total content dimensions (the scrollable area before any zoom)
/// - Per-cell placement rectangles in content space
/// - Hit-testing from a content-space point back to a cell index
///
/// Key design principles:
/// - Single source of truth for all cell placement math
/// - Validation at construction only; every query on a built value is total
/// - No display state and no side effects
use crate::constants::MIN_CELL_DIMENSION;
use crate::error::FieldError;
use crate::host::GridHost;

/// Total content dimensions of the full grid before any scaling
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

impl FieldSize {
    pub const ZERO: FieldSize = FieldSize {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Dimensions after applying a zoom scale
    #[inline]
    pub fn scaled(&self, scale: f32) -> FieldSize {
        FieldSize {
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    /// True when the field has no extent on either axis
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Placement rectangle of a single cell in content space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Validated grid placement parameters and the derived content geometry
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGeometry {
    rows: usize,
    columns: usize,
    cell_dimension: f32,
    cell_spacing: f32,
}

impl FieldGeometry {
    /// Validate and build grid geometry.
    ///
    /// Rejects negative row/column counts, non-positive cell dimensions and
    /// negative spacing. Zero-count grids are valid and have zero extent.
    pub fn new(
        rows: i32,
        columns: i32,
        cell_dimension: f32,
        cell_spacing: f32,
    ) -> Result<Self, FieldError> {
        if rows < 0 || columns < 0 {
            return Err(FieldError::InvalidDimensions { rows, columns });
        }
        if !cell_dimension.is_finite()
            || cell_dimension <= 0.0
            || !cell_spacing.is_finite()
            || cell_spacing < 0.0
        {
            return Err(FieldError::InvalidCellMetrics {
                dimension: cell_dimension,
                spacing: cell_spacing,
            });
        }
        Ok(Self {
            rows: rows as usize,
            columns: columns as usize,
            cell_dimension,
            cell_spacing,
        })
    }

    /// Build geometry from a host's layout parameters.
    ///
    /// The host owns these values, so degenerate cell metrics are clamped
    /// into range rather than rejected; counts still validate.
    pub fn from_host(host: &dyn GridHost) -> Result<Self, FieldError> {
        Self::new(
            host.row_count(),
            host.column_count(),
            host.cell_dimension().max(MIN_CELL_DIMENSION),
            host.cell_spacing().max(0.0),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_dimension(&self) -> f32 {
        self.cell_dimension
    }

    pub fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Distance between the origins of adjacent cells
    #[inline]
    fn stride(&self) -> f32 {
        self.cell_dimension + self.cell_spacing
    }

    /// Total content dimensions: `count * (cell + spacing) - spacing` per
    /// axis. An empty grid has zero extent on both axes, so the trailing
    /// spacing subtraction never goes negative.
    pub fn content_size(&self) -> FieldSize {
        if self.rows == 0 || self.columns == 0 {
            return FieldSize::ZERO;
        }
        FieldSize {
            width: self.columns as f32 * self.stride() - self.cell_spacing,
            height: self.rows as f32 * self.stride() - self.cell_spacing,
        }
    }

    /// Placement rect for a linear cell index, row-major from the top-left
    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        let (row, column) = self.position_of(index)?;
        Some(CellRect {
            x: column as f32 * self.stride(),
            y: row as f32 * self.stride(),
            width: self.cell_dimension,
            height: self.cell_dimension,
        })
    }

    /// Convert a linear cell index to (row, column)
    #[inline]
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if self.columns == 0 || index >= self.cell_count() {
            return None;
        }
        Some((index / self.columns, index % self.columns))
    }

    /// Convert (row, column) to a linear cell index
    #[inline]
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Hit-test a content-space point to the cell under it.
    ///
    /// A point in the gap between two cells resolves to the cell preceding
    /// the gap; points outside the content bounds return `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let size = self.content_size();
        if x >= size.width || y >= size.height {
            return None;
        }
        let column = ((x / self.stride()).floor() as usize).min(self.columns - 1);
        let row = ((y / self.stride()).floor() as usize).min(self.rows - 1);
        self.index_of(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_by_ten() -> FieldGeometry {
        FieldGeometry::new(10, 10, 41.0, 1.0).unwrap()
    }

    #[test]
    fn test_content_size_matches_cell_metrics() {
        let size = ten_by_ten().content_size();
        // 10 * (41 + 1) - 1
        assert_eq!(size.width, 419.0);
        assert_eq!(size.height, 419.0);
    }

    #[test]
    fn test_content_size_is_zero_for_empty_grids() {
        let no_rows = FieldGeometry::new(0, 10, 41.0, 1.0).unwrap();
        assert_eq!(no_rows.content_size(), FieldSize::ZERO);

        let no_columns = FieldGeometry::new(10, 0, 41.0, 1.0).unwrap();
        assert_eq!(no_columns.content_size(), FieldSize::ZERO);

        assert_eq!(no_rows.cell_count(), 0);
    }

    #[test]
    fn test_content_size_is_never_negative() {
        for rows in 0..4 {
            for columns in 0..4 {
                let size = FieldGeometry::new(rows, columns, 41.0, 1.0)
                    .unwrap()
                    .content_size();
                assert!(size.width >= 0.0);
                assert!(size.height >= 0.0);
            }
        }
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        assert_eq!(
            FieldGeometry::new(-1, 10, 41.0, 1.0),
            Err(FieldError::InvalidDimensions {
                rows: -1,
                columns: 10
            })
        );
        assert_eq!(
            FieldGeometry::new(10, -3, 41.0, 1.0),
            Err(FieldError::InvalidDimensions {
                rows: 10,
                columns: -3
            })
        );
    }

    #[test]
    fn test_degenerate_cell_metrics_are_rejected() {
        assert!(FieldGeometry::new(10, 10, 0.0, 1.0).is_err());
        assert!(FieldGeometry::new(10, 10, -41.0, 1.0).is_err());
        assert!(FieldGeometry::new(10, 10, 41.0, -1.0).is_err());
        assert!(FieldGeometry::new(10, 10, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_cell_rect_places_row_major() {
        let geometry = ten_by_ten();

        let first = geometry.cell_rect(0).unwrap();
        assert_eq!((first.x, first.y), (0.0, 0.0));
        assert_eq!((first.width, first.height), (41.0, 41.0));

        // Index 11 is row 1, column 1; each step advances by 42
        let inner = geometry.cell_rect(11).unwrap();
        assert_eq!((inner.x, inner.y), (42.0, 42.0));

        let last = geometry.cell_rect(99).unwrap();
        assert_eq!((last.x, last.y), (378.0, 378.0));

        assert_eq!(geometry.cell_rect(100), None);
    }

    #[test]
    fn test_index_position_round_trip() {
        let geometry = ten_by_ten();
        for index in 0..geometry.cell_count() {
            let (row, column) = geometry.position_of(index).unwrap();
            assert_eq!(geometry.index_of(row, column), Some(index));
        }
        assert_eq!(geometry.position_of(100), None);
        assert_eq!(geometry.index_of(10, 0), None);
        assert_eq!(geometry.index_of(0, 10), None);
    }

    #[test]
    fn test_cell_at_hits_cell_interiors() {
        let geometry = ten_by_ten();

        assert_eq!(geometry.cell_at(0.0, 0.0), Some(0));
        assert_eq!(geometry.cell_at(40.9, 0.0), Some(0));
        // Point in the gap after the first cell still lands on it
        assert_eq!(geometry.cell_at(41.5, 0.0), Some(0));
        assert_eq!(geometry.cell_at(42.0, 0.0), Some(1));
        assert_eq!(geometry.cell_at(43.0, 43.0), Some(11));
        assert_eq!(geometry.cell_at(418.9, 418.9), Some(99));
    }

    #[test]
    fn test_cell_at_rejects_points_outside_content() {
        let geometry = ten_by_ten();

        assert_eq!(geometry.cell_at(-1.0, 0.0), None);
        assert_eq!(geometry.cell_at(0.0, -0.1), None);
        assert_eq!(geometry.cell_at(419.0, 0.0), None);
        assert_eq!(geometry.cell_at(0.0, 1000.0), None);

        let empty = FieldGeometry::new(0, 0, 41.0, 1.0).unwrap();
        assert_eq!(empty.cell_at(0.0, 0.0), None);
    }
}
