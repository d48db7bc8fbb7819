/// Field layout constants shared across geometry and presentation
///
/// These values define the default cell metrics and zoom behavior and must be
/// synchronized between:
/// - Content size calculations (to size the scrollable area)
/// - Cell placement (to position cells within the field)
///
/// Changing these values will affect both the visual layout and the computed
/// content dimensions.

/// Default edge length of a square cell in pixels
pub const DEFAULT_CELL_DIMENSION: f32 = 41.0;

/// Default gap between adjacent cells in pixels
pub const DEFAULT_CELL_SPACING: f32 = 1.0;

/// Default lower bound for zoom before the first fit pass runs
pub const DEFAULT_MIN_ZOOM_SCALE: f32 = 1.0;

/// Default upper bound for user zoom
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 3.0;

/// Default duration of animated layout transitions in milliseconds
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Minimum cell dimension to prevent division by zero
/// Used as a fallback when host-provided cell dimensions are invalid
pub const MIN_CELL_DIMENSION: f32 = 1.0;
