pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod host;
pub mod transition;
pub mod viewport;

pub use config::Config;
pub use error::FieldError;
pub use field::FieldView;
pub use geometry::{CellRect, FieldGeometry, FieldSize};
pub use host::{CellSurface, CellTapHandler, GridHost};
pub use transition::{LayoutTransition, ScheduledTransition, TransitionScheduler};
pub use viewport::{
    centering_offset, min_fit_scale, CenteringOffset, LayoutCache, Viewport, ZoomPhase, ZoomState,
};
