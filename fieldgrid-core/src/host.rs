use crate::viewport::Viewport;

/// Layout parameters served synchronously to the geometry engine.
///
/// Whoever hosts the grid answers these queries at layout time; the engine
/// never caches them across layout passes.
pub trait GridHost {
    fn row_count(&self) -> i32;
    fn column_count(&self) -> i32;
    fn cell_dimension(&self) -> f32;
    fn cell_spacing(&self) -> f32;
    /// Visible window the field is presented in. A zero-sized viewport means
    /// no container is attached yet.
    fn viewport(&self) -> Viewport;
}

/// Cell display surface driven by the field controller.
///
/// Each call applies fully before returning; any deferral or batching is the
/// host's business, not the controller's.
pub trait CellSurface {
    /// Show or hide the whole surface
    fn set_hidden(&mut self, hidden: bool);
    /// Refresh every cell
    fn reload_all(&mut self);
    /// Refresh exactly the given cells, in the given order
    fn reload_cells(&mut self, indices: &[usize]);
}

/// Handler invoked with the linear index of a tapped cell
pub type CellTapHandler = Box<dyn FnMut(usize)>;
