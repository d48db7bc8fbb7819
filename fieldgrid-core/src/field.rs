/// Field presentation controller
///
/// Orchestrates the geometry engine and the viewport controller for a host
/// UI: field setup with a same-dimensions fast path, dirty-cell tracking,
/// tap dispatch, zoom/recenter handling, and scheduling of animated layout
/// transitions. All calls arrive on the host's event loop; the controller is
/// not reentrant.
use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info};

use crate::config::Config;
use crate::error::FieldError;
use crate::geometry::{FieldGeometry, FieldSize};
use crate::host::{CellSurface, CellTapHandler, GridHost};
use crate::transition::{LayoutTransition, TransitionScheduler};
use crate::viewport::{centering_offset, CenteringOffset, LayoutCache, Viewport, ZoomPhase, ZoomState};

pub struct FieldView {
    cell_dimension: f32,
    cell_spacing: f32,
    transition_duration: Duration,

    rows: i32,
    columns: i32,
    geometry: Option<FieldGeometry>,
    field_size: FieldSize,
    dirty_cells: HashSet<usize>,

    viewport: Viewport,
    zoom: ZoomState,
    cache: LayoutCache,
    centering: CenteringOffset,

    scheduler: TransitionScheduler,
    surface: Option<Box<dyn CellSurface>>,
    tap_handler: Option<CellTapHandler>,
}

impl FieldView {
    pub fn new(config: &Config) -> Self {
        Self {
            cell_dimension: config.field.cell_dimension,
            cell_spacing: config.field.cell_spacing,
            transition_duration: Duration::from_millis(
                config.animation.transition_duration_ms as u64,
            ),
            rows: 0,
            columns: 0,
            geometry: None,
            field_size: FieldSize::ZERO,
            dirty_cells: HashSet::new(),
            viewport: Viewport::default(),
            zoom: ZoomState::new(config.zoom.max_scale),
            cache: LayoutCache::default(),
            centering: CenteringOffset::ORIGIN,
            scheduler: TransitionScheduler::new(),
            surface: None,
            tap_handler: None,
        }
    }

    /// Handle to the transition hand-off point, for the host's event loop
    pub fn scheduler(&self) -> TransitionScheduler {
        self.scheduler.clone()
    }

    pub fn attach_surface(&mut self, surface: Box<dyn CellSurface>) {
        self.surface = Some(surface);
    }

    pub fn set_tap_handler(&mut self, handler: CellTapHandler) {
        self.tap_handler = Some(handler);
    }

    pub fn geometry(&self) -> Option<&FieldGeometry> {
        self.geometry.as_ref()
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn zoom_scale(&self) -> f32 {
        self.zoom.scale()
    }

    pub fn zoom_phase(&self) -> ZoomPhase {
        self.zoom.phase()
    }

    pub fn centering(&self) -> CenteringOffset {
        self.centering
    }

    /// Set up the field for the given dimensions.
    ///
    /// Matching dimensions take the cheap path: only cells marked dirty
    /// since the last pass are refreshed. Either path ends by scheduling a
    /// transition back to the baseline scale. Returns the content size, or
    /// `None` when no surface is attached yet and the call was skipped.
    pub fn setup_field(&mut self, rows: i32, columns: i32) -> Result<Option<FieldSize>, FieldError> {
        // Validate first; a rejected setup leaves prior state untouched
        let geometry = FieldGeometry::new(rows, columns, self.cell_dimension, self.cell_spacing)?;

        if self.surface.is_none() {
            debug!("setup_field skipped: no surface attached");
            return Ok(None);
        }

        if rows == self.rows && columns == self.columns && self.geometry.is_some() {
            debug!(
                "Field dimensions unchanged, refreshing {} dirty cells",
                self.dirty_cells.len()
            );
            self.refresh_dirty_cells();
            self.zoom.reset_to_baseline();
            self.recenter();
            self.schedule_layout_transition();
            return Ok(Some(self.field_size));
        }

        self.rows = rows;
        self.columns = columns;
        self.dirty_cells.clear();
        self.field_size = geometry.content_size();
        self.geometry = Some(geometry);

        info!(
            "Field set up: {}x{} cells, content {:.0}x{:.0}",
            rows, columns, self.field_size.width, self.field_size.height
        );

        if self.refit_zoom() {
            self.zoom.reset_to_baseline();
        }
        self.cache.invalidate();
        self.recenter();

        if let Some(surface) = self.surface.as_mut() {
            surface.set_hidden(false);
            surface.reload_all();
        }
        self.schedule_layout_transition();

        Ok(Some(self.field_size))
    }

    /// Mark cells dirty and refresh them now.
    ///
    /// Indices are unioned into the dirty set so a later same-dimensions
    /// setup refreshes them again; out-of-range indices are dropped.
    pub fn update_cells(&mut self, indices: &[usize]) {
        let cell_count = self.geometry.as_ref().map_or(0, FieldGeometry::cell_count);
        let mut fresh: Vec<usize> = indices.iter().copied().filter(|&i| i < cell_count).collect();
        fresh.sort_unstable();
        fresh.dedup();
        if fresh.is_empty() {
            return;
        }

        self.dirty_cells.extend(fresh.iter().copied());
        if let Some(surface) = self.surface.as_mut() {
            surface.reload_cells(&fresh);
        }
    }

    /// Zoom out to the minimum scale and recenter, as one transition
    pub fn show_entire_field(&mut self) {
        if self.geometry.is_none() || !self.viewport.is_attached() {
            debug!("show_entire_field skipped: field not presented yet");
            return;
        }
        self.zoom.fit_entire_field();
        self.recenter();
        self.schedule_layout_transition();
    }

    /// Adopt a new viewport size.
    ///
    /// Invalidates the centering cache even when the scaled content width is
    /// unchanged: the offset depends on the viewport as much as on the
    /// content.
    pub fn viewport_resized(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if self.geometry.is_none() {
            return;
        }
        if !self.refit_zoom() {
            return;
        }
        self.cache.invalidate();
        self.recenter();
        self.schedule_layout_transition();
    }

    /// Adopt the scale a pinch gesture ended on and recenter.
    ///
    /// The gesture already applied the zoom visually, so a transition is
    /// scheduled only when the centering actually moved.
    pub fn zoom_ended(&mut self, scale: f32) {
        if self.geometry.is_none() || !self.viewport.is_attached() {
            return;
        }
        self.zoom.end_user_zoom(scale);
        if self.recenter() {
            self.schedule_layout_transition();
        }
    }

    /// Deliver a tapped cell to the registered handler
    pub fn cell_tapped(&mut self, index: usize) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        if index >= geometry.cell_count() {
            debug!("Tap on out-of-range cell {} dropped", index);
            return;
        }
        if let Some(handler) = self.tap_handler.as_mut() {
            handler(index);
        }
    }

    /// Hit-test a content-space point and deliver the cell under it
    pub fn tap_at(&mut self, x: f32, y: f32) {
        let Some(index) = self.geometry.as_ref().and_then(|g| g.cell_at(x, y)) else {
            return;
        };
        self.cell_tapped(index);
    }

    /// Reveal the surface and refresh the drained dirty set, in index order
    fn refresh_dirty_cells(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.set_hidden(false);
        if self.dirty_cells.is_empty() {
            return;
        }
        let mut dirty: Vec<usize> = self.dirty_cells.drain().collect();
        dirty.sort_unstable();
        surface.reload_cells(&dirty);
    }

    /// Recompute the zoom fit bound; false when the field cannot be fitted
    /// yet (detached viewport or empty content)
    fn refit_zoom(&mut self) -> bool {
        if !self.viewport.is_attached() || self.field_size.is_empty() {
            debug!("Zoom refit skipped: viewport or field not ready");
            return false;
        }
        self.zoom.refit(self.field_size, self.viewport);
        true
    }

    /// Recenter the scaled content inside the viewport, through the width
    /// cache guard. Returns whether the offset was recomputed.
    fn recenter(&mut self) -> bool {
        if !self.viewport.is_attached() {
            return false;
        }
        let scaled = self.field_size.scaled(self.zoom.scale());
        if !self.cache.should_recompute(scaled.width) {
            return false;
        }
        self.cache.mark_computed(scaled.width);
        self.centering = centering_offset(scaled, self.viewport);
        debug!(
            "Recentered: offset ({:.1}, {:.1}) for scaled content {:.0}x{:.0}",
            self.centering.x, self.centering.y, scaled.width, scaled.height
        );
        true
    }

    fn schedule_layout_transition(&mut self) {
        self.scheduler.schedule(LayoutTransition {
            offset: self.centering,
            scale: self.zoom.scale(),
            duration: self.transition_duration,
        });
    }
}

impl GridHost for FieldView {
    fn row_count(&self) -> i32 {
        self.rows
    }

    fn column_count(&self) -> i32 {
        self.columns
    }

    fn cell_dimension(&self) -> f32 {
        self.cell_dimension
    }

    fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
