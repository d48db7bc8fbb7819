/// Viewport fitting and centering
///
/// The centering controller half of the layout engine: decides the minimum
/// zoom scale at which the whole field fits the viewport, computes the
/// per-axis offset that centers content smaller than the viewport, and owns
/// the zoom phase machine plus the width cache that keeps recentering
/// idempotent.
use crate::constants::DEFAULT_MIN_ZOOM_SCALE;
use crate::geometry::FieldSize;

/// Visible window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once a real container is attached
    pub fn is_attached(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Translation applied to content smaller than the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenteringOffset {
    pub x: f32,
    pub y: f32,
}

impl CenteringOffset {
    pub const ORIGIN: CenteringOffset = CenteringOffset { x: 0.0, y: 0.0 };
}

/// Smallest zoom factor at which the entire content fits the viewport.
///
/// The proportionally wider axis is the constraint: when the content aspect
/// exceeds the viewport aspect, width decides the scale, otherwise height.
/// At the returned scale the constrained axis matches the viewport exactly
/// and the other axis lands at or inside it.
///
/// Inputs are assumed positive on both axes; the caller guards empty content
/// and detached viewports.
pub fn min_fit_scale(content: FieldSize, viewport: Viewport) -> f32 {
    let screen_aspect = viewport.width / viewport.height;
    let field_aspect = content.width / content.height;

    if field_aspect > screen_aspect {
        viewport.width / content.width
    } else {
        viewport.height / content.height
    }
}

/// Per-axis centering: content at least as large as the viewport pins to the
/// origin and scrolls; smaller content is centered in the leftover space.
pub fn centering_offset(content: FieldSize, viewport: Viewport) -> CenteringOffset {
    let x = if content.width >= viewport.width {
        0.0
    } else {
        (viewport.width - content.width) / 2.0
    };
    let y = if content.height >= viewport.height {
        0.0
    } else {
        (viewport.height - content.height) / 2.0
    };
    CenteringOffset { x, y }
}

/// Cache of the last scaled content width a centering pass ran against.
///
/// Recentering against an unchanged width is a deliberate no-op; anything
/// that moves the goalposts without changing that width (a viewport resize,
/// a rebuilt geometry) must `invalidate` first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutCache {
    last_zoomed_width: Option<f32>,
}

impl LayoutCache {
    pub fn should_recompute(&self, content_width: f32) -> bool {
        self.last_zoomed_width != Some(content_width)
    }

    pub fn mark_computed(&mut self, content_width: f32) {
        self.last_zoomed_width = Some(content_width);
    }

    pub fn invalidate(&mut self) {
        self.last_zoomed_width = None;
    }
}

/// Where the current zoom scale came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    /// No layout pass has run yet
    Unset,
    /// Scale pinned by layout (setup reset or show-entire-field)
    Fitted,
    /// Scale chosen by a user zoom gesture
    UserZoomed,
}

/// Zoom scale with its legal bounds and provenance.
///
/// Invariant: `min_scale <= scale <= max_scale` after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f32,
    min_scale: f32,
    max_scale: f32,
    phase: ZoomPhase,
}

impl ZoomState {
    pub fn new(max_scale: f32) -> Self {
        let max_scale = max_scale.max(DEFAULT_MIN_ZOOM_SCALE);
        Self {
            scale: DEFAULT_MIN_ZOOM_SCALE,
            min_scale: DEFAULT_MIN_ZOOM_SCALE,
            max_scale,
            phase: ZoomPhase::Unset,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Recompute the fit bound for new content or viewport dimensions.
    ///
    /// When the minimum rises past the stored minimum the current scale is
    /// pulled up with it, then clamped back into bounds. The first pass
    /// leaves the `Unset` phase.
    pub fn refit(&mut self, content: FieldSize, viewport: Viewport) {
        let new_min = min_fit_scale(content, viewport).min(self.max_scale);
        if self.min_scale < new_min {
            self.scale = new_min;
        }
        self.min_scale = new_min;
        self.scale = self.scale.clamp(self.min_scale, self.max_scale);
        if self.phase == ZoomPhase::Unset {
            self.phase = ZoomPhase::Fitted;
        }
    }

    /// Reset to the baseline scale of a fresh setup, clamped into bounds
    pub fn reset_to_baseline(&mut self) {
        self.scale = 1.0_f32.clamp(self.min_scale, self.max_scale);
        self.phase = ZoomPhase::Fitted;
    }

    /// Adopt the scale a user gesture ended on, clamped into bounds
    pub fn end_user_zoom(&mut self, scale: f32) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
        self.phase = ZoomPhase::UserZoomed;
    }

    /// Pin the scale to the minimum so the entire field is visible
    pub fn fit_entire_field(&mut self) {
        self.scale = self.min_scale;
        self.phase = ZoomPhase::Fitted;
    }
}
