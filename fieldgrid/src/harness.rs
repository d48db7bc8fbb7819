use anyhow::Result;
use fieldgrid_core::{CellSurface, Config, FieldView, TransitionScheduler, Viewport};
use log::info;
use parking_lot::Mutex;
use std::sync::Arc;

/// Display surface stand-in: logs what a toolkit grid view would repaint
struct LoggingSurface;

impl CellSurface for LoggingSurface {
    fn set_hidden(&mut self, hidden: bool) {
        info!(
            "Surface {}",
            if hidden { "hidden" } else { "revealed" }
        );
    }

    fn reload_all(&mut self) {
        info!("Surface reload: all cells");
    }

    fn reload_cells(&mut self, indices: &[usize]) {
        info!("Surface reload: cells {:?}", indices);
    }
}

/// Drive a scripted session against the controller the way a GUI event loop
/// would: one event per turn, with the pending transition applied at the end
/// of the turn that scheduled it.
pub fn run(config: &Config) -> Result<()> {
    let field = Arc::new(Mutex::new(FieldView::new(config)));
    let scheduler = field.lock().scheduler();

    field
        .lock()
        .set_tap_handler(Box::new(|index| info!("Cell {} tapped", index)));
    field.lock().attach_surface(Box::new(LoggingSurface));

    field.lock().viewport_resized(Viewport::new(320.0, 480.0));
    end_of_turn(&scheduler);

    if let Some(size) = field.lock().setup_field(10, 10)? {
        info!("Field ready: content {:.0}x{:.0}", size.width, size.height);
    }
    end_of_turn(&scheduler);

    // A couple of reveals, then a same-dimensions reset refreshing only them
    field.lock().tap_at(64.0, 22.0);
    field.lock().update_cells(&[12, 13, 22]);
    end_of_turn(&scheduler);

    field.lock().setup_field(10, 10)?;
    end_of_turn(&scheduler);

    field.lock().viewport_resized(Viewport::new(480.0, 480.0));
    end_of_turn(&scheduler);

    field.lock().zoom_ended(2.0);
    end_of_turn(&scheduler);

    field.lock().show_entire_field();
    end_of_turn(&scheduler);

    let view = field.lock();
    info!(
        "Session done at zoom {:.3}, centering ({:.1}, {:.1})",
        view.zoom_scale(),
        view.centering().x,
        view.centering().y
    );

    Ok(())
}

/// Apply whatever this turn scheduled, fully, then report it done
fn end_of_turn(scheduler: &TransitionScheduler) {
    if let Some(scheduled) = scheduler.take() {
        let transition = scheduled.transition;
        info!(
            "Applying transition: scale {:.3}, offset ({:.1}, {:.1}) over {:?}",
            transition.scale, transition.offset.x, transition.offset.y, transition.duration
        );
        scheduled.finish();
    }
}
