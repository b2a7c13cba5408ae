//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(if state.view.paused {
                "Pausiert (P)"
            } else {
                "Läuft (P)"
            });

            ui.separator();

            let path = state.paths.selected();
            ui.label(format!(
                "Pfad {}/{} | Punkte: {} | Geschwindigkeit: {}",
                state.paths.selected_index() + 1,
                state.paths.len(),
                path.len(),
                path.speed_multiplier()
            ));

            ui.separator();

            ui.label(format!("Kurvenpunkte: {}", state.resolution));

            ui.separator();

            ui.label(format!(
                "Canvas: {:.0}x{:.0}",
                state.view.canvas_size[0], state.view.canvas_size[1]
            ));

            ui.separator();
            ui.label("F1: Hilfe");
        });
    });
}
