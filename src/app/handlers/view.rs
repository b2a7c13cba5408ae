//! Handler für Auflösung, Pause, Hilfe und Canvas.

use crate::app::AppState;

/// Ändert die Auflösung um `delta`, nie unter 1.
pub fn adjust_resolution(state: &mut AppState, delta: i32) {
    let current = state.resolution as i64;
    state.resolution = (current + i64::from(delta)).max(1) as usize;
    log::debug!("Auflösung: {} Punkte pro Fenster", state.resolution);
}

/// Schaltet die Kinematik an/aus.
pub fn toggle_pause(state: &mut AppState) {
    state.view.paused = !state.view.paused;
    log::info!(
        "Animation {}",
        if state.view.paused {
            "pausiert"
        } else {
            "läuft"
        }
    );
}

/// Blendet das Hilfe-Overlay ein/aus.
pub fn toggle_help(state: &mut AppState) {
    state.ui.show_help = !state.ui.show_help;
}

/// Übernimmt eine neue Canvas-Größe. Ungültige Größen werden ignoriert.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) -> anyhow::Result<()> {
    if !size.iter().all(|v| v.is_finite() && *v >= 0.0) {
        anyhow::bail!("Ungültige Canvas-Größe: {:?}", size);
    }
    state.view.canvas_size = size;
    log::debug!("Canvas-Größe: {}x{}", size[0], size[1]);
    Ok(())
}

/// Fordert das Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
