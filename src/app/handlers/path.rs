//! Handler für Pfad-Editing: Punkte, Geschwindigkeit, Pfadverwaltung.

use crate::app::AppState;
use glam::Vec2;

/// Hängt einen Kontrollpunkt an den selektierten Pfad an.
pub fn add_point(state: &mut AppState, position: Vec2, velocity: Vec2) {
    state.paths.add_point(position, velocity);
    log::debug!(
        "Punkt ({:.1}, {:.1}) zu Pfad {} hinzugefügt ({} Punkte)",
        position.x,
        position.y,
        state.paths.selected_index() + 1,
        state.selected_point_count()
    );
}

/// Entfernt den letzten Punkt des selektierten Pfads (entfernt leere Pfade).
pub fn delete_last_point(state: &mut AppState) {
    let paths_before = state.paths.len();
    if state.paths.delete_point().is_none() {
        log::debug!("Pfad ist leer, nichts zu löschen");
        return;
    }
    if state.paths.len() < paths_before {
        log::info!("Leeren Pfad entfernt, {} Pfad(e) übrig", state.paths.len());
    }
}

/// Erhöht den Geschwindigkeits-Multiplikator des selektierten Pfads.
pub fn accelerate(state: &mut AppState) {
    let path = state.paths.selected_mut();
    path.accelerate();
    log::debug!("Geschwindigkeit: {}", path.speed_multiplier());
}

/// Verringert den Geschwindigkeits-Multiplikator des selektierten Pfads.
pub fn slow_down(state: &mut AppState) {
    let path = state.paths.selected_mut();
    path.slow_down();
    log::debug!("Geschwindigkeit: {}", path.speed_multiplier());
}

/// Legt einen neuen Pfad an, sofern die Obergrenze nicht erreicht ist.
pub fn create_path(state: &mut AppState) {
    if state.paths.create_path() {
        log::info!(
            "Neuer Pfad {} von max. {}",
            state.paths.len(),
            state.paths.max_paths()
        );
    } else {
        log::warn!(
            "Maximale Pfad-Anzahl ({}) erreicht",
            state.paths.max_paths()
        );
    }
}

/// Selektiert den nächsten Pfad (zyklisch).
pub fn select_next(state: &mut AppState) {
    state.paths.select_next();
    log::debug!("Pfad {} selektiert", state.paths.selected_index() + 1);
}

/// Verwirft alle Pfade.
pub fn reset(state: &mut AppState) {
    state.paths.reset();
    log::info!("Alle Pfade zurückgesetzt");
}
