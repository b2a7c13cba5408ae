//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{HelpEntry, PathScene, RenderScene};

/// Tastenbelegung für das Hilfe-Overlay.
const KEY_BINDINGS: &[(&str, &str)] = &[
    ("F1", "Hilfe anzeigen"),
    ("R", "Neustart"),
    ("P", "Pause/Weiter"),
    ("N", "Neuen Pfad anlegen"),
    ("Tab", "Pfad wechseln"),
    ("+", "Mehr Kurvenpunkte"),
    ("-", "Weniger Kurvenpunkte"),
    ("Linksklick", "Punkt hinzufügen"),
    ("Rechtsklick", "Letzten Punkt löschen"),
    ("W", "Pfad beschleunigen"),
    ("S", "Pfad verlangsamen"),
    ("Esc", "Beenden"),
];

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let selected = state.paths.selected_index();
    let paths = state
        .paths
        .iter()
        .enumerate()
        .map(|(i, path)| PathScene {
            control_points: path.control().positions().collect(),
            curve: path
                .is_curve_fresh()
                .then(|| path.curve_points().to_vec()),
            selected: i == selected,
        })
        .collect();

    let help = if state.ui.show_help {
        help_entries(state)
    } else {
        Vec::new()
    };

    RenderScene {
        paths,
        canvas_size: state.view.canvas_size,
        hue: state.view.hue,
        paused: state.view.paused,
        show_help: state.ui.show_help,
        help,
        point_radius: state.options.point_radius,
        point_color: state.options.point_color,
        selected_point_color: state.options.selected_point_color,
        line_width: state.options.line_width,
    }
}

/// Inhalt des Hilfe-Overlays: Tastenbelegung, Leerzeile, Sitzungswerte.
fn help_entries(state: &AppState) -> Vec<HelpEntry> {
    let entry = |key: String, description: &str| HelpEntry {
        key,
        description: description.to_owned(),
    };

    let mut entries: Vec<HelpEntry> = KEY_BINDINGS
        .iter()
        .map(|&(key, description)| entry(key.to_owned(), description))
        .collect();

    entries.push(entry(String::new(), ""));
    entries.push(entry(state.resolution.to_string(), "Kurvenpunkte pro Fenster"));
    entries.push(entry(state.paths.len().to_string(), "Anzahl Pfade"));
    entries.push(entry(
        (state.paths.selected_index() + 1).to_string(),
        "Selektierter Pfad",
    ));
    entries.push(entry(
        state.paths.max_paths().to_string(),
        "Maximale Anzahl Pfade",
    ));
    entries
}
