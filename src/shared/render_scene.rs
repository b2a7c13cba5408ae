//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::Vec2;

/// Read-only Darstellung eines einzelnen Pfads.
#[derive(Debug, Clone, Default)]
pub struct PathScene {
    /// Kontrollpunkt-Positionen in Einfügereihenfolge
    pub control_points: Vec<Vec2>,
    /// Geschlossene Kurve; `None` wenn die Kurve veraltet ist (< 3 Punkte)
    pub curve: Option<Vec<Vec2>>,
    /// Ob dieser Pfad selektiert ist
    pub selected: bool,
}

/// Zeile des Hilfe-Overlays: Taste bzw. Wert und Beschreibung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: String,
    pub description: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Pfade in Anlagereihenfolge
    pub paths: Vec<PathScene>,
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Aktueller Farbton der Kurven in Grad [0, 360)
    pub hue: f32,
    /// Kinematik angehalten
    pub paused: bool,
    /// Hilfe-Overlay anzeigen
    pub show_help: bool,
    /// Inhalt des Hilfe-Overlays (leer wenn `show_help == false`)
    pub help: Vec<HelpEntry>,
    /// Radius der Kontrollpunkte
    pub point_radius: f32,
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe der Kontrollpunkte des selektierten Pfads
    pub selected_point_color: [f32; 4],
    /// Linienstärke der Kurven
    pub line_width: f32,
}

impl RenderScene {
    /// Gibt zurück, ob mindestens eine Kurve gezeichnet werden kann.
    pub fn has_curves(&self) -> bool {
        self.paths.iter().any(|p| p.curve.is_some())
    }
}
