//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::PathSet;
use crate::shared::ScreensaverOptions;

/// Darstellungs- und Animationszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Aktueller Farbton der Kurven in Grad [0, 360)
    pub hue: f32,
    /// Kinematik angehalten (Kurven werden trotzdem neu berechnet)
    pub paused: bool,
}

impl ViewState {
    /// Erstellt den Startzustand aus den Optionen.
    pub fn new(options: &ScreensaverOptions) -> Self {
        Self {
            canvas_size: [options.canvas_width, options.canvas_height],
            hue: 0.0,
            paused: options.start_paused,
        }
    }

    /// Canvas-Grenzen als Integer für die Rand-Reflexion.
    pub fn canvas_bounds(&self) -> (i32, i32) {
        (self.canvas_size[0] as i32, self.canvas_size[1] as i32)
    }
}

/// UI-bezogener Zustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Hilfe-Overlay sichtbar
    pub show_help: bool,
}

/// Gesamter Anwendungszustand einer Screensaver-Sitzung
pub struct AppState {
    /// Alle Pfade inkl. Selektion
    pub paths: PathSet,
    /// Kurvenpunkte pro Fenster (nie kleiner als 1)
    pub resolution: usize,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start geladene Optionen
    pub options: ScreensaverOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ScreensaverOptions::default())
    }

    /// Erstellt einen neuen App-State aus geladenen Optionen.
    pub fn with_options(options: ScreensaverOptions) -> Self {
        let options = options.sanitized();
        Self {
            paths: PathSet::new(options.max_paths),
            resolution: options.default_resolution,
            view: ViewState::new(&options),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl Kontrollpunkte des selektierten Pfads (für UI-Anzeige)
    pub fn selected_point_count(&self) -> usize {
        self.paths.selected().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
