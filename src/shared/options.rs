//! Zentrale Konfiguration für den Knot-Screensaver.
//!
//! `ScreensaverOptions` enthält alle beim Start ladbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 600.0;

// ── Pfade ───────────────────────────────────────────────────────────

/// Kurvenpunkte pro Fenster beim Start.
pub const DEFAULT_RESOLUTION: usize = 35;
/// Maximale Anzahl gleichzeitiger Pfade.
pub const MAX_PATHS: usize = 5;
/// Obere (exklusive) Grenze je Achse für zufällige Startgeschwindigkeiten.
pub const VELOCITY_MAX: f32 = 2.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Kontrollpunkte in Pixeln.
pub const POINT_RADIUS: f32 = 3.0;
/// Farbe der Kontrollpunkte (RGBA: Weiß).
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Kontrollpunkte des selektierten Pfads (RGBA: Gelb).
pub const SELECTED_POINT_COLOR: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
/// Linienstärke der Kurve in Pixeln.
pub const LINE_WIDTH: f32 = 3.0;
/// Farbton-Schritt pro Frame in Grad.
pub const HUE_STEP: f32 = 1.0;

/// Alle beim Start geladenen Screensaver-Optionen.
/// Wird als `knot_screensaver.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreensaverOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Initiale Fensterbreite
    pub canvas_width: f32,
    /// Initiale Fensterhöhe
    pub canvas_height: f32,

    // ── Pfade ───────────────────────────────────────────────────
    /// Kurvenpunkte pro Fenster beim Start
    pub default_resolution: usize,
    /// Maximale Anzahl Pfade
    pub max_paths: usize,
    /// Obergrenze je Achse für zufällige Startgeschwindigkeiten
    pub velocity_max: f32,
    /// Start im pausierten Zustand
    #[serde(default = "default_start_paused")]
    pub start_paused: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Kontrollpunkte
    pub point_radius: f32,
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe der Kontrollpunkte des selektierten Pfads
    #[serde(default = "default_selected_point_color")]
    pub selected_point_color: [f32; 4],
    /// Linienstärke der Kurve
    pub line_width: f32,
    /// Farbton-Schritt pro Frame (Grad)
    #[serde(default = "default_hue_step")]
    pub hue_step: f32,
}

impl Default for ScreensaverOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            default_resolution: DEFAULT_RESOLUTION,
            max_paths: MAX_PATHS,
            velocity_max: VELOCITY_MAX,
            start_paused: true,

            point_radius: POINT_RADIUS,
            point_color: POINT_COLOR,
            selected_point_color: SELECTED_POINT_COLOR,
            line_width: LINE_WIDTH,
            hue_step: HUE_STEP,
        }
    }
}

/// Serde-Default für `start_paused` (ältere TOML-Dateien).
fn default_start_paused() -> bool {
    true
}

fn default_selected_point_color() -> [f32; 4] {
    SELECTED_POINT_COLOR
}

fn default_hue_step() -> f32 {
    HUE_STEP
}

impl ScreensaverOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String und normalisiert sie.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("knot_screensaver"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("knot_screensaver.toml")
    }

    /// Klemmt Werte, die der Kern nicht verarbeiten kann.
    pub fn sanitized(mut self) -> Self {
        self.default_resolution = self.default_resolution.max(1);
        self.max_paths = self.max_paths.max(1);
        if !self.velocity_max.is_finite() || self.velocity_max < 0.0 {
            self.velocity_max = VELOCITY_MAX;
        }
        self.canvas_width = self.canvas_width.max(1.0);
        self.canvas_height = self.canvas_height.max(1.0);
        self
    }
}
