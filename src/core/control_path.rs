//! Kontrollpfad: geordnete Kontrollpunkte mit eigener Drift-Geschwindigkeit.

use super::vector::CanvasVec;
use glam::Vec2;

/// Einzelner Kontrollpunkt (Position + unskalierte Bewegungsrichtung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in Canvas-Koordinaten (Pixel)
    pub position: Vec2,
    /// Bewegungsrichtung, noch nicht mit dem Geschwindigkeits-Multiplikator skaliert
    pub velocity: Vec2,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }
}

/// Geordnete Folge von Kontrollpunkten inkl. Kinematik.
///
/// Position und Geschwindigkeit liegen als Paar in einem `Vec`, damit die
/// Zuordnung bei Einfügen/Löschen strukturell erhalten bleibt.
#[derive(Debug, Clone)]
pub struct ControlPath {
    points: Vec<ControlPoint>,
    speed_multiplier: u8,
}

impl ControlPath {
    /// Untere Grenze des Geschwindigkeits-Multiplikators.
    pub const SPEED_MIN: u8 = 1;
    /// Obere Grenze des Geschwindigkeits-Multiplikators.
    pub const SPEED_MAX: u8 = 5;
    /// Startwert des Geschwindigkeits-Multiplikators.
    pub const SPEED_DEFAULT: u8 = 2;
    /// Schrittweite pro Frame je Multiplikator-Stufe.
    const STEP_SCALE: f32 = 0.5;

    /// Erstellt einen leeren Pfad mit Standard-Multiplikator.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            speed_multiplier: Self::SPEED_DEFAULT,
        }
    }

    /// Hängt einen Kontrollpunkt am Ende an.
    pub fn add_point(&mut self, position: Vec2, velocity: Vec2) {
        self.points.push(ControlPoint::new(position, velocity));
    }

    /// Entfernt den zuletzt hinzugefügten Punkt (LIFO). Leerer Pfad: No-op.
    ///
    /// Gibt den entfernten Punkt zurück.
    pub fn delete_point(&mut self) -> Option<ControlPoint> {
        self.points.pop()
    }

    /// Entfernt alle Kontrollpunkte. Der Multiplikator bleibt erhalten.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Erhöht den Multiplikator um eins (geklemmt auf `SPEED_MAX`).
    pub fn accelerate(&mut self) {
        self.speed_multiplier = (self.speed_multiplier + 1).min(Self::SPEED_MAX);
    }

    /// Verringert den Multiplikator um eins (geklemmt auf `SPEED_MIN`).
    pub fn slow_down(&mut self) {
        self.speed_multiplier = self
            .speed_multiplier
            .saturating_sub(1)
            .max(Self::SPEED_MIN);
    }

    /// Bewegt alle Punkte um einen Frame und reflektiert an den Canvas-Rändern.
    ///
    /// Die Randprüfung erfolgt nach der Bewegung auf der abgeschnittenen
    /// Integer-Position; X und Y werden unabhängig geprüft (Ecken-Abprall
    /// kehrt beide Achsen im selben Schritt um).
    pub fn advance(&mut self, width: i32, height: i32) {
        let step = Self::STEP_SCALE * f32::from(self.speed_multiplier);
        for point in &mut self.points {
            point.position += point.velocity * step;

            let (x, y) = point.position.int_pair();
            if x > width || x < 0 {
                point.velocity.x = -point.velocity.x;
            }
            if y > height || y < 0 {
                point.velocity.y = -point.velocity.y;
            }
        }
    }

    /// Aktueller Geschwindigkeits-Multiplikator in `[SPEED_MIN, SPEED_MAX]`.
    pub fn speed_multiplier(&self) -> u8 {
        self.speed_multiplier
    }

    /// Alle Kontrollpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Iterator über die Positionen in Einfügereihenfolge.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ControlPath {
    fn default() -> Self {
        Self::new()
    }
}
