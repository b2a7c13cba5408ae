//! Geglätteter Pfad: Kontrollpfad plus abgeleitete, dichte Kurvenpunkte.

use super::control_path::{ControlPath, ControlPoint};
use crate::shared::knot_geometry;
use glam::Vec2;

/// Kontrollpfad mit geschlossener, geglätteter Kurve.
///
/// Die Kurvenpunkte sind reiner Ableitungszustand: sie werden bei jedem
/// `recompute` komplett neu berechnet und nie direkt editiert.
#[derive(Debug, Clone)]
pub struct SmoothedPath {
    control: ControlPath,
    resolution: usize,
    curve_points: Vec<Vec2>,
    curve_fresh: bool,
    // Wiederverwendeter Puffer für die Positionen beim Neuberechnen
    scratch: Vec<Vec2>,
}

impl SmoothedPath {
    /// Standard-Anzahl Kurvenpunkte pro Fenster.
    pub const DEFAULT_RESOLUTION: usize = 35;
    /// Mindestanzahl Kontrollpunkte für eine Kurve.
    pub const MIN_POINTS: usize = 3;

    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            control: ControlPath::new(),
            resolution: Self::DEFAULT_RESOLUTION,
            curve_points: Vec::new(),
            curve_fresh: false,
            scratch: Vec::new(),
        }
    }

    /// Hängt einen Kontrollpunkt an. Die Kurve gilt danach als veraltet.
    pub fn add_point(&mut self, position: Vec2, velocity: Vec2) {
        self.control.add_point(position, velocity);
        self.curve_fresh = false;
    }

    /// Entfernt den zuletzt hinzugefügten Kontrollpunkt (No-op wenn leer).
    pub fn delete_point(&mut self) -> Option<ControlPoint> {
        let removed = self.control.delete_point();
        if removed.is_some() {
            self.curve_fresh = false;
        }
        removed
    }

    /// Entfernt alle Kontrollpunkte.
    pub fn clear(&mut self) {
        self.control.clear();
        self.curve_fresh = false;
    }

    pub fn accelerate(&mut self) {
        self.control.accelerate();
    }

    pub fn slow_down(&mut self) {
        self.control.slow_down();
    }

    /// Bewegt alle Kontrollpunkte um einen Frame (siehe [`ControlPath::advance`]).
    pub fn advance(&mut self, width: i32, height: i32) {
        self.control.advance(width, height);
        if !self.control.is_empty() {
            self.curve_fresh = false;
        }
    }

    /// Berechnet die dichte Kurve mit `resolution` Punkten pro Fenster neu.
    ///
    /// Bei weniger als drei Kontrollpunkten bleiben die bisherigen
    /// Kurvenpunkte unverändert stehen und die Kurve wird als veraltet
    /// markiert. Gibt zurück, ob neu berechnet wurde.
    pub fn recompute(&mut self, resolution: usize) -> bool {
        if self.control.len() < Self::MIN_POINTS {
            self.curve_fresh = false;
            return false;
        }

        self.resolution = resolution;
        self.scratch.clear();
        self.scratch.extend(self.control.positions());
        knot_geometry::knot_points_into(&self.scratch, resolution, &mut self.curve_points);
        self.curve_fresh = true;
        true
    }

    /// Zugrunde liegender Kontrollpfad.
    pub fn control(&self) -> &ControlPath {
        &self.control
    }

    /// Kontrollpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        self.control.points()
    }

    /// Dichte Kurvenpunkte der letzten erfolgreichen Berechnung.
    pub fn curve_points(&self) -> &[Vec2] {
        &self.curve_points
    }

    /// Ob `curve_points` zum aktuellen Stand der Kontrollpunkte passt.
    pub fn is_curve_fresh(&self) -> bool {
        self.curve_fresh
    }

    /// Auflösung der letzten erfolgreichen Berechnung.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn speed_multiplier(&self) -> u8 {
        self.control.speed_multiplier()
    }

    pub fn len(&self) -> usize {
        self.control.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control.is_empty()
    }
}

impl Default for SmoothedPath {
    fn default() -> Self {
        Self::new()
    }
}
