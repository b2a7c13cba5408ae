//! 2D-Vektor-Erweiterungen für Canvas-Koordinaten.
//!
//! Als Vektortyp dient `glam::Vec2` (Copy-Werttyp, alle Operatoren liefern
//! neue Instanzen). Hier liegen nur die Umrechnungen, die glam nicht kennt.

use glam::Vec2;

/// Umrechnung zwischen Welt-Vektoren und ganzzahligen Canvas-Pixeln.
pub trait CanvasVec {
    /// Komponentenweise Abschneiden Richtung Null (kein Runden).
    fn int_pair(self) -> (i32, i32);

    /// Euklidische Norm.
    fn magnitude(self) -> f32;
}

impl CanvasVec for Vec2 {
    #[inline]
    fn int_pair(self) -> (i32, i32) {
        // `as` schneidet Richtung Null ab und saturiert bei Überlauf
        (self.x as i32, self.y as i32)
    }

    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }
}

/// Mittelpunkt zweier Punkte: `(a + b) * 0.5`.
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}
