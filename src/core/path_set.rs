//! Begrenzte Sammlung geglätteter Pfade mit einem selektierten Pfad.

use super::smoothed_path::SmoothedPath;
use super::ControlPoint;
use glam::Vec2;

/// Container für alle Pfade einer Sitzung.
///
/// Enthält immer mindestens einen Pfad; `selected` zeigt stets auf einen
/// gültigen Index.
#[derive(Debug, Clone)]
pub struct PathSet {
    paths: Vec<SmoothedPath>,
    selected: usize,
    max_paths: usize,
}

impl PathSet {
    /// Standard-Obergrenze für die Anzahl der Pfade.
    pub const DEFAULT_MAX_PATHS: usize = 5;

    /// Erstellt eine Sammlung mit genau einem leeren Pfad.
    ///
    /// `max_paths` wird auf mindestens 1 angehoben.
    pub fn new(max_paths: usize) -> Self {
        Self {
            paths: vec![SmoothedPath::new()],
            selected: 0,
            max_paths: max_paths.max(1),
        }
    }

    /// Legt einen neuen leeren Pfad an und selektiert ihn.
    ///
    /// Gibt `false` zurück, wenn die Obergrenze erreicht ist.
    pub fn create_path(&mut self) -> bool {
        if self.paths.len() >= self.max_paths {
            return false;
        }
        self.paths.push(SmoothedPath::new());
        self.selected = self.paths.len() - 1;
        true
    }

    /// Selektiert den nächsten Pfad (zyklisch).
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.paths.len();
    }

    /// Verwirft alle Pfade und beginnt mit einem leeren Pfad.
    pub fn reset(&mut self) {
        self.paths.clear();
        self.paths.push(SmoothedPath::new());
        self.selected = 0;
    }

    /// Fügt dem selektierten Pfad einen Kontrollpunkt hinzu.
    pub fn add_point(&mut self, position: Vec2, velocity: Vec2) {
        self.selected_mut().add_point(position, velocity);
    }

    /// Entfernt den letzten Punkt des selektierten Pfads.
    ///
    /// Wird der Pfad dabei leer und existieren weitere Pfade, wird er
    /// entfernt und Pfad 0 selektiert.
    pub fn delete_point(&mut self) -> Option<ControlPoint> {
        let removed = self.selected_mut().delete_point();
        if self.paths[self.selected].is_empty() && self.paths.len() > 1 {
            self.paths.remove(self.selected);
            self.selected = 0;
        }
        removed
    }

    /// Bewegt alle Pfade um einen Frame.
    pub fn advance_all(&mut self, width: i32, height: i32) {
        for path in &mut self.paths {
            path.advance(width, height);
        }
    }

    /// Berechnet die Kurven aller Pfade neu. Gibt die Anzahl frischer Kurven zurück.
    pub fn recompute_all(&mut self, resolution: usize) -> usize {
        self.paths
            .iter_mut()
            .map(|path| path.recompute(resolution))
            .filter(|&fresh| fresh)
            .count()
    }

    pub fn selected(&self) -> &SmoothedPath {
        &self.paths[self.selected]
    }

    pub fn selected_mut(&mut self) -> &mut SmoothedPath {
        &mut self.paths[self.selected]
    }

    /// Index des selektierten Pfads (0-basiert).
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Immer `false`, es existiert stets mindestens ein Pfad.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SmoothedPath> {
        self.paths.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SmoothedPath> {
        self.paths.iter_mut()
    }
}

impl Default for PathSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PATHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_single_selected_path() {
        let set = PathSet::default();
        assert_eq!(set.len(), 1);
        assert_eq!(set.selected_index(), 0);
        assert_eq!(set.max_paths(), 5);
    }

    #[test]
    fn test_create_path_respects_limit_and_selects() {
        let mut set = PathSet::new(3);
        assert!(set.create_path());
        assert_eq!(set.selected_index(), 1);
        assert!(set.create_path());
        assert_eq!(set.selected_index(), 2);
        assert!(!set.create_path());
        assert_eq!(set.len(), 3);
        assert_eq!(set.selected_index(), 2);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut set = PathSet::new(5);
        set.create_path();
        set.create_path();
        assert_eq!(set.selected_index(), 2);
        set.select_next();
        assert_eq!(set.selected_index(), 0);
        set.select_next();
        assert_eq!(set.selected_index(), 1);
    }

    #[test]
    fn test_delete_last_point_removes_empty_path() {
        let mut set = PathSet::new(5);
        set.add_point(Vec2::new(1.0, 1.0), Vec2::ZERO);
        set.create_path();
        set.add_point(Vec2::new(2.0, 2.0), Vec2::ZERO);

        let removed = set.delete_point().expect("Punkt sollte entfernt werden");
        assert_eq!(removed.position, Vec2::new(2.0, 2.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.selected_index(), 0);
        assert_eq!(set.selected().len(), 1);
    }

    #[test]
    fn test_delete_keeps_last_remaining_path() {
        let mut set = PathSet::new(5);
        set.add_point(Vec2::ONE, Vec2::ZERO);
        set.delete_point();
        set.delete_point();
        assert_eq!(set.len(), 1);
        assert!(set.selected().is_empty());
    }

    #[test]
    fn test_reset_restores_single_path() {
        let mut set = PathSet::new(5);
        set.create_path();
        set.create_path();
        set.add_point(Vec2::ONE, Vec2::ZERO);
        set.reset();
        assert_eq!(set.len(), 1);
        assert_eq!(set.selected_index(), 0);
        assert!(set.selected().is_empty());
    }

    #[test]
    fn test_recompute_all_counts_fresh_curves() {
        let mut set = PathSet::new(5);
        for p in [Vec2::ZERO, Vec2::X * 10.0, Vec2::Y * 10.0] {
            set.add_point(p, Vec2::ZERO);
        }
        set.create_path();
        set.add_point(Vec2::ONE, Vec2::ZERO);

        assert_eq!(set.recompute_all(5), 1);
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let mut set = PathSet::new(0);
        assert_eq!(set.max_paths(), 1);
        assert!(!set.create_path());
    }
}
