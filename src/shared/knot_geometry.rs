//! Reine Geometrie-Funktionen für geschlossene Knoten-Kurven.
//!
//! Layer-neutral: wird von `core::smoothed_path`, dem Render-Scene-Builder
//! und den Benchmarks genutzt, ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::vector::midpoint;
use glam::Vec2;

/// Wiederholte lineare Interpolation über eine Ankerfolge bei Parameter `alpha`.
///
/// Links-nach-rechts-Faltung von
/// `blend(P, 0) = P[0]`, `blend(P, d) = P[d]·α + blend(P, d-1)·(1-α)`.
/// Liefert `None` für eine leere Ankerfolge.
pub fn blend(anchors: &[Vec2], alpha: f32) -> Option<Vec2> {
    let (&first, rest) = anchors.split_first()?;
    Some(
        rest.iter()
            .fold(first, |acc, &p| p * alpha + acc * (1.0 - alpha)),
    )
}

/// Ankerpunkte des Fensters `window` über einem geschlossenen Punktring.
///
/// Fenster 0 beginnt beim vorletzten Punkt, d.h. die Indizes
/// `(k-2, k-1, k) mod n` bilden Mittelpunkt, Mitte und Mittelpunkt.
/// Voraussetzung: `points` ist nicht leer.
pub fn window_anchors(points: &[Vec2], window: usize) -> [Vec2; 3] {
    let n = points.len();
    let a = points[(window + 2 * n - 2) % n];
    let b = points[(window + 2 * n - 1) % n];
    let c = points[window % n];
    [midpoint(a, b), b, midpoint(b, c)]
}

/// Dichte Punktfolge einer geschlossenen Knoten-Kurve durch `points`.
///
/// Pro Kontrollpunkt ein Fenster mit `samples_per_window` Punkten bei
/// `alpha = j / samples_per_window`. Ergebnis hat `n * samples_per_window`
/// Punkte. Weniger als 3 Punkte: leere Folge.
pub fn knot_points(points: &[Vec2], samples_per_window: usize) -> Vec<Vec2> {
    let mut out = Vec::new();
    knot_points_into(points, samples_per_window, &mut out);
    out
}

/// Wie [`knot_points`], schreibt aber in einen bestehenden Puffer (wird geleert).
pub fn knot_points_into(points: &[Vec2], samples_per_window: usize, out: &mut Vec<Vec2>) {
    out.clear();
    let n = points.len();
    if n < 3 {
        return;
    }
    out.reserve(n * samples_per_window);

    for window in 0..n {
        let anchors = window_anchors(points, window);
        for j in 0..samples_per_window {
            let alpha = j as f32 / samples_per_window as f32;
            // Ankerfolge ist nie leer
            if let Some(p) = blend(&anchors, alpha) {
                out.push(p);
            }
        }
    }
}

/// Segmente einer geschlossenen Polyline: `i → i+1` und zuletzt `last → first`.
pub fn closed_segments(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| (points[i], points[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_blend_endpoints_exact() {
        let anchors = [
            Vec2::new(1.5, -2.0),
            Vec2::new(7.0, 3.25),
            Vec2::new(-4.0, 9.0),
        ];
        assert_eq!(blend(&anchors, 0.0), Some(anchors[0]));
        assert_eq!(blend(&anchors, 1.0), Some(anchors[2]));
    }

    #[test]
    fn test_blend_matches_recursive_definition() {
        let p = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 8.0), Vec2::new(8.0, 0.0)];
        let a = 0.25;
        // P2·a + (P1·a + P0·(1-a))·(1-a)
        let expected = p[2] * a + (p[1] * a + p[0] * (1.0 - a)) * (1.0 - a);
        let got = blend(&p, a).unwrap();
        assert_relative_eq!(got.x, expected.x);
        assert_relative_eq!(got.y, expected.y);
    }

    #[test]
    fn test_blend_single_and_empty() {
        assert_eq!(blend(&[Vec2::ONE], 0.7), Some(Vec2::ONE));
        assert_eq!(blend(&[], 0.5), None);
    }

    #[test]
    fn test_window_anchors_wrap_from_second_to_last() {
        let pts = square();
        let [a0, a1, a2] = window_anchors(&pts, 0);
        assert_eq!(a0, Vec2::new(5.0, 10.0));
        assert_eq!(a1, Vec2::new(0.0, 10.0));
        assert_eq!(a2, Vec2::new(0.0, 5.0));

        let [b0, b1, b2] = window_anchors(&pts, 3);
        assert_eq!(b0, Vec2::new(10.0, 5.0));
        assert_eq!(b1, Vec2::new(10.0, 10.0));
        assert_eq!(b2, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_knot_points_count_and_first_point() {
        let pts = square();
        let curve = knot_points(&pts, 4);
        assert_eq!(curve.len(), 16);
        assert_eq!(curve[0], Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_knot_points_three_points() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(6.0, 0.0), Vec2::new(3.0, 6.0)];
        let curve = knot_points(&pts, 35);
        assert_eq!(curve.len(), 3 * 35);
    }

    #[test]
    fn test_knot_points_too_few_points_is_empty() {
        assert!(knot_points(&[Vec2::ZERO, Vec2::ONE], 10).is_empty());
        assert!(knot_points(&[], 10).is_empty());
    }

    #[test]
    fn test_consecutive_windows_meet_at_midpoints() {
        let pts = square();
        let curve = knot_points(&pts, 8);
        // Fenster k startet am Mittelpunkt, an dem Fenster k-1 endet
        for window in 1..pts.len() {
            let start = curve[window * 8];
            let prev = window_anchors(&pts, window - 1)[2];
            assert_eq!(start, prev);
        }
    }

    #[test]
    fn test_closed_segments_wrap_to_first() {
        let pts = square();
        let segs: Vec<_> = closed_segments(&pts).collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], (pts[3], pts[0]));
        assert_eq!(closed_segments(&pts[..1]).count(), 0);
    }
}
