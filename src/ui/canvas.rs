//! Canvas-Painter: Zeichnet Kontrollpunkte und geschlossene Kurven aller Pfade.

use crate::shared::knot_geometry::closed_segments;
use crate::shared::{PathScene, RenderScene};

/// Zeichnet alle Pfade einer RenderScene in den Canvas.
pub fn paint_scene(painter: &egui::Painter, canvas: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(canvas, 0.0, egui::Color32::BLACK);

    let curve_stroke = egui::Stroke::new(scene.line_width, hue_color(scene.hue));
    let point_color = rgba_to_color32(scene.point_color);
    let selected_color = rgba_to_color32(scene.selected_point_color);

    for path in &scene.paths {
        let color = if path.selected {
            selected_color
        } else {
            point_color
        };
        paint_path(painter, canvas, path, curve_stroke, color, scene.point_radius);
    }
}

/// Zeichnet einen Pfad: erst Kontrollpunkte, dann die Kurve darüber.
fn paint_path(
    painter: &egui::Painter,
    canvas: egui::Rect,
    path: &PathScene,
    curve_stroke: egui::Stroke,
    point_color: egui::Color32,
    point_radius: f32,
) {
    for &p in &path.control_points {
        painter.circle_filled(to_screen(canvas, p), point_radius, point_color);
    }

    // Veraltete Kurven (< 3 Punkte) werden nicht gezeichnet
    let Some(curve) = path.curve.as_deref() else {
        return;
    };

    for (a, b) in closed_segments(curve) {
        painter.line_segment([to_screen(canvas, a), to_screen(canvas, b)], curve_stroke);
    }
}

/// Canvas-Koordinaten → Screen-Position.
fn to_screen(canvas: egui::Rect, p: glam::Vec2) -> egui::Pos2 {
    egui::pos2(canvas.min.x + p.x, canvas.min.y + p.y)
}

/// Voll gesättigte Kurvenfarbe zum Farbton in Grad.
pub fn hue_color(hue_degrees: f32) -> egui::Color32 {
    let h = hue_degrees.rem_euclid(360.0) / 360.0;
    egui::ecolor::Hsva::new(h, 1.0, 1.0, 1.0).into()
}

/// RGBA-Optionswert [0, 1] → egui-Farbe.
pub fn rgba_to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
