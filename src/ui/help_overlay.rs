//! Hilfe-Overlay (F1): Tastenbelegung und Sitzungswerte über dem Canvas.

use crate::shared::RenderScene;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgba_premultiplied(50, 50, 50, 230);
const BORDER: egui::Color32 = egui::Color32::from_rgb(255, 50, 50);
const TEXT: egui::Color32 = egui::Color32::from_rgb(128, 128, 255);

/// Zeichnet das Hilfe-Overlay, sofern die Szene es anfordert.
pub fn paint_help_overlay(painter: &egui::Painter, canvas: egui::Rect, scene: &RenderScene) {
    if !scene.show_help {
        return;
    }

    painter.rect_filled(canvas, 0.0, BACKGROUND);
    painter.rect_stroke(
        canvas.shrink(2.5),
        0.0,
        egui::Stroke::new(5.0, BORDER),
        egui::StrokeKind::Inside,
    );

    let key_font = egui::FontId::monospace(20.0);
    let text_font = egui::FontId::proportional(20.0);
    for (i, entry) in scene.help.iter().enumerate() {
        let y = canvas.min.y + 50.0 + 30.0 * i as f32;
        painter.text(
            egui::pos2(canvas.min.x + 100.0, y),
            egui::Align2::LEFT_TOP,
            &entry.key,
            key_font.clone(),
            TEXT,
        );
        painter.text(
            egui::pos2(canvas.min.x + 300.0, y),
            egui::Align2::LEFT_TOP,
            &entry.description,
            text_font.clone(),
            TEXT,
        );
    }
}
