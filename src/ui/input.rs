//! Canvas-Input-Handling: Maus-Klicks, Tasten und Größenänderung → AppIntent.

use super::keyboard;
use crate::app::AppIntent;

/// Rechnet eine Screen-Position in Canvas-Koordinaten (Pixel ab Canvas-Ecke) um.
pub fn screen_pos_to_canvas(pointer_pos: egui::Pos2, canvas: egui::Rect) -> glam::Vec2 {
    let local = pointer_pos - canvas.min;
    glam::Vec2::new(local.x, local.y)
}

/// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
///
/// Reihenfolge: Größenänderung zuerst, damit Klicks und Kinematik im selben
/// Frame bereits gegen die neue Canvas-Größe laufen.
pub fn collect_canvas_events(
    ui: &egui::Ui,
    response: &egui::Response,
    canvas: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = vec![AppIntent::CanvasResized {
        size: [canvas.width(), canvas.height()],
    }];

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::AddPointRequested {
                position: screen_pos_to_canvas(pointer_pos, canvas),
            });
        }
    }

    if response.clicked_by(egui::PointerButton::Secondary) {
        events.push(AppIntent::DeletePointRequested);
    }

    events.extend(keyboard::collect_keyboard_intents(ui));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_pos_is_relative_to_canvas_corner() {
        let canvas = egui::Rect::from_min_size(egui::pos2(10.0, 30.0), egui::vec2(800.0, 600.0));
        let pos = screen_pos_to_canvas(egui::pos2(110.0, 80.0), canvas);
        assert_eq!(pos, glam::Vec2::new(100.0, 50.0));
    }
}
