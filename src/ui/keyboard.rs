//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Sitzung: Hilfe, Neustart, Pause, Beenden
    let (key_f1, key_r, key_p, key_escape) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::F1),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_f1 {
        events.push(AppIntent::ToggleHelpRequested);
    }
    if key_r {
        events.push(AppIntent::ResetRequested);
    }
    if key_p {
        events.push(AppIntent::TogglePauseRequested);
    }
    if key_escape {
        events.push(AppIntent::ExitRequested);
    }

    // Pfade: Neu, Wechseln, Geschwindigkeit, Auflösung
    let (key_n, key_tab, key_w, key_s, key_plus, key_minus) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::Tab),
            i.key_pressed(egui::Key::W),
            i.key_pressed(egui::Key::S),
            // "=" liegt auf US-Layouts auf derselben Taste wie "+"
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if key_n {
        events.push(AppIntent::NewPathRequested);
    }
    if key_tab {
        events.push(AppIntent::SelectNextPathRequested);
    }
    if key_w {
        events.push(AppIntent::AccelerateRequested);
    }
    if key_s {
        events.push(AppIntent::SlowDownRequested);
    }
    if key_plus {
        events.push(AppIntent::IncreaseResolutionRequested);
    }
    if key_minus {
        events.push(AppIntent::DecreaseResolutionRequested);
    }

    events
}
