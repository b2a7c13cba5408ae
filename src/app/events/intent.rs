/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kontrollpunkt an Canvas-Position hinzufügen (Linksklick)
    AddPointRequested { position: glam::Vec2 },
    /// Letzten Kontrollpunkt des selektierten Pfads löschen (Rechtsklick)
    DeletePointRequested,
    /// Selektierten Pfad beschleunigen
    AccelerateRequested,
    /// Selektierten Pfad verlangsamen
    SlowDownRequested,
    /// Mehr Kurvenpunkte pro Fenster
    IncreaseResolutionRequested,
    /// Weniger Kurvenpunkte pro Fenster
    DecreaseResolutionRequested,
    /// Neuen Pfad anlegen
    NewPathRequested,
    /// Nächsten Pfad selektieren
    SelectNextPathRequested,
    /// Alle Pfade verwerfen
    ResetRequested,
    /// Animation pausieren/fortsetzen
    TogglePauseRequested,
    /// Hilfe-Overlay ein-/ausblenden
    ToggleHelpRequested,
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}
