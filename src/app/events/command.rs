/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt mit fester Startgeschwindigkeit anhängen
    AddPoint {
        position: glam::Vec2,
        velocity: glam::Vec2,
    },
    /// Letzten Kontrollpunkt des selektierten Pfads entfernen
    DeleteLastPoint,
    /// Geschwindigkeits-Multiplikator des selektierten Pfads erhöhen
    AcceleratePath,
    /// Geschwindigkeits-Multiplikator des selektierten Pfads verringern
    SlowDownPath,
    /// Auflösung um `delta` ändern (nie unter 1)
    AdjustResolution { delta: i32 },
    /// Neuen Pfad anlegen und selektieren
    CreatePath,
    /// Nächsten Pfad selektieren
    SelectNextPath,
    /// Alle Pfade verwerfen
    ResetPaths,
    /// Pause umschalten
    TogglePause,
    /// Hilfe-Overlay umschalten
    ToggleHelp,
    /// Canvas-Größe setzen
    SetCanvasSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}
