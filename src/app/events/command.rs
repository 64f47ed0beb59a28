use glam::Vec2;

use crate::core::SegmentId;
use crate::shared::OverlayOptions;

/// Commands sind die mutierenden Operationen auf dem `AppState`.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zeichenmodus ab selektiertem Endpunkt armieren
    ArmAnchoredDraw,
    /// Freien Zeichenmodus armieren
    ArmFreeDraw,
    /// Zeichenmodus verlassen, laufende Geste verwerfen
    DisarmDraw,
    /// Geste am Druckpunkt beginnen
    BeginGesture { pos: Vec2 },
    /// Provisorischen Endpunkt samt Vorschau aktualisieren
    UpdateProvisional { pos: Vec2 },
    /// Geste abschließen und bei Mindestlänge committen
    CommitGesture { pos: Vec2 },
    /// Endpunkt als Selektion übernehmen
    SelectVertex { vertex: Vec2 },
    /// Zeigerposition und Hover-Markierung aktualisieren
    UpdateHover { pos: Vec2 },
    /// Referenz-Segment umschalten
    ToggleReference { id: SegmentId },
    /// Achsen-Snap-Modifier setzen
    SetAxisSnap { held: bool },
    /// Vertex-Snap-Modus umschalten
    ToggleVertexSnap,
    /// Letzte Strecke entfernen
    Undo,
    /// Store, Undo-Stack, Referenz und Session zurücksetzen
    ClearAll,
    /// Einstellungs-Fenster ein-/ausblenden
    ToggleSettings,
    /// Geänderte Optionen übernehmen
    ApplyOptions { options: OverlayOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Kontrolliertes Beenden anfordern
    RequestExit,
}
