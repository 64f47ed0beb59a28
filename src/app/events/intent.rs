use glam::Vec2;

use crate::shared::OverlayOptions;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: Vec2 },
    /// Zeichnen-ab-Vertex-Taste gedrückt (`d`)
    AnchoredDrawPressed,
    /// Frei-Zeichnen-Taste gedrückt (`f`)
    FreeDrawPressed,
    /// Zeichnen-Taste losgelassen (`d` oder `f`)
    DrawKeyReleased,
    /// Achsen-Snap-Modifier (Shift) gehalten bzw. losgelassen
    AxisSnapChanged { held: bool },
    /// Vertex-Snap-Modus umschalten (`s`)
    VertexSnapToggled,
    /// Letzte Strecke rückgängig machen (Ctrl+Z)
    UndoRequested,
    /// Alle Strecken löschen (Ctrl+R)
    ClearAllRequested,
    /// Anwendung beenden (Escape / Ctrl+W)
    ExitRequested,
    /// Einstellungs-Fenster ein-/ausblenden (`i`)
    SettingsToggled,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: OverlayOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
