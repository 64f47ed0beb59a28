//! Zentrale Konfiguration des Mess-Overlays.
//!
//! `OverlayOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius (px): Klick innerhalb dieses Radius trifft einen Endpunkt.
pub const VERTEX_PICK_RADIUS: f32 = 10.0;
/// Hit-Radius (px) für Klicks auf den Segmentkörper (Referenz-Umschaltung).
pub const SEGMENT_HIT_RADIUS: f32 = 5.0;
/// Snap-Radius (px): Vertex-Snap rastet innerhalb dieses Radius ein.
pub const SNAP_RADIUS: f32 = 15.0;
/// Mindestlänge (px) für einen Commit — darunter zählt die Geste als Klick.
pub const MIN_SEGMENT_LENGTH: f32 = 2.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius (px) der Endpunkt-Markierungen (Hover/Selektion).
pub const VERTEX_MARKER_RADIUS: f32 = 5.0;
/// Vertikaler Versatz (px) der Horizontalwinkel-Labels über dem Mittelpunkt.
pub const ANGLE_LABEL_OFFSET: f32 = 30.0;
/// Versatz (px) der Verhältnis- und Schnittwinkel-Labels.
pub const LABEL_OFFSET: f32 = 20.0;
/// Strichlänge und Lücke (px) der Fadenkreuz-Hilfslinien.
pub const CROSSHAIR_DASH: f32 = 4.0;
/// Lücke (px) zwischen den Strichen der Fadenkreuz-Hilfslinien.
pub const CROSSHAIR_GAP: f32 = 2.0;

/// Farbe normaler Segmente (RGBA: Schwarz).
pub const SEGMENT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des Referenz-Segments (RGBA: Blau).
pub const REFERENCE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe der Verhältnis-Labels (RGBA: Schwarz).
pub const RATIO_LABEL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Schnittwinkel-Labels (RGBA: Violett).
pub const INTERSECTION_LABEL_COLOR: [f32; 4] = [0.63, 0.13, 0.94, 1.0];
/// Hover-Markierung (RGBA: Gelb).
pub const HOVER_MARKER_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Markierung des selektierten Endpunkts (RGBA: Grün).
pub const SELECTED_MARKER_COLOR: [f32; 4] = [0.0, 0.8, 0.0, 1.0];
/// Fadenkreuz-Hilfslinien (RGBA: Dunkelgrau).
pub const CROSSHAIR_COLOR: [f32; 4] = [0.66, 0.66, 0.66, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Hintergrundfarbe des Overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BackgroundColor {
    /// Weiß
    White,
    /// Grau
    #[default]
    Grey,
    /// Schwarz
    Black,
}

impl BackgroundColor {
    /// Alle wählbaren Hintergrundfarben (für den Einstellungs-Dialog).
    pub const ALL: [Self; 3] = [Self::White, Self::Grey, Self::Black];

    /// RGB-Anteile der Farbe (die Deckkraft kommt aus den Optionen).
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Self::White => [1.0, 1.0, 1.0],
            Self::Grey => [0.5, 0.5, 0.5],
            Self::Black => [0.0, 0.0, 0.0],
        }
    }

    /// Anzeigename im Einstellungs-Dialog.
    pub fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Grey => "Grey",
            Self::Black => "Black",
        }
    }
}

/// Schriftfarbe der Horizontalwinkel-Labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleLabelColor {
    /// Rot
    #[default]
    Red,
    /// Grün
    Green,
    /// Blau
    Blue,
    /// Schwarz
    Black,
}

impl AngleLabelColor {
    /// Alle wählbaren Schriftfarben (für den Einstellungs-Dialog).
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Black];

    /// RGBA-Wert der Farbe.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Green => [0.0, 0.8, 0.0, 1.0],
            Self::Blue => [0.0, 0.0, 1.0, 1.0],
            Self::Black => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Anzeigename im Einstellungs-Dialog.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Black => "Black",
        }
    }
}

/// Alle zur Laufzeit änderbaren Overlay-Optionen.
/// Wird als `screen_measure.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    /// Hintergrundfarbe des Overlays
    pub background_color: BackgroundColor,
    /// Deckkraft des Hintergrunds (0 = durchsichtig, 1 = deckend)
    pub background_opacity: f32,
    /// Strichstärke der Segmente in px (1–10)
    pub stroke_width: f32,
    /// Schriftgröße der Horizontalwinkel-Labels
    pub angle_font_size: f32,
    /// Schriftgröße der Verhältnis-Labels
    pub ratio_font_size: f32,
    /// Schriftgröße der Schnittwinkel-Labels
    pub intersection_font_size: f32,
    /// Schriftfarbe der Horizontalwinkel-Labels
    pub angle_color: AngleLabelColor,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            background_color: BackgroundColor::Grey,
            background_opacity: 0.4,
            stroke_width: 2.0,
            angle_font_size: 12.0,
            ratio_font_size: 12.0,
            intersection_font_size: 12.0,
            angle_color: AngleLabelColor::Red,
        }
    }
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("screen_measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("screen_measure.toml")
    }
}
