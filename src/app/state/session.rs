use glam::Vec2;

/// Interaktionszustand der laufenden Sitzung.
///
/// Explizites Session-Objekt statt globaler Variablen: Selektion, Hover
/// und die Modifier-Flags, die der Snap-Resolver pollt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Aktuell selektierter Endpunkt (Anker-Kandidat für `d`)
    pub selected_vertex: Option<Vec2>,
    /// Endpunkt unter dem Zeiger (gelbe Markierung)
    pub hovered_vertex: Option<Vec2>,
    /// Letzte bekannte Zeigerposition (Fadenkreuz)
    pub pointer: Option<Vec2>,
    /// Achsen-Snap-Modifier (Shift) wird gehalten
    pub axis_snap_held: bool,
    /// Vertex-Snap-Modus ist eingeschaltet (`s`)
    pub vertex_snap_enabled: bool,
}

impl SessionState {
    /// Erstellt einen leeren Session-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
