//! Zentrale Konfiguration für den Arc Aligner.
//!
//! `AlignerOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

/// RGBA-Farbe mit Kanälen in [0, 1].
pub type Rgba = [f32; 4];

// ── Führungskreis ───────────────────────────────────────────────────

/// Farbe von Führungskreis und -bogen (RGBA: Silber).
pub const GUIDE_CIRCLE_COLOR: Rgba = [0.75, 0.75, 0.75, 1.0];
/// Linienstärke von Führungskreis und -bogen.
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

// ── Platzhalter-Kreuze ─────────────────────────────────────────────

/// Farbe der Platzhalter-Kreuze (RGBA: Rot).
pub const GUIDE_CROSS_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];
/// Halbe Kantenlänge der Platzhalter-Kreuze.
pub const GUIDE_CROSS_SIZE: i32 = 2;
/// Linienstärke der Platzhalter-Kreuze.
pub const GUIDE_CROSS_LINE_WIDTH: f32 = 1.0;

// ── Hinweistexte ───────────────────────────────────────────────────

/// Farbe der Hinweistexte (RGBA: Dunkelgrün).
pub const HINT_TEXT_COLOR: Rgba = [0.0, 0.39, 0.0, 1.0];

// ── Sitzung ─────────────────────────────────────────────────────────

/// Standard-Anzahl der Platzhalter für neue Ausrichtungen.
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 5;
/// Obergrenze für die Platzhalter-Anzahl im UI.
pub const MAX_PLACEHOLDER_COUNT: usize = 360;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Arc Aligners.
/// Wird als `arc_aligner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlignerOptions {
    // ── Führungskreis ───────────────────────────────────────────
    /// Farbe von Führungskreis und -bogen
    pub guide_circle_color: Rgba,
    /// Linienstärke von Führungskreis und -bogen
    #[serde(default = "default_guide_line_width")]
    pub guide_line_width: f32,

    // ── Kreuze ──────────────────────────────────────────────────
    /// Farbe der Platzhalter-Kreuze
    pub guide_cross_color: Rgba,
    /// Halbe Kantenlänge der Platzhalter-Kreuze
    pub guide_cross_size: i32,
    /// Linienstärke der Platzhalter-Kreuze
    #[serde(default = "default_guide_cross_line_width")]
    pub guide_cross_line_width: f32,

    // ── Hinweise ────────────────────────────────────────────────
    /// Hinweistexte während der Ausrichtung einblenden
    pub show_hints: bool,
    /// Farbe der Hinweistexte
    pub hint_text_color: Rgba,

    // ── Sitzung ─────────────────────────────────────────────────
    /// Platzhalter-Anzahl, mit der neue Ausrichtungen starten
    #[serde(default = "default_placeholder_count")]
    pub default_placeholder_count: usize,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            guide_circle_color: GUIDE_CIRCLE_COLOR,
            guide_line_width: GUIDE_LINE_WIDTH,

            guide_cross_color: GUIDE_CROSS_COLOR,
            guide_cross_size: GUIDE_CROSS_SIZE,
            guide_cross_line_width: GUIDE_CROSS_LINE_WIDTH,

            show_hints: true,
            hint_text_color: HINT_TEXT_COLOR,

            default_placeholder_count: DEFAULT_PLACEHOLDER_COUNT,
        }
    }
}

/// Serde-Default für `guide_line_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_guide_line_width() -> f32 {
    GUIDE_LINE_WIDTH
}

/// Serde-Default für `guide_cross_line_width`.
fn default_guide_cross_line_width() -> f32 {
    GUIDE_CROSS_LINE_WIDTH
}

/// Serde-Default für `default_placeholder_count`.
fn default_placeholder_count() -> usize {
    DEFAULT_PLACEHOLDER_COUNT
}

impl AlignerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
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
            .unwrap_or_else(|_| std::path::PathBuf::from("arc_aligner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("arc_aligner.toml")
    }

    /// Klemmt Werte aus handeditierten Dateien in gültige Bereiche.
    ///
    /// Die Platzhalter-Anzahl bleibt immer > 0, Größen und Breiten nie negativ.
    pub fn sanitized(mut self) -> Self {
        self.default_placeholder_count = self
            .default_placeholder_count
            .clamp(1, MAX_PLACEHOLDER_COUNT);
        self.guide_cross_size = self.guide_cross_size.max(0);
        self.guide_line_width = self.guide_line_width.max(0.0);
        self.guide_cross_line_width = self.guide_cross_line_width.max(0.0);
        self
    }
}
