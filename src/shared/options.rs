//! Zentrale Konfiguration für den Spline-Szenen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei.
pub const CONFIG_FILE_NAME: &str = "spline_scene_editor.toml";

// ── Marker ──────────────────────────────────────────────────────────

/// Radius von Vertex- und Steuerpunkt-Markern in Szenen-Einheiten.
pub const MARKER_RADIUS: f32 = 6.0;
/// Füllfarbe der Vertex-Marker (RGBA: Schwarz).
pub const VERTEX_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Füllfarbe editierbarer Steuerpunkt-Marker (RGBA: Grau).
pub const CONTROL_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Füllfarbe abgeleiteter, nicht editierbarer Steuerpunkt-Marker (RGBA: Hellgrau, halbtransparent).
pub const DERIVED_CONTROL_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 0.6];

// ── Linien ──────────────────────────────────────────────────────────

/// Farbe der Führungslinien Vertex → Steuerpunkt (RGBA: Grau).
pub const GUIDE_LINE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Linienstärke der Führungslinien.
pub const GUIDE_LINE_WIDTH: f32 = 1.0;
/// Farbe der Segment-Pfade (RGBA: Schwarz).
pub const SEGMENT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke der Segment-Pfade.
pub const SEGMENT_WIDTH: f32 = 1.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Toleranz der Polylinien-Approximation (maximaler Sehnenabstand).
pub const APPROX_TOLERANCE: f32 = 0.5;
/// Kleinste zulässige Approximations-Toleranz.
pub const MIN_APPROX_TOLERANCE: f32 = 0.01;
/// Zusätzlicher Pick-Radius beim Hit-Test auf Marker.
pub const HIT_SLACK: f32 = 2.0;
/// Versatz des angehängten Vertex relativ zum bisher letzten.
pub const APPEND_OFFSET: [f32; 2] = [30.0, 30.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius
    pub marker_radius: f32,
    /// Füllfarbe der Vertex-Marker
    pub vertex_color: [f32; 4],
    /// Füllfarbe editierbarer Steuerpunkt-Marker
    pub control_color: [f32; 4],
    /// Füllfarbe abgeleiteter Steuerpunkt-Marker (global gekoppelte Modelle)
    pub derived_control_color: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    /// Farbe der Führungslinien
    pub guide_line_color: [f32; 4],
    /// Stärke der Führungslinien
    pub guide_line_width: f32,
    /// Farbe der Segment-Pfade
    pub segment_color: [f32; 4],
    /// Stärke der Segment-Pfade
    pub segment_width: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Toleranz der Polylinien-Approximation
    pub approx_tolerance: f32,
    /// Zusätzlicher Pick-Radius beim Hit-Test
    pub hit_slack: f32,
    /// Versatz beim Anhängen eines Vertex per Doppelklick
    pub append_offset: [f32; 2],
    /// Neues letztes Segment beim Anhängen sofort zeichnen.
    /// `false`: erst beim nächsten Edit, der das Segment berührt (oder beim Rebuild).
    pub append_draws_trailing_segment: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
            vertex_color: VERTEX_COLOR,
            control_color: CONTROL_COLOR,
            derived_control_color: DERIVED_CONTROL_COLOR,

            guide_line_color: GUIDE_LINE_COLOR,
            guide_line_width: GUIDE_LINE_WIDTH,
            segment_color: SEGMENT_COLOR,
            segment_width: SEGMENT_WIDTH,

            approx_tolerance: APPROX_TOLERANCE,
            hit_slack: HIT_SLACK,
            append_offset: APPEND_OFFSET,
            append_draws_trailing_segment: false,
        }
    }
}

impl EditorOptions {
    /// Liest die Optionen-Datei unter `path`.
    ///
    /// Fehlt die Datei oder ist sie nicht lesbar, gelten die Standardwerte.
    /// Geladene Werte werden über [`EditorOptions::sanitized`] bereinigt.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "{} nicht vorhanden, Standard-Optionen aktiv",
                path.display()
            );
            return Self::default();
        }
        match Self::parse_file(path) {
            Ok(opts) => {
                log::info!("Editor-Optionen aus {} übernommen", path.display());
                opts.sanitized()
            }
            Err(err) => {
                log::warn!("{:#}; Standard-Optionen aktiv", err);
                Self::default()
            }
        }
    }

    fn parse_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("{} nicht lesbar", path.display()))?;
        toml::from_str(&content).with_context(|| format!("{} kein gültiges TOML", path.display()))
    }

    /// Schreibt die Optionen als TOML nach `path`.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen nicht als TOML darstellbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("{} nicht schreibbar", path.display()))?;
        log::info!("Editor-Optionen nach {} geschrieben", path.display());
        Ok(())
    }

    /// `spline_scene_editor.toml` im Verzeichnis der Binary, ersatzweise im
    /// Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Klemmt Werte, mit denen die Approximation nicht terminieren würde.
    ///
    /// `approx_tolerance` muss endlich und mindestens
    /// [`MIN_APPROX_TOLERANCE`] sein; NaN fällt auf [`APPROX_TOLERANCE`] zurück.
    pub fn sanitized(mut self) -> Self {
        let tolerance = self.approx_tolerance;
        let clamped = if tolerance.is_nan() {
            APPROX_TOLERANCE
        } else {
            tolerance.max(MIN_APPROX_TOLERANCE)
        };
        if clamped != tolerance {
            log::warn!(
                "approx_tolerance {} ungültig, verwende {}",
                tolerance,
                clamped
            );
            self.approx_tolerance = clamped;
        }
        self
    }

    /// Versatz beim Anhängen als Vektor.
    pub fn append_offset(&self) -> glam::Vec2 {
        glam::Vec2::from(self.append_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions =
            toml::from_str("approx_tolerance = 0.25\nappend_draws_trailing_segment = true\n")
                .expect("Teil-TOML muss ladbar sein");

        assert_eq!(opts.approx_tolerance, 0.25);
        assert!(opts.append_draws_trailing_segment);
        assert_eq!(opts.marker_radius, MARKER_RADIUS);
        assert_eq!(opts.append_offset, APPEND_OFFSET);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.segment_width = 2.5;
        opts.append_offset = [10.0, -5.0];

        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "spline_scene_editor_test_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            marker_radius: 9.0,
            append_draws_trailing_segment: true,
            ..EditorOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern muss gelingen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let opts = EditorOptions::load_from_file(Path::new(
            "/definitiv/nicht/vorhanden/spline_scene_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn test_sanitized_clamps_degenerate_tolerance() {
        for (raw, expected) in [
            (0.0, MIN_APPROX_TOLERANCE),
            (-1.0, MIN_APPROX_TOLERANCE),
            (f32::NEG_INFINITY, MIN_APPROX_TOLERANCE),
            (f32::NAN, APPROX_TOLERANCE),
            (0.25, 0.25),
        ] {
            let opts = EditorOptions {
                approx_tolerance: raw,
                ..EditorOptions::default()
            }
            .sanitized();
            assert_eq!(opts.approx_tolerance, expected, "Eingabe {raw}");
        }
    }

    #[test]
    fn test_loaded_file_with_zero_or_nan_tolerance_is_clamped() {
        for (name, text, expected) in [
            ("null", "approx_tolerance = 0.0\n", MIN_APPROX_TOLERANCE),
            ("nan", "approx_tolerance = nan\n", APPROX_TOLERANCE),
        ] {
            let path = std::env::temp_dir().join(format!(
                "spline_scene_editor_tol_{}_{}.toml",
                name,
                std::process::id()
            ));
            std::fs::write(&path, text).expect("Testdatei schreibbar");
            let loaded = EditorOptions::load_from_file(&path);
            let _ = std::fs::remove_file(&path);

            assert_eq!(loaded.approx_tolerance, expected, "Datei {name}");
        }
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!(
            "spline_scene_editor_kaputt_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "approx_tolerance = \"fein\"\n").expect("Testdatei schreibbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_config_path_uses_config_file_name() {
        let path = EditorOptions::config_path();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(CONFIG_FILE_NAME)
        );
    }
}
