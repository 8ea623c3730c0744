//! Centralized puzzle/controls/camera options with TOML support.
//!
//! All tweakable settings (puzzle size, flip style, gesture thresholds,
//! camera framing, keybindings) are consolidated here. Options serialize
//! to/from TOML so a front end can persist user preferences.

mod camera;
mod controls;
mod keybindings;
mod puzzle;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::{ControlsOptions, FlipStyle, RotationProfile};
pub use keybindings::KeybindingOptions;
pub use puzzle::PuzzleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TurnError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Puzzle selection.
    pub puzzle: PuzzleOptions,
    /// Gesture and animation tuning.
    pub controls: ControlsOptions,
    /// Camera projection and framing.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`TurnError::OptionsParse`] if the text is not valid options TOML.
    pub fn from_toml(content: &str) -> Result<Self, TurnError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| TurnError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`TurnError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn load(path: &Path) -> Result<Self, TurnError> {
        let content = std::fs::read_to_string(path).map_err(TurnError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`TurnError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TurnError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TurnError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TurnError::Io)?;
        }
        std::fs::write(path, content).map_err(TurnError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[controls]
flip_style = "bouncy"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.controls.flip_style, FlipStyle::Bouncy);
        // Everything else should be default
        assert_eq!(opts.controls.drag_threshold, 0.05);
        assert_eq!(opts.puzzle.size, 3);
        assert_eq!(opts.camera.fovy, 10.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[puzzle]\nsize = \"big\"").unwrap_err();
        assert!(matches!(err, TurnError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::TurnFront));
        assert_eq!(opts.keybindings.lookup("KeyC"), Some(KeyAction::RotateZ));
        assert_eq!(opts.keybindings.lookup("Tab"), None);
    }

    #[test]
    fn rebound_key_is_found_after_parse() {
        let toml_str = r#"
[keybindings.bindings]
turn_up = "ArrowUp"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("ArrowUp"), Some(KeyAction::TurnUp));
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("cubeturn-options-{}", std::process::id()));
        let path = dir.join("prefs.toml");
        let mut opts = Options::default();
        opts.puzzle.size = 4;
        opts.controls.flip_style = FlipStyle::Smooth;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/cubeturn.toml"))
            .unwrap_err();
        assert!(matches!(err, TurnError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("puzzle"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
        let controls = &props["controls"]["properties"];
        assert!(controls.get("flip_style").is_some());
        assert!(controls.get("momentum_window_ms").is_none());
    }

    #[test]
    fn bouncy_layer_profile_is_the_only_bounce() {
        for style in [FlipStyle::Snappy, FlipStyle::Smooth, FlipStyle::Bouncy] {
            assert!(!style.whole_cube_profile().bounce);
            assert_eq!(style.layer_profile().bounce, style == FlipStyle::Bouncy);
        }
    }
}
