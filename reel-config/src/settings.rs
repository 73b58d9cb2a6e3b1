//! Loading of carousel settings from files and the environment

use anyhow::{Context, anyhow};
use reel_core::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a settings file.
pub const CONFIG_PATH_ENV: &str = "REEL_CONFIG_PATH";
/// Environment variable holding inline JSON settings.
pub const CONFIG_JSON_ENV: &str = "REEL_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "reel.toml",
    "reel.json",
    "config/reel.toml",
    "config/reel.json",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Toml,
    Json,
    Unknown,
}

impl SettingsFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => SettingsFormat::Toml,
            Some("json") => SettingsFormat::Json,
            _ => SettingsFormat::Unknown,
        }
    }

    fn parse(self, contents: &str) -> anyhow::Result<CarouselSettings> {
        match self {
            SettingsFormat::Toml => Ok(toml::from_str(contents)?),
            SettingsFormat::Json => Ok(serde_json::from_str(contents)?),
            SettingsFormat::Unknown => CarouselSettings::parse_from_str(contents),
        }
    }
}

/// Source that produced the settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    /// Built-in defaults, nothing configured.
    #[default]
    Default,
    /// File named by `REEL_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `REEL_CONFIG_JSON`.
    EnvInline,
    /// Default file found in the search directory.
    File(PathBuf),
}

/// Carousel settings as written by users. Defaults suit the terminal host,
/// where one unit is one column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSettings {
    /// Width of one item slot, gap included.
    pub item_width: f32,
    /// Number of items when no labels are given.
    pub item_count: usize,
    /// Item labels in reading order. When non-empty they decide the count.
    pub items: Vec<String>,
    /// Items moved per advance/retreat.
    pub step_items: usize,
    /// Right-to-left reading order.
    pub mirrored: bool,
    /// Whether drags move the strip.
    pub draggable: bool,
    /// Item scrolled to on start.
    pub initial_index: usize,
    /// Set false to never show the directional controls.
    pub show_controls: bool,
    /// Gap drawn inside each item slot.
    pub space_between: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            item_width: 16.0,
            item_count: 12,
            items: Vec::new(),
            step_items: 1,
            mirrored: false,
            draggable: true,
            initial_index: 0,
            show_controls: true,
            space_between: 2.0,
        }
    }
}

impl CarouselSettings {
    /// Load settings using environment variables.
    /// Evaluation order:
    /// 1) `$REEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REEL_CONFIG_JSON` (inline JSON),
    /// 3) the first of `reel.toml`, `reel.json`, `config/reel.toml`,
    ///    `config/reel.json` in the working directory,
    /// 4) defaults if none of the above is present.
    pub fn load_from_env() -> anyhow::Result<(Self, SettingsSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`CarouselSettings::load_from_env`] with an explicit variable lookup
    /// and search directory.
    pub fn load_with<F>(
        lookup: F,
        search_root: &Path,
    ) -> anyhow::Result<(Self, SettingsSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let settings = Self::load_from_file(&path)?;
            tracing::debug!(path = %path.display(), "settings from {CONFIG_PATH_ENV}");
            return Ok((settings, SettingsSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            tracing::debug!("settings from {CONFIG_JSON_ENV}");
            return Ok((parsed, SettingsSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_root) {
            let settings = Self::load_from_file(&path)?;
            tracing::debug!(path = %path.display(), "settings from default file");
            return Ok((settings, SettingsSource::File(path)));
        }

        Ok((Self::default(), SettingsSource::Default))
    }

    /// Read settings from `path`. `.json` files are JSON and `.toml` files
    /// TOML; anything else is sniffed with [`CarouselSettings::parse_from_str`].
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel settings from {}", path.display())
        })?;
        SettingsFormat::of(path)
            .parse(&contents)
            .with_context(|| {
                format!("invalid carousel settings {}", path.display())
            })
    }

    /// Parse settings of unknown format, TOML first.
    pub fn parse_from_str(contents: &str) -> anyhow::Result<Self> {
        match toml::from_str(contents) {
            Ok(settings) => Ok(settings),
            Err(toml_err) => serde_json::from_str(contents).map_err(|json_err| {
                anyhow!("neither TOML ({toml_err}) nor JSON ({json_err})")
            }),
        }
    }

    /// Parse inline JSON settings.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel settings json: {err}"))
    }

    /// Number of items the carousel holds.
    pub fn effective_item_count(&self) -> usize {
        if self.items.is_empty() {
            self.item_count
        } else {
            self.items.len()
        }
    }

    /// Item labels in reading order, generated when none are configured.
    pub fn labels(&self) -> Vec<String> {
        if self.items.is_empty() {
            (1..=self.item_count).map(|n| format!("Item {n}")).collect()
        } else {
            self.items.clone()
        }
    }

    /// Validate into a carousel configuration.
    pub fn to_config(&self) -> anyhow::Result<CarouselConfig> {
        CarouselConfig::builder(self.item_width, self.effective_item_count())
            .step_items(self.step_items)
            .mirrored(self.mirrored)
            .draggable(self.draggable)
            .initial_index(self.initial_index)
            .show_controls(self.show_controls)
            .space_between(self.space_between)
            .build()
            .context("invalid carousel settings")
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_valid_config() {
        let config = CarouselSettings::default().to_config().unwrap();
        assert_eq!(config.item_count(), 12);
        assert_eq!(config.item_width(), 16.0);
        assert!(!config.mirrored());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings =
            CarouselSettings::parse_from_str("item_width = 20.0\nmirrored = true\n")
                .unwrap();
        assert_eq!(settings.item_width, 20.0);
        assert!(settings.mirrored);
        assert_eq!(settings.step_items, 1);
        assert!(settings.draggable);
    }

    #[test]
    fn json_is_accepted_without_extension_hint() {
        let settings = CarouselSettings::parse_from_str(
            r#"{"step_items": 3, "items": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(settings.step_items, 3);
        assert_eq!(settings.effective_item_count(), 2);
    }

    #[test]
    fn unparseable_text_reports_both_formats() {
        let err = CarouselSettings::parse_from_str("item_width: [").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("neither TOML"), "{message}");
        assert!(message.contains("nor JSON"), "{message}");
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            SettingsFormat::of(Path::new("a/reel.toml")),
            SettingsFormat::Toml
        );
        assert_eq!(
            SettingsFormat::of(Path::new("reel.json")),
            SettingsFormat::Json
        );
        assert_eq!(
            SettingsFormat::of(Path::new("reel.conf")),
            SettingsFormat::Unknown
        );
        // JSON is not valid TOML, so a .toml file holding JSON fails
        assert!(SettingsFormat::Toml.parse(r#"{"mirrored": true}"#).is_err());
        assert!(SettingsFormat::Unknown.parse(r#"{"mirrored": true}"#).unwrap().mirrored);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CarouselSettings::parse_json(r#"{"item_widht": 10}"#)
            .unwrap_err();
        assert!(err.to_string().contains("item_widht"));
    }

    #[test]
    fn negative_count_fails_to_parse() {
        assert!(CarouselSettings::parse_json(r#"{"item_count": -1}"#).is_err());
    }

    #[test]
    fn labels_are_generated_when_missing() {
        let settings = CarouselSettings {
            item_count: 3,
            ..Default::default()
        };
        assert_eq!(settings.labels(), vec!["Item 1", "Item 2", "Item 3"]);
    }

    #[test]
    fn invalid_width_is_reported_with_context() {
        let settings = CarouselSettings {
            item_width: 0.0,
            ..Default::default()
        };
        let err = settings.to_config().unwrap_err();
        assert_eq!(err.to_string(), "invalid carousel settings");
        assert!(format!("{err:#}").contains("item width"));
    }
}
