//! Command implementations shared by the binary and its tests.

use std::path::Path;

use anyhow::{Context, Result};
use reel_config::{CarouselSettings, SettingsSource};
use reel_core::{Direction, ViewportGeometry};

use crate::host::{HostEvent, HostSnapshot, TerminalHost};

/// Command-line adjustments applied on top of loaded settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replace the item count.
    pub items: Option<usize>,
    /// Force right-to-left order.
    pub mirrored: bool,
}

impl Overrides {
    /// Apply onto `settings`.
    pub fn apply(&self, settings: &mut CarouselSettings) {
        if let Some(count) = self.items {
            if settings.items.len() > count {
                settings.items.truncate(count);
            } else {
                settings.items.clear();
            }
            settings.item_count = count;
        }
        if self.mirrored {
            settings.mirrored = true;
        }
    }
}

/// Load settings from `config` when given, otherwise from the environment
/// and the working directory.
pub fn load_settings(
    config: Option<&Path>,
) -> Result<(CarouselSettings, SettingsSource)> {
    match config {
        Some(path) => {
            let settings = CarouselSettings::load_from_file(path)?;
            Ok((settings, SettingsSource::File(path.to_path_buf())))
        }
        None => CarouselSettings::load_from_env(),
    }
}

/// Replay `events` against an in-memory viewport of `width` columns.
pub fn run_headless(
    settings: &CarouselSettings,
    width: f32,
    events: Vec<HostEvent>,
) -> Result<HostSnapshot> {
    let mut host = TerminalHost::new(settings, width)?;
    for event in events {
        if !host.apply(event) {
            break;
        }
    }
    Ok(host.snapshot())
}

/// Human-readable summary of the settings at a given viewport width.
pub fn check_report(
    settings: &CarouselSettings,
    source: &SettingsSource,
    width: f32,
) -> Result<String> {
    let config = settings.to_config()?;
    let geometry = ViewportGeometry::for_config(&config, width);
    let host = TerminalHost::new(settings, width)
        .context("failed to mount carousel")?;
    let visibility = host.carousel().visibility();
    let shown = |direction: Direction| {
        if visibility.shows(direction) {
            "shown"
        } else {
            "hidden"
        }
    };

    let source = match source {
        SettingsSource::Default => "defaults".to_string(),
        SettingsSource::EnvPath(path) | SettingsSource::File(path) => {
            path.display().to_string()
        }
        SettingsSource::EnvInline => reel_config::CONFIG_JSON_ENV.to_string(),
    };

    let lines = [
        format!("settings: {source}"),
        format!(
            "items: {} (step {}, mirrored: {}, draggable: {})",
            config.item_count(),
            config.step_items(),
            config.mirrored(),
            config.draggable()
        ),
        format!("content width: {}", geometry.content_width),
        format!("viewport width: {}", geometry.viewport_width),
        format!("max scroll: {}", geometry.max_scroll()),
        format!("fits: {}", geometry.fits_without_scroll()),
        format!(
            "controls: advance {}, retreat {}",
            shown(Direction::Advance),
            shown(Direction::Retreat)
        ),
    ];
    Ok(lines.join("\n"))
}
