//! Settings for reel carousels.
//!
//! Settings are read from a TOML or JSON file or from the environment and
//! converted into a validated [`reel_core::CarouselConfig`]. Hosts keep the
//! raw [`CarouselSettings`] around for presentation details such as item
//! labels.

pub mod settings;

pub use settings::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, CarouselSettings, SettingsSource,
};
