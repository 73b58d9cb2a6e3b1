//! Per-mount carousel configuration

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Gap rendered inside each item slot when none is configured.
pub const DEFAULT_SPACE_BETWEEN: f32 = 8.0;

/// Validated configuration for a carousel instance.
///
/// Built through [`CarouselConfig::builder`], which rejects widths and step
/// sizes that would produce meaningless geometry. Serialize-only: settings
/// are read through their own raw type and validated on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CarouselConfig {
    item_width: f32,
    item_count: usize,
    step_items: usize,
    mirrored: bool,
    draggable: bool,
    initial_index: usize,
    show_controls: bool,
    space_between: f32,
}

impl CarouselConfig {
    /// Start a builder for `item_count` items of `item_width` each.
    pub fn builder(item_width: f32, item_count: usize) -> CarouselConfigBuilder {
        CarouselConfigBuilder::new(item_width, item_count)
    }

    /// Width of a single item slot, gap included.
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Number of items in the strip.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of items moved by one advance/retreat activation.
    pub fn step_items(&self) -> usize {
        self.step_items
    }

    /// Whether reading order runs right-to-left.
    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    /// Whether drag gestures move the strip.
    pub fn draggable(&self) -> bool {
        self.draggable
    }

    /// Item shown first on mount, in reading order.
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    /// Host-level switch for the directional controls.
    pub fn show_controls(&self) -> bool {
        self.show_controls
    }

    /// Presentation-only gap inside each item slot. Does not affect
    /// content width.
    pub fn space_between(&self) -> f32 {
        self.space_between
    }

    /// Pixel distance covered by one step.
    pub fn step_width(&self) -> f32 {
        self.item_width * self.step_items as f32
    }

    /// Total width of all items laid end to end.
    pub fn content_width(&self) -> f32 {
        self.item_count as f32 * self.item_width
    }

    pub(crate) fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    pub(crate) fn set_item_width(&mut self, item_width: f32) -> Result<()> {
        validate_item_width(item_width)?;
        self.item_width = item_width;
        Ok(())
    }
}

/// Builder for [`CarouselConfig`].
#[derive(Debug, Clone, Copy)]
pub struct CarouselConfigBuilder {
    config: CarouselConfig,
}

impl CarouselConfigBuilder {
    fn new(item_width: f32, item_count: usize) -> Self {
        Self {
            config: CarouselConfig {
                item_width,
                item_count,
                step_items: 1,
                mirrored: false,
                draggable: true,
                initial_index: 0,
                show_controls: true,
                space_between: DEFAULT_SPACE_BETWEEN,
            },
        }
    }

    /// Items per step. Default 1.
    pub fn step_items(mut self, step_items: usize) -> Self {
        self.config.step_items = step_items;
        self
    }

    /// Right-to-left reading order. Default off.
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.config.mirrored = mirrored;
        self
    }

    /// Whether drags scroll. Default on.
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.config.draggable = draggable;
        self
    }

    /// Item to open at. Default 0.
    pub fn initial_index(mut self, initial_index: usize) -> Self {
        self.config.initial_index = initial_index;
        self
    }

    /// Master switch for the controls. Default on.
    pub fn show_controls(mut self, show_controls: bool) -> Self {
        self.config.show_controls = show_controls;
        self
    }

    /// Gap inside each slot.
    pub fn space_between(mut self, space_between: f32) -> Self {
        self.config.space_between = space_between;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<CarouselConfig> {
        let config = self.config;
        validate_item_width(config.item_width)?;
        if config.step_items == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if !config.space_between.is_finite() || config.space_between < 0.0 {
            return Err(ConfigError::InvalidSpacing(config.space_between));
        }
        Ok(config)
    }
}

fn validate_item_width(item_width: f32) -> Result<()> {
    if item_width.is_finite() && item_width > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidItemWidth(item_width))
    }
}
