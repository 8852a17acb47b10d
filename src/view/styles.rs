//! Picker styling configuration.
//!
//! Ticks fade with distance from the center indicator; decades are
//! emphasised; the selected tick and the readout are highlighted.

use ratatui::style::{Color, Modifier, Style};

/// Ticks within this many slots of the center use the near style.
pub const NEAR_DISTANCE: usize = 3;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Colors forced on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PickerStyles =====

/// Styles used by the picker widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerStyles {
    /// Tick under the center indicator.
    pub selected: Style,
    /// Ticks close to the center.
    pub near: Style,
    /// Ticks far from the center.
    pub far: Style,
    /// Center indicator.
    pub indicator: Style,
    /// Decade labels.
    pub label: Style,
    /// Selected value readout.
    pub readout: Style,
    /// Enabled step buttons.
    pub button: Style,
    /// Disabled step buttons.
    pub button_disabled: Style,
    /// Hints and secondary text.
    pub hint: Style,
}

impl PickerStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors, emphasis falls back to modifiers only.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                near: Style::default().fg(Color::Gray),
                far: Style::default().fg(Color::DarkGray),
                indicator: Style::default().fg(Color::Blue),
                label: Style::default().fg(Color::LightBlue),
                readout: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                button: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                button_disabled: Style::default().fg(Color::DarkGray),
                hint: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                selected: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                near: Style::default(),
                far: Style::default().add_modifier(Modifier::DIM),
                indicator: Style::default(),
                label: Style::default(),
                readout: Style::default().add_modifier(Modifier::BOLD),
                button: Style::default().add_modifier(Modifier::BOLD),
                button_disabled: Style::default().add_modifier(Modifier::DIM),
                hint: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }

    /// Style for a tick `distance` slots from the center.
    ///
    /// Decades are drawn bold unless they are the selected tick.
    pub fn tick(&self, distance: usize, is_decade: bool) -> Style {
        let base = match distance {
            0 => return self.selected,
            d if d <= NEAR_DISTANCE => self.near,
            _ => self.far,
        };
        if is_decade {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    /// Style for a step button.
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            self.button
        } else {
            self.button_disabled
        }
    }
}

impl Default for PickerStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
