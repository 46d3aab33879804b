use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Geometry of the demo deck. Card size is expressed as viewport divisors:
/// by default each card spans width/1.5 and height/2 of the viewport,
/// recomputed whenever the terminal is resized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Number of cards in the demo deck
    #[serde(default = "default_card_count")]
    pub card_count: usize,
    /// Card width = viewport width / this divisor
    #[serde(default = "default_item_width_divisor")]
    pub item_width_divisor: f64,
    /// Card height = viewport height / this divisor
    #[serde(default = "default_item_height_divisor")]
    pub item_height_divisor: f64,
    /// Spacing between adjacent cards, in cells
    #[serde(default = "default_item_spacing")]
    pub item_spacing: f64,
    /// Margin before the first and after the last card, in cells
    #[serde(default = "default_deck_margin")]
    pub margin: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            card_count: default_card_count(),
            item_width_divisor: default_item_width_divisor(),
            item_height_divisor: default_item_height_divisor(),
            item_spacing: default_item_spacing(),
            margin: default_deck_margin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Scale from measured drag velocity (cells/ms) to flick units
    /// (pages skipped); terminal drags are much slower than touch drags
    #[serde(default = "default_flick_sensitivity")]
    pub flick_sensitivity: f64,
    /// Settle animation configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            flick_sensitivity: default_flick_sensitivity(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Settle animation parameters, consumed by the TUI scroll module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate toward the settle point instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Frame rate while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
        }
    }
}

/// Easing curve for the settle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "H" (Shift+h), "<C-f>" (Ctrl+f), "<Home>", "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Settle on the next page
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    /// Settle on the previous page
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    /// Flick forward, skipping several pages
    #[serde(default = "default_key_flick_forward")]
    pub flick_forward: String,
    /// Flick backward, skipping several pages
    #[serde(default = "default_key_flick_backward")]
    pub flick_backward: String,
    /// Jump to the first page
    #[serde(default = "default_key_first_page")]
    pub first_page: String,
    /// Jump to the last page
    #[serde(default = "default_key_last_page")]
    pub last_page: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_page: default_key_next_page(),
            prev_page: default_key_prev_page(),
            flick_forward: default_key_flick_forward(),
            flick_backward: default_key_flick_backward(),
            first_page: default_key_first_page(),
            last_page: default_key_last_page(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_page() -> String { "l".to_string() }
fn default_key_prev_page() -> String { "h".to_string() }
fn default_key_flick_forward() -> String { "L".to_string() }
fn default_key_flick_backward() -> String { "H".to_string() }
fn default_key_first_page() -> String { "<Home>".to_string() }
fn default_key_last_page() -> String { "<End>".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_card_count() -> usize {
    20
}

fn default_item_width_divisor() -> f64 {
    1.5
}

fn default_item_height_divisor() -> f64 {
    2.0
}

fn default_item_spacing() -> f64 {
    2.0
}

fn default_deck_margin() -> f64 {
    4.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_flick_sensitivity() -> f64 {
    5.0
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u16 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let path = expand_tilde(path);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagereel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagereel")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.deck.card_count, 20);
        assert!((config.deck.item_width_divisor - 1.5).abs() < 1e-9);
        assert!((config.deck.item_height_divisor - 2.0).abs() < 1e-9);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_duration_ms, 150);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [deck]
            card_count = 5

            [ui.scroll]
            easing = "quintic"
            "#,
        )
        .unwrap();
        assert_eq!(config.deck.card_count, 5);
        assert!((config.deck.item_width_divisor - 1.5).abs() < 1e-9);
        assert_eq!(config.ui.scroll.easing, EasingType::Quintic);
        assert_eq!(config.ui.scroll.animation_duration_ms, 150);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.deck.card_count, config.deck.card_count);
        assert_eq!(parsed.ui.scroll, config.ui.scroll);
        assert_eq!(parsed.keymap.flick_forward, config.keymap.flick_forward);
    }
}
