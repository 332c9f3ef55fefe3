use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub pull: PullConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
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

/// Carousel geometry and transition settings.
///
/// Owned by the host and read-only to the slider engine. A new value may be
/// swapped in between gestures (for example after a responsive resize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Width of the visible viewport in pixels
    #[serde(default = "default_visible_width")]
    pub visible_width: f64,
    /// Width of a single cell in pixels
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Gap after each cell in pixels
    #[serde(default = "default_cell_margin")]
    pub cell_margin: f64,
    /// Number of cells that fit in the viewport
    #[serde(default = "default_visible_cell_count")]
    pub visible_cell_count: usize,
    /// Cells rendered beyond each side of the viewport
    #[serde(default = "default_overflow_cells_limit")]
    pub overflow_cells_limit: usize,
    /// Release transition duration in milliseconds
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Release transition timing function
    #[serde(default)]
    pub transition_easing: EasingType,
    /// Let the track rest at any offset and carry release inertia
    #[serde(default)]
    pub free_scroll: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            visible_width: default_visible_width(),
            cell_width: default_cell_width(),
            cell_margin: default_cell_margin(),
            visible_cell_count: default_visible_cell_count(),
            overflow_cells_limit: default_overflow_cells_limit(),
            transition_duration_ms: default_transition_duration(),
            transition_easing: EasingType::default(),
            free_scroll: false,
        }
    }
}

impl SliderConfig {
    /// Reject geometry a host could never lay out.
    ///
    /// The engine itself trusts its configuration; this is only run on values
    /// read from disk.
    pub fn validate(&self) -> crate::Result<()> {
        let lengths = [
            ("visible_width", self.visible_width),
            ("cell_width", self.cell_width),
            ("cell_margin", self.cell_margin),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::Config(format!(
                    "slider.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.cell_width + self.cell_margin <= 0.0 {
            return Err(crate::Error::Config(
                "slider.cell_width + slider.cell_margin must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullConfig {
    /// Maximum elastic overtravel past either edge, in pixels
    #[serde(default = "default_pull_limit")]
    pub limit: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            limit: default_pull_limit(),
        }
    }
}

/// Transition timing function used when the track settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the target when the transition ends
    #[serde(alias = "step-end")]
    None,
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// 1 - (1-t)³
    Cubic,
    /// 1 - (1-t)⁵
    Quintic,
}

impl EasingType {
    /// CSS `transition-timing-function` value for hosts that animate natively
    pub fn css_name(&self) -> &'static str {
        match self {
            EasingType::None => "step-end",
            EasingType::Linear => "linear",
            EasingType::Ease => "ease",
            EasingType::EaseIn => "ease-in",
            EasingType::EaseOut => "ease-out",
            EasingType::EaseInOut => "ease-in-out",
            EasingType::Cubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            EasingType::Quintic => "cubic-bezier(0.22, 1, 0.36, 1)",
        }
    }
}

pub const DEFAULT_PULL_LIMIT: f64 = 100.0;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_visible_width() -> f64 {
    640.0
}

fn default_cell_width() -> f64 {
    200.0
}

fn default_cell_margin() -> f64 {
    10.0
}

fn default_visible_cell_count() -> usize {
    3
}

fn default_overflow_cells_limit() -> usize {
    3
}

fn default_transition_duration() -> u64 {
    200
}

fn default_pull_limit() -> f64 {
    DEFAULT_PULL_LIMIT
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.slider.validate()?;
        if !config.pull.limit.is_finite() || config.pull.limit < 0.0 {
            return Err(crate::Error::Config(format!(
                "pull.limit must be a non-negative number, got {}",
                config.pull.limit
            )));
        }
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }
}
