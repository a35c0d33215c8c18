//! Render options.
//!
//! All toggles live in one immutable [`RenderOptions`] value passed to
//! [`render`](crate::render). Options can be built in code, decoded from the
//! camelCase JSON the web front end stores, or overridden from environment
//! variables.

use serde::{Deserialize, Serialize};

use loretip_enchant::ColorMode;

/// Environment variable to show or hide `Gear Score:` lines (`1/0/true/false`).
pub const ENV_SHOW_GEAR_SCORE: &str = "LORETIP_SHOW_GEAR_SCORE";
/// Environment variable to keep or strip dark-gray bracket suffixes.
pub const ENV_SHOW_BRACKETS: &str = "LORETIP_SHOW_BRACKETS";
/// Environment variable to toggle filler artifact repair.
pub const ENV_AUTO_FIX: &str = "LORETIP_AUTO_FIX";
/// Environment variable to toggle enchantment regrouping.
pub const ENV_PRETTY: &str = "LORETIP_PRETTY";
/// Environment variable selecting the color mode (`sba` or `vanilla`).
pub const ENV_COLOR_MODE: &str = "LORETIP_COLOR_MODE";

/// Toggles that decide which pipeline stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Keep lines containing `Gear Score:`.
    pub show_gear_score: bool,
    /// Keep `§8(...)` suffixes.
    pub show_brackets: bool,
    /// Restore missing `§k` in front of filler runs.
    pub auto_fix_artifacts: bool,
    /// Regroup enchantment lines by rarity.
    pub pretty_mode: bool,
    /// Palette for recognised enchantments.
    pub color_mode: ColorMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_gear_score: true,
            show_brackets: true,
            auto_fix_artifacts: true,
            pretty_mode: false,
            color_mode: ColorMode::Sba,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub const fn with_gear_score(mut self, show: bool) -> Self {
        self.show_gear_score = show;
        self
    }

    #[must_use]
    pub const fn with_brackets(mut self, show: bool) -> Self {
        self.show_brackets = show;
        self
    }

    #[must_use]
    pub const fn with_auto_fix(mut self, enabled: bool) -> Self {
        self.auto_fix_artifacts = enabled;
        self
    }

    #[must_use]
    pub const fn with_pretty_mode(mut self, enabled: bool) -> Self {
        self.pretty_mode = enabled;
        self
    }

    #[must_use]
    pub const fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Decode options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().apply_env_with(get_env)
    }

    /// Apply environment overrides on top of `self`. Unparseable values are
    /// ignored.
    #[must_use]
    pub fn apply_env_with<F>(mut self, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env_override_bool(&get_env, ENV_SHOW_GEAR_SCORE) {
            self.show_gear_score = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_SHOW_BRACKETS) {
            self.show_brackets = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_AUTO_FIX) {
            self.auto_fix_artifacts = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_PRETTY) {
            self.pretty_mode = value;
        }
        if let Some(mode) = get_env(ENV_COLOR_MODE).and_then(|value| ColorMode::parse(&value)) {
            self.color_mode = mode;
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_override_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| parse_bool(&value))
}
