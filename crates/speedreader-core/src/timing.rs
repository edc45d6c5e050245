//! Pacing model: ramp-up speed curve, per-token display time, and presets.

use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::content::Token;

const MS_PER_MINUTE: f64 = 60_000.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("start WPM must be positive")]
    ZeroStartWpm,
    #[error("target WPM must be positive")]
    ZeroTargetWpm,
    #[error("ramp-up word count must be positive")]
    ZeroRampUpWords,
    #[error("WPM must be positive")]
    ZeroWpm,
}

/// Reading speed with a linear ramp from `start_wpm` to `target_wpm` over the
/// first `ramp_up_words` words. All three values are always positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpeedConfig {
    start_wpm: u32,
    target_wpm: u32,
    ramp_up_words: u32,
}

/// Partial update merged into a [`SpeedConfig`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpeedConfigPatch {
    pub start_wpm: Option<u32>,
    pub target_wpm: Option<u32>,
    pub ramp_up_words: Option<u32>,
}

impl SpeedConfigPatch {
    pub const fn target_wpm(wpm: u32) -> Self {
        Self {
            start_wpm: None,
            target_wpm: Some(wpm),
            ramp_up_words: None,
        }
    }
}

impl SpeedConfig {
    pub const fn new(
        start_wpm: u32,
        target_wpm: u32,
        ramp_up_words: u32,
    ) -> Result<Self, ConfigError> {
        if start_wpm == 0 {
            return Err(ConfigError::ZeroStartWpm);
        }
        if target_wpm == 0 {
            return Err(ConfigError::ZeroTargetWpm);
        }
        if ramp_up_words == 0 {
            return Err(ConfigError::ZeroRampUpWords);
        }

        Ok(Self {
            start_wpm,
            target_wpm,
            ramp_up_words,
        })
    }

    pub const fn start_wpm(&self) -> u32 {
        self.start_wpm
    }

    pub const fn target_wpm(&self) -> u32 {
        self.target_wpm
    }

    pub const fn ramp_up_words(&self) -> u32 {
        self.ramp_up_words
    }

    /// Merge `patch` into a copy of `self`. Nothing is applied on error.
    pub fn apply(&self, patch: SpeedConfigPatch) -> Result<Self, ConfigError> {
        Self::new(
            patch.start_wpm.unwrap_or(self.start_wpm),
            patch.target_wpm.unwrap_or(self.target_wpm),
            patch.ramp_up_words.unwrap_or(self.ramp_up_words),
        )
    }

    /// Use an externally suggested reading speed as the target.
    pub fn with_suggested_target(self, wpm: u32) -> Result<Self, ConfigError> {
        self.apply(SpeedConfigPatch::target_wpm(wpm))
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedPreset::Normal.config()
    }
}

/// Speed in effect for the word at `index`.
pub fn effective_wpm(index: usize, config: &SpeedConfig) -> u32 {
    let ramp = config.ramp_up_words as usize;
    if index >= ramp {
        return config.target_wpm;
    }

    let start = config.start_wpm as f64;
    let target = config.target_wpm as f64;
    let progress = index as f64 / ramp as f64;
    (start + (target - start) * progress).round() as u32
}

/// Display time for `token` at `wpm`, in milliseconds.
pub fn token_delay_ms(token: &Token, wpm: u32) -> Result<u64, ConfigError> {
    if wpm == 0 {
        return Err(ConfigError::ZeroWpm);
    }

    Ok(((MS_PER_MINUTE / wpm as f64) * token.delay_multiplier).round() as u64)
}

/// Named speed bundles offered by the control surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeedPreset {
    Slow,
    Normal,
    Fast,
    Speed,
}

impl SpeedPreset {
    pub const ALL: [Self; 4] = [Self::Slow, Self::Normal, Self::Fast, Self::Speed];

    pub const fn config(self) -> SpeedConfig {
        let (start_wpm, target_wpm, ramp_up_words) = match self {
            Self::Slow => (150, 250, 40),
            Self::Normal => (200, 350, 30),
            Self::Fast => (300, 500, 25),
            Self::Speed => (400, 700, 20),
        };

        SpeedConfig {
            start_wpm,
            target_wpm,
            ramp_up_words,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::Speed => "speed",
        }
    }

    /// Preset whose target speed equals the one in `config`, if any.
    pub fn matching(config: &SpeedConfig) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.config().target_wpm == config.target_wpm)
    }
}

impl fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown speed preset {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for SpeedPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}
