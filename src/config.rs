//! Page-level configuration, read from an optional inline JSON block.

use crate::effects::typing::TypingDelays;
use crate::telemetry::{LogLevel, DEFAULT_LOG_LEVEL};
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "effects-config";

const TYPE_DELAY_MS_BOUNDS: (u32, u32) = (10, 5_000);
const DELETE_DELAY_MS_BOUNDS: (u32, u32) = (10, 5_000);
const PAUSE_MS_BOUNDS: (u32, u32) = (0, 60_000);

const DEFAULT_TYPING_TEXTS: [&str; 4] = [
    "Driven to grow as an ethical hacker.",
    "Passionate about cybersecurity & defense.",
    "CTF enthusiast and problem solver.",
    "Building secure systems, one line at a time.",
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BannerLine {
    pub text: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectsConfig {
    pub typing_texts: Vec<String>,
    pub typing_delays: TypingDelays,
    pub matrix_rain: bool,
    pub log_level: LogLevel,
    pub banner: Vec<BannerLine>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            typing_texts: DEFAULT_TYPING_TEXTS.iter().map(ToString::to_string).collect(),
            typing_delays: TypingDelays::default(),
            matrix_rain: false,
            log_level: DEFAULT_LOG_LEVEL,
            banner: vec![BannerLine {
                text: "⚡ SYSTEM ACCESS GRANTED ⚡".to_string(),
                style: "color: #64ffda; font-size: 20px; font-weight: bold;".to_string(),
            }],
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEffectsConfig {
    typing_texts: Option<Vec<String>>,
    type_delay_ms: Option<u32>,
    delete_delay_ms: Option<u32>,
    pause_at_end_ms: Option<u32>,
    pause_at_empty_ms: Option<u32>,
    matrix_rain: Option<bool>,
    log_level: Option<String>,
    banner: Option<Vec<BannerLine>>,
}

impl EffectsConfig {
    /// Parses the inline JSON block. Missing, empty or out-of-range values
    /// keep their defaults; malformed JSON is an error for the caller to log.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let raw: RawEffectsConfig = if source.trim().is_empty() {
            RawEffectsConfig::default()
        } else {
            serde_json::from_str(source)?
        };

        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawEffectsConfig) -> Self {
        let defaults = Self::default();
        let default_delays = defaults.typing_delays;

        let typing_texts = raw
            .typing_texts
            .filter(|texts| !texts.is_empty())
            .unwrap_or(defaults.typing_texts);

        let typing_delays = TypingDelays {
            type_ms: within_bounds(raw.type_delay_ms, default_delays.type_ms, TYPE_DELAY_MS_BOUNDS),
            delete_ms: within_bounds(
                raw.delete_delay_ms,
                default_delays.delete_ms,
                DELETE_DELAY_MS_BOUNDS,
            ),
            pause_at_end_ms: within_bounds(
                raw.pause_at_end_ms,
                default_delays.pause_at_end_ms,
                PAUSE_MS_BOUNDS,
            ),
            pause_at_empty_ms: within_bounds(
                raw.pause_at_empty_ms,
                default_delays.pause_at_empty_ms,
                PAUSE_MS_BOUNDS,
            ),
        };

        Self {
            typing_texts,
            typing_delays,
            matrix_rain: raw.matrix_rain.unwrap_or(defaults.matrix_rain),
            log_level: raw
                .log_level
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(defaults.log_level),
            banner: raw.banner.unwrap_or(defaults.banner),
        }
    }
}

fn within_bounds(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
