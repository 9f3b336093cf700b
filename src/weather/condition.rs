use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Condition label derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Condition {
    Clear,
    Clouds,
    Fog,
    Drizzle,
    Rain,
    Snow,
    #[serde(rename = "Rain showers")]
    RainShowers,
    #[serde(rename = "Snow showers")]
    SnowShowers,
    Thunderstorm,
    /// A code outside the known table. Still a valid label.
    Unknown,
}

impl Condition {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Clouds,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 66 | 67 => Self::Rain,
            71 | 73 | 75 | 77 => Self::Snow,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// No code, no label. Callers treat that as an unsupported condition.
    pub fn classify(code: Option<i32>) -> Option<Self> {
        code.map(Self::from_code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
