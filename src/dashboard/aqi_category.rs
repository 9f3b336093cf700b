use serde::Serialize;
use utoipa::ToSchema;

/// Severity band for an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AqiCategory {
    pub fn from_aqi(aqi: Option<i32>) -> Self {
        match aqi {
            None => Self::Unknown,
            Some(..=50) => Self::Good,
            Some(..=100) => Self::Moderate,
            Some(..=150) => Self::UnhealthySensitive,
            Some(..=200) => Self::Unhealthy,
            Some(..=300) => Self::VeryUnhealthy,
            Some(_) => Self::Hazardous,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy (Sensitive)",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS classes for the badge; `Unknown` gets no styling
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Good => Some("aqi good"),
            Self::Moderate => Some("aqi moderate"),
            Self::UnhealthySensitive | Self::Unhealthy | Self::VeryUnhealthy | Self::Hazardous => {
                Some("aqi unhealthy")
            }
            Self::Unknown => None,
        }
    }
}

/// Serialized form of a category
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AqiBadge {
    pub label: String,
    pub class_name: Option<String>,
}

impl From<AqiCategory> for AqiBadge {
    fn from(category: AqiCategory) -> Self {
        Self {
            label: category.label().to_string(),
            class_name: category.class_name().map(str::to_string),
        }
    }
}
