use serde::Serialize;
use utoipa::ToSchema;

/// Background image theme for the dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    Thunder,
    Snow,
    Rain,
    Fog,
    Cloud,
    Winters,
    Sunny,
}

impl BackgroundTheme {
    pub fn id(self) -> &'static str {
        match self {
            Self::Thunder => "thunder",
            Self::Snow => "snow",
            Self::Rain => "rain",
            Self::Fog => "fog",
            Self::Cloud => "cloud",
            Self::Winters => "winters",
            Self::Sunny => "sunny",
        }
    }

    pub fn image_path(self) -> String {
        format!("/images/{}.png", self.id())
    }
}

/// Pick the background for a condition text and temperature (°C).
///
/// Rules are checked in order and the first hit wins, so weather words always
/// beat the cold-temperature rule.
pub fn select_background(condition: Option<&str>, temp_c: Option<f64>) -> BackgroundTheme {
    let condition = condition.filter(|c| !c.is_empty());
    if condition.is_none() && temp_c.is_none() {
        return BackgroundTheme::Sunny;
    }

    let c = condition.unwrap_or_default().to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| c.contains(w));

    if mentions(&["thunder", "storm", "blizzard"]) {
        BackgroundTheme::Thunder
    } else if mentions(&["snow"]) {
        BackgroundTheme::Snow
    } else if mentions(&["rain", "drizzle", "shower"]) {
        BackgroundTheme::Rain
    } else if mentions(&["fog", "mist", "haze"]) {
        BackgroundTheme::Fog
    } else if mentions(&["cloud", "overcast"]) {
        BackgroundTheme::Cloud
    } else if temp_c.is_some_and(|t| t <= 5.0) {
        BackgroundTheme::Winters
    } else {
        // sun/clear/warm, and anything else
        BackgroundTheme::Sunny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BackgroundTheme::*;

    #[test]
    fn test_storm_beats_temperature() {
        assert_eq!(select_background(Some("Thunderstorm"), Some(25.0)), Thunder);
        assert_eq!(select_background(Some("Blizzard"), Some(-10.0)), Thunder);
    }

    #[test]
    fn test_cloud_rule_precedes_winter_rule() {
        assert_eq!(select_background(Some("Clouds"), Some(-2.0)), Cloud);
        assert_eq!(select_background(Some("Overcast"), Some(5.0)), Cloud);
    }

    #[test]
    fn test_cascade_order() {
        // "Snow showers" hits snow before the shower rule
        assert_eq!(select_background(Some("Snow showers"), Some(0.0)), Snow);
        assert_eq!(select_background(Some("Rain showers"), Some(20.0)), Rain);
        assert_eq!(select_background(Some("Drizzle"), None), Rain);
        assert_eq!(select_background(Some("Fog"), Some(1.0)), Fog);
        assert_eq!(select_background(Some("haze"), Some(30.0)), Fog);
    }

    #[test]
    fn test_cold_without_weather_words_is_winters() {
        assert_eq!(select_background(None, Some(3.0)), Winters);
        assert_eq!(select_background(Some("Clear"), Some(5.0)), Winters);
        assert_eq!(select_background(Some("Unknown"), Some(-20.0)), Winters);
    }

    #[test]
    fn test_defaults_to_sunny() {
        assert_eq!(select_background(None, None), Sunny);
        assert_eq!(select_background(Some(""), None), Sunny);
        assert_eq!(select_background(Some("Clear"), Some(5.1)), Sunny);
        assert_eq!(select_background(Some("Unknown"), None), Sunny);
    }

    #[test]
    fn test_image_path() {
        assert_eq!(Winters.image_path(), "/images/winters.png");
        assert_eq!(serde_json::to_value(Thunder).unwrap(), "thunder");
    }
}
