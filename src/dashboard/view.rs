use serde::Serialize;
use utoipa::ToSchema;

use super::aqi_category::{AqiBadge, AqiCategory};
use super::theme::{select_background, BackgroundTheme};
use crate::report::EnrichedReport;
use crate::units::{celsius_to_fahrenheit, round_half_up};

const NOT_AVAILABLE: &str = "N/A";

/// Display-ready values for the weather card
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardView {
    /// "Name, Region, Country"
    pub title: String,
    pub observed_at: String,
    pub temperature_c: Option<i32>,
    pub temperature_f: Option<i32>,
    /// "21°C / 71°F"
    pub temperature_text: String,
    pub condition: String,
    /// "Winters" on cold dry days, the upper-cased condition otherwise
    pub condition_badge: String,
    pub humidity_text: String,
    pub wind_text: String,
    pub aqi: Option<i32>,
    pub aqi_category: AqiBadge,
    pub ozone: Option<f64>,
    pub background: BackgroundTheme,
    pub background_image: String,
}

impl DashboardView {
    pub fn from_report(report: &EnrichedReport) -> Self {
        let place = &report.place;
        let current = &report.current;
        let condition = current.condition.label();

        let title = std::iter::once(place.name.as_str())
            .chain(place.admin1.as_deref())
            .chain(place.country.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let title = if place.name.is_empty() {
            "Unknown".to_string()
        } else {
            title
        };

        let temperature_c = current.temperature.map(|t| round_half_up(t) as i32);
        let temperature_f = celsius_to_fahrenheit(current.temperature);
        let temperature_text = match (temperature_c, temperature_f) {
            (Some(c), Some(f)) => format!("{c}°C / {f}°F"),
            _ => NOT_AVAILABLE.to_string(),
        };

        let background = select_background(Some(condition), current.temperature);
        let aqi = report.air_quality.aqi_pm25;

        Self {
            title,
            observed_at: current
                .time
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            temperature_c,
            temperature_f,
            temperature_text,
            condition: condition.to_string(),
            condition_badge: condition_badge(condition, current.temperature),
            humidity_text: format!("{}%", or_not_available(current.humidity)),
            wind_text: format!("{} km/h", or_not_available(current.wind_speed)),
            aqi,
            aqi_category: AqiCategory::from_aqi(aqi).into(),
            ozone: report.air_quality.ozone,
            background,
            background_image: background.image_path(),
        }
    }
}

/// "Winters" when it is 5 °C or colder without rain, snow or thunder
pub fn condition_badge(condition: &str, temp_c: Option<f64>) -> String {
    let lower = condition.to_lowercase();
    let wet = ["rain", "snow", "thunder"].iter().any(|w| lower.contains(w));

    if temp_c.is_some_and(|t| t <= 5.0) && !wet {
        "Winters".to_string()
    } else {
        condition.to_uppercase()
    }
}

fn or_not_available(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air_quality::AirQuality;
    use crate::geocoding::Place;
    use crate::report::models::CurrentConditions;
    use crate::weather::Condition;

    fn report(condition: Condition, temperature: Option<f64>) -> EnrichedReport {
        EnrichedReport {
            place: Place {
                name: "Pune".to_string(),
                country: Some("India".to_string()),
                admin1: Some("Maharashtra".to_string()),
                latitude: 18.52,
                longitude: 73.86,
                timezone: Some("Asia/Kolkata".to_string()),
            },
            current: CurrentConditions {
                time: Some("2024-05-01T14:00".to_string()),
                temperature,
                wind_speed: Some(12.3),
                weather_code: Some(0),
                condition,
                humidity: Some(65.0),
            },
            air_quality: AirQuality {
                pm2_5: Some(12.0),
                ozone: Some(85.5),
                aqi_pm25: Some(50),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_view_from_full_report() {
        let view = DashboardView::from_report(&report(Condition::Clear, Some(21.4)));

        assert_eq!(view.title, "Pune, Maharashtra, India");
        assert_eq!(view.observed_at, "2024-05-01T14:00");
        assert_eq!(view.temperature_c, Some(21));
        assert_eq!(view.temperature_f, Some(71));
        assert_eq!(view.temperature_text, "21°C / 71°F");
        assert_eq!(view.condition_badge, "CLEAR");
        assert_eq!(view.humidity_text, "65%");
        assert_eq!(view.wind_text, "12.3 km/h");
        assert_eq!(view.aqi_category.label, "Good");
        assert_eq!(view.aqi_category.class_name.as_deref(), Some("aqi good"));
        assert_eq!(view.ozone, Some(85.5));
        assert_eq!(view.background, BackgroundTheme::Sunny);
        assert_eq!(view.background_image, "/images/sunny.png");
    }

    #[test]
    fn test_view_with_missing_values() {
        let mut r = report(Condition::Unknown, None);
        r.place.admin1 = None;
        r.current.humidity = None;
        r.current.wind_speed = None;
        r.air_quality = AirQuality::default();

        let view = DashboardView::from_report(&r);
        assert_eq!(view.title, "Pune, India");
        assert_eq!(view.temperature_c, None);
        assert_eq!(view.temperature_f, None);
        assert_eq!(view.temperature_text, "N/A");
        assert_eq!(view.humidity_text, "N/A%");
        assert_eq!(view.wind_text, "N/A km/h");
        assert_eq!(view.aqi, None);
        assert_eq!(view.aqi_category.label, "Unknown");
        assert_eq!(view.aqi_category.class_name, None);
    }

    #[test]
    fn test_cold_clouds_keep_cloud_background_but_winters_badge() {
        let view = DashboardView::from_report(&report(Condition::Clouds, Some(-2.0)));

        assert_eq!(view.background, BackgroundTheme::Cloud);
        assert_eq!(view.condition_badge, "Winters");
    }

    #[test]
    fn test_condition_badge() {
        assert_eq!(condition_badge("Snow showers", Some(-5.0)), "SNOW SHOWERS");
        assert_eq!(condition_badge("Thunderstorm", Some(2.0)), "THUNDERSTORM");
        assert_eq!(condition_badge("Fog", Some(4.0)), "Winters");
        assert_eq!(condition_badge("Fog", Some(6.0)), "FOG");
        assert_eq!(condition_badge("Clear", None), "CLEAR");
    }
}
