use serde::{Deserialize, Serialize};

/// What a live alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Weather,
    Traffic,
    Booking,
    Suggestion,
}

/// How urgently an alert should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One entry in the live-updates feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Relative display timestamp, e.g. "2 minutes ago"
    pub timestamp: String,
    #[serde(default)]
    pub action_required: bool,
}

/// The canned alerts the feed starts out with
pub fn sample_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            kind: AlertKind::Traffic,
            severity: Severity::Warning,
            title: "Traffic Delay Detected".to_string(),
            message: "Heavy traffic on NH-1. Consider alternate route via NH-44 (+20 mins)"
                .to_string(),
            location: Some("Delhi-Gurgaon Expressway".to_string()),
            timestamp: "2 minutes ago".to_string(),
            action_required: true,
        },
        Alert {
            id: "2".to_string(),
            kind: AlertKind::Weather,
            severity: Severity::Info,
            title: "Weather Update".to_string(),
            message: "Light rain expected in Shimla. Pack umbrella for outdoor activities."
                .to_string(),
            location: Some("Shimla, HP".to_string()),
            timestamp: "15 minutes ago".to_string(),
            action_required: false,
        },
        Alert {
            id: "3".to_string(),
            kind: AlertKind::Suggestion,
            severity: Severity::Info,
            title: "AI Recommendation".to_string(),
            message:
                "Great cafe discovered nearby! \"Mountain View Cafe\" - 4.8★ rating, perfect for lunch stop."
                    .to_string(),
            location: Some("Kalka, HR".to_string()),
            timestamp: "32 minutes ago".to_string(),
            action_required: false,
        },
    ]
}

/// Point-in-time weather snapshot shown alongside the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: i32,
    pub condition: String,
    pub humidity_pct: u32,
    pub wind_speed_kmh: u32,
    pub visibility_km: u32,
}

/// The canned current-conditions sample
pub fn sample_weather() -> WeatherReport {
    WeatherReport {
        location: "Delhi, India".to_string(),
        temperature_c: 28,
        condition: "Partly Cloudy".to_string(),
        humidity_pct: 65,
        wind_speed_kmh: 12,
        visibility_km: 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_alerts_shape() {
        let alerts = sample_alerts();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].kind, AlertKind::Traffic);
        assert!(alerts[0].action_required);
        assert_eq!(alerts[1].severity, Severity::Info);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }
}
