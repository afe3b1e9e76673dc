//! Downloadable checklist report.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub completion_rate: u8,
    /// Labels of checked items, in checklist order.
    pub completed_items: Vec<String>,
    /// Labels of unchecked items, in checklist order.
    pub recommendations: Vec<String>,
}

impl SecurityReport {
    /// Download name, e.g. `security-report-2024-05-01.json`.
    pub fn file_name(&self) -> String {
        format!("security-report-{}.json", self.timestamp.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON with two space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// `2024-05-01T10:20:30.123Z`
fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SecurityReport {
        SecurityReport {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap(),
            completion_rate: 38,
            completed_items: vec!["Configure firewall properly".to_string()],
            recommendations: vec!["Have an incident response plan".to_string()],
        }
    }

    #[test]
    fn test_report_json_shape() {
        let json = sample().to_json_pretty().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["timestamp"], "2024-05-01T10:20:30.000Z");
        assert_eq!(value["completionRate"], 38);
        assert_eq!(value["completedItems"][0], "Configure firewall properly");
        assert_eq!(value["recommendations"][0], "Have an incident response plan");
        assert!(json.contains("\n  \"completionRate\": 38"));
    }

    #[test]
    fn test_report_parses_back() {
        let json = sample().to_json_pretty().unwrap();
        let parsed: SecurityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(sample().file_name(), "security-report-2024-05-01.json");
    }
}
