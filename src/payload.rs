//! The fixed set of strings the scanner is tested against.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

/// Format of the timestamp payload.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const SMALL_TEST: &str = "SMALL TEST";
pub const LARGE_TEST: &str = "LARGE TEST";

// The degree sign is stored exactly as the scanner's reference fixtures carry it.
const SAMPLES_BEFORE_DATE: [&str; 12] = [
    "Hello ESP32!",
    "QR Scanner Test",
    "https://www.espressif.com",
    "Temperature: 25.3Â°C",
    "Device ID: ESP32S3-001",
    "Status: Online",
    "User: Admin",
    "https://github.com/espressif/esp32-camera",
    "WiFi: Connected",
    "Battery: 85%",
    "Sensor Data: OK",
    "Version: 1.0.0",
];

const SAMPLES_AFTER_DATE: [&str; 2] = [
    r#"JSON: {"temp":23.5,"humidity":60}"#,
    "Action: START_RECORDING",
];

/// Where a payload lands in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactName {
    /// 1-based position in the sample list.
    Indexed(usize),
    Small,
    Large,
}

impl ArtifactName {
    pub fn file_name(&self) -> String {
        match self {
            Self::Indexed(index) => format!("qr_code_{index:02}.png"),
            Self::Small => "qr_small.png".to_string(),
            Self::Large => "qr_large.png".to_string(),
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub name: ArtifactName,
    pub text: String,
}

impl Payload {
    pub fn new(name: ArtifactName, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }
}

pub fn timestamp_payload<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("Date: {}", now.format(TIMESTAMP_FORMAT))
}

/// The 15 indexed samples, with the timestamp taken from `now`.
pub fn sample_payloads<Tz>(now: &DateTime<Tz>) -> Vec<Payload>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let date = timestamp_payload(now);
    SAMPLES_BEFORE_DATE
        .iter()
        .map(|text| text.to_string())
        .chain(std::iter::once(date))
        .chain(SAMPLES_AFTER_DATE.iter().map(|text| text.to_string()))
        .enumerate()
        .map(|(i, text)| Payload::new(ArtifactName::Indexed(i + 1), text))
        .collect()
}

/// Sample list stamped with the local wall-clock time.
pub fn sample_payloads_now() -> Vec<Payload> {
    sample_payloads(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn test_fifteen_samples_in_order() {
        let payloads = sample_payloads(&fixed_time());
        assert_eq!(payloads.len(), 15);
        assert_eq!(payloads[0].text, "Hello ESP32!");
        assert_eq!(payloads[3].text, "Temperature: 25.3Â°C");
        assert_eq!(payloads[13].text, "JSON: {\"temp\":23.5,\"humidity\":60}");
        assert_eq!(payloads[14].text, "Action: START_RECORDING");
        for (i, payload) in payloads.iter().enumerate() {
            assert_eq!(payload.name, ArtifactName::Indexed(i + 1));
        }
    }

    #[test]
    fn test_item_13_is_timestamp() {
        let payloads = sample_payloads(&fixed_time());
        assert_eq!(payloads[12].text, "Date: 2024-03-09 07:05:01");
    }

    #[test]
    fn test_timestamp_shape_for_now() {
        let text = timestamp_payload(&Local::now());
        let stamp = text.strip_prefix("Date: ").unwrap();
        assert_eq!(stamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ArtifactName::Indexed(1).file_name(), "qr_code_01.png");
        assert_eq!(ArtifactName::Indexed(15).file_name(), "qr_code_15.png");
        assert_eq!(ArtifactName::Small.to_string(), "qr_small.png");
        assert_eq!(ArtifactName::Large.to_string(), "qr_large.png");
    }
}
