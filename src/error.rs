use std::path::PathBuf;

/// Everything that can stop a fixture batch.
///
/// All variants are fatal: the generator never skips a payload and carries on.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("payload {text:?} does not fit in a QR symbol: {reason}")]
    EncodingCapacity { text: String, reason: String },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot render with box size {box_size} and border {border}")]
    InvalidRenderConfig { box_size: u32, border: u32 },

    #[error("encoder returned {modules} modules for a grid {width} wide")]
    MalformedGrid { width: u32, modules: usize },

    #[error("failed to generate {} for {text:?}: {source}", path.display())]
    PayloadFailed {
        text: String,
        path: PathBuf,
        #[source]
        source: Box<GenerateError>,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_payload() {
        let err = GenerateError::EncodingCapacity {
            text: "LARGE TEST".to_string(),
            reason: "data too long".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"LARGE TEST\""));
        assert!(msg.contains("data too long"));
    }

    #[test]
    fn test_create_dir_message_names_path() {
        let err = GenerateError::CreateDir {
            path: PathBuf::from("qr_codes"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to create output directory qr_codes: denied");
    }

    #[test]
    fn test_payload_message_names_text_and_path() {
        let err = GenerateError::PayloadFailed {
            text: "Hello ESP32!".to_string(),
            path: PathBuf::from("qr_codes/qr_code_01.png"),
            source: Box::new(GenerateError::InvalidRenderConfig {
                box_size: 0,
                border: 4,
            }),
        };
        assert_eq!(
            err.to_string(),
            "failed to generate qr_codes/qr_code_01.png for \"Hello ESP32!\": \
             cannot render with box size 0 and border 4"
        );
    }
}
