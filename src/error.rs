use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtaError {
    #[error("Invalid size '{input}': {reason}")]
    InvalidSize { input: String, reason: String },

    #[error("Invalid speed '{input}': {reason}")]
    InvalidSpeed { input: String, reason: String },

    #[error("Terminal setup error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl EtaError {
    /// Returns a user-friendly suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            EtaError::InvalidSize { .. } => Some(
                "Use a number with an optional unit suffix: 500M, 2G, 10T, 1P. \
                 Bare numbers are gigabytes.",
            ),
            EtaError::InvalidSpeed { .. } => Some(
                "Use a number with an optional unit suffix, e.g. 500M or 2G. \
                 Bare numbers use a unit scaled to the declared size.",
            ),
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for EtaError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(source) => EtaError::Io { source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_display_and_suggestion() {
        let err = EtaError::InvalidSize {
            input: "12X".to_string(),
            reason: "'12x' is not a number".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid size"));
        assert!(msg.contains("12X"));
        assert!(err.suggestion().unwrap().contains("gigabytes"));
    }

    #[test]
    fn invalid_speed_display_and_suggestion() {
        let err = EtaError::InvalidSpeed {
            input: "0".to_string(),
            reason: "amount must be greater than zero".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid speed"));
        assert!(msg.contains("greater than zero"));
        assert!(err.suggestion().unwrap().contains("scaled to the declared size"));
    }

    #[test]
    fn io_error_no_suggestion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err: EtaError = io_err.into();
        assert!(err.suggestion().is_none());
    }
}
