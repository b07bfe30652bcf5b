// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Notifier(String),
    Slider(SliderError),
}

/// Configuration errors raised before any rendering or interaction is
/// attempted. The slider refuses to build geometry from an invalid setup
/// instead of rendering undefined positions.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// The supplied tariff list contains no entries.
    EmptyTariffList,

    /// Two tariffs in the list share the same identifier.
    DuplicateTariffId(String),

    /// The track was sized with a zero or negative length.
    NonPositiveTrackLength(f32),
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::EmptyTariffList => write!(f, "Tariff list is empty"),
            SliderError::DuplicateTariffId(id) => {
                write!(f, "Duplicate tariff id: {id}")
            }
            SliderError::NonPositiveTrackLength(length) => {
                write!(f, "Track length must be positive, got {length}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Notifier(e) => write!(f, "Notifier Error: {}", e),
            Error::Slider(e) => write!(f, "Slider Error: {}", e),
        }
    }
}

impl From<SliderError> for Error {
    fn from(err: SliderError) -> Self {
        Error::Slider(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn slider_error_converts_to_error() {
        let err: Error = SliderError::EmptyTariffList.into();
        assert!(matches!(err, Error::Slider(SliderError::EmptyTariffList)));
    }

    #[test]
    fn slider_error_display() {
        assert_eq!(
            format!("{}", SliderError::EmptyTariffList),
            "Tariff list is empty"
        );
        assert!(
            format!("{}", SliderError::DuplicateTariffId("2".into())).contains("2")
        );
        assert!(
            format!("{}", SliderError::NonPositiveTrackLength(-3.0)).contains("-3")
        );
    }

    #[test]
    fn notifier_error_formats_properly() {
        let err = Error::Notifier("connection refused".into());
        assert_eq!(format!("{}", err), "Notifier Error: connection refused");
    }
}
