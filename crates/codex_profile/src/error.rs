use thiserror::Error;

/// A serialized profile whose stored values disagree with its numbers.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("{field} is {found}, expected {expected} from life path and destiny")]
    Derived {
        field: &'static str,
        found: String,
        expected: String,
    },
    #[error("{field} bearing {angle} is outside [0, 360)")]
    Bearing { field: &'static str, angle: f64 },
    #[error("sun bearing must be 0, found {0}")]
    SunBearing(f64),
    #[error("moon sign is not derived and must be null")]
    MoonSign,
}
