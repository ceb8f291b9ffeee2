//! Error types for MeruHex

/// Result type alias, generic over the grid backend's error type
pub type Result<T, E> = std::result::Result<T, Error<E>>;

/// A latitude/longitude pair outside the valid ranges, or non-finite.
///
/// Valid latitudes are [-90, 90] degrees, valid longitudes [-180, 180]
/// degrees (both ends accepted, -180 and 180 name the same meridian).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Invalid coordinate: lat {lat}, lng {lng} (expected finite lat in [-90, 90] and lng in [-180, 180] degrees)")]
pub struct CoordinateError {
    /// Offending latitude in degrees
    pub lat: f64,
    /// Offending longitude in degrees
    pub lng: f64,
}

/// A matrix that failed the rotation validity check.
///
/// A valid rotation has determinant 1 and its product with its own
/// transpose is the identity, both within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Invalid rotation matrix: determinant {determinant}, deviation from orthogonality {deviation}")]
pub struct RotationError {
    /// Determinant of the rejected matrix
    pub determinant: f64,
    /// Largest elementwise deviation of R * R^T from the identity
    pub deviation: f64,
}

/// Configuration loading error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// File could not be read
    #[error("Failed to read settings file: {0}")]
    Io(String),

    /// YAML could not be parsed
    #[error("Failed to parse settings: {0}")]
    Parse(String),
}

/// MeruHex error types, generic over the grid backend's error type
#[derive(Debug, thiserror::Error)]
pub enum Error<G> {
    /// Coordinate validation failed
    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),

    /// Composed rotation failed the validity check
    #[error("Rotation error: {0}")]
    Rotation(#[from] RotationError),

    /// Error reported by the grid backend, propagated unchanged
    #[error(transparent)]
    Grid(G),
}
