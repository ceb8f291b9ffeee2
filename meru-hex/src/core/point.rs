//! Geographic points with paired angular and Cartesian forms.

use serde::{Deserialize, Serialize};

use crate::core::linalg::Vec3;
use crate::error::CoordinateError;

/// A point on the sphere, held in degrees and radians side by side.
///
/// Both representations are fixed at construction and the constructors
/// validate ranges, so every `GeoPoint` in the program names a real
/// location and accessors never recompute trigonometry inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint", into = "RawGeoPoint")]
pub struct GeoPoint {
    lat_deg: f64,
    lng_deg: f64,
    lat_rad: f64,
    lng_rad: f64,
}

impl GeoPoint {
    /// Create a point from degrees.
    ///
    /// Latitude must be in [-90, 90] and longitude in [-180, 180], both
    /// finite. -180 and 180 name the same meridian and both are accepted.
    pub fn new(lat_deg: f64, lng_deg: f64) -> Result<Self, CoordinateError> {
        if (-90.0..=90.0).contains(&lat_deg) && (-180.0..=180.0).contains(&lng_deg) {
            Ok(Self {
                lat_deg,
                lng_deg,
                lat_rad: lat_deg.to_radians(),
                lng_rad: lng_deg.to_radians(),
            })
        } else {
            Err(CoordinateError {
                lat: lat_deg,
                lng: lng_deg,
            })
        }
    }

    /// Create a point from radians (latitude in [-π/2, π/2], longitude in
    /// [-π, π]).
    pub fn from_radians(lat_rad: f64, lng_rad: f64) -> Result<Self, CoordinateError> {
        use std::f64::consts::{FRAC_PI_2, PI};
        if (-FRAC_PI_2..=FRAC_PI_2).contains(&lat_rad) && (-PI..=PI).contains(&lng_rad) {
            Ok(Self::from_radians_unchecked(lat_rad, lng_rad))
        } else {
            Err(CoordinateError {
                lat: lat_rad.to_degrees(),
                lng: lng_rad.to_degrees(),
            })
        }
    }

    /// Constructor for values that are in range by construction
    /// (asin/atan2 output, the face-center table).
    pub(crate) fn from_radians_unchecked(lat_rad: f64, lng_rad: f64) -> Self {
        Self {
            lat_deg: lat_rad.to_degrees(),
            lng_deg: lng_rad.to_degrees(),
            lat_rad,
            lng_rad,
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat_deg
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng_deg
    }

    /// Latitude in radians.
    #[inline]
    pub fn lat_radians(&self) -> f64 {
        self.lat_rad
    }

    /// Longitude in radians.
    #[inline]
    pub fn lng_radians(&self) -> f64 {
        self.lng_rad
    }

    /// Unit vector for this point.
    /// ```text
    /// x = cos(lat) * cos(lng)
    /// y = cos(lat) * sin(lng)
    /// z = sin(lat)
    /// ```
    #[inline]
    pub fn to_vec3(&self) -> Vec3 {
        let (sin_lat, cos_lat) = self.lat_rad.sin_cos();
        let (sin_lng, cos_lng) = self.lng_rad.sin_cos();
        Vec3::new(cos_lat * cos_lng, cos_lat * sin_lng, sin_lat)
    }

    /// Point under a unit vector: lat = asin(z), lng = atan2(y, x).
    ///
    /// `z` is clamped to [-1, 1] first; rotated unit vectors can exceed 1
    /// by a rounding ulp and asin would return NaN.
    pub fn from_vec3(v: &Vec3) -> GeoPoint {
        let lat_rad = v.z.clamp(-1.0, 1.0).asin();
        let lng_rad = v.y.atan2(v.x);
        Self::from_radians_unchecked(lat_rad, lng_rad)
    }

    /// `[lng, lat]` in degrees, GeoJSON position order.
    #[inline]
    pub fn to_lnglat(&self) -> [f64; 2] {
        [self.lng_deg, self.lat_deg]
    }
}

impl Vec3 {
    /// Point under this vector, the inverse of [`GeoPoint::to_vec3`].
    #[inline]
    pub fn to_geo(&self) -> GeoPoint {
        GeoPoint::from_vec3(self)
    }
}

/// Serde surface for `GeoPoint`: degrees only, revalidated on the way in
/// and radians rederived rather than trusted from input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = CoordinateError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, CoordinateError> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

impl From<GeoPoint> for RawGeoPoint {
    fn from(p: GeoPoint) -> Self {
        RawGeoPoint {
            lat: p.lat_deg,
            lng: p.lng_deg,
        }
    }
}
