//! Shared helpers for the h3o-backed integration tests.

#![cfg(feature = "h3")]
#![allow(dead_code)]

use meru_hex::{GeoPoint, H3Grid, RemappedGrid};

/// Beijing reference used across the scenarios.
pub const BEIJING: (f64, f64) = (40.0, 116.0);

/// A remapper over the real H3 backend, identity orientation.
pub fn native_grid() -> RemappedGrid<H3Grid> {
    RemappedGrid::new(H3Grid::new())
}

/// A remapper configured at the Beijing reference with the given azimuth.
pub fn beijing_grid(azimuth_rad: f64) -> RemappedGrid<H3Grid> {
    RemappedGrid::with_reference(H3Grid::new(), BEIJING.0, BEIJING.1, azimuth_rad)
        .expect("beijing reference configures")
}

/// Axis-aligned square ring around (`lat`, `lng`), vertices as (lat, lng).
pub fn square_ring(lat: f64, lng: f64, half_deg: f64) -> Vec<[f64; 2]> {
    vec![
        [lat + half_deg, lng - half_deg],
        [lat + half_deg, lng + half_deg],
        [lat - half_deg, lng + half_deg],
        [lat - half_deg, lng - half_deg],
    ]
}

/// Assert two points coincide within `eps_deg` degrees on both axes.
pub fn assert_points_close(a: &GeoPoint, b: &GeoPoint, eps_deg: f64) {
    assert!(
        (a.lat() - b.lat()).abs() < eps_deg && (a.lng() - b.lng()).abs() < eps_deg,
        "points differ: ({}, {}) vs ({}, {})",
        a.lat(),
        a.lng(),
        b.lat(),
        b.lng()
    );
}
