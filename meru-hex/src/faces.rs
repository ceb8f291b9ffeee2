//! Native reference directions of the H3 grid.
//!
//! H3 tessellates an icosahedron, so its native orientation is fully
//! described by the 20 face-center directions below. Remapping picks the
//! face center closest to the caller's reference point and rotates it onto
//! that point; everything here serves that one lookup.
//!
//! The coordinates are H3's published `faceCenterGeo` constants and are
//! consumed as-is, never derived.

use crate::core::{GeoPoint, Vec3};

/// Icosahedron face centers as (lat, lng) radians, in H3 face order.
#[rustfmt::skip]
const FACE_CENTERS_RAD: [(f64, f64); 20] = [
    (0.803_582_649_718_989_94, 1.248_397_419_617_396),      // face 0
    (1.307_747_883_455_638_2, 2.536_945_009_877_921),       // face 1
    (1.054_751_253_523_952, -1.347_517_358_900_396_6),      // face 2
    (0.600_191_595_538_186_8, -0.450_603_909_469_755_75),   // face 3
    (0.491_715_428_198_773_87, 0.401_988_202_911_306_94),   // face 4
    (0.172_745_327_415_618_7, 1.678_146_885_280_433_7),     // face 5
    (0.605_929_321_571_350_7, 2.953_923_329_812_411_6),     // face 6
    (0.427_370_518_328_979_64, -1.888_876_200_336_285_4),   // face 7
    (-0.079_066_118_549_212_83, -0.733_429_513_380_867_74), // face 8
    (-0.230_961_644_455_383_64, 0.506_495_587_332_349),     // face 9
    (0.079_066_118_549_212_83, 2.408_163_140_208_925_5),    // face 10
    (0.230_961_644_455_383_64, -2.635_097_066_257_444),     // face 11
    (-0.172_745_327_415_618_7, -1.463_445_768_309_359_5),   // face 12
    (-0.605_929_321_571_350_7, -0.187_669_323_777_381_62),  // face 13
    (-0.427_370_518_328_979_64, 1.252_716_453_253_508),     // face 14
    (-0.600_191_595_538_186_8, 2.690_988_744_120_037_5),    // face 15
    (-0.491_715_428_198_773_87, -2.739_604_450_678_486_3),  // face 16
    (-0.803_582_649_718_989_94, -1.893_195_233_972_397),    // face 17
    (-1.307_747_883_455_638_2, -0.604_647_643_711_872_1),   // face 18
    (-1.054_751_253_523_952, 1.794_075_294_689_396_6),      // face 19
];

/// Number of icosahedron faces.
pub const FACE_COUNT: usize = FACE_CENTERS_RAD.len();

/// Iterate over the 20 face centers in H3 face order.
pub fn face_centers() -> impl Iterator<Item = GeoPoint> {
    FACE_CENTERS_RAD
        .iter()
        .map(|&(lat, lng)| GeoPoint::from_radians_unchecked(lat, lng))
}

/// The face center closest to `point` on the great circle.
///
/// Great-circle distance is monotone in the dot product of the unit
/// vectors, so this maximizes the dot product over the table. The first
/// maximum wins; for a point equidistant from several faces (measure zero
/// on the sphere) the lowest face index is returned.
pub fn nearest_face_center(point: &GeoPoint) -> GeoPoint {
    nearest_face_center_with_dot(point).0
}

/// Nearest face center plus its dot product with `point`, for callers
/// that also want the alignment quality.
pub(crate) fn nearest_face_center_with_dot(point: &GeoPoint) -> (GeoPoint, f64) {
    let target: Vec3 = point.to_vec3();
    let mut best = GeoPoint::from_radians_unchecked(FACE_CENTERS_RAD[0].0, FACE_CENTERS_RAD[0].1);
    let mut best_dot = best.to_vec3().dot(&target);
    for face in face_centers().skip(1) {
        let dot = face.to_vec3().dot(&target);
        if dot > best_dot {
            best = face;
            best_dot = dot;
        }
    }
    (best, best_dot)
}
