//! Remapped grid walkthrough - configures a grid over Beijing and
//! compares local-frame lookups against the plain H3 indexing.
//!
//! Sequence:
//! 1. Index a point with an unconfigured (identity) grid
//! 2. Configure the reference point and azimuth
//! 3. Re-index the same point in the local frame
//! 4. Inspect cell center and boundary
//! 5. Walk neighbor rings
//! 6. Polyfill a square around the reference
//! 7. Reset and confirm identity behavior returns
//!
//! Run with:
//! ```sh
//! RUST_LOG=info cargo run --example remap_demo
//! ```

use meru_hex::{CoordOrder, H3Grid, RemappedGrid};

const BEIJING: (f64, f64) = (40.0, 116.0);
const RESOLUTION: u8 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    log::info!("=== Remapped Grid Demo (Beijing, res {}) ===", RESOLUTION);

    // === 1. Identity Lookup ===
    log::info!("1. Indexing with an unconfigured grid...");
    let mut grid = RemappedGrid::new(H3Grid::new());
    let native_cell = grid.point_to_cell(BEIJING.0, BEIJING.1, RESOLUTION)?;
    log::info!("   ✓ Native cell: {:?}", native_cell);

    // === 2. Configure Reference ===
    let azimuth = 30.0_f64.to_radians();
    log::info!(
        "2. Configuring reference ({:.1}, {:.1}) with azimuth {:.1}°...",
        BEIJING.0,
        BEIJING.1,
        azimuth.to_degrees()
    );
    grid.configure(BEIJING.0, BEIJING.1, azimuth)?;
    log::info!("   ✓ Rotation installed");

    // === 3. Local-Frame Lookup ===
    log::info!("3. Re-indexing the same point in the local frame...");
    let local_cell = grid.point_to_cell(BEIJING.0, BEIJING.1, RESOLUTION)?;
    log::info!("   ✓ Local cell:  {:?}", local_cell);
    log::info!(
        "   ✓ Cell changed by remapping: {}",
        native_cell != local_cell
    );

    // === 4. Cell Geometry ===
    log::info!("4. Reading center and boundary in the local frame...");
    let center = grid.cell_center(&local_cell)?;
    log::info!(
        "   ✓ Center: ({:.5}, {:.5}), {:.3}° from query point",
        center.lat(),
        center.lng(),
        ((center.lat() - BEIJING.0).powi(2) + (center.lng() - BEIJING.1).powi(2)).sqrt()
    );
    let boundary = grid.cell_boundary(&local_cell)?;
    log::info!("   ✓ Boundary vertices: {}", boundary.len());

    // === 5. Neighbor Rings ===
    log::info!("5. Walking neighbor rings...");
    let disk = grid.ring_cells(&local_cell, 2)?;
    let rings = grid.ring_cells_by_distance(&local_cell, 2)?;
    log::info!("   ✓ Cells within 2 steps: {}", disk.len());
    for (distance, ring) in rings.iter().enumerate() {
        log::info!("   ✓ Ring {}: {} cells", distance, ring.len());
    }

    // === 6. Polyfill ===
    log::info!("6. Filling a 1°x1° square around the reference...");
    let ring = [
        [BEIJING.0 + 0.5, BEIJING.1 - 0.5],
        [BEIJING.0 + 0.5, BEIJING.1 + 0.5],
        [BEIJING.0 - 0.5, BEIJING.1 + 0.5],
        [BEIJING.0 - 0.5, BEIJING.1 - 0.5],
    ];
    let filled = grid.polyfill(&ring, 5, CoordOrder::LatLng)?;
    log::info!("   ✓ Filled {} cells at res 5", filled.len());

    // === 7. Reset ===
    log::info!("7. Resetting to the identity frame...");
    grid.reset();
    let after_reset = grid.point_to_cell(BEIJING.0, BEIJING.1, RESOLUTION)?;
    log::info!(
        "   ✓ Lookup matches native again: {}",
        after_reset == native_cell
    );

    log::info!("=== Demo Complete ===");

    Ok(())
}
