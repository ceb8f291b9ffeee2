//! Configures a remapped grid from a YAML settings file.
//!
//! Writes a sample settings file to the system temp directory, loads it
//! back, and drives the grid from the loaded values.
//!
//! Run with:
//! ```sh
//! RUST_LOG=info cargo run --example settings_demo
//! ```

use meru_hex::{H3Grid, RemapSettings, RemappedGrid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    log::info!("=== Settings-Driven Configuration ===");

    // === 1. Write Sample Settings ===
    let path = std::env::temp_dir().join("meru_hex_demo.yaml");
    log::info!("1. Writing sample settings to {:?}...", path);
    std::fs::write(
        &path,
        "reference_lat: 40.0\nreference_lng: 116.0\nazimuth_rad: 0.5236\n",
    )?;
    log::info!("   ✓ Written");

    // === 2. Load and Configure ===
    log::info!("2. Loading settings and configuring the grid...");
    let settings = RemapSettings::load(&path)?;
    log::info!(
        "   ✓ Loaded: reference ({:.1}, {:.1}), azimuth {:.4} rad",
        settings.reference_lat,
        settings.reference_lng,
        settings.azimuth_rad
    );

    let mut grid = RemappedGrid::new(H3Grid::new());
    grid.configure_from(&settings)?;
    log::info!("   ✓ Grid configured");

    // === 3. Query in the Local Frame ===
    log::info!("3. Indexing the reference point...");
    let cell = grid.point_to_cell(settings.reference_lat, settings.reference_lng, 8)?;
    let center = grid.cell_center(&cell)?;
    log::info!(
        "   ✓ Cell {:?}, center ({:.5}, {:.5})",
        cell,
        center.lat(),
        center.lng()
    );

    std::fs::remove_file(&path).ok();

    log::info!("=== Demo Complete ===");

    Ok(())
}
