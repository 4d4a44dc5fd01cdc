// File: crates/label-examples/src/bin/dip14.rs
// Summary: Minimal example that renders a 7404 hex-inverter label to PNG.

use anyhow::{Context, Result};
use label_core::{render_with_config, Chip, PackageGeometry, RenderConfig};

fn main() -> Result<()> {
    let pins = [
        "1A", "1Y", "2A", "2Y", "3A", "3Y", "GND", "4Y", "4A", "5Y", "5A", "6Y", "6A", "VCC",
    ];
    let chip = Chip::with_pins("7404", "Hex inverter", PackageGeometry::dip(), pins)
        .context("build chip descriptor")?;

    let config = RenderConfig::default();
    let label = render_with_config(&chip, &config).context("render label")?;

    let out = std::path::PathBuf::from("target/out/7404.png");
    label.save_png(&out).context("save label")?;
    println!(
        "Wrote {} ({}x{} px at {} dpi)",
        out.display(),
        label.width(),
        label.height(),
        label.dpi()
    );
    Ok(())
}
