//! Show the effective configuration.

use swipeable_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let path = config_file_path();
    println!(
        "Standard config file: {} ({})",
        path.display(),
        if path.exists() { "present" } else { "absent" }
    );
    println!();

    let t = &config.tracker;
    println!("Tracker:");
    println!("  Delta: {} px", t.delta);
    println!("  Flick threshold: {} px/ms", t.flick_threshold);
    println!("  Rotation: {} deg", t.rotation_angle);
    println!("  Stop propagation: {}", t.stop_propagation);
    println!(
        "  Prevent default on move: {}",
        t.prevent_default_touchmove_event
    );
    println!("  Disabled: {}", t.disabled);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  JSON: {}", config.logging.json);
    if let Some(ref file) = config.logging.file {
        println!("  File: {}", file.display());
    }

    if let Err(e) = t.validate() {
        println!();
        println!("[WARN] {e}");
    }

    Ok(())
}
