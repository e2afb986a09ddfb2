use std::fs;

use anyhow::Result;

use folio_core::content::DEMO_CONTENT;
use folio_core::AppConfig;

pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
    } else {
        config.save()?;
        println!("Wrote config: {}", config_path.display());
    }

    let content_path = config.content_path();
    if content_path.exists() && !force {
        println!("Content already exists: {}", content_path.display());
    } else {
        if let Some(parent) = content_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&content_path, DEMO_CONTENT)?;
        println!("Wrote demo content: {}", content_path.display());
    }

    println!("\nEdit the content file, then run:");
    println!("  folio run");
    Ok(())
}
