use std::path::Path;

use crate::{CleanArgs, build::base_path_from_config, config::Config};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let config_path = Config::resolve_path(args.config_file.as_deref())?;
    let config = Config::load_from_file(&config_path).await?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    clean_output(&base_path.join(&config.site.output), args.dry_run).await?;

    Ok(())
}

/// Delete the generated site folder. Returns whether it existed.
async fn clean_output(site_path: &Path, dry_run: bool) -> Result<bool, std::io::Error> {
    if !site_path.exists() {
        println!("Nothing to clean at {}", site_path.display());
        return Ok(false);
    }

    if dry_run {
        println!("Would delete {}", site_path.display());
    } else {
        tokio::fs::remove_dir_all(site_path).await?;
        println!("Deleted {}", site_path.display());
    }

    Ok(true)
}
