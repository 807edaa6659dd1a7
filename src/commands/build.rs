use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::Config,
};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let config_path = Config::resolve_path(args.config_file.as_deref())?;
    let config = Config::load_from_file(&config_path).await?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    let builder = Builder::new(config, base_path);
    let result = builder.build().await?;

    println!(
        "Built site to {} ({} pages)",
        result.output_dir.display(),
        result.pages
    );

    Ok(())
}
