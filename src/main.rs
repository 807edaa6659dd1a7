use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;
mod filters;
mod util;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: ImgwrapCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "imgwrap.yaml")]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "imgwrap.yaml")]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Parser)]
struct WrapArgs {
    /// HTML file to read (reads stdin when omitted)
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ImgwrapCommand {
    /// Initialize a new imgwrap project
    Init(InitArgs),

    /// Build the site
    Build(BuildArgs),

    /// Delete the generated site
    Clean(CleanArgs),

    /// Center every <img> tag in an HTML fragment and print the result
    Wrap(WrapArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        ImgwrapCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        ImgwrapCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        ImgwrapCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
        ImgwrapCommand::Wrap(args) => {
            commands::wrap::run(&args).await?;
        }
    }

    Ok(())
}
