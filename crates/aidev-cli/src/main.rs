mod cmd;

use aidev_core::settings::{is_truthy, Settings};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aidev",
    about = "Provision a workspace for the AI-assisted development workflow",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    opts: WorkspaceOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct WorkspaceOpts {
    /// Platform repository (owner/name slug, URL, or local path)
    #[arg(
        long,
        global = true,
        env = "PLATFORM_REPO",
        default_value = "everyinc/platform"
    )]
    platform_repo: String,

    /// Branch or tag of the platform repository to check out
    #[arg(long, global = true, env = "PLATFORM_VERSION", default_value = "main")]
    platform_version: String,

    /// Local platform checkout path (default: ~/.cache/aidev/platform)
    #[arg(long, global = true, env = "PLATFORM_DIR")]
    platform_dir: Option<PathBuf>,

    /// Workspace root (default: current directory)
    #[arg(long, global = true, env = "WORKSPACE_DIR")]
    workspace: Option<PathBuf>,

    /// Skip Claude CLI install and agent linking (truthy: 1, true, yes)
    #[arg(
        long,
        global = true,
        env = "SKIP_CLAUDE_SETUP",
        default_value = "false",
        value_name = "BOOL"
    )]
    skip_claude_setup: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full bootstrap: sync platform, install tooling, link agents,
    /// materialize scaffold files
    Bootstrap,

    /// Sync the platform checkout to the pinned version
    Sync,

    /// Rebuild agent links from the platform checkout
    Link,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = Settings::resolve(
        cli.opts.platform_repo,
        cli.opts.platform_version,
        cli.opts.platform_dir,
        cli.opts.workspace,
        is_truthy(&cli.opts.skip_claude_setup),
    )
    .map_err(anyhow::Error::from)
    .and_then(|settings| match cli.command {
        Commands::Bootstrap => cmd::bootstrap::run(&settings),
        Commands::Sync => cmd::sync::run(&settings),
        Commands::Link => cmd::link::run(&settings),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
