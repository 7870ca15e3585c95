use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wifi_icons::batch::{self, Selection};
use wifi_icons::config::Config;
use wifi_icons::logging;
use wifi_icons::render::png_backend_available;

#[derive(Parser)]
#[command(name = "wifi-icons")]
#[command(about = "Generate wifi status bar and app icons", long_about = None)]
struct Cli {
    /// Output directory, created if missing
    #[arg(short, long, default_value = "./icons")]
    output: PathBuf,

    /// Only generate status bar icons
    #[arg(long)]
    status_bar_only: bool,

    /// Only generate app icons
    #[arg(long)]
    app_icon_only: bool,

    /// Icon set configuration (YAML). Without it the built-in icon sets are used
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the files that would be written without rendering anything
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn selection(&self) -> Selection {
        Selection::from_flags(self.status_bar_only, self.app_icon_only)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !png_backend_available() {
        eprintln!("Error: PNG support is unavailable in the imaging backend");
        eprintln!("Rebuild with the `png` feature of the `image` crate enabled");
        std::process::exit(1);
    }

    logging::init(cli.verbose);

    let config = Config::load_or_default(cli.config.as_deref())?;
    let selection = cli.selection();

    if cli.status_bar_only && cli.app_icon_only {
        tracing::warn!("Both --status-bar-only and --app-icon-only given; nothing to generate");
    }

    if cli.dry_run {
        for job in batch::plan(&config, selection) {
            println!("{}", cli.output.join(job.file_name()).display());
        }
        return Ok(());
    }

    batch::generate(&cli.output, &config, selection)?;

    Ok(())
}
