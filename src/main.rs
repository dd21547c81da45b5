use std::path::PathBuf;

use clap::Parser;

use mdsite::{Config, Template};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static site from Markdown pages")]
struct Cli {
    /// Base path prepended to root-relative links (overrides the config)
    base_path: Option<String>,

    /// Site config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Output directory (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mdsite::Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(base_path) = cli.base_path {
        config.site.base_path = base_path;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }

    let paths = &config.paths;
    mdsite::site::copy_static(&paths.static_dir, &paths.output)?;

    let template = Template::load(&paths.template)?;

    let count = mdsite::site::generate_pages(&paths.content, &template, &paths.output, &config.site.base_path)?;

    println!("Generated {} pages in {}", count, paths.output.display());
    Ok(())
}
