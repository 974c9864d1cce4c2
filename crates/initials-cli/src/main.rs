use clap::{ArgAction, Parser};
use initials_catalog::PropertyCatalog;
use initials_codegen::OutputGroup;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "css-initials")]
#[command(about = "Generate reset stylesheets and data modules of CSS initial values")]
#[command(version)]
struct Cli {
    /// Property catalog JSON (mdn-data `css/properties.json` or a full bundle).
    /// Defaults to the bundled snapshot.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory to write the generated files into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => {
            println!("☯ All done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), initials_cli::Error> {
    let catalog = match &cli.catalog {
        Some(path) => PropertyCatalog::load(path)?,
        None => PropertyCatalog::bundled()?,
    };
    tracing::debug!(properties = catalog.len(), "loaded catalog");

    let written = initials_cli::generate(&catalog, &cli.out_dir, &OutputGroup::defaults())?;
    tracing::info!(files = written, out_dir = %cli.out_dir.display(), "generation complete");
    Ok(())
}
