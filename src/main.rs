use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::info;
use skyline::{compute_skyline, input, output};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skyline",
    about = "Compute the skyline of a set of rectangular buildings",
    version
)]
struct Cli {
    /// Building count followed by `left height right` triples; `-` reads stdin
    #[arg(default_value = "input.txt")]
    input: PathBuf,
    /// Write key points to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

// RUST_LOG wins over -v
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let buildings = if cli.input.as_os_str() == "-" {
        input::read_buildings(io::stdin().lock()).context("failed to read buildings from stdin")?
    } else {
        input::load_buildings(&cli.input)
            .with_context(|| format!("failed to read buildings from {}", cli.input.display()))?
    };
    info!("read {} buildings", buildings.len());

    let skyline = compute_skyline(&buildings).context("skyline sweep aborted")?;
    info!("computed {} key points", skyline.len());

    let written = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            output::write_skyline(BufWriter::new(file), &skyline)
        }
        None => output::write_skyline(io::stdout().lock(), &skyline),
    };
    written.context("failed to write skyline")?;
    Ok(())
}
