use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use picscatter::types::ScatterParams;

#[derive(Parser)]
#[command(name = "picscatter", version, about = "Scatter pictures across a surface")]
struct Cli {
    /// Params JSON file; reads stdin when omitted.
    params: Option<PathBuf>,
    /// Override the seed from the params file.
    #[arg(long)]
    seed: Option<u64>,
    /// Pretty-print the result.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = match &cli.params {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut params: ScatterParams = serde_json::from_str(&raw)?;
    if let Some(seed) = cli.seed {
        params.seed = seed;
    }

    let result = picscatter::scatter(&params)?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{out}");
    Ok(())
}
