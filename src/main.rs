mod config;
mod tools;
mod trx_format;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::load_config;
use crate::tools::{
    name::print_name,
    post::{create_post_json, load_keys_file},
    trx::create_trx_json,
};

#[derive(Parser)]
#[command(name = "xmaxtrx", version, about = "xmax transaction JSON tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (default: ./xmaxtrx.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an unsigned transaction from a JSON request file
    Trx {
        request_json: PathBuf,
        params: Vec<String>,
        #[arg(long)]
        output_path: Option<PathBuf>,
        /// Print the result instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Bundle formatted transactions with their signing keys
    Post {
        trx_json: Vec<PathBuf>,
        /// Comma separated private keys
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
        /// JSON array of private keys
        #[arg(long, conflicts_with = "keys")]
        keys_file: Option<PathBuf>,
        #[arg(long)]
        output_path: Option<PathBuf>,
        #[arg(long)]
        stdout: bool,
    },
    /// Show the integer value of an account name (EOS-style 64-bit packing,
    /// 13 base-32 characters)
    Name { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Trx {
            request_json,
            params,
            output_path,
            stdout,
        } => {
            let out = output_path.unwrap_or_else(|| config.output_dir.clone());
            let to_path = (!stdout).then_some(out.as_path());
            create_trx_json(&request_json, &params, &config, to_path)?;
        }
        Commands::Post {
            trx_json,
            keys,
            keys_file,
            output_path,
            stdout,
        } => {
            let keys = match keys_file {
                Some(path) => load_keys_file(path)?,
                None => keys,
            };
            let out = output_path.unwrap_or_else(|| config.output_dir.clone());
            let to_path = (!stdout).then_some(out.as_path());
            create_post_json(&keys, &trx_json, to_path)?;
        }
        Commands::Name { name } => print_name(&name)?,
    }

    Ok(())
}
