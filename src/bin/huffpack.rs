use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use huffpack::{compress, decompress};

#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(about = "Compress and decompress files with canonical Huffman coding")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    Compress {
        /// Input file
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },
    /// Decompress a file
    Decompress {
        /// Input file
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Compress { input, output } => {
            let data = fs::read(&input)
                .map_err(|e| format!("{}: {}", input.display(), e))?;
            let packed = compress(&data);

            println!("{} bytes original", data.len());
            println!("{} bytes compressed", packed.len());
            let ratio = data.len() as f64 / packed.len() as f64;
            println!("Compression ratio: {:.3}:1", ratio);

            fs::write(&output, packed)
                .map_err(|e| format!("{}: {}", output.display(), e))?;
        }
        Command::Decompress { input, output } => {
            let data = fs::read(&input)
                .map_err(|e| format!("{}: {}", input.display(), e))?;
            let unpacked = decompress(&data)?;

            println!("{} bytes compressed", data.len());
            println!("{} bytes decompressed", unpacked.len());

            fs::write(&output, unpacked)
                .map_err(|e| format!("{}: {}", output.display(), e))?;
        }
    }

    Ok(())
}
