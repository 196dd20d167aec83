//! gzquine CLI - writes a gzip file that decompresses to itself.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use gzquine::{Quine, QuineOptions, TrailerMode};

/// Write a gzip quine: a .gz file whose decompressed contents are the file itself.
#[derive(Parser, Debug)]
#[command(name = "gzquine")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path
    #[arg(value_name = "OUT")]
    out: PathBuf,

    /// Name stored in the gzip FNAME field (defaults to OUT as given)
    #[arg(short, long)]
    name: Option<String>,

    /// Trailer contents
    #[arg(short, long, value_enum, default_value = "zeroed")]
    trailer: TrailerArg,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrailerArg {
    /// CRC32 and ISIZE left at zero
    Zeroed,
    /// Self-consistent CRC32 and ISIZE, accepted by strict decoders
    Checksummed,
}

impl From<TrailerArg> for TrailerMode {
    fn from(arg: TrailerArg) -> Self {
        match arg {
            TrailerArg::Zeroed => TrailerMode::Zeroed,
            TrailerArg::Checksummed => TrailerMode::Checksummed,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .out
            .to_str()
            .ok_or("output path is not valid UTF-8, pass --name")?
            .to_owned(),
    };

    let options = QuineOptions {
        trailer: args.trailer.into(),
    };

    let start = Instant::now();
    let quine = Quine::build(&name, &options)?;
    let build_time = start.elapsed();

    fs::write(&args.out, quine.as_bytes())?;

    if args.verbose {
        eprintln!("Output: {:?}", args.out);
        eprintln!("  FNAME: {:?}", name);
        eprintln!("  Header: {} B", quine.header().len());
        eprintln!("  Payload: {} B in {} blocks", quine.payload().len(), quine.block_count());
        eprintln!("  Trailer: {:?}, CRC32 {:08x}", args.trailer, quine.crc32());
        eprintln!("  Build time: {:.2?}", build_time);
    }
    println!("{} -> {} B", args.out.display(), quine.len());

    Ok(())
}
