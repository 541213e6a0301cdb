//! hamming21 - prints the Hamming(21,16) codeword for a 16 bit hexadecimal value.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use hamming21::ecc::{verify_codebook, PackOrder};
use hamming21::session::{
    encode_value, parse_hex_value, run_session, write_result, EncoderOptions, OutputFormat,
};

/// Encode a 16 bit value as a 21 bit Hamming codeword
#[derive(Parser, Debug)]
#[command(name = "hamming21")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Value to encode, in hexadecimal; prompts on stdin when omitted
    #[arg(short, long)]
    value: Option<String>,

    /// Bit order of the printed codeword
    #[arg(short, long, value_enum, default_value_t = Order::Lsb)]
    order: Order,

    /// Output format of the printed codeword
    #[arg(short, long, value_enum, default_value_t = Format::Int)]
    format: Format,

    /// Encode every 16 bit value and check the results, then exit
    #[arg(long, conflicts_with = "value")]
    check: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Vector position 0 is the least significant bit
    Lsb,
    /// Vector position 0 is the most significant bit
    Msb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Unpadded lowercase hex
    Int,
    /// Three bytes as six hex digits
    Bytes,
}

impl From<Order> for PackOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Lsb => PackOrder::LsbFirst,
            Order::Msb => PackOrder::MsbFirst,
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Int => OutputFormat::Integer,
            Format::Bytes => OutputFormat::Bytes,
        }
    }
}

fn initialise_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn run(cli: Cli) -> Result<()> {
    let options = EncoderOptions {
        order: cli.order.into(),
        format: cli.format.into(),
    };
    debug!("Options: {:?}", options);

    if cli.check {
        let checked = verify_codebook(options.order).context("Self-check failed")?;
        info!("All {} codewords are consistent ({:?})", checked, options.order);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match cli.value {
        Some(text) => {
            let value = parse_hex_value(&text).context("Failed to parse --value")?;
            let codeword = encode_value(value, &options);
            write_result(&mut output, codeword, options.format)?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_session(&mut input, &mut output, &options)
                .context("Failed to encode the entered value")?;
        }
    }
    output.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    initialise_logging();
    let cli = Cli::parse();
    debug!("Command line parsed");
    run(cli)
}
