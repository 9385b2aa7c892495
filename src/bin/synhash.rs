//! Command-line driver: hash messages, compare digests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "SynHash 256-bit fingerprints (not cryptographic)")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one digest per message; reads stdin when no message is given
    Hash { messages: Vec<String> },
    /// Print the Hamming distance between two hex digests
    Distance { a: String, b: String },
    /// Hash two sample messages and print their distance
    Demo,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Hash { messages } if messages.is_empty() => {
            let mut input = Vec::new();
            std::io::stdin()
                .read_to_end(&mut input)
                .context("read stdin")?;
            debug!(bytes = input.len(), "hashing stdin");
            println!("{}", synhash::digest(&input));
        }
        Command::Hash { messages } => {
            let inputs: Vec<&[u8]> = messages.iter().map(|m| m.as_bytes()).collect();
            for digest in synhash::digest_many(&inputs) {
                println!("{digest}");
            }
        }
        Command::Distance { a, b } => {
            let distance = synhash::hamming_distance(&a, &b).context("compare digests")?;
            println!("{distance}");
        }
        Command::Demo => {
            let first = synhash::hash_hex(b"hello, world 1");
            let second = synhash::hash_hex(b"hello, world 2");
            println!("256-bit Hash: {first}");
            println!("256-bit Hash: {second}");
            println!("Hamming Distance: {}", synhash::hamming_distance(&first, &second)?);
        }
    }

    Ok(())
}
