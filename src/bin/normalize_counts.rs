use std::{io::{self, BufWriter, Write}, process};

use clap::Parser;
use inplace_codes::utils::normalize::CountNormalizer;

#[derive(Parser, Debug)]
#[command(about = "Reads `count value` pairs and prints the normalized count of every value in the covered range")]
struct Args {}

fn main() {
    Args::parse();

    let mut normalizer = CountNormalizer::new();
    let result = normalizer.read(io::stdin().lock()).and_then(|_| {
        let mut out = BufWriter::new(io::stdout().lock());
        normalizer.write(&mut out)?;
        out.flush()?;
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("normalize_counts: {}", e);
        process::exit(1);
    }
}
