use std::io;

use clap::Parser;
use inplace_codes::utils::checksum::checksum;

#[derive(Parser, Debug)]
#[command(about = "Computes a permutation-resilient checksum of all the non-control characters of the standard input")]
struct Args {}

fn main() -> io::Result<()> {
    Args::parse();

    println!("{}", checksum(io::stdin().lock())?);
    Ok(())
}
