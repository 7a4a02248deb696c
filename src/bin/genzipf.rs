use std::io::{self, BufWriter, Write};

use clap::Parser;
use inplace_codes::zipf::write_zipf_stream;

#[derive(Parser, Debug)]
#[command(about = "Generates non-decreasing counts following a Zipf distribution, in the input format of inplace_codes")]
struct Args {
    /// The number of counts
    counts: u64,
    /// The exponent of the distribution
    #[arg(allow_negative_numbers = true)]
    exponent: f32,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mut out = BufWriter::new(io::stdout().lock());
    write_zipf_stream(&mut out, args.counts, args.exponent)?;
    out.flush()
}
