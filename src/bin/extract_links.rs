use std::{io::{self, BufWriter, Write}, process};

use clap::Parser;
use inplace_codes::utils::links::extract_links;

#[derive(Parser, Debug)]
#[command(about = "Turns a crawler dump read from standard input into one `url<TAB>links...` line per page")]
struct Args {}

fn main() {
    Args::parse();

    let mut out = BufWriter::new(io::stdout().lock());
    let result = extract_links(io::stdin().lock(), &mut out);
    let flushed = out.flush();

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
    if let Err(e) = flushed {
        eprintln!("extract_links: {}", e);
        process::exit(1);
    }
}
