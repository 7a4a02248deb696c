use std::{fs::File, io::{self, BufReader, BufWriter, Write}, process, time::Instant};

use clap::Parser;
use inplace_codes::{analyze, FrequencyTable, Limits, Result};

#[derive(Parser, Debug)]
#[command(about = "Computes in place the codeword lengths of a minimum-redundancy code and compares its cost with the entropy")]
struct Args {
    /// The frequency file: a count, then non-decreasing frequencies (standard input if omitted)
    source_name: Option<String>,
    /// A .properties file setting `maxsymbols` and `listlimit`
    #[arg(short, long)]
    config: Option<String>,
    /// Print the report as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,
    /// Print the time spent computing the lengths on stderr
    #[arg(short, long = "time", default_value_t = false)]
    time: bool,
}

fn main() {
    let args = Args::parse();
    let program = std::env::args().next().unwrap_or_else(|| "inplace_codes".to_owned());

    if let Err(e) = run(&args) {
        eprintln!("{}: {}", program, e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let limits = match &args.config {
        Some(path) => Limits::load(path)?,
        None => Limits::default(),
    };

    let table = match &args.source_name {
        Some(name) => FrequencyTable::read(BufReader::new(File::open(name)?), &limits)?,
        None => FrequencyTable::read(io::stdin().lock(), &limits)?,
    };
    let n = table.len();

    let comp_time = Instant::now();
    let report = analyze(table)?;
    let comp_time = comp_time.elapsed().as_nanos();

    let mut out = BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        report.render(&mut out, limits.list_limit)?;
    }
    out.flush()?;

    if args.time {
        eprintln!("computed the lengths of {} symbols in {}ns", n, comp_time);
    }

    Ok(())
}
