use anyhow::Result;
use clap::Parser;
use sentimr::cmd::combiner::Args;
use sentimr::stage::combine;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    sentimr::diagnostics::init();
    let _args = Args::parse();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    combine::run(stdin, stdout)
}
