use anyhow::Result;
use clap::Parser;
use sentimr::cmd::reducer::Args;
use sentimr::stage::rank;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    sentimr::diagnostics::init();
    let _args = Args::parse();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    rank::run(stdin, stdout)
}
