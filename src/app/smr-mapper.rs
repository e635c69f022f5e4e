use anyhow::Result;
use clap::Parser;
use sentimr::cmd::mapper::Args;
use sentimr::stage::tokenize;
use sentimr::stopwords::StopwordSet;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    sentimr::diagnostics::init();
    let args = Args::parse();

    let stopwords = StopwordSet::load(&args.stopwords);
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    tokenize::run(stdin, stdout, &stopwords)
}
