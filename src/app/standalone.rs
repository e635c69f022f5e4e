use anyhow::Result;
use clap::Parser;
use sentimr::standalone::{engine, Args, Commands, Job};

fn parse_args() -> Job {
    let args = Args::parse();
    match args.command {
        Commands::Run {
            input,
            output,
            stopwords,
        } => Job {
            input,
            output,
            stopwords,
        },
    }
}

fn main() -> Result<()> {
    sentimr::diagnostics::init();
    let job = parse_args();
    engine::run_job(&job)
}
