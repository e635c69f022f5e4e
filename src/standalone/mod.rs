use clap::{Parser, Subcommand};

pub mod engine;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline in-process over local files
    Run {
        /// Glob spec for the input files
        #[arg(short, long)]
        input: String,

        /// Output file; "-" writes the summary to stdout
        #[arg(short, long, default_value = "-")]
        output: String,

        /// Path to the stopword list
        #[arg(short, long, default_value = "excluded.txt")]
        stopwords: String,
    },
}

#[derive(Debug, Clone)]
pub struct Job {
    pub input: String,
    pub output: String,
    pub stopwords: String,
}
