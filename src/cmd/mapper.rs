use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the stopword list, a plain-text file of whitespace-delimited
    /// words. A missing file is reported and treated as an empty list.
    #[clap(short, long, default_value = "excluded.txt")]
    pub stopwords: String,
}
