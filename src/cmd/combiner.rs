use clap::Parser;

/// The combiner takes no options: mapper records in on stdin, merged
/// records out on stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {}
