use clap::Parser;

/// The reducer takes no options: grouped count records in on stdin, one
/// summary line per compound key out on stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {}
