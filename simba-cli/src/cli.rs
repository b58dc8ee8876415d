use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the PCAP capture to decode.
    #[arg(short = 'p', long = "pcap_dump")]
    pub pcap_dump: PathBuf,

    /// Path to write the decoded JSON stream to.
    #[arg(short, long, default_value = "output.json")]
    pub out: PathBuf,

    /// Chunk size (in bytes) for the memory-mapped byte source.
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Increase log verbosity. May be repeated (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
