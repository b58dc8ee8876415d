mod cli;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use cli::Cli;
use simba::{emit, Decoder, DecoderConfig};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn run(cli: &Cli) -> simba::Result<()> {
    let mut config = DecoderConfig::default();
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }

    let mut decoder = Decoder::open(&cli.pcap_dump, config)?;

    let progress = ProgressBar::new(decoder.progress().1);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut out = BufWriter::new(File::create(&cli.out)?);
    emit::write_array_start(&mut out)?;

    let mut first = true;
    let mut count = 0u64;
    while let Some(packet) = decoder.next_packet()? {
        emit::write_packet(&mut out, &packet, first)?;
        first = false;
        count += 1;
        progress.set_position(decoder.progress().0);
    }

    emit::write_array_end(&mut out)?;
    out.flush()?;
    progress.finish_and_clear();

    log::info!("decoded {count} packets into {}", cli.out.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    ctrlc::set_handler(|| {
        log::warn!("interrupted, stopping");
        std::process::exit(130);
    })
    .expect("failed to install Ctrl-C handler");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
