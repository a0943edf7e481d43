use clap::Parser;
use tp_cli::{Args, Mode};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let summary = tp_cli::run(&args)?;
    if summary.mode == Mode::Encode && summary.verified {
        println!("Encoding verified ({} dictionary entries)", summary.dictionary_len);
    }
    println!(
        "{} Compression ratio: {:.2}",
        args.input.display(),
        summary.compression_ratio()
    );
    Ok(())
}
