//! File-level driver for the tokpack codec: read, pick a direction,
//! transform, self-check and write.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tp_codec::Codec;
use tp_core::CodecConfig;

#[derive(Parser, Debug)]
#[command(name = "tokpack")]
#[command(version)]
#[command(about = "Reversible word-dictionary compression for text files")]
#[command(long_about = "Replaces recurring long words with indices into a dictionary stored at the \
top of the file. Files starting with the marker character are decoded, anything else is encoded.

EXAMPLES:
    tokpack notes.txt notes.tp         # Encode and verify
    tokpack notes.tp notes.txt         # Decode
    tokpack --marker '#' notes.txt     # Use a different marker")]
pub struct Args {
    /// Text file to encode, or an encoded file to decode
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the result
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Direction; `auto` decodes input that starts with the marker
    #[arg(short, long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// JSON codec configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Marker character, overrides the config file
    #[arg(long)]
    pub marker: Option<char>,

    /// Skip the decode-after-encode self-check
    #[arg(long)]
    pub no_verify: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Auto,
    Encode,
    Decode,
}

impl Mode {
    fn resolve(self, already_encoded: bool) -> Self {
        match self {
            Mode::Auto if already_encoded => Mode::Decode,
            Mode::Auto => Mode::Encode,
            other => other,
        }
    }
}

/// Outcome of one [`run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Encode or Decode, never Auto.
    pub mode: Mode,
    pub output: String,
    pub input_len: usize,
    pub output_len: usize,
    pub dictionary_len: usize,
    pub verified: bool,
}

impl RunSummary {
    /// `1 - output/input` in bytes, 0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_len == 0 { return 0.0; }
        1.0 - self.output_len as f64 / self.input_len as f64
    }
}

struct PhaseTimer {
    started: Instant,
}

impl PhaseTimer {
    fn start() -> Self {
        Self { started: Instant::now() }
    }

    fn lap(&mut self, phase: &str) {
        let seconds = self.started.elapsed().as_secs_f64();
        tracing::info!(phase, seconds, "phase finished");
        self.started = Instant::now();
    }
}

/// Collapse `\r\n` and `\n` line endings into `\n`; drops a trailing newline.
pub fn normalize_line_endings(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}

pub fn load_config(args: &Args) -> Result<CodecConfig> {
    let config = match &args.config {
        Some(path) => CodecConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CodecConfig::default(),
    };
    Ok(match args.marker {
        Some(marker) => config.with_marker(marker),
        None => config,
    })
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let codec = Codec::new(load_config(args)?)?;
    let mut timer = PhaseTimer::start();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    timer.lap("read");

    let already_encoded = codec.is_encoded(&raw);
    let contents = normalize_line_endings(&raw);
    timer.lap("normalized");

    let mode = args.mode.resolve(already_encoded);
    let (output, dictionary_len, verified) = match mode {
        Mode::Decode => {
            let (decoded, stats) = codec
                .decode_with_stats(&contents)
                .with_context(|| format!("decoding {} failed", args.input.display()))?;
            timer.lap("decoded");
            (decoded, stats.dictionary_len, false)
        }
        _ => {
            let report = codec.encode_with_report(&contents);
            timer.lap("encoded");
            let verified = !args.no_verify;
            if verified {
                verify_roundtrip(&codec, &contents, &report.output)?;
                timer.lap("verified");
            }
            (report.output, report.dictionary.len(), verified)
        }
    };

    if let Some(path) = &args.output {
        fs::write(path, &output).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = output.len(), "output written");
    }

    Ok(RunSummary {
        mode,
        input_len: contents.len(),
        output_len: output.len(),
        dictionary_len,
        verified,
        output,
    })
}

/// Decode `encoded` and require it to match `original` line for line.
pub fn verify_roundtrip(codec: &Codec, original: &str, encoded: &str) -> Result<()> {
    let decoded = codec.decode(encoded).context("self-check could not decode its own output")?;
    let mut expected = original.lines();
    let mut actual = decoded.lines();
    let mut line = 1;
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Ok(()),
            (Some(e), Some(a)) if e == a => line += 1,
            (e, a) => bail!("self-check mismatch at line {line}: expected {e:?}, got {a:?}"),
        }
    }
}
