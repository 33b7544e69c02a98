use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use crate::core::{CompressorType, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "svgclean-batch",
    version,
    about = "Clean SVG and SVGZ files in bulk with an external SVG cleaner",
    long_about = "Runs the cleaner once per file, unwraps SVGZ input first and optionally gzips the result.\nArguments after `--` are passed to the cleaner unchanged."
)]
pub struct Cli {
    /// File or folder to clean
    pub input: PathBuf,
    /// Output folder; files are cleaned in place when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// JSON settings file, flags override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Cleaner binary name or path
    #[arg(long)]
    pub cleaner: Option<String>,
    #[arg(long, value_enum)]
    pub compressor: Option<CompressorArg>,
    /// Only gzip results whose input was SVGZ (`--compress-only-svgz=false` turns it off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub compress_only_svgz: Option<bool>,
    /// Compression level (0-9)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: Option<u32>,
    /// Files cleaned at the same time
    #[arg(short, long)]
    pub jobs: Option<usize>,
    /// Per-file timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
    /// Descend into subfolders
    #[arg(short, long)]
    pub recursive: bool,
    /// Write a JSON report of all results
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
    /// Extra arguments for the cleaner
    #[arg(last = true)]
    pub cleaner_args: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompressorArg {
    None,
    Gzip,
    GzipBest,
}

impl From<CompressorArg> for CompressorType {
    fn from(arg: CompressorArg) -> Self {
        match arg {
            CompressorArg::None => Self::None,
            CompressorArg::Gzip => Self::Gzip,
            CompressorArg::GzipBest => Self::GzipBest,
        }
    }
}

impl Cli {
    /// Applies the flags that were given on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(cleaner) = &self.cleaner {
            settings.cleaner = cleaner.clone();
        }
        if let Some(compressor) = self.compressor {
            settings.compressor = compressor.into();
        }
        if let Some(only_svgz) = self.compress_only_svgz {
            settings.compress_only_svgz = only_svgz;
        }
        if let Some(level) = self.level {
            settings.compression_level = level;
        }
        if let Some(jobs) = self.jobs {
            settings.jobs = jobs;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if !self.cleaner_args.is_empty() {
            settings.args = self.cleaner_args.clone();
        }
        settings
    }
}
