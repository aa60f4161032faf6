use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use log::{LevelFilter, Metadata, Record};
use lz77crc::files::{read_all_bytes, InputFile};
use lz77crc::{
    inspect, verify_roundtrip, CodecStats, CompressConfig, Compressor, Decompressor,
    DEFAULT_WINDOW_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "lz77crc")]
#[command(about = "LZ77 compressor with CRC32-verified token files")]
#[command(version)]
struct Args {
    /// Show verbose statistics and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a token file
    Compress {
        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output token file (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Lookback window in bytes (1-65535)
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,

        /// Buffer size for I/O
        #[arg(long, default_value = "131072")]
        buffer_size: usize,
    },

    /// Verify and decompress a token file
    Decompress {
        /// Input token file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Buffer size for I/O
        #[arg(long, default_value = "131072")]
        buffer_size: usize,
    },

    /// Compress to <INPUT>.lz77, decompress to <INPUT>.dec and compare (0=identical, 1=different)
    Test {
        /// Source file
        #[arg(short, long)]
        input: PathBuf,

        /// Lookback window in bytes (1-65535)
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,
    },

    /// Verify a token file and print its contents (0=valid, 1=corrupt, 2=error)
    Check {
        /// Token file
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Exit codes
const EXIT_OK: u8 = 0;
const EXIT_CORRUPT: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Writes log records to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(if e.is_corruption() { EXIT_CORRUPT } else { EXIT_ERROR })
        }
    }
}

fn run(args: Args) -> lz77crc::Result<u8> {
    match args.command {
        Command::Compress { input, output, window, buffer_size } => {
            let config = CompressConfig { window_size: window, buffer_size };
            config.validate()?;
            let compressor = Compressor::new(config);

            let start = Instant::now();
            let stats = if is_stdio(&input) {
                let mut data = Vec::new();
                io::stdin().lock().read_to_end(&mut data)?;
                compressor.compress_bytes(&data, open_output(&output)?)?
            } else {
                let source = InputFile::open(&input)?;
                compressor.compress_bytes(&source, open_output(&output)?)?
            };

            if args.verbose {
                print_stats("Compression complete:", &stats);
                print_timing(stats.input_bytes, start.elapsed());
            }
            Ok(EXIT_OK)
        }

        Command::Decompress { input, output, buffer_size } => {
            let decompressor =
                Decompressor::new(CompressConfig { buffer_size, ..Default::default() });

            let start = Instant::now();
            let source = read_input(&input)?;

            // The output is only created once the token file has decoded cleanly
            let mut decoded = Vec::new();
            let stats = decompressor.decompress_bytes(&source, &mut decoded)?;
            let mut writer = open_output(&output)?;
            writer.write_all(&decoded)?;
            writer.flush()?;

            if args.verbose {
                print_stats("Decompression complete:", &stats);
                print_timing(stats.input_bytes, start.elapsed());
            }
            Ok(EXIT_OK)
        }

        Command::Test { input, window } => {
            let start = Instant::now();
            let report = verify_roundtrip(&input, CompressConfig::with_window_size(window))?;

            eprintln!("Compressed:   {}", report.compressed_path.display());
            eprintln!("Decompressed: {}", report.decompressed_path.display());
            if args.verbose {
                print_stats("Compression:", &report.compress);
                print_stats("Decompression:", &report.decompress);
                print_timing(report.compress.input_bytes, start.elapsed());
            }

            if report.identical {
                eprintln!("Round trip OK: decompressed file is identical to the source");
                Ok(EXIT_OK)
            } else {
                eprintln!("Round trip FAILED: decompressed file differs from the source");
                Ok(EXIT_CORRUPT)
            }
        }

        Command::Check { input } => {
            let data = read_all_bytes(&input)?;
            match inspect(&data) {
                Ok(summary) => {
                    eprintln!("Valid:            yes");
                    eprintln!("File size:        {} bytes", summary.file_size);
                    eprintln!("CRC32:            0x{:08x}", summary.checksum);
                    eprintln!("Tokens:           {}", summary.tokens.total());
                    eprintln!("  Literals:       {}", summary.tokens.literals);
                    eprintln!("  Matches:        {}", summary.tokens.matches);
                    eprintln!("Decoded size:     {} bytes", summary.tokens.uncompressed_bytes);
                    eprintln!("Ratio:            {:.3}", summary.ratio());
                    Ok(EXIT_OK)
                }
                Err(e) if e.is_corruption() => {
                    eprintln!("Valid:            no ({})", e);
                    Ok(EXIT_CORRUPT)
                }
                Err(e) => Err(e),
            }
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn read_input(path: &Path) -> lz77crc::Result<Vec<u8>> {
    if is_stdio(path) {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        Ok(data)
    } else {
        read_all_bytes(path)
    }
}

fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn print_stats(title: &str, stats: &CodecStats) {
    eprintln!("{}", title);
    eprintln!("  Input bytes:      {}", stats.input_bytes);
    eprintln!("  Output bytes:     {}", stats.output_bytes);
    eprintln!("  Tokens:           {}", stats.tokens.total());
    eprintln!("    Literals:       {}", stats.tokens.literals);
    eprintln!("    Matches:        {}", stats.tokens.matches);
}

/// Wall-clock time for the whole command, with throughput over the source bytes
fn print_timing(input_bytes: u64, elapsed: Duration) {
    eprintln!("Time:               {:.2?}", elapsed);
    eprintln!(
        "Throughput:         {:.1} MB/s",
        input_bytes as f64 / elapsed.as_secs_f64() / 1_000_000.0
    );
}
