use clap::Parser;
use std::path::PathBuf;
use tracktable::{metadata, naming, output, scan, table};

#[derive(Parser)]
#[command(name = "tracktable")]
#[command(about = "Build a CSV metadata index over a directory of audio files")]
#[command(long_about = "\
Build a CSV metadata index over a directory of audio files

Walks the input directory, records one row per file, and optionally
decomposes each filename stem into extra columns.

Examples:

  tracktable recordings/
  tracktable recordings/ -o meta.csv -e wav mp3
  tracktable recordings/ -r '(?P<sujet>[^_]+)_(?P<age>\\d+)_(?P<gender>[MF])_.*'
  tracktable recordings/ -d '_'        # token_1, token_2, ... columns

Output columns, in order:

  filepath, filename, name, ext, size_bytes, duration_seconds

followed by the regex's named groups (if -r is given) or token_1..N
(if -d is given). Cells a file cannot fill are left empty.")]
#[command(version)]
struct Cli {
    /// Directory containing the audio files to index
    input_dir: PathBuf,

    /// Destination CSV path
    #[arg(long, short, default_value = "metadata.csv")]
    output: PathBuf,

    /// Named-group regex matched at the start of each filename stem
    #[arg(long, short)]
    regex: Option<String>,

    /// Literal string to split stems on when no regex is given
    #[arg(long, short)]
    delimiter: Option<String>,

    /// Extensions to include (e.g. wav mp3); all files when omitted
    #[arg(long, short, num_args = 1..)]
    exts: Vec<String>,

    /// List only direct children of the input directory
    #[arg(long)]
    no_recursive: bool,

    /// Skip duration probing (faster, duration_seconds left empty)
    #[arg(long)]
    skip_duration: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let parser =
        naming::FieldParser::from_options(cli.regex.as_deref(), cli.delimiter.as_deref())?;
    let options = scan::ScanOptions {
        extensions: scan::normalize_extensions(&cli.exts),
        recursive: !cli.no_recursive,
    };

    let files = scan::scan(&cli.input_dir, &options)?;

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let mut record = metadata::extract(file, !cli.skip_duration);
        record.extra = parser.parse(&record.name);
        records.push(record);
    }

    let schema = table::derive_schema(&parser, &records);
    table::write_csv(&cli.output, &schema, &records)?;
    output::print_build_output(&records, &schema, &cli.output);
    Ok(())
}
