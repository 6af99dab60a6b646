use clap::Parser;
use parquet_peek::config::Args;
use parquet_peek::{Inspector, ParquetMetadata, PolarsRows};
use std::io::{self, BufWriter};

fn main() {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();
    args.apply_display_settings();

    let path = args.file_path.as_path();
    let inspector = Inspector::new(path, ParquetMetadata::new(path), PolarsRows::new(path));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = inspector.inspect(&mut out, args.num_rows.0);
    // Flush the blocks printed so far before any diagnostic
    drop(out);

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}
