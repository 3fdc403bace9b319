use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use fixgen::generate::{GeneratorConfig, generate};
use fixgen::output::{FixtureFormat, write_document, write_fixture_file};

#[derive(Parser)]
#[command(name = "fixgen", about = "Generate software catalog seed fixtures", version)]
struct Cli {
    /// Number of software rows to generate (URL rows are twice this)
    #[arg(long, default_value_t = 30)]
    count: u32,

    /// created_at date of the first software row (YYYY-MM-DD)
    #[arg(long, default_value = "2014-05-01")]
    start_date: String,

    /// Days between consecutive software rows
    #[arg(long, default_value_t = 15)]
    step_days: i64,

    /// Directory the fixture files are written into
    #[arg(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,

    /// Fixture file format
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Don't echo the software document to stdout
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let start = cli
        .start_date
        .parse::<jiff::civil::Date>()
        .with_context(|| format!("failed to parse start date: {}", cli.start_date))?;

    let config = GeneratorConfig {
        count: cli.count,
        start,
        step_days: cli.step_days,
    };
    let fixtures = generate(&config)?;

    let format = match cli.format {
        Format::Yaml => FixtureFormat::Yaml,
        Format::Json => FixtureFormat::Json,
    };

    if !cli.quiet {
        let stdout = io::stdout().lock();
        let mut out = BufWriter::new(stdout);
        write_document(&mut out, &fixtures.software, format)?;
        out.flush()?;
    }

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;
    write_fixture_file(&cli.out_dir, "software", &fixtures.software, format)?;
    write_fixture_file(&cli.out_dir, "software_urls", &fixtures.software_urls, format)?;

    Ok(())
}
