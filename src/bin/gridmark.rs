//! gridmark CLI - convert between spreadsheet grids and Markdown

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use gridmark::{
    diagnostics::{check_markdown, format_diagnostics},
    grid_to_markdown_with_options, markdown_to_blocks, paste_from_markdown, CellGrid,
    ConversionError, ConvertOptions, MemoryCell, MemoryClipboard, MemorySheet,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridmark")]
#[command(version)]
#[command(about = "gridmark - convert between spreadsheet grids and Markdown", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// TOML file with conversion options
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a grid file (JSON or CSV) to Markdown
    ToMarkdown {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Grid file format
        #[arg(short, long, value_enum, default_value_t = GridFormat::Auto)]
        format: GridFormat,
    },

    /// Write Markdown into an in-memory sheet and print its cells as JSON
    ToGrid {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// First row to write (0-based)
        #[arg(long, default_value_t = 0)]
        row: usize,

        /// First column to write (0-based)
        #[arg(long, default_value_t = 0)]
        col: usize,
    },

    /// Print the parsed blocks of a Markdown document as JSON
    Blocks {
        /// Input file path
        input: Option<String>,
    },

    /// Check Markdown tables for conversion issues
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, ValueEnum)]
enum GridFormat {
    /// Detect from file extension or content
    Auto,
    /// Serialized CellGrid with style metadata
    Json,
    /// Plain text cells
    Csv,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let options = match cli.config {
        Some(ref path) => ConvertOptions::load_from_path(path).map_err(into_io)?,
        None => ConvertOptions::default(),
    };

    match cli.command {
        Commands::ToMarkdown {
            input,
            output,
            format,
        } => {
            let (content, filename) = read_input(input)?;

            let format = match format {
                GridFormat::Auto => detect_grid_format(filename.as_deref(), &content),
                f => f,
            };
            let grid = match format {
                GridFormat::Json => CellGrid::from_json(&content),
                _ => CellGrid::from_csv(&content),
            }
            .map_err(into_io)?;

            let markdown = grid_to_markdown_with_options(&grid, &options);
            write_output(output, &markdown)?;
        }

        Commands::ToGrid {
            input,
            output,
            row,
            col,
        } => {
            let (content, _) = read_input(input)?;

            let clipboard = MemoryClipboard::with_text(content);
            let mut sheet = MemorySheet::new();
            let rows = paste_from_markdown(&clipboard, &mut sheet, row, col).map_err(into_io)?;
            log::info!("wrote {} row(s)", rows);

            let cells: Vec<&MemoryCell> = sheet.cells().collect();
            let mut json = serde_json::to_string_pretty(&cells)?;
            json.push('\n');
            write_output(output, &json)?;
        }

        Commands::Blocks { input } => {
            let (content, _) = read_input(input)?;
            let blocks = markdown_to_blocks(&content);
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }

        Commands::Check { input, no_color } => {
            let (content, _) = read_input(input)?;

            let result = check_markdown(&content);
            let output = format_diagnostics(&result, !no_color);
            println!("{}", output);

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("gridmark - convert between spreadsheet grids and Markdown");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Grid → Markdown (headings, lists, pipe tables with alignment)");
            println!("  ✓ Markdown → Grid (tables, bold/italic/strikethrough runs)");
            println!("  ✓ Table diagnostics");
            println!("  ✓ JSON and CSV grid input");
            println!();
            println!("Options (--config):");
            println!("  [classify] heading1_min_size, heading2_min_size, list_indent_width");
            println!("  [markdown] pad_cells");
            println!();
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path is given
#[cfg(feature = "cli")]
fn read_input(path: Option<String>) -> io::Result<(String, Option<String>)> {
    match path {
        Some(path) => Ok((fs::read_to_string(&path)?, Some(path))),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((buffer, None))
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<String>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(text.as_bytes())?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn detect_grid_format(filename: Option<&str>, content: &str) -> GridFormat {
    match filename {
        Some(name) if name.ends_with(".json") => GridFormat::Json,
        Some(name) if name.ends_with(".csv") => GridFormat::Csv,
        _ if content.trim_start().starts_with('{') => GridFormat::Json,
        _ => GridFormat::Csv,
    }
}

#[cfg(feature = "cli")]
fn into_io(err: ConversionError) -> io::Error {
    match err {
        ConversionError::IoError { message } => io::Error::other(message),
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridmark --features cli");
    eprintln!("  gridmark <COMMAND> [INPUT]");
}
