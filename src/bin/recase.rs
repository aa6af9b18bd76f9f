//! recase CLI - convert string case in text and structured documents
//!
//! Log verbosity is controlled with `RUST_LOG` (default `warn`); logs go to
//! stderr so stdout only carries converted output.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use recase::{read_documents, write_documents, Case, ConvertOptions, DataConverter, DocumentFormat, Recase};

#[derive(Parser)]
#[command(name = "recase")]
#[command(version, about = "Convert string case in text and structured documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert each TEXT argument and print it on its own line
    Text {
        /// Case of the input (words, camel, snake, kebab)
        #[arg(short, long, default_value = "words")]
        from: Case,

        /// Case of the output (words, camel, snake, kebab)
        #[arg(short, long, default_value = "camel")]
        to: Case,

        /// Strings to convert
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Rewrite mapping keys and/or string values of JSON, NDJSON or YAML documents
    Data {
        /// Case of the input (words, camel, snake, kebab)
        #[arg(short, long)]
        from: Case,

        /// Case of the output (words, camel, snake, kebab)
        #[arg(short, long)]
        to: Case,

        /// Convert mapping keys
        #[arg(short, long)]
        keys: bool,

        /// Convert string values
        #[arg(short, long)]
        values: bool,

        /// Document format (json, ndjson, yaml); guessed from the input path if omitted
        #[arg(long)]
        format: Option<DocumentFormat>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input file, or `-` for stdin (default: stdin)
        input: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text { from, to, text } => convert_text(Recase::new(from, to), &text),
        Commands::Data {
            from,
            to,
            keys,
            values,
            format,
            pretty,
            output,
            input,
        } => {
            let options = ConvertOptions::new().keys(keys).values(values);
            convert_documents(Recase::new(from, to), options, format, pretty, input, output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Convert command-line strings
fn convert_text(conversion: Recase, text: &[String]) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for s in text {
        writeln!(out, "{}", conversion.convert(s))
            .map_err(|e| format!("Failed to write output: {}", e))?;
    }

    Ok(())
}

/// Convert every document of the input and write the results
fn convert_documents(
    conversion: Recase,
    options: ConvertOptions,
    format: Option<DocumentFormat>,
    pretty: bool,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), String> {
    if options.is_identity() {
        tracing::warn!("Neither --keys nor --values given; documents are copied unchanged");
    }

    let input = input.filter(|path| path.as_path() != Path::new("-"));
    let format = format
        .or_else(|| input.as_deref().and_then(DocumentFormat::from_path))
        .unwrap_or(DocumentFormat::Json);

    let reader: Box<dyn Read> = match &input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let documents = read_documents(reader, format)
        .map_err(|e| format!("Failed to read documents: {}", e))?;

    let converter = DataConverter::new(conversion, options);
    let converted: Vec<_> = documents
        .into_iter()
        .map(|document| converter.convert_owned(document))
        .collect();

    tracing::info!(
        "Converted {} document(s) from {} to {} case",
        converted.len(),
        conversion.from,
        conversion.to
    );

    let writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    write_documents(writer, &converted, format, pretty)
        .map_err(|e| format!("Failed to write documents: {}", e))?;

    Ok(())
}
