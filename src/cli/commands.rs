//! Command implementation for the rowparse CLI
//!
//! Loads the layered configuration, builds a parser with or without a
//! column schema, and prints the header and records in the chosen format.

use anyhow::{Context, Result};
use futures::StreamExt;
use serde::Serialize;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::cli::args::{Args, OutputFormat};
use crate::config::{ParseOptions, ParserConfig};
use crate::constants::LOG_TARGET;
use crate::models::{Header, RawRow, Record};
use crate::parser::CsvParser;
use crate::schema::RowSchema;

/// Outcome of one CLI run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Records printed
    pub records: usize,
    /// Header row, when one was consumed
    pub header: Option<Header>,
    /// Wall time spent parsing and printing
    pub elapsed: Duration,
}

/// Human-readable rendering of one output record
pub trait RenderRow {
    fn render(&self) -> String;
}

impl RenderRow for RawRow {
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl RenderRow for Record {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Run the CLI, printing to stdout
pub async fn run(args: &Args) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out).await
}

/// Run the CLI, printing to `out`
pub async fn run_with_output<W: Write>(args: &Args, out: &mut W) -> Result<RunSummary> {
    let config = load_configuration(args)?;
    let options = config.parse_options()?;

    let summary = match config.column_schema()? {
        Some(schema) => {
            debug!("Validating rows against columns: {}", schema);
            execute(args, options.with_schema(schema), out).await?
        }
        None => execute(args, options, out).await?,
    };

    info!(
        "Printed {} records in {:.2?}",
        summary.records, summary.elapsed
    );
    Ok(summary)
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &Args) -> Result<ParserConfig> {
    let mut config = ParserConfig::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;

    args.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    debug!(
        "Effective configuration: has_header={}, strategy={}, separator={:?}",
        config.has_header, config.strategy, config.separator
    );
    Ok(config)
}

async fn execute<S, W>(args: &Args, options: ParseOptions<S>, out: &mut W) -> Result<RunSummary>
where
    S: RowSchema,
    S::Output: Serialize + RenderRow,
    W: Write,
{
    let start_time = Instant::now();
    let parser = CsvParser::new(options)?;
    let mut printer = Printer::new(args.output_format, out);
    let mut records = 0;

    let header = if args.stream {
        let mut stream = parser.stream_file(&args.path).await?;
        while let Some(record) = stream.next().await {
            if records == 0 {
                printer.header(stream.header())?;
            }
            printer.row(&record?)?;
            records += 1;
        }
        if records == 0 {
            printer.header(stream.header())?;
        }
        stream.header().cloned()
    } else {
        let parsed = parser
            .parse_file(&args.path)
            .await
            .with_context(|| format!("Failed to parse {}", args.path.display()))?;
        printer.header(parsed.header.as_ref())?;
        for record in &parsed.data {
            printer.row(record)?;
        }
        records = parsed.len();
        parsed.header
    };

    Ok(RunSummary {
        records,
        header,
        elapsed: start_time.elapsed(),
    })
}

/// Writes the header and records in one output format
struct Printer<'w, W> {
    format: OutputFormat,
    out: &'w mut W,
}

impl<'w, W: Write> Printer<'w, W> {
    fn new(format: OutputFormat, out: &'w mut W) -> Self {
        Self { format, out }
    }

    fn header(&mut self, header: Option<&Header>) -> Result<()> {
        match (self.format, header) {
            (OutputFormat::Human, Some(header)) => writeln!(self.out, "Header: {:?}", header)?,
            (OutputFormat::Human, None) => writeln!(self.out, "Header: none")?,
            (OutputFormat::Json, header) => {
                serde_json::to_writer(&mut *self.out, &serde_json::json!({ "header": header }))?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn row<T: Serialize + RenderRow>(&mut self, record: &T) -> Result<()> {
        match self.format {
            OutputFormat::Human => writeln!(self.out, "Row: {}", record.render())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *self.out, record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr);
    let layer = if args.quiet {
        layer.compact().boxed()
    } else {
        layer.with_timer(fmt::time::uptime()).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
