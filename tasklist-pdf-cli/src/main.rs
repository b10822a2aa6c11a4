use anyhow::Result;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tasklist_pdf::{DocumentRequest, FontSetup, Period, TaskListBuilder, TaskListError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tasklist",
    about = "Generate a PDF task list (daily, weekly, or monthly) from JSON",
    version
)]
struct Cli {
    /// Use "day" for Daily, "week" for Weekly, or "month" for Monthly Tasks
    #[arg(value_parser = period_parser())]
    period: Period,

    /// Read tasks from this JSON file instead of the period's default
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the PDF here instead of the period's default
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title
    #[arg(short, long)]
    title: Option<String>,

    /// TrueType font used for the checkbox, tasks and footer
    #[arg(long)]
    font: Option<PathBuf>,
}

fn period_parser() -> impl TypedValueParser<Value = Period> {
    PossibleValuesParser::new(Period::ALL.map(|p| p.as_str())).try_map(|s| s.parse::<Period>())
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut request = DocumentRequest::for_period(cli.period);
    if let Some(input) = cli.input {
        request = request.with_source(input);
    }
    if let Some(output) = cli.output {
        request = request.with_destination(output);
    }
    if let Some(title) = cli.title {
        request = request.with_title(title);
    }

    println!(
        "➡️ Generating {} PDF from `{}` → `{}`",
        request.title(),
        request.source().display(),
        request.destination().display()
    );

    let fonts = match cli.font {
        Some(path) => FontSetup::unicode(path)?,
        None => FontSetup::detect(),
    };

    match TaskListBuilder::with_font_setup(request, fonts).build() {
        Ok(report) => {
            tracing::debug!(
                pages = report.pages,
                elements = report.elements,
                path = %report.absolute_destination.display(),
                "build finished"
            );
            println!("✅ PDF generated: {}", report.destination.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(TaskListError::SourceNotFound { path }) => {
            println!("❌ JSON file not found: {}", path.display());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

// Diagnostics go to stderr; stdout carries only the status lines.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
