use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use kira_contentqc::logging;
use kira_contentqc::report::json::render_result_json;
use kira_contentqc::report::text::render_report_text;
use kira_contentqc::report::write_reports;
use kira_contentqc::{EvalError, Evaluator};

#[derive(Parser, Debug)]
#[command(name = "kira-contentqc", version)]
#[command(about = "Deterministic rubric scoring for free-text submissions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a piece of text against the six fixed criteria
    Evaluate(EvaluateArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct EvaluateArgs {
    /// Text to evaluate; `-` or omitted reads standard input
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write evaluation.json, features.json and report.txt here
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextSource {
    fn kind(&self) -> &'static str {
        match self {
            TextSource::Inline(_) => "argument",
            TextSource::File(_) => "file",
            TextSource::Stdin => "stdin",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let Command::Evaluate(args) = cli.command;
    logging::init_logging(args.verbose);
    if let Err(err) = run(&args) {
        eprintln!("\nError: {err}");
        std::process::exit(1);
    }
}

fn run(args: &EvaluateArgs) -> Result<(), EvalError> {
    let source = text_source(args);
    tracing::info!(source = source.kind(), "reading submission");
    let text = read_text(&source)?;

    let evaluator = Evaluator::new();
    let (result, features) = evaluator.evaluate_with_features(&text)?;
    tracing::info!(
        total_score = result.total_score,
        verdict = result.verdict.as_str(),
        "evaluation complete"
    );

    match args.format {
        OutputFormat::Text => print!("{}", render_report_text(&result)),
        OutputFormat::Json => print!("{}", render_result_json(&result)?),
    }

    if let Some(out_dir) = &args.out {
        write_reports(&result, &features, out_dir)?;
    }

    Ok(())
}

fn text_source(args: &EvaluateArgs) -> TextSource {
    if let Some(path) = &args.input {
        return TextSource::File(path.clone());
    }
    match args.text.as_deref() {
        None | Some("-") => TextSource::Stdin,
        Some(text) => TextSource::Inline(text.to_string()),
    }
}

fn read_text(source: &TextSource) -> Result<String, EvalError> {
    match source {
        TextSource::Inline(text) => Ok(text.clone()),
        TextSource::File(path) => read_file(path),
        TextSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<String, EvalError> {
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
