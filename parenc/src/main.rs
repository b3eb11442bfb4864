use anyhow::Context;
use clap::{Parser, ValueEnum};
use console::style;
use parenc::{compile_to, CompileError, Source, Stage};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Compiles s-expression calls into function call syntax.
#[derive(Debug, Parser)]
#[command(name = "parenc", version)]
struct Args {
    /// Source files to compile, in order. Reads stdin when none are given
    /// (or starts a REPL if stdin is a terminal).
    files: Vec<PathBuf>,
    /// Pipeline stage to print.
    #[arg(long, value_enum, default_value_t = Stage::Code)]
    emit: Stage,
    /// Log more (repeatable). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Prints diagnostics to stderr.
struct Reporter {
    colored: bool,
}

impl Reporter {
    fn new(color: ColorChoice) -> Self {
        let colored = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self { colored }
    }

    fn error_label(&self) -> console::StyledObject<&'static str> {
        style("error").red().bold().force_styling(self.colored)
    }

    fn compile_error(&self, source: &Source<'_>, err: &CompileError) {
        eprintln!("{}: {}", self.error_label(), err);
        if let Some(offset) = err.offset() {
            let (line, column) = source.locate(offset);
            eprintln!(
                "  {} {}:{}:{}",
                style("-->").blue().bold().force_styling(self.colored),
                source.name,
                line,
                column
            );
        }
    }

    fn fatal(&self, err: &anyhow::Error) {
        eprintln!("{}: {:#}", self.error_label(), err);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let reporter = Reporter::new(args.color);
    match run(&args, &reporter) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            reporter.fatal(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` if any source failed to compile.
fn run(args: &Args, reporter: &Reporter) -> anyhow::Result<bool> {
    if args.files.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            repl(args.emit, reporter)?;
            return Ok(true);
        }

        let mut content = String::new();
        stdin
            .lock()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(compile_source(
            &Source::new("<stdin>", &content),
            args.emit,
            reporter,
        ));
    }

    let mut success = true;
    for path in &args.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let name = path.display().to_string();
        success &= compile_source(&Source::new(&name, &content), args.emit, reporter);
    }
    Ok(success)
}

fn compile_source(source: &Source<'_>, emit: Stage, reporter: &Reporter) -> bool {
    match compile_to(source.content, emit) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            true
        }
        Err(err) => {
            reporter.compile_error(source, &err);
            false
        }
    }
}

/// Compiles one line at a time until end of input.
fn repl(emit: Stage, reporter: &Reporter) -> io::Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        compile_source(&Source::new("<repl>", &input), emit, reporter);
    }
}
