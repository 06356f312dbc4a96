use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use acorn_codegen::{CompilerOutput, Destination, Diagnostics};
use acorn_model::Dictionary;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "acorn-tokens")]
#[command(about = "Generate Acorn CSS custom-property stylesheets from design tokens")]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write all stylesheets for a token document
    Build {
        /// Flattened token document (.json)
        path: PathBuf,

        /// Root directory for the generated files [default: next to the input]
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Report partition and section diagnostics without writing anything
    Check {
        /// Flattened token document (.json)
        path: PathBuf,

        /// Fail when any token is unclaimed, claimed twice or unsectioned
        #[arg(long)]
        strict: bool,
    },

    /// Print one stylesheet to stdout
    Print {
        /// Flattened token document (.json)
        path: PathBuf,

        /// Stylesheet to print: colors, typography, space, size, borders, shadows, inputs
        file: Destination,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Command::Build { path, out_dir } => cmd_build(&path, out_dir.as_deref()),
        Command::Check { path, strict } => cmd_check(&path, strict),
        Command::Print { path, file } => cmd_print(&path, file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();
}

fn load(path: &Path) -> Result<Dictionary> {
    let source = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let dict = Dictionary::from_json(&source).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(tokens = dict.len(), input = %path.display(), "loaded token document");
    Ok(dict)
}

fn cmd_build(path: &Path, out_dir: Option<&Path>) -> Result<()> {
    let dict = load(path)?;
    let output = acorn_codegen::compile(&dict);

    let root = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => path.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    for written in write_outputs(&output, &root)? {
        eprintln!("Built: {}", written.display());
    }
    Ok(())
}

/// Write every generated file below `root`, returning the written paths.
fn write_outputs(output: &CompilerOutput, root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(output.files.len());

    for file in &output.files {
        let target = root.join(file.path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&target, &file.css).with_context(|| format!("writing {}", target.display()))?;
        written.push(target);
    }

    Ok(written)
}

fn cmd_check(path: &Path, strict: bool) -> Result<()> {
    let dict = load(path)?;
    let output = acorn_codegen::compile(&dict);

    print!("{}", summarize(&output.diagnostics));

    if strict && !output.diagnostics.is_clean() {
        bail!("{} has partition or section problems", path.display());
    }
    eprintln!("OK: {}", path.display());
    Ok(())
}

fn cmd_print(path: &Path, destination: Destination) -> Result<()> {
    let dict = load(path)?;
    let output = acorn_codegen::compile(&dict);

    let Some(file) = output.file(destination) else {
        bail!("no output generated for {destination}");
    };
    io::stdout()
        .write_all(file.css.as_bytes())
        .context("writing to stdout")?;
    Ok(())
}

fn summarize(diagnostics: &Diagnostics) -> String {
    let mut out = String::new();

    for overlap in &diagnostics.overlaps {
        let others: Vec<&str> = overlap.others.iter().map(|d| d.stem()).collect();
        out.push_str(&format!(
            "overlap: {} -> {} (also matches {})\n",
            overlap.token,
            overlap.owner,
            others.join(", ")
        ));
    }
    for token in &diagnostics.unclaimed {
        out.push_str(&format!("unclaimed: {token}\n"));
    }
    for item in &diagnostics.unsectioned {
        out.push_str(&format!("unsectioned: {} in {}\n", item.token, item.destination));
    }
    for token in &diagnostics.platform_only {
        out.push_str(&format!("platform-only: {token}\n"));
    }

    out
}
