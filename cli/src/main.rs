use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use splice::SpliceError;

#[derive(Parser)]
#[command(name = "splice", version, about = "Installer script content splicer")]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replace inline content blocks in install.sh and reformat cli.sh help text
    Inline(JobArgs),

    /// Replace the inline template assignment in install.sh with a $(cat ...) loader
    Loader(JobArgs),
}

#[derive(clap::Args)]
struct JobArgs {
    /// Base folder containing the target scripts
    folder: String,

    /// Verify that all sentinels match, without rewriting anything
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    match cli.command {
        Command::Inline(args) => do_inline(args, color_choice),
        Command::Loader(args) => do_loader(args, color_choice),
    }
}

fn do_inline(args: JobArgs, color_choice: ColorChoice) {
    let folder = PathBuf::from(&args.folder);

    rewrite_one(
        &splice::install_script_path(&folder),
        args.check,
        color_choice,
        |source| splice::rewrite_installer(source, &args.folder),
    );
    rewrite_one(
        &splice::cli_tool_path(&folder),
        args.check,
        color_choice,
        splice::rewrite_cli_tool,
    );
}

fn do_loader(args: JobArgs, color_choice: ColorChoice) {
    let folder = PathBuf::from(&args.folder);

    rewrite_one(
        &splice::install_script_path(&folder),
        args.check,
        color_choice,
        |source| splice::rewrite_loader(source, &args.folder),
    );
}

/// Read one target file, run its pass sequence, and write the result back.
/// The buffer is fully transformed before the write, so a pattern mismatch
/// never truncates the file it failed on. All failures are fatal.
fn rewrite_one(
    path: &Path,
    check: bool,
    color_choice: ColorChoice,
    transform: impl FnOnce(&str) -> Result<String, SpliceError>,
) {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(path.display().to_string(), source.clone());

    let rewritten = match transform(&source) {
        Ok(contents) => contents,
        Err(error) => {
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            let diagnostic = error.to_diagnostic(file_id);
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            process::exit(1);
        }
    };

    if check {
        eprintln!("ok: {} sentinels matched", path.display());
        return;
    }

    if let Err(e) = std::fs::write(path, rewritten) {
        eprintln!("error: cannot write '{}': {}", path.display(), e);
        process::exit(1);
    }
}
