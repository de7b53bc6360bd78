use std::path::{Path, PathBuf};

use crate::error::SpliceError;
use crate::passes;

/// Marker-span sentinels in `install.sh` and the files they are replaced
/// with, in pass order. The names are disjoint substrings, so each pass still
/// finds its target in the buffer the earlier passes rewrote.
const INLINE_RULES: &[(&str, &str)] = &[
    ("BASE_TEMPLATE_CONTENT", "base-template.sh"),
    ("CLI_TOOL_CONTENT", "cli.sh"),
    ("INCLUDED_README_CONTENT", "README.md"),
];

/// The assignment rewritten by the loader pass.
const TEMPLATE_ASSIGNMENT: &str = "BASE_TEMPLATE_CONTENT";
const TEMPLATE_FILE: &str = "base-template.sh";

pub fn install_script_path(folder: &Path) -> PathBuf {
    folder.join("install.sh")
}

pub fn cli_tool_path(folder: &Path) -> PathBuf {
    folder.join("cli.sh")
}

/// The `install.sh` half of the inline rewrite: substitute every marker-span
/// content block with an include path. Fatal if any sentinel pair is missing
/// or unterminated.
pub fn rewrite_installer(source: &str, folder: &str) -> Result<String, SpliceError> {
    let mut contents = source.to_string();
    for (name, include) in INLINE_RULES {
        contents = passes::splice_marker_block(&contents, name, folder, include)?;
    }
    Ok(contents)
}

/// The loader rewrite: swap the inline single-quoted template for a
/// `$(cat ...)` command substitution.
pub fn rewrite_loader(source: &str, folder: &str) -> Result<String, SpliceError> {
    passes::splice_quoted_assignment(source, TEMPLATE_ASSIGNMENT, folder, TEMPLATE_FILE)
}

/// The `cli.sh` half of the inline rewrite: normalize every help-text fence.
pub fn rewrite_cli_tool(source: &str) -> Result<String, SpliceError> {
    passes::reformat_help_blocks(source)
}
