use crate::error::SpliceError;
use crate::pattern;

/// Prefix for body lines preserved as comments next to an include directive.
/// Keeps the rewritten file at the same line count as the original.
const LINE_MARKER: &str = "#> ";

/// Re-express a block body as comment lines, one `#> ` prefix per line.
fn comment_out(body: &str) -> String {
    body.lines()
        .map(|line| format!("{}{}", LINE_MARKER, line))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Pass type A — single-block substitution
// ---------------------------------------------------------------------------

/// Replace a `NAME='...'` assignment with a command-substitution loader,
/// `NAME=$(cat <folder>/<include>)`, keeping the old value as `#> ` comments.
pub fn splice_quoted_assignment(
    source: &str,
    name: &str,
    folder: &str,
    include: &str,
) -> Result<String, SpliceError> {
    let block = pattern::match_quoted_assignment(source, name).ok_or_else(|| {
        SpliceError::AssignmentNotFound {
            name: name.to_string(),
        }
    })?;

    let replacement = format!("{}=$(cat {}/{})", name, folder, include);
    Ok(format!(
        "{}{} {}{}",
        block.prefix,
        replacement,
        comment_out(block.body),
        block.suffix
    ))
}

/// Replace the text between `#NAME_S` and `#NAME_E` with an include path,
/// `NAME=<folder>/<include>`, keeping the old body as `#> ` comments. The
/// markers themselves survive, so the block stays locatable.
pub fn splice_marker_block(
    source: &str,
    name: &str,
    folder: &str,
    include: &str,
) -> Result<String, SpliceError> {
    let block = match pattern::match_marker_block(source, name) {
        Some(block) => block,
        None => {
            // Distinguish "opened but never closed" from "not present at all"
            // so the diagnostic can point at the dangling opener.
            return Err(match pattern::find_opening_marker(source, name) {
                Some(open_span) => SpliceError::UnterminatedBlock {
                    name: name.to_string(),
                    open_span,
                },
                None => SpliceError::MarkerNotFound {
                    name: name.to_string(),
                },
            });
        }
    };

    let replacement = format!("{}={}/{}", name, folder, include);
    Ok(format!(
        "{}{} {}{}",
        block.prefix,
        replacement,
        comment_out(block.body),
        block.suffix
    ))
}

// ---------------------------------------------------------------------------
// Pass type B — repeated fenced-block reformatting
// ---------------------------------------------------------------------------

/// Rewrite the interior of one help fence as normalized echo statements:
/// an empty line becomes a bare `echo`, anything else becomes `echo "<line>"`,
/// and the block is wrapped in a leading and a trailing bare `echo`.
fn normalize_fence(body: &str) -> String {
    let lines: Vec<String> = body
        .lines()
        .map(|line| {
            if line.is_empty() {
                "echo".to_string()
            } else {
                format!("echo \"{}\"", line)
            }
        })
        .collect();
    format!("echo\n{}\necho", lines.join("\n"))
}

/// Reformat every help-text fence in the buffer. Replacement is by byte span,
/// back to front so earlier spans stay valid; two fences with identical text
/// are each rewritten exactly once.
pub fn reformat_help_blocks(source: &str) -> Result<String, SpliceError> {
    let fences = pattern::find_help_fences(source);
    if fences.is_empty() {
        return Err(SpliceError::HelpBlocksNotFound);
    }

    let mut contents = source.to_string();
    for fence in fences.iter().rev() {
        contents.replace_range(fence.span.clone(), &normalize_fence(fence.body));
    }
    Ok(contents)
}
