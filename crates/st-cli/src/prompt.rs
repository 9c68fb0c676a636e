//! Line-oriented form prompts.

use std::io::{self, BufRead, Write};

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a value; an empty answer takes the default when one is shown.
pub(crate) fn read(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    default: Option<&str>,
) -> io::Result<String> {
    match default {
        Some(d) if !d.is_empty() => write!(out, "{label} [{d}]: ")?,
        _ => write!(out, "{label}: ")?,
    }
    out.flush()?;

    let value = read_line(input)?;
    if value.is_empty()
        && let Some(d) = default
    {
        return Ok(d.to_string());
    }
    Ok(value)
}

/// Prompt for an optional value; empty answer means none.
pub(crate) fn read_optional(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    default: Option<&str>,
) -> io::Result<Option<String>> {
    let value = read(input, out, label, default)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Ask for confirmation before a destructive call. Defaults to no.
pub(crate) fn confirm(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> io::Result<bool> {
    write!(out, "{message} [y/N]: ")?;
    out.flush()?;

    let answer = read_line(input)?.to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
