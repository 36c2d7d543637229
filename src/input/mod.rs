pub mod validation;

pub use validation::{validate_bounded, Rejection, Validation};

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

/// Write a prompt and read one trimmed line.
///
/// The reader is injected so the loops below can be driven from tests with a
/// `Cursor`. EOF is an error rather than an empty answer; otherwise every
/// retry loop would spin forever on a closed stdin.
pub fn prompt_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if bytes == 0 {
        bail!("Input stream closed before the session was complete");
    }
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty answer arrives. Used for the driver name.
pub fn prompt_text<R: BufRead>(reader: &mut R, prompt: &str, use_colors: bool) -> Result<String> {
    loop {
        let answer = prompt_line(reader, prompt)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        show_rejection("Please enter a value", use_colors);
    }
}

/// Prompt until [`validate_bounded`] accepts.
///
/// The loop itself holds no state: Prompting, Rejected back to Prompting,
/// terminal state Accepted. All accept/reject logic lives in the pure
/// validator.
pub fn prompt_bounded<R: BufRead>(
    reader: &mut R,
    prompt: &str,
    min: f64,
    max: Option<f64>,
    use_colors: bool,
) -> Result<f64> {
    loop {
        let raw = prompt_line(reader, prompt)?;
        match validate_bounded(&raw, min, max) {
            Validation::Accepted(value) => return Ok(value),
            Validation::Rejected(reason) => {
                show_rejection(&format!("Invalid input: {}", reason), use_colors);
            }
        }
    }
}

/// Ask a yes/no question. Accepts "yes" or "y" in any case; anything else,
/// including an empty line, counts as no. No re-prompt on an odd answer.
pub fn prompt_yes_no<R: BufRead>(reader: &mut R, prompt: &str) -> Result<bool> {
    let answer = prompt_line(reader, prompt)?.to_lowercase();
    Ok(answer == "yes" || answer == "y")
}

fn show_rejection(message: &str, use_colors: bool) {
    if use_colors {
        eprintln!("  {} {}", "✗".red(), message.red());
    } else {
        eprintln!("  ✗ {}", message);
    }
}
