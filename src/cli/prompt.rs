//! Interactive prompts for login and manual configuration

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::error::{SkyclerkError, SkyclerkResult};

/// Print `prompt` and read one trimmed line from stdin
pub fn prompt_line(prompt: &str) -> SkyclerkResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| SkyclerkError::Prompt(e.to_string()))?;

    read_trimmed_line(&mut io::stdin().lock())
}

/// Read a password without echo; the buffer is wiped when dropped
pub fn prompt_password(prompt: &str) -> SkyclerkResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| SkyclerkError::Prompt(format!("unable to read password: {}", e)))
}

/// Prompt for a value that must not be empty
pub fn prompt_required(prompt: &str, what: &str) -> SkyclerkResult<String> {
    let value = prompt_line(prompt)?;
    if value.is_empty() {
        return Err(SkyclerkError::Validation(format!("{} is required", what)));
    }
    Ok(value)
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> SkyclerkResult<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| SkyclerkError::Prompt(e.to_string()))?;
    Ok(line.trim().to_string())
}
