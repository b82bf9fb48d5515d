//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use luna_syntax::diagnostics::format_error;
use luna_syntax::tokens::Token;
use luna_syntax::{parser, token_dump};

use super::{CliError, CliResult, ExitCode};

/// Maximum token listing size in bytes (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a token listing from disk.
///
/// ## Errors
/// Returns a [`CliError`] if:
/// - The file cannot be accessed
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
/// - The file is not valid UTF-8
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Read and decode a token listing, rendering dump errors against the file.
fn read_tokens(file_path: &str, source: &str) -> CliResult<Vec<Token>> {
    token_dump::read(source).map_err(|err| CliError::failure(format_error(file_path, source, err).trim_end()))
}

/// Check a token listing against the grammar.
///
/// Prints `ok: <file>` on success. On failure the rendered diagnostic becomes the error message.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = read_tokens(file_path, &source)?;
    let message = check_source(file_path, &source, tokens)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}

/// Parse already-read tokens; split out of [`check_file`] so it can run without touching disk.
pub fn check_source(file_path: &str, source: &str, tokens: Vec<Token>) -> CliResult<String> {
    match parser::parse_tokens(tokens) {
        Ok(()) => Ok(format!("ok: {file_path}")),
        Err(err) => {
            tracing::debug!(file = file_path, diagnostic = err.message(), "syntax check failed");
            Err(CliError::failure(format_error(file_path, source, err).trim_end()))
        }
    }
}

/// Print a token listing in normalised form.
pub fn tokens_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = read_tokens(file_path, &source)?;
    print!("{}", token_dump::render(&tokens));
    Ok(ExitCode::SUCCESS)
}
