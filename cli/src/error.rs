use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("invalid parameter '{0}'")]
    #[diagnostic(
        code(svexpr::cli::parameter),
        help("parameters are written as NAME=EXPRESSION, e.g. -p WIDTH=8")
    )]
    InvalidParameter(String),

    #[error("failed to read from stdin")]
    #[diagnostic(code(svexpr::cli::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    #[diagnostic(code(svexpr::cli::logging))]
    Logging(String),
}

/// Splits `NAME=EXPRESSION`.
pub fn parse_parameter(text: &str) -> Result<(String, String), CliError> {
    let (name, definition) = text
        .split_once('=')
        .ok_or_else(|| CliError::InvalidParameter(text.to_string()))?;
    let name = name.trim();
    let valid_name = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
        return Err(CliError::InvalidParameter(text.to_string()));
    }
    Ok((name.to_string(), definition.trim().to_string()))
}
