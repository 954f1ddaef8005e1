use crate::*;

pub fn process_explain_error(explain_args: &ExplainErrorArgs) -> Result<()> {
    let code = parse_error_code(&explain_args.code)?;
    match MerkleDistributorError::from_code(code) {
        Some(error) => println!("{} {}: {}", error.code(), error.name(), error.message()),
        None => println!("{code} is not a merkle distributor error"),
    }
    Ok(())
}

/// Accepts `6008`, `0x1778`, or a full `custom program error: 0x1778` string.
fn parse_error_code(input: &str) -> Result<u32> {
    if let Some(error) = MerkleDistributorError::from_log(input) {
        return Ok(error.code());
    }
    let input = input.trim();
    match input.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => input.parse(),
    }
    .with_context(|| format!("invalid error code {input}"))
}
