use crate::error::CliError;
use model::report::TickReport;
use serde_json::json;

/// Success result on stdout: `{"success":true,"data_index":N}`.
pub fn print_report(report: &TickReport) -> Result<(), CliError> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}

/// Failure result on stdout, paired with a non-zero exit status. Operators
/// alert on repeated failures at the same position (stuck replay).
pub fn print_failure(err: &CliError) {
    let body = json!({ "success": false, "error": err.to_string() });
    println!("{body}");
}
