//! Output formatter implementations.

use crate::env::{EnvCodec, EnvVars};
use crate::Result;

use super::OutputFormatter;

/// Formatter for the canonical export text.
pub struct ExportFormatter;

impl OutputFormatter for ExportFormatter {
    fn format(&self, vars: &EnvVars) -> Result<String> {
        Ok(EnvCodec::serialize(vars))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, vars: &EnvVars) -> Result<String> {
        let mut json = serde_json::to_string_pretty(vars)?;
        json.push('\n');
        Ok(json)
    }
}

/// Formatter for dotenv (.env file) format.
pub struct DotenvFormatter;

impl OutputFormatter for DotenvFormatter {
    fn format(&self, vars: &EnvVars) -> Result<String> {
        let mut out = String::new();
        for (name, value) in vars.iter() {
            out.push_str(name);
            out.push('=');
            out.push_str(&EnvCodec::quote(value));
            out.push('\n');
        }
        Ok(out)
    }
}
