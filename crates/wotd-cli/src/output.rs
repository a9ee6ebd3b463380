//! Output formatting for command results.

use serde::Serialize;
use std::io::Write;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// A command result that can be printed as text or JSON.
pub trait FormattedOutput: Serialize {
    fn format_text(&self) -> String;

    fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Render `value` in the context's output format.
pub fn render<T: FormattedOutput>(format: OutputFormat, value: &T) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json()?,
    })
}

/// Print formatted output to stdout
pub fn print_output<T: FormattedOutput>(ctx: &CommandContext, value: &T) -> Result<(), CliError> {
    write_output(ctx, value, std::io::stdout().lock())
}

/// Print formatted output to a writer
pub fn write_output<T, W>(ctx: &CommandContext, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput,
    W: Write,
{
    let output = render(ctx.format, value)?;
    writeln!(writer, "{output}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        message: String,
    }

    impl FormattedOutput for Greeting {
        fn format_text(&self) -> String {
            format!("says: {}", self.message)
        }
    }

    #[test]
    fn test_render_formats() {
        let greeting = Greeting {
            message: "hi".to_string(),
        };
        assert_eq!(render(OutputFormat::Text, &greeting).unwrap(), "says: hi");

        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, &greeting).unwrap()).unwrap();
        assert_eq!(json["message"], "hi");
    }
}
