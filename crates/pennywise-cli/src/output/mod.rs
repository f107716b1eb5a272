mod error_text;
pub mod format;
mod json;
mod ledger_text;
mod mode;

use std::io;

use pennywise_client::{ClientError, SuccessEnvelope};

use crate::chart::{ChartRenderer, TextChartRenderer};
use crate::stdout_io::write_stdout_line;

pub use error_text::render_error;
pub use mode::{OutputMode, infer_requested_output_mode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => {
            render_text_success(success, &TextChartRenderer::new(format::terminal_width()))?
        }
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

pub fn render_text_success(
    success: &SuccessEnvelope,
    charts: &dyn ChartRenderer,
) -> io::Result<String> {
    match success.command.as_str() {
        "add" => ledger_text::render_add(&success.data),
        "list" => ledger_text::render_list(&success.data),
        "report" => ledger_text::render_report(&success.data),
        "chart" => ledger_text::render_chart(&success.data, charts),
        "categories" => ledger_text::render_categories(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
