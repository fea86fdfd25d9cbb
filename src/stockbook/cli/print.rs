use colored::Colorize;
use std::io::{self, Write};
use stockbook::commands::{CmdMessage, CmdResult, MessageLevel};
use stockbook::model::format_currency;

pub(super) fn print_messages(out: &mut dyn Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_result(
    out: &mut dyn Write,
    result: &CmdResult,
    currency_symbol: &str,
) -> io::Result<()> {
    for item in &result.listed_items {
        writeln!(out, "{}", item.describe_in(currency_symbol))?;
    }
    if let Some(total) = result.total_value {
        writeln!(
            out,
            "Total inventory value: {}",
            format_currency(total, currency_symbol).bold()
        )?;
    }
    print_messages(out, &result.messages)
}

/// Single-line report for a failed action.
pub(super) fn print_error(out: &mut dyn Write, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}
