use super::print::{print_error, print_messages, print_result};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use stockbook::commands::{self, CmdMessage};
use stockbook::error::{Result, StockbookError};
use stockbook::inventory::Inventory;
use stockbook::model::Item;
use stockbook::store::SnapshotStore;

const MENU: &str = "\
Inventory Management System
1. Add Item
2. Remove Item
3. View Item
4. View All Items
5. Calculate Total Value
6. Save to Main
7. Load from Main
8. Exit";

/// What a prompt produced: a line, or end of input.
enum Answer {
    Line(String),
    Eof,
}

/// Interactive numbered menu over any line source and sink.
pub(super) struct Menu<'a, S: SnapshotStore, R: BufRead, W: Write> {
    inventory: &'a mut Inventory<S>,
    input: R,
    out: W,
    currency_symbol: &'a str,
}

impl<'a, S: SnapshotStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(
        inventory: &'a mut Inventory<S>,
        input: R,
        out: W,
        currency_symbol: &'a str,
    ) -> Self {
        Self {
            inventory,
            input,
            out,
            currency_symbol,
        }
    }

    /// Loop until "Exit" or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;
            let choice = match self.prompt("Enter your choice: ")? {
                Answer::Line(line) => line,
                Answer::Eof => break,
            };

            let outcome = match choice.as_str() {
                "1" => self.add_item()?,
                "2" => self.with_id("Enter Item ID to remove: ", |inv, id| {
                    commands::remove::run(inv, id)
                })?,
                "3" => self.with_id("Enter Item ID to view: ", |inv, id| {
                    commands::view::run(inv, id)
                })?,
                "4" => Some(commands::list::run(self.inventory)),
                "5" => Some(commands::total::run(self.inventory)),
                "6" => Some(commands::save::run(self.inventory)),
                "7" => Some(commands::load::run(self.inventory)),
                "8" => break,
                _ => {
                    print_messages(&mut self.out, &[CmdMessage::error("Invalid choice.")])?;
                    continue;
                }
            };

            match outcome {
                Some(Ok(result)) => print_result(&mut self.out, &result, self.currency_symbol)?,
                Some(Err(e)) => print_error(&mut self.out, &e)?,
                None => break,
            }
        }
        self.out.flush()
    }

    fn prompt(&mut self, label: &str) -> io::Result<Answer> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(Answer::Eof);
        }
        Ok(Answer::Line(line.trim().to_string()))
    }

    /// Prompt for a field and parse it. `Ok(None)` means input ended.
    fn ask<T: FromStr>(&mut self, label: &str, field: &str) -> io::Result<Option<Result<T>>> {
        Ok(match self.prompt(label)? {
            Answer::Line(raw) => Some(raw.parse::<T>().map_err(|_| {
                StockbookError::Input(format!("{} '{}' is not valid", field, raw))
            })),
            Answer::Eof => None,
        })
    }

    fn with_id<F>(
        &mut self,
        label: &str,
        action: F,
    ) -> io::Result<Option<Result<commands::CmdResult>>>
    where
        F: FnOnce(&mut Inventory<S>, i64) -> Result<commands::CmdResult>,
    {
        Ok(self
            .ask::<i64>(label, "ID")?
            .map(|id| id.and_then(|id| action(self.inventory, id))))
    }

    fn add_item(&mut self) -> io::Result<Option<Result<commands::CmdResult>>> {
        let Some(id) = self.ask::<i64>("Enter Item ID: ", "ID")? else {
            return Ok(None);
        };
        let name = match self.prompt("Enter Item Name: ")? {
            Answer::Line(name) => name,
            Answer::Eof => return Ok(None),
        };
        let Some(quantity) = self.ask::<i64>("Enter Quantity: ", "Quantity")? else {
            return Ok(None);
        };
        let Some(price) = self.ask::<Decimal>("Enter Price: ", "Price")? else {
            return Ok(None);
        };

        let outcome = id.and_then(|id| {
            let item = Item::new(id, name, quantity?, price?)?;
            commands::add::run(self.inventory, item)
        });
        Ok(Some(outcome))
    }
}
