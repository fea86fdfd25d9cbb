//! Command-line shell: argument parsing, logging setup, the interactive menu,
//! and printing. Not part of the library API.

mod args;
mod menu;
mod print;
mod setup;

use args::{Cli, Commands};
use clap::Parser;
use menu::Menu;
use print::print_result;
use setup::{init_context, init_logging, AppContext};
use std::io::{self, Write};
use stockbook::commands::{self, CmdResult};
use stockbook::model::Item;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    let result = match cli.command {
        None | Some(Commands::Menu) => return run_menu(&mut ctx),
        Some(Commands::Add {
            id,
            name,
            quantity,
            price,
        }) => {
            let item = Item::new(id, name, quantity, price)?;
            commands::add::run(&mut ctx.inventory, item)?
        }
        Some(Commands::Remove { id }) => commands::remove::run(&mut ctx.inventory, id)?,
        Some(Commands::View { id }) => commands::view::run(&ctx.inventory, id)?,
        Some(Commands::List) => commands::list::run(&ctx.inventory)?,
        Some(Commands::Total) => commands::total::run(&ctx.inventory)?,
        Some(Commands::Save) => commands::save::run(&ctx.inventory)?,
        Some(Commands::Load) => commands::load::run(&mut ctx.inventory)?,
        Some(Commands::SetQuantity { id, quantity }) => {
            commands::quantity::run(&mut ctx.inventory, id, quantity)?
        }
    };

    print_once(&ctx, &result)
}

fn run_menu(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(
        &mut ctx.inventory,
        stdin.lock(),
        stdout.lock(),
        &ctx.currency_symbol,
    )
    .run()?;
    Ok(())
}

fn print_once(ctx: &AppContext, result: &CmdResult) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_result(&mut out, result, &ctx.currency_symbol)?;
    out.flush()?;
    Ok(())
}
