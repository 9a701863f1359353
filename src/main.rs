//! Contact Book - Main entry point
//!
//! Runs the interactive loop: read a line, dispatch to a command handler,
//! print the result. Handler errors become one-line messages and the loop
//! keeps going; only `close`/`exit` or end of input stop it.

use anyhow::Result;
use contact_book::commands::{self, handlers};
use contact_book::error::CommandResult;
use contact_book::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log to stderr only so stdout stays clean for user-facing output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        upcoming_days = config.upcoming_days,
        "configuration loaded"
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // end of input
        }

        let (command, args) = commands::parse_input(&line);
        debug!(%command, args = args.len(), "dispatching command");

        let output = match command.as_str() {
            "" => continue,
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => "How can I help you?".to_string(),
            "add" => render(handlers::add_contact(&args, &mut book)),
            "change" => render(handlers::change_contact(&args, &mut book)),
            "phone" => render(handlers::show_phone(&args, &book)),
            "all" => render(handlers::show_all(&book)),
            "add-birthday" => render(handlers::add_birthday(&args, &mut book)),
            "show-birthday" => render(handlers::show_birthday(&args, &book)),
            "birthdays" => render(handlers::birthdays(&book, config.upcoming_days)),
            "search" => render(handlers::search_contacts(&args, &book)),
            "remove-phone" => render(handlers::remove_phone(&args, &mut book)),
            _ => "Invalid command.".to_string(),
        };
        println!("{}", output);
    }

    Ok(())
}

/// Convert a handler result into one line of display text.
fn render(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|err| err.to_string())
}
