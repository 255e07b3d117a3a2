pub mod context;
pub mod contact_commands;

use crate::client::{ContactBook, ContactClient};
use context::CLIContext;

/// Run the interactive REPL against the server at `base_url`.
pub fn run(base_url: &str) {
    println!("Contact List");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut book = ContactBook::new(ContactClient::new(base_url));
    if let Err(e) = book.refresh() {
        eprintln!("Error loading contacts from {}: {}", base_url, e);
        return;
    }
    println!("Loaded {} contact(s) from {}", book.contacts().len(), base_url);

    let mut ctx = CLIContext::new(book);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "list" | "ls" => contact_commands::list(ctx),
            "refresh" => contact_commands::refresh(ctx),
            "add" => contact_commands::add(ctx, args),
            "edit" => contact_commands::edit(ctx, args),
            "delete" | "rm" => contact_commands::delete(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find([' ', '\t']) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:
    list                    List contacts
    refresh                 Re-fetch contacts from the server
    add [name]              Add a contact (prompts for email and number)
    edit <id|name>          Edit a contact
    delete <id|name>        Delete a contact
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - While editing, Enter keeps a value and '-' clears it"#);
}
