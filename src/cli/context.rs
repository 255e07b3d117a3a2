use std::io::{self, Write};

use crate::client::ContactBook;
use crate::error::ContactError;
use crate::model::{Contact, ContactId};

pub struct CLIContext {
    pub book: ContactBook,
}

impl CLIContext {
    pub fn new(book: ContactBook) -> Self {
        Self { book }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a contact by id or name query. Prints error if not found or ambiguous.
    pub fn find_contact(&self, args: &str) -> Option<ContactId> {
        let query = args.trim();
        if query.is_empty() {
            println!("Which contact? Give an id or a name.");
            return None;
        }

        let matches = self.book.find(query);
        match matches.len() {
            0 => {
                println!("No contact found matching '{}'", query);
                None
            }
            1 => Some(matches[0].id),
            _ => {
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {}", format_contact(c));
                }
                println!("Please be more specific, or use the id.");
                None
            }
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &ContactError) {
        println!("Error: {}", e);
    }
}

pub fn format_contact(contact: &Contact) -> String {
    let mut line = format!("[{}] {}", contact.id, contact.name);
    if let Some(email) = contact.email.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!(" <{}>", email));
    }
    if let Some(number) = contact.number.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!(" {}", number));
    }
    line
}
