use crate::cli::context::{format_contact, CLIContext};
use crate::model::NewContact;

pub fn list(ctx: &CLIContext) {
    let contacts = ctx.book.contacts();
    if contacts.is_empty() {
        println!("No contacts yet. Use 'add' to add someone.");
        return;
    }

    println!("Contacts ({}):", contacts.len());
    println!();
    for contact in contacts {
        println!("  {}", format_contact(contact));
    }
}

pub fn refresh(ctx: &mut CLIContext) {
    match ctx.book.refresh() {
        Ok(()) => list(ctx),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    println!("Adding a new contact (press Enter to skip optional fields)");
    println!();

    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name (required): ") {
            Some(s) if s.is_empty() => {
                println!("Name is required.");
                return;
            }
            Some(s) => s,
            None => return,
        }
    };

    let Some(email) = ctx.prompt("Email: ") else {
        return;
    };
    let Some(number) = ctx.prompt("Number: ") else {
        return;
    };

    let mut new = NewContact::named(name);
    if !email.is_empty() {
        new = new.with_email(email);
    }
    if !number.is_empty() {
        new = new.with_number(number);
    }

    match ctx.book.add(&new) {
        Ok(c) => println!("Added {}", format_contact(&c)),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit(ctx: &mut CLIContext, args: &str) {
    let Some(id) = ctx.find_contact(args) else {
        return;
    };

    let current = match ctx.book.begin_edit(id) {
        Ok(c) => c.clone(),
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    println!("Editing {} (Enter keeps the current value, '-' clears it)", format_contact(&current));

    let name = ctx.prompt(&format!("Name [{}]: ", current.name));
    let email = ctx.prompt(&format!("Email [{}]: ", current.email.as_deref().unwrap_or("")));
    let number = ctx.prompt(&format!("Number [{}]: ", current.number.as_deref().unwrap_or("")));

    let (Some(name), Some(email), Some(number)) = (name, email, number) else {
        ctx.book.cancel_edit();
        return;
    };

    if let Some(editing) = ctx.book.editing_mut() {
        if !name.is_empty() && name != "-" {
            editing.name = name;
        }
        apply_optional(&mut editing.email, email);
        apply_optional(&mut editing.number, number);
    }

    let confirm = ctx.prompt("Save changes? (y/n): ").unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        ctx.book.cancel_edit();
        println!("Edit cancelled.");
        return;
    }

    match ctx.book.save_edit() {
        Ok(Some(0)) => println!("Contact {} no longer exists.", id),
        Ok(Some(_)) => println!("Saved."),
        Ok(None) => {}
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    let Some(id) = ctx.find_contact(args) else {
        return;
    };

    match ctx.book.delete(id) {
        Ok(0) => println!("Contact {} was already gone.", id),
        Ok(_) => println!("Deleted contact {}.", id),
        Err(e) => ctx.print_error(&e),
    }
}

fn apply_optional(field: &mut Option<String>, input: String) {
    match input.as_str() {
        "" => {}
        "-" => *field = None,
        _ => *field = Some(input),
    }
}
