//! The numbered menu loop and the prompts behind each option.
//!
//! Everything here is generic over `BufRead`/`Write` so a whole session can be
//! scripted in tests. End of input is treated as choosing "Exit".

use super::render::print_outcome;
use agenda::api::AgendaApi;
use agenda::error::Result;
use agenda::store::ContactSink;
use agenda::validate::validate_phone;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\
CONTACT BOOK MENU
1. Add contact.
2. Search contact.
3. Edit contact.
4. Delete contact.
5. Save contacts.
6. Exit.";

const FAREWELL: &str = "Thanks for using the contact book. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Choice {
    Add,
    Search,
    Edit,
    Delete,
    Save,
    Exit,
}

impl Choice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Choice::Add),
            2 => Some(Choice::Search),
            3 => Some(Choice::Edit),
            4 => Some(Choice::Delete),
            5 => Some(Choice::Save),
            6 => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Line-oriented console over any reader/writer pair.
pub(super) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line without its terminator.
    /// Returns `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// read, so a stray byte never ends the session.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn ask_phone(&mut self) -> Result<Option<String>> {
        loop {
            let Some(phone) = self.ask("Enter the phone number: ")? else {
                return Ok(None);
            };
            if validate_phone(&phone) {
                return Ok(Some(phone));
            }
            writeln!(self.output, "{}", "Invalid phone number.".red())?;
        }
    }

    fn ask_choice(&mut self) -> Result<Option<Choice>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.ask("Choose an option: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(n) => match Choice::from_number(n) {
                    Some(choice) => return Ok(Some(choice)),
                    None => writeln!(self.output, "{}", "Invalid option.".red())?,
                },
                Err(_) => writeln!(
                    self.output,
                    "{}",
                    "Invalid option. Please enter an integer between 1 and 6.".red()
                )?,
            }
        }
    }
}

/// Whether the menu keeps going after an option ran.
enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the user exits or input runs out.
pub(super) fn run_menu<K, R, W>(api: &mut AgendaApi<K>, console: &mut Console<R, W>) -> Result<()>
where
    K: ContactSink,
    R: BufRead,
    W: Write,
{
    loop {
        let choice = console.ask_choice()?.unwrap_or(Choice::Exit);
        debug!(?choice, "menu choice");

        let flow = match choice {
            Choice::Add => add(api, console)?,
            Choice::Search => search(api, console)?,
            Choice::Edit => edit(api, console)?,
            Choice::Delete => delete(api, console)?,
            Choice::Save => {
                let outcome = api.dump_contacts();
                print_outcome(&mut console.output, &outcome)?;
                Flow::Continue
            }
            Choice::Exit => Flow::Exit,
        };

        if let Flow::Exit = flow {
            writeln!(console.output, "{}", FAREWELL)?;
            console.output.flush()?;
            return Ok(());
        }
    }
}

fn add<K: ContactSink, R: BufRead, W: Write>(
    api: &mut AgendaApi<K>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let Some(given) = console.ask("Enter the name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(family) = console.ask("Enter the family name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(phone) = console.ask_phone()? else {
        return Ok(Flow::Exit);
    };
    let Some(email) = console.ask("Enter the email: ")? else {
        return Ok(Flow::Exit);
    };

    let outcome = api.add_contact(given, family, phone, email);
    print_outcome(&mut console.output, &outcome)?;
    Ok(Flow::Continue)
}

fn search<K: ContactSink, R: BufRead, W: Write>(
    api: &mut AgendaApi<K>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let Some(name) = console.ask("Enter the name: ")? else {
        return Ok(Flow::Exit);
    };
    let outcome = api.search_contact(&name);
    print_outcome(&mut console.output, &outcome)?;
    Ok(Flow::Continue)
}

fn edit<K: ContactSink, R: BufRead, W: Write>(
    api: &mut AgendaApi<K>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let Some(name) = console.ask("Enter the name of the contact to edit: ")? else {
        return Ok(Flow::Exit);
    };

    // Only prompt for new values when there is something to edit.
    if let Err(e) = api.search_contact(&name) {
        print_outcome(&mut console.output, &Err(e))?;
        return Ok(Flow::Continue);
    }

    let Some(given) = console.ask("Enter the new name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(family) = console.ask("Enter the new family name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(phone) = console.ask("Enter the new phone number: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(email) = console.ask("Enter the new email: ")? else {
        return Ok(Flow::Exit);
    };

    let outcome = api.edit_contact(&name, given, family, phone, email);
    print_outcome(&mut console.output, &outcome)?;
    Ok(Flow::Continue)
}

fn delete<K: ContactSink, R: BufRead, W: Write>(
    api: &mut AgendaApi<K>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let Some(name) = console.ask("Enter the name of the contact to delete: ")? else {
        return Ok(Flow::Exit);
    };
    let outcome = api.delete_contact(&name);
    print_outcome(&mut console.output, &outcome)?;
    Ok(Flow::Continue)
}
