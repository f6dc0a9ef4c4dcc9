use agenda::api::{CmdMessage, CmdResult, MessageLevel};
use agenda::error::AgendaError;
use agenda::model::Contact;
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_contact<W: Write>(out: &mut W, contact: &Contact) -> io::Result<()> {
    writeln!(out, "{} {}", "Name:".bold(), contact.given_name)?;
    writeln!(out, "{} {}", "Family name:".bold(), contact.family_name)?;
    writeln!(out, "{} {}", "Phone:".bold(), contact.phone)?;
    writeln!(out, "{} {}", "Email:".bold(), contact.email)
}

/// Prints the outcome of one menu operation.
pub(super) fn print_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<CmdResult, AgendaError>,
) -> io::Result<()> {
    match outcome {
        Ok(result) => {
            for contact in &result.listed_contacts {
                print_contact(out, contact)?;
            }
            print_messages(out, &result.messages)
        }
        Err(e) => print_messages(out, &[CmdMessage::error(e.to_string())]),
    }
}
