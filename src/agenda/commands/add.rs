use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::model::Contact;
use crate::store::BucketStore;
use crate::validate::{validate_email, validate_phone};

use super::helpers::resolve_bucket;

pub fn run(store: &mut BucketStore, contact: Contact) -> Result<CmdResult> {
    resolve_bucket(contact.given_name())?;
    if !validate_phone(&contact.phone) {
        return Err(AgendaError::InvalidPhone(contact.phone));
    }
    if !validate_email(&contact.email) {
        return Err(AgendaError::InvalidEmail(contact.email));
    }

    store.insert(contact.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact added: {}", contact)));
    Ok(result.with_affected_contacts(vec![contact]))
}
