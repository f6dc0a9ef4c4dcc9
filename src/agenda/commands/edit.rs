use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::BucketStore;

use super::helpers::locate;

/// Replaces the contact called `name` with `updated`, field for field.
///
/// The new values are not validated, and the record stays in its current
/// bucket and slot even if the new name starts with another letter.
pub fn run(store: &mut BucketStore, name: &str, updated: Contact) -> Result<CmdResult> {
    let (bucket, slot) = locate(store, name)?;
    let previous = store.replace_at(bucket, slot, updated.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {} -> {}",
        previous, updated
    )));
    Ok(result.with_affected_contacts(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, search};
    use crate::error::AgendaError;

    fn seeded() -> BucketStore {
        let mut store = BucketStore::new();
        add::run(
            &mut store,
            Contact::new("Juan", "Perez", "1234567890", "juan@correo.com"),
        )
        .unwrap();
        store
    }

    #[test]
    fn replaces_all_fields() {
        let mut store = seeded();
        let updated = Contact::new("Juan", "Gomez", "0987654321", "jg@mail.org");
        run(&mut store, "Juan", updated.clone()).unwrap();

        let found = search::run(&store, "Juan").unwrap().listed_contacts;
        assert_eq!(found, vec![updated]);
    }

    #[test]
    fn does_not_validate_new_values() {
        let mut store = seeded();
        let updated = Contact::new("Juan", "", "not a phone", "no-email");
        run(&mut store, "Juan", updated.clone()).unwrap();
        assert_eq!(store.bucket(9), &[updated]);
    }

    #[test]
    fn renamed_contact_stays_in_old_bucket() {
        let mut store = seeded();
        run(
            &mut store,
            "Juan",
            Contact::new("Pedro", "Perez", "1234567890", "p@p.p"),
        )
        .unwrap();

        assert_eq!(store.bucket(9)[0].given_name(), "Pedro");
        assert!(store.bucket(15).is_empty());
        // Lookups route by the new name's letter, so it is unreachable.
        assert!(matches!(
            search::run(&store, "Pedro"),
            Err(AgendaError::NotFound(_))
        ));
    }

    #[test]
    fn missing_contact_is_not_found() {
        let mut store = seeded();
        let err = run(
            &mut store,
            "Julia",
            Contact::new("Julia", "X", "1234567890", "j@j.j"),
        )
        .unwrap_err();
        assert!(matches!(err, AgendaError::NotFound(_)));
        assert_eq!(store.bucket(9)[0].family_name, "Perez");
    }

    #[test]
    fn invalid_name_is_rejected() {
        let mut store = seeded();
        let err = run(&mut store, "", Contact::new("A", "B", "C", "D")).unwrap_err();
        assert!(matches!(err, AgendaError::InvalidName(_)));
    }
}
