use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgendaError, Result};
use crate::store::{bucket_letter, BucketStore};

use super::helpers::resolve_bucket;

pub fn run(store: &mut BucketStore, name: &str) -> Result<CmdResult> {
    if name.is_empty() {
        return Err(AgendaError::EmptyName);
    }
    let bucket = resolve_bucket(name)?;
    if store.bucket(bucket).is_empty() {
        return Err(AgendaError::EmptyBucket(bucket_letter(bucket)));
    }

    let slot = store.find_by_name(bucket, name)?;
    let removed = store.remove_at(bucket, slot);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact deleted: {}", removed)));
    Ok(result.with_affected_contacts(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, search};
    use crate::model::Contact;

    fn contact(name: &str) -> Contact {
        Contact::new(name, "Family", "1234567890", "x@y.z")
    }

    #[test]
    fn deleting_only_contact_empties_bucket() {
        let mut store = BucketStore::new();
        add::run(&mut store, contact("Juan")).unwrap();

        let result = run(&mut store, "Juan").unwrap();
        assert_eq!(result.affected_contacts[0].given_name(), "Juan");
        assert!(matches!(
            search::run(&store, "Juan"),
            Err(AgendaError::NotFound(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_name_checked_first() {
        let mut store = BucketStore::new();
        assert!(matches!(run(&mut store, ""), Err(AgendaError::EmptyName)));
    }

    #[test]
    fn non_letter_name_is_invalid() {
        let mut store = BucketStore::new();
        add::run(&mut store, contact("Ana")).unwrap();
        assert!(matches!(
            run(&mut store, "1Ana"),
            Err(AgendaError::InvalidName(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_bucket_reported() {
        let mut store = BucketStore::new();
        add::run(&mut store, contact("Ana")).unwrap();
        assert!(matches!(
            run(&mut store, "Beto"),
            Err(AgendaError::EmptyBucket('B'))
        ));
    }

    #[test]
    fn missing_name_in_populated_bucket() {
        let mut store = BucketStore::new();
        add::run(&mut store, contact("Ana")).unwrap();
        assert!(matches!(
            run(&mut store, "Alma"),
            Err(AgendaError::NotFound(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_moves_last_contact_into_slot() {
        let mut store = BucketStore::new();
        for name in ["Carla", "Carlos", "Cecilia"] {
            add::run(&mut store, contact(name)).unwrap();
        }
        run(&mut store, "Carla").unwrap();

        let names: Vec<_> = store.bucket(2).iter().map(|c| c.given_name()).collect();
        assert_eq!(names, vec!["Cecilia", "Carlos"]);
    }
}
