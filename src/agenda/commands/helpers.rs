use crate::error::{AgendaError, Result};
use crate::store::{bucket_index_of, BucketStore};

/// Bucket for a name typed by the user.
///
/// Names that cannot be bucketed are reported as [`AgendaError::InvalidName`].
pub fn resolve_bucket(name: &str) -> Result<usize> {
    bucket_index_of(name).map_err(|_| AgendaError::InvalidName(name.to_string()))
}

/// Resolves `name` to its `(bucket, slot)` position.
pub fn locate(store: &BucketStore, name: &str) -> Result<(usize, usize)> {
    let bucket = resolve_bucket(name)?;
    let slot = store.find_by_name(bucket, name)?;
    Ok((bucket, slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;

    #[test]
    fn invalid_key_becomes_invalid_name() {
        assert!(matches!(resolve_bucket(""), Err(AgendaError::InvalidName(_))));
        assert!(matches!(resolve_bucket("_x"), Err(AgendaError::InvalidName(_))));
        assert_eq!(resolve_bucket("bob").unwrap(), 1);
    }

    #[test]
    fn locate_returns_bucket_and_slot() {
        let mut store = BucketStore::new();
        store
            .insert(Contact::new("Dora", "D", "1234567890", "d@d.d"))
            .unwrap();
        store
            .insert(Contact::new("Dario", "D", "1234567890", "d@d.d"))
            .unwrap();

        assert_eq!(locate(&store, "Dora").unwrap(), (3, 1));
        assert!(matches!(
            locate(&store, "Diego"),
            Err(AgendaError::NotFound(_))
        ));
    }
}
