//! # API Facade
//!
//! [`AgendaApi`] is the single entry point for contact book operations. It
//! owns the [`BucketStore`] and the dump sink, and dispatches each call to its
//! command in `commands/*.rs`.
//!
//! The facade does no I/O of its own and holds no business logic. Every method
//! returns `Result<CmdResult>`; an `Err` means the store was left untouched.
//!
//! ## Generic Over ContactSink
//!
//! - Production: `AgendaApi<FileSink>`
//! - Testing: `AgendaApi<MemorySink>`

use crate::commands;
use crate::error::Result;
use crate::model::Contact;
use crate::store::{BucketStore, ContactSink};

pub struct AgendaApi<K: ContactSink> {
    store: BucketStore,
    sink: K,
}

impl<K: ContactSink> AgendaApi<K> {
    pub fn new(sink: K) -> Self {
        Self::with_store(BucketStore::new(), sink)
    }

    pub fn with_store(store: BucketStore, sink: K) -> Self {
        Self { store, sink }
    }

    pub fn add_contact(
        &mut self,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<commands::CmdResult> {
        let contact = Contact::new(given_name, family_name, phone, email);
        commands::add::run(&mut self.store, contact)
    }

    pub fn search_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, name)
    }

    pub fn edit_contact(
        &mut self,
        name: &str,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<commands::CmdResult> {
        let updated = Contact::new(given_name, family_name, phone, email);
        commands::edit::run(&mut self.store, name, updated)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn dump_contacts(&mut self) -> Result<commands::CmdResult> {
        commands::dump::run(&self.store, &mut self.sink)
    }

    pub fn store(&self) -> &BucketStore {
        &self.store
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;
    use crate::store::memory::MemorySink;

    #[test]
    fn add_search_delete_scenario() {
        let mut api = AgendaApi::new(MemorySink::new());

        api.add_contact("Juan", "Perez", "1234567890", "juan@correo.com")
            .unwrap();

        let found = api.search_contact("Juan").unwrap().listed_contacts;
        assert_eq!(
            found,
            vec![Contact::new("Juan", "Perez", "1234567890", "juan@correo.com")]
        );

        api.delete_contact("Juan").unwrap();
        assert!(matches!(
            api.search_contact("Juan"),
            Err(AgendaError::NotFound(_))
        ));
    }

    #[test]
    fn edit_dispatches_with_new_fields() {
        let mut api = AgendaApi::new(MemorySink::new());
        api.add_contact("Ana", "Lopez", "1234567890", "ana@x.com")
            .unwrap();
        api.edit_contact("Ana", "Ana", "Ruiz", "5555555555", "ana@y.com")
            .unwrap();

        let found = &api.search_contact("Ana").unwrap().listed_contacts[0];
        assert_eq!(found.family_name, "Ruiz");
        assert_eq!(found.phone, "5555555555");
        assert_eq!(found.email, "ana@y.com");
    }

    #[test]
    fn dump_goes_to_owned_sink() {
        let mut api = AgendaApi::new(MemorySink::new());
        api.add_contact("Ana", "Lopez", "1234567890", "ana@x.com")
            .unwrap();
        api.dump_contacts().unwrap();

        assert_eq!(api.sink().lines(), &["Ana Lopez 1234567890 ana@x.com"]);
    }

    #[test]
    fn failed_operations_leave_store_untouched() {
        let mut api = AgendaApi::new(MemorySink::failing());
        api.add_contact("Ana", "Lopez", "1234567890", "ana@x.com")
            .unwrap();

        assert!(api.add_contact("Bo", "X", "123", "b@b.b").is_err());
        assert!(api.delete_contact("Zed").is_err());
        assert!(matches!(api.dump_contacts(), Err(AgendaError::Io(_))));
        assert_eq!(api.store().len(), 1);
    }
}
