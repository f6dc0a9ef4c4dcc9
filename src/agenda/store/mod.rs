//! # Storage Layer
//!
//! Contacts live in memory in a [`BucketStore`]: 26 vectors, one per letter of
//! the alphabet, each kept sorted by given name so lookups can binary search.
//!
//! ## Bucket Invariants
//!
//! - A contact sits in the bucket of its given name's first letter *at the time
//!   it was inserted*. [`BucketStore::replace_at`] never moves a record, even
//!   when the new name starts with another letter.
//! - [`BucketStore::insert`] re-sorts the target bucket, so every bucket is
//!   sorted right after an insert.
//! - [`BucketStore::remove_at`] swaps the last element into the freed slot.
//!   That leaves at most one element out of place until the next insert into
//!   the bucket re-sorts it. Lookups run against that layout as-is.
//!
//! ## Sinks
//!
//! Persistence is one-way. A [`ContactSink`] receives the serialized lines of a
//! dump:
//!
//! - [`fs::FileSink`]: truncates and rewrites a text file
//! - [`memory::MemorySink`]: keeps the lines in memory, for tests

use crate::error::{AgendaError, Result};
use crate::model::Contact;
use std::cmp::Ordering;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Number of buckets, one per ASCII letter.
pub const BUCKET_COUNT: usize = 26;

/// Maps a name to its bucket: `uppercase(first char) - 'A'`.
///
/// Fails with [`AgendaError::InvalidKey`] for an empty name or one that does
/// not start with an ASCII letter.
pub fn bucket_index_of(name: &str) -> Result<usize> {
    match name.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => {
            Ok((first.to_ascii_uppercase() as u8 - b'A') as usize)
        }
        _ => Err(AgendaError::InvalidKey(name.to_string())),
    }
}

/// The letter a bucket index stands for.
pub fn bucket_letter(index: usize) -> char {
    debug_assert!(index < BUCKET_COUNT);
    (b'A' + index as u8) as char
}

/// Abstract destination for a dump.
pub trait ContactSink {
    /// Replace the sink's contents with `lines`, one contact per line.
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;

    /// Human-readable location of the sink (a path for file sinks).
    fn location(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct BucketStore {
    buckets: [Vec<Contact>; BUCKET_COUNT],
}

impl Default for BucketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketStore {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Appends `contact` to its bucket and re-sorts that bucket by name.
    ///
    /// Returns the bucket index the contact was routed to.
    pub fn insert(&mut self, contact: Contact) -> Result<usize> {
        let index = bucket_index_of(contact.given_name())?;
        debug!(bucket = %bucket_letter(index), name = %contact.given_name, "inserting contact");
        let bucket = &mut self.buckets[index];
        bucket.push(contact);
        bucket.sort_by(|a, b| a.given_name.cmp(&b.given_name));
        Ok(index)
    }

    /// Binary search for `name` in a bucket, assuming the bucket is sorted.
    ///
    /// With duplicate names the slot returned is whichever one the midpoint
    /// lands on first. The answer depends only on the bucket layout.
    pub fn find_by_name(&self, bucket_index: usize, name: &str) -> Result<usize> {
        let bucket = self.bucket(bucket_index);
        let mut lo = 0usize;
        // Exclusive upper bound; the midpoint is taken over [lo, hi - 1].
        let mut hi = bucket.len();

        while lo < hi {
            let mid = lo + (hi - 1 - lo) / 2;
            match bucket[mid].given_name.as_str().cmp(name) {
                Ordering::Equal => return Ok(mid),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }

        Err(AgendaError::NotFound(name.to_string()))
    }

    /// Overwrites a slot in place. The record keeps its bucket.
    pub fn replace_at(&mut self, bucket_index: usize, slot: usize, contact: Contact) -> Contact {
        debug!(
            bucket = %bucket_letter(bucket_index),
            slot,
            name = %contact.given_name,
            "replacing contact"
        );
        std::mem::replace(&mut self.buckets[bucket_index][slot], contact)
    }

    /// Removes a slot by moving the bucket's last element into it.
    pub fn remove_at(&mut self, bucket_index: usize, slot: usize) -> Contact {
        debug!(bucket = %bucket_letter(bucket_index), slot, "removing contact");
        self.buckets[bucket_index].swap_remove(slot)
    }

    /// Contacts of one bucket in stored order.
    ///
    /// # Panics
    /// If `bucket_index >= BUCKET_COUNT`.
    pub fn bucket(&self, bucket_index: usize) -> &[Contact] {
        &self.buckets[bucket_index]
    }

    /// All contacts, bucket by bucket from A to Z, each in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.buckets.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
