//! # Address Book
//!
//! [`AddressBook`] maps a contact name to its [`Record`]. Names are unique keys;
//! phone validation and phone uniqueness are left to the record itself.
//!
//! Lookups go through a `HashMap`, while a separate list of names remembers
//! insertion order so listing and printing are stable.

use crate::error::{AddrBookError, Result};
use crate::model::Record;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<()> {
        let name = record.name().to_string();
        if self.records.contains_key(&name) {
            return Err(AddrBookError::RecordConflict(name));
        }
        self.order.push(name.clone());
        self.records.insert(name, record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| AddrBookError::RecordNotFound(name.to_string()))
    }

    /// Like [`find`](Self::find), but lets the caller edit the stored record.
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AddrBookError::RecordNotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| AddrBookError::RecordNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record).unwrap();
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(format!("Contact {}", i + 1)).unwrap();
                record.add_phone(&format!("{:010}", i + 1)).unwrap();
                self.book.add_record(record).unwrap();
            }
            self
        }
    }
}
