//! # API Facade
//!
//! [`AddressBookApi`] is the single entry point for UI clients. It owns the
//! [`AddressBook`] and the active [`BookConfig`] and forwards each call to the
//! matching function in `commands/`.
//!
//! The facade does no printing and holds no business rules of its own: the
//! only thing it adds is threading the configured [`PhoneCheck`] into the
//! commands that create phones.

use crate::book::AddressBook;
use crate::commands;
use crate::config::BookConfig;
use crate::error::Result;
use crate::model::PhoneCheck;
use std::path::Path;

pub struct AddressBookApi {
    book: AddressBook,
    config: BookConfig,
}

impl AddressBookApi {
    pub fn new(config: BookConfig) -> Self {
        Self {
            book: AddressBook::new(),
            config,
        }
    }

    pub fn phone_check(&self) -> PhoneCheck {
        self.config.phone_check
    }

    pub fn add_contact<P: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[P],
    ) -> Result<commands::CmdResult> {
        let check = self.phone_check();
        commands::add::run(&mut self.book, name, phones, check)
    }

    pub fn find_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn edit_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        commands::phones::edit(&mut self.book, name, old, new)
    }

    pub fn find_phone(&self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::find(&self.book, name, phone)
    }

    pub fn validate_phones<P: AsRef<str>>(&self, values: &[P]) -> Result<commands::CmdResult> {
        commands::validate::run(values, self.phone_check())
    }

    pub fn demo(&mut self) -> Result<commands::CmdResult> {
        let check = self.phone_check();
        commands::demo::run(&mut self.book, check)
    }

    pub fn config(&self, dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(dir, action)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
