//! Phone operations on a contact that already lives in the book.
//!
//! Each function resolves the contact by name first, so a missing contact is
//! reported as `RecordNotFound` before any phone rule is checked.

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    record.add_phone(phone).inspect_err(|e| {
        tracing::warn!(name, phone, error = %e, "phone rejected");
    })?;
    tracing::debug!(name, phone, "phone added");

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success("Phone added."));
    Ok(result)
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    record.remove_phone(phone)?;
    tracing::debug!(name, phone, "phone removed");

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success("Phone removed."));
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = book.find_mut(name)?;
    record.edit_phone(old, new).inspect_err(|e| {
        tracing::warn!(name, old, new, error = %e, "phone edit rejected");
    })?;
    tracing::debug!(name, old, new, "phone edited");

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success("Phone edited."));
    Ok(result)
}

pub fn find(book: &AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    let found = record.find_phone(phone)?.clone();
    Ok(CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .with_found_phone(found))
}
