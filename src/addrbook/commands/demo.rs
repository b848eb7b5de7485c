use crate::book::AddressBook;
use crate::commands::{add, delete, find, list, phones, CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::PhoneCheck;

/// Walks a fixed sequence of operations over `book`, collecting what it
/// would show a user along the way.
///
/// Adds John and Jane, lists everyone, edits one of John's phones, looks a
/// phone up and finally deletes Jane. Only the listings and the lookup are
/// reported; the book keeps the end state.
pub fn run(book: &mut AddressBook, check: PhoneCheck) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    add::run(book, "John", &["1234567890", "5555555555"], check)?;
    add::run(book, "Jane", &["9876543210"], check)?;

    for record in list::run(book)?.listed_records {
        result.add_message(CmdMessage::info(record.to_string()));
    }

    let edited = phones::edit(book, "John", "1234567890", "1112223333")?;
    for record in &edited.affected_records {
        result.add_message(CmdMessage::info(record.to_string()));
    }

    let lookup = phones::find(book, "John", "5555555555")?;
    if let Some(phone) = lookup.found_phone {
        result.add_message(CmdMessage::info(format!("John: {}", phone)));
    }

    delete::run(book, "Jane")?;
    match find::run(book, "Jane") {
        Err(AddrBookError::RecordNotFound(_)) => {}
        Err(e) => return Err(e),
        Ok(_) => result.add_message(CmdMessage::error("Jane is still listed after delete")),
    }

    Ok(result.with_listed_records(book.iter().cloned().collect()))
}
