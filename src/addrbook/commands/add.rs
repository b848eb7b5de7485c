use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{PhoneCheck, Record};

/// Creates a contact with its phones. Nothing is inserted when any phone is rejected.
pub fn run<P: AsRef<str>>(
    book: &mut AddressBook,
    name: &str,
    phones: &[P],
    check: PhoneCheck,
) -> Result<CmdResult> {
    let mut record = Record::with_check(name, check)?;
    for phone in phones {
        record.add_phone(phone.as_ref())?;
    }

    book.add_record(record.clone())?;
    tracing::debug!(name, phones = record.phones().len(), "record added");

    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success("Record added."));
    Ok(result)
}
