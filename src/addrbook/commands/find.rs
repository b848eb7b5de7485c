use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}
