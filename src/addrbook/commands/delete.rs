use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.delete(name)?;
    tracing::debug!(name, "record deleted");

    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success("Record deleted."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;
    use crate::commands::find;
    use crate::error::AddrBookError;

    #[test]
    fn deleted_record_is_no_longer_found() {
        let mut book = BookFixture::new()
            .with_contact("Jane", &["9876543210"])
            .book;
        let result = run(&mut book, "Jane").unwrap();

        assert_eq!(result.affected_records[0].name(), "Jane");
        assert!(matches!(
            find::run(&book, "Jane"),
            Err(AddrBookError::RecordNotFound(_))
        ));
    }

    #[test]
    fn deleting_missing_name_fails() {
        let mut book = BookFixture::new().with_contact("John", &[]).book;
        assert!(matches!(
            run(&mut book, "Jane"),
            Err(AddrBookError::RecordNotFound(_))
        ));
        assert_eq!(book.len(), 1);
    }
}
