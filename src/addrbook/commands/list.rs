use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let records: Vec<_> = book.iter().cloned().collect();
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;

    #[test]
    fn lists_in_insertion_order() {
        let book = BookFixture::new()
            .with_contact("John", &[])
            .with_contact("Jane", &[])
            .book;
        let result = run(&book).unwrap();
        let names: Vec<_> = result.listed_records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_book_reports_no_contacts() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No contacts found.");
    }
}
