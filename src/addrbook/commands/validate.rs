use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Phone, PhoneCheck};

/// Checks each value against `check` without touching any book.
pub fn run<P: AsRef<str>>(values: &[P], check: PhoneCheck) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if check == PhoneCheck::Length {
        result.add_message(CmdMessage::warning(
            "Phone check is 'length': digits are not verified",
        ));
    }

    for value in values {
        let value = value.as_ref();
        match Phone::checked(value, check) {
            Ok(phone) => result.add_message(CmdMessage::success(format!("{}: valid", phone))),
            Err(e) => result.add_message(CmdMessage::error(e.to_string())),
        }
    }

    Ok(result)
}
