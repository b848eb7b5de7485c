use crate::error::{AddrBookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;

/// How strictly new phone values are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneCheck {
    /// Exactly ten ASCII digits.
    #[default]
    Digits,
    /// Exactly ten characters of any kind.
    Length,
}

impl PhoneCheck {
    pub fn accepts(&self, value: &str) -> bool {
        let right_len = value.chars().count() == PHONE_LEN;
        match self {
            PhoneCheck::Digits => right_len && value.chars().all(|c| c.is_ascii_digit()),
            PhoneCheck::Length => right_len,
        }
    }

    /// What a value must look like to pass, for error messages.
    pub fn expectation(&self) -> &'static str {
        match self {
            PhoneCheck::Digits => "10 digits",
            PhoneCheck::Length => "10 characters",
        }
    }
}

impl fmt::Display for PhoneCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneCheck::Digits => write!(f, "digits"),
            PhoneCheck::Length => write!(f, "length"),
        }
    }
}

impl FromStr for PhoneCheck {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digits" => Ok(PhoneCheck::Digits),
            "length" => Ok(PhoneCheck::Length),
            other => Err(format!(
                "Invalid phone check '{}': expected 'digits' or 'length'",
                other
            )),
        }
    }
}

/// A validated phone number. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Builds a phone using the strict digit check.
    pub fn new(value: &str) -> Result<Self> {
        Self::checked(value, PhoneCheck::Digits)
    }

    pub fn checked(value: &str, check: PhoneCheck) -> Result<Self> {
        if !check.accepts(value) {
            return Err(AddrBookError::InvalidPhone {
                value: value.to_string(),
                check,
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A named contact with an ordered list of unique phones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    check: PhoneCheck,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_check(name, PhoneCheck::default())
    }

    pub fn with_check(name: impl Into<String>, check: PhoneCheck) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AddrBookError::InvalidName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            check,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn check(&self) -> PhoneCheck {
        self.check
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == value)
    }

    /// Appends a phone. Duplicates are reported before malformed values.
    pub fn add_phone(&mut self, value: &str) -> Result<&Phone> {
        if self.position(value).is_some() {
            return Err(self.conflict(value));
        }
        let phone = Phone::checked(value, self.check)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<()> {
        let before = self.phones.len();
        self.phones.retain(|p| p != value);
        if self.phones.len() == before {
            return Err(AddrBookError::PhoneNotFound(value.to_string()));
        }
        Ok(())
    }

    /// Replaces `old` with `new` in place, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<&Phone> {
        let replacement = Phone::checked(new, self.check)?;
        if new != old && self.position(new).is_some() {
            return Err(self.conflict(new));
        }
        let idx = self
            .position(old)
            .ok_or_else(|| AddrBookError::PhoneNotFound(old.to_string()))?;
        self.phones[idx] = replacement;
        Ok(&self.phones[idx])
    }

    pub fn find_phone(&self, value: &str) -> Result<&Phone> {
        self.phones
            .iter()
            .find(|p| *p == value)
            .ok_or_else(|| AddrBookError::PhoneNotFound(value.to_string()))
    }

    fn conflict(&self, value: &str) -> AddrBookError {
        AddrBookError::PhoneConflict {
            name: self.name.clone(),
            phone: value.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn phone_requires_ten_digits() {
        assert!(Phone::new("1234567890").is_ok());
        assert!(matches!(
            Phone::new("123456789"),
            Err(AddrBookError::InvalidPhone { .. })
        ));
        assert!(matches!(
            Phone::new("12345678901"),
            Err(AddrBookError::InvalidPhone { .. })
        ));
        assert!(matches!(
            Phone::new("12345abcde"),
            Err(AddrBookError::InvalidPhone { .. })
        ));
    }

    #[test]
    fn length_check_accepts_non_digits() {
        assert!(Phone::checked("12345abcde", PhoneCheck::Length).is_ok());
        assert!(Phone::checked("12345", PhoneCheck::Length).is_err());
    }

    #[test]
    fn phone_check_parses_from_str() {
        assert_eq!("digits".parse::<PhoneCheck>(), Ok(PhoneCheck::Digits));
        assert_eq!(" Length ".parse::<PhoneCheck>(), Ok(PhoneCheck::Length));
        assert!("strict".parse::<PhoneCheck>().is_err());
    }

    #[test]
    fn record_rejects_blank_name() {
        assert!(matches!(Record::new(""), Err(AddrBookError::InvalidName)));
        assert!(matches!(Record::new("   "), Err(AddrBookError::InvalidName)));
    }

    #[test]
    fn added_phone_can_be_found() {
        let record = john();
        assert_eq!(record.find_phone("5555555555").unwrap().as_str(), "5555555555");
    }

    #[test]
    fn adding_same_phone_twice_conflicts() {
        let mut record = john();
        let err = record.add_phone("1234567890").unwrap_err();
        assert!(matches!(
            err,
            AddrBookError::PhoneConflict { ref name, ref phone }
                if name == "John" && phone == "1234567890"
        ));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn length_check_still_rejects_duplicates() {
        let mut record = Record::with_check("Bob", PhoneCheck::Length).unwrap();
        record.add_phone("abcdefghij").unwrap();
        assert!(matches!(
            record.add_phone("abcdefghij"),
            Err(AddrBookError::PhoneConflict { .. })
        ));

        let mut strict = Record::new("Bob").unwrap();
        assert!(matches!(
            strict.add_phone("abcdefghij"),
            Err(AddrBookError::InvalidPhone { .. })
        ));
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut record = john();
        record.add_phone("9876543210").unwrap();
        record.remove_phone("5555555555").unwrap();

        let left: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(left, vec!["1234567890", "9876543210"]);
    }

    #[test]
    fn remove_missing_phone_fails() {
        let mut record = john();
        assert!(matches!(
            record.remove_phone("0000000000"),
            Err(AddrBookError::PhoneNotFound(_))
        ));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn edit_missing_old_phone_fails() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("0000000000", "1112223333"),
            Err(AddrBookError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn edit_to_existing_phone_conflicts() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("1234567890", "5555555555"),
            Err(AddrBookError::PhoneConflict { .. })
        ));
    }

    #[test]
    fn edit_to_itself_is_allowed() {
        let mut record = john();
        record.edit_phone("1234567890", "1234567890").unwrap();
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn edit_validates_new_phone() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("1234567890", "12"),
            Err(AddrBookError::InvalidPhone { .. })
        ));
    }

    #[test]
    fn display_without_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn invalid_phone_message_follows_check() {
        let digits = Phone::checked("12345abcde", PhoneCheck::Digits).unwrap_err();
        assert_eq!(
            digits.to_string(),
            "Invalid phone number: 12345abcde (expected 10 digits)"
        );

        let length = Phone::checked("12345", PhoneCheck::Length).unwrap_err();
        assert_eq!(
            length.to_string(),
            "Invalid phone number: 12345 (expected 10 characters)"
        );
    }

    fn is_ten_ascii_digits(value: &str) -> bool {
        value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit())
    }

    proptest! {
        #[test]
        fn prop_added_phone_is_found(value in "[0-9]{10}") {
            let mut record = Record::new("John").unwrap();
            record.add_phone(&value).unwrap();
            prop_assert_eq!(record.find_phone(&value).unwrap().as_str(), value.as_str());
        }

        #[test]
        fn prop_wrong_length_digits_are_rejected(value in "[0-9]{0,9}|[0-9]{11,16}") {
            let rejected = matches!(
                Phone::checked(&value, PhoneCheck::Digits),
                Err(AddrBookError::InvalidPhone { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn prop_anything_but_ten_ascii_digits_is_rejected(
            value in "\\PC{0,16}".prop_filter("ten ascii digits", |v: &String| !is_ten_ascii_digits(v))
        ) {
            let rejected = matches!(
                Phone::checked(&value, PhoneCheck::Digits),
                Err(AddrBookError::InvalidPhone { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn prop_remove_keeps_relative_order(
            values in prop::collection::hash_set("[0-9]{10}", 1..8),
            pick in any::<prop::sample::Index>()
        ) {
            let values: Vec<String> = values.into_iter().collect();
            let mut record = Record::new("John").unwrap();
            for value in &values {
                record.add_phone(value).unwrap();
            }

            let removed = pick.get(&values).clone();
            record.remove_phone(&removed).unwrap();

            let expected: Vec<&str> = values
                .iter()
                .map(String::as_str)
                .filter(|v| *v != removed)
                .collect();
            let left: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
            prop_assert_eq!(left, expected);
        }
    }
}
