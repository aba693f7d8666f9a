//! Contact record types
//!
//! - [`PhoneNumber`]: a 10-digit number, 1,000,000,000 to 9,999,999,999
//! - [`ZipCode`]: a 5-digit number, 10,000 to 99,999
//! - [`ContactRecord`]: one (name, phone, zip) entry
//!
//! The numeric newtypes can only be built through their validating
//! constructors, so a `ContactRecord` always holds in-range values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 10-digit phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// Smallest valid phone number
    pub const MIN: u64 = 1_000_000_000;
    /// Largest valid phone number
    pub const MAX: u64 = 9_999_999_999;

    /// Validate and wrap a phone number
    pub fn new(value: u64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(PhoneNumber(value))
        } else {
            Err(Error::invalid_field(
                "phone_number",
                format!("{} is not a 10-digit number", value),
            ))
        }
    }

    /// The raw value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for PhoneNumber {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        PhoneNumber::new(value)
    }
}

impl From<PhoneNumber> for u64 {
    fn from(phone: PhoneNumber) -> u64 {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 5-digit zip code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ZipCode(u32);

impl ZipCode {
    /// Smallest valid zip code
    pub const MIN: u32 = 10_000;
    /// Largest valid zip code
    pub const MAX: u32 = 99_999;

    /// Validate and wrap a zip code
    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(ZipCode(value))
        } else {
            Err(Error::invalid_field(
                "zip_code",
                format!("{} is not a 5-digit number", value),
            ))
        }
    }

    /// The raw value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ZipCode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        ZipCode::new(value)
    }
}

impl From<ZipCode> for u32 {
    fn from(zip: ZipCode) -> u32 {
        zip.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One contact entry.
///
/// Immutable once inserted; the owning chain is the only holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Contact name, already fitted to the record capacity
    pub name: String,
    /// Phone number
    pub phone_number: PhoneNumber,
    /// Zip code
    pub zip_code: ZipCode,
}

impl ContactRecord {
    /// Create a record from validated parts
    pub fn new(name: impl Into<String>, phone_number: PhoneNumber, zip_code: ZipCode) -> Self {
        ContactRecord {
            name: name.into(),
            phone_number,
            zip_code,
        }
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone Number: {}, Zip Code: {}",
            self.name, self.phone_number, self.zip_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_bounds() {
        assert!(PhoneNumber::new(1_000_000_000).is_ok());
        assert!(PhoneNumber::new(9_999_999_999).is_ok());
        assert!(PhoneNumber::new(6_125_551_234).is_ok());
    }

    #[test]
    fn test_phone_out_of_range() {
        for bad in [0, 999_999_999, 10_000_000_000, u64::MAX] {
            let err = PhoneNumber::new(bad).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidField {
                    field: "phone_number",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_zip_bounds() {
        assert!(ZipCode::new(10_000).is_ok());
        assert!(ZipCode::new(99_999).is_ok());
        assert!(ZipCode::new(9_999).is_err());
        assert!(ZipCode::new(100_000).is_err());
        assert!(ZipCode::new(0).is_err());
    }

    #[test]
    fn test_record_display() {
        let record = ContactRecord::new(
            "Bob",
            PhoneNumber::new(6_125_551_234).unwrap(),
            ZipCode::new(55_414).unwrap(),
        );
        assert_eq!(
            record.to_string(),
            "Name: Bob, Phone Number: 6125551234, Zip Code: 55414"
        );
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let ok: PhoneNumber = serde_json::from_str("6125551234").unwrap();
        assert_eq!(ok.get(), 6_125_551_234);

        let bad: std::result::Result<ZipCode, _> = serde_json::from_str("123");
        assert!(bad.is_err());
    }

    #[test]
    fn test_record_serde_shape() {
        let record = ContactRecord::new(
            "Bob",
            PhoneNumber::new(6_125_551_234).unwrap(),
            ZipCode::new(55_414).unwrap(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Bob");
        assert_eq!(json["phone_number"], 6_125_551_234u64);
        assert_eq!(json["zip_code"], 55_414);
    }
}
