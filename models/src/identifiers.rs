// models/src/identifiers.rs

use core::ops::Deref;
use std::{cmp::Ordering, fmt, str::FromStr};

use internment::Intern;

use crate::errors::{ValidationError, ValidationResult};

/// Vertex key within a graph, usually a district name.
///
/// Any non-empty string is accepted. The text is interned, so copies share
/// one allocation and equality is a pointer compare.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Identifier(pub Intern<String>);

impl Identifier {
    /// # Errors
    /// `ValidationError::EmptyIdentifier` when `value` is empty.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }

        Ok(Self(Intern::new(value)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.as_str().to_string()
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Identifier;
    use crate::errors::ValidationError;
    use core::str::FromStr;

    #[test]
    fn should_reject_empty_identifier() {
        assert_eq!(Identifier::new(String::new()).unwrap_err(), ValidationError::EmptyIdentifier);
    }

    #[test]
    fn should_accept_long_identifier() {
        let long = "D".repeat(256);
        let identifier = Identifier::new(long.clone()).unwrap();
        assert_eq!(identifier.as_str(), long);
        assert!(Identifier::new("x".repeat(10_000)).is_ok());
    }

    #[test]
    fn should_create_identifier() {
        let identifier = Identifier::new("Downtown".to_string());
        assert!(identifier.is_ok());
        assert_eq!(identifier.unwrap().as_str(), "Downtown");
    }

    #[test]
    fn should_convert_identifier_from_str() {
        let identifier = Identifier::from_str("A");
        assert!(identifier.is_ok());
        assert_eq!(&*identifier.unwrap(), "A");
    }

    #[test]
    fn should_intern_equal_identifiers() {
        let a = Identifier::from_str("Harbor").unwrap();
        let b = Identifier::from_str("Harbor").unwrap();
        assert_eq!(a, b);
        assert!(a < Identifier::from_str("Hill").unwrap());
    }
}
