use std::fmt;

use serde::{Deserialize, Serialize};

/// A single row of the phone book table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

// Listing format shared by flag mode and interactive mode.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_name_then_phone() {
        let contact = Contact::new("Vasily Pupkin", "+79643776772");

        assert_eq!(contact.to_string(), "Vasily Pupkin +79643776772");
    }

    #[test]
    fn serializes_as_plain_object() {
        let contact = Contact::new("Billy Kitty", "+777667");
        let json = serde_json::to_string(&contact).unwrap();

        assert_eq!(json, r#"{"name":"Billy Kitty","phone":"+777667"}"#);
    }
}
