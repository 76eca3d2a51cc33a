// Client module

use serde::{Deserialize, Serialize};

/// A client of the business, as picked by the search dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl Client {
    pub fn new(id: u32, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Client name cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = Client::new(1, "nadia anachad", "0612345678");
        assert!(client.validate().is_ok());
        assert!(client.email.is_none());
    }

    #[test]
    fn test_validate_empty_name() {
        let client = Client::new(1, "", "0612345678");
        assert!(client.validate().is_err());
    }
}
