//! Client directory backing the search dialog.

use crate::models::client::Client;

/// In-memory client list with the search used by the picker dialogs.
#[derive(Debug, Default, Clone)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    next_id: u32,
}

impl ClientDirectory {
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed clients shown on first launch.
    pub fn seed() -> Self {
        let clients = vec![
            Client::new(1, "nadia anachad", "0661234567"),
            Client::new(2, "Maria Garcia", "0662345678"),
            Client::new(3, "Fatima Zahra", "0663456789"),
            Client::new(4, "Laila Bennani", "0664567890"),
            Client::new(5, "Sara El Idrissi", "0665678901"),
        ];
        Self {
            next_id: clients.len() as u32 + 1,
            clients,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Case-insensitive substring search on name or phone.
    pub fn search(&self, query: &str) -> Vec<&Client> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.clients.iter().collect();
        }
        self.clients
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(&needle))
            .collect()
    }

    /// Add a client created through the new-client dialog.
    pub fn add(&mut self, name: impl Into<String>, phone: impl Into<String>, email: Option<String>) -> Result<&Client, String> {
        let mut client = Client::new(self.next_id, name, phone);
        client.email = email;
        client.validate()?;
        self.next_id += 1;
        self.clients.push(client);
        Ok(self.clients.last().expect("just pushed"))
    }
}
