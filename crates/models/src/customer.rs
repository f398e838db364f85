use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: String, name: &str, email: &str) -> Self {
        Self { id, name: name.to_string(), email: email.to_string() }
    }
}
