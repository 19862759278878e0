use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Check if the user matches a free text query, ignoring case.
    ///
    /// An empty query matches all users.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            Some(self.username.as_str()),
            Some(self.email.as_str()),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// The fields entered to create a new user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl NewUser {
    /// Build from form input, trimming all fields. Username and email are required.
    pub fn from_input(
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, String> {
        fn optional(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        let username = optional(username).ok_or("Username is required")?;
        let email = optional(email).ok_or("Email is required")?;
        if !email.contains('@') {
            return Err(format!("Invalid email address: {email}"));
        }

        Ok(Self {
            username,
            email,
            first_name: optional(first_name),
            last_name: optional(last_name),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    /// Keyword search on name and description, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&query))
                .unwrap_or_default()
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

pub fn format_timestamp(timestamp: &Option<NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
