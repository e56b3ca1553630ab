//! Public contact card.

use serde::{Deserialize, Serialize};

/// Contact details shown on the contact page.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Phone number, digits only.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// `LinkedIn` profile URL.
    pub linkedin: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "7007752950".to_string(),
            email: "jalaj.ka.sharma@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/jalaj-sharma-5b1734211/".to_string(),
        }
    }
}

impl ContactInfo {
    /// `mailto:` link for the email card.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the phone card.
    #[must_use]
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}
