use serde::{Deserialize, Serialize};

/// One row of the credential file.
///
/// The password is kept in plaintext. This is insecure and is kept only
/// because the file format is shared with existing deployments.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credential {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

impl Credential {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
