use serde::{Deserialize, Serialize};

/// The profile document stored at `users/{userId}`. Created separately from
/// the auth credential, so it can legitimately be missing.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

/// What the auth service hands back on sign-up and sign-in.
#[derive(Debug, Deserialize, Clone)]
pub struct Credential {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub token: String,
}

/// The signed-in user: credential and profile merged.
#[derive(Debug, Serialize, Clone)]
pub struct Account {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub email: String,
}
