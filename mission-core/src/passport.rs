use serde::{Deserialize, Serialize};

/// The signed-in identity the authentication endpoints hand back. Persisted
/// verbatim by the UI session layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Passport {
    pub token: String,
    pub id: i32,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Register {
    pub username: String,
    pub password: String,
    pub display_name: String,
}
