use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Path value addressing the user who authorized the API consumer.
pub const ME: &str = "me";

#[derive(Debug, Deserialize, Eq, PartialEq, Hash, Clone)]
/// Id for a XING user.
pub struct UserId(pub String);

impl UserId {
    /// Id of the authorizing user.
    pub fn me() -> Self {
        Self(ME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize, Eq, PartialEq, Copy, Clone)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Deserialize, Eq, PartialEq, Clone)]
pub struct PhotoUrls {
    pub large: Option<String>,
    pub maxi_thumb: Option<String>,
    pub medium_thumb: Option<String>,
    pub thumb: Option<String>,
}

/// A XING user profile. Which fields are present depends on the privacy settings of the user and
/// on the `fields`/`user_fields` query parameters of the request.
#[derive(Debug, Deserialize, Eq, PartialEq, Clone)]
pub struct XingUser {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub page_name: Option<String>,
    pub permalink: Option<String>,
    pub gender: Option<Gender>,
    pub active_email: Option<String>,
    pub photo_urls: Option<PhotoUrls>,
}

#[derive(Debug, Deserialize, Eq, PartialEq, Clone)]
pub struct ProfileMessage {
    pub message: Option<String>,
    pub updated_at: Option<String>,
}
