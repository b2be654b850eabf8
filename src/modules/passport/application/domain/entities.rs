use chrono::{DateTime, Utc};

/// Profile gender. Serialized as the fixed strings `MAN` / `WOMAN` the
/// clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Man,
    Woman,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Man => "MAN",
            Gender::Woman => "WOMAN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MAN" => Some(Gender::Man),
            "WOMAN" => Some(Gender::Woman),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: i32,
    pub nick_name: String,
    pub mobile: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub signature: Option<String>,
    pub gender: Gender,
    pub is_admin: bool,
    pub last_login: DateTime<Utc>,
    pub create_time: DateTime<Utc>,
}

/// The key set carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUserData {
    pub id: i32,
    pub mobile: String,
    pub nick_name: String,
    pub is_admin: bool,
}

impl From<&UserProfile> for SessionUserData {
    fn from(user: &UserProfile) -> Self {
        Self {
            id: user.id,
            mobile: user.mobile.clone(),
            nick_name: user.nick_name.clone(),
            is_admin: user.is_admin,
        }
    }
}
