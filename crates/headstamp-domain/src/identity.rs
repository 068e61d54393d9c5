//! Identity of the acting user
//!
//! Resolution (flags, config, environment) belongs to the caller. The engine
//! only ever receives an [`Identity`] value.

/// The user stamping a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Short login, written to the created/updated "by" fields
    pub user: String,

    /// Contact address shown next to the author name
    pub email: String,
}

impl Identity {
    /// Create an identity from a user and contact address
    pub fn new(user: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            email: email.into(),
        }
    }

    /// Identity whose address is `user@domain`
    pub fn with_domain(user: impl Into<String>, domain: &str) -> Self {
        let user = user.into();
        let email = format!("{}@{}", user, domain);
        Self { user, email }
    }

    /// Author field value, `user <email>`
    pub fn author(&self) -> String {
        format!("{} <{}>", self.user, self.email)
    }
}
