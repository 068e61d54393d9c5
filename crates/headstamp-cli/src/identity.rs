//! Resolution of the acting user's identity.

use crate::config::IdentityConfig;
use headstamp_domain::Identity;

/// Login used when nothing else names the user.
pub const FALLBACK_USER: &str = "unknown";

/// Resolve the identity from flags, config and the process environment.
pub fn resolve(user: Option<&str>, email: Option<&str>, config: &IdentityConfig) -> Identity {
    resolve_with(user, email, config, |key| std::env::var(key).ok())
}

/// Resolve the identity with an explicit environment lookup.
///
/// User: flag, then config, then `$USER`, then `$USERNAME`.
/// Email: flag, then config, then `user@email_domain`.
pub fn resolve_with(
    user: Option<&str>,
    email: Option<&str>,
    config: &IdentityConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Identity {
    let user = user
        .map(str::to_string)
        .or_else(|| config.user.clone())
        .or_else(|| env("USER"))
        .or_else(|| env("USERNAME"))
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_USER.to_string());

    match email.map(str::to_string).or_else(|| config.email.clone()) {
        Some(email) => Identity::new(user, email),
        None => Identity::with_domain(user, &config.email_domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flag_wins() {
        let config = IdentityConfig {
            user: Some("config-user".into()),
            ..IdentityConfig::default()
        };
        let identity = resolve_with(Some("flag-user"), None, &config, |_| Some("env-user".into()));
        assert_eq!(identity.user, "flag-user");
        assert_eq!(identity.email, "flag-user@localhost");
    }

    #[test]
    fn test_config_before_env() {
        let config = IdentityConfig {
            user: Some("config-user".into()),
            email: Some("c@example.com".into()),
            ..IdentityConfig::default()
        };
        let identity = resolve_with(None, None, &config, |_| Some("env-user".into()));
        assert_eq!(identity, Identity::new("config-user", "c@example.com"));
    }

    #[test]
    fn test_env_user_then_username() {
        let config = IdentityConfig::default();
        let identity = resolve_with(None, None, &config, |key| {
            (key == "USERNAME").then(|| "win-user".to_string())
        });
        assert_eq!(identity.user, "win-user");
    }

    #[test]
    fn test_fallback() {
        let config = IdentityConfig {
            email_domain: "example.org".into(),
            ..IdentityConfig::default()
        };
        let identity = resolve_with(None, None, &config, no_env);
        assert_eq!(identity, Identity::new("unknown", "unknown@example.org"));
    }

    #[test]
    fn test_email_flag() {
        let identity = resolve_with(Some("bob"), Some("b@x.io"), &IdentityConfig::default(), no_env);
        assert_eq!(identity.author(), "bob <b@x.io>");
    }
}
