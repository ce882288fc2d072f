use serde::{Deserialize, Serialize};

/// The user reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned id.
    pub uid: String,
    /// Sign-in email, lower case.
    pub email: String,
    /// Whether the address was confirmed.
    pub email_verified: bool,
}

/// Part of an email address before `@`; the whole text if there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

impl AuthUser {
    /// Text before `@` in the email.
    pub fn local_part(&self) -> &str {
        email_local_part(&self.email)
    }

    /// Default handle derived from the email, e.g. `@marina`.
    pub fn default_handle(&self) -> String {
        format!("@{}", self.local_part())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_uses_local_part() {
        let user = AuthUser {
            uid: "u1".into(),
            email: "marina@bluesweep.my".into(),
            email_verified: false,
        };
        assert_eq!(user.local_part(), "marina");
        assert_eq!(user.default_handle(), "@marina");
    }

    #[test]
    fn email_without_at_is_its_own_local_part() {
        let user = AuthUser {
            uid: "u2".into(),
            email: "marina".into(),
            email_verified: false,
        };
        assert_eq!(user.local_part(), "marina");
    }
}
