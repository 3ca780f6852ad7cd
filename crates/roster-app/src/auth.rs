//! Demo-account credential checks.
//!
//! The mock directory only knows one account. Any other pair is rejected
//! locally, before a request is even built — this is pure local validation
//! against a hardcoded pair, not real authentication.

/// The fixed demo account the mock directory accepts.
#[derive(Debug, Clone, Copy)]
pub struct DemoCredentials {
    /// Account email.
    pub email: &'static str,
    /// Login password.
    pub login_password: &'static str,
    /// Registration password.
    pub register_password: &'static str,
}

/// The designated test pair for the hosted mock.
pub const DEMO: DemoCredentials = DemoCredentials {
    email: "eve.holt@reqres.in",
    login_password: "cityslicka",
    register_password: "pistol",
};

impl DemoCredentials {
    /// Whether the pair matches the demo login credentials.
    pub fn matches_login(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.login_password
    }

    /// Whether the pair matches the demo registration credentials.
    pub fn matches_register(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.register_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_login_pair_matches() {
        assert!(DEMO.matches_login("eve.holt@reqres.in", "cityslicka"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        assert!(!DEMO.matches_login("eve.holt@reqres.in", "wrong"));
        assert!(!DEMO.matches_register("eve.holt@reqres.in", "cityslicka"));
    }

    #[test]
    fn test_wrong_email_rejected() {
        assert!(!DEMO.matches_login("mallory@reqres.in", "cityslicka"));
    }
}
