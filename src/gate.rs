use std::env;

/// Optional static password guarding navigation past the landing page.
///
/// Not a security boundary: the secret ships to every client anyway. It
/// exists so the site can be shared ahead of the celebration without the
/// surprise leaking through a guessed URL.
#[derive(Clone, Default)]
pub struct Gate {
    secret: Option<String>,
}

impl Gate {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Reads `SITE_PASSWORD`; unset or empty means the gate is open.
    pub fn from_env() -> Self {
        Self::new(env::var("SITE_PASSWORD").ok())
    }

    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    pub fn permits(&self, attempt: &str) -> bool {
        match &self.secret {
            None => true,
            Some(secret) => secret == attempt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_gate_permits_anything() {
        let gate = Gate::new(None);
        assert!(!gate.is_enabled());
        assert!(gate.permits(""));
        assert!(gate.permits("whatever"));

        // empty configured secret counts as no gate
        assert!(!Gate::new(Some(String::new())).is_enabled());
    }

    #[test]
    fn configured_gate_requires_equality() {
        let gate = Gate::new(Some("pearl".into()));
        assert!(gate.is_enabled());
        assert!(gate.permits("pearl"));
        assert!(!gate.permits("Pearl"));
        assert!(!gate.permits(""));
    }
}
