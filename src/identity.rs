//! Caller identity seam.
//!
//! The host environment authenticates callers; this crate only consumes
//! the resulting principal, stamping it as `owner` on Doctor and Patient
//! records and using it for owner-scoped reads.

use serde::{Deserialize, Serialize};

/// Identity of the invoking principal, supplied by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves the invoking principal for the current call.
pub trait IdentityAccessor: Send + Sync {
    fn caller(&self) -> Principal;
}

/// Fixed identity, for embeddings where the host resolves the caller once
/// per session, and for tests.
pub struct StaticIdentity(Principal);

impl StaticIdentity {
    pub fn new(principal: Principal) -> Self {
        Self(principal)
    }
}

impl IdentityAccessor for StaticIdentity {
    fn caller(&self) -> Principal {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_displays_its_id() {
        let p = Principal::new("caller-1");
        assert_eq!(p.to_string(), "caller-1");
        assert_eq!(p.as_str(), "caller-1");
    }

    #[test]
    fn static_identity_returns_fixed_principal() {
        let identity = StaticIdentity::new(Principal::new("caller-1"));
        assert_eq!(identity.caller(), Principal::new("caller-1"));
    }

    #[test]
    fn principal_serializes_transparently() {
        let json = serde_json::to_string(&Principal::new("caller-1")).unwrap();
        assert_eq!(json, "\"caller-1\"");
    }
}
