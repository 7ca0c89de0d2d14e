use std::fmt;
use subtle::ConstantTimeEq;

/// Shared secret guarding the admin endpoints.
///
/// An unconfigured key denies every request rather than allowing them.
#[derive(Clone, Default)]
pub struct AdminKey(Option<String>);

impl AdminKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()))
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    pub fn verify(&self, provided: &str) -> bool {
        let Some(expected) = self.0.as_deref() else {
            return false;
        };

        let provided = provided.trim();
        if provided.is_empty() {
            return false;
        }

        expected.as_bytes().ct_eq(provided.as_bytes()).into()
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminKey")
            .field(&self.0.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
