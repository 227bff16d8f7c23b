//! Desired secrets and variables.
//!
//! An empty `value` is a legal desired state and is sent as-is.

/// A secret to provision, holding its plaintext value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretDescriptor {
    pub name: String,
    pub value: String,
}

impl SecretDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for SecretDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretDescriptor")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// A plain Actions variable to provision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDescriptor {
    pub name: String,
    pub value: String,
}

impl VariableDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
