//! Domain types.

mod descriptor;
mod repository;
mod template;
mod token;
mod upsert;

pub use descriptor::{SecretDescriptor, VariableDescriptor};
pub use repository::{
    Environment, Owner, RepositoryPublicKey, RepositoryRecord, SecretEntry, Variable,
};
pub use template::{TemplateRef, TemplateSelector};
pub use token::TokenValidation;
pub use upsert::{ItemResult, ProvisionReport, UpsertOutcome};

pub(crate) use token::parse_scopes;
