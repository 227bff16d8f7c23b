//! repokit - provision GitHub repositories with Actions secrets and variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # One workflow per command
//! │   ├── create        # Create (optionally from a template)
//! │   ├── delete        # Delete after confirmation
//! │   ├── list          # List repositories
//! │   ├── validate      # Token scope and organization checks
//! │   ├── secrets       # Provision secrets/variables on an existing repo
//! │   └── output        # Terminal output helpers
//! └── core/
//!     ├── config        # Environment-derived settings
//!     ├── crypto        # Sealed-box encryption of secret values
//!     ├── domain/       # Data model
//!     ├── github/       # REST client
//!     └── validation    # Name checks
//! ```

pub mod cli;
pub mod core;
pub mod error;
