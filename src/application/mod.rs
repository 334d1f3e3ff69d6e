//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Package, provision, read outputs, publish, summarize
//! - `OutputReader` - Query and validate one provisioning output

pub mod deploy;
pub mod outputs;

pub use deploy::{DeployOptions, DeployUseCase, DirGuard, DirStack, StackOutputs, API_URL_ENV_KEY};
pub use outputs::OutputReader;
