//! Domain Layer
//!
//! Pure deploy logic without process or file-system access.
//!
//! ## Structure
//!
//! - `entities/` - Run results (DeploySummary)
//! - `value_objects/` - Immutable value types (Environment, Stage, OutputFormat)
//! - `services/` - Workspace selection and output validation
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
