//! Domain Entities

mod deploy_summary;

pub use deploy_summary::DeploySummary;
