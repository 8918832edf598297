//! Core domain types.
//!
//! The entire domain of this service is one immutable credential record.

pub mod credentials;

pub use credentials::CredentialRecord;
