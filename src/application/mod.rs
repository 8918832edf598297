//! Application layer: business logic between HTTP handlers and the domain.

pub mod services;
