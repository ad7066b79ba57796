// Module layout (Clean Architecture style)
// - bootstrap: configuration and application context
// - domain: learning types, tally and catalog
// - application: ports, use cases and DTOs
// - infrastructure: Postgres repositories and mail transport
// - presentation: HTTP handlers and routing

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;
