// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB adapters
// - presentation: HTTP handlers and routing
// - application: ports, use cases and the service error type

pub mod application;
pub mod bootstrap;
pub mod infrastructure;
pub mod presentation;
