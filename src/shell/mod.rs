// Composition root for the campus service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory store and wire it into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
