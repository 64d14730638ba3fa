// Composition root for the Pokédex service.
//
// Responsibilities:
// - Read config from environment.
// - Install logging.
// - Wire the snapshot store into the Pokédex and expose it over HTTP.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;
