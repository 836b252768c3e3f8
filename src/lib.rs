//! Recommendation core and service plumbing for the accessibility
//! self-assessment wizard. The engine in [`recommendation`] is a pure
//! function over the static [`catalog`] data; everything else here is the
//! thin HTTP/CLI surface and configuration it is served through.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod server;
pub mod session;
pub mod telemetry;
