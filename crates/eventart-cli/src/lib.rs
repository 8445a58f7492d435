//! EventArt CLI library.
//!
//! Configuration loading, the file-backed seed store, and the command
//! implementations behind the `eventart` binary.

pub mod commands;
pub mod source;
pub mod store;
