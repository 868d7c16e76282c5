//! Host environment detection.
//!
//! Captures the program-files root, temp directory and machine name once
//! at startup. Nothing here writes to the environment.

pub mod host;

pub use host::HostEnvironment;
