//! Support library for the spanwise CLI binary.
//!
//! Exposes the command pipeline and logging bootstrap so doctests and
//! integration tests can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
