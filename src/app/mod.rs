//! Binary-local application orchestration helpers.
//!
//! The main binary keeps wiring logic in `main.rs`, while this module hosts
//! command dispatch and output helpers to keep entrypoint code small.

pub(crate) mod commands;
pub(crate) mod entry;
pub(crate) mod init_flow;
pub(crate) mod oneshot;
pub(crate) mod repl_loop;
pub(crate) mod session;
pub(crate) mod startup;
