//! Squallywood CLI library.
//!
//! Output formatting and user-facing error messages shared by the
//! `squallywood` binary's subcommands.

pub mod messages;
pub mod output;
