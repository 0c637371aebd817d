//! Typed configuration model for a tiling window manager.
//!
//! The runtime reads a [`Config`], which is validated and frozen into a
//! [`Snapshot`]. A [`Session`] owns the snapshot across restarts and runs the
//! startup hook on first start.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod action;
pub mod config;
pub mod errors;
pub mod models;
mod session;
mod snapshot;
pub mod utils;
pub mod validate;

pub use action::{Action, MouseAction};
pub use config::Config;
pub use session::Session;
pub use snapshot::Snapshot;
pub use utils::child_process::{ScriptRunner, StartupHook};
pub use utils::modmask_lookup::{Button, ModMask};
