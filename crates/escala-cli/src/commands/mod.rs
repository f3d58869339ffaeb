//! CLI subcommand implementations.

pub mod archive;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod lock;
pub mod show;
pub mod unlock;
mod util;
pub mod volunteer;
pub mod withdraw;
