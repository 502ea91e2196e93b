//! Command implementations for pin-cli

pub mod add;
pub mod env;
pub mod exec;
pub mod list;
pub mod resolve;
pub mod update;

pub use add::run_add;
pub use env::run_env;
pub use exec::run_exec;
pub use list::run_list;
pub use resolve::run_resolve;
pub use update::run_update;
