//! CLI command handlers. Each command is in its own file for clarity.

mod emit;
mod local;
mod probe;
mod verify;

pub use emit::run_emit;
pub use local::run_local;
pub use probe::run_probe;
pub use verify::run_verify;
