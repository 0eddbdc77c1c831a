//! CLI command implementations

pub mod call;
pub mod tools;
pub mod verify;

pub use call::call_command;
pub use tools::tools_command;
pub use verify::verify_command;
