pub mod block;
pub mod error;
pub mod passes;
pub mod pattern;
pub mod script;

pub use error::SpliceError;
pub use script::{cli_tool_path, install_script_path};
pub use script::{rewrite_cli_tool, rewrite_installer, rewrite_loader};
