//! CLI module - argument parsing, the interactive session, and line processing

mod args;
pub mod batch;
pub mod render;
pub mod session;

pub use args::{Cli, Mode};
pub use batch::*;
pub use render::*;
pub use session::*;
