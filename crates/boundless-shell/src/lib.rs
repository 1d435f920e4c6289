//! Line-oriented query shell for boundless positions.

pub mod command;
pub mod error;
pub mod shell;

pub use command::{Command, ShellOption, VariantSpec};
pub use error::ShellError;
pub use shell::{Shell, ShellConfig};
