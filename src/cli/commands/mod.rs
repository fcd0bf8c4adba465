//! One module per subcommand.

pub mod completions;
pub mod export;
pub mod import_cmd;
pub mod inspect;
pub mod validate;
