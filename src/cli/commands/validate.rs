//! `iiotstack validate`: shape-check a plaintext stack configuration.

use crate::cli::{output, parse_json, read_input};
use crate::errors::Result;
use crate::stack;

/// Execute the `validate` command.
pub fn execute(input: &str) -> Result<()> {
    let raw = read_input(input)?;
    let value = parse_json(input, &raw)?;

    stack::validate(&value)?;

    let instances = stack::instances(&value);
    output::success(&format!(
        "{input} is a valid stack configuration ({} instances)",
        instances.len()
    ));
    output::print_instances_table(&instances);

    Ok(())
}
