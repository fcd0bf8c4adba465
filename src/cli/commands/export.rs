//! `iiotstack export`: seal a stack configuration into a `.iiotstack` file.

use crate::cli::output;
use crate::cli::{parse_json, prompt_new_password, read_input};
use crate::config::Settings;
use crate::errors::Result;
use crate::exchange::{self, FILE_EXTENSION};
use crate::stack;
use crate::transport::FsTransport;

/// Execute the `export` command.
pub fn execute(
    input: &str,
    output_dir: Option<&str>,
    name: Option<&str>,
    force: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let raw = read_input(input)?;
    let value = parse_json(input, &raw)?;

    // Refuse to produce a file that import would reject.
    stack::validate(&value)?;

    let transport = match output_dir {
        Some(dir) => FsTransport::new(dir),
        None => settings.transport(&cwd),
    };
    let mut transport = transport.with_overwrite(force || settings.overwrite);

    let file_name = match name {
        Some(n) => with_extension(n),
        None => settings.export_filename(chrono::Local::now().date_naive()),
    };

    let password = prompt_new_password()?;
    let stored = exchange::export_stack(&mut transport, &value, &password, Some(&file_name))?;

    let instances = stack::instances(&value);
    output::success(&format!(
        "Exported {} instances to {}",
        instances.len(),
        transport.dir().join(&stored).display()
    ));
    output::print_instances_table(&instances);
    output::tip("There is no way to recover the password. Store it somewhere safe.");

    Ok(())
}

/// Append `.iiotstack` unless the name already ends with it.
fn with_extension(name: &str) -> String {
    let suffix = format!(".{FILE_EXTENSION}");
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_extension_appends_once() {
        assert_eq!(with_extension("plant"), "plant.iiotstack");
        assert_eq!(with_extension("plant.iiotstack"), "plant.iiotstack");
        assert_eq!(with_extension("plant.json"), "plant.json.iiotstack");
    }
}
