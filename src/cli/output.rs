//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::container::ContainerLayout;
use crate::crypto::{PBKDF2_ITERATIONS, TAG_LEN};
use crate::stack::InstanceSummary;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of stack instances (Service, Instance).
pub fn print_instances_table(instances: &[InstanceSummary]) {
    if instances.is_empty() {
        info("The configuration has no service instances.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Service", "Instance"]);

    for (i, inst) in instances.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            inst.app_id.clone(),
            inst.instance_name.clone(),
        ]);
    }

    eprintln!("{table}");
}

/// Print the sections of a container (no secrets involved).
pub fn print_layout(layout: &ContainerLayout, encoded_len: usize) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![
        "Cipher".to_string(),
        format!("AES-256-GCM, PBKDF2-HMAC-SHA256 ({PBKDF2_ITERATIONS} rounds)"),
    ]);
    table.add_row(vec!["Encoded size".to_string(), format!("{encoded_len} chars")]);
    table.add_row(vec!["Salt".to_string(), hex(&layout.salt)]);
    table.add_row(vec!["Nonce".to_string(), hex(&layout.nonce)]);
    table.add_row(vec![
        "Ciphertext".to_string(),
        format!(
            "{} bytes (payload {} + tag {TAG_LEN})",
            layout.sealed.len(),
            layout.sealed.len().saturating_sub(TAG_LEN)
        ),
    ]);

    println!("{table}");
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
