//! Minimal structural validation of a decrypted stack configuration.
//!
//! This is a shape check, not a schema: the value must be an object
//! holding an `instances` array, and every instance must carry a
//! non-empty `app_id` and `instance_name`.  Everything else in the
//! document is passed through untouched.

use serde_json::Value;

use crate::errors::{Result, StackError};

/// Field holding the list of service instances.
pub const INSTANCES_FIELD: &str = "instances";

/// Service identifier of an instance (e.g. "postgres").
pub const APP_ID_FIELD: &str = "app_id";

/// User-chosen name of an instance.
pub const INSTANCE_NAME_FIELD: &str = "instance_name";

/// Check the shape of `value`, failing on the first violation.
pub fn validate(value: &Value) -> Result<()> {
    let Some(root) = value.as_object() else {
        return Err(invalid("<root>", "must be a JSON object".into()));
    };

    let Some(instances) = root.get(INSTANCES_FIELD).and_then(Value::as_array) else {
        return Err(invalid(INSTANCES_FIELD, "instances must be an array".into()));
    };

    for (index, instance) in instances.iter().enumerate() {
        let Some(entry) = instance.as_object() else {
            return Err(invalid(
                INSTANCES_FIELD,
                format!("instances[{index}] must be an object"),
            ));
        };

        for field in [APP_ID_FIELD, INSTANCE_NAME_FIELD] {
            if !is_non_empty_string(entry.get(field)) {
                return Err(invalid(
                    field,
                    format!("instances[{index}] is missing {field}"),
                ));
            }
        }
    }

    Ok(())
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

fn invalid(field: &str, message: String) -> StackError {
    StackError::ValidationError {
        field: field.to_string(),
        message,
    }
}
