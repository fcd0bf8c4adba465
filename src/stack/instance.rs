//! Lightweight view of the instances in a stack configuration.

use serde_json::Value;

use super::validate::{APP_ID_FIELD, INSTANCES_FIELD, INSTANCE_NAME_FIELD};

/// One row of the instance table shown after export or import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSummary {
    pub app_id: String,
    pub instance_name: String,
}

/// Collect `app_id` / `instance_name` pairs from a stack value.
///
/// Entries lacking either field are skipped; run `validate` first when
/// completeness matters.
pub fn instances(value: &Value) -> Vec<InstanceSummary> {
    value
        .get(INSTANCES_FIELD)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    Some(InstanceSummary {
                        app_id: entry.get(APP_ID_FIELD)?.as_str()?.to_string(),
                        instance_name: entry.get(INSTANCE_NAME_FIELD)?.as_str()?.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_instances_in_order() {
        let value = json!({"instances": [
            {"app_id": "postgres", "instance_name": "db"},
            {"app_id": "grafana", "instance_name": "dash"}
        ]});
        let rows = instances(&value);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].app_id, "postgres");
        assert_eq!(rows[1].instance_name, "dash");
    }

    #[test]
    fn skips_incomplete_entries() {
        let value = json!({"instances": [{"app_id": "x"}, {"app_id": "y", "instance_name": "z"}]});
        assert_eq!(
            instances(&value),
            vec![InstanceSummary {
                app_id: "y".into(),
                instance_name: "z".into()
            }]
        );
    }

    #[test]
    fn non_stack_value_has_no_instances() {
        assert!(instances(&json!(42)).is_empty());
    }
}
