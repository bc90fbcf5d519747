use log::{info, warn};
use serde_json::{Map, Value};

use crate::entity::EntityType;

/// Rows of scalar JSON values sharing one ordered set of columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Columns are the union of the records' keys, in first-seen order.
    /// A record missing a column gets `null` in that cell.
    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// True when either axis is empty: no rows, or rows with no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Sets `target` to the `id` of the object found in `source`, replacing
    /// an existing `target` column or appending a new one.
    /// Rows whose `source` is null or has no id get `null`.
    pub fn derive_id_column(&mut self, source: &str, target: &str) {
        let idx = self.column_index(source);
        let target_idx = self.column_index(target);
        if target_idx.is_none() {
            self.columns.push(target.to_string());
        }
        for row in &mut self.rows {
            let id = idx
                .and_then(|i| row[i].get("id"))
                .map(normalize_id)
                .unwrap_or(Value::Null);
            match target_idx {
                Some(t) => row[t] = id,
                None => row.push(id),
            }
        }
    }

    pub fn drop_columns(&mut self, names: &[&str]) {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.contains(&c.as_str()))
            .collect();

        let mut flags = keep.iter();
        self.columns.retain(|_| *flags.next().unwrap_or(&true));
        for row in &mut self.rows {
            let mut flags = keep.iter();
            row.retain(|_| *flags.next().unwrap_or(&true));
        }
    }
}

/// Whole-number ids come back as integers, even if the API sent `12.0`.
fn normalize_id(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => value.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Value::from(f as i64),
            _ => value.clone(),
        },
        other => other.clone(),
    }
}

/// Turns the raw response for `entity` into a table. `None` or an empty
/// payload gives an empty table, never an error.
pub fn flatten(entity: EntityType, raw: Option<&Value>) -> Table {
    let raw = match raw {
        Some(v) if !crate::fetch::is_empty_payload(v) => v,
        _ => {
            info!("No {} data to flatten", entity);
            return Table::default();
        }
    };

    let items = match entity {
        EntityType::Contracts => raw.get("items"),
        EntityType::Departments | EntityType::Employees => raw.pointer("/data/items"),
    };

    let records = collect_records(entity, items);
    let mut table = Table::from_records(&records);
    if table.is_empty() {
        info!("No {} rows with fields to flatten", entity);
        return table;
    }

    if entity == EntityType::Employees {
        table.derive_id_column("department", "department_id");
        table.derive_id_column("manager", "manager_id");
        table.drop_columns(&["department", "manager"]);
    }

    info!("Flattened {} {} rows into {} columns", table.len(), entity, table.columns.len());
    table
}

fn collect_records(entity: EntityType, items: Option<&Value>) -> Vec<Map<String, Value>> {
    let items = match items {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => {
            warn!("Response for {} has no items", entity);
            return Vec::new();
        }
        Some(other) => {
            warn!("Items for {} is not an array: {}", entity, other);
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map.clone()),
            other => {
                warn!("Skipping non-object {} item: {}", entity, other);
                None
            }
        })
        .collect()
}

/// CSV text for one cell. Null is an empty cell; nested values become compact JSON.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        nested => nested.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
