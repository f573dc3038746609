use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(&serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => table_for_rows(items, options),
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect();
            table::render(&["field".into(), "value".into()], &rows, options)
        }
        scalar => cell(scalar),
    }
}

fn table_for_rows(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![cell(item)]).collect();
        return table::render(&["value".into()], &rows, options);
    }

    // Columns are the union of keys across the rows.
    let mut headers: Vec<String> = Vec::new();
    for item in items.iter().filter_map(Value::as_object) {
        for key in item.keys() {
            if !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect();

    table::render(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        status: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(
            &Example {
                id: 3,
                status: "CONFIRMED",
            },
            OutputFormat::Json,
        )
        .expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 3);
        assert_eq!(parsed["status"], "CONFIRMED");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(
            &Example {
                id: 3,
                status: "CONFIRMED",
            },
            OutputFormat::Raw,
        )
        .expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_field_value_table() {
        let out = render(
            &Example {
                id: 3,
                status: "CONFIRMED",
            },
            OutputFormat::Table,
        )
        .expect("table render should work");
        assert!(out.contains("field"));
        assert!(out.contains("status"));
        assert!(out.contains("CONFIRMED"));
    }

    #[test]
    fn array_table_renders_all_columns() {
        let rows = vec![
            Example {
                id: 1,
                status: "PENDING",
            },
            Example {
                id: 2,
                status: "PAID",
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("table should have a header");
        let id_at = header.find("id").expect("id column");
        let status_at = header.find("status").expect("status column");
        assert!(id_at < status_at);
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let empty: Vec<Example> = Vec::new();
        let out = render(&empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
