use std::{fmt, str::FromStr};

use serde_json::{Value, json};

/// How the final value is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// 2-space indented JSON
    #[default]
    Json,
    /// Flattened `key:value` lines for LLM consumers
    Compact,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputMode::Json),
            "compact" | "llm" => Ok(OutputMode::Compact),
            other => Err(format!(
                "unknown format {:?}: use \"json\", \"compact\", or \"llm\"",
                other
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Json => write!(f, "json"),
            OutputMode::Compact => write!(f, "compact"),
        }
    }
}

/// Renders a successful result. Every line ends with a newline.
pub fn render(value: &Value, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format!("{:#}\n", value),
        OutputMode::Compact => to_compact(value),
    }
}

/// Renders a top-level failure for the error stream.
pub fn render_error(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format!("{:#}\n", json!({ "error": { "message": message } })),
        OutputMode::Compact => format!("error:{}\n", message),
    }
}

/// Flattens a value into `key:value` lines.
///
/// Objects give one line per top-level key. Arrays render each object
/// element as its key lines followed by `---`, and each scalar element as a
/// bare value line. Anything else falls back to compact JSON.
pub fn to_compact(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) => push_object(&mut out, map),
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(map) => {
                        push_object(&mut out, map);
                        out.push_str("---\n");
                    }
                    other => {
                        out.push_str(&format_scalar(other));
                        out.push('\n');
                    }
                }
            }
        }
        other => {
            out.push_str(&other.to_string());
            out.push('\n');
        }
    }
    out
}

fn push_object(out: &mut String, map: &serde_json::Map<String, Value>) {
    for (key, value) in map {
        out.push_str(key);
        out.push(':');
        out.push_str(&format_scalar(value));
        out.push('\n');
    }
}

/// Compact rendering of one value.
///
/// Integral numbers lose their decimal point, other numbers get exactly four
/// decimals, null is empty, and structured values become inline JSON.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format_float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        structured => structured.to_string(),
    }
}

fn format_float(f: f64) -> String {
    const I64_RANGE: f64 = 9.223_372_036_854_775e18;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < I64_RANGE {
        (f as i64).to_string()
    } else {
        format!("{:.4}", f)
    }
}

#[test]
fn test_format_scalar() {
    assert_eq!(format_scalar(&json!(2.0)), "2");
    assert_eq!(format_scalar(&json!(1.75)), "1.7500");
    assert_eq!(format_scalar(&json!(true)), "true");
    assert_eq!(format_scalar(&Value::Null), "");
    assert_eq!(format_scalar(&json!([1, 2])), "[1,2]");
}
