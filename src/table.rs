//! Plain column-aligned tables and value dumps.

use std::io::{self, Write};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const GAP: usize = 3;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn write_to(&self, w: &mut dyn Write) -> io::Result<()> {
        let cols = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(cols) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let render = |cells: &[String]| -> String {
            let mut line = String::new();
            for (i, width) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                if i + 1 < cols {
                    let pad = width - cell.chars().count() + GAP;
                    line.push_str(&" ".repeat(pad));
                }
            }
            line.trim_end().to_string()
        };

        writeln!(w, "{}", render(&self.headers))?;
        for row in &self.rows {
            writeln!(w, "{}", render(row))?;
        }
        Ok(())
    }
}

/// Render a controller timestamp as `YYYY-MM-DDTHH:MM:SSZ`, or pass it through.
pub fn format_time(s: &str) -> String {
    let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) else {
        return s.to_string();
    };
    let ts = ts.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        ts.year(),
        u8::from(ts.month()),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    )
}

/// Indented `key: value` dump of a JSON document.
pub fn write_value(w: &mut dyn Write, value: &serde_json::Value, indent: usize) -> io::Result<()> {
    let pad = " ".repeat(indent);
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                if is_scalar(v) {
                    writeln!(w, "{}{}: {}", pad, k, scalar(v))?;
                } else {
                    writeln!(w, "{}{}:", pad, k)?;
                    write_value(w, v, indent + 2)?;
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                if is_scalar(item) {
                    writeln!(w, "{}- {}", pad, scalar(item))?;
                } else {
                    writeln!(w, "{}-", pad)?;
                    write_value(w, item, indent + 2)?;
                }
            }
        }
        other => writeln!(w, "{}{}", pad, scalar(other))?,
    }
    Ok(())
}

fn is_scalar(v: &serde_json::Value) -> bool {
    !matches!(v, serde_json::Value::Object(_) | serde_json::Value::Array(_))
}

fn scalar(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
