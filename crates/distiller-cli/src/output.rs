//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use distiller_domain::record::{FINDING_KEY, PAGE_NUMBER_KEY};
use distiller_domain::{AuditRecord, FieldMap, FieldValue, Label};
use colored::*;
use serde_json::{Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest cell shown in table output
const MAX_CELL_CHARS: usize = 60;

/// One tagged entity, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    /// Page the entity is on
    pub page_number: u32,
    /// Label of the entity
    pub label: Label,
    /// Trimmed entity text
    pub text: String,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format audit records.
    pub fn format_records(&self, records: &[AuditRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| format!("{}\t{}", r.audit, r.page_number))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_records_table(&self, records: &[AuditRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No audit records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Audit", "Page", "Finding", "Fields", "Plan"]);

        for record in records {
            let fields: Vec<&str> = record
                .finding_data
                .keys()
                .filter(|k| *k != FINDING_KEY && *k != PAGE_NUMBER_KEY)
                .collect();
            builder.push_record([
                record.audit.to_string(),
                record.page_number.to_string(),
                truncate(record.finding().unwrap_or("-")),
                fields.join(", "),
                truncate(record.plan().unwrap_or("-")),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format tagged entities.
    pub fn format_entities(&self, rows: &[EntityRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = rows
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "page_number": row.page_number,
                            "label": row.label.as_str(),
                            "text": row.text,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No entities found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Page", "Label", "Text"]);
                for row in rows {
                    builder.push_record([
                        row.page_number.to_string(),
                        self.label(row.label),
                        truncate(&row.text),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|row| format!("{}\t{}", row.label, row.text))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format header sentences as `(page, sentence)` pairs.
    pub fn format_findings(&self, findings: &[(u32, String)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = findings
                    .iter()
                    .map(|(page, text)| serde_json::json!({ "page_number": page, "finding": text }))
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => {
                if findings.is_empty() {
                    return Ok(self.colorize("No findings headers found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Page", "Finding"]);
                for (page, text) in findings {
                    builder.push_record([page.to_string(), truncate(text)]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(findings
                .iter()
                .map(|(_, text)| text.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn label(&self, label: Label) -> String {
        let color = match label {
            Label::AuditNumber => "magenta",
            Label::Header => "green",
            Label::CorrectiveAction => "cyan",
            _ => "blue",
        };
        self.colorize(label.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON object for a record; field maps keep their key order
pub fn record_json(record: &AuditRecord) -> Value {
    let mut object = Map::new();
    object.insert("audit".to_string(), Value::from(record.audit.as_str()));
    object.insert("finding_data".to_string(), field_map_json(&record.finding_data));
    object.insert("cap_data".to_string(), field_map_json(&record.cap_data));
    object.insert("page_number".to_string(), Value::from(record.page_number));
    Value::Object(object)
}

fn field_map_json(map: &FieldMap) -> Value {
    let object: Map<String, Value> = map
        .iter()
        .map(|(key, value)| {
            let value = match value {
                FieldValue::Text(text) => Value::from(text.as_str()),
                FieldValue::Number(n) => Value::from(*n),
            };
            (key.to_string(), value)
        })
        .collect();
    Value::Object(object)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
    format!("{}…", cut)
}
