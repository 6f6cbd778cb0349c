use crate::driver::SchemaReport;
use crate::model::{BoundProperty, ModelSchema, Severity, StateManagement};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SchemaReport) -> anyhow::Result<()>;
}

pub fn create_writer<'w>(format: OutputFormat, writer: Box<dyn Write + 'w>) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SchemaReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_schema(&mut self, schema: &ModelSchema) -> anyhow::Result<()> {
        match schema {
            ModelSchema::Value { type_name } => {
                writeln!(self.writer, "{} {}", type_name.to_string().bold(), "(value)".dimmed())?;
            }
            ModelSchema::Unknown { type_name } => {
                writeln!(self.writer, "{} {}", type_name.to_string().bold(), "(unknown)".yellow())?;
            }
            ModelSchema::Struct(schema) => {
                writeln!(
                    self.writer,
                    "{} {}",
                    schema.type_name.to_string().bold().blue(),
                    "(struct)".dimmed()
                )?;
                for property in &schema.properties {
                    self.write_property(property)?;
                }
                for aspect in &schema.aspects {
                    writeln!(self.writer, "  aspect {}", aspect.name)?;
                }
            }
        }
        Ok(())
    }

    fn write_property(&mut self, property: &BoundProperty) -> anyhow::Result<()> {
        let access = if property.is_writable() { "rw" } else { "r" };
        let state = match property.state {
            StateManagement::Managed => "managed",
            StateManagement::Unmanaged => "unmanaged",
        };
        let mut flags = vec![access, state];
        if property.is_opaque {
            flags.push("opaque");
        }
        writeln!(
            self.writer,
            "  {}: {} [{}]",
            property.name.green(),
            property.value_type,
            flags.join(", ")
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SchemaReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "Schema for".bold(),
            report.root.to_string().bold().blue()
        )?;
        writeln!(self.writer)?;
        for schema in report.schemas.values() {
            self.write_schema(schema)?;
        }

        writeln!(self.writer)?;
        if report.diagnostics.is_empty() {
            writeln!(self.writer, "{}", "No diagnostics".green())?;
            return Ok(());
        }

        writeln!(self.writer, "{} ({}):", "Diagnostics".bold(), report.diagnostics.len())?;
        for event in &report.diagnostics {
            let severity = match event.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            writeln!(
                self.writer,
                "  {}[{}] {}: {}",
                severity, event.kind, event.subject, event.message
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DiagnosticEvent, DiagnosticKind, StructSchema, TypeName};
    use std::collections::BTreeMap;

    fn report() -> SchemaReport {
        let root = TypeName::from("Person");
        let mut schemas = BTreeMap::new();
        schemas.insert(
            root.clone(),
            ModelSchema::Struct(StructSchema {
                type_name: root.clone(),
                properties: Vec::new(),
                aspects: Vec::new(),
            }),
        );
        SchemaReport {
            root: root.clone(),
            schemas,
            diagnostics: vec![DiagnosticEvent::error(
                DiagnosticKind::IncompleteCoverage,
                root,
                "stray method",
            )],
        }
    }

    #[test]
    fn test_json_writer_emits_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["root"], "Person");
        assert_eq!(value["schemas"]["Person"]["schema"], "struct");
        assert_eq!(value["diagnostics"][0]["kind"], "incomplete-coverage");
    }

    #[test]
    fn test_terminal_writer_lists_diagnostics() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&report()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Schema for Person"));
        assert!(text.contains("error[incomplete-coverage] Person: stray method"));
    }
}
