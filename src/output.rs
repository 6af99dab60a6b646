use arrow::datatypes::Schema;
use std::fmt;
use std::io::{self, Write};

const RULE_WIDTH: usize = 30;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Opens a block: a rule, the title and another rule.
pub fn write_block_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule())
}

pub fn write_block_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", rule())
}

/// One `name: type` line per field, in declaration order.
pub fn format_schema(schema: &Schema) -> String {
    schema
        .fields()
        .iter()
        .map(|field| {
            let mut line = format!("{}: {}", field.name(), field.data_type());
            if !field.is_nullable() {
                line.push_str(" not null");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Explains a record batch that came back without rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowNote {
    /// The footer says the file holds no rows.
    EmptyFile,
    RowsRead(usize),
    /// The footer could not be read, so emptiness is unknown.
    MetadataUnavailable,
}

impl fmt::Display for RowNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowNote::EmptyFile => write!(f, "Note: The Parquet file appears to contain 0 rows."),
            RowNote::RowsRead(n) => write!(f, "Note: Read {} rows.", n),
            RowNote::MetadataUnavailable => write!(
                f,
                "Note: Read 0 rows (unable to check file metadata for total rows)."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field, TimeUnit};

    #[test]
    fn rule_is_thirty_dashes() {
        assert_eq!(rule(), "------------------------------");
    }

    #[test]
    fn block_header_wraps_title_in_rules() {
        let mut out = Vec::new();
        write_block_header(&mut out, "Schema for a.parquet (via arrow):").unwrap();
        write_block_footer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                rule().as_str(),
                "Schema for a.parquet (via arrow):",
                rule().as_str(),
                rule().as_str(),
            ]
        );
    }

    #[test]
    fn schema_lists_fields_in_order_with_nullability() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, true),
            Field::new(
                "seen_at",
                DataType::Timestamp(TimeUnit::Microsecond, None),
                true,
            ),
        ]);
        let text = format_schema(&schema);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id: Int64 not null");
        assert_eq!(lines[1], "name: Utf8");
        assert!(lines[2].starts_with("seen_at: Timestamp"));
    }

    #[test]
    fn empty_schema_renders_nothing() {
        assert_eq!(format_schema(&Schema::empty()), "");
    }

    #[test]
    fn notes_read_as_sentences() {
        assert_eq!(
            RowNote::EmptyFile.to_string(),
            "Note: The Parquet file appears to contain 0 rows."
        );
        assert_eq!(RowNote::RowsRead(0).to_string(), "Note: Read 0 rows.");
        assert!(RowNote::MetadataUnavailable
            .to_string()
            .contains("unable to check file metadata"));
    }
}
