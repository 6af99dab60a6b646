use crate::error::InspectError;
use crate::metadata::SchemaSource;
use crate::output::{self, RowNote};
use crate::rows::RowSource;
use std::io::Write;
use std::path::Path;

/// Prints the schema and the first rows of one file.
///
/// A schema that cannot be read is only reported inside the schema block.
/// Any failure while reading or printing rows ends the inspection.
pub struct Inspector<'a, S, R> {
    path: &'a Path,
    schema_source: S,
    row_source: R,
}

impl<'a, S: SchemaSource, R: RowSource> Inspector<'a, S, R> {
    pub fn new(path: &'a Path, schema_source: S, row_source: R) -> Self {
        Self {
            path,
            schema_source,
            row_source,
        }
    }

    pub fn inspect<W: Write>(&self, out: &mut W, num_rows: usize) -> Result<(), InspectError> {
        self.print_schema(out)?;
        writeln!(out)?;
        self.print_rows(out, num_rows)?;
        out.flush()?;
        Ok(())
    }

    fn print_schema<W: Write>(&self, out: &mut W) -> Result<(), InspectError> {
        output::write_block_header(
            out,
            &format!("Schema for {} (via arrow):", self.path.display()),
        )?;

        match self.schema_source.schema() {
            Ok(schema) => writeln!(out, "{}", output::format_schema(&schema))?,
            Err(e) => {
                log::warn!("Schema unavailable for {}: {:#}", self.path.display(), e);
                writeln!(out, "Could not read schema using arrow: {:#}", e)?;
                writeln!(out, "Will proceed to try reading data with Polars.")?;
            }
        }

        output::write_block_footer(out)?;
        Ok(())
    }

    fn print_rows<W: Write>(&self, out: &mut W, num_rows: usize) -> Result<(), InspectError> {
        output::write_block_header(
            out,
            &format!(
                "First {} rows from {} (via Polars):",
                num_rows,
                self.path.display()
            ),
        )?;

        let df = self.row_source.head(num_rows)?;
        writeln!(out, "{}", df)?;

        if df.height() == 0 {
            let note = self.empty_batch_note(num_rows);
            writeln!(out)?;
            writeln!(out, "{}", note)?;
        }

        output::write_block_footer(out)?;
        Ok(())
    }

    /// Decides what to say about a batch without rows. The footer is only
    /// consulted when rows were actually asked for.
    pub fn empty_batch_note(&self, num_rows: usize) -> RowNote {
        if num_rows == 0 {
            return RowNote::RowsRead(0);
        }
        match self.schema_source.total_rows() {
            Ok(0) => RowNote::EmptyFile,
            Ok(total) => {
                log::info!(
                    "{} reports {} rows but none were read",
                    self.path.display(),
                    total
                );
                RowNote::RowsRead(0)
            }
            Err(e) => {
                log::debug!("Could not read total rows: {:#}", e);
                RowNote::MetadataUnavailable
            }
        }
    }
}
