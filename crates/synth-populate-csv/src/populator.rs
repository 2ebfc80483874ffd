//! CSV populator: the generation run loop.

use crate::args::PopulateArgs;
use crate::error::CsvPopulatorError;
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use synth_core::Schema;
use synth_generator::{GenerationContext, RowAssembler};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes (0 when not writing to a file).
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated rows as CSV.
pub struct CsvPopulator {
    assembler: RowAssembler,
}

impl CsvPopulator {
    /// Create a new CSV populator.
    ///
    /// # Arguments
    ///
    /// * `schema` - Column configurations
    /// * `columns` - Output columns in order (also the header)
    /// * `ctx` - RNG, locale source and uniqueness stores for this run
    pub fn new(
        schema: Schema,
        columns: Vec<String>,
        ctx: GenerationContext,
    ) -> Result<Self, CsvPopulatorError> {
        let assembler = RowAssembler::new(schema, columns, ctx)?;
        Ok(Self { assembler })
    }

    /// Load the schema and set up generation as described by `args`.
    pub fn from_args(args: &PopulateArgs) -> Result<Self, CsvPopulatorError> {
        let schema = Schema::from_file(&args.schema)?;
        let columns = args.output_columns(&schema);
        info!(
            "Loaded schema '{}' with {} columns",
            args.schema.display(),
            schema.len()
        );
        Self::new(schema, columns, args.generation_context())
    }

    /// Output columns in order.
    pub fn columns(&self) -> &[String] {
        self.assembler.columns()
    }

    /// Write the header and `count` rows to `output`.
    ///
    /// Stops at the first generation or write error; rows already written
    /// stay in `output`, the failing row is never written.
    pub fn populate<W: Write>(
        &mut self,
        output: W,
        count: u64,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!(
            "Generating {} rows with columns {:?}",
            count,
            self.assembler.columns()
        );

        let mut writer = Writer::from_writer(output);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        let write_start = Instant::now();
        writer.write_record(self.assembler.columns())?;
        write_time += write_start.elapsed();

        for _ in 0..count {
            let gen_start = Instant::now();
            let row = self.assembler.next_row()?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(&row)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        let write_start = Instant::now();
        writer.flush()?;
        write_time += write_start.elapsed();

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV generation complete: {} rows in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write the header and `count` rows to a new file at `output_path`.
    pub fn populate_file<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let output_path = output_path.as_ref();
        info!("Writing CSV file '{}'", output_path.display());

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut metrics = self.populate(buf_writer, count)?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        Ok(metrics)
    }
}
