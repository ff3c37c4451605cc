// File: crates/pgf-core/src/figure.rs
// Summary: Figure builder assembling the delimited data file and the pgfplots document.

use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::axis::AxisOptions;
use crate::dataset::Dataset;
use crate::error::{FigureError, FigureResult};
use crate::markup::{self, PlotCommand, PlotMode};

/// Default output directory, relative to the current working directory.
pub const EXPORT_DIR: &str = "export";

const DEFAULT_CAPTION: &str = "What a great graph !";

/// Builder for one figure export: configure, then call [`Figure::export`].
///
/// Exporting writes two files under the output directory, sharing the export
/// name as base filename: `<name>.csv` (the series data, semicolon-delimited)
/// and `<name>.tex` (the markup referencing it by relative path).
pub struct Figure {
    data: Dataset,
    headers: Vec<String>,
    options: AxisOptions,
    name: String,
    output_dir: PathBuf,
    caption: String,
    label: String,
    legend: Option<Vec<String>>,
    plot_mode: PlotMode,
    code: Vec<String>,
}

impl Figure {
    /// Default axis options and the default `export/` output directory.
    pub fn new(data: Dataset, export_name: impl Into<String>) -> FigureResult<Self> {
        Self::with_output_dir(data, export_name, AxisOptions::new(), EXPORT_DIR)
    }

    /// Caller-merged axis options, default output directory.
    pub fn with_options(
        data: Dataset,
        export_name: impl Into<String>,
        options: AxisOptions,
    ) -> FigureResult<Self> {
        Self::with_output_dir(data, export_name, options, EXPORT_DIR)
    }

    /// Full form: explicit axis options and output directory. The directory
    /// is created if absent (idempotent). Fails with
    /// [`FigureError::InvalidData`] when `data` has fewer than 2 rows.
    pub fn with_output_dir(
        data: Dataset,
        export_name: impl Into<String>,
        options: AxisOptions,
        output_dir: impl Into<PathBuf>,
    ) -> FigureResult<Self> {
        validate(&data)?;
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        let name = export_name.into();
        let headers = data.headers();
        let label = format!("fig:{name}");
        Ok(Self {
            data,
            headers,
            options,
            name,
            output_dir,
            caption: DEFAULT_CAPTION.to_string(),
            label,
            legend: None,
            plot_mode: PlotMode::Line,
            code: vec![markup::FIGURE_OPEN.to_string()],
        })
    }

    /// Replace the dataset, re-validating the two-rows invariant.
    ///
    /// Known limitation, kept on purpose: header labels are derived once at
    /// construction and are not regenerated here. Replacing data with a
    /// different row count leaves the original labels in place.
    pub fn set_data(&mut self, data: Dataset) -> FigureResult<()> {
        validate(&data)?;
        self.data = data;
        Ok(())
    }

    /// Replace the export name. Both output filenames follow it at export
    /// time.
    pub fn set_export_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Discard prior overrides and re-merge `overrides` against the defaults.
    pub fn set_axis_options(&mut self, overrides: IndexMap<String, String>) {
        self.options = AxisOptions::with_overrides(overrides);
    }

    /// Insert or overwrite a single axis option.
    pub fn set_axis_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.set(key, value);
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Store `fig:<id>` as the cross-reference label.
    pub fn set_label(&mut self, id: &str) {
        self.label = format!("fig:{id}");
    }

    /// One entry per dependent series; the count is not validated.
    pub fn set_legend(&mut self, entries: Vec<String>) {
        self.legend = Some(entries);
    }

    /// Line (marks suppressed) or scatter (points only) styling for every
    /// emitted plot command.
    pub fn set_plot_mode(&mut self, mode: PlotMode) {
        self.plot_mode = mode;
    }

    /// Header labels frozen at construction.
    pub fn headers(&self) -> &[String] { &self.headers }

    pub fn axis_options(&self) -> &AxisOptions { &self.options }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(self.csv_filename())
    }

    pub fn tex_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.tex", self.name))
    }

    /// Write both artifacts: first the semicolon-delimited data file, then
    /// the markup document referencing it (UTF-8, no byte-order mark).
    /// Existing outputs are overwritten. The builder is single-use: the
    /// fragment buffer keeps accumulating, so a second call re-emits the
    /// grown buffer.
    pub fn export(&mut self) -> FigureResult<()> {
        self.write_csv()?;
        self.code.push(markup::axis_open(&self.options));
        self.add_all_plots();
        if let Some(entries) = &self.legend {
            self.code.push(markup::legend_line(entries));
        }
        self.code.push(markup::AXIS_CLOSE.to_string());
        self.code.push(markup::figure_close(&self.caption, &self.label));
        fs::write(self.tex_path(), self.code.concat())?;
        Ok(())
    }

    fn csv_filename(&self) -> String {
        format!("{}.csv", self.name)
    }

    fn write_csv(&self) -> FigureResult<()> {
        let file = fs::File::create(self.csv_path())?;
        self.data.write_delimited(&self.headers, BufWriter::new(file))
    }

    /// One additive plot command per dependent series, in row order, each
    /// pairing the independent column with one dependent header.
    fn add_all_plots(&mut self) {
        let table = self.csv_filename();
        for i in 1..self.data.row_count() {
            let command =
                PlotCommand::new(self.plot_mode, "x", self.headers[i].as_str(), table.as_str());
            self.code.push(command.render());
        }
    }
}

fn validate(data: &Dataset) -> FigureResult<()> {
    if data.row_count() < 2 {
        return Err(FigureError::InvalidData(format!(
            "data should consist of at least 2 rows, found {}",
            data.row_count()
        )));
    }
    Ok(())
}
