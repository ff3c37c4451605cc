// File: crates/pgf-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model and pgfplots figure export API.

pub mod figure;
pub mod dataset;
pub mod axis;
pub mod markup;
pub mod error;

pub use figure::{Figure, EXPORT_DIR};
pub use dataset::Dataset;
pub use axis::AxisOptions;
pub use markup::{OptionMode, PlotCommand, PlotMode};
pub use error::{FigureError, FigureResult};
