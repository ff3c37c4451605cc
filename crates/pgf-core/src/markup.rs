// File: crates/pgf-core/src/markup.rs
// Summary: pgfplots fragment builders: figure/axis boilerplate, plot commands, legend.

use indexmap::IndexMap;

use crate::axis::AxisOptions;

/// Opening boilerplate: figure environment plus tikzpicture.
pub const FIGURE_OPEN: &str = "\\begin{figure}[H]\n\\centering\n\t\\begin{tikzpicture}\n";

/// Closing fragment for the axis environment.
pub const AXIS_CLOSE: &str = "\t\t\\end{axis}\n";

/// Styling applied to every plot command of a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotMode {
    /// Connected line, marks suppressed (`mark=none`).
    Line,
    /// Points only (`only marks`), no mark suppression.
    Scatter,
}

/// How the command's style options combine with the pgfplots cycle list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMode {
    /// `\addplot+[...]`: options extend the cycle-list defaults.
    Append,
    /// `\addplot[...]`: options replace them.
    Replace,
}

impl OptionMode {
    fn sigil(self) -> &'static str {
        match self {
            OptionMode::Append => "+",
            OptionMode::Replace => "",
        }
    }
}

/// One `\addplot` fragment: a column pair, styling, and the table reference.
#[derive(Clone, Debug)]
pub struct PlotCommand {
    pub x: String,
    pub y: String,
    pub table: String,
    pub mode: PlotMode,
    pub option_mode: OptionMode,
    pub options: IndexMap<String, String>,
}

impl PlotCommand {
    /// Plot of column `y` against column `x` from the delimited file `table`.
    /// Commands start in additive form with no style options.
    pub fn new(
        mode: PlotMode,
        x: impl Into<String>,
        y: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            table: table.into(),
            mode,
            option_mode: OptionMode::Append,
            options: IndexMap::new(),
        }
    }

    pub fn line(x: impl Into<String>, y: impl Into<String>, table: impl Into<String>) -> Self {
        Self::new(PlotMode::Line, x, y, table)
    }

    pub fn scatter(x: impl Into<String>, y: impl Into<String>, table: impl Into<String>) -> Self {
        Self::new(PlotMode::Scatter, x, y, table)
    }

    /// Replace the style options wholesale.
    pub fn with_options(mut self, options: IndexMap<String, String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_option_mode(mut self, option_mode: OptionMode) -> Self {
        self.option_mode = option_mode;
        self
    }

    /// Render the fragment. Line mode forces `mark=none`, overwriting a
    /// caller-supplied `mark` in place; scatter mode prefixes `only marks, `
    /// and leaves the options untouched.
    pub fn render(&self) -> String {
        let mut options = self.options.clone();
        let mut head = "";
        match self.mode {
            PlotMode::Line => {
                options.insert("mark".to_string(), "none".to_string());
            }
            PlotMode::Scatter => {
                head = "only marks, ";
            }
        }
        let styled = options
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "\t\t\t\\addplot{}[{}{}] table[x={}, y={}, col sep=semicolon] {{{}}};\n",
            self.option_mode.sigil(),
            head,
            styled,
            self.x,
            self.y,
            self.table
        )
    }
}

/// Opening fragment of the axis environment, listing `options` in order as
/// `key = value,` lines.
pub fn axis_open(options: &AxisOptions) -> String {
    let body = options
        .iter()
        .map(|(k, v)| format!("{k} = {v},"))
        .collect::<Vec<_>>()
        .join("\n\t\t\t");
    format!("\t\t\\begin{{axis}} [\n\t\t\t{body}\n\t\t\t]\n")
}

/// Legend fragment listing `entries` comma-separated, in order.
pub fn legend_line(entries: &[String]) -> String {
    format!("\t\t\t\\legend{{{}}};\n", entries.join(", "))
}

/// Closing boilerplate: tikzpicture end, caption, label, figure end.
pub fn figure_close(caption: &str, label: &str) -> String {
    format!("\t\\end{{tikzpicture}}\n\\caption{{{caption}}} \n\\label{{{label}}}\n\\end{{figure}}\n")
}
