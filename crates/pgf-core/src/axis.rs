// File: crates/pgf-core/src/axis.rs
// Summary: Insertion-ordered axis options with a default template and caller-wins merge.

use indexmap::IndexMap;

/// Default axis options, in emission order. Template data: copied into a
/// fresh map per instance, never aliased.
const DEFAULT_AXIS_OPTIONS: [(&str, &str); 6] = [
    ("width", r"0.7*\linewidth"),
    ("height", r"0.45*\linewidth"),
    ("xlabel", "$x$"),
    ("ylabel", "$y$"),
    ("grid", "major"),
    ("grid style", "{dashed, gray!30}"),
];

/// Ordered option map for the pgfplots `axis` environment.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisOptions {
    entries: IndexMap<String, String>,
}

impl AxisOptions {
    /// The six defaults, verbatim.
    pub fn new() -> Self {
        let entries = DEFAULT_AXIS_OPTIONS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Merge caller overrides against the defaults: the caller wins on
    /// conflict, defaults fill the gaps. Caller keys keep their order;
    /// missing defaults follow in template order.
    pub fn with_overrides(overrides: IndexMap<String, String>) -> Self {
        let mut entries = overrides;
        for (key, value) in DEFAULT_AXIS_OPTIONS {
            if !entries.contains_key(key) {
                entries.insert(key.to_string(), value.to_string());
            }
        }
        Self { entries }
    }

    /// Insert or overwrite a single option on the already-merged map.
    /// An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Options in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for AxisOptions {
    fn default() -> Self { Self::new() }
}
