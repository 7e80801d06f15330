/// Switches that change what a generator emits, never how it sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Emit pseudo-code line markers.
    ///
    /// Only [`bubble`](crate::bubble) models line-level stepping; the other
    /// generators ignore this flag.
    pub source_lines: bool,

    /// Tint the two runs of a merge and the placed prefix separately.
    ///
    /// Only read by [`merge`](crate::merge).
    pub highlight_runs: bool,
}

impl Options {
    /// Plain output: no line markers, no run tints.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            source_lines: false,
            highlight_runs: false,
        }
    }

    /// Enables pseudo-code line markers.
    #[must_use]
    pub fn with_source_lines(mut self) -> Self {
        self.source_lines = true;
        self
    }

    /// Enables merge run tints.
    #[must_use]
    pub fn with_run_highlights(mut self) -> Self {
        self.highlight_runs = true;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::plain().with_run_highlights()
    }
}
