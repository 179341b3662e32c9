//! Ordered, indentation-aware text assembly for brace-delimited sources and
//! markup.

/// Accumulates generated text line by line.
///
/// Lines come out exactly in the order they are written; the writer only
/// tracks the current nesting depth.
#[derive(Debug)]
pub struct SourceWriter {
    /// Where to write the generated text
    dst: String,

    /// Current nesting depth
    depth: usize,

    /// Text repeated once per nesting level
    indent: &'static str,
}

impl SourceWriter {
    pub fn new() -> SourceWriter {
        SourceWriter::with_indent("    ")
    }

    pub fn with_indent(indent: &'static str) -> SourceWriter {
        SourceWriter {
            dst: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Writes one line at the current depth. Empty lines carry no
    /// indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();

        if !text.is_empty() {
            for _ in 0..self.depth {
                self.dst.push_str(self.indent);
            }
            self.dst.push_str(text);
        }

        self.dst.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Writes several lines at the current depth.
    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line);
        }
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Writes `header`, an opening brace, and enters the block.
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(header).line("{").indent()
    }

    /// Leaves the current block and writes its closing brace.
    pub fn close(&mut self) -> &mut Self {
        self.dedent().line("}")
    }

    /// `open`, run `f` inside the block, then `close`.
    pub fn block(&mut self, header: impl AsRef<str>, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.open(header);
        f(self);
        self.close()
    }

    /// Runs `f` one level deeper, without braces.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.indent();
        f(self);
        self.dedent()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> String {
        self.dst
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        SourceWriter::new()
    }
}
