//! Line-oriented emission buffer with scoped blocks.
//!
//! [`EmissionWriter`] accumulates generated source one line at a time.
//! Text printed on an empty line is prefixed with the indentation of the
//! current block depth. Blocks are opened and closed either explicitly with
//! [`EmissionWriter::open_block`] / [`EmissionWriter::close_block`] or through
//! a [`BlockGuard`], which closes its block when dropped.

use crate::syntax::Syntax;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Accumulating writer for generated source.
#[derive(Debug, Clone)]
pub struct EmissionWriter {
    syntax: Syntax,
    lines: Vec<String>,
    current: String,
    depth: usize,
    opened: usize,
    closed: usize,
    underflows: usize,
}

impl EmissionWriter {
    /// Creates an empty writer for the given syntax.
    #[must_use]
    pub fn new(syntax: Syntax) -> Self {
        Self {
            syntax,
            lines: Vec::new(),
            current: String::new(),
            depth: 0,
            opened: 0,
            closed: 0,
            underflows: 0,
        }
    }

    /// Returns the rendering parameters of this writer.
    #[must_use]
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Appends text to the current line without terminating it.
    pub fn print(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.current.is_empty() {
            for _ in 0..self.depth {
                self.current.push_str(self.syntax.indent);
            }
        }
        self.current.push_str(text);
        self
    }

    /// Appends text and terminates the current line.
    pub fn println(&mut self, text: &str) -> &mut Self {
        self.print(text);
        self.lines.push(std::mem::take(&mut self.current));
        self
    }

    /// Terminates the current line. An empty line stays empty.
    pub fn newline(&mut self) -> &mut Self {
        self.println("")
    }

    /// Terminates the current line if it holds text; otherwise does nothing.
    pub fn end_line(&mut self) -> &mut Self {
        if !self.current.is_empty() {
            self.newline();
        }
        self
    }

    /// Returns true if nothing has been printed on the current line.
    #[must_use]
    pub fn line_is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Prints text followed by the statement terminator, ending the line.
    pub fn statement(&mut self, text: &str) -> &mut Self {
        self.print(text);
        self.end_statement()
    }

    /// Ends a statement composed of earlier `print` calls.
    pub fn end_statement(&mut self) -> &mut Self {
        let terminator = self.syntax.terminator;
        self.println(terminator)
    }

    /// Emits the block-opening token and indents what follows.
    ///
    /// If the current line holds text, the token is appended to it after a
    /// space; otherwise it goes on its own line.
    pub fn open_block(&mut self) -> &mut Self {
        if !self.current.is_empty() {
            self.current.push(' ');
        }
        let open = self.syntax.block_open;
        self.println(open);
        self.depth += 1;
        self.opened += 1;
        self
    }

    /// Dedents and emits the block-closing token on its own line.
    ///
    /// Closing with no open block is recorded rather than rejected; see
    /// [`EmissionWriter::underflows`].
    pub fn close_block(&mut self) -> &mut Self {
        self.end_line();
        if self.depth == 0 {
            self.underflows += 1;
        } else {
            self.depth -= 1;
        }
        self.closed += 1;
        let close = self.syntax.block_close;
        self.println(close)
    }

    /// Opens a block that is closed when the returned guard is dropped.
    pub fn block(&mut self) -> BlockGuard<'_> {
        self.open_block();
        BlockGuard { writer: self }
    }

    /// Runs `f` inside a block, closing it on every exit path.
    ///
    /// # Errors
    /// Returns whatever `f` returns.
    pub fn with_block<T, E>(
        &mut self,
        f: impl FnOnce(&mut EmissionWriter) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut guard = self.block();
        f(&mut guard)
    }

    /// Current block depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of blocks opened.
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened
    }

    /// Total number of blocks closed, including unmatched closes.
    #[must_use]
    pub fn closed(&self) -> usize {
        self.closed
    }

    /// Number of closes issued with no block open.
    #[must_use]
    pub fn underflows(&self) -> usize {
        self.underflows
    }

    /// Completed lines so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Flushes any partial line and returns the emitted text.
    #[must_use]
    pub fn finish(mut self) -> Emission {
        self.end_line();
        Emission { lines: self.lines }
    }
}

impl Default for EmissionWriter {
    fn default() -> Self {
        Self::new(Syntax::default())
    }
}

/// Scope guard for one open block.
///
/// Dereferences to the underlying writer and emits the closing token when
/// dropped.
pub struct BlockGuard<'w> {
    writer: &'w mut EmissionWriter,
}

impl Deref for BlockGuard<'_> {
    type Target = EmissionWriter;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for BlockGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.writer.close_block();
    }
}

/// Generated source produced by one successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emission {
    lines: Vec<String>,
}

impl Emission {
    /// Generated lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines into source text, each terminated by `\n`.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Consumes the emission, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
