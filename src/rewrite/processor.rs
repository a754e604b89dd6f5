use super::{classifier::LineClassifier, rules::TransformRule, state::ProcessorState};
use crate::{Result, input::InputFile};
use std::{io::Write, path::Path};

/// Counters for a single rewrite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Input lines consumed.
    pub lines_read: u64,
    /// Output lines written.
    pub lines_written: u64,
    /// Markup lines matched by a rule.
    pub markup_lines: u64,
    /// Text lines dropped while suppressed.
    pub lines_suppressed: u64,
}

/// Line-based rewriter for exported notebook documents.
pub struct LineRewriter {
    state: ProcessorState,
    rules: Vec<Box<dyn TransformRule>>,
}

impl LineRewriter {
    pub fn new(rules: Vec<Box<dyn TransformRule>>) -> Self {
        Self {
            state: ProcessorState::new(),
            rules,
        }
    }

    /// Rewrite an in-memory document. Every output line ends with `\n`.
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::new();

        for line in input.split_inclusive('\n') {
            for out in self.process_line(line) {
                output.push_str(&out);
                output.push('\n');
            }
        }

        output
    }

    /// Process a single line (with its terminator) and return output line(s).
    pub fn process_line(&mut self, line: &str) -> Vec<String> {
        let line_type = LineClassifier::classify(line);

        // First matching rule wins
        for rule in &self.rules {
            if rule.matches(&line_type) {
                return rule.transform(line, &mut self.state);
            }
        }

        if self.state.is_emitting() {
            vec![line.replacen('\n', "", 1)]
        } else {
            vec![]
        }
    }

    /// Rewrite `lines` into `writer`, one output line per `writeln!`.
    ///
    /// Stops at the first read or write error.
    pub fn rewrite<I, W>(&mut self, lines: I, writer: &mut W) -> Result<RewriteStats>
    where
        I: IntoIterator<Item = Result<String>>,
        W: Write,
    {
        let mut stats = RewriteStats::default();

        for line in lines {
            let line = line?;
            stats.lines_read += 1;

            let line_type = LineClassifier::classify(&line);
            let emitting = self.state.is_emitting();
            let output = self.process_line(&line);

            if line_type.is_markup() {
                tracing::trace!(line = stats.lines_read, ?line_type, "Matched markup line");
                stats.markup_lines += 1;
            } else if !emitting {
                stats.lines_suppressed += 1;
            }

            for out in &output {
                writeln!(writer, "{}", out)?;
                stats.lines_written += 1;
            }
        }

        writer.flush()?;

        Ok(stats)
    }

    /// Open `path` and rewrite its lines into `writer`.
    pub fn rewrite_file<W: Write>(
        &mut self,
        path: &Path,
        writer: &mut W,
    ) -> Result<RewriteStats> {
        let input = InputFile::open(path)?;
        tracing::info!("Rewriting {}", input.path().display());

        self.rewrite(input.lines(), writer)
    }

    /// Get current state (for inspection/testing).
    pub fn state(&self) -> &ProcessorState {
        &self.state
    }
}

impl Default for LineRewriter {
    fn default() -> Self {
        Self::new(super::rules::default_rules())
    }
}
