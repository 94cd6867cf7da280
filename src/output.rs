//! Verdicts and hook output
//!
//! A policy produces a [`Verdict`] plus advisory text. The dispatcher turns
//! that into an [`Outcome`]: lines for stdout, lines for stderr and the exit
//! status the host acts on.

use std::io::{self, Write};

/// Exit status: let the action continue
pub const EXIT_CONTINUE: i32 = 0;

/// Exit status: block the action
pub const EXIT_BLOCK: i32 = 2;

/// Decision result from a policy.
///
/// When several rules apply, `Block` dominates `Warn` dominates `Allow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Allow the operation
    Allow,

    /// Allow the operation but show a message
    Warn(String),

    /// Block the operation
    Block(String),
}

impl Verdict {
    /// Check if this is an allow verdict
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    /// Check if this is a warn verdict
    pub fn is_warn(&self) -> bool {
        matches!(self, Verdict::Warn(_))
    }

    /// Check if this is a block verdict
    pub fn is_block(&self) -> bool {
        matches!(self, Verdict::Block(_))
    }

    /// Get the message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Allow => None,
            Verdict::Warn(message) | Verdict::Block(message) => Some(message),
        }
    }

    /// Exit status for this verdict
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Block(_) => EXIT_BLOCK,
            Verdict::Allow | Verdict::Warn(_) => EXIT_CONTINUE,
        }
    }

    /// Downgrade a block to a warning (warn-only mode)
    pub fn soften(self) -> Verdict {
        match self {
            Verdict::Block(message) => Verdict::Warn(message),
            other => other,
        }
    }
}

/// What a hook produced: a verdict plus advisory text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,

    /// Advisory lines for stdout (prompt tips, environment report)
    pub notes: Vec<String>,

    /// Reminders for stderr; they never change the verdict
    pub reminders: Vec<String>,
}

impl Evaluation {
    /// Evaluation with no verdict and no messages
    pub fn allow() -> Self {
        Self::from_verdict(Verdict::Allow)
    }

    /// Evaluation carrying just a verdict
    pub fn from_verdict(verdict: Verdict) -> Self {
        Self {
            verdict,
            notes: Vec::new(),
            reminders: Vec::new(),
        }
    }

    /// Attach stdout notes
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Attach stderr reminders
    pub fn with_reminders(mut self, reminders: Vec<String>) -> Self {
        self.reminders = reminders;
        self
    }
}

/// Final result of one hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub exit_code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl Outcome {
    /// Continue silently (also the fail-open result)
    pub fn proceed() -> Self {
        Self {
            exit_code: EXIT_CONTINUE,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    /// Render an evaluation.
    ///
    /// Block and warn messages go to stdout ahead of any notes; reminders go
    /// to stderr with a warning marker.
    pub fn from_evaluation(evaluation: Evaluation) -> Self {
        let Evaluation {
            verdict,
            notes,
            reminders,
        } = evaluation;

        let mut stdout = Vec::new();
        match &verdict {
            Verdict::Allow => {}
            Verdict::Warn(message) => stdout.push(format!("⚠️ {}", message)),
            Verdict::Block(message) => stdout.push(format!("🚫 {}", message)),
        }
        stdout.extend(notes);

        Self {
            exit_code: verdict.exit_code(),
            stdout,
            stderr: reminders.into_iter().map(|r| format!("⚠️ {}", r)).collect(),
        }
    }

    /// Check if the host action will be blocked
    pub fn is_block(&self) -> bool {
        self.exit_code == EXIT_BLOCK
    }

    /// Write the message streams
    pub fn emit(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        for line in &self.stdout {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        for line in &self.stderr {
            writeln!(err, "{}", line)?;
        }
        err.flush()
    }
}
