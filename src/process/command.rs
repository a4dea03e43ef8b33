//! Command descriptions and captured results.

use std::fmt;

/// Which configured timeout applies to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutClass {
    /// Regular command
    #[default]
    Standard,
    /// `docker build` and similar long-running work
    LongRunning,
}

/// An external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
    echo: bool,
    capture: bool,
    timeout_class: TimeoutClass,
}

impl ShellCommand {
    /// Create a command for `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            echo: false,
            capture: false,
            timeout_class: TimeoutClass::Standard,
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Print the command line before running it
    pub fn echo(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Capture stdout instead of streaming it. Captured commands are treated
    /// as read-only queries and still run in dry-run mode.
    pub fn capture(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Use the long-running timeout
    pub fn long_running(mut self) -> Self {
        self.timeout_class = TimeoutClass::LongRunning;
        self
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument vector
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Whether the command line is printed before running
    pub fn is_echoed(&self) -> bool {
        self.echo
    }

    /// Whether stdout is captured
    pub fn is_captured(&self) -> bool {
        self.capture
    }

    /// Timeout class
    pub fn timeout_class(&self) -> TimeoutClass {
        self.timeout_class
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '$' | '`' | '\\' | ';' | '&' | '|'))
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if needs_quoting(arg) {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status, `None` when killed by a signal
    pub status_code: Option<i32>,
    /// Captured stdout (empty unless captured)
    pub stdout: String,
    /// Captured stderr (empty unless captured)
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            status_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Stdout with surrounding whitespace removed
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}
