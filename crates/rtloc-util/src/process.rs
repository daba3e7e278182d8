use std::process::{Command, Output};

use crate::errors::RtlocError;

/// Builder for running an external program and collecting what it prints.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Human-readable form of the command line, used in log and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute the command and return its raw output, whatever the exit status.
    pub fn exec(&self) -> Result<Output, RtlocError> {
        tracing::debug!("Running `{}`", self.display());
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.output().map_err(|e| RtlocError::Process {
            message: format!("Failed to run `{}`: {e}", self.display()),
        })
    }

    /// Execute the command and return its stdout split into lines.
    ///
    /// A non-zero exit status is an error; trailing `\r` is stripped so
    /// Windows output parses the same as Unix output.
    pub fn stdout_lines(&self) -> Result<Vec<String>, RtlocError> {
        let output = self.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RtlocError::Process {
                message: format!(
                    "`{}` exited with {}: {}",
                    self.display(),
                    output.status,
                    stderr.trim()
                ),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect())
    }
}
