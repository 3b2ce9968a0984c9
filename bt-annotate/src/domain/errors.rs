//! Structured error types for bt-annotate
//!
//! Using thiserror for automatic Display implementation and error chaining.

use super::types::Address;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    /// The resolver executable could not be started at all
    #[error("Failed to run resolver {}", .tool.display())]
    ToolInvocation {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resolver {} failed for {address} ({status}){}", .tool.display(), stderr_suffix(.stderr))]
    ToolFailure { tool: PathBuf, address: Address, status: ExitStatus, stderr: String },

    #[error("Resolver returned no output for {address}")]
    EmptyResolution { address: Address },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnnotateError {
    /// True for failures of a single lookup, as opposed to the resolver
    /// being unusable or the output stream breaking.
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::ToolFailure { .. } | Self::EmptyResolution { .. })
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_tool_invocation_display() {
        let err = AnnotateError::ToolInvocation {
            tool: PathBuf::from("/opt/riscv/bin/addr2line"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "Failed to run resolver /opt/riscv/bin/addr2line");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("No such file or directory"));
        assert!(!err.is_lookup_failure());
    }

    #[test]
    fn test_empty_resolution_display() {
        let err = AnnotateError::EmptyResolution { address: Address::new("0x00001234") };
        assert_eq!(err.to_string(), "Resolver returned no output for 0x00001234");
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn test_stderr_suffix() {
        assert_eq!(stderr_suffix("  \n"), "");
        assert_eq!(
            stderr_suffix("addr2line: 'rcore': No such file\n"),
            ": addr2line: 'rcore': No such file"
        );
    }
}
