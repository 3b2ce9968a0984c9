use log::debug;
use std::process::Command;

use crate::config::AnnotatorConfig;
use crate::domain::{Address, AnnotateError, SymbolText};

/// Capability to turn an address into symbol text
///
/// The annotator only talks to this trait, so tests can count and inspect
/// lookups without spawning a process.
pub trait AddressResolver {
    /// Resolve one address
    ///
    /// # Errors
    /// - [`AnnotateError::ToolInvocation`] if the resolver cannot run at all
    /// - [`AnnotateError::ToolFailure`] or [`AnnotateError::EmptyResolution`]
    ///   if this particular lookup failed
    fn resolve(&mut self, address: &Address) -> Result<SymbolText, AnnotateError>;
}

/// Resolver backed by an external `addr2line`-compatible executable
///
/// Runs `<resolver> -e <binary> -f -C <address>` once per address and
/// blocks until it exits. Function name and `file:line` come back on
/// separate lines of stdout.
pub struct Addr2LineTool {
    config: AnnotatorConfig,
}

impl Addr2LineTool {
    #[must_use]
    pub fn new(config: AnnotatorConfig) -> Self {
        Self { config }
    }

    fn command(&self, address: &Address) -> Command {
        let mut cmd = Command::new(&self.config.resolver_path);
        cmd.arg("-e").arg(&self.config.target_binary).arg("-f").arg("-C").arg(address.as_str());
        cmd
    }
}

impl AddressResolver for Addr2LineTool {
    fn resolve(&mut self, address: &Address) -> Result<SymbolText, AnnotateError> {
        debug!(
            "Resolving {address} in {} via {}",
            self.config.target_binary.display(),
            self.config.resolver_path.display()
        );

        let output = self.command(address).output().map_err(|source| {
            AnnotateError::ToolInvocation { tool: self.config.resolver_path.clone(), source }
        })?;

        if !output.status.success() {
            return Err(AnnotateError::ToolFailure {
                tool: self.config.resolver_path.clone(),
                address: address.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let text = SymbolText::new(&String::from_utf8_lossy(&output.stdout));
        if text.is_empty() {
            return Err(AnnotateError::EmptyResolution { address: address.clone() });
        }

        Ok(text)
    }
}
