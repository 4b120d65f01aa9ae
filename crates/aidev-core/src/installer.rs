//! Claude CLI detection and global install.
//!
//! Package manager priority mirrors runtime detection elsewhere in the
//! workflow: bun first (fastest), npm as the fallback. If neither frontend
//! is on the PATH the install fails fatally — later steps assume the CLI
//! exists, so this is surfaced rather than skipped.

use crate::error::{AidevError, Result};
use std::process::Command;

pub const CLAUDE_PACKAGE: &str = "@anthropic-ai/claude-code";

/// The supported global-install frontends, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Bun,
    Npm,
}

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }
}

/// Detect the best available package manager. None if neither is installed.
pub fn detect_package_manager() -> Option<PackageManager> {
    if which::which("bun").is_ok() {
        return Some(PackageManager::Bun);
    }
    if which::which("npm").is_ok() {
        return Some(PackageManager::Npm);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPlan {
    AlreadyPresent,
    Install(PackageManager),
}

/// Decide whether an install is needed. Pure: takes the probe result and
/// detected package manager so the decision is testable without touching
/// the system.
pub fn plan_install(present: bool, manager: Option<PackageManager>) -> Result<InstallPlan> {
    if present {
        return Ok(InstallPlan::AlreadyPresent);
    }
    match manager {
        Some(manager) => Ok(InstallPlan::Install(manager)),
        None => Err(AidevError::NoPackageManager),
    }
}

/// Probe for the Claude CLI by resolving the binary and invoking its
/// version flag.
pub fn claude_present() -> bool {
    if which::which("claude").is_err() {
        return false;
    }
    Command::new("claude")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Install the Claude CLI if it is not already present.
pub fn ensure_claude() -> Result<InstallPlan> {
    let plan = plan_install(claude_present(), detect_package_manager())?;
    if let InstallPlan::Install(manager) = plan {
        install(manager)?;
    }
    Ok(plan)
}

fn install(manager: PackageManager) -> Result<()> {
    let (program, args): (&str, &[&str]) = match manager {
        PackageManager::Bun => ("bun", &["add", "-g", CLAUDE_PACKAGE]),
        PackageManager::Npm => ("npm", &["install", "-g", CLAUDE_PACKAGE]),
    };
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| AidevError::CommandFailed {
            program: program.into(),
            subcommand: args[0].into(),
            detail: e.to_string(),
        })?;
    if !status.success() {
        return Err(AidevError::CommandFailed {
            program: program.into(),
            subcommand: args[0].into(),
            detail: format!("exited with {status}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_tool_is_never_installed() {
        // Even with no package manager available, a present tool needs nothing.
        assert_eq!(
            plan_install(true, None).unwrap(),
            InstallPlan::AlreadyPresent
        );
        assert_eq!(
            plan_install(true, Some(PackageManager::Bun)).unwrap(),
            InstallPlan::AlreadyPresent
        );
    }

    #[test]
    fn absent_tool_uses_detected_manager() {
        assert_eq!(
            plan_install(false, Some(PackageManager::Npm)).unwrap(),
            InstallPlan::Install(PackageManager::Npm)
        );
    }

    #[test]
    fn missing_both_frontends_is_fatal() {
        let err = plan_install(false, None).unwrap_err();
        assert!(matches!(err, AidevError::NoPackageManager));
    }

    #[test]
    fn manager_names_are_stable() {
        assert_eq!(PackageManager::Bun.name(), "bun");
        assert_eq!(PackageManager::Npm.name(), "npm");
    }
}
