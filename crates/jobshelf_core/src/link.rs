//! External URL launch policy.
//!
//! # Responsibility
//! - Decide whether an outbound URL may be handed to the platform shell.
//! - Apply check-then-act semantics with diagnostic-only failure handling.
//!
//! # Invariants
//! - Unsupported URLs are rejected before any dispatch attempt.
//! - Rejection emits exactly one error-level diagnostic and nothing else:
//!   no retry, no user-facing failure surface.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// URL schemes the platform shell is expected to handle.
pub const SUPPORTED_LINK_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Dispatch capability consumed from the host platform.
///
/// The real dispatcher lives in the embedding shell (OS browser hand-off);
/// core owns only the policy around it. Implementations must not panic.
pub trait UrlLauncher {
    /// Returns whether this launcher can dispatch the given URL.
    fn can_open(&self, url: &str) -> bool;

    /// Dispatches the URL. Only called after `can_open` returned true.
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher dispatch errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// The URL scheme is not handled by the platform.
    UnsupportedUrl(String),
    /// The platform accepted the URL but failed to dispatch it.
    Dispatch(String),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedUrl(url) => write!(f, "don't know how to open this URL: {url}"),
            Self::Dispatch(message) => write!(f, "url dispatch failed: {message}"),
        }
    }
}

impl Error for LaunchError {}

/// Default launcher backed by scheme inspection.
///
/// `can_open` parses the URL and checks its scheme against
/// [`SUPPORTED_LINK_SCHEMES`]; `open` records the hand-off, the actual OS
/// dispatch being performed by the embedding shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeLauncher;

impl UrlLauncher for SchemeLauncher {
    fn can_open(&self, url: &str) -> bool {
        Url::parse(url)
            .map(|parsed| SUPPORTED_LINK_SCHEMES.contains(&parsed.scheme()))
            .unwrap_or(false)
    }

    fn open(&self, url: &str) -> Result<(), LaunchError> {
        info!("event=url_dispatch module=link status=ok url={url}");
        Ok(())
    }
}

/// Opens an external URL with check-then-act semantics.
///
/// Queries `can_open` first; when supported, dispatches and returns true.
/// When unsupported or dispatch fails, logs one error-level diagnostic and
/// returns false. Fire-and-forget: the caller gets no richer result.
pub fn open_external_url(launcher: &dyn UrlLauncher, url: &str) -> bool {
    if !launcher.can_open(url) {
        error!("event=url_launch_rejected module=link status=error url={url}");
        return false;
    }

    match launcher.open(url) {
        Ok(()) => true,
        Err(err) => {
            error!("event=url_launch_failed module=link status=error url={url} error={err}");
            false
        }
    }
}
