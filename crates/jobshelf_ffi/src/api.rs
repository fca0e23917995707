//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose saved-jobs screen operations to Dart via FRB.
//! - Keep error semantics simple envelopes for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Screen state is process-global and guarded by one mutex.
//! - Launch policy is decided in Rust; the actual OS hand-off happens in
//!   Dart when `should_launch` is true.

use jobshelf_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_external_url,
    ping as ping_inner, row_opacity, SavedJobsScreen, SchemeLauncher, FEATURED_JOB_URL,
};
use log::info;
use std::sync::{Mutex, MutexGuard, OnceLock};

static SCREEN: OnceLock<Mutex<SavedJobsScreen>> = OnceLock::new();

fn screen() -> MutexGuard<'static, SavedJobsScreen> {
    let lock = SCREEN.get_or_init(|| Mutex::new(SavedJobsScreen::sample()));
    // A poisoned lock only means a previous panic was already reported;
    // screen state stays usable.
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success, error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Row view returned to the Dart list builder.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRowItem {
    /// Stable posting id, used as list key and save-toggle argument.
    pub id: String,
    /// Row headline.
    pub title: String,
    /// Company line under the title.
    pub company: String,
    /// Whether the posting is in the saved set.
    pub saved: bool,
    /// Icon-set name for the bookmark glyph (`bookmark|bookmark-border`).
    pub glyph: String,
    /// Fade opacity at the screen's current scroll offset, in `[0, 1]`.
    pub opacity: f64,
}

/// Action response envelope for save-toggle calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Saved ids after the operation, in sorted order.
    pub saved_ids: Vec<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Launch decision envelope for the link control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLaunchResponse {
    /// Whether Dart should hand the URL to the OS.
    pub should_launch: bool,
    /// The URL the link control targets.
    pub url: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Returns one row per catalog posting, in catalog order.
///
/// # FFI contract
/// - Sync call, pure projection of in-memory state.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_rows() -> Vec<JobRowItem> {
    screen()
        .rows()
        .into_iter()
        .map(|row| JobRowItem {
            id: row.id,
            title: row.title,
            company: row.company,
            saved: row.saved,
            glyph: row.glyph.as_str().to_owned(),
            opacity: row.opacity,
        })
        .collect()
}

/// Marks a posting as saved (insert-only, idempotent).
///
/// # FFI contract
/// - Sync call, in-memory mutation only.
/// - Unknown ids return `ok = false` with an explanatory message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_toggle_saved(id: String) -> ScreenActionResponse {
    let mut screen = screen();
    match screen.toggle_saved(&id) {
        Ok(newly_saved) => ScreenActionResponse {
            ok: true,
            saved_ids: screen.saved_ids(),
            message: if newly_saved {
                format!("posting {id} saved")
            } else {
                format!("posting {id} was already saved")
            },
        },
        Err(err) => ScreenActionResponse {
            ok: false,
            saved_ids: screen.saved_ids(),
            message: err.to_string(),
        },
    }
}

/// Updates the screen's scroll offset from a scroll event.
///
/// # FFI contract
/// - Sync call, suitable for per-frame delivery.
/// - Non-finite offsets are dropped.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_set_scroll_offset(offset: f64) {
    screen().set_scroll_offset(offset);
}

/// Returns the screen's current scroll offset.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_scroll_offset() -> f64 {
    screen().scroll_offset()
}

/// Evaluates the fade curve for one row at an arbitrary offset.
///
/// Pure function mirror of the screen's per-row opacity, for callers that
/// drive the fade from a native scroll channel without round-tripping
/// screen state.
///
/// # FFI contract
/// - Sync call, pure computation, never panics.
/// - Result is always within `[0, 1]`.
#[flutter_rust_bridge::frb(sync)]
pub fn row_fade_opacity(index: u32, scroll_offset: f64) -> f64 {
    row_opacity(index as usize, scroll_offset)
}

/// Decides whether the link control's URL should be launched.
///
/// Applies the core check-then-act policy against the screen's link target.
/// When the scheme is unsupported the rejection is logged in Rust and
/// `should_launch` is false; no user-facing error is raised.
///
/// # FFI contract
/// - Sync call, never panics.
/// - At most one diagnostic log entry per rejected call.
#[flutter_rust_bridge::frb(sync)]
pub fn open_job_link() -> LinkLaunchResponse {
    let url = FEATURED_JOB_URL.to_owned();
    let should_launch = open_external_url(&SchemeLauncher, &url);
    LinkLaunchResponse {
        message: if should_launch {
            format!("launching {url}")
        } else {
            format!("cannot open {url}")
        },
        should_launch,
        url,
    }
}

/// Resets the screen to a freshly mounted state.
///
/// Supports Flutter hot-restart, which tears down the Dart side while the
/// Rust process (and its global screen) survives.
///
/// # FFI contract
/// - Sync call, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_reset() {
    *screen() = SavedJobsScreen::sample();
    info!("event=screen_reset module=ffi status=ok");
}
