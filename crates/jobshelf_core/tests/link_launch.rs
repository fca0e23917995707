use jobshelf_core::{
    open_external_url, LaunchError, SavedJobsScreen, SchemeLauncher, UrlLauncher, FEATURED_JOB_URL,
};
use std::cell::RefCell;

/// Test double capturing every capability call.
#[derive(Default)]
struct RecordingLauncher {
    supported: bool,
    fail_dispatch: bool,
    can_open_calls: RefCell<Vec<String>>,
    open_calls: RefCell<Vec<String>>,
}

impl RecordingLauncher {
    fn supporting() -> Self {
        Self {
            supported: true,
            ..Self::default()
        }
    }
}

impl UrlLauncher for RecordingLauncher {
    fn can_open(&self, url: &str) -> bool {
        self.can_open_calls.borrow_mut().push(url.to_string());
        self.supported
    }

    fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.open_calls.borrow_mut().push(url.to_string());
        if self.fail_dispatch {
            return Err(LaunchError::Dispatch("platform refused".to_string()));
        }
        Ok(())
    }
}

#[test]
fn supported_url_is_checked_then_opened_once() {
    let launcher = RecordingLauncher::supporting();

    assert!(open_external_url(&launcher, "https://example.com/jobs/1"));
    assert_eq!(launcher.can_open_calls.borrow().len(), 1);
    assert_eq!(
        launcher.open_calls.borrow().as_slice(),
        ["https://example.com/jobs/1".to_string()]
    );
}

#[test]
fn unsupported_url_is_rejected_without_dispatch() {
    let launcher = RecordingLauncher::default();

    assert!(!open_external_url(&launcher, "gopher://example.com"));
    assert_eq!(launcher.can_open_calls.borrow().len(), 1);
    assert!(launcher.open_calls.borrow().is_empty());
}

#[test]
fn dispatch_failure_is_swallowed_after_the_check() {
    let launcher = RecordingLauncher {
        supported: true,
        fail_dispatch: true,
        ..RecordingLauncher::default()
    };

    assert!(!open_external_url(&launcher, "https://example.com"));
    assert_eq!(launcher.open_calls.borrow().len(), 1);
}

#[test]
fn screen_link_control_targets_the_featured_url_for_every_row() {
    let mut screen = SavedJobsScreen::sample();
    screen.toggle_saved("5").expect("known id");
    let launcher = RecordingLauncher::supporting();

    assert!(screen.open_link(&launcher));
    assert_eq!(
        launcher.open_calls.borrow().as_slice(),
        [FEATURED_JOB_URL.to_string()]
    );
}

#[test]
fn featured_url_passes_the_default_scheme_policy() {
    assert!(SchemeLauncher.can_open(FEATURED_JOB_URL));
}
