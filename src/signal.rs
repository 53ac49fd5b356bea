//! The host's "prefers dark color scheme" signal.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

/// Read-only query into the host display environment.
///
/// Returns `Some(true)` when the user prefers a dark color scheme,
/// `Some(false)` when they do not, and `None` when there is no display
/// environment to ask.
pub trait SystemSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

impl<F> SystemSignal for F
where
    F: Fn() -> Option<bool>,
{
    fn prefers_dark(&self) -> Option<bool> {
        self()
    }
}

/// Asks the operating system's appearance setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignal;

impl SystemSignal for OsSignal {
    fn prefers_dark(&self) -> Option<bool> {
        match detect_os_theme() {
            OsThemeMode::Dark => Some(true),
            OsThemeMode::Light => Some(false),
        }
    }
}

/// A signal with a constant answer.
///
/// `FixedSignal(None)` stands for an environment without a display, and
/// `FixedSignal(Some(dark))` forces a preference regardless of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSignal(pub Option<bool>);

impl FixedSignal {
    pub fn dark() -> Self {
        FixedSignal(Some(true))
    }

    pub fn light() -> Self {
        FixedSignal(Some(false))
    }

    pub fn unavailable() -> Self {
        FixedSignal(None)
    }
}

impl SystemSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
