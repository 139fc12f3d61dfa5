// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide frame capture switch. Written at most once, from `false` to `true`.
static FRAMES_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "frames"));

/// Turns on frame capture for every [`Breadcrumb`](crate::Breadcrumb) built from now on.
///
/// Call this once during process startup, before errors are constructed concurrently.
/// Nodes that already exist keep the frames they were built with. There is no way to turn
/// capture back off; calling this again has no effect.
///
/// Enabling the `frames` feature has the same effect as calling this before `main`.
pub fn enable_frames() {
    if !FRAMES_ENABLED.swap(true, Ordering::Relaxed) {
        #[cfg(feature = "logs")]
        tracing::event!(
            name: "breadcrumb.frames",
            tracing::Level::DEBUG,
            frames.enabled = true,
            "breadcrumb frame capture enabled"
        );
    }
}

/// Returns whether new [`Breadcrumb`](crate::Breadcrumb) levels capture their call site.
#[must_use]
pub fn frames_enabled() -> bool {
    FRAMES_ENABLED.load(Ordering::Relaxed)
}

/// The call site at which an error was annotated.
///
/// Displays as `(file_name:line)`, where `file_name` is the last component of the source path.
///
/// # Examples
///
/// ```rust
/// let frame = breadcrumb::Frame::caller();
/// let rendered = frame.to_string();
///
/// assert!(rendered.starts_with('(') && rendered.ends_with(')'));
/// assert!(frame.line() > 0);
/// assert!(!frame.file_name().contains('/'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    location: &'static Location<'static>,
}

impl Frame {
    /// Captures the location of the caller, regardless of whether frame capture is enabled.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// Captures the location of the caller if frame capture is enabled.
    ///
    /// `#[track_caller]` propagates through every public entry point, so the location is the
    /// user's call site rather than a frame inside this crate.
    #[track_caller]
    pub(crate) fn capture() -> Option<Self> {
        let location = Location::caller();
        frames_enabled().then_some(Self { location })
    }

    /// The short file name of the call site, without any directories.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        let path = self.location.file();
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }

    /// The source path of the call site as recorded by the compiler.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.location.file()
    }

    /// The 1-based line of the call site.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// The 1-based column of the call site.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.location.column()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.file_name(), self.line())
    }
}
