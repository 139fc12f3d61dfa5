// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Utilities for testing breadcrumb rendering.

/// Asserts that the detailed rendering of an error equals the expected text once frames are
/// removed.
///
/// Every ` (file:line)` suffix is stripped before comparison. The calling crate needs `regex`
/// as a dependency.
///
/// # Example
///
/// ```ignore
/// let error = breadcrumb::Breadcrumb::msg("base").wrap_msg("outer");
/// assert_detail!(error, "outer: base");
/// ```
#[macro_export]
macro_rules! assert_detail {
    ($error:expr, $expected:expr) => {{
        let detail = format!("{:#}", $error);

        let re = regex::Regex::new(r" \([^():]+:[1-9][0-9]*\)").unwrap();
        let stripped = re.replace_all(&detail, "");

        assert_eq!(stripped, $expected, "unexpected detail, full output:\n{detail}");
    }};
}

/// Asserts how many frames the detailed rendering of an error contains.
///
/// The calling crate needs `regex` as a dependency.
#[macro_export]
macro_rules! assert_frame_count {
    ($error:expr, $expected:expr) => {{
        let detail = format!("{:#}", $error);

        let re = regex::Regex::new(r"\([^():]+:[1-9][0-9]*\)").unwrap();
        let count = re.find_iter(&detail).count();

        assert_eq!(count, $expected, "unexpected number of frames in:\n{detail}");
    }};
}
