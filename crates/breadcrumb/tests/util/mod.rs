// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for integration tests.

/// Returns a pattern matching a rendered frame from `file_name`, for example `(wrap.rs:42)`.
pub fn frame_pattern(file_name: &str) -> String {
    format!(r"\({}:[1-9][0-9]*\)", regex::escape(file_name))
}
