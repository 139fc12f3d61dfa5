// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Logging is verified in its own process so that no other test has enabled frames yet.

#![cfg(all(feature = "logs", not(feature = "frames")))]

use tracing_test::traced_test;

#[traced_test]
#[test]
fn enabling_frames_is_logged() {
    assert!(!breadcrumb::frames_enabled());

    breadcrumb::enable_frames();

    assert!(breadcrumb::frames_enabled());
    assert!(logs_contain("breadcrumb frame capture enabled"));
    assert!(logs_contain("frames.enabled=true"));
}
