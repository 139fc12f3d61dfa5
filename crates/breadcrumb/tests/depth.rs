// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io;

use breadcrumb::{BoxError, Breadcrumb, ResultExt, detail, new, new_msg, wrap, wrap_msg};
use regex::Regex;

mod util;

const SCENARIOS: [usize; 5] = [0, 1, 2, 5, 10];

fn chain_regex(depth: usize) -> Regex {
    let frame = util::frame_pattern("depth.rs");
    Regex::new(&format!(r"^(wrapper {frame}: ){{{depth}}}base {frame}$")).unwrap()
}

fn create_wrap(depth: usize) -> Option<BoxError> {
    if depth == 0 {
        return new(Some(Box::new(io::Error::other("base"))));
    }
    wrap(create_wrap(depth - 1), Some(Box::new(io::Error::other("wrapper"))))
}

fn create_wrap_msg(depth: usize) -> Option<BoxError> {
    if depth == 0 {
        return Some(new_msg("base"));
    }
    wrap_msg(create_wrap_msg(depth - 1), "wrapper")
}

fn create_typed(depth: usize) -> Breadcrumb {
    if depth == 0 {
        return Breadcrumb::msg("base");
    }
    create_typed(depth - 1).wrap_msg("wrapper")
}

fn create_result(depth: usize) -> Result<(), Breadcrumb> {
    if depth == 0 {
        return Err(io::Error::other("base")).breadcrumb();
    }
    create_result(depth - 1).wrap_msg("wrapper")
}

fn assert_chain(depth: usize, rendered: &str) {
    let frames = Regex::new(&util::frame_pattern("depth.rs")).unwrap();

    assert!(chain_regex(depth).is_match(rendered), "depth {depth}: unexpected detail {rendered}");
    assert_eq!(frames.find_iter(rendered).count(), depth + 1);
}

#[test]
fn every_level_has_a_frame() {
    breadcrumb::enable_frames();

    for depth in SCENARIOS {
        let error = create_wrap(depth);
        assert_chain(depth, &detail(error.as_deref()));

        let error = create_wrap_msg(depth);
        assert_chain(depth, &detail(error.as_deref()));

        assert_chain(depth, &create_typed(depth).detail());
        assert_chain(depth, &create_result(depth).unwrap_err().detail());
    }
}

#[test]
fn basic_rendering_has_no_frames() {
    breadcrumb::enable_frames();

    for depth in SCENARIOS {
        let expected = format!("{}base", "wrapper: ".repeat(depth));

        assert_eq!(create_wrap(depth).unwrap().to_string(), expected);
        assert_eq!(create_typed(depth).to_string(), expected);
    }
}

#[test]
fn levels_match_depth() {
    for depth in SCENARIOS {
        let error = create_typed(depth);

        assert_eq!(error.levels().count(), depth + 1);
        assert!(error.levels().last().unwrap().previous().is_none());
    }
}
