// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Lightweight error annotation with call-site frames.
//!
//! A [`Breadcrumb`] attaches a message and the location of the annotating call to an error as it
//! travels up the stack, while staying a regular [`std::error::Error`].
//!
//! # Key Features
//!
//! - [**`Breadcrumb`**](Breadcrumb): one annotation level holding a value, an optional
//!   [`Frame`], and the level below it
//! - [**`new`**](new), [**`wrap`**](wrap), [**`new_msg`**](new_msg), [**`wrap_msg`**](wrap_msg):
//!   constructors over `Option<BoxError>` where a missing error flows through untouched
//! - [**`value`**](value), [**`frame`**](frame()), [**`detail`**](detail): readers for the
//!   outermost level or the whole chain
//! - [**`ErrorExt`**](ErrorExt): type and value matching against every value in the chain
//! - [**`ResultExt`**](ResultExt): annotate the `Err` side of a `Result` in place
//!
//! # Quick Start
//!
//! ```rust
//! use breadcrumb::{Breadcrumb, ErrorExt, ResultExt};
//!
//! fn load(path: &str) -> Result<String, Breadcrumb> {
//!     std::fs::read_to_string(path).wrap_msg("failed to load settings")
//! }
//!
//! let error = load("/does/not/exist").unwrap_err();
//!
//! assert!(error.to_string().starts_with("failed to load settings: "));
//! assert!(error.find::<std::io::Error>().is_some());
//! ```
//!
//! # Formatting
//!
//! | format  | output                                        |
//! |---------|-----------------------------------------------|
//! | `{}`    | `second error: base`                          |
//! | `{:#}`  | `second error (main.rs:12): base (main.rs:8)` |
//! | `{:?}`  | `"second error: base"`                        |
//! | `{:#?}` | every level with its value and frame          |
//!
//! # Frames
//!
//! Capturing a frame reads [`std::panic::Location::caller`], which the compiler resolves to the
//! user's call site through `#[track_caller]`. Frames are off by default and are turned on for
//! the whole process by calling [`enable_frames`] early in `main`, or by enabling the `frames`
//! feature. With capture off, levels carry no frame and `{:#}` renders like `{}`.
//!
//! ```rust
//! breadcrumb::enable_frames();
//!
//! let error = breadcrumb::Breadcrumb::msg("base");
//! assert!(error.frame().is_some());
//! ```
//!
//! # Chains
//!
//! [`source`](std::error::Error::source) walks annotation levels only, one per call. The value
//! chain used by [`ErrorExt`] also visits each level's value and that value's own sources:
//!
//! ```rust
//! use breadcrumb::{Breadcrumb, ErrorExt, Message};
//! use std::error::Error;
//!
//! let error = Breadcrumb::msg("some error").wrap_msg("wrapping error");
//!
//! assert!(error.source().unwrap().source().is_none());
//! assert!(error.contains(&Message::new("some error")));
//! assert!(error.contains(&Message::new("wrapping error")));
//! assert!(!error.contains(&Message::new("unknown error")));
//! ```
//!
//! # Features
//!
//! - `frames`: start the process with frame capture enabled.
//! - `logs`: emit a `tracing` event when frame capture is enabled.
//! - `test-util`: assertion macros for detailed renderings.

mod builder;
mod error_ext;
mod frame;
mod message;
mod node;
mod reader;
mod result_ext;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use builder::{new, new_msg, wrap, wrap_msg};
pub use error_ext::{ErrorExt, Values};
pub use frame::{Frame, enable_frames, frames_enabled};
pub use message::Message;
pub use node::{BoxError, Breadcrumb, Levels};
pub use reader::{AsDynError, detail, frame, value};
pub use result_ext::ResultExt;
