// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A plain error that carries nothing but its message.
///
/// This is the value stored for [`Breadcrumb::msg`](crate::Breadcrumb::msg),
/// [`new_msg`](crate::new_msg) and [`wrap_msg`](crate::wrap_msg), and for any string passed where
/// an error is expected.
///
/// ```rust
/// use breadcrumb::{Breadcrumb, Message};
///
/// let error = Breadcrumb::msg("disk full");
/// let message = error.value().downcast_ref::<Message>().unwrap();
/// assert_eq!(message.as_str(), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Cow<'static, str>);

impl Message {
    /// Creates a new message error.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// Returns the message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}
