// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Chain construction over optional errors.
//!
//! These functions accept and return `Option<BoxError>` so that a missing error flows through
//! without special casing at the call site. Discouraged call shapes, such as wrapping with a
//! missing outer error, have defined results rather than failing.

use std::borrow::Cow;

use crate::{BoxError, Breadcrumb, Message};

/// Adopts `error` as the base of a new chain.
///
/// - `None` yields `None`.
/// - A [`Breadcrumb`] is returned unchanged, without a new level.
/// - Any other error becomes a single-level chain with the caller's frame.
///
/// The error is stored as given. A string boxed with `.into()` stays the standard library's
/// private string error, so [`ErrorExt::find::<Message>`](crate::ErrorExt::find) will not see it.
/// Use [`new_msg`] for textual errors.
///
/// ```rust
/// use breadcrumb::{ErrorExt, Message};
///
/// let error = breadcrumb::new(Some(Box::new(std::io::Error::other("disk full")))).unwrap();
/// assert_eq!(error.to_string(), "disk full");
///
/// let text = breadcrumb::new_msg("some error");
/// assert!(text.find::<Message>().is_some());
///
/// assert!(breadcrumb::new(None).is_none());
/// ```
#[track_caller]
#[must_use]
pub fn new(error: Option<BoxError>) -> Option<BoxError> {
    let error = error?;
    if error.is::<Breadcrumb>() {
        return Some(error);
    }

    Some(Box::new(Breadcrumb::level(error, None)))
}

/// Creates a single-level chain holding a [`Message`].
#[track_caller]
#[must_use]
pub fn new_msg(message: impl Into<Cow<'static, str>>) -> BoxError {
    Box::new(Breadcrumb::msg(message))
}

/// Layers `outer` on top of `inner`.
///
/// - `None` for `inner` yields `None`, whatever `outer` is.
/// - `None` for `outer` returns `inner` unchanged.
/// - Otherwise `inner` is adopted as by [`new`] and `outer` becomes the new outermost level.
///   Both levels capture the caller's frame when `inner` was not yet a [`Breadcrumb`].
///
/// Like [`new`], `outer` is stored as given; use [`wrap_msg`] to layer text that matches as a
/// [`Message`].
///
/// ```rust
/// let base = breadcrumb::new_msg("base");
/// let outer = Box::new(std::io::Error::other("second error"));
/// let error = breadcrumb::wrap(Some(base), Some(outer)).unwrap();
///
/// assert_eq!(error.to_string(), "second error: base");
/// ```
#[track_caller]
#[must_use]
pub fn wrap(inner: Option<BoxError>, outer: Option<BoxError>) -> Option<BoxError> {
    let inner = inner?;
    let Some(outer) = outer else {
        return Some(inner);
    };

    Some(Box::new(Breadcrumb::adopt(inner).wrap(outer)))
}

/// Layers a [`Message`] on top of `inner`. `None` for `inner` yields `None`.
#[track_caller]
#[must_use]
pub fn wrap_msg(inner: Option<BoxError>, message: impl Into<Cow<'static, str>>) -> Option<BoxError> {
    let inner = inner?;
    Some(Box::new(Breadcrumb::adopt(inner).wrap_msg(message)))
}

/// Boxes `error`, storing string types as [`Message`].
pub(crate) fn into_local<E>(error: E) -> BoxError
where
    E: Into<BoxError>,
{
    if is_string_error(&error) {
        Box::new(Message::new(error.into().to_string()))
    } else {
        error.into()
    }
}

const STR_TYPE_IDS: [typeid::ConstTypeId; 3] = [
    typeid::ConstTypeId::of::<&str>(),
    typeid::ConstTypeId::of::<String>(),
    typeid::ConstTypeId::of::<Cow<'_, str>>(),
];

fn is_string_error<T>(_: &T) -> bool {
    let typeid_of_t = typeid::of::<T>();
    STR_TYPE_IDS.iter().any(|&id| id == typeid_of_t)
}
