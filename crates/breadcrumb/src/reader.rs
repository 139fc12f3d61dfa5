// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

use crate::{Breadcrumb, Frame};

/// Views a value as a `dyn Error` trait object.
///
/// Implemented for every sized error type and for the common `dyn Error` trait objects, so the
/// readers in this crate accept `Option<&io::Error>` as readily as `Option<BoxError>::as_deref()`.
pub trait AsDynError {
    /// Returns `self` as a `dyn Error` trait object.
    fn as_dyn_error(&self) -> &(dyn StdError + 'static);
}

impl<E: StdError + 'static> AsDynError for E {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + 'static {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + 'static {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + Sync + 'static {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

/// Returns the value of the outermost level of a [`Breadcrumb`], or `error` itself otherwise.
///
/// Never descends past the outermost level.
///
/// ```rust
/// let error = breadcrumb::wrap_msg(Some(breadcrumb::new_msg("base")), "second error");
///
/// let value = breadcrumb::value(error.as_deref()).unwrap();
/// assert_eq!(value.to_string(), "second error");
/// ```
#[must_use]
pub fn value<E>(error: Option<&E>) -> Option<&(dyn StdError + 'static)>
where
    E: AsDynError + ?Sized,
{
    let error = error?.as_dyn_error();
    Some(error.downcast_ref::<Breadcrumb>().map_or(error, Breadcrumb::value))
}

/// Returns the frame of the outermost level of a [`Breadcrumb`].
///
/// `None` for errors that are not breadcrumbs and for levels built while frame capture was
/// disabled.
#[must_use]
pub fn frame<E>(error: Option<&E>) -> Option<Frame>
where
    E: AsDynError + ?Sized,
{
    error?.as_dyn_error().downcast_ref::<Breadcrumb>()?.frame()
}

/// Renders `error` at full verbosity.
///
/// Breadcrumbs render every level followed by its frame. Other errors render their `Display`
/// output, and `None` renders as an empty string.
#[must_use]
pub fn detail<E>(error: Option<&E>) -> String
where
    E: AsDynError + ?Sized,
{
    let Some(error) = error.map(AsDynError::as_dyn_error) else {
        return String::new();
    };

    match error.downcast_ref::<Breadcrumb>() {
        Some(node) => node.detail(),
        None => error.to_string(),
    }
}
