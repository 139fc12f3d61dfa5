// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;

use crate::{BoxError, Breadcrumb};

/// Annotates the error side of a [`Result`] at the caller's location.
///
/// The methods are `#[track_caller]`, so the captured frame is the line where they are called.
///
/// # Examples
///
/// ```rust
/// use breadcrumb::{Breadcrumb, ResultExt};
///
/// fn read_config() -> Result<String, Breadcrumb> {
///     std::fs::read_to_string("/definitely/not/here.toml").wrap_msg("failed to read config")
/// }
///
/// let error = read_config().unwrap_err();
/// assert!(error.to_string().starts_with("failed to read config: "));
/// ```
pub trait ResultExt<T> {
    /// Adopts the error into a [`Breadcrumb`] without adding a message.
    ///
    /// # Errors
    ///
    /// Returns the original error as the base of a new chain, or unchanged if it already is one.
    fn breadcrumb(self) -> Result<T, Breadcrumb>;

    /// Layers `outer` on top of the error.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap_err<O>(self, outer: O) -> Result<T, Breadcrumb>
    where
        O: Into<BoxError>;

    /// Layers a message on top of the error.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap_msg(self, message: impl Into<Cow<'static, str>>) -> Result<T, Breadcrumb>;

    /// Layers a lazily built message on top of the error. `f` only runs on the error path.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap_msg_with<F, R>(self, f: F) -> Result<T, Breadcrumb>
    where
        F: FnOnce() -> R,
        R: Into<Cow<'static, str>>;
}

// Closures do not inherit `#[track_caller]`, so these match instead of using `map_err`.
impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn breadcrumb(self) -> Result<T, Breadcrumb> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Breadcrumb::new(error)),
        }
    }

    #[track_caller]
    fn wrap_err<O>(self, outer: O) -> Result<T, Breadcrumb>
    where
        O: Into<BoxError>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Breadcrumb::new(error).wrap(outer)),
        }
    }

    #[track_caller]
    fn wrap_msg(self, message: impl Into<Cow<'static, str>>) -> Result<T, Breadcrumb> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Breadcrumb::new(error).wrap_msg(message)),
        }
    }

    #[track_caller]
    fn wrap_msg_with<F, R>(self, f: F) -> Result<T, Breadcrumb>
    where
        F: FnOnce() -> R,
        R: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Breadcrumb::new(error).wrap_msg(f())),
        }
    }
}
