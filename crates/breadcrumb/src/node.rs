// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::builder::into_local;
use crate::{Frame, Message};

/// The boxed, thread-safe error type accepted and returned throughout this crate.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

const SEPARATOR: &str = ": ";

/// Level data, boxed to keep `Breadcrumb` pointer-sized.
struct Inner {
    local: BoxError,
    frame: Option<Frame>,
    previous: Option<Breadcrumb>,
}

/// An error annotated with a message and the call site where the annotation happened.
///
/// A `Breadcrumb` is one level of a singly-linked chain. Each level holds the error supplied at
/// that point (its *value*), an optional [`Frame`], and exclusive ownership of the level it was
/// layered on top of. Levels are immutable: [`wrap`](Self::wrap) consumes the inner level and
/// returns a new outer one.
///
/// Formatting follows the verbosity of the formatter:
///
/// | format  | output                                                    |
/// |---------|-----------------------------------------------------------|
/// | `{}`    | values joined with `": "`                                 |
/// | `{:#}`  | like `{}`, each value followed by its frame when captured |
/// | `{:?}`  | `{}` as a quoted, escaped string                          |
/// | `{:#?}` | structural dump of every level                            |
///
/// [`source`](StdError::source) walks the annotation chain one level at a time. To match against
/// the values stored in the levels, use [`ErrorExt`](crate::ErrorExt).
///
/// # Examples
///
/// ```rust
/// use breadcrumb::Breadcrumb;
///
/// let error = Breadcrumb::msg("base").wrap_msg("second error");
///
/// assert_eq!(error.to_string(), "second error: base");
/// assert_eq!(format!("{error:?}"), r#""second error: base""#);
/// ```
pub struct Breadcrumb {
    data: Box<Inner>,
}

impl Breadcrumb {
    /// Adopts `error` as the base of a new chain, capturing the caller's frame.
    ///
    /// If `error` is already a `Breadcrumb` it is returned as is, without a new level.
    #[track_caller]
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::adopt(into_local(error))
    }

    /// Creates a new chain whose base is a [`Message`].
    #[track_caller]
    #[must_use]
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::level(Box::new(Message::new(message)), None)
    }

    /// Layers `outer` on top of this chain, capturing the caller's frame.
    #[track_caller]
    #[must_use]
    pub fn wrap<E>(self, outer: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::level(into_local(outer), Some(self))
    }

    /// Layers a [`Message`] on top of this chain, capturing the caller's frame.
    #[track_caller]
    #[must_use]
    pub fn wrap_msg(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self::level(Box::new(Message::new(message)), Some(self))
    }

    #[track_caller]
    pub(crate) fn adopt(error: BoxError) -> Self {
        match error.downcast::<Self>() {
            Ok(node) => *node,
            Err(error) => Self::level(error, None),
        }
    }

    #[track_caller]
    pub(crate) fn level(local: BoxError, previous: Option<Self>) -> Self {
        Self {
            data: Box::new(Inner {
                local,
                frame: Frame::capture(),
                previous,
            }),
        }
    }

    /// Returns the error supplied at the outermost level.
    #[must_use]
    pub fn value(&self) -> &(dyn StdError + 'static) {
        &*self.data.local
    }

    /// Returns the frame of the outermost level, if one was captured.
    #[must_use]
    pub fn frame(&self) -> Option<Frame> {
        self.data.frame
    }

    /// Returns the level this one was layered on top of.
    #[must_use]
    pub fn previous(&self) -> Option<&Self> {
        self.data.previous.as_ref()
    }

    /// Iterates over the annotation chain, outermost level first.
    #[must_use]
    pub fn levels(&self) -> Levels<'_> {
        Levels { next: Some(self) }
    }

    /// Renders every level with its frame. Equivalent to `format!("{self:#}")`.
    #[must_use]
    pub fn detail(&self) -> String {
        format!("{self:#}")
    }

    /// Returns true if both handles refer to the same level.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(&*self.data, &*other.data)
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detailed = f.alternate();

        for (index, level) in self.levels().enumerate() {
            if index > 0 {
                f.write_str(SEPARATOR)?;
            }

            // values render at basic verbosity even when they are breadcrumbs themselves
            write!(f, "{}", level.data.local)?;

            if detailed && let Some(frame) = level.data.frame {
                write!(f, " {frame}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Breadcrumb")
                .field("local", &self.data.local)
                .field("frame", &self.data.frame)
                .field("previous", &self.data.previous)
                .finish()
        } else {
            fmt::Debug::fmt(&self.to_string(), f)
        }
    }
}

impl StdError for Breadcrumb {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.previous().map(|previous| previous as &(dyn StdError + 'static))
    }
}

/// Iterator over the levels of a [`Breadcrumb`], outermost first.
///
/// Created by [`Breadcrumb::levels`].
#[derive(Debug, Clone)]
pub struct Levels<'a> {
    next: Option<&'a Breadcrumb>,
}

impl<'a> Iterator for Levels<'a> {
    type Item = &'a Breadcrumb;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous();
        Some(current)
    }
}

impl std::iter::FusedIterator for Levels<'_> {}
