// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

use crate::{AsDynError, Breadcrumb};

/// Extension trait for matching against every value in an error chain.
///
/// [`source`](StdError::source) on a [`Breadcrumb`] only walks annotation levels. The methods
/// here walk the *value chain* instead: for each level, the error supplied at that level and
/// that error's own `source()` chain, then the level below. Breadcrumbs found anywhere along
/// the way are expanded the same way, and errors that are not breadcrumbs contribute
/// themselves followed by their sources.
///
/// Implemented for every error type and `dyn Error` trait object.
///
/// # Examples
///
/// ```rust
/// use breadcrumb::{Breadcrumb, ErrorExt};
///
/// let error = Breadcrumb::new(std::io::Error::other("disk full")).wrap_msg("saving report");
///
/// let io_error = error.find::<std::io::Error>().unwrap();
/// assert_eq!(io_error.to_string(), "disk full");
/// ```
pub trait ErrorExt: AsDynError {
    /// Iterates over every value in the chain, outermost first.
    fn values(&self) -> Values<'_> {
        Values::new(self.as_dyn_error())
    }

    /// Finds the first value of type `T` in the chain.
    fn find<T: StdError + 'static>(&self) -> Option<&T> {
        self.find_with(|_| true)
    }

    /// Finds the first value of type `T` in the chain that satisfies `search`.
    fn find_with<T: StdError + 'static>(&self, search: impl Fn(&T) -> bool) -> Option<&T> {
        self.values()
            .filter_map(|value| value.downcast_ref::<T>())
            .find(|value| search(value))
    }

    /// Returns `true` if any value in the chain is of type `T` and equal to `target`.
    fn contains<T: StdError + PartialEq + 'static>(&self, target: &T) -> bool {
        self.find_with(|value: &T| value == target).is_some()
    }
}

impl<E: AsDynError + ?Sized> ErrorExt for E {}

/// Iterator over the value chain of an error.
///
/// Created by [`ErrorExt::values`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    pending: Vec<&'a (dyn StdError + 'static)>,
}

impl<'a> Values<'a> {
    fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self { pending: vec![error] }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(error) = self.pending.pop() {
            if let Some(node) = error.downcast_ref::<Breadcrumb>() {
                // the value is visited before the level below it
                if let Some(previous) = node.previous() {
                    self.pending.push(previous);
                }
                self.pending.push(node.value());
            } else {
                if let Some(source) = error.source() {
                    self.pending.push(source);
                }
                return Some(error);
            }
        }

        None
    }
}

impl std::iter::FusedIterator for Values<'_> {}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;

    use super::*;
    use crate::Message;

    #[derive(Debug)]
    struct Coded {
        code: u32,
        source: Option<io::Error>,
    }

    impl fmt::Display for Coded {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "code {}", self.code)
        }
    }

    impl StdError for Coded {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_ref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    fn rendered<E: ErrorExt + ?Sized>(error: &E) -> Vec<String> {
        error.values().map(ToString::to_string).collect()
    }

    #[test]
    fn values_of_plain_error_follow_sources() {
        let error = Coded {
            code: 7,
            source: Some(io::Error::other("io")),
        };

        assert_eq!(rendered(&error), ["code 7", "io"]);
    }

    #[test]
    fn values_skip_breadcrumb_levels() {
        let error = Breadcrumb::msg("base").wrap_msg("middle").wrap_msg("outer");
        assert_eq!(rendered(&error), ["outer", "middle", "base"]);
    }

    #[test]
    fn values_descend_into_locals_before_previous() {
        let local = Coded {
            code: 1,
            source: Some(io::Error::other("inside")),
        };
        let error = Breadcrumb::msg("base").wrap(local);

        assert_eq!(rendered(&error), ["code 1", "inside", "base"]);
    }

    #[test]
    fn values_expand_nested_breadcrumbs() {
        let nested = Breadcrumb::msg("nested base").wrap_msg("nested outer");
        let error = Breadcrumb::msg("base").wrap(nested);

        assert_eq!(rendered(&error), ["nested outer", "nested base", "base"]);
    }

    #[test]
    fn find_by_type_at_any_depth() {
        let error = Breadcrumb::new(io::Error::other("root"))
            .wrap_msg("middle")
            .wrap(Coded { code: 3, source: None });

        assert_eq!(error.find::<Coded>().unwrap().code, 3);
        assert_eq!(error.find::<io::Error>().unwrap().to_string(), "root");
        assert_eq!(error.find::<Message>().unwrap().as_str(), "middle");
        assert!(error.find::<fmt::Error>().is_none());
    }

    #[test]
    fn find_with_predicate() {
        let error = Breadcrumb::msg("first").wrap_msg("second");

        let found = error.find_with(|m: &Message| m.as_str() == "first").unwrap();
        assert_eq!(found.as_str(), "first");
        assert!(error.find_with(|m: &Message| m.as_str() == "third").is_none());
    }

    #[test]
    fn contains_by_value() {
        let error = Breadcrumb::msg("inner").wrap_msg("outer");

        assert!(error.contains(&Message::new("inner")));
        assert!(error.contains(&Message::new("outer")));
        assert!(!error.contains(&Message::new("unknown")));
    }

    #[test]
    fn works_through_trait_objects() {
        let error: crate::BoxError = Box::new(Breadcrumb::msg("boxed").wrap_msg("outer"));

        assert!(error.contains(&Message::new("boxed")));
        assert_eq!(rendered(&*error), ["outer", "boxed"]);
    }
}
