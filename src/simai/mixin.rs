//! Mixin types attaching source spans to values.
//!
//! - `SourceRangeMixin` wraps a value with the byte span of the text it came from.
//! - `SourceRangeMixinExt` gives every type the `into_wrapper_range` constructor for it.

use std::ops::Range;

/// A generic wrapper that attaches a byte span of the chart text to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRangeMixin<T> {
    /// Wrapped content value
    content: T,
    /// Start index in the source string (0-based, inclusive)
    start: usize,
    /// End index in the source string (0-based, exclusive)
    end: usize,
}

impl<T> SourceRangeMixin<T> {
    /// Instances a new `SourceRangeMixin`.
    pub const fn new(content: T, start: usize, end: usize) -> Self {
        Self {
            content,
            start,
            end,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the start index of the source span.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end index of the source span.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the source span as a range.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Maps the content of the wrapper.
    pub fn map<U, F>(self, f: F) -> SourceRangeMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        SourceRangeMixin::new(f(self.content), self.start, self.end)
    }

    /// Moves the span forward by `offset` bytes.
    ///
    /// Used when text parsed on its own was sliced out of a larger source.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        Self::new(self.content, self.start + offset, self.end + offset)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceRangeMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at indices [{}, {})",
            self.content, self.start, self.end
        )
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceRangeMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for creating [`SourceRangeMixin`].
pub trait SourceRangeMixinExt {
    /// Instances a new `SourceRangeMixin` with a given range.
    fn into_wrapper_range(self, range: Range<usize>) -> SourceRangeMixin<Self>
    where
        Self: Sized,
    {
        SourceRangeMixin::new(self, range.start, range.end)
    }
}

impl<T> SourceRangeMixinExt for T {}
