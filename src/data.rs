//! Core data structures for sort runs and their frames.

use std::ops::Range;
use std::time::Duration;

use crate::{ParseError, RunError};

/// An ordered sequence of finite numbers accepted from user input.
///
/// Construct one with [`parse_numbers`](crate::parse_numbers) or
/// [`NumericSequence::new`]; both reject `NaN` and infinities.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NumericSequence(Vec<f64>);

impl NumericSequence {
    /// Wrap already-parsed values, rejecting any non-finite element.
    pub fn new(values: Vec<f64>) -> Result<Self, ParseError> {
        if let Some(position) = values.iter().position(|v| !v.is_finite()) {
            return Err(ParseError::NotFinite {
                position,
                token: values[position].to_string(),
            });
        }
        Ok(Self(values))
    }

    /// Wrap values the parser has already checked.
    pub(crate) fn from_checked(values: Vec<f64>) -> Self {
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self(values)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<NumericSequence> for Vec<f64> {
    fn from(seq: NumericSequence) -> Self {
        seq.0
    }
}

/// Metadata returned alongside a sort run.
///
/// None of these values take part in playback; they are carried through
/// for display.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMetadata {
    /// Number of array accesses the algorithm reported
    pub array_accesses: Option<u64>,
    /// Time the backend spent sorting
    pub duration: Option<Duration>,
    /// Raw status string from the service
    pub status: Option<String>,
}

/// The result of one remote sort invocation.
///
/// `flat_result` is the concatenation of every intermediate frame, frame 0
/// first. Each frame is `frame_length` elements long.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortRun {
    /// All frames packed back to back
    pub flat_result: Vec<f64>,
    /// Elements per frame
    pub frame_length: usize,
    /// Pass-through display metadata
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: RunMetadata,
}

impl SortRun {
    /// Create a run without metadata.
    pub fn new(flat_result: Vec<f64>, frame_length: usize) -> Self {
        Self {
            flat_result,
            frame_length,
            metadata: RunMetadata::default(),
        }
    }

    /// Attach display metadata.
    pub fn with_metadata(mut self, metadata: RunMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Check the packing contract and return the number of frames.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sortview_core::{RunError, SortRun};
    ///
    /// assert_eq!(SortRun::new(vec![3.0, 1.0, 1.0, 3.0], 2).total_frames(), Ok(2));
    /// assert!(matches!(
    ///     SortRun::new(vec![1.0, 2.0, 3.0], 2).total_frames(),
    ///     Err(RunError::LengthMismatch { .. })
    /// ));
    /// ```
    pub fn total_frames(&self) -> Result<usize, RunError> {
        if self.frame_length == 0 {
            return Err(RunError::ZeroFrameLength {
                len: self.flat_result.len(),
            });
        }
        let len = self.flat_result.len();
        let remainder = len % self.frame_length;
        if remainder != 0 {
            return Err(RunError::LengthMismatch {
                len,
                frame_length: self.frame_length,
                remainder,
            });
        }
        Ok(len / self.frame_length)
    }

    /// Get a frame by index, if it exists.
    ///
    /// Returns None for out-of-range indices and for malformed runs.
    pub fn frame(&self, index: usize) -> Option<&[f64]> {
        let total = self.total_frames().ok()?;
        if index >= total {
            return None;
        }
        Some(&self.flat_result[Window::for_step(index, self.frame_length).range()])
    }
}

/// Half-open `[start, end)` index range into a run's flat result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// The window covering frame `step`.
    #[inline]
    pub fn for_step(step: usize, frame_length: usize) -> Self {
        let start = step * frame_length;
        Self {
            start,
            end: start + frame_length,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
