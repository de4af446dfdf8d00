//! Text input state for the numbers box.

use rand::Rng;

use crate::{parse_numbers, NumericSequence, ParseError};

/// Inline message shown when a submit fails to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter valid numbers.";

/// Smallest array [`random_sequence`] produces.
pub const MIN_GENERATED_SIZE: usize = 10;
/// Largest array [`random_sequence`] produces.
pub const MAX_GENERATED_SIZE: usize = 150;
/// Size used when the caller has no preference.
pub const DEFAULT_GENERATED_SIZE: usize = 50;

/// Generate `size` random whole numbers in `10..100`.
///
/// `size` is clamped to `MIN_GENERATED_SIZE..=MAX_GENERATED_SIZE`. The
/// caller supplies the RNG, so seeded generators give repeatable arrays.
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use sortview_core::random_sequence;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let numbers = random_sequence(20, &mut rng);
/// assert_eq!(numbers.len(), 20);
/// assert!(numbers.as_slice().iter().all(|n| (10.0..100.0).contains(n)));
/// ```
pub fn random_sequence<R: Rng + ?Sized>(size: usize, rng: &mut R) -> NumericSequence {
    let size = size.clamp(MIN_GENERATED_SIZE, MAX_GENERATED_SIZE);
    let values = (0..size).map(|_| f64::from(rng.gen_range(10u32..100))).collect();
    NumericSequence::from_checked(values)
}

/// What submitting an empty buffer does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EmptyInputPolicy {
    /// Fail with [`ParseError::Empty`] so the user gets feedback
    #[default]
    Reject,
    /// Treat it as "no change": nothing is parsed and no error is set
    Ignore,
}

/// Outcome of a successful [`InputBuffer::submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// A new sequence was accepted
    Accepted(NumericSequence),
    /// Empty input was ignored under [`EmptyInputPolicy::Ignore`]
    Unchanged,
}

/// Editable input text plus the last accepted sequence.
///
/// A failed submit keeps the text and records the error. A successful
/// submit clears both and replaces the accepted sequence. The previously
/// accepted sequence is never touched by a failed submit.
#[derive(Clone, Debug, Default)]
pub struct InputBuffer {
    text: String,
    error: Option<ParseError>,
    accepted: Option<NumericSequence>,
    policy: EmptyInputPolicy,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EmptyInputPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Replace the editable text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn policy(&self) -> EmptyInputPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: EmptyInputPolicy) {
        self.policy = policy;
    }

    /// The error from the last failed submit, if any.
    #[inline]
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Inline message for the last failed submit.
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|err| format!("{INVALID_INPUT_MESSAGE} ({err})"))
    }

    /// The last successfully parsed sequence.
    #[inline]
    pub fn accepted(&self) -> Option<&NumericSequence> {
        self.accepted.as_ref()
    }

    /// Parse the current text.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sortview_core::{InputBuffer, Submission};
    ///
    /// let mut input = InputBuffer::new();
    /// input.set_text("5, 3, 1");
    /// assert!(matches!(input.submit(), Ok(Submission::Accepted(_))));
    /// assert_eq!(input.text(), "");
    ///
    /// input.set_text("5, x");
    /// assert!(input.submit().is_err());
    /// assert_eq!(input.text(), "5, x");
    /// assert_eq!(input.accepted().unwrap().as_slice(), &[5.0, 3.0, 1.0]);
    /// ```
    pub fn submit(&mut self) -> Result<Submission, ParseError> {
        if self.policy == EmptyInputPolicy::Ignore && self.text.trim().is_empty() {
            // Nothing failed, so an error from an earlier submit no longer applies
            self.error = None;
            return Ok(Submission::Unchanged);
        }

        match parse_numbers(&self.text) {
            Ok(seq) => {
                self.text.clear();
                self.error = None;
                self.accepted = Some(seq.clone());
                Ok(Submission::Accepted(seq))
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected numeric input");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Replace the accepted sequence with a random one.
    ///
    /// Clears the text and any pending error, like a successful submit.
    pub fn generate<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) -> NumericSequence {
        let seq = random_sequence(size, rng);
        tracing::debug!(len = seq.len(), "generated random input");
        self.text.clear();
        self.error = None;
        self.accepted = Some(seq.clone());
        seq
    }
}
