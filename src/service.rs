//! Remote sort service boundary.
//!
//! The service runs the algorithm and returns every intermediate frame
//! packed into one array. This module defines the trait the rest of the
//! crate talks to and, with the `serde` feature, the JSON payloads.

use std::future::Future;

use crate::{NumericSequence, SortRun};

/// Path of the algorithm catalog endpoint.
pub const ALGORITHMS_PATH: &str = "/sort/algorithms";

/// Error type for sort service calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a usable response
    #[error("Sort service request failed: {0}")]
    Transport(String),
    /// The service answered with an error status
    #[error("Sort service rejected the request: {reason}")]
    Rejected { reason: String },
    /// The response was not shaped like a sort run
    #[error("Malformed sort service response: {0}")]
    Malformed(String),
}

/// Path of the sort endpoint for `algorithm`.
///
/// Catalog identifiers are capitalized ("Bubble"); the endpoint expects
/// them lower-cased.
pub fn sort_path(algorithm: &str) -> String {
    format!("/sort/{}", algorithm.trim().to_lowercase())
}

/// Trait for sort service clients.
///
/// Implement this trait over your transport (HTTP, fetch API, in-process
/// sorter). No `Send` bounds, so it works in single-threaded WASM contexts.
pub trait SortService {
    /// List the available algorithm identifiers.
    fn algorithms(&self) -> impl Future<Output = Result<Vec<String>, ServiceError>>;

    /// Sort `numbers` with `algorithm` and return every intermediate frame.
    fn sort(
        &self,
        algorithm: &str,
        numbers: &NumericSequence,
    ) -> impl Future<Output = Result<SortRun, ServiceError>>;
}

#[cfg(feature = "serde")]
pub use wire::{SortRequestBody, SortResponse};

#[cfg(feature = "serde")]
mod wire {
    use std::time::Duration;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Serialize, Serializer};

    use super::ServiceError;
    use crate::{NumericSequence, RunMetadata, SortRun};

    /// Largest magnitude sent as an integer; beyond this f64 loses precision.
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    /// JSON body of a sort request: `{"numbers": [...]}`.
    #[derive(Clone, Debug, Serialize)]
    pub struct SortRequestBody<'a> {
        #[serde(serialize_with = "serialize_numbers")]
        pub numbers: &'a [f64],
    }

    impl<'a> SortRequestBody<'a> {
        pub fn new(numbers: &'a NumericSequence) -> Self {
            Self {
                numbers: numbers.as_slice(),
            }
        }
    }

    /// Whole numbers go out as JSON integers, since the backend reads `i64`.
    fn serialize_numbers<S: Serializer>(numbers: &&[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(numbers.len()))?;
        for &n in numbers.iter() {
            if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
                seq.serialize_element(&(n as i64))?;
            } else {
                seq.serialize_element(&n)?;
            }
        }
        seq.end()
    }

    /// JSON body of a sort response.
    ///
    /// Success: `{status, result, results_length, array_accesses, duration}`.
    /// Failure: `{status: "error", reason}`.
    #[derive(Clone, Debug, Default, Deserialize)]
    pub struct SortResponse {
        pub status: Option<String>,
        pub result: Option<Vec<f64>>,
        pub results_length: Option<i64>,
        pub array_accesses: Option<u64>,
        pub duration: Option<Duration>,
        pub reason: Option<String>,
    }

    impl SortResponse {
        /// The service-level error this payload carries, if `status` is `"error"`.
        pub fn rejection(&self) -> Option<ServiceError> {
            (self.status.as_deref() == Some("error")).then(|| ServiceError::Rejected {
                reason: self
                    .reason
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }

        /// Convert into a [`SortRun`].
        ///
        /// Packing is not checked here; that is the player's job on load.
        pub fn into_run(self) -> Result<SortRun, ServiceError> {
            if let Some(err) = self.rejection() {
                return Err(err);
            }
            let flat_result = self
                .result
                .ok_or_else(|| ServiceError::Malformed("missing `result`".to_string()))?;
            let results_length = self
                .results_length
                .ok_or_else(|| ServiceError::Malformed("missing `results_length`".to_string()))?;
            let frame_length = usize::try_from(results_length).map_err(|_| {
                ServiceError::Malformed(format!("negative `results_length` {results_length}"))
            })?;

            Ok(SortRun::new(flat_result, frame_length).with_metadata(RunMetadata {
                array_accesses: self.array_accesses,
                duration: self.duration,
                status: self.status,
            }))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::ready;

    use super::*;

    /// In-memory service that replays queued responses.
    #[derive(Default)]
    pub(crate) struct ScriptedService {
        pub catalog: Vec<String>,
        pub responses: RefCell<VecDeque<Result<SortRun, ServiceError>>>,
        pub calls: RefCell<Vec<(String, Vec<f64>)>>,
    }

    impl ScriptedService {
        pub(crate) fn with_responses(
            responses: impl IntoIterator<Item = Result<SortRun, ServiceError>>,
        ) -> Self {
            Self {
                catalog: vec!["Bubble".into(), "Merge".into()],
                responses: RefCell::new(responses.into_iter().collect()),
                calls: RefCell::default(),
            }
        }
    }

    impl SortService for ScriptedService {
        fn algorithms(&self) -> impl Future<Output = Result<Vec<String>, ServiceError>> {
            ready(Ok(self.catalog.clone()))
        }

        fn sort(
            &self,
            algorithm: &str,
            numbers: &NumericSequence,
        ) -> impl Future<Output = Result<SortRun, ServiceError>> {
            self.calls
                .borrow_mut()
                .push((algorithm.to_string(), numbers.as_slice().to_vec()));
            let next = self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ServiceError::Transport("no scripted response".into())));
            ready(next)
        }
    }
}
