//! Session state tying input, algorithm choice, and playback together.
//!
//! This module provides the lifecycle glue a UI shell needs:
//! 1. Accept numbers through an [`InputBuffer`]
//! 2. Pick an algorithm from the service catalog
//! 3. Request a sort run and load it into the [`FramePlayer`]
//!
//! Accepting new numbers or switching algorithm invalidates the loaded run.
//! Each request carries a generation number; a response that arrives after
//! the session has moved on is dropped instead of loaded.

use rand::Rng;

use crate::{
    FramePlayer, InputBuffer, NumericSequence, ParseError, RunError, ServiceError, SortRun,
    SortService, Submission,
};

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// No numbers have been accepted yet
    #[error("Enter some numbers to sort first")]
    NoInput,
    /// No algorithm has been selected yet
    #[error("Select a sorting algorithm first")]
    NoAlgorithm,
}

/// Request lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// Nothing requested for the current input and algorithm
    #[default]
    Idle,
    /// Waiting for the service
    Pending,
    /// The player holds the run for the current input and algorithm
    Ready,
    /// The last request failed
    Failed,
}

/// A sort request issued by [`Session::begin_request`].
#[derive(Clone, Debug, PartialEq)]
pub struct SortRequest {
    /// Generation this request belongs to
    pub id: u64,
    pub algorithm: String,
    pub numbers: NumericSequence,
}

/// What [`Session::complete`] did with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The run was loaded into the player
    Loaded,
    /// The response belonged to an older request and was dropped
    Stale,
}

/// Input, algorithm selection, and player for one visualizer.
#[derive(Clone, Debug, Default)]
pub struct Session {
    input: InputBuffer,
    catalog: Vec<String>,
    algorithm: Option<String>,
    player: FramePlayer,
    generation: u64,
    phase: RequestPhase,
    last_error: Option<SessionError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from preconfigured components.
    pub fn with_parts(input: InputBuffer, player: FramePlayer) -> Self {
        Self {
            input,
            player,
            ..Self::default()
        }
    }

    #[inline]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Mutable access for editing the text box.
    #[inline]
    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    #[inline]
    pub fn player(&self) -> &FramePlayer {
        &self.player
    }

    /// Mutable access for navigation.
    #[inline]
    pub fn player_mut(&mut self) -> &mut FramePlayer {
        &mut self.player
    }

    #[inline]
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    #[inline]
    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    #[inline]
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: Vec<String>) {
        self.catalog = catalog;
    }

    /// Fetch the algorithm catalog from the service.
    pub async fn refresh_catalog<S: SortService>(&mut self, service: &S) -> Result<(), SessionError> {
        match service.algorithms().await {
            Ok(catalog) => {
                self.catalog = catalog;
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Select an algorithm, invalidating the loaded run if it changed.
    pub fn select_algorithm(&mut self, algorithm: impl Into<String>) {
        let algorithm = algorithm.into();
        if self.algorithm.as_deref() == Some(algorithm.as_str()) {
            return;
        }
        tracing::debug!(%algorithm, "algorithm selected");
        self.algorithm = Some(algorithm);
        self.invalidate();
    }

    /// The numbers that will be sent on the next request.
    pub fn numbers(&self) -> Option<&NumericSequence> {
        self.input.accepted()
    }

    /// Submit the input text, invalidating the loaded run on success.
    pub fn submit_input(&mut self) -> Result<Submission, SessionError> {
        match self.input.submit() {
            Ok(Submission::Accepted(seq)) => {
                self.invalidate();
                self.last_error = None;
                Ok(Submission::Accepted(seq))
            }
            Ok(Submission::Unchanged) => {
                if matches!(self.last_error, Some(SessionError::Parse(_))) {
                    self.last_error = None;
                }
                Ok(Submission::Unchanged)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Accept a random array of `size` numbers, as if the user had typed it.
    pub fn generate_input<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) -> NumericSequence {
        let seq = self.input.generate(size, rng);
        self.invalidate();
        self.last_error = None;
        seq
    }

    /// Drop the loaded run and any outstanding request.
    fn invalidate(&mut self) {
        self.player.unload();
        self.generation += 1;
        self.phase = RequestPhase::Idle;
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        self.last_error = Some(err.clone());
        err
    }

    /// Issue a request for the current numbers and algorithm.
    ///
    /// Any older request still in flight becomes stale.
    pub fn begin_request(&mut self) -> Result<SortRequest, SessionError> {
        let Some(numbers) = self.input.accepted().cloned() else {
            return Err(self.fail(SessionError::NoInput));
        };
        let Some(algorithm) = self.algorithm.clone() else {
            return Err(self.fail(SessionError::NoAlgorithm));
        };
        self.generation += 1;
        self.phase = RequestPhase::Pending;
        self.last_error = None;
        Ok(SortRequest {
            id: self.generation,
            algorithm,
            numbers,
        })
    }

    /// Hand the outcome of `request` back to the session.
    ///
    /// A failed call or a malformed run leaves the player as it was.
    pub fn complete(
        &mut self,
        request: &SortRequest,
        result: Result<SortRun, ServiceError>,
    ) -> Result<Completion, SessionError> {
        if request.id != self.generation {
            tracing::debug!(
                request = request.id,
                current = self.generation,
                "dropping stale sort response"
            );
            return Ok(Completion::Stale);
        }

        let loaded = result
            .map_err(SessionError::from)
            .and_then(|run| self.player.load(run).map_err(SessionError::from));

        match loaded {
            Ok(()) => {
                self.phase = RequestPhase::Ready;
                Ok(Completion::Loaded)
            }
            Err(err) => {
                tracing::warn!(error = %err, algorithm = %request.algorithm, "sort request failed");
                self.phase = RequestPhase::Failed;
                Err(self.fail(err))
            }
        }
    }

    /// Request, await, and load a run in one go.
    pub async fn run<S: SortService>(&mut self, service: &S) -> Result<Completion, SessionError> {
        let request = self.begin_request()?;
        let result = service.sort(&request.algorithm, &request.numbers).await;
        self.complete(&request, result)
    }
}
