//! # sortview-core
//!
//! Core input parsing and frame playback library for sorting algorithm
//! visualizers.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Parsing free-form numeric text into a validated array, or generating a random one
//! - Stepping forward and backward through the frames of a sort run
//! - Talking to a remote sort service (with optional HTTP support)
//! - Tying input, algorithm choice, and playback into one session
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization and the service wire payloads
//! - `toml` - Load [`ViewerConfig`] from TOML
//! - `http` - Enable the `reqwest`-backed [`http::HttpSortService`]
//! - `web` - Enable web/WASM bindings for the parser and player
//!
//! ## Example
//!
//! ```rust
//! use sortview_core::{parse_numbers, FramePlayer, SortRun};
//!
//! let numbers = parse_numbers("3, 1, 2").unwrap();
//!
//! // A run as returned by the sort service: every frame packed back to back
//! let run = SortRun::new(vec![3.0, 1.0, 2.0, 1.0, 3.0, 2.0, 1.0, 2.0, 3.0], numbers.len());
//!
//! let mut player = FramePlayer::new();
//! player.load(run).unwrap();
//! player.step_forward();
//!
//! let view = player.view();
//! assert_eq!(view.values, &[1.0, 3.0, 2.0]);
//! assert!(view.can_step_backward);
//! ```

mod config;
mod data;
mod input;
mod parser;
mod player;
pub mod service;
mod session;
mod view;

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "web")]
pub mod web;

pub use config::{ViewerConfig, DEFAULT_SERVICE_URL};
pub use data::{NumericSequence, RunMetadata, SortRun, Window};
pub use input::{
    random_sequence, EmptyInputPolicy, InputBuffer, Submission, DEFAULT_GENERATED_SIZE,
    INVALID_INPUT_MESSAGE, MAX_GENERATED_SIZE, MIN_GENERATED_SIZE,
};
pub use parser::{parse_numbers, ParseError, Separator};
pub use player::{
    FramePlayer, LoopMode, PlaybackMode, PlaybackState, PlayerState, RunError, DEFAULT_FPS,
};
pub use service::{ServiceError, SortService};
pub use session::{Completion, RequestPhase, Session, SessionError, SortRequest};
pub use view::FrameView;
