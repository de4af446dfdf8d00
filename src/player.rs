//! Frame player for stepping through a sort run.
//!
//! # Invariants
//!
//! 1. **Window consistency**: in `Ready`, after every transition
//!    `window == [current_step * frame_length, (current_step + 1) * frame_length)`,
//!    except for a run with zero frames, whose window is `[0, 0)`.
//! 2. **Progress bounds**: `0 <= current_step < total_frames` when non-empty.
//! 3. **Atomic load**: a rejected run leaves the previous state untouched.
//!
//! Navigation past either end is clamped and never an error.

use crate::{FrameView, SortRun, Window};

/// Default autoplay rate in frames per second.
pub const DEFAULT_FPS: u32 = 4;

/// Error type for runs that break the frame packing contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Frame length of zero
    #[error("Frame length must be positive, got 0 for a result of {len} elements")]
    ZeroFrameLength { len: usize },
    /// Flat result is not a whole number of frames
    #[error(
        "Result length {len} is not a multiple of frame length {frame_length} \
         ({remainder} trailing elements)"
    )]
    LengthMismatch {
        len: usize,
        frame_length: usize,
        remainder: usize,
    },
}

/// Loop mode for autoplay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LoopMode {
    /// Stop at the last frame
    #[default]
    Once,
    /// Rewind to the first frame after the last one
    Loop,
}

/// Autoplay state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Not advancing on its own
    #[default]
    Stopped,
    /// Advancing on every `tick()`
    Playing,
    /// Reached the last frame (LoopMode::Once, or a single-frame run)
    Finished,
}

/// Playback position over one loaded run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    run: SortRun,
    total_frames: usize,
    current_step: usize,
    window: Window,
}

impl PlaybackState {
    /// Validate `run` and position on its first frame.
    pub fn new(run: SortRun) -> Result<Self, RunError> {
        let total_frames = run.total_frames()?;
        let window = if total_frames == 0 {
            Window::default()
        } else {
            Window::for_step(0, run.frame_length)
        };
        Ok(Self {
            run,
            total_frames,
            current_step: 0,
            window,
        })
    }

    #[inline]
    pub fn run(&self) -> &SortRun {
        &self.run
    }

    #[inline]
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[inline]
    pub fn window(&self) -> Window {
        self.window
    }

    /// The elements inside the current window.
    #[inline]
    pub fn frame(&self) -> &[f64] {
        &self.run.flat_result[self.window.range()]
    }

    #[inline]
    pub fn last_step(&self) -> usize {
        self.total_frames.saturating_sub(1)
    }

    /// Slide the window one frame forward. Returns false at the last frame.
    fn step_forward(&mut self) -> bool {
        if self.total_frames == 0 || self.current_step == self.last_step() {
            return false;
        }
        self.current_step += 1;
        let start = self.window.end;
        self.window = Window {
            start,
            end: start + self.run.frame_length,
        };
        self.check_window();
        true
    }

    /// Slide the window one frame back. Returns false at the first frame.
    fn step_backward(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        let end = self.window.start;
        self.window = Window {
            start: end - self.run.frame_length,
            end,
        };
        self.check_window();
        true
    }

    /// Jump to `step`, clamped to the last frame.
    fn go_to(&mut self, step: usize) -> bool {
        if self.total_frames == 0 {
            return false;
        }
        let step = step.min(self.last_step());
        if step == self.current_step {
            return false;
        }
        self.current_step = step;
        self.window = Window::for_step(step, self.run.frame_length);
        true
    }

    #[inline]
    fn check_window(&self) {
        debug_assert_eq!(
            self.window,
            Window::for_step(self.current_step, self.run.frame_length)
        );
    }
}

/// Whether a run is loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlayerState {
    /// No run loaded
    #[default]
    Empty,
    /// A run is loaded and positioned
    Ready(PlaybackState),
}

/// Steps through the frames of a [`SortRun`].
///
/// The player owns exactly one [`PlaybackState`] at a time. `load` replaces
/// it wholesale; the step methods move it by one frame and clamp at both
/// ends. Autoplay is driven by the caller: call `tick()` at the rate given
/// by `interval_ms()`.
///
/// ## Example
///
/// ```rust
/// use sortview_core::{FramePlayer, SortRun};
///
/// let mut player = FramePlayer::new();
/// player
///     .load(SortRun::new(vec![3.0, 1.0, 2.0, 1.0, 3.0, 2.0, 1.0, 2.0, 3.0], 3))
///     .unwrap();
/// assert_eq!(player.total_frames(), 3);
/// assert_eq!(player.current_frame(), &[3.0, 1.0, 2.0]);
///
/// player.step_forward();
/// assert_eq!(player.current_frame(), &[1.0, 3.0, 2.0]);
///
/// // Clamped at the end
/// player.step_forward();
/// assert!(!player.step_forward());
/// assert_eq!(player.current_step(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FramePlayer {
    state: PlayerState,
    mode: PlaybackMode,
    loop_mode: LoopMode,
    fps: u32,
}

impl Default for FramePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePlayer {
    /// Create an empty player.
    pub fn new() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }

    /// Create an empty player with the given autoplay rate.
    pub fn with_fps(fps: u32) -> Self {
        Self {
            state: PlayerState::Empty,
            mode: PlaybackMode::Stopped,
            loop_mode: LoopMode::Once,
            fps: fps.max(1),
        }
    }

    /// Load a run, replacing any previous one and rewinding to step 0.
    ///
    /// On error nothing changes.
    pub fn load(&mut self, run: SortRun) -> Result<(), RunError> {
        let frame_length = run.frame_length;
        let playback = PlaybackState::new(run).map_err(|err| {
            tracing::warn!(error = %err, "rejected sort run");
            err
        })?;
        tracing::debug!(
            total_frames = playback.total_frames(),
            frame_length,
            "loaded sort run"
        );
        self.state = PlayerState::Ready(playback);
        self.mode = PlaybackMode::Stopped;
        Ok(())
    }

    /// Drop the loaded run.
    pub fn unload(&mut self) {
        self.state = PlayerState::Empty;
        self.mode = PlaybackMode::Stopped;
    }

    #[inline]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The playback state, if a run is loaded.
    #[inline]
    pub fn playback(&self) -> Option<&PlaybackState> {
        match &self.state {
            PlayerState::Ready(playback) => Some(playback),
            PlayerState::Empty => None,
        }
    }

    #[inline]
    fn playback_mut(&mut self) -> Option<&mut PlaybackState> {
        match &mut self.state {
            PlayerState::Ready(playback) => Some(playback),
            PlayerState::Empty => None,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, PlayerState::Ready(_))
    }

    /// The loaded run, if any.
    pub fn run(&self) -> Option<&SortRun> {
        self.playback().map(PlaybackState::run)
    }

    /// Get the total number of frames (0 when empty).
    pub fn total_frames(&self) -> usize {
        self.playback().map_or(0, PlaybackState::total_frames)
    }

    /// Get the current step (0 when empty).
    pub fn current_step(&self) -> usize {
        self.playback().map_or(0, PlaybackState::current_step)
    }

    /// Get the elements per frame (0 when empty).
    pub fn frame_length(&self) -> usize {
        self.run().map_or(0, |run| run.frame_length)
    }

    /// Get the current window (`[0, 0)` when empty).
    pub fn window(&self) -> Window {
        self.playback().map_or_else(Window::default, PlaybackState::window)
    }

    /// The currently visible frame; empty when nothing is loaded.
    pub fn current_frame(&self) -> &[f64] {
        match self.playback() {
            Some(playback) => playback.frame(),
            None => &[],
        }
    }

    pub fn can_step_forward(&self) -> bool {
        self.playback()
            .is_some_and(|p| p.current_step() + 1 < p.total_frames())
    }

    pub fn can_step_backward(&self) -> bool {
        self.current_step() > 0
    }

    /// Step forward one frame (manual stepping).
    ///
    /// Pauses autoplay and clears `Finished`. Returns false if already on the last frame or if
    /// nothing is loaded.
    pub fn step_forward(&mut self) -> bool {
        self.interrupt();
        let moved = self.playback_mut().is_some_and(PlaybackState::step_forward);
        if !moved {
            tracing::trace!(step = self.current_step(), "step forward clamped");
        }
        moved
    }

    /// Step backward one frame (manual stepping).
    ///
    /// Pauses autoplay and clears `Finished`. Returns false if already on the first frame.
    pub fn step_backward(&mut self) -> bool {
        self.interrupt();
        let moved = self.playback_mut().is_some_and(PlaybackState::step_backward);
        if !moved {
            tracing::trace!(step = self.current_step(), "step backward clamped");
        }
        moved
    }

    /// Jump to a step, clamped to the last frame.
    ///
    /// Like the step methods, this pauses autoplay and clears `Finished`,
    /// so a later `play()` resumes from the chosen step.
    pub fn go_to(&mut self, step: usize) -> bool {
        self.interrupt();
        self.playback_mut().is_some_and(|p| p.go_to(step))
    }

    /// Manual navigation takes over from autoplay.
    fn interrupt(&mut self) {
        self.mode = PlaybackMode::Stopped;
    }

    /// Jump to the first frame.
    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    /// Jump to the last frame.
    pub fn last(&mut self) -> bool {
        let last = self.playback().map_or(0, PlaybackState::last_step);
        self.go_to(last)
    }

    /// Seek to a fraction (0.0 - 1.0) of the way through the run.
    pub fn seek(&mut self, fraction: f64) -> bool {
        let Some(last) = self.playback().map(PlaybackState::last_step) else {
            return false;
        };
        let fraction = if fraction.is_nan() { 0.0 } else { fraction };
        let target = (fraction.clamp(0.0, 1.0) * last as f64).round() as usize;
        self.go_to(target)
    }

    /// Get the current position as a fraction (0.0 - 1.0) of the run.
    pub fn position(&self) -> f64 {
        match self.playback() {
            Some(p) if p.last_step() > 0 => p.current_step() as f64 / p.last_step() as f64,
            _ => 0.0,
        }
    }

    /// Build a snapshot for the renderer.
    pub fn view(&self) -> FrameView<'_> {
        FrameView::new(self)
    }

    /// Set the autoplay FPS.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Get the interval in milliseconds between autoplay ticks.
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        (1000.0 / self.fps as f64).max(1.0) as u32
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
        if mode == LoopMode::Loop && self.mode == PlaybackMode::Finished {
            self.mode = PlaybackMode::Stopped;
        }
    }

    #[inline]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    #[inline]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    /// Start or resume autoplay.
    ///
    /// A finished run restarts from the first frame.
    pub fn play(&mut self) {
        if self.total_frames() == 0 {
            return;
        }
        if self.mode == PlaybackMode::Finished {
            self.first();
        }
        self.mode = PlaybackMode::Playing;
    }

    /// Pause autoplay.
    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Stopped;
        }
    }

    /// Toggle play/pause.
    pub fn toggle(&mut self) {
        match self.mode {
            PlaybackMode::Playing => self.pause(),
            PlaybackMode::Stopped | PlaybackMode::Finished => self.play(),
        }
    }

    /// Advance autoplay by one frame.
    ///
    /// Call this from your timer at the rate returned by `interval_ms()`.
    /// Returns true if the visible frame changed.
    ///
    /// A run with a single frame has nothing to animate: the first tick
    /// finishes playback in either loop mode.
    pub fn tick(&mut self) -> bool {
        if self.mode != PlaybackMode::Playing {
            return false;
        }
        let loop_mode = self.loop_mode;
        let Some(playback) = self.playback_mut() else {
            return false;
        };
        if playback.step_forward() {
            return true;
        }
        if loop_mode == LoopMode::Loop && playback.total_frames() > 1 {
            return playback.go_to(0);
        }
        self.mode = PlaybackMode::Finished;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run with `frames` frames of length `frame_length`; element i holds i.
    fn sequential_run(frames: usize, frame_length: usize) -> SortRun {
        SortRun::new(
            (0..frames * frame_length).map(|i| i as f64).collect(),
            frame_length,
        )
    }

    fn assert_window_consistent(player: &FramePlayer) {
        let f = player.frame_length();
        let step = player.current_step();
        let window = player.window();
        assert_eq!(window, Window::for_step(step, f));
        let run = player.run().unwrap();
        assert_eq!(player.current_frame(), &run.flat_result[window.range()]);
    }

    #[test]
    fn test_empty_player() {
        let mut player = FramePlayer::new();
        assert_eq!(player.state(), &PlayerState::Empty);
        assert!(player.current_frame().is_empty());
        assert_eq!(player.total_frames(), 0);
        assert!(!player.step_forward());
        assert!(!player.step_backward());
        assert!(!player.can_step_forward());
        assert!(!player.can_step_backward());
    }

    #[test]
    fn test_load_invariant() {
        for (f, k) in [(1, 1), (3, 4), (5, 2), (2, 0)] {
            let mut player = FramePlayer::new();
            player.load(sequential_run(k, f)).unwrap();
            assert_eq!(player.total_frames(), k);
            assert_eq!(player.current_step(), 0);
            let expected_len = if k == 0 { 0 } else { f };
            assert_eq!(player.current_frame().len(), expected_len);
        }
    }

    #[test]
    fn test_zero_frame_run_is_safe() {
        let mut player = FramePlayer::new();
        player.load(SortRun::new(vec![], 4)).unwrap();
        assert!(player.is_ready());
        assert_eq!(player.window(), Window::default());
        assert!(!player.step_forward());
        assert!(!player.step_backward());
        assert!(!player.last());
        assert!(player.current_frame().is_empty());
        player.play();
        assert_eq!(player.mode(), PlaybackMode::Stopped);
    }

    #[test]
    fn test_window_consistency_under_navigation() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(5, 3)).unwrap();

        // Deterministic walk that hits both ends repeatedly
        let moves = [1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1];
        for forward in moves {
            if forward == 1 {
                player.step_forward();
            } else {
                player.step_backward();
            }
            assert_window_consistent(&player);
        }
    }

    #[test]
    fn test_forward_clamps_at_end() {
        let total = 4;
        let mut player = FramePlayer::new();
        player.load(sequential_run(total, 2)).unwrap();

        for _ in 0..total {
            player.step_forward();
        }
        assert_eq!(player.current_step(), total - 1);
        assert!(!player.can_step_forward());

        let before = player.playback().cloned();
        assert!(!player.step_forward());
        assert_eq!(player.playback().cloned(), before);
    }

    #[test]
    fn test_backward_clamps_at_start() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(3, 2)).unwrap();

        let before = player.playback().cloned();
        assert!(!player.step_backward());
        assert_eq!(player.playback().cloned(), before);
        assert_eq!(player.current_frame(), &[0.0, 1.0]);
    }

    #[test]
    fn test_contract_violation() {
        let mut player = FramePlayer::new();
        let err = player
            .load(SortRun::new(vec![1.0, 2.0, 3.0], 2))
            .unwrap_err();
        assert!(matches!(err, RunError::LengthMismatch { .. }));
        assert!(err.to_string().contains("length 3"));
        assert_eq!(player.state(), &PlayerState::Empty);

        assert!(matches!(
            player.load(SortRun::new(vec![1.0], 0)),
            Err(RunError::ZeroFrameLength { .. })
        ));
    }

    #[test]
    fn test_failed_load_preserves_ready_state() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(4, 2)).unwrap();
        player.step_forward();
        player.step_forward();

        assert!(player.load(SortRun::new(vec![1.0; 5], 2)).is_err());
        assert_eq!(player.current_step(), 2);
        assert_eq!(player.current_frame(), &[4.0, 5.0]);
    }

    #[test]
    fn test_reload_resets() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(6, 2)).unwrap();
        for _ in 0..3 {
            player.step_forward();
        }
        assert_eq!(player.current_step(), 3);

        player.load(sequential_run(2, 3)).unwrap();
        assert_eq!(player.current_step(), 0);
        assert_eq!(player.window(), Window { start: 0, end: 3 });
        assert_eq!(player.current_frame(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_go_to_and_seek() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(11, 1)).unwrap();

        assert!(player.go_to(7));
        assert_window_consistent(&player);
        assert!(player.go_to(100));
        assert_eq!(player.current_step(), 10);

        player.seek(0.5);
        assert_eq!(player.current_step(), 5);
        assert!((player.position() - 0.5).abs() < f64::EPSILON);

        player.first();
        assert_eq!(player.current_step(), 0);
        player.last();
        assert_eq!(player.current_step(), 10);
        assert_window_consistent(&player);
    }

    #[test]
    fn test_autoplay_once() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(3, 2)).unwrap();
        player.play();
        assert!(player.is_playing());

        assert!(player.tick());
        assert!(player.tick());
        assert!(!player.tick());
        assert_eq!(player.current_step(), 2);
        assert_eq!(player.mode(), PlaybackMode::Finished);

        // Playing again restarts from the first frame
        player.play();
        assert_eq!(player.current_step(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_autoplay_loop() {
        let mut player = FramePlayer::new();
        player.set_loop_mode(LoopMode::Loop);
        player.load(sequential_run(3, 1)).unwrap();
        player.play();

        for _ in 0..4 {
            player.tick();
        }
        // 0 -> 1 -> 2 -> 0 -> 1
        assert_eq!(player.current_step(), 1);
        assert!(player.is_playing());
        assert_window_consistent(&player);
    }

    #[test]
    fn test_manual_step_pauses() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(3, 1)).unwrap();
        player.play();
        player.step_forward();
        assert_eq!(player.mode(), PlaybackMode::Stopped);
        assert!(!player.tick());
    }

    #[test]
    fn test_load_stops_autoplay() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(3, 1)).unwrap();
        player.play();
        player.load(sequential_run(2, 1)).unwrap();
        assert_eq!(player.mode(), PlaybackMode::Stopped);
    }

    #[test]
    fn test_interval_ms() {
        assert_eq!(FramePlayer::new().interval_ms(), 250);
        assert_eq!(FramePlayer::with_fps(24).interval_ms(), 41);
        assert_eq!(FramePlayer::with_fps(0).fps(), 1);
    }

    #[test]
    fn test_single_frame_loop_finishes() {
        let mut player = FramePlayer::new();
        player.set_loop_mode(LoopMode::Loop);
        player.load(sequential_run(1, 4)).unwrap();
        player.play();

        assert!(!player.tick());
        assert_eq!(player.mode(), PlaybackMode::Finished);
        assert!(!player.tick());
        assert_eq!(player.current_step(), 0);
    }

    #[test]
    fn test_jump_after_finish_keeps_position() {
        let mut player = FramePlayer::new();
        player.load(sequential_run(4, 1)).unwrap();
        player.play();
        while player.tick() {}
        assert_eq!(player.mode(), PlaybackMode::Finished);

        player.go_to(1);
        assert_eq!(player.mode(), PlaybackMode::Stopped);
        player.play();
        assert_eq!(player.current_step(), 1);
        assert!(player.is_playing());

        // Jumps pause autoplay too
        player.seek(1.0);
        assert_eq!(player.mode(), PlaybackMode::Stopped);
        player.play();
        player.first();
        assert_eq!(player.mode(), PlaybackMode::Stopped);
        player.play();
        player.last();
        assert!(!player.is_playing());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn expected_window(player: &FramePlayer) -> Window {
            if player.total_frames() == 0 {
                Window::default()
            } else {
                Window::for_step(player.current_step(), player.frame_length())
            }
        }

        proptest! {
            #[test]
            fn load_positions_on_first_frame(f in 1usize..16, k in 0usize..24) {
                let mut player = FramePlayer::new();
                player.load(sequential_run(k, f)).unwrap();
                prop_assert_eq!(player.total_frames(), k);
                prop_assert_eq!(player.current_step(), 0);
                prop_assert_eq!(player.current_frame().len(), if k == 0 { 0 } else { f });
            }

            #[test]
            fn non_multiple_lengths_are_rejected(f in 2usize..16, k in 0usize..24, extra in 1usize..16) {
                let extra = extra % f;
                prop_assume!(extra != 0);
                let mut player = FramePlayer::new();
                let run = SortRun::new(vec![0.0; f * k + extra], f);
                let rejected = matches!(player.load(run), Err(RunError::LengthMismatch { .. }));
                prop_assert!(rejected);
                prop_assert_eq!(player.state(), &PlayerState::Empty);
            }

            #[test]
            fn window_tracks_step(
                f in 1usize..8,
                k in 0usize..12,
                moves in prop::collection::vec(any::<bool>(), 0..200),
            ) {
                let mut player = FramePlayer::new();
                player.load(sequential_run(k, f)).unwrap();
                for forward in moves {
                    if forward {
                        player.step_forward();
                    } else {
                        player.step_backward();
                    }
                    let window = player.window();
                    prop_assert_eq!(window, expected_window(&player));
                    prop_assert!(player.current_step() < k.max(1));
                    let run = player.run().unwrap();
                    prop_assert_eq!(player.current_frame(), &run.flat_result[window.range()]);
                }
            }

            #[test]
            fn forward_clamps_at_last_frame(f in 1usize..8, k in 1usize..20, extra in 0usize..5) {
                let mut player = FramePlayer::new();
                player.load(sequential_run(k, f)).unwrap();
                for _ in 0..k {
                    player.step_forward();
                }
                prop_assert_eq!(player.current_step(), k - 1);

                let before = player.playback().cloned();
                for _ in 0..=extra {
                    prop_assert!(!player.step_forward());
                }
                prop_assert_eq!(player.playback().cloned(), before);
            }

            #[test]
            fn backward_clamps_at_first_frame(f in 1usize..8, k in 1usize..20, extra in 0usize..5) {
                let mut player = FramePlayer::new();
                player.load(sequential_run(k, f)).unwrap();
                player.last();
                for _ in 0..k + extra {
                    player.step_backward();
                }
                prop_assert_eq!(player.current_step(), 0);
                prop_assert_eq!(player.window(), Window::for_step(0, f));
            }

            #[test]
            fn jumps_keep_window_consistent(f in 1usize..8, k in 0usize..20, step in 0usize..40, fraction in 0.0f64..=1.0) {
                let mut player = FramePlayer::new();
                player.load(sequential_run(k, f)).unwrap();
                player.go_to(step);
                prop_assert_eq!(player.window(), expected_window(&player));
                player.seek(fraction);
                prop_assert_eq!(player.window(), expected_window(&player));
            }
        }
    }
}
