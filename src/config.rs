use crate::player::DEFAULT_FPS;
use crate::{EmptyInputPolicy, FramePlayer, InputBuffer, LoopMode, Session};

/// Default base URL of the sort service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Viewer settings, typically from a `sortview.toml` file.
///
/// All fields are optional so older and newer files keep loading.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewerConfig {
    pub base_url: Option<String>,
    pub fps: Option<u32>,
    pub loop_playback: Option<bool>,
    pub empty_input: Option<EmptyInputPolicy>,
}

impl ViewerConfig {
    /// Parse a `sortview.toml` string into `ViewerConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }

    pub fn fps(&self) -> u32 {
        self.fps.unwrap_or(DEFAULT_FPS)
    }

    pub fn loop_mode(&self) -> LoopMode {
        if self.loop_playback.unwrap_or(false) {
            LoopMode::Loop
        } else {
            LoopMode::Once
        }
    }

    pub fn empty_input(&self) -> EmptyInputPolicy {
        self.empty_input.unwrap_or_default()
    }

    /// Apply playback settings to an existing player.
    pub fn apply(&self, player: &mut FramePlayer) {
        player.set_fps(self.fps());
        player.set_loop_mode(self.loop_mode());
    }

    pub fn player(&self) -> FramePlayer {
        let mut player = FramePlayer::with_fps(self.fps());
        player.set_loop_mode(self.loop_mode());
        player
    }

    pub fn input_buffer(&self) -> InputBuffer {
        InputBuffer::with_policy(self.empty_input())
    }

    /// Build a session with these settings.
    pub fn session(&self) -> Session {
        Session::with_parts(self.input_buffer(), self.player())
    }

    /// Build an HTTP client for the configured service.
    #[cfg(feature = "http")]
    pub fn http_service(&self) -> crate::http::HttpSortService {
        crate::http::HttpSortService::new(self.base_url())
    }
}
