//! JavaScript bindings for the parser and player.
//!
//! These wrap the platform-agnostic types so a JS UI shell can keep one
//! player per chart and drive it from button handlers.

use wasm_bindgen::prelude::*;

use crate::{FramePlayer, LoopMode, SortRun};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Parse free-form numeric text. Throws with a readable message on failure.
#[wasm_bindgen(js_name = parseNumbers)]
pub fn parse_numbers(input: &str) -> Result<Vec<f64>, JsValue> {
    crate::parse_numbers(input)
        .map(Vec::from)
        .map_err(to_js_error)
}

/// [`FramePlayer`] exported to JavaScript.
#[wasm_bindgen(js_name = FramePlayer)]
#[derive(Default)]
pub struct WebFramePlayer {
    inner: FramePlayer,
}

#[wasm_bindgen(js_class = FramePlayer)]
impl WebFramePlayer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the `result` and `results_length` fields of a sort response.
    pub fn load(&mut self, result: Vec<f64>, results_length: usize) -> Result<(), JsValue> {
        self.inner
            .load(SortRun::new(result, results_length))
            .map_err(to_js_error)
    }

    pub fn unload(&mut self) {
        self.inner.unload();
    }

    #[wasm_bindgen(js_name = stepForward)]
    pub fn step_forward(&mut self) -> bool {
        self.inner.step_forward()
    }

    #[wasm_bindgen(js_name = stepBackward)]
    pub fn step_backward(&mut self) -> bool {
        self.inner.step_backward()
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&mut self, step: usize) -> bool {
        self.inner.go_to(step)
    }

    #[wasm_bindgen(js_name = currentFrame)]
    pub fn current_frame(&self) -> Vec<f64> {
        self.inner.current_frame().to_vec()
    }

    #[wasm_bindgen(getter, js_name = currentStep)]
    pub fn current_step(&self) -> usize {
        self.inner.current_step()
    }

    #[wasm_bindgen(getter, js_name = totalFrames)]
    pub fn total_frames(&self) -> usize {
        self.inner.total_frames()
    }

    #[wasm_bindgen(getter, js_name = canStepForward)]
    pub fn can_step_forward(&self) -> bool {
        self.inner.can_step_forward()
    }

    #[wasm_bindgen(getter, js_name = canStepBackward)]
    pub fn can_step_backward(&self) -> bool {
        self.inner.can_step_backward()
    }

    pub fn play(&mut self) {
        self.inner.play();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn tick(&mut self) -> bool {
        self.inner.tick()
    }

    #[wasm_bindgen(getter, js_name = intervalMs)]
    pub fn interval_ms(&self) -> u32 {
        self.inner.interval_ms()
    }

    #[wasm_bindgen(js_name = setFps)]
    pub fn set_fps(&mut self, fps: u32) {
        self.inner.set_fps(fps);
    }

    #[wasm_bindgen(js_name = setLooping)]
    pub fn set_looping(&mut self, looping: bool) {
        self.inner.set_loop_mode(if looping { LoopMode::Loop } else { LoopMode::Once });
    }
}
