use std::fmt::Display;

use wasm_bindgen::prelude::*;

use super::{Settings, StormCore, TestArea};

fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
pub struct Hailstorm {
    core: StormCore,
}

#[wasm_bindgen]
impl Hailstorm {
    /// Parse hailstones from text lines or JSON records
    #[wasm_bindgen(constructor)]
    pub fn new(input: &str) -> Result<Hailstorm, JsValue> {
        let core = StormCore::from_input(input, Settings::default()).map_err(js_error)?;
        Ok(Hailstorm { core })
    }

    pub fn particle_count(&self) -> usize {
        self.core.particle_count()
    }

    pub fn set_test_area(&mut self, min_x: i64, max_x: i64, min_y: i64, max_y: i64) {
        self.core.set_test_area(TestArea { min_x, max_x, min_y, max_y });
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.core.set_parallel(parallel);
    }

    pub fn crossing_count(&self) -> Result<usize, JsValue> {
        self.core.crossing_count().map_err(js_error)
    }

    /// Sum of the rock's start coordinates, as a decimal string
    pub fn reconstruct_rock(&self) -> Result<String, JsValue> {
        let rock = self.core.reconstruct_rock().map_err(js_error)?;
        Ok(rock.position_sum().to_string())
    }

    pub fn particles_json(&self) -> Result<String, JsValue> {
        self.core.particles_json().map_err(js_error)
    }
}
