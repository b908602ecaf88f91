//! WASM bindings for the matins comparison transforms.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p matins-wasm
//! ```
//!
//! The page fetches `materials.bin.zst`, hands the bytes to [`Dashboard::new`]
//! and passes each chart's JSON output straight to the charting library.

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use matins::{ChartKind, CompareConfig, Explorer, decode_store};

fn to_js(e: matins::MatinsError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

fn strings(array: &Array) -> Result<Vec<String>, JsError> {
    array
        .iter()
        .map(|v| {
            v.as_string()
                .ok_or_else(|| JsError::new("selection entries must be strings"))
        })
        .collect()
}

fn parse_chart(chart: &str) -> Result<ChartKind, JsError> {
    match chart.to_lowercase().as_str() {
        "radar" => Ok(ChartKind::Radar),
        "heatmap" | "heat-map" => Ok(ChartKind::Heatmap),
        "parallel" | "parallel-coordinates" => Ok(ChartKind::ParallelCoordinates),
        _ => Err(JsError::new(&format!("unknown chart: {chart}"))),
    }
}

/// A dashboard session over one decoded store.
#[wasm_bindgen]
pub struct Dashboard {
    explorer: Explorer,
}

#[wasm_bindgen]
impl Dashboard {
    /// `config_json` may be empty for the defaults, or a partial
    /// comparison config.
    #[wasm_bindgen(constructor)]
    pub fn new(store_bytes: &[u8], config_json: &str) -> Result<Dashboard, JsError> {
        let config = if config_json.trim().is_empty() {
            CompareConfig::default()
        } else {
            CompareConfig::from_json(config_json).map_err(to_js)?
        };
        let store = decode_store(store_bytes).map_err(to_js)?;
        let explorer = Explorer::from_store(&store, config).map_err(to_js)?;
        Ok(Dashboard { explorer })
    }

    // ── Picker choices ──

    /// Numeric property names, in table order.
    #[wasm_bindgen(js_name = numericColumns)]
    pub fn numeric_columns(&self) -> Array {
        self.explorer
            .numeric_columns()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Properties pre-selected for a chart.
    #[wasm_bindgen(js_name = defaultProperties)]
    pub fn default_properties(&self, chart: &str) -> Result<Array, JsError> {
        let kind = parse_chart(chart)?;
        Ok(self
            .explorer
            .default_properties(kind)
            .into_iter()
            .map(JsValue::from_str)
            .collect())
    }

    /// Distinct formulas under the current filter.
    #[wasm_bindgen(js_name = entityChoices)]
    pub fn entity_choices(&self, formula_filter: &str) -> Array {
        self.explorer
            .entity_choices(formula_filter)
            .iter()
            .map(|s| JsValue::from_str(s))
            .collect()
    }

    // ── Charts ──

    /// Scatter points as JSON. Empty `x`/`y` select the default axes.
    pub fn scatter(&self, formula_filter: &str, x: &str, y: &str) -> Result<String, JsError> {
        let axes = self.explorer.default_axes();
        let x = if x.is_empty() { axes.x.as_str() } else { x };
        let y = if y.is_empty() { axes.y.as_str() } else { y };
        to_json(&self.explorer.scatter(formula_filter, x, y).map_err(to_js)?)
    }

    /// Radar series as JSON: `{status: "ready", data}` or guidance/message.
    pub fn radar(
        &self,
        formula_filter: &str,
        entities: &Array,
        properties: &Array,
    ) -> Result<String, JsError> {
        let outcome = self
            .explorer
            .radar(formula_filter, &strings(entities)?, &strings(properties)?)
            .map_err(to_js)?;
        to_json(&outcome)
    }

    pub fn heatmap(
        &self,
        formula_filter: &str,
        entities: &Array,
        properties: &Array,
    ) -> Result<String, JsError> {
        let outcome = self
            .explorer
            .heatmap(formula_filter, &strings(entities)?, &strings(properties)?)
            .map_err(to_js)?;
        to_json(&outcome)
    }

    pub fn parallel(
        &self,
        formula_filter: &str,
        entities: &Array,
        properties: &Array,
    ) -> Result<String, JsError> {
        let outcome = self
            .explorer
            .parallel(formula_filter, &strings(entities)?, &strings(properties)?)
            .map_err(to_js)?;
        to_json(&outcome)
    }
}
