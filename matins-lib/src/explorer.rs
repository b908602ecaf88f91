use std::path::Path;

use matins_data::{MATERIALS_TABLE, MaterialsStore};
use tracing::info;

use crate::config::{ChartKind, CompareConfig};
use crate::dataset::{Dataset, entity_keys};
use crate::error::Result;
use crate::filter::filter_by_formula;
use crate::heatmap::{HeatmapMatrix, build_heatmap_matrix};
use crate::outcome::ChartOutcome;
use crate::parallel::{ParallelCoordinates, build_parallel_coordinates};
use crate::radar::{RadarSeries, build_radar_series};
use crate::scatter::{ScatterAxes, ScatterSeries, build_scatter};
use crate::store::{load_table, open_store};

/// One dashboard session: the `materials` table, loaded once, plus the
/// comparison settings.
///
/// Every query takes the current formula filter and recomputes from the
/// loaded table; nothing derived is kept between calls.
#[derive(Debug, Clone)]
pub struct Explorer {
    dataset: Dataset,
    config: CompareConfig,
    default_axes: ScatterAxes,
}

impl Explorer {
    /// Open a store file and load its `materials` table.
    pub fn open(path: impl AsRef<Path>, config: CompareConfig) -> Result<Self> {
        let store = open_store(path)?;
        Self::from_store(&store, config)
    }

    pub fn from_store(store: &MaterialsStore, config: CompareConfig) -> Result<Self> {
        Self::new(load_table(store, MATERIALS_TABLE)?, config)
    }

    /// Fails with `SchemaMismatch` when the table lacks a default scatter axis.
    pub fn new(dataset: Dataset, config: CompareConfig) -> Result<Self> {
        config.validate()?;
        let default_axes = ScatterAxes::default_for(dataset.schema())?;
        info!(
            rows = dataset.len(),
            columns = dataset.schema().len(),
            "materials table loaded"
        );
        Ok(Explorer {
            dataset,
            config,
            default_axes,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub fn default_axes(&self) -> &ScatterAxes {
        &self.default_axes
    }

    /// Property picker choices.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.dataset.schema().numeric_columns()
    }

    /// Pre-selected properties for a chart's picker.
    pub fn default_properties(&self, chart: ChartKind) -> Vec<&str> {
        let mut cols = self.numeric_columns();
        cols.truncate(chart.default_property_count());
        cols
    }

    pub fn view(&self, formula_filter: &str) -> Dataset {
        filter_by_formula(&self.dataset, formula_filter)
    }

    /// Material picker choices under the current filter.
    pub fn entity_choices(&self, formula_filter: &str) -> Vec<String> {
        let view = self.view(formula_filter);
        entity_keys(&view).into_iter().map(str::to_string).collect()
    }

    pub fn scatter(&self, formula_filter: &str, x: &str, y: &str) -> Result<ScatterSeries> {
        build_scatter(&self.view(formula_filter), x, y)
    }

    pub fn radar<E: AsRef<str>, P: AsRef<str>>(
        &self,
        formula_filter: &str,
        entities: &[E],
        properties: &[P],
    ) -> Result<ChartOutcome<RadarSeries>> {
        build_radar_series(&self.view(formula_filter), entities, properties, &self.config)
    }

    pub fn heatmap<E: AsRef<str>, P: AsRef<str>>(
        &self,
        formula_filter: &str,
        entities: &[E],
        properties: &[P],
    ) -> Result<ChartOutcome<HeatmapMatrix>> {
        build_heatmap_matrix(&self.view(formula_filter), entities, properties, &self.config)
    }

    pub fn parallel<E: AsRef<str>, P: AsRef<str>>(
        &self,
        formula_filter: &str,
        entities: &[E],
        properties: &[P],
    ) -> Result<ChartOutcome<ParallelCoordinates>> {
        build_parallel_coordinates(&self.view(formula_filter), entities, properties, &self.config)
    }
}
