pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod explorer;
pub mod filter;
pub mod heatmap;
pub mod normalize;
pub mod outcome;
pub mod parallel;
pub mod radar;
pub mod reshape;
pub mod scatter;
pub mod selection;
pub mod store;
pub mod subset;

pub use config::{ChartKind, CompareConfig};
pub use dataset::{Column, Dataset, Schema, entities_in_view, entity_keys, numeric_columns};
pub use error::{MatinsError, Result};
pub use explorer::Explorer;
pub use filter::filter_by_formula;
pub use heatmap::{HeatmapMatrix, build_heatmap_matrix};
pub use normalize::{ColumnRange, min_max_scale};
pub use outcome::ChartOutcome;
pub use parallel::{DisplayRange, ParallelAxis, ParallelCoordinates, build_parallel_coordinates};
pub use radar::{RadarSeries, build_radar_series};
pub use reshape::{LongRecord, melt, pivot};
pub use scatter::{ScatterAxes, ScatterPoint, ScatterSeries, build_scatter};
pub use selection::{CountBounds, SelectionPolicy, SelectionState};
pub use store::{decode_store, load_table, open_store};
pub use subset::{WideTable, subset};
pub use matins_data;
