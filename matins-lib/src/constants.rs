/// Identity column; its values are the comparison keys.
pub const ENTITY_KEY: &str = "formula_pretty";

/// Default scatter axes, and the columns a session refuses to start without.
pub const DEFAULT_X_AXIS: &str = "density";
pub const DEFAULT_Y_AXIS: &str = "formation_energy_per_atom";

/// Added to `max - min` so that collapsed columns scale to 0 instead of NaN.
pub const MIN_MAX_EPSILON: f64 = 1e-12;

/// Half-width of a collapsed parallel-coordinates axis whose value is 0.
pub const COLLAPSED_PAD_ABS: f64 = 1e-6;
/// Half-width of a collapsed axis, as a fraction of `|value|`.
pub const COLLAPSED_PAD_REL: f64 = 0.05;

pub const EMPTY_AFTER_DROPNA: &str = "Nothing left to plot after drop-na filtering.";
pub const EMPTY_SELECTION: &str = "None of the selected materials are in the current view.";
