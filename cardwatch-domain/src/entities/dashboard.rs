// Dashboard entity
// Render-ready output of one pipeline pass: a deck.gl (pydeck-compatible)
// JSON spec, its tooltip, and the prediction table.

use serde::{Deserialize, Serialize};

use crate::entities::{PredictionRow, TransactionRecord};
use crate::value_objects::Rgba;

pub const DEFAULT_MAP_ROW_LIMIT: usize = 500;
pub const DEFAULT_TABLE_ROW_LIMIT: usize = 300;
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";

/// Row bounds applied after sorting. The table rows are always a prefix of the map rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub map_rows: usize,
    pub table_rows: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            map_rows: DEFAULT_MAP_ROW_LIMIT,
            table_rows: DEFAULT_TABLE_ROW_LIMIT,
        }
    }
}

impl DashboardLimits {
    pub fn new(map_rows: usize, table_rows: usize) -> Self {
        Self {
            map_rows,
            table_rows: table_rows.min(map_rows),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub deck: DeckSpec,
    pub tooltip: Tooltip,
    pub table: Vec<PredictionRow>,
    pub summary: DashboardSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub fetched_rows: usize,
    pub map_rows: usize,
    pub table_rows: usize,
    pub fraudulent: usize,
    pub normal: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSpec {
    pub initial_view_state: ViewState,
    pub layers: Vec<ScatterplotLayer>,
    pub map_style: String,
    pub views: Vec<MapView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    #[serde(rename = "@@type")]
    pub view_type: &'static str,
    pub controller: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            view_type: "MapView",
            controller: true,
        }
    }
}

/// Accessor strings use the `@@=` expression syntax understood by
/// `@deck.gl/json`, so the layer renders from the record column names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterplotLayer {
    #[serde(rename = "@@type")]
    pub layer_type: &'static str,
    pub id: String,
    pub data: Vec<TransactionRecord>,
    pub get_position: String,
    pub opacity: f64,
    pub filled: bool,
    pub elevation_range: [u32; 2],
    pub extruded: bool,
    pub coverage: f64,
    pub get_fill_color: String,
    pub get_radius: f64,
    pub pickable: bool,
    pub radius_min_pixels: f64,
    pub radius_scale: f64,
    pub stroked: bool,
    pub line_width_min_pixels: f64,
    pub line_color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub html: String,
    pub style: TooltipStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub color: String,
    pub background_color: String,
    pub padding: String,
}
