use crate::entities::{ScatterplotLayer, Tooltip, TooltipStyle, TransactionRecord, ViewState};

pub const MAP_ZOOM: f64 = 3.5;

const TOOLTIP_HTML: &str = "<b>Transaction:</b> {TRANSACTION_ID}<br>\
<b>Location:</b> {LATITUDE}, {LONGITUDE}<br>\
<b>Fraud Status:</b> {RESULT}<br>\
<b>Probability:</b> {PROBABILITY}<br>";

/// Centers the camera on the mean coordinate of `records`. An empty set
/// centers on (0, 0).
pub fn view_state_for(records: &[TransactionRecord]) -> ViewState {
    let (latitude, longitude) = if records.is_empty() {
        (0.0, 0.0)
    } else {
        let count = records.len() as f64;
        let lat_sum: f64 = records.iter().map(|record| record.latitude).sum();
        let lon_sum: f64 = records.iter().map(|record| record.longitude).sum();
        (lat_sum / count, lon_sum / count)
    };
    ViewState {
        latitude,
        longitude,
        zoom: MAP_ZOOM,
        pitch: 0.0,
        bearing: 0.0,
    }
}

pub fn scatterplot_layer(data: Vec<TransactionRecord>) -> ScatterplotLayer {
    ScatterplotLayer {
        layer_type: "ScatterplotLayer",
        id: "transactions".to_string(),
        data,
        get_position: "@@=[LONGITUDE, LATITUDE]".to_string(),
        opacity: 0.8,
        filled: true,
        elevation_range: [0, 1000],
        extruded: true,
        coverage: 1.0,
        get_fill_color: "@@=COLOR".to_string(),
        get_radius: 8000.0,
        pickable: true,
        radius_min_pixels: 5.0,
        radius_scale: 5.0,
        stroked: true,
        line_width_min_pixels: 1.0,
        line_color: [50, 0, 0, 50],
    }
}

pub fn fraud_tooltip() -> Tooltip {
    Tooltip {
        html: TOOLTIP_HTML.to_string(),
        style: TooltipStyle {
            color: "white".to_string(),
            background_color: "rgba(0, 0, 0, 0.7)".to_string(),
            padding: "5px".to_string(),
        },
    }
}
