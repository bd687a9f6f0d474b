use cardwatch_domain::{Dashboard, PredictionRow};

const DECK_GL_SCRIPT: &str = "https://unpkg.com/deck.gl@8.9.35/dist.min.js";
const DECK_JSON_SCRIPT: &str = "https://unpkg.com/@deck.gl/json@8.9.35/dist.min.js";
const MAPBOX_GL_SCRIPT: &str = "https://api.tiles.mapbox.com/mapbox-gl-js/v1.13.0/mapbox-gl.js";
const MAPBOX_GL_CSS: &str = "https://api.tiles.mapbox.com/mapbox-gl-js/v1.13.0/mapbox-gl.css";

pub fn render_dashboard_page(
    dashboard: &Dashboard,
    mapbox_token: Option<&str>,
) -> Result<String, serde_json::Error> {
    let deck_json = script_json(&serde_json::to_string(&dashboard.deck)?);
    let tooltip_json = script_json(&serde_json::to_string(&dashboard.tooltip)?);
    let token_json = script_json(&serde_json::to_string(&mapbox_token.unwrap_or(""))?);
    let rows = render_table_rows(&dashboard.table);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Credit Card Fraud Detection</title>
<script src="{deck_gl}"></script>
<script src="{deck_json_lib}"></script>
<script src="{mapbox_gl}"></script>
<link href="{mapbox_css}" rel="stylesheet" />
<style>
:root {{
  --ink: #0f172a;
  --muted: #64748b;
  --border: #e2e8f0;
  --fraud: #dc2626;
  --normal: #16a34a;
}}
* {{ box-sizing: border-box; }}
body {{
  margin: 0;
  font-family: "Source Sans 3", "IBM Plex Sans", sans-serif;
  color: var(--ink);
  background: #ffffff;
}}
.page {{ max-width: 1100px; margin: 0 auto; padding: 32px 20px 48px; }}
h1 {{ font-size: 32px; margin: 0 0 8px; }}
.caption {{ color: var(--muted); margin: 0 0 24px; }}
.summary {{ display: flex; gap: 12px; margin-bottom: 20px; font-size: 14px; }}
.summary span {{ padding: 4px 10px; border: 1px solid var(--border); border-radius: 999px; }}
#map {{ position: relative; height: 520px; border-radius: 12px; overflow: hidden; border: 1px solid var(--border); }}
table {{ width: 100%; border-collapse: collapse; font-size: 14px; }}
thead th {{
  text-align: left;
  font-size: 12px;
  color: var(--muted);
  background: #f8fafc;
  padding: 8px 10px;
  border-bottom: 1px solid var(--border);
}}
tbody td {{ padding: 6px 10px; border-bottom: 1px solid var(--border); }}
td.num {{ text-align: right; font-variant-numeric: tabular-nums; }}
.result-fraudulent {{ color: var(--fraud); font-weight: 600; }}
.result-normal {{ color: var(--normal); }}
</style>
</head>
<body>
<div class="page">
  <h1>Credit Card Fraud Detection</h1>
  <p class="caption">Current Transactions</p>
  <div class="summary">
    <span>Mapped: {map_rows}</span>
    <span>Fraudulent: {fraudulent}</span>
    <span>Normal: {normal}</span>
  </div>

  <h1>Map Showing Transaction Locations</h1>
  <div id="map"></div>

  <h3>Prediction Results (Sample)</h3>
  <table>
    <thead><tr>
      <th>TRANSACTION_ID</th>
      <th>LOCATION</th>
      <th>LATITUDE</th>
      <th>LONGITUDE</th>
      <th>CLASS</th>
      <th>PROBABILITY</th>
      <th>RESULT</th>
    </tr></thead>
    <tbody>
    {rows}
    </tbody>
  </table>
</div>
<script id="deck-spec" type="application/json">{deck_spec}</script>
<script id="deck-tooltip" type="application/json">{tooltip}</script>
<script id="mapbox-token" type="application/json">{token}</script>
<script>
  const readJson = id => JSON.parse(document.getElementById(id).textContent);
  const spec = readJson('deck-spec');
  const tooltip = readJson('deck-tooltip');
  const token = readJson('mapbox-token');

  const HTML_ESCAPES = {{ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }};
  const escapeHtml = text => String(text).replace(/[&<>"']/g, ch => HTML_ESCAPES[ch]);

  function interpolate(template, object) {{
    return template.replace(/\{{(\w+)\}}/g, (_, key) => {{
      const value = object[key];
      return value !== undefined ? escapeHtml(value) : '';
    }});
  }}

  const converter = new deck.JSONConverter({{
    configuration: new deck.JSONConfiguration({{ classes: deck }})
  }});
  const props = converter.convert(spec);
  new deck.DeckGL(Object.assign({{}}, props, {{
    container: 'map',
    mapboxApiAccessToken: token || undefined,
    getTooltip: ({{ object }}) => object && {{
      html: interpolate(tooltip.html, object),
      style: tooltip.style
    }}
  }}));
</script>
</body>
</html>"#,
        deck_gl = DECK_GL_SCRIPT,
        deck_json_lib = DECK_JSON_SCRIPT,
        mapbox_gl = MAPBOX_GL_SCRIPT,
        mapbox_css = MAPBOX_GL_CSS,
        map_rows = dashboard.summary.map_rows,
        fraudulent = dashboard.summary.fraudulent,
        normal = dashboard.summary.normal,
        rows = rows,
        deck_spec = deck_json,
        tooltip = tooltip_json,
        token = token_json,
    ))
}

fn render_table_rows(table: &[PredictionRow]) -> String {
    let mut rows = String::new();
    for row in table {
        let result_class = if row.class == 1 {
            "result-fraudulent"
        } else {
            "result-normal"
        };
        rows.push_str(&format!(
            "<tr>\
            <td class=\"id\">{id}</td>\
            <td class=\"location\">{location}</td>\
            <td class=\"num\">{latitude}</td>\
            <td class=\"num\">{longitude}</td>\
            <td class=\"num\">{class}</td>\
            <td class=\"num\">{probability}</td>\
            <td class=\"{result_class}\">{result}</td>\
            </tr>",
            id = escape_html(&row.transaction_id),
            location = escape_html(&row.location),
            latitude = row.latitude,
            longitude = row.longitude,
            class = row.class,
            probability = row.probability,
            result_class = result_class,
            result = escape_html(&row.result),
        ));
    }
    rows
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// JSON inside a <script> block must not close the element early.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
