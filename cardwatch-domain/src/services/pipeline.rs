use chrono::{NaiveDate, NaiveDateTime};

use crate::entities::{
    Dashboard, DashboardLimits, DashboardSummary, DeckSpec, PredictionRow, RawTransaction,
    TransactionRecord,
};
use crate::error::DashboardError;
use crate::services::deck::{fraud_tooltip, scatterplot_layer, view_state_for};
use crate::utils::TRANSACTION_DATE_FORMAT;
use crate::value_objects::FraudClass;

/// Parses a `MM/DD/YY HH:MM` timestamp and moves it onto `yesterday`,
/// keeping the time of day.
pub fn normalize_transaction_date(
    raw: &str,
    yesterday: NaiveDate,
) -> Result<NaiveDateTime, DashboardError> {
    let parsed = NaiveDateTime::parse_from_str(raw.trim(), TRANSACTION_DATE_FORMAT).map_err(
        |source| DashboardError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        },
    )?;
    Ok(NaiveDateTime::new(yesterday, parsed.time()))
}

pub fn format_transaction_date(value: &NaiveDateTime) -> String {
    value.format(TRANSACTION_DATE_FORMAT).to_string()
}

pub fn coerce_coordinate(field: &'static str, raw: &str) -> Result<f64, DashboardError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| DashboardError::InvalidCoordinate {
            field,
            value: raw.to_string(),
            source,
        })
}

pub fn to_record(
    raw: RawTransaction,
    yesterday: NaiveDate,
) -> Result<TransactionRecord, DashboardError> {
    let normalized_at = normalize_transaction_date(&raw.transaction_date, yesterday)?;
    let class = FraudClass::from_location(&raw.location);
    let latitude = coerce_coordinate("latitude", &raw.latitude)?;
    let longitude = coerce_coordinate("longitude", &raw.longitude)?;
    Ok(TransactionRecord {
        transaction_id: raw.transaction_id,
        transaction_date: format_transaction_date(&normalized_at),
        location: raw.location,
        latitude,
        longitude,
        class: class.flag(),
        probability: class.probability(),
        result: class.as_str().to_string(),
        color: class.color(),
        normalized_at,
    })
}

/// Sorts newest first and cuts the map set and the table set. Ties keep
/// their source order.
pub fn bound_records(
    mut records: Vec<TransactionRecord>,
    limits: DashboardLimits,
) -> (Vec<TransactionRecord>, Vec<PredictionRow>) {
    records.sort_by(|a, b| b.normalized_at.cmp(&a.normalized_at));
    records.truncate(limits.map_rows);
    let table = records
        .iter()
        .take(limits.table_rows)
        .map(PredictionRow::from)
        .collect();
    (records, table)
}

pub fn build_dashboard(
    rows: Vec<RawTransaction>,
    yesterday: NaiveDate,
    limits: DashboardLimits,
    map_style: &str,
) -> Result<Dashboard, DashboardError> {
    let fetched_rows = rows.len();
    let records = rows
        .into_iter()
        .map(|row| to_record(row, yesterday))
        .collect::<Result<Vec<_>, _>>()?;

    let (map_rows, table) = bound_records(records, limits);
    let fraudulent = map_rows
        .iter()
        .filter(|record| record.class == FraudClass::Fraudulent.flag())
        .count();
    let summary = DashboardSummary {
        fetched_rows,
        map_rows: map_rows.len(),
        table_rows: table.len(),
        fraudulent,
        normal: map_rows.len() - fraudulent,
    };

    let view_state = view_state_for(&map_rows);
    Ok(Dashboard {
        deck: DeckSpec {
            initial_view_state: view_state,
            layers: vec![scatterplot_layer(map_rows)],
            map_style: map_style.to_string(),
            views: vec![Default::default()],
        },
        tooltip: fraud_tooltip(),
        table,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::DEFAULT_MAP_STYLE;

    fn yesterday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).expect("date")
    }

    fn raw(id: &str, location: &str, date: &str) -> RawTransaction {
        RawTransaction {
            transaction_id: id.to_string(),
            transaction_date: date.to_string(),
            location: location.to_string(),
            latitude: "40.7".to_string(),
            longitude: "-74.0".to_string(),
        }
    }

    #[test]
    fn normalize_moves_date_to_yesterday_and_keeps_time() {
        let normalized = normalize_transaction_date("01/15/23 14:30", yesterday()).expect("date");
        assert_eq!(format_transaction_date(&normalized), "06/10/24 14:30");
    }

    #[test]
    fn normalize_rejects_other_formats() {
        let err = normalize_transaction_date("2023-01-15 14:30", yesterday()).expect_err("reject");
        assert!(matches!(err, DashboardError::InvalidTimestamp { .. }));
    }

    #[test]
    fn coerce_coordinate_parses_text() {
        assert_eq!(coerce_coordinate("latitude", "40.7").expect("lat"), 40.7);
        assert_eq!(coerce_coordinate("longitude", " -74.006 ").expect("lon"), -74.006);
        let err = coerce_coordinate("latitude", "north").expect_err("reject");
        match err {
            DashboardError::InvalidCoordinate { field, value, .. } => {
                assert_eq!(field, "latitude");
                assert_eq!(value, "north");
            }
            _ => panic!("unexpected error type"),
        }
    }

    #[test]
    fn moscow_record_end_to_end() {
        let row = RawTransaction {
            transaction_id: "T1".to_string(),
            transaction_date: "01/01/24 09:00".to_string(),
            location: "Moscow".to_string(),
            latitude: "55.75".to_string(),
            longitude: "37.61".to_string(),
        };
        let record = to_record(row, yesterday()).expect("record");
        assert_eq!(record.class, 1);
        assert_eq!(record.probability, 0.92);
        assert_eq!(record.result, "FRAUDULENT");
        assert_eq!(record.color, [255, 0, 0, 255]);
        assert_eq!(record.transaction_date, "06/10/24 09:00");
        assert_eq!(record.latitude, 55.75);
        assert_eq!(record.longitude, 37.61);
    }

    #[test]
    fn bounds_sort_newest_first_and_table_is_prefix() {
        let rows = (0..700)
            .map(|i| {
                let date = format!("01/01/24 {:02}:{:02}", (i / 60) % 24, i % 60);
                raw(&format!("T{i}"), if i % 3 == 0 { "Moscow" } else { "Paris" }, &date)
            })
            .collect::<Vec<_>>();
        let dashboard =
            build_dashboard(rows, yesterday(), DashboardLimits::default(), DEFAULT_MAP_STYLE)
                .expect("dashboard");

        let map = &dashboard.deck.layers[0].data;
        assert_eq!(map.len(), 500);
        assert!(map.windows(2).all(|w| w[0].normalized_at >= w[1].normalized_at));
        assert_eq!(dashboard.table.len(), 300);
        for (row, record) in dashboard.table.iter().zip(map.iter()) {
            assert_eq!(row.transaction_id, record.transaction_id);
        }
        assert_eq!(dashboard.summary.fetched_rows, 700);
        assert_eq!(dashboard.summary.map_rows, 500);
        assert_eq!(
            dashboard.summary.fraudulent + dashboard.summary.normal,
            dashboard.summary.map_rows
        );
    }

    #[test]
    fn small_result_set_is_kept_whole() {
        let rows = vec![
            raw("A", "Paris", "03/02/23 08:00"),
            raw("B", "Moscow", "12/31/22 23:59"),
            raw("C", "Berlin", "07/07/21 12:00"),
        ];
        let dashboard =
            build_dashboard(rows, yesterday(), DashboardLimits::default(), DEFAULT_MAP_STYLE)
                .expect("dashboard");
        let ids = dashboard
            .table
            .iter()
            .map(|row| row.transaction_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["B", "C", "A"]);
        assert_eq!(dashboard.summary.fraudulent, 1);
        assert_eq!(dashboard.summary.normal, 2);
    }

    #[test]
    fn bad_coordinate_aborts_build() {
        let mut row = raw("A", "Paris", "03/02/23 08:00");
        row.longitude = String::new();
        let err = build_dashboard(vec![row], yesterday(), DashboardLimits::default(), "")
            .expect_err("abort");
        assert!(matches!(
            err,
            DashboardError::InvalidCoordinate { field: "longitude", .. }
        ));
    }
}
