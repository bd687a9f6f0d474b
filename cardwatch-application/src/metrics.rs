use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    renders: AtomicU64,
    render_errors: AtomicU64,
    rows_fetched: AtomicU64,
    fraudulent_rows: AtomicU64,
}

impl Metrics {
    pub fn record_render(&self, rows_fetched: usize, fraudulent_rows: usize) {
        self.renders.fetch_add(1, Ordering::Relaxed);
        self.rows_fetched
            .fetch_add(rows_fetched as u64, Ordering::Relaxed);
        self.fraudulent_rows
            .fetch_add(fraudulent_rows as u64, Ordering::Relaxed);
    }

    pub fn record_render_error(&self) {
        self.render_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let renders = self.renders.load(Ordering::Relaxed);
        let errors = self.render_errors.load(Ordering::Relaxed);
        let rows = self.rows_fetched.load(Ordering::Relaxed);
        let fraudulent = self.fraudulent_rows.load(Ordering::Relaxed);

        format!(
            "# TYPE cardwatch_dashboard_renders_total counter\n\
cardwatch_dashboard_renders_total {}\n\
# TYPE cardwatch_dashboard_render_errors_total counter\n\
cardwatch_dashboard_render_errors_total {}\n\
# TYPE cardwatch_transactions_fetched_total counter\n\
cardwatch_transactions_fetched_total {}\n\
# TYPE cardwatch_fraudulent_rows_rendered_total counter\n\
cardwatch_fraudulent_rows_rendered_total {}\n",
            renders, errors, rows, fraudulent
        )
    }
}
