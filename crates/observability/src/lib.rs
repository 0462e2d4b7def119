use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    queries_total: AtomicU64,
    canned_replies_total: AtomicU64,
    itineraries_total: AtomicU64,
    no_results_total: AtomicU64,
    points_recommended_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub queries_total: u64,
    pub canned_replies_total: u64,
    pub itineraries_total: u64,
    pub no_results_total: u64,
    pub points_recommended_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_query(&self) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_canned_reply(&self) {
        self.canned_replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_itinerary(&self, points: usize) {
        self.itineraries_total.fetch_add(1, Ordering::Relaxed);
        self.points_recommended_total
            .fetch_add(points as u64, Ordering::Relaxed);
    }

    pub fn inc_no_results(&self) {
        self.no_results_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let queries = self.queries_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            queries_total: queries,
            canned_replies_total: self.canned_replies_total.load(Ordering::Relaxed),
            itineraries_total: self.itineraries_total.load(Ordering::Relaxed),
            no_results_total: self.no_results_total.load(Ordering::Relaxed),
            points_recommended_total: self.points_recommended_total.load(Ordering::Relaxed),
            avg_latency_micros: if queries == 0 {
                0.0
            } else {
                latency as f64 / queries as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,guide_api=info,guide_agents=info,guide_catalog=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
