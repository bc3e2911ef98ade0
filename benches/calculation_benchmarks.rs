//! Performance benchmarks for the earnings engine.
//!
//! - Pure calculation for overtime and undertime months
//! - One request through the HTTP router
//! - Timesheet aggregation as the entry count grows
//! - Batch endpoint with 100 requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bid_earnings::api::{AppState, create_router};
use bid_earnings::calculation::compute_earnings;
use bid_earnings::config::ConfigLoader;
use bid_earnings::models::{SalaryBasis, WorkPeriod};

use axum::{Router, body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/bid").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a request with `entry_count` eight-hour days in March 2026.
fn timesheet_request(employee_id: &str, entry_count: usize) -> serde_json::Value {
    let timesheet: Vec<serde_json::Value> = (0..entry_count)
        .map(|i| {
            let date = format!("2026-03-{:02}", (i % 31) + 1);
            serde_json::json!({
                "id": format!("ts_{:03}", i + 1),
                "clock_in": format!("{}T09:00:00", date),
                "clock_out": format!("{}T17:30:00", date),
                "breaks": [{
                    "start_time": format!("{}T12:00:00", date),
                    "end_time": format!("{}T12:30:00", date)
                }]
            })
        })
        .collect();

    serde_json::json!({
        "employee_id": employee_id,
        "pay_period": { "start_date": "2026-03-01", "end_date": "2026-03-31" },
        "timesheet": timesheet,
        "salary": { "monthly_salary_amount": "16000" }
    })
}

fn minutes_request(employee_id: &str, minutes: u32) -> serde_json::Value {
    serde_json::json!({
        "employee_id": employee_id,
        "total_minutes_worked": minutes.to_string(),
        "salary": {
            "monthly_salary_amount": "16000",
            "apply_undertime_deductions": minutes % 2 == 0
        }
    })
}

async fn post(router: Router, uri: &str, body: String) -> axum::response::Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Benchmark: pure calculation with no HTTP or audit assembly.
fn bench_compute_earnings(c: &mut Criterion) {
    let basis = SalaryBasis::new(Decimal::from(16000)).with_undertime_deductions(true);
    let overtime = WorkPeriod::new(Decimal::from(10200));
    let undertime = WorkPeriod::new(Decimal::from(9000));

    let mut group = c.benchmark_group("compute_earnings");
    group.bench_function("overtime_month", |b| {
        b.iter(|| compute_earnings(black_box(&overtime), black_box(&basis)))
    });
    group.bench_function("undertime_month", |b| {
        b.iter(|| compute_earnings(black_box(&undertime), black_box(&basis)))
    });
    group.finish();
}

/// Benchmark: one minute-total request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = minutes_request("emp_bench_001", 10200).to_string();

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(post(router.clone(), "/earnings", body.clone()).await)
        })
    });
}

/// Benchmark: timesheet aggregation at increasing entry counts.
fn bench_timesheet_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let mut group = c.benchmark_group("timesheet_scaling");

    for entry_count in [1, 7, 22, 31, 62].iter() {
        let body = timesheet_request("emp_bench_001", *entry_count).to_string();

        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            entry_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    black_box(post(router.clone(), "/earnings", body.clone()).await)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: batch endpoint with 100 mixed requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let requests: Vec<serde_json::Value> = (0..100u32)
        .map(|i| {
            let employee_id = format!("emp_batch_{:03}", i);
            if i % 4 == 0 {
                timesheet_request(&employee_id, 20)
            } else {
                minutes_request(&employee_id, 9000 + i * 20)
            }
        })
        .collect();
    let body = serde_json::json!({ "requests": requests }).to_string();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(post(router.clone(), "/earnings/batch", body.clone()).await)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_earnings,
    bench_single_request,
    bench_timesheet_scaling,
    bench_batch_100,
);
criterion_main!(benches);
