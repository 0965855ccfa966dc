//! Performance benchmarks for the salary engine.
//!
//! Covers the formula chain on its own, the audit trace built on top of it,
//! the lenient coercion of form values, and full POST /calculate requests
//! through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rust_decimal::Decimal;
use salary_engine::api::{AppState, CalculationRequest, create_router};
use salary_engine::calculation::{build_audit_steps, compute};
use salary_engine::config::{CalcConstants, ConfigLoader};
use salary_engine::models::SalaryInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/tdf2025").expect("Failed to load config");
    AppState::new(config)
}

/// A fully populated input: December 2025 básico with every field set.
fn full_input() -> SalaryInput {
    SalaryInput {
        basico_base: Decimal::new(44766048, 2),
        years_antiguedad: 12,
        haber_comisario_base: Decimal::new(81234567, 2),
        dto277: Decimal::new(80000, 0),
        seguro_vida: Decimal::new(2500, 0),
        porcentaje_aumento: Decimal::new(125, 1),
    }
}

fn request_body(basico: &str) -> String {
    serde_json::json!({
        "basico_base": basico,
        "years_antiguedad": "12",
        "haber_comisario_base": "812345.67",
        "dto277": "80000",
        "seguro_vida": "2500",
        "porcentaje_aumento": "12.5"
    })
    .to_string()
}

/// Benchmark: formula chain only.
fn bench_compute(c: &mut Criterion) {
    let input = full_input();
    let constants = CalcConstants::default();

    c.bench_function("compute", |b| {
        b.iter(|| black_box(compute(black_box(&input), &constants)))
    });
}

/// Benchmark: formula chain plus the audit steps explaining it.
fn bench_compute_with_audit(c: &mut Criterion) {
    let input = full_input();
    let constants = CalcConstants::default();

    c.bench_function("compute_with_audit", |b| {
        b.iter(|| {
            let breakdown = compute(black_box(&input), &constants);
            black_box(build_audit_steps(&input, &constants, &breakdown))
        })
    });
}

/// Benchmark: coercion of raw form values.
fn bench_sanitize(c: &mut Criterion) {
    let request: CalculationRequest =
        serde_json::from_str(&request_body(" 447660.48 pesos")).expect("Failed to parse request");

    c.bench_function("sanitize", |b| b.iter(|| black_box(request.sanitize())));
}

/// Benchmark: single POST /calculate through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = request_body("447660.48");

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: a batch of requests, one per month of the 2025 table.
fn bench_batch(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("batch_processing");

    for batch_size in [12usize, 120, 1200].iter() {
        let requests: Vec<String> = {
            let history = state
                .config()
                .get_history(2025)
                .expect("Failed to load 2025 history");
            history
                .months
                .iter()
                .cycle()
                .take(*batch_size)
                .map(|month| request_body(&month.basico.to_string()))
                .collect()
        };

        group.throughput(Throughput::Elements(*batch_size as u64));
        if *batch_size > 120 {
            group.sample_size(10);
        }
        group.bench_with_input(
            BenchmarkId::new("requests", batch_size),
            batch_size,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let mut results = Vec::with_capacity(requests.len());
                    for body in &requests {
                        let router = create_router(state.clone());
                        let response = router
                            .oneshot(
                                Request::builder()
                                    .method("POST")
                                    .uri("/calculate")
                                    .header("Content-Type", "application/json")
                                    .body(Body::from(body.clone()))
                                    .unwrap(),
                            )
                            .await
                            .unwrap();
                        results.push(response);
                    }
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute,
    bench_compute_with_audit,
    bench_sanitize,
    bench_single_request,
    bench_batch,
);
criterion_main!(benches);
