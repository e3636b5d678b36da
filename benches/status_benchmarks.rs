//! Performance benchmarks for batch daily status resolution.
//!
//! Dashboard pages resolve a status for every listed employee at once,
//! so the batch path is the hot one: a handful of passes over the
//! supporting tables regardless of how many employees are requested.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::models::{CalendarHoliday, LeaveType};
use attendance_engine::store::MemoryStore;

use chrono::NaiveDate;

fn make_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Builds a store with `count` employees in a mix of states: weekend
/// configs on some, approved leave on some, open and closed shifts on
/// others.
fn populated_store(count: usize) -> (MemoryStore, Vec<String>) {
    let store = MemoryStore::new();
    store.add_leave_type(LeaveType {
        id: "casual".to_string(),
        name: "Casual".to_string(),
        default_balance: 10,
        is_system: true,
    });
    store.add_holiday(CalendarHoliday {
        date: make_date("2024-12-25"),
        label: "Christmas Day".to_string(),
    });

    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let employee_id = format!("emp_{:04}", i);
        match i % 4 {
            0 => store.set_weekend_config(&employee_id, [0, 6]),
            1 => {
                let request_id = store
                    .submit_leave_request(
                        &employee_id,
                        "casual",
                        make_date("2024-03-04"),
                        make_date("2024-03-06"),
                        None,
                        "",
                    )
                    .unwrap();
                store.approve_leave_request(request_id, "").unwrap();
            }
            2 => {
                store
                    .request_clock_in(
                        &employee_id,
                        make_date("2024-03-05").and_hms_opt(9, 0, 0).unwrap(),
                    )
                    .unwrap();
            }
            _ => {
                store
                    .request_clock_in(
                        &employee_id,
                        make_date("2024-03-05").and_hms_opt(8, 0, 0).unwrap(),
                    )
                    .unwrap();
                store
                    .request_clock_out(
                        &employee_id,
                        make_date("2024-03-05").and_hms_opt(16, 0, 0).unwrap(),
                    )
                    .unwrap();
            }
        }
        ids.push(employee_id);
    }
    (store, ids)
}

fn bench_batch_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_status_batch");
    let day = make_date("2024-03-05");

    for count in [10usize, 100, 1000] {
        let (store, ids) = populated_store(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(store.daily_status(&ids, day)));
        });
    }
    group.finish();
}

fn bench_clock_in_gate(c: &mut Criterion) {
    let (store, _) = populated_store(100);
    let day = make_date("2024-12-25"); // holiday, always blocked

    c.bench_function("clock_in_blocked", |b| {
        b.iter(|| {
            let result =
                store.request_clock_in("emp_0002", day.and_hms_opt(9, 0, 0).unwrap());
            black_box(result.is_err())
        });
    });
}

criterion_group!(benches, bench_batch_status, bench_clock_in_gate);
criterion_main!(benches);
