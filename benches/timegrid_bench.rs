// Benchmarks for the time-grid math and the reflow pass

use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clinic_agenda::models::appointment::Appointment;
use clinic_agenda::services::appointment::{AppointmentBook, SlotRef};
use clinic_agenda::services::timegrid;

fn bench_time_slots(c: &mut Criterion) {
    c.bench_function("time_slots full business day", |b| {
        b.iter(|| timegrid::time_slots(black_box("08:00"), black_box("20:00")))
    });
}

fn bench_reflow(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
    let entries: Vec<Appointment> = (0..200)
        .map(|i| {
            let hour = 8 + (i / 16) % 12;
            let minute = (i % 4) * 15;
            Appointment::new(
                format!("client {i}"),
                "Masaje",
                date,
                (i % 8) as u32 + 1,
                NaiveTime::from_hms_opt(hour as u32, minute as u32, 0).unwrap(),
                2,
                "#9333ea",
            )
            .unwrap()
        })
        .collect();
    let book = AppointmentBook::from_appointments(entries);

    c.bench_function("reflow into a busy cabin", |b| {
        b.iter_batched(
            || book.clone(),
            |mut book| {
                let dest = SlotRef::new(date, 1, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
                book.reflow(black_box(0), black_box(dest))
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_time_slots, bench_reflow);
criterion_main!(benches);
