//! Search and board benchmarks over growing ticket collections

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use helpdesk::core::{Priority, Status, StatusBoard, Ticket, TicketBuilder, TicketId, TicketSearch};

fn tickets(count: u32) -> Vec<Ticket> {
    (1..=count)
        .map(|n| {
            let status = Status::ALL[(n % 3) as usize];
            let priority = Priority::ALL[(n % 4) as usize];
            TicketBuilder::new()
                .id(TicketId::from_number(n))
                .title(format!("Ticket {n}: printer on floor {}", n % 12))
                .description("Device does not respond after the last update")
                .priority(priority)
                .status(status)
                .build()
        })
        .collect()
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100u32, 1_000, 10_000] {
        let collection = tickets(size);
        group.bench_with_input(BenchmarkId::new("term", size), &collection, |b, tickets| {
            let search = TicketSearch::new("FLOOR 7");
            b.iter(|| black_box(search.apply(tickets)).len());
        });
        group.bench_with_input(BenchmarkId::new("by_id", size), &collection, |b, tickets| {
            let search = TicketSearch::new("tk-050");
            b.iter(|| black_box(search.apply(tickets)).len());
        });
    }

    group.finish();
}

fn board_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");

    for size in [100u32, 1_000, 10_000] {
        let collection = tickets(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &collection, |b, tickets| {
            b.iter(|| {
                let board = StatusBoard::partition(black_box(tickets));
                black_box(board.stats())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, search_benchmark, board_benchmark);
criterion_main!(benches);
