use criterion::{criterion_group, criterion_main, Criterion};
use env_logger::Env;
use maze_astar::{batch, prelude::*};
use nanorand::{Rng, WyRand};

/// An open map with the Start and Goal in opposite corners.
fn open_map(width: usize, height: usize) -> Vec<Vec<i32>> {
    let mut map = vec![vec![0; width]; height];
    map[0][0] = -1;
    map[height - 1][width - 1] = 9;
    map
}

/// Walls scattered across 20% of the map, keeping the corners free.
fn random_map(width: usize, height: usize, seed: u64) -> Vec<Vec<i32>> {
    let mut rng = WyRand::new_seed(seed);
    let mut map: Vec<Vec<i32>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| if rng.generate_range(0_u32..10) < 2 { 1 } else { 0 })
                .collect()
        })
        .collect();
    map[0][0] = -1;
    map[height - 1][width - 1] = 9;
    map
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to print every step.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("A* Search");
    group.sample_size(20);

    init();

    let configs = [
        ("Frontier Only", SearchConfig::FRONTIER_ONLY),
        ("Prune Explored", SearchConfig::PRUNE_EXPLORED),
    ];

    for size in [16, 32, 64] {
        let open = Maze::new(&open_map(size, size)).unwrap();
        let random = Maze::new(&random_map(size, size, 4)).unwrap();

        for (name, config) in configs {
            let id = format!("Open map, {}, Map Size: ({}, {})", name, size, size);
            group.bench_function(&id, |b| {
                b.iter(|| PathFinder::with_config(&open, config).a_star_search())
            });

            let id = format!("Random map, {}, Map Size: ({}, {})", name, size, size);
            group.bench_function(&id, |b| {
                b.iter(|| PathFinder::with_config(&random, config).a_star_search())
            });
        }
    }
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Search");
    group.sample_size(10);

    let mazes: Vec<Maze> = (0..64)
        .map(|seed| Maze::new(&random_map(32, 32, seed)).unwrap())
        .collect();

    #[cfg(feature = "parallel")]
    let id = "64 random maps, Parallel, Map Size: (32, 32)";
    #[cfg(not(feature = "parallel"))]
    let id = "64 random maps, Single Threaded, Map Size: (32, 32)";

    group.bench_function(id, |b| {
        b.iter(|| batch::search_all(&mazes, SearchConfig::PRUNE_EXPLORED))
    });
}

criterion_group!(benches, bench_search, bench_batch);
criterion_main!(benches);
