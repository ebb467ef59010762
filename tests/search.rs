use maze_astar::{
    neighbors::{neighbors, Dir},
    prelude::*,
    trace::StepRecorder,
    TOO_EXPENSIVE,
};
use nanorand::{Rng, WyRand};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_map(rng: &mut WyRand) -> Vec<Vec<i32>> {
    let width = rng.generate_range(2_usize..=6);
    let height = rng.generate_range(2_usize..=6);
    let mut map: Vec<Vec<i32>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| if rng.generate_range(0_u32..10) < 3 { 1 } else { 0 })
                .collect()
        })
        .collect();

    let start = rng.generate_range(0..width * height);
    let mut goal = rng.generate_range(0..width * height - 1);
    if goal >= start {
        goal += 1;
    }
    map[start / width][start % width] = -1;
    map[goal / width][goal % width] = 9;
    map
}

/// Cheapest cost to every Cell, by relaxing every edge until nothing changes.
fn brute_force_costs(maze: &Maze) -> Vec<Option<f64>> {
    let (width, height) = maze.size();
    let mut best = vec![None; width * height];
    let (sx, sy) = maze.start();
    best[sy * width + sx] = Some(0.0);

    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..height {
            for x in 0..width {
                let here = match best[y * width + x] {
                    Some(cost) => cost,
                    None => continue,
                };
                for (nx, ny) in neighbors((x, y), (width, height)) {
                    let step = maze.cost_at((nx, ny));
                    if step >= TOO_EXPENSIVE {
                        continue;
                    }
                    let cost = here + step;
                    let slot = &mut best[ny * width + nx];
                    if slot.map_or(true, |old| cost < old - 1e-12) {
                        *slot = Some(cost);
                        changed = true;
                    }
                }
            }
        }
    }
    best
}

fn check_path(maze: &Maze, path: &Path<Point>) {
    assert_eq!(path.first(), Some(&maze.start()));
    for pair in path.as_slice().windows(2) {
        assert!(
            Dir::between(pair[0], pair[1]).is_some(),
            "{:?} -> {:?} is not a single move in {}",
            pair[0],
            pair[1],
            path
        );
    }
    assert!(path.iter().all(|pos| maze.is_walkable(*pos)));

    let summed: f64 = path.iter().skip(1).map(|pos| maze.cost_at(*pos)).sum();
    assert!((summed - path.cost()).abs() < 1e-9);
}

#[test]
fn only_path_around_wall() {
    init_logger();
    let maze = Maze::new(&[
        [-1, 0], //
        [1, 9],
    ])
    .unwrap();
    let report = PathFinder::new(&maze).a_star_search();

    assert_eq!(report.outcome(), SearchOutcome::Found);
    let path = report.path().unwrap();
    assert_eq!(*path, vec![(0, 0), (1, 0), (1, 1)]);
    assert_eq!(path.cost(), maze.cost_at((1, 0)) + maze.cost_at((1, 1)));
}

#[test]
fn adjacent_start_and_goal() {
    init_logger();
    for map in [[[-1, 9], [0, 0]], [[-1, 0], [9, 0]], [[1, 0], [-1, 9]]] {
        let maze = Maze::new(&map).unwrap();
        let report = PathFinder::new(&maze).a_star_search();

        let path = report.path().unwrap();
        assert_eq!(*path, vec![maze.start(), maze.goal()]);
        assert_eq!(path.cost(), maze.cost_at(maze.goal()));
    }
}

#[test]
fn spiral() {
    init_logger();
    let maze = Maze::new(&[
        [-1, 0, 0, 0, 0],
        [1, 1, 1, 1, 0],
        [0, 0, 9, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();

    let report = PathFinder::new(&maze).a_star_search();
    assert!(report.is_found());
    let path = report.path().unwrap();
    check_path(&maze, path);
    assert_eq!(path.len(), 17);
    assert_eq!(path.last(), Some(&(2, 2)));

    let config = SearchConfig::default().with_max_iterations(10);
    let report = PathFinder::with_config(&maze, config).a_star_search();
    assert_eq!(report.outcome(), SearchOutcome::Incomplete);
    assert_eq!(report.iterations(), 10);
    let path = report.path().unwrap();
    check_path(&maze, path);
    assert_ne!(path.last(), Some(&maze.goal()));
}

#[test]
fn walled_in_goal() {
    init_logger();
    let maze = Maze::new(&[
        [-1, 0, 0, 0],
        [0, 0, 1, 1],
        [0, 0, 1, 9],
    ])
    .unwrap();

    let report = PathFinder::with_config(&maze, SearchConfig::PRUNE_EXPLORED).a_star_search();
    assert_eq!(report.outcome(), SearchOutcome::NoPath);
    assert!(report.path().is_none());
    assert!(report.frontier().is_empty());
    assert!(report.iterations() >= 8);

    // explored Cells keep being put back on the frontier, so only the limit ends the search
    let config = SearchConfig::FRONTIER_ONLY.with_max_iterations(200);
    let report = PathFinder::with_config(&maze, config).a_star_search();
    assert_eq!(report.outcome(), SearchOutcome::Incomplete);
    assert_eq!(report.iterations(), 200);
    let path = report.path().unwrap();
    check_path(&maze, path);
    assert_ne!(path.last(), Some(&maze.goal()));
}

#[test]
fn idempotent() {
    init_logger();
    let maze = Maze::new(&[
        [-1, 0, 0, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
        [1, 0, 1, 9],
    ])
    .unwrap();
    let finder = PathFinder::new(&maze);

    let first = finder.a_star_search();
    let second = finder.a_star_search();
    let fresh = PathFinder::new(&maze).a_star_search();
    assert_eq!(first, second);
    assert_eq!(first, fresh);
}

#[test]
fn random_grids_are_optimal() {
    init_logger();
    let mut rng = WyRand::new_seed(0x5eed_1234);

    for _ in 0..300 {
        let map = random_map(&mut rng);
        let maze = Maze::new(&map).unwrap();
        let best = brute_force_costs(&maze);
        let (gx, gy) = maze.goal();
        let goal_cost = best[gy * maze.width() + gx];

        for config in [SearchConfig::FRONTIER_ONLY, SearchConfig::PRUNE_EXPLORED] {
            let config = match goal_cost {
                Some(_) => config,
                None => config.with_max_iterations(1_000),
            };
            let report = PathFinder::with_config(&maze, config).a_star_search();
            match goal_cost {
                Some(expected) => {
                    assert_eq!(report.outcome(), SearchOutcome::Found, "{}", maze);
                    let path = report.path().unwrap();
                    check_path(&maze, path);
                    assert_eq!(path.last(), Some(&maze.goal()));
                    assert!(
                        (path.cost() - expected).abs() < 1e-9,
                        "{} costs {} instead of {}\n{}",
                        path,
                        path.cost(),
                        expected,
                        maze
                    );
                }
                None => {
                    assert_ne!(report.outcome(), SearchOutcome::Found, "{}", maze);
                    if config.recheck_explored {
                        assert_eq!(report.outcome(), SearchOutcome::NoPath, "{}", maze);
                    }
                }
            }
        }
    }
}

#[test]
fn tracing_does_not_change_results() {
    init_logger();
    let mut rng = WyRand::new_seed(42);

    for _ in 0..50 {
        let maze = Maze::new(&random_map(&mut rng)).unwrap();
        let config = SearchConfig::default().with_max_iterations(300);
        let finder = PathFinder::with_config(&maze, config);

        let mut recorder = StepRecorder::new();
        let traced = finder.a_star_search_traced(&mut recorder);
        assert_eq!(traced, finder.a_star_search());
        assert_eq!(recorder.steps().len(), traced.iterations());

        let mut log_trace = maze_astar::render::LogTrace::new(&maze);
        assert_eq!(finder.a_star_search_traced(&mut log_trace), traced);
    }
}

#[test]
fn invalid_maps() {
    assert_eq!(
        Maze::new(&[[-1, 9]]),
        Err(InvalidGrid::TooSmall {
            width: 2,
            height: 1
        })
    );
    assert_eq!(Maze::new(&[[0, 0], [0, 9]]), Err(InvalidGrid::MissingStart));
    assert_eq!(Maze::new(&[[-1, 0], [0, 0]]), Err(InvalidGrid::MissingGoal));
    assert!(matches!(
        Maze::new(&[[-1, 0], [-1, 9]]),
        Err(InvalidGrid::DuplicateStart { .. })
    ));
}
