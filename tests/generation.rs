//! Cross-algorithm generation properties.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mazecarve::{make_generator, make_grid, CellId, Direction, MazeGrid, Steps, ALGORITHM_NAMES};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Every interior wall bit must agree with its mirror at all times.
fn assert_mirrored(grid: &dyn MazeGrid) {
    for cell in grid.cells() {
        for &dir in grid.directions() {
            if let Some(other) = grid.neighbor(cell, dir) {
                assert_eq!(
                    grid.wall_get(cell, dir),
                    grid.wall_get(other, dir.opposite()),
                    "wall state disagrees between {cell:?} and {other:?} ({dir:?})"
                );
            }
        }
    }
}

fn open_boundary_walls(grid: &dyn MazeGrid) -> Vec<(CellId, Direction)> {
    let mut out = Vec::new();
    for cell in grid.cells() {
        for &dir in grid.directions() {
            if grid.neighbor(cell, dir).is_none() && !grid.wall_get(cell, dir) {
                out.push((cell, dir));
            }
        }
    }
    out
}

fn reachable_cells(grid: &dyn MazeGrid, start: CellId) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for &dir in grid.directions() {
            if grid.wall_get(cell, dir) {
                continue;
            }
            if let Some(next) = grid.neighbor(cell, dir) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen.len()
}

fn carved_interior_walls(grid: &dyn MazeGrid) -> usize {
    grid.interior_walls()
        .into_iter()
        .filter(|&(cell, dir)| !grid.wall_get(cell, dir))
        .count()
}

fn generate(algorithm: &str, grid_type: &str, width: usize, height: usize, seed: u64) -> String {
    let grid = make_grid(grid_type, width, height).unwrap();
    let mut gen = make_generator(algorithm, grid, rng(seed)).unwrap();
    let maze = gen.generate();

    assert_mirrored(maze);
    assert_eq!(
        reachable_cells(maze, (0, 0)),
        width * height,
        "{algorithm}/{grid_type}: maze is not fully connected"
    );

    let open = open_boundary_walls(maze);
    assert_eq!(
        open.len(),
        2,
        "{algorithm}/{grid_type}: expected exactly an entrance and an exit"
    );
    for &side in maze.side_ids() {
        let on_side = maze
            .side_walls(side)
            .into_iter()
            .filter(|&(cell, dir)| !maze.wall_get(cell, dir))
            .count();
        assert!(
            on_side <= 1,
            "{algorithm}/{grid_type}: {side:?} has {on_side} openings"
        );
    }

    maze.render()
}

#[test]
fn all_algorithms_produce_valid_mazes_on_both_grids() {
    for &algorithm in ALGORITHM_NAMES {
        generate(algorithm, "rect", 6, 5, 1001);
        generate(algorithm, "hex", 5, 6, 1002);
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    for &algorithm in ALGORITHM_NAMES {
        let a = generate(algorithm, "rect", 7, 6, 555);
        let b = generate(algorithm, "rect", 7, 6, 555);
        assert_eq!(a, b, "{algorithm}");
    }
}

#[test]
fn kruskal_carves_a_spanning_tree() {
    for (grid_type, width, height) in [("rect", 5, 5), ("rect", 9, 3), ("hex", 4, 6)] {
        let grid = make_grid(grid_type, width, height).unwrap();
        let mut gen = make_generator("kruskal", grid, rng(99)).unwrap();
        let maze = gen.generate();
        // connected with |cells| - 1 edges: a tree, hence acyclic
        assert_eq!(carved_interior_walls(maze), width * height - 1);
        assert_eq!(reachable_cells(maze, (0, 0)), width * height);
    }
}

#[test]
fn kruskal_5x5_concrete_scenario() {
    let grid = make_grid("rect", 5, 5).unwrap();
    let mut gen = make_generator("kruskal", grid, rng(7)).unwrap();
    let maze = gen.generate();
    assert_eq!(carved_interior_walls(maze), 24);

    let text = maze.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    for line in lines {
        assert_eq!(line.chars().count(), 6);
    }
}

#[test]
fn backtracking_1x1_concrete_scenario() {
    let grid = make_grid("rect", 1, 1).unwrap();
    let mut gen = make_generator("backtracking", grid, rng(0)).unwrap();
    let maze = gen.generate();
    assert!(!maze.wall_get((0, 0), Direction::North));
    assert!(!maze.wall_get((0, 0), Direction::South));
    assert!(maze.wall_get((0, 0), Direction::East));
    assert!(maze.wall_get((0, 0), Direction::West));
}

#[test]
fn mirror_invariant_holds_at_every_step() {
    for &algorithm in ["backtracking", "kruskal"].iter() {
        for (grid_type, width, height) in [("rect", 5, 4), ("hex", 4, 4)] {
            let grid = make_grid(grid_type, width, height).unwrap();
            let gen = make_generator(algorithm, grid, rng(321)).unwrap();
            let mut steps = Steps::new(gen).unwrap();
            while let Some(snapshot) = steps.advance() {
                assert_mirrored(snapshot);
            }
        }
    }
}

#[test]
fn abandoned_generation_leaves_a_valid_partial_maze() {
    let grid = make_grid("rect", 8, 8).unwrap();
    let gen = make_generator("backtracking", grid, rng(17)).unwrap();
    let mut steps = Steps::new(gen).unwrap();
    for _ in 0..5 {
        steps.advance();
    }
    assert_mirrored(steps.grid());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_run_is_connected_and_mirrored(
        seed in any::<u64>(),
        width in 1usize..7,
        height in 2usize..7,
        alg in 0usize..3,
        hex in any::<bool>(),
    ) {
        let grid_type = if hex { "hex" } else { "rect" };
        let grid = make_grid(grid_type, width, height).unwrap();
        let mut gen = make_generator(ALGORITHM_NAMES[alg], grid, rng(seed)).unwrap();
        let maze = gen.generate();
        prop_assert_eq!(reachable_cells(maze, (0, 0)), width * height);
        assert_mirrored(maze);
    }
}
