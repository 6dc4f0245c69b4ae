//! Tests for single-step application and socket-based restriction

use wavegrid::algorithm::candidates::{CandidateSet, CellState};
use wavegrid::algorithm::propagation::{Step, apply_step};
use wavegrid::spatial::grid::Grid;
use wavegrid::spatial::tiles::{Direction, SocketTile, TilesDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terrain {
    Wall,
    Sand,
}

impl SocketTile for Terrain {
    type Socket = Self;

    fn socket(&self, _direction: Direction) -> Self {
        *self
    }
}

fn terrain_definition(width: usize, height: usize) -> TilesDefinition<Terrain> {
    TilesDefinition {
        tiles: vec![Terrain::Wall, Terrain::Sand],
        default_tile: Terrain::Sand,
        width,
        height,
        seed: 0,
    }
}

fn blank_grid(width: usize, height: usize) -> Grid<CellState> {
    Grid::repeat(width, height, CellState::Superposition(CandidateSet::all(2)))
}

fn candidates_at(grid: &Grid<CellState>, pos: [i32; 2]) -> Vec<usize> {
    match grid.get(pos) {
        Some(CellState::Superposition(set)) => set.to_vec(),
        other => panic!("expected superposition at {pos:?}, got {other:?}"),
    }
}

#[test]
fn place_tile_overwrites_unconditionally_and_fans_out() {
    let definition = terrain_definition(2, 2);
    let mut grid = blank_grid(2, 2);
    grid.set([0, 0], CellState::Fixed(1));

    let follow_ups = apply_step(
        &mut grid,
        &definition,
        &Step::PlaceTile { pos: [0, 0], tile: 0 },
    );

    assert_eq!(grid.get([0, 0]), Some(&CellState::Fixed(0)));
    // One restriction per neighbour, out-of-bounds targets included
    assert_eq!(
        follow_ups,
        vec![
            Step::RestrictNeighbor { from: [0, 0], to: [0, -1] },
            Step::RestrictNeighbor { from: [0, 0], to: [-1, 0] },
            Step::RestrictNeighbor { from: [0, 0], to: [0, 1] },
            Step::RestrictNeighbor { from: [0, 0], to: [1, 0] },
        ]
    );
}

#[test]
fn restriction_keeps_only_matching_sockets() {
    let definition = terrain_definition(2, 1);
    let mut grid = blank_grid(2, 1);

    let follow_ups = apply_step(
        &mut grid,
        &definition,
        &Step::PlaceTile { pos: [0, 0], tile: 0 },
    );
    for step in &follow_ups {
        let produced = apply_step(&mut grid, &definition, step);
        assert!(produced.is_empty());
    }

    assert_eq!(candidates_at(&grid, [1, 0]), vec![0]);
}

#[test]
fn restriction_requires_a_fixed_origin() {
    let definition = terrain_definition(2, 1);
    let mut grid = blank_grid(2, 1);

    apply_step(
        &mut grid,
        &definition,
        &Step::RestrictNeighbor { from: [0, 0], to: [1, 0] },
    );

    assert_eq!(candidates_at(&grid, [1, 0]), vec![0, 1]);
}

#[test]
fn restriction_skips_already_fixed_targets() {
    let definition = terrain_definition(2, 1);
    let mut grid = blank_grid(2, 1);
    grid.set([0, 0], CellState::Fixed(0));
    grid.set([1, 0], CellState::Fixed(1));

    apply_step(
        &mut grid,
        &definition,
        &Step::RestrictNeighbor { from: [0, 0], to: [1, 0] },
    );

    assert_eq!(grid.get([1, 0]), Some(&CellState::Fixed(1)));
}

#[test]
fn out_of_bounds_restrictions_are_no_ops() {
    let definition = terrain_definition(1, 1);
    let mut grid = blank_grid(1, 1);
    grid.set([0, 0], CellState::Fixed(0));

    let before = grid.clone();
    for to in [[0, -1], [-1, 0], [0, 1], [1, 0]] {
        let produced = apply_step(
            &mut grid,
            &definition,
            &Step::RestrictNeighbor { from: [0, 0], to },
        );
        assert!(produced.is_empty());
    }
    assert_eq!(grid, before);
}

#[test]
fn out_of_range_tile_restricts_with_default_sockets() {
    let definition = terrain_definition(2, 1);
    let mut grid = blank_grid(2, 1);

    // Index 7 is outside the catalog; its sockets resolve to the default sand
    for step in apply_step(
        &mut grid,
        &definition,
        &Step::PlaceTile { pos: [0, 0], tile: 7 },
    ) {
        apply_step(&mut grid, &definition, &step);
    }

    assert_eq!(grid.get([0, 0]), Some(&CellState::Fixed(7)));
    assert_eq!(candidates_at(&grid, [1, 0]), vec![1]);
}

#[test]
fn restriction_order_does_not_change_the_outcome() {
    let definition = terrain_definition(3, 1);
    let placements = [
        Step::PlaceTile { pos: [0, 0], tile: 0 },
        Step::PlaceTile { pos: [2, 0], tile: 0 },
    ];

    let mut forward = blank_grid(3, 1);
    let mut fan_out = Vec::new();
    for step in &placements {
        fan_out.extend(apply_step(&mut forward, &definition, step));
    }
    for step in &fan_out {
        apply_step(&mut forward, &definition, step);
    }

    let mut reversed = blank_grid(3, 1);
    let mut fan_out_rev = Vec::new();
    for step in &placements {
        fan_out_rev.extend(apply_step(&mut reversed, &definition, step));
    }
    for step in fan_out_rev.iter().rev() {
        apply_step(&mut reversed, &definition, step);
    }

    // The shared middle cell is restricted from both sides in both runs;
    // only removing candidates means the order cannot matter
    assert_eq!(forward, reversed);
    assert_eq!(candidates_at(&forward, [1, 0]), vec![0]);
}

#[test]
fn conflicting_neighbours_empty_the_candidate_set() {
    let definition = terrain_definition(3, 1);
    let mut grid = blank_grid(3, 1);
    grid.set([0, 0], CellState::Fixed(0));
    grid.set([2, 0], CellState::Fixed(1));

    apply_step(
        &mut grid,
        &definition,
        &Step::RestrictNeighbor { from: [0, 0], to: [1, 0] },
    );
    assert_eq!(candidates_at(&grid, [1, 0]), vec![0]);

    apply_step(
        &mut grid,
        &definition,
        &Step::RestrictNeighbor { from: [2, 0], to: [1, 0] },
    );
    assert_eq!(candidates_at(&grid, [1, 0]), vec![]);
}
