use std::collections::VecDeque;

use gridstar_board::Board;
use gridstar_core::{CellId, Point};
use gridstar_search::{GridModel, SearchError, find_path, find_path_with_stats, manhattan};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn id(b: &Board, x: i32, y: i32) -> CellId {
    b.cell_id_of(Point::new(x, y)).unwrap()
}

/// Step count of a shortest path by plain breadth-first search.
fn bfs_steps(b: &Board, start: CellId, end: CellId) -> Option<usize> {
    let mut dist = vec![usize::MAX; b.cell_count()];
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::new();
    dist[start.index()] = 0;
    queue.push_back(start);
    while let Some(c) = queue.pop_front() {
        if c == end {
            return Some(dist[c.index()]);
        }
        nbuf.clear();
        b.neighbors(c, &mut nbuf);
        for &n in &nbuf {
            if dist[n.index()] == usize::MAX {
                dist[n.index()] = dist[c.index()] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

/// Check endpoints, adjacency and obstacle avoidance of a non-empty path.
fn assert_valid_path(b: &Board, path: &[CellId], start: CellId, end: CellId) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for c in path {
        assert!(!b.is_obstacle(*c), "path crosses obstacle {c}");
    }
    for w in path.windows(2) {
        let (a, c) = (b.coordinates_of(w[0]), b.coordinates_of(w[1]));
        assert!(a.is_adjacent_4(c), "{a} and {c} are not adjacent");
    }
}

#[test]
fn open_five_by_five_corner_to_corner() {
    let b = Board::new(5, 5);
    let (start, end) = (CellId::new(0), CellId::new(24));
    assert_eq!(b.coordinates_of(start), Point::new(0, 0));
    assert_eq!(b.coordinates_of(end), Point::new(4, 4));

    let path = find_path(&b, start, end).unwrap();
    assert_eq!(path.len() - 1, 8);
    assert_valid_path(&b, &path, start, end);
}

#[test]
fn column_wall_with_gap_forces_detour_through_gap() {
    let mut b = Board::new(5, 5);
    for y in 0..4 {
        b.draw_obstacle(Point::new(2, y)).unwrap();
    }
    let (start, end) = (CellId::new(0), CellId::new(24));

    let path = find_path(&b, start, end).unwrap();
    assert_eq!(path.len() - 1, 8);
    assert!(path.contains(&id(&b, 2, 4)));
    assert_valid_path(&b, &path, start, end);
}

#[test]
fn complete_wall_separates_start_and_end() {
    let mut b = Board::new(5, 5);
    for y in 0..5 {
        b.draw_obstacle(Point::new(2, y)).unwrap();
    }
    let outcome = find_path_with_stats(&b, CellId::new(0), CellId::new(24)).unwrap();
    assert!(outcome.path.is_empty());
    assert!(!outcome.is_found());
    assert_eq!(outcome.stats.expanded, 10);
}

#[test]
fn start_enclosed_by_ring() {
    let b = Board::from_layout(
        "\
.....
.###.
.#S#.
.###.
....E",
    )
    .unwrap();
    assert_eq!(b.find_path().unwrap(), Vec::<CellId>::new());
}

#[test]
fn adjacent_start_and_end() {
    let b = Board::new(4, 4);
    let (start, end) = (id(&b, 1, 2), id(&b, 2, 2));
    assert_eq!(find_path(&b, start, end).unwrap(), vec![start, end]);
    let (start, end) = (id(&b, 3, 0), id(&b, 3, 1));
    assert_eq!(find_path(&b, start, end).unwrap(), vec![start, end]);
}

#[test]
fn start_equals_end_is_empty() {
    let b = Board::new(3, 3);
    let c = id(&b, 1, 1);
    assert!(find_path(&b, c, c).unwrap().is_empty());
}

#[test]
fn open_grid_paths_match_manhattan_distance() {
    let b = Board::new(6, 4);
    for s in b.range() {
        for e in b.range() {
            let (start, end) = (id(&b, s.x, s.y), id(&b, e.x, e.y));
            let path = find_path(&b, start, end).unwrap();
            if start == end {
                assert!(path.is_empty());
                continue;
            }
            assert_eq!(path.len() - 1, manhattan(s, e) as usize, "{s} -> {e}");
            assert_valid_path(&b, &path, start, end);
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut b = Board::new(16, 16);
    b.scatter_obstacles(&mut StdRng::seed_from_u64(7), 0.3);
    b.set_start(Point::new(0, 0)).unwrap();
    b.set_end(Point::new(15, 15)).unwrap();
    let first = find_path_with_stats(&b, b.start().unwrap(), b.end().unwrap()).unwrap();
    let second = find_path_with_stats(&b, b.start().unwrap(), b.end().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn matches_breadth_first_search_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..40 {
        let w = rng.random_range(2..18);
        let h = rng.random_range(2..18);
        let mut b = Board::new(w, h);
        b.scatter_obstacles(&mut rng, 0.35);

        let s = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        let e = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        b.set_start(s).unwrap();
        b.set_end(e).unwrap();
        let (Some(start), Some(end)) = (b.start(), b.end()) else {
            // start and end landed on the same cell
            continue;
        };

        let path = find_path(&b, start, end).unwrap();
        match bfs_steps(&b, start, end) {
            Some(steps) => {
                assert_eq!(path.len() - 1, steps, "round {round}:\n{}", b.render(&path));
                assert_valid_path(&b, &path, start, end);
            }
            None => assert!(path.is_empty(), "round {round}:\n{b}"),
        }
    }
}

#[test]
fn cheaper_route_found_later_leaves_a_stale_entry() {
    // The pillar at (2, 4) lets (1, 4) be reached twice: first from above at
    // cost 5, then from below at cost 3.
    let b = Board::from_layout(
        "\
#.....
.E###.
#####.
#.....
..#.##
#..S##",
    )
    .unwrap();
    let (start, end) = (b.start().unwrap(), b.end().unwrap());
    let outcome = find_path_with_stats(&b, start, end).unwrap();
    assert!(outcome.stats.stale > 0);
    assert_eq!(Some(outcome.steps()), bfs_steps(&b, start, end));
    assert_valid_path(&b, &outcome.path, start, end);
}

#[test]
fn obstacle_endpoints_are_rejected() {
    let mut b = Board::new(3, 3);
    b.draw_obstacle(Point::new(1, 1)).unwrap();
    let err = find_path(&b, id(&b, 1, 1), id(&b, 0, 0)).unwrap_err();
    assert!(matches!(err, SearchError::EndpointIsObstacle { .. }));
    let err = find_path(&b, id(&b, 0, 0), CellId::new(9)).unwrap_err();
    assert!(matches!(err, SearchError::EndpointOutOfGrid { .. }));
}

#[test]
fn editing_between_searches_changes_the_result() {
    let mut b = Board::from_layout("S...\n....\n...E").unwrap();
    assert_eq!(b.find_path().unwrap().len(), 6);
    for y in 0..3 {
        b.draw_obstacle(Point::new(2, y)).unwrap();
    }
    assert!(b.find_path().unwrap().is_empty());
    b.erase_obstacle(Point::new(2, 1)).unwrap();
    let path = b.find_path().unwrap();
    assert_eq!(path.len(), 6);
    assert!(path.contains(&id(&b, 2, 1)));
}
