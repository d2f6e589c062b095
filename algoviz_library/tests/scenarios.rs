//! End-to-end sessions driven the way an interactive host drives them

use algoviz_library::{
    CancelToken, Cancellation, CellStatus, Focus, Grid, PathfindingAlgorithm, PathfindingHost,
    PathfindingVisualizer, Position, Role, SearchOutcome, SortOutcome, SortRun, SortingAlgorithm,
    SortingHost, SortingVisualizer, StepControl,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Keeps every frame it is shown, the way a renderer would draw them
#[derive(Default)]
struct FrameLog {
    frames: Vec<Vec<CellStatus>>,
    no_path: bool,
}

impl Cancellation for FrameLog {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl StepControl<Grid> for FrameLog {
    fn step(&mut self, grid: &Grid, _focus: Focus) {
        self.frames
            .push(grid.cells().iter().map(|c| c.status()).collect());
    }
}

impl PathfindingHost for FrameLog {
    fn notify_no_path_found(&mut self) {
        self.no_path = true;
    }
}

#[test]
fn frames_show_monotone_progress() {
    let grid = Grid::with_endpoints(6, Position::new(0, 0), Position::new(5, 5)).unwrap();
    let mut session = PathfindingVisualizer::from_grid(grid);
    session.pick_algorithm(PathfindingAlgorithm::BreadthFirst);

    let mut host = FrameLog::default();
    assert!(session.start(&mut host).found());
    assert!(!host.no_path);

    // a cell never returns to Walkable once the search has touched it
    for pair in host.frames.windows(2) {
        for (before, after) in pair[0].iter().zip(&pair[1]) {
            if *before != CellStatus::Walkable {
                assert_ne!(*after, CellStatus::Walkable);
            }
        }
    }
    // the last frame shows the whole route
    let last = host.frames.last().unwrap();
    assert_eq!(
        last.iter().filter(|s| **s == CellStatus::Path).count(),
        9
    );
}

#[test]
fn default_board_with_random_obstacles() {
    let mut session = PathfindingVisualizer::new(80).unwrap();
    assert_eq!(session.grid().start(), Position::new(6, 6));
    assert_eq!(session.grid().end(), Position::new(73, 73));

    let mut rng = StdRng::seed_from_u64(2024);
    let barriers = session.generate_obstacles(&mut rng, 0.13, 4).unwrap();
    assert!(barriers > 0 && barriers < 6400);

    let mut results = Vec::new();
    for algorithm in PathfindingAlgorithm::ALL {
        session.pick_algorithm(algorithm);
        let mut host = FrameLog::default();
        let outcome = session.start(&mut host);
        assert_eq!(host.no_path, outcome == SearchOutcome::Exhausted);
        results.push(outcome);
    }

    let lengths: Vec<_> = results[..3].iter().map(|o| o.summary().map(|s| s.length)).collect();
    assert!(lengths.iter().all(|l| *l == lengths[0]));
    assert_eq!(results[3].found(), results[0].found());
}

#[test]
fn editing_between_runs() {
    let mut session = PathfindingVisualizer::new(12).unwrap();
    let mut host = FrameLog::default();
    let before = session.start(&mut host).summary().unwrap().length;

    session.relocate(Role::Start, Position::new(0, 0)).unwrap();
    session.relocate(Role::End, Position::new(11, 11)).unwrap();
    let after = session.start(&mut host).summary().unwrap().length;

    assert_eq!(before, 10);
    assert_eq!(after, 22);
    assert_eq!(session.grid().count(CellStatus::Start), 1);
    assert_eq!(session.grid().count(CellStatus::End), 1);
}

/// Stops the sort from inside its step hook, like a stop key
struct StopKey {
    token: CancelToken,
    press_at: usize,
    seen: usize,
}

impl Cancellation for StopKey {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl StepControl<[u32]> for StopKey {
    fn step(&mut self, _bars: &[u32], _focus: Focus) {
        self.seen += 1;
        if self.seen == self.press_at {
            self.token.cancel();
        }
    }
}

impl SortingHost for StopKey {}

#[test]
fn stop_key_halts_every_sort() {
    for algorithm in SortingAlgorithm::ALL {
        let mut session = SortingVisualizer::new(200);
        session.pick_algorithm(algorithm);
        session.shuffle(&mut StdRng::seed_from_u64(17));

        let mut host = StopKey {
            token: session.token(),
            press_at: 25,
            seen: 0,
        };
        assert_eq!(
            session.start(&mut host),
            SortRun::Finished(SortOutcome::Cancelled),
            "{}",
            algorithm
        );
        assert_eq!(host.seen, 25);

        let mut bars = session.bars().to_vec();
        bars.sort_unstable();
        assert_eq!(bars, (1..=200).collect::<Vec<u32>>());
    }
}
