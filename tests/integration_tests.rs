// Integration tests for the knight-search application
// These tests verify that all modules work together correctly

use knight_search::cli::CliInterface;
use knight_search::session::{SearchInterface, SearchReport, UserAction};
use knight_search::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

const FORTRAN_GRID: &str = "\
F . . . . . . .
. . O . . . . .
. . . . R . . .
. . . . . . T .
. . . . . . . .
. . . . . . . R
. . . . N . . .
. . . . . . A .
";

fn fortran_chain() -> Path {
    [(0, 0), (1, 2), (2, 4), (3, 6), (5, 7), (7, 6), (6, 4)]
        .into_iter()
        .map(Coord::from)
        .collect()
}

fn assert_traces(grid: &Grid, word: &str, path: &[Coord]) {
    let letters: Vec<char> = word.to_lowercase().chars().collect();
    assert_eq!(path.len(), letters.len(), "path length for '{word}'");
    for (coord, letter) in path.iter().zip(&letters) {
        assert_eq!(grid.letter_at(*coord).unwrap(), *letter);
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_knight_move_to(pair[1]),
            "{} -> {} is not a knight move",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_fortran_scenario_from_spaced_text() {
    // Whitespace inside rows is stripped before the length check.
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    assert_eq!(grid.find_path("FORTRAN"), Some(fortran_chain()));
    assert_eq!(grid.find_path("fortran"), Some(fortran_chain()));
}

#[test]
fn test_grid_file_round_trip_then_search() {
    let path = std::env::temp_dir().join("knight_search_integration_grid.txt");
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    grid.save(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved.lines().count(), GRID_SIZE);
    assert!(saved.lines().all(|line| line.chars().count() == GRID_SIZE));

    let loaded = Grid::load(&path).unwrap();
    assert_eq!(loaded.cells(), grid.cells());
    assert_eq!(loaded.find_path("fortran"), Some(fortran_chain()));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_construction_errors_surface() {
    let short = FORTRAN_GRID.lines().take(7).collect::<Vec<_>>().join("\n");
    assert!(matches!(
        short.parse::<Grid>(),
        Err(GridError::RowCount { found: 7, .. })
    ));

    let padded = FORTRAN_GRID.replacen("F . . .", "F . . . .", 1);
    assert!(matches!(
        padded.parse::<Grid>(),
        Err(GridError::RowLength { row: 0, found: 9, .. })
    ));
}

#[test]
fn test_every_grid_letter_is_a_single_step_path() {
    let mut rng = StdRng::seed_from_u64(2024);
    let generated = generate_grid(["pathfinder", "knight"], &mut rng);
    let grid = &generated.grid;
    for coord in (0..GRID_SIZE).flat_map(|r| (0..GRID_SIZE).map(move |c| Coord::new(r, c))) {
        let letter = grid.letter_at(coord).unwrap();
        let path = grid.find_path(&letter.to_string()).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(grid.letter_at(path[0]).unwrap(), letter);

        let upper: String = letter.to_uppercase().collect();
        assert_eq!(grid.find_path(&upper).map(|p| p.len()), Some(1));
    }
}

#[test]
fn test_generated_grids_trace_their_placed_words() {
    let words = [
        "knight", "bishop", "castle", "gambit", "queen", "pawn", "check", "mate",
    ];
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = generate_grid(words, &mut rng);
        for word in words {
            let placement = &generated.placements[word];
            // The placed prefix is on the board, so it must be traceable.
            if !placement.placed.is_empty() {
                let path = generated.grid.find_path(&placement.placed).unwrap();
                assert_traces(&generated.grid, &placement.placed, &path);
            }
            if placement.is_complete() {
                let path = generated.grid.find_path(word).unwrap();
                assert_traces(&generated.grid, word, &path);
            }
        }
    }
}

#[test]
fn test_longest_word_is_maximal_and_alphabetical() {
    let mut rng = StdRng::seed_from_u64(11);
    let words: Vec<String> = ["rook", "king", "pawn", "queen", "knight", "bishop", "xylophone"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let generated = generate_grid(&words, &mut rng);
    let grid = &generated.grid;
    let before = words.clone();

    let traceable: Vec<&String> = words.iter().filter(|w| grid.find_path(w).is_some()).collect();
    let best = find_longest_word(grid, &words);
    assert_eq!(words, before);

    match best {
        None => assert!(traceable.is_empty()),
        Some(found) => {
            let longest = traceable.iter().map(|w| w.chars().count()).max().unwrap();
            assert_eq!(found.word.chars().count(), longest);
            let earliest = traceable
                .iter()
                .filter(|w| w.chars().count() == longest)
                .min()
                .unwrap();
            assert_eq!(&&found.word, earliest);
            assert_traces(grid, &found.word, &found.path);
        }
    }
}

#[test]
fn test_foo_bar_tie() {
    let grid: Grid = "\
b.......
..a.....
....r...
........
........
......o.
........
.....o.f
"
    .parse()
    .unwrap();
    let found = find_longest_word(&grid, &["foo", "bar"]).unwrap();
    assert_eq!(found.word, "bar");
    let found = find_longest_word(&grid, &["bar", "foo"]).unwrap();
    assert_eq!(found.word, "bar");
}

#[test]
fn test_no_result_cases() {
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    let empty: Vec<String> = Vec::new();
    assert_eq!(find_longest_word(&grid, &empty), None);
    assert_eq!(find_longest_word(&grid, &["", "python", "java"]), None);
    assert!(find_all_words(&grid, &["python"], None).is_empty());
}

#[test]
fn test_absent_letter_needs_no_traversal() {
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    // A zero step budget would abandon any search that actually started.
    assert_eq!(grid.search("fortranz", Some(0)), SearchOutcome::NotFound);
    assert_eq!(
        grid.search("fortran", Some(0)),
        SearchOutcome::Abandoned { steps: 0 }
    );
}

#[test]
fn test_wordlist_to_selector_pipeline() {
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    let words = load_words_from_str("for\nfort\nFORTRAN tan\nrat\n");
    let found = find_longest_word(&grid, &words).unwrap();
    assert_eq!(found.word, "FORTRAN");
    assert_eq!(found.path, fortran_chain());
}

/// Real line parsing from `CliInterface`, with everything shown recorded.
struct RecordingSession<R: std::io::BufRead> {
    input: CliInterface<R>,
    grids_shown: usize,
    reports: Vec<SearchReport>,
    exited: bool,
}

impl<R: std::io::BufRead> RecordingSession<R> {
    fn new(reader: R) -> Self {
        Self {
            input: CliInterface::new(reader),
            grids_shown: 0,
            reports: Vec::new(),
            exited: false,
        }
    }
}

impl<R: std::io::BufRead> SearchInterface for RecordingSession<R> {
    fn display_grid(&mut self, _grid: &Grid) {
        self.grids_shown += 1;
    }

    fn read_action(&mut self) -> Option<UserAction> {
        self.input.read_action()
    }

    fn display_report(&mut self, report: &SearchReport) {
        self.reports.push(report.clone());
    }

    fn display_exit_message(&mut self) {
        self.exited = true;
    }
}

fn found(word: &str, path: Path) -> SearchReport {
    SearchReport::Found(WordMatch {
        word: word.to_string(),
        path,
    })
}

fn missing(words: &[&str]) -> SearchReport {
    SearchReport::Missing {
        words: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[test]
fn test_interactive_session_over_cli() {
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    // The line after 'exit' must never be answered.
    let input = "fortran\n\ngrid\nfor fort\nzebra\ntrace exit\nexit\nfortran\n";
    let mut session = RecordingSession::new(Cursor::new(input));
    search_loop(&grid, &mut session, None);

    assert!(session.exited);
    // Once on start, once for the 'grid' command.
    assert_eq!(session.grids_shown, 2);
    assert_eq!(
        session.reports,
        vec![
            found("fortran", fortran_chain()),
            found("fort", fortran_chain()[..4].to_vec()),
            missing(&["zebra"]),
            missing(&["exit"]),
        ]
    );
}

#[test]
fn test_interactive_session_ends_at_end_of_input() {
    let grid: Grid = FORTRAN_GRID.parse().unwrap();
    let mut session = RecordingSession::new(Cursor::new("tran\n"));
    search_loop(&grid, &mut session, Some(50));

    assert!(session.exited);
    assert_eq!(session.grids_shown, 1);
    assert_eq!(session.reports, vec![found("tran", fortran_chain()[3..].to_vec())]);
}
