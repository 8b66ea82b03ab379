use blockfall::core::{GameState, Point, ShapeSequence};
use blockfall::journal::{JournalEntry, SessionJournal};
use blockfall::types::{Color, Command, Shape, BOARD_WIDTH};
use serde_json::Value;

#[test]
fn journal_records_a_session_as_json_lines() {
    let mut game = GameState::with_source(ShapeSequence::repeat(Shape::I));
    for y in 16..=18 {
        for x in 0..BOARD_WIDTH as i32 {
            if x != 5 {
                game.board_mut().write(Point::new(x, y), Some(Color::Green));
            }
        }
    }

    let mut journal = SessionJournal::with_writer(Vec::new());
    journal.record(JournalEntry::Start { seed: 9 });

    game.apply_command(Command::Drop);
    game.process_game_loop(0.0);
    journal.record_all(game.drain_events());

    game.apply_command(Command::Restart);
    journal.record_all(game.drain_events());
    journal.record(JournalEntry::Quit {
        score: game.score(),
    });

    let bytes = journal.into_inner().unwrap();
    let lines: Vec<Value> = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    let types: Vec<&str> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
    assert_eq!(
        types,
        vec![
            "start",
            "locked",
            "rows_cleared",
            "speed_changed",
            "speed_changed",
            "reset",
            "quit"
        ]
    );

    for (i, v) in lines.iter().enumerate() {
        assert_eq!(v["seq"], i as u64);
    }

    assert_eq!(lines[1]["shape"], "i");
    assert_eq!(lines[1]["color"], "blue_light");
    assert_eq!(lines[1]["y"], 16);
    assert_eq!(lines[2]["rows"], 3);
    assert_eq!(lines[2]["score"], 300);
    assert_eq!(lines[3]["seconds_per_tick"], 0.65);
    assert_eq!(lines[4]["seconds_per_tick"], 0.75);
    assert_eq!(lines[5]["final_score"], 300);
    assert_eq!(lines[6]["score"], 0);
}

#[test]
fn journal_open_appends_to_file() {
    let path = std::env::temp_dir().join(format!("blockfall-journal-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut journal = SessionJournal::open(&path).unwrap();
    journal.record(JournalEntry::Start { seed: 1 });
    journal.flush();
    drop(journal);

    let mut journal = SessionJournal::open(&path).unwrap();
    journal.record(JournalEntry::Quit { score: 0 });
    journal.flush();
    drop(journal);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    let _ = std::fs::remove_file(&path);
}
