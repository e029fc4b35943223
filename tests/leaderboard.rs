use wc_predictor::leaderboard::{FileStore, Leaderboard};

#[test]
fn keeps_only_max_size_sorted_entries() {
    let mut board = Leaderboard::new("Cup", 5);
    for (idx, score) in [12u64, 40, 3, 27, 8, 19, 33, 1].into_iter().enumerate() {
        board.insert(format!("p{idx}"), score);
    }
    assert_eq!(board.len(), 5);
    let scores: Vec<u64> = board.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![40, 33, 27, 19, 12]);
}

#[test]
fn beating_the_minimum_evicts_it() {
    let mut board = Leaderboard::new("Cup", 3);
    board.insert("a", 10);
    board.insert("b", 20);
    board.insert("c", 30);
    assert!(board.insert("d", 11));
    let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b", "d"]);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileStore::new(dir.path());

    let mut board = Leaderboard::new("World Cup Predictor", 4);
    board.insert("Sam", 7);
    board.insert("Lee", 5);
    board.insert("Jo", 5);
    board.persist(&store).expect("persist");
    assert!(store.path_for("World Cup Predictor").exists());

    let mut restored = Leaderboard::new("World Cup Predictor", 10);
    assert!(restored.restore(&store));
    assert_eq!(restored.entries(), board.entries());
    assert_eq!(restored.max_size(), 4);
}

#[test]
fn restore_from_empty_dir_is_a_no_op() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FileStore::new(dir.path().join("never-created"));
    let mut board = Leaderboard::new("Cup", 3);
    board.insert("Sam", 7);
    assert!(!board.restore(&store));
    assert_eq!(board.len(), 1);
}
