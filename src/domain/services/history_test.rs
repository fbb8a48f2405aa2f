use super::CommandHistory;
use super::HISTORY_LIMIT;

#[test]
fn it_recalls_in_reverse_order() {
    let mut history = CommandHistory::default();
    history.push("list");
    history.push("say hi");

    assert_eq!(history.older(), Some("say hi"));
    assert_eq!(history.older(), Some("list"));
    assert_eq!(history.newer(), Some("say hi"));
    assert_eq!(history.newer(), None);
}

#[test]
fn it_keeps_only_the_last_25() {
    let mut history = CommandHistory::default();
    for idx in 0..30 {
        history.push(&format!("cmd{idx}"));
    }
    assert_eq!(history.len(), HISTORY_LIMIT);

    let mut recalled = vec![];
    for _ in 0..HISTORY_LIMIT {
        recalled.push(history.older().unwrap().to_string());
    }

    let expected = (5..30).rev().map(|idx| return format!("cmd{idx}")).collect::<Vec<String>>();
    assert_eq!(recalled, expected);
}

#[test]
fn it_clamps_past_the_oldest() {
    let mut history = CommandHistory::default();
    for idx in 0..30 {
        history.push(&format!("cmd{idx}"));
    }
    for _ in 0..40 {
        history.older();
    }
    assert_eq!(history.older(), Some("cmd5"));
}

#[test]
fn it_clamps_past_the_newest() {
    let mut history = CommandHistory::default();
    history.push("stop");
    assert_eq!(history.newer(), None);
    assert_eq!(history.newer(), None);
    assert_eq!(history.older(), Some("stop"));
}

#[test]
fn it_handles_empty_history() {
    let mut history = CommandHistory::default();
    assert!(history.is_empty());
    assert_eq!(history.older(), None);
    assert_eq!(history.newer(), None);
}

#[test]
fn it_resets_cursor_on_push() {
    let mut history = CommandHistory::default();
    history.push("a");
    history.push("b");
    history.older();
    history.older();
    history.push("c");
    assert_eq!(history.older(), Some("c"));
}
