use anyhow::bail;
use anyhow::Result;
use serde_json::json;
use test_utils::insta_snapshot;
use test_utils::server_info_fixture;

use super::Roster;
use super::INACTIVE_SUFFIX;
use crate::domain::models::InboundMessage;
use crate::domain::models::LineDelimiter;
use crate::domain::models::ServerSnapshot;
use crate::domain::models::Specialization;

fn titles(roster: &Roster) -> Vec<String> {
    return roster
        .entries()
        .iter()
        .map(|e| return e.title.to_string())
        .collect();
}

#[test]
fn it_creates_one_entry_per_name() {
    let mut roster = Roster::default();
    let snapshot = vec![
        ServerSnapshot::new("alpha", true, ""),
        ServerSnapshot::new("beta", false, ""),
    ];
    for _ in 0..10 {
        roster.apply_snapshot(&snapshot, LineDelimiter::Crlf);
    }
    roster.apply_snapshot(
        &[ServerSnapshot::new("beta", true, "")],
        LineDelimiter::Crlf,
    );
    roster.apply_snapshot(
        &[
            ServerSnapshot::new("gamma", true, ""),
            ServerSnapshot::new("alpha", true, ""),
        ],
        LineDelimiter::Crlf,
    );

    assert_eq!(roster.len(), 3);
    assert_eq!(titles(&roster), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn it_creates_one_entry_for_duplicates_in_one_snapshot() {
    let mut roster = Roster::default();
    roster.apply_snapshot(
        &[
            ServerSnapshot::new("alpha", true, ""),
            ServerSnapshot::new("alpha", true, ""),
        ],
        LineDelimiter::Crlf,
    );
    assert_eq!(roster.len(), 1);
}

#[test]
fn it_marks_inactive_once() {
    let mut roster = Roster::default();
    let snapshot = vec![ServerSnapshot::new("beta", false, "")];
    roster.apply_snapshot(&snapshot, LineDelimiter::Crlf);
    roster.apply_snapshot(&snapshot, LineDelimiter::Crlf);

    let entry = roster.get("beta").unwrap();
    assert!(entry.inactive);
    assert_eq!(entry.title, format!("beta{INACTIVE_SUFFIX}"));
}

#[test]
fn it_activates_without_leftover_suffix() {
    let mut roster = Roster::default();
    roster.apply_snapshot(
        &[ServerSnapshot::new("alpha", false, "")],
        LineDelimiter::Crlf,
    );
    roster.apply_snapshot(
        &[ServerSnapshot::new("alpha", true, "line1\r\nline2")],
        LineDelimiter::Crlf,
    );

    let entry = roster.get("alpha").unwrap();
    assert!(!entry.inactive);
    assert_eq!(entry.title, "alpha");
    assert_eq!(
        entry.console.lines(),
        &["line1".to_string(), "line2".to_string()]
    );
}

#[test]
fn it_is_idempotent_for_identical_snapshots() -> Result<()> {
    let snapshot = match InboundMessage::from_value(server_info_fixture())? {
        Some(InboundMessage::ServerInfo { servers, .. }) => servers,
        _ => bail!("Wrong enum"),
    };

    let mut roster = Roster::default();
    roster.apply_snapshot(&snapshot, LineDelimiter::Crlf);
    let first_titles = titles(&roster);
    let first_lines = roster
        .entries()
        .iter()
        .map(|e| return e.console.lines().len())
        .collect::<Vec<usize>>();

    roster.apply_snapshot(&snapshot, LineDelimiter::Crlf);
    let second_lines = roster
        .entries()
        .iter()
        .map(|e| return e.console.lines().len())
        .collect::<Vec<usize>>();

    assert_eq!(first_titles, titles(&roster));
    assert_eq!(first_lines, second_lines);
    assert_eq!(first_lines, vec![2, 1, 0]);

    return Ok(());
}

#[test]
fn it_appends_output_to_known_servers() -> Result<()> {
    let mut roster = Roster::default();
    roster.apply_snapshot(
        &[ServerSnapshot::new("alpha", true, "")],
        LineDelimiter::Br,
    );
    let appended = roster.append_output("alpha", "x<br/>y<br/>", LineDelimiter::Br)?;

    assert_eq!(appended, 2);
    assert_eq!(
        roster.get("alpha").unwrap().console.lines(),
        &["x".to_string(), "y".to_string()]
    );
    return Ok(());
}

#[test]
fn it_rejects_output_for_unknown_servers() {
    let mut roster = Roster::default();
    let res = roster.append_output("ghost", "boo", LineDelimiter::Crlf);
    assert!(res.is_err());
    assert!(roster.is_empty());
}

#[test]
fn it_refreshes_specialized_titles() -> Result<()> {
    let snapshot = match InboundMessage::from_value(server_info_fixture())? {
        Some(InboundMessage::ServerInfo { servers, .. }) => servers,
        _ => bail!("Wrong enum"),
    };

    let mut roster = Roster::default();
    roster.apply_snapshot(&snapshot, LineDelimiter::Crlf);
    roster.refresh_titles();

    assert_eq!(
        roster.get("survival").unwrap().specialization,
        Some(Specialization::Minecraft)
    );
    insta_snapshot(|| {
        insta::assert_debug_snapshot!(titles(&roster), @r###"
        [
            "alpha",
            "survival - 2/20 (ready)",
            "beta (inactive)",
        ]
        "###);
    });

    return Ok(());
}

#[test]
fn it_falls_back_on_malformed_specialization() {
    let mut snapshot = ServerSnapshot::new("tr", true, "");
    snapshot.specialization = Some("Terraria".to_string());
    snapshot.specialized_info = Some(json!({"player_count": "many"}));

    let mut roster = Roster::default();
    roster.apply_snapshot(&[snapshot], LineDelimiter::Crlf);
    roster.refresh_titles();

    assert_eq!(roster.get("tr").unwrap().title, "tr");
}

#[test]
fn it_uses_generic_title_for_inactive_specialized_servers() {
    let mut snapshot = ServerSnapshot::new("mc", false, "");
    snapshot.specialization = Some("Minecraft".to_string());
    snapshot.specialized_info = Some(json!({"player_count": 0, "max_players": 20}));

    let mut roster = Roster::default();
    roster.apply_snapshot(&[snapshot], LineDelimiter::Crlf);
    roster.refresh_titles();

    assert_eq!(roster.get("mc").unwrap().title, "mc (inactive)");
}
