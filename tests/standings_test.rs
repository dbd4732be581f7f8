use pitch_backend::league::standings::StandingsCalculator;
use pitch_backend::models::league::StandingsRow;

mod common;
use common::fixtures::{finished_match, kickoff, league, scheduled_match, team};

fn row<'a>(table: &'a [StandingsRow], name: &str) -> &'a StandingsRow {
    table.iter().find(|r| r.team_name == name).expect("team missing from table")
}

#[test]
fn two_team_league_example() {
    let l = league("Campus Cup");
    let (a, b) = (team("A"), team("B"));
    let matches = vec![
        finished_match(&l, &a, 2, &b, 1),
        finished_match(&l, &b, 0, &a, 0),
    ];

    let table = StandingsCalculator::new().compute_table(&l, &[b.clone(), a.clone()], &matches);

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team_id, a.id);
    assert_eq!(table[1].team_id, b.id);

    let ra = row(&table, "A");
    assert_eq!(
        (ra.played, ra.wins, ra.draws, ra.losses, ra.goals_for, ra.goals_against, ra.points, ra.position),
        (2, 1, 1, 0, 2, 1, 4, 1)
    );
    assert_eq!(ra.goal_difference, 1);

    let rb = row(&table, "B");
    assert_eq!(
        (rb.played, rb.wins, rb.draws, rb.losses, rb.goals_for, rb.goals_against, rb.points, rb.position),
        (2, 0, 1, 1, 1, 2, 1, 2)
    );
    assert_eq!(rb.goal_difference, -1);
}

#[test]
fn empty_league_gives_empty_table() {
    let l = league("Empty");
    let table = StandingsCalculator::new().compute_table(&l, &[], &[]);
    assert!(table.is_empty());
}

#[test]
fn opponent_outside_the_league_still_counts() {
    let l = league("Campus Cup");
    let (a, outsider) = (team("A"), team("Visitors"));
    let matches = vec![finished_match(&l, &outsider, 1, &a, 3)];

    let table = StandingsCalculator::new().compute_table(&l, &[a.clone()], &matches);

    assert_eq!(table.len(), 1);
    let ra = &table[0];
    assert_eq!((ra.played, ra.wins, ra.goals_for, ra.goals_against, ra.points), (1, 1, 3, 1, 3));
}

#[test]
fn matches_from_other_leagues_are_ignored() {
    let (cup, friendly) = (league("Campus Cup"), league("Friendlies"));
    let (a, b) = (team("A"), team("B"));
    let matches = vec![
        finished_match(&cup, &a, 1, &b, 0),
        finished_match(&friendly, &b, 5, &a, 0),
    ];

    let table = StandingsCalculator::new().compute_table(&cup, &[a, b], &matches);
    assert_eq!(row(&table, "A").played, 1);
    assert_eq!(row(&table, "B").goals_for, 0);
}

#[test]
fn unscored_match_counts_as_played_and_lost() {
    let l = league("Campus Cup");
    let (a, b) = (team("A"), team("B"));
    let matches = vec![scheduled_match(&l, &a, &b, kickoff())];

    let table = StandingsCalculator::new().compute_table(&l, &[a, b], &matches);
    for r in &table {
        assert_eq!((r.played, r.wins, r.draws, r.losses), (1, 0, 0, 1));
        assert_eq!((r.goals_for, r.goals_against, r.points), (0, 0, 0));
    }
}

#[test]
fn equal_points_break_on_goal_difference() {
    let l = league("Campus Cup");
    let (a, b, c, d) = (team("A"), team("B"), team("C"), team("D"));
    // Every team wins once and loses once
    let matches = vec![
        finished_match(&l, &a, 1, &d, 0),
        finished_match(&l, &b, 4, &c, 0),
        finished_match(&l, &c, 3, &a, 0),
        finished_match(&l, &d, 5, &b, 2),
    ];

    let table = StandingsCalculator::new()
        .compute_table(&l, &[a.clone(), b.clone(), c.clone(), d.clone()], &matches);

    let order: Vec<&str> = table.iter().map(|r| r.team_name.as_str()).collect();
    // Points all 3. GD: A -2, B +1, C -1, D +2
    assert_eq!(order, vec!["D", "B", "C", "A"]);
}

#[test]
fn equal_goal_difference_breaks_on_goals_for() {
    let l = league("Campus Cup");
    let (p, q, r, s) = (team("P"), team("Q"), team("R"), team("S"));
    let matches = vec![
        finished_match(&l, &p, 3, &r, 1),
        finished_match(&l, &q, 2, &s, 0),
    ];

    let table = StandingsCalculator::new()
        .compute_table(&l, &[q.clone(), s.clone(), r.clone(), p.clone()], &matches);

    let order: Vec<&str> = table.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(order, vec!["P", "Q", "R", "S"]);
}

#[test]
fn table_invariants_hold() {
    let l = league("Campus Cup");
    let teams = vec![team("A"), team("B"), team("C")];
    let matches = vec![
        finished_match(&l, &teams[0], 2, &teams[1], 2),
        finished_match(&l, &teams[1], 1, &teams[2], 0),
        finished_match(&l, &teams[2], 3, &teams[0], 1),
        scheduled_match(&l, &teams[0], &teams[2], kickoff()),
    ];

    let table = StandingsCalculator::new().compute_table(&l, &teams, &matches);

    for (index, r) in table.iter().enumerate() {
        assert_eq!(r.position, index as i32 + 1);
        assert_eq!(r.losses, r.played - r.wins - r.draws);
        assert_eq!(r.goal_difference, r.goals_for - r.goals_against);
        assert_eq!(r.points, r.wins * 3 + r.draws);
    }
    for pair in table.windows(2) {
        assert!(pair[0].rank_key() >= pair[1].rank_key());
    }
}

#[test]
fn equal_keys_keep_team_order() {
    let l = league("Campus Cup");
    let teams = vec![team("First"), team("Second"), team("Third")];

    let table = StandingsCalculator::new().compute_table(&l, &teams, &[]);
    let order: Vec<&str> = table.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(order, vec!["First", "Second", "Third"]);
}
