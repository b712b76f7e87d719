use league_sim::service::LeagueService;
use league_sim::store;

fn seeded_service() -> LeagueService {
    let mut conn = store::open_in_memory().expect("in-memory db should open");
    store::seed_if_empty(&mut conn).expect("seed should succeed");
    LeagueService::new(conn)
}

#[test]
fn a_full_season_balances_out() {
    let mut service = seeded_service();
    let played = service.simulate_all().expect("season should simulate");
    assert_eq!(played.len(), 12);

    let table = service.standings().expect("standings should compute");
    assert_eq!(table.len(), 4);

    let mut goals_for = 0u32;
    let mut goals_against = 0u32;
    for row in &table {
        assert_eq!(row.played, 6);
        assert_eq!(row.won + row.drawn + row.lost, 6);
        assert_eq!(row.points, 3 * row.won + row.drawn);
        goals_for += row.goals_for;
        goals_against += row.goals_against;
    }
    assert_eq!(goals_for, goals_against, "every goal scored is a goal conceded");

    // Ranked table is monotone on the three sort keys.
    for pair in table.windows(2) {
        let key = |r: &league_sim::model::TeamStats| (r.points, r.goal_difference, r.goals_for);
        assert!(key(&pair[0]) >= key(&pair[1]));
    }
}

#[test]
fn resimulating_a_week_never_double_counts() {
    let mut service = seeded_service();
    service.simulate_week(1).expect("week should simulate");
    service.simulate_week(1).expect("week should re-simulate");

    for row in service.standings().expect("standings should compute") {
        assert_eq!(row.played, 1);
    }
}

#[test]
fn simulate_all_skips_already_played_matches() {
    let mut service = seeded_service();
    let target = service.matches().expect("matches should load")[0].clone();

    service
        .update_result(target.id, 7, 7)
        .expect("override should succeed");
    let simulated = service.simulate_all().expect("season should simulate");
    assert_eq!(simulated.len(), 11, "the overridden match is no longer remaining");

    let kept = service
        .matches()
        .expect("matches should load")
        .into_iter()
        .find(|m| m.id == target.id)
        .expect("match should still exist");
    assert_eq!((kept.home_goals, kept.away_goals), (7, 7));
}

#[test]
fn simulating_an_out_of_range_week_is_empty_not_an_error() {
    let mut service = seeded_service();
    let simulated = service.simulate_week(40).expect("missing week should be fine");
    assert!(simulated.is_empty());
}

#[test]
fn override_then_standings_reflect_only_the_latest_result() {
    let mut service = seeded_service();
    let target = service.matches().expect("matches should load")[0].clone();

    service.update_result(target.id, 3, 1).expect("first override");
    service.update_result(target.id, 0, 2).expect("second override");

    let table = service.standings().expect("standings should compute");
    let home = table.iter().find(|r| r.team_id == target.home_team_id).unwrap();
    let away = table.iter().find(|r| r.team_id == target.away_team_id).unwrap();

    assert_eq!((home.played, home.points, home.goal_difference), (1, 0, -2));
    assert_eq!((away.played, away.points, away.goal_difference), (1, 3, 2));
}

#[test]
fn reset_wipes_results_and_restores_fixtures() {
    let mut service = seeded_service();
    service.simulate_all().expect("season should simulate");
    service.reset().expect("reset should succeed");

    let matches = service.matches().expect("matches should load");
    assert_eq!(matches.len(), 12);
    assert!(matches.iter().all(|m| !m.played));

    for row in service.standings().expect("standings should compute") {
        assert_eq!((row.played, row.points), (0, 0));
    }
}
