use std::collections::HashMap;

use crate::model::{Match, Team, TeamStats};

/// Folds every played match into a ranked league table.
///
/// Total over any input: teams with nothing played keep all-zero rows, and
/// matches referencing an unknown team id contribute nothing. The table is
/// rebuilt from scratch on every call; nothing is patched incrementally.
/// Ranking is points, then goal difference, then goals for; the sort is
/// stable so team insertion order breaks any remaining ties.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<TeamStats> {
    let mut rows: Vec<TeamStats> = teams.iter().map(TeamStats::zeroed).collect();
    let index: HashMap<i64, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect();

    for m in matches.iter().filter(|m| m.played) {
        let (Some(&home), Some(&away)) = (index.get(&m.home_team_id), index.get(&m.away_team_id))
        else {
            continue;
        };
        if home == away {
            continue;
        }

        {
            let row = &mut rows[home];
            row.played += 1;
            row.goals_for += m.home_goals;
            row.goals_against += m.away_goals;
        }
        {
            let row = &mut rows[away];
            row.played += 1;
            row.goals_for += m.away_goals;
            row.goals_against += m.home_goals;
        }

        if m.home_goals > m.away_goals {
            rows[home].won += 1;
            rows[home].points += 3;
            rows[away].lost += 1;
        } else if m.home_goals < m.away_goals {
            rows[away].won += 1;
            rows[away].points += 3;
            rows[home].lost += 1;
        } else {
            rows[home].drawn += 1;
            rows[away].drawn += 1;
            rows[home].points += 1;
            rows[away].points += 1;
        }
    }

    for row in &mut rows {
        row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    });

    rows
}
