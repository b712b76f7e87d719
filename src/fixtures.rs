use crate::error::LeagueError;
use crate::model::{Match, Team};

/// Generates a double round-robin schedule with the circle method.
///
/// Team order seeds the rotation, so reordering the input changes the
/// concrete schedule but not its shape: 2*(N-1) weeks, N/2 matches per week,
/// every pair meeting twice with venues reversed in the second half.
/// N must be even and at least 2; odd rosters need a bye added by the caller.
pub fn generate_fixtures(teams: &[Team]) -> Result<Vec<Match>, LeagueError> {
    let n = teams.len();
    if n < 2 {
        return Err(LeagueError::invalid(format!(
            "need at least 2 teams to build a schedule, got {n}"
        )));
    }
    if n % 2 != 0 {
        return Err(LeagueError::invalid(format!(
            "roster size must be even, got {n}"
        )));
    }

    let weeks = 2 * (n - 1);
    let per_week = n / 2;
    let mut out = Vec::with_capacity(n * (n - 1));

    for week in 1..=weeks {
        for slot in 0..per_week {
            // Rotating pairing (week+slot, week-slot) around the circle;
            // the last team sits out the rotation and fills slot 0.
            let mut home = (week + slot) % (n - 1);
            let mut away = if slot == 0 {
                n - 1
            } else {
                (week + n - 1 - slot) % (n - 1)
            };

            if week > weeks / 2 {
                std::mem::swap(&mut home, &mut away);
            }

            out.push(Match::new(week as u32, teams[home].id, teams[away].id));
        }
    }

    Ok(out)
}
