use serde::{Deserialize, Serialize};

pub type TeamId = i64;
pub type MatchId = i64;

/// A competitor in the league. Strength is a 1-100 scale, higher is stronger;
/// it only biases the simulator, never the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub strength: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub week: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
    pub played: bool,
}

impl Match {
    pub fn new(week: u32, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Self {
            id: 0,
            week,
            home_team_id,
            away_team_id,
            home_goals: 0,
            away_goals: 0,
            played: false,
        }
    }

    /// Stores a final scoreline. Used both by the simulator and by manual
    /// overrides; overriding an already-played match keeps `played` true.
    pub fn record_result(&mut self, home_goals: u32, away_goals: u32) {
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self.played = true;
    }
}

/// Result payload for a manual override of a match scoreline.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
}

/// One row of the league table. Derived from (teams, matches) on every
/// query; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl TeamStats {
    pub fn zeroed(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}
