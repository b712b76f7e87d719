use std::collections::HashMap;

use rand::Rng;
use rusqlite::Connection;

use crate::error::LeagueError;
use crate::model::{Match, MatchId, Team, TeamId, TeamStats};
use crate::simulate::simulate_score;
use crate::standings::compute_standings;
use crate::store;

/// All league operations over one owned connection. A single instance per
/// league; the transport serializes access to it, which is what keeps
/// simulate and standings reads from interleaving.
pub struct LeagueService {
    conn: Connection,
}

impl LeagueService {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn teams(&self) -> Result<Vec<Team>, LeagueError> {
        store::get_teams(&self.conn)
    }

    pub fn matches(&self) -> Result<Vec<Match>, LeagueError> {
        store::get_matches(&self.conn)
    }

    pub fn matches_for_week(&self, week: u32) -> Result<Vec<Match>, LeagueError> {
        store::get_matches_by_week(&self.conn, week)
    }

    /// League table recomputed from scratch over all stored matches.
    pub fn standings(&self) -> Result<Vec<TeamStats>, LeagueError> {
        let teams = store::get_teams(&self.conn)?;
        let matches = store::get_matches(&self.conn)?;
        Ok(compute_standings(&teams, &matches))
    }

    /// Simulates every fixture of one week, played or not, and returns the
    /// updated matches. A week with no fixtures simulates to an empty list.
    pub fn simulate_week(&mut self, week: u32) -> Result<Vec<Match>, LeagueError> {
        if week == 0 {
            return Err(LeagueError::invalid("week numbers start at 1"));
        }

        let by_id = self.team_lookup()?;
        let matches = store::get_matches_by_week(&self.conn, week)?;
        self.play(matches, &by_id, &mut rand::thread_rng())
    }

    /// Simulates all remaining (unplayed) fixtures in week order.
    pub fn simulate_all(&mut self) -> Result<Vec<Match>, LeagueError> {
        let by_id = self.team_lookup()?;
        let remaining: Vec<Match> = store::get_matches(&self.conn)?
            .into_iter()
            .filter(|m| !m.played)
            .collect();
        self.play(remaining, &by_id, &mut rand::thread_rng())
    }

    fn play<R: Rng>(
        &mut self,
        mut matches: Vec<Match>,
        by_id: &HashMap<TeamId, Team>,
        rng: &mut R,
    ) -> Result<Vec<Match>, LeagueError> {
        let tx = self.conn.transaction()?;
        for m in &mut matches {
            let home = by_id.get(&m.home_team_id).ok_or(LeagueError::NotFound {
                entity: "team",
                id: m.home_team_id,
            })?;
            let away = by_id.get(&m.away_team_id).ok_or(LeagueError::NotFound {
                entity: "team",
                id: m.away_team_id,
            })?;

            let (home_goals, away_goals) = simulate_score(home, away, rng);
            m.record_result(home_goals, away_goals);
            store::update_match(&tx, m)?;
        }
        tx.commit()?;
        Ok(matches)
    }

    /// Overwrites a match result by hand. Works on played and unplayed
    /// matches alike; the match stays played afterwards.
    pub fn update_result(
        &mut self,
        id: MatchId,
        home_goals: u32,
        away_goals: u32,
    ) -> Result<Match, LeagueError> {
        let mut m = store::get_match(&self.conn, id)?.ok_or(LeagueError::NotFound {
            entity: "match",
            id,
        })?;
        m.record_result(home_goals, away_goals);
        store::update_match(&self.conn, &m)?;
        Ok(m)
    }

    pub fn reset(&mut self) -> Result<(), LeagueError> {
        store::reset(&mut self.conn)
    }

    fn team_lookup(&self) -> Result<HashMap<TeamId, Team>, LeagueError> {
        let teams = store::get_teams(&self.conn)?;
        Ok(teams.into_iter().map(|t| (t.id, t)).collect())
    }
}
