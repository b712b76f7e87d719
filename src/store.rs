use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::error::LeagueError;
use crate::fixtures::generate_fixtures;
use crate::model::{Match, MatchId, Team};

/// Roster installed by the idempotent seed, in table-seeding order.
const DEFAULT_TEAMS: [(&str, u8); 4] = [
    ("Manchester City", 90),
    ("Liverpool", 85),
    ("Arsenal", 80),
    ("Chelsea", 75),
];

pub fn open_db(path: &Path) -> Result<Connection, LeagueError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection, LeagueError> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), LeagueError> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            strength INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY,
            week INTEGER NOT NULL,
            home_team_id INTEGER NOT NULL REFERENCES teams(id),
            away_team_id INTEGER NOT NULL REFERENCES teams(id),
            home_goals INTEGER NOT NULL,
            away_goals INTEGER NOT NULL,
            played INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_matches_week ON matches(week);
        "#,
    )?;
    Ok(())
}

pub fn insert_team(conn: &Connection, name: &str, strength: u8) -> Result<Team, LeagueError> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO teams (name, strength, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
        params![name, strength, now],
    )?;
    Ok(Team {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        strength,
    })
}

pub fn get_team(conn: &Connection, id: i64) -> Result<Option<Team>, LeagueError> {
    let found = conn
        .query_row(
            "SELECT id, name, strength FROM teams WHERE id = ?1",
            params![id],
            |row| {
                Ok(Team {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    strength: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(found)
}

pub fn get_teams(conn: &Connection) -> Result<Vec<Team>, LeagueError> {
    let mut stmt = conn.prepare("SELECT id, name, strength FROM teams ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Team {
            id: row.get(0)?,
            name: row.get(1)?,
            strength: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

fn match_from_row(row: &Row<'_>) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        week: row.get(1)?,
        home_team_id: row.get(2)?,
        away_team_id: row.get(3)?,
        home_goals: row.get(4)?,
        away_goals: row.get(5)?,
        played: row.get::<_, i64>(6)? != 0,
    })
}

const MATCH_COLUMNS: &str =
    "id, week, home_team_id, away_team_id, home_goals, away_goals, played";

pub fn insert_match(conn: &Connection, m: &Match) -> Result<Match, LeagueError> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO matches (week, home_team_id, away_team_id, home_goals, away_goals, played, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            m.week,
            m.home_team_id,
            m.away_team_id,
            m.home_goals,
            m.away_goals,
            m.played as i64,
            now
        ],
    )?;
    let mut stored = m.clone();
    stored.id = conn.last_insert_rowid();
    Ok(stored)
}

pub fn update_match(conn: &Connection, m: &Match) -> Result<(), LeagueError> {
    let changed = conn.execute(
        "UPDATE matches
         SET home_goals = ?1, away_goals = ?2, played = ?3, updated_at = ?4
         WHERE id = ?5",
        params![
            m.home_goals,
            m.away_goals,
            m.played as i64,
            Utc::now().to_rfc3339(),
            m.id
        ],
    )?;
    if changed == 0 {
        return Err(LeagueError::NotFound {
            entity: "match",
            id: m.id,
        });
    }
    Ok(())
}

pub fn get_match(conn: &Connection, id: MatchId) -> Result<Option<Match>, LeagueError> {
    let found = conn
        .query_row(
            &format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1"),
            params![id],
            match_from_row,
        )
        .optional()?;
    Ok(found)
}

pub fn get_matches(conn: &Connection) -> Result<Vec<Match>, LeagueError> {
    let mut stmt =
        conn.prepare(&format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY week, id"))?;
    let rows = stmt.query_map([], match_from_row)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn get_matches_by_week(conn: &Connection, week: u32) -> Result<Vec<Match>, LeagueError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE week = ?1 ORDER BY id"
    ))?;
    let rows = stmt.query_map(params![week], match_from_row)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Seeds the default roster and its fixture list, but only when the teams
/// table is empty. Safe to call on every startup.
pub fn seed_if_empty(conn: &mut Connection) -> Result<(), LeagueError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM teams", [], |row| row.get(0))?;
    if count > 0 {
        tracing::info!("league already seeded ({count} teams found), skipping");
        return Ok(());
    }
    seed_league(conn)
}

fn seed_league(conn: &mut Connection) -> Result<(), LeagueError> {
    let tx = conn.transaction()?;
    let now = Utc::now().to_rfc3339();

    let mut teams = Vec::with_capacity(DEFAULT_TEAMS.len());
    for (name, strength) in DEFAULT_TEAMS {
        tx.execute(
            "INSERT INTO teams (name, strength, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            params![name, strength, now],
        )?;
        teams.push(Team {
            id: tx.last_insert_rowid(),
            name: name.to_string(),
            strength,
        });
    }

    let fixtures = generate_fixtures(&teams)?;
    for m in &fixtures {
        tx.execute(
            "INSERT INTO matches (week, home_team_id, away_team_id, home_goals, away_goals, played, created_at, updated_at)
             VALUES (?1, ?2, ?3, 0, 0, 0, ?4, ?4)",
            params![m.week, m.home_team_id, m.away_team_id, now],
        )?;
    }
    tx.commit()?;

    tracing::info!(
        "seeded league with {} teams and {} fixtures",
        teams.len(),
        fixtures.len()
    );
    Ok(())
}

/// Drops everything and reseeds the default league in its unplayed state.
pub fn reset(conn: &mut Connection) -> Result<(), LeagueError> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS matches;
        DROP TABLE IF EXISTS teams;
        "#,
    )?;
    init_schema(conn)?;
    seed_league(conn)
}
