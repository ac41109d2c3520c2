use cubetimer_core::consts::MAX_AVERAGE_WINDOW;
use cubetimer_core::{
    AverageKind, BestContribution, BestReplacement, PersonalBestRecord, Puzzle, SolveRecord,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

#[derive(Clone)]
pub struct Store {
    pub db: Pool<Sqlite>,
}

impl Store {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    pub async fn insert_solve(&self, solve: &SolveRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO solves (id, puzzle, time_secs, penalty, dnf, scramble, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(solve.id.to_string())
        .bind(solve.puzzle.to_string())
        .bind(solve.time_secs)
        .bind(solve.penalty)
        .bind(solve.dnf)
        .bind(&solve.scramble)
        .bind(solve.created_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn get_solve(&self, id: Uuid) -> Result<Option<SolveRecord>, sqlx::Error> {
        let row = sqlx::query("SELECT * FROM solves WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.db)
            .await?;

        row.as_ref().map(decode_solve).transpose()
    }

    /// Writes back the mutable fields of an existing solve.
    pub async fn update_solve(&self, solve: &SolveRecord) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE solves SET time_secs = ?, penalty = ?, dnf = ? WHERE id = ?")
            .bind(solve.time_secs)
            .bind(solve.penalty)
            .bind(solve.dnf)
            .bind(solve.id.to_string())
            .execute(&self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_solve(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let res = sqlx::query("DELETE FROM solves WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.db)
            .await?;

        Ok(res.rows_affected() > 0)
    }

    /// Newest-first page of solves for one puzzle. With a cursor, the page
    /// holds only solves strictly older than the cursor solve; an unknown
    /// cursor falls back to the first page.
    pub async fn list_solves(
        &self,
        puzzle: Puzzle,
        cursor: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<SolveRecord>, sqlx::Error> {
        let cursor_at = match cursor {
            Some(id) => self.get_solve(id).await?.map(|s| s.created_at),
            None => None,
        };

        let rows = match cursor_at {
            Some(at) => {
                sqlx::query(
                    "SELECT * FROM solves WHERE puzzle = ? AND created_at < ?
                     ORDER BY created_at DESC LIMIT ?",
                )
                .bind(puzzle.to_string())
                .bind(at)
                .bind(limit)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT * FROM solves WHERE puzzle = ?
                     ORDER BY created_at DESC LIMIT ?",
                )
                .bind(puzzle.to_string())
                .bind(limit)
                .fetch_all(&self.db)
                .await?
            }
        };

        rows.iter().map(decode_solve).collect()
    }

    /// The newest solves feeding the rolling averages, capped at the
    /// largest window so unbounded histories stay cheap to read.
    pub async fn recent_history(&self, puzzle: Puzzle) -> Result<Vec<SolveRecord>, sqlx::Error> {
        let rows =
            sqlx::query("SELECT * FROM solves WHERE puzzle = ? ORDER BY created_at DESC LIMIT ?")
                .bind(puzzle.to_string())
                .bind(MAX_AVERAGE_WINDOW as i64)
                .fetch_all(&self.db)
                .await?;

        rows.iter().map(decode_solve).collect()
    }

    pub async fn personal_bests(
        &self,
        puzzle: Puzzle,
    ) -> Result<Vec<PersonalBestRecord>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM personal_bests WHERE puzzle = ?")
            .bind(puzzle.to_string())
            .fetch_all(&self.db)
            .await?;

        rows.iter().map(decode_best).collect()
    }

    pub async fn get_best(&self, id: Uuid) -> Result<Option<PersonalBestRecord>, sqlx::Error> {
        let row = sqlx::query("SELECT * FROM personal_bests WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.db)
            .await?;

        row.as_ref().map(decode_best).transpose()
    }

    /// Executes one planned replacement atomically: the displaced record
    /// (if any) disappears, then the new best and its contribution links
    /// land, all inside a single transaction. A reader never sees a metric
    /// slot empty that was occupied before.
    pub async fn replace_best(
        &self,
        puzzle: Puzzle,
        plan: &BestReplacement,
    ) -> Result<PersonalBestRecord, sqlx::Error> {
        let best = PersonalBestRecord::new(puzzle, plan.kind, plan.time_secs);

        let mut tx = self.db.begin().await?;

        if let Some(old_id) = plan.replaces {
            sqlx::query("DELETE FROM personal_bests WHERE id = ?")
                .bind(old_id.to_string())
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(
            "INSERT INTO personal_bests (id, puzzle, avg_of, time_secs, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(best.id.to_string())
        .bind(best.puzzle.to_string())
        .bind(best.kind.sample_size() as i64)
        .bind(best.time_secs)
        .bind(best.created_at)
        .execute(&mut *tx)
        .await?;

        for solve_id in &plan.solve_ids {
            let link = BestContribution::new(best.id, *solve_id);
            sqlx::query(
                "INSERT INTO best_contributions (id, personal_best_id, solve_id, created_at)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(link.id.to_string())
            .bind(link.personal_best_id.to_string())
            .bind(link.solve_id.to_string())
            .bind(link.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(best)
    }

    /// The solves behind a personal best, newest first.
    pub async fn best_contributions(
        &self,
        best_id: Uuid,
    ) -> Result<Vec<SolveRecord>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT s.* FROM solves s
             JOIN best_contributions c ON c.solve_id = s.id
             WHERE c.personal_best_id = ?
             ORDER BY s.created_at DESC",
        )
        .bind(best_id.to_string())
        .fetch_all(&self.db)
        .await?;

        rows.iter().map(decode_solve).collect()
    }

    /// Remaining contribution links for a best; cascades shrink this when
    /// contributing solves get deleted.
    pub async fn contribution_count(&self, best_id: Uuid) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(
            "SELECT count(*) AS n FROM best_contributions WHERE personal_best_id = ?",
        )
        .bind(best_id.to_string())
        .fetch_one(&self.db)
        .await?;

        Ok(row.get("n"))
    }
}

fn decode_solve(row: &SqliteRow) -> Result<SolveRecord, sqlx::Error> {
    Ok(SolveRecord {
        id: parse_uuid(row.get("id"))?,
        puzzle: parse_puzzle(row.get("puzzle"))?,
        time_secs: row.get("time_secs"),
        penalty: row.get("penalty"),
        dnf: row.get("dnf"),
        scramble: row.get("scramble"),
        created_at: row.get("created_at"),
    })
}

fn decode_best(row: &SqliteRow) -> Result<PersonalBestRecord, sqlx::Error> {
    let avg_of: i64 = row.get("avg_of");
    let kind = AverageKind::from_sample_size(avg_of as usize)
        .ok_or_else(|| sqlx::Error::Decode(format!("unknown avg_of {}", avg_of).into()))?;

    Ok(PersonalBestRecord {
        id: parse_uuid(row.get("id"))?,
        puzzle: parse_puzzle(row.get("puzzle"))?,
        kind,
        time_secs: row.get("time_secs"),
        created_at: row.get("created_at"),
    })
}

fn parse_uuid(raw: String) -> Result<Uuid, sqlx::Error> {
    Uuid::parse_str(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn parse_puzzle(raw: String) -> Result<Puzzle, sqlx::Error> {
    Puzzle::parse(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
