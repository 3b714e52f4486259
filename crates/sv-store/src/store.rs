use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use uuid::Uuid;

use sv_core::{Classification, Constants, Evaluation, RecordedSample, ScaleModel, SweepRecord};

use crate::error::{Result, StoreError};
use crate::schema;

/// SQLite archive of sweep runs.
///
/// A run row carries the evaluator configuration (model, constants, bounds);
/// its sample rows carry the per-point outcomes, including the error text of
/// points that violated the formula's domain. Loading reconstructs the
/// original [`SweepRecord`] exactly.
pub struct Store {
    conn: Connection,
}

/// One row of the run listing.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub id: Uuid,
    pub model: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub ok_count: usize,
    pub created_at: String,
}

/// How a run's samples bucketed, plus how many failed their domain check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassificationCounts {
    pub low: u64,
    pub transitional: u64,
    pub high: u64,
    pub failed: u64,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Size of the database file in bytes; 0 for in-memory stores.
    pub fn db_size(&self) -> u64 {
        self.conn
            .path()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .unwrap_or(0)
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM metadata WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(result)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // --- Save ---

    /// Archive a record under a fresh run id.
    pub fn save_run(&self, record: &SweepRecord) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO runs (id, model, indep_var, g, s, complexity, lower, upper, count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                id.to_string(),
                record.model.as_str(),
                record.independent_variable,
                record.constants.g,
                record.constants.s,
                record.constants.complexity,
                record.lower,
                record.upper,
                record.count as i64,
            ],
        )?;

        for sample in &record.samples {
            tx.execute(
                "INSERT INTO samples (run_id, idx, x, reference, alternative, ratio, classification, error)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id.to_string(),
                    sample.index as i64,
                    sample.x,
                    sample.evaluation.map(|e| e.reference),
                    sample.evaluation.map(|e| e.alternative),
                    sample.evaluation.map(|e| e.ratio),
                    sample.evaluation.map(|e| e.classification.as_str()),
                    sample.error.as_deref(),
                ],
            )?;
        }

        tx.commit()?;
        tracing::debug!("archived run {id} ({} samples)", record.samples.len());
        Ok(id)
    }

    // --- Load ---

    pub fn load_run(&self, id: Uuid) -> Result<SweepRecord> {
        let (model_name, indep_var, constants, lower, upper, count) = self
            .conn
            .query_row(
                "SELECT model, indep_var, g, s, complexity, lower, upper, count
                 FROM runs WHERE id = ?1",
                [id.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        Constants {
                            g: row.get(2)?,
                            s: row.get(3)?,
                            complexity: row.get(4)?,
                        },
                        row.get::<_, f64>(5)?,
                        row.get::<_, f64>(6)?,
                        row.get::<_, i64>(7)? as usize,
                    ))
                },
            )
            .optional()?
            .ok_or(StoreError::RunNotFound(id))?;

        let model = ScaleModel::from_name(&model_name).ok_or_else(|| {
            StoreError::InvalidData(format!("unknown model '{model_name}' in run {id}"))
        })?;

        let mut stmt = self.conn.prepare(
            "SELECT idx, x, reference, alternative, ratio, classification, error
             FROM samples WHERE run_id = ?1 ORDER BY idx",
        )?;
        let samples = stmt
            .query_map([id.to_string()], |row| {
                let index = row.get::<_, i64>(0)? as usize;
                let x: f64 = row.get(1)?;
                let reference: Option<f64> = row.get(2)?;
                let error: Option<String> = row.get(6)?;

                let evaluation = match reference {
                    Some(reference) => Some(Evaluation {
                        x,
                        reference,
                        alternative: row.get(3)?,
                        ratio: row.get(4)?,
                        classification: Classification::from_str_lossy(
                            &row.get::<_, String>(5)?,
                        ),
                    }),
                    None => None,
                };

                Ok(RecordedSample {
                    index,
                    x,
                    evaluation,
                    error,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(SweepRecord {
            version: sv_core::CURRENT_VERSION,
            model,
            independent_variable: indep_var,
            constants,
            lower,
            upper,
            count,
            samples,
        })
    }

    pub fn list_runs(&self) -> Result<Vec<RunSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, model, lower, upper, count, created_at,
                    (SELECT COUNT(*) FROM samples s WHERE s.run_id = runs.id AND s.error IS NULL)
             FROM runs ORDER BY created_at DESC, id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, i64>(4)? as usize,
                    row.get::<_, String>(5)?,
                    row.get::<_, i64>(6)? as usize,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, model, lower, upper, count, created_at, ok_count)| {
                let id = Uuid::parse_str(&id)
                    .map_err(|e| StoreError::InvalidData(format!("bad run id '{id}': {e}")))?;
                Ok(RunSummary {
                    id,
                    model,
                    lower,
                    upper,
                    count,
                    ok_count,
                    created_at,
                })
            })
            .collect()
    }

    pub fn delete_run(&self, id: Uuid) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM samples WHERE run_id = ?1", [id.to_string()])?;
        let changed = tx.execute("DELETE FROM runs WHERE id = ?1", [id.to_string()])?;
        tx.commit()?;
        if changed == 0 {
            return Err(StoreError::RunNotFound(id));
        }
        Ok(())
    }

    /// Bucket counts over one run's samples.
    pub fn classification_distribution(&self, id: Uuid) -> Result<ClassificationCounts> {
        let mut stmt = self.conn.prepare(
            "SELECT classification, COUNT(*) FROM samples
             WHERE run_id = ?1 GROUP BY classification",
        )?;
        let rows = stmt
            .query_map([id.to_string()], |row| {
                Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut counts = ClassificationCounts::default();
        for (label, n) in rows {
            let n = n as u64;
            match label.as_deref() {
                Some("low") => counts.low = n,
                Some("transitional") => counts.transitional = n,
                Some("high") => counts.high = n,
                _ => counts.failed += n,
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::{ScaleEvaluator, Sweep};

    fn make_record() -> SweepRecord {
        let evaluator =
            ScaleEvaluator::new(Constants::default(), ScaleModel::WideBinary).unwrap();
        let sweep = Sweep::new(1000.0, 20000.0, 12).unwrap();
        SweepRecord::capture(&evaluator, &sweep)
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = Store::open_in_memory().unwrap();
        let record = make_record();

        let id = store.save_run(&record).unwrap();
        let loaded = store.load_run(id).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_error_rows_survive_round_trip() {
        let store = Store::open_in_memory().unwrap();
        let evaluator =
            ScaleEvaluator::new(Constants::default(), ScaleModel::GalacticRotation).unwrap();
        let sweep = Sweep::new(-1.0, 1.0, 5).unwrap();
        let record = SweepRecord::capture(&evaluator, &sweep);
        assert!(record.ok_count() < record.samples.len());

        let id = store.save_run(&record).unwrap();
        let loaded = store.load_run(id).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_missing_run() {
        let store = Store::open_in_memory().unwrap();
        let err = store.load_run(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreError::RunNotFound(_)));
    }

    #[test]
    fn test_list_runs() {
        let store = Store::open_in_memory().unwrap();
        let record = make_record();

        let a = store.save_run(&record).unwrap();
        let b = store.save_run(&record).unwrap();

        let runs = store.list_runs().unwrap();
        assert_eq!(runs.len(), 2);
        let ids: Vec<Uuid> = runs.iter().map(|r| r.id).collect();
        assert!(ids.contains(&a) && ids.contains(&b));
        for run in &runs {
            assert_eq!(run.model, "wide-binary");
            assert_eq!(run.count, 12);
            assert_eq!(run.ok_count, 12);
        }
    }

    #[test]
    fn test_delete_run() {
        let store = Store::open_in_memory().unwrap();
        let id = store.save_run(&make_record()).unwrap();

        store.delete_run(id).unwrap();
        assert!(store.list_runs().unwrap().is_empty());
        assert!(matches!(
            store.delete_run(id),
            Err(StoreError::RunNotFound(_))
        ));
    }

    #[test]
    fn test_classification_distribution() {
        let store = Store::open_in_memory().unwrap();
        let evaluator =
            ScaleEvaluator::new(Constants::default(), ScaleModel::GalacticRotation).unwrap();
        let sweep = Sweep::new(-1.0, 50.0, 20).unwrap();
        let record = SweepRecord::capture(&evaluator, &sweep);
        let id = store.save_run(&record).unwrap();

        let counts = store.classification_distribution(id).unwrap();
        let total = counts.low + counts.transitional + counts.high + counts.failed;
        assert_eq!(total, 20);
        assert!(counts.failed > 0, "negative radii must be archived as failures");
        assert!(counts.transitional > 0);
    }

    #[test]
    fn test_metadata() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.get_metadata("foo").unwrap().is_none());

        store.set_metadata("foo", "bar").unwrap();
        assert_eq!(store.get_metadata("foo").unwrap(), Some("bar".to_string()));

        store.set_metadata("foo", "baz").unwrap();
        assert_eq!(store.get_metadata("foo").unwrap(), Some("baz".to_string()));
    }
}
