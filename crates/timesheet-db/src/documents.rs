use rusqlite::{OptionalExtension, params_from_iter};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use crate::{Database, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tasks,
    Users,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Tasks => "tasks",
            Collection::Users => "users",
        }
    }
}

impl Database {
    pub fn insert<T: Serialize>(&self, collection: Collection, id: &Uuid, doc: &T) -> Result<()> {
        let body = serde_json::to_string(doc)?;
        self.with_conn(|conn| {
            conn.execute(
                &format!("INSERT INTO {} (id, body) VALUES (?1, ?2)", collection.table()),
                (id.to_string(), body),
            )?;
            Ok(())
        })
    }

    /// Every document in insertion order. Bodies that no longer decode as `T`
    /// are skipped.
    pub fn find_all<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let rows = self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT id, body FROM {} ORDER BY rowid",
                collection.table()
            ))?;
            let rows = stmt
                .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        let docs = rows
            .into_iter()
            .filter_map(|(id, body)| match serde_json::from_str(&body) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    warn!("Skipping undecodable {} document '{}': {}", collection.table(), id, e);
                    None
                }
            })
            .collect();

        Ok(docs)
    }

    /// Replace the whole body of document `id`. Returns the number of matched
    /// documents, which is 0 when nothing has that id.
    pub fn replace<T: Serialize>(&self, collection: Collection, id: &Uuid, doc: &T) -> Result<usize> {
        let body = serde_json::to_string(doc)?;
        self.with_conn(|conn| {
            let matched = conn.execute(
                &format!("UPDATE {} SET body = ?2 WHERE id = ?1", collection.table()),
                (id.to_string(), body),
            )?;
            Ok(matched)
        })
    }

    pub fn delete(&self, collection: Collection, id: &Uuid) -> Result<usize> {
        self.with_conn(|conn| {
            let removed = conn.execute(
                &format!("DELETE FROM {} WHERE id = ?1", collection.table()),
                [id.to_string()],
            )?;
            Ok(removed)
        })
    }

    /// First document whose top-level JSON fields equal all of `fields`.
    pub fn find_one_where<T: DeserializeOwned>(
        &self,
        collection: Collection,
        fields: &[(&'static str, &str)],
    ) -> Result<Option<T>> {
        let filter = if fields.is_empty() {
            "1".to_string()
        } else {
            fields
                .iter()
                .enumerate()
                .map(|(i, (key, _))| format!("json_extract(body, '$.{}') = ?{}", key, i + 1))
                .collect::<Vec<_>>()
                .join(" AND ")
        };
        let sql = format!(
            "SELECT body FROM {} WHERE {} ORDER BY rowid LIMIT 1",
            collection.table(),
            filter
        );

        let body: Option<String> = self.with_conn(|conn| {
            let body = conn
                .query_row(&sql, params_from_iter(fields.iter().map(|(_, v)| *v)), |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(body)
        })?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: Uuid,
        text: String,
    }

    fn note(text: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            text: text.to_string(),
        }
    }

    #[test]
    fn insert_then_find_all_keeps_order() {
        let db = Database::open_in_memory().unwrap();
        let first = note("first");
        let second = note("second");
        db.insert(Collection::Tasks, &first.id, &first).unwrap();
        db.insert(Collection::Tasks, &second.id, &second).unwrap();

        let all: Vec<Note> = db.find_all(Collection::Tasks).unwrap();
        assert_eq!(all, vec![first, second]);

        let users: Vec<Note> = db.find_all(Collection::Users).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn find_all_skips_undecodable_bodies() {
        let db = Database::open_in_memory().unwrap();
        let good = note("good");
        db.insert(Collection::Tasks, &good.id, &good).unwrap();
        db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (id, body) VALUES ('broken', '{\"text\": 42}')",
                [],
            )?;
            Ok(())
        })
        .unwrap();

        let all: Vec<Note> = db.find_all(Collection::Tasks).unwrap();
        assert_eq!(all, vec![good]);
    }

    #[test]
    fn replace_and_delete_report_matches() {
        let db = Database::open_in_memory().unwrap();
        let mut doc = note("draft");
        db.insert(Collection::Tasks, &doc.id, &doc).unwrap();

        doc.text = "final".into();
        assert_eq!(db.replace(Collection::Tasks, &doc.id, &doc).unwrap(), 1);
        assert_eq!(db.replace(Collection::Tasks, &Uuid::new_v4(), &doc).unwrap(), 0);

        let all: Vec<Note> = db.find_all(Collection::Tasks).unwrap();
        assert_eq!(all[0].text, "final");

        assert_eq!(db.delete(Collection::Tasks, &Uuid::new_v4()).unwrap(), 0);
        assert_eq!(db.delete(Collection::Tasks, &doc.id).unwrap(), 1);
        assert!(db.find_all::<Note>(Collection::Tasks).unwrap().is_empty());
    }

    #[test]
    fn find_one_where_matches_every_field() {
        let db = Database::open_in_memory().unwrap();
        let doc = note("hello");
        db.insert(Collection::Users, &doc.id, &doc).unwrap();

        let id = doc.id.to_string();
        let hit: Option<Note> = db
            .find_one_where(Collection::Users, &[("text", "hello"), ("id", id.as_str())])
            .unwrap();
        assert_eq!(hit, Some(doc));

        let miss: Option<Note> = db
            .find_one_where(Collection::Users, &[("text", "hello"), ("id", "other")])
            .unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn duplicate_id_is_a_persistence_error() {
        let db = Database::open_in_memory().unwrap();
        let doc = note("once");
        db.insert(Collection::Tasks, &doc.id, &doc).unwrap();

        let err = db.insert(Collection::Tasks, &doc.id, &doc).unwrap_err();
        assert!(matches!(err, crate::RepoError::Persistence(_)));
    }
}
