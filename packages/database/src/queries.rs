//! Complaint queries.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use complaint_map_complaint_models::{ComplaintRecord, NewComplaint};
use moosicbox_json_utils::database::ToValue as _;
use switchy_database::{Database, DatabaseValue};

use crate::DbError;

/// Loads every complaint, oldest first.
///
/// Rows with the same timestamp keep insertion order. Rows whose
/// timestamp or coordinates cannot be read are skipped with a warning.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn load_complaints(db: &dyn Database) -> Result<Vec<ComplaintRecord>, DbError> {
    let rows = db
        .query_raw_params(
            "SELECT id, lat, lon, issue_type, intensity, description, timestamp
             FROM complaints
             ORDER BY id",
            &[],
        )
        .await?;

    let mut complaints = Vec::with_capacity(rows.len());
    for row in &rows {
        let id: i64 = row.to_value("id").unwrap_or(0);
        let raw_timestamp: String = row.to_value("timestamp").unwrap_or_default();

        let Some(timestamp) = parse_timestamp(&raw_timestamp) else {
            log::warn!("Skipping complaint {id}: unparseable timestamp {raw_timestamp:?}");
            continue;
        };

        let (Ok(lat), Ok(lon)) = (row.to_value::<f64>("lat"), row.to_value::<f64>("lon")) else {
            log::warn!("Skipping complaint {id}: unreadable coordinates");
            continue;
        };

        complaints.push(ComplaintRecord {
            id,
            lat,
            lon,
            issue_type: row.to_value("issue_type").unwrap_or(None),
            intensity: row.to_value("intensity").unwrap_or(None),
            description: row.to_value("description").unwrap_or(None),
            timestamp,
        });
    }

    complaints.sort_by_key(|c| c.timestamp);

    log::debug!("Loaded {} complaints", complaints.len());

    Ok(complaints)
}

/// Returns the most recently reported complaint, if any.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn latest_complaint(db: &dyn Database) -> Result<Option<ComplaintRecord>, DbError> {
    Ok(load_complaints(db).await?.pop())
}

/// Inserts a complaint and returns its new ID.
///
/// # Errors
///
/// Returns [`DbError`] if the insert fails.
pub async fn insert_complaint(db: &dyn Database, complaint: &NewComplaint) -> Result<i64, DbError> {
    let rows = db
        .query_raw_params(
            "INSERT INTO complaints (lat, lon, issue_type, intensity, description, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
            &[
                DatabaseValue::Real64(complaint.lat),
                DatabaseValue::Real64(complaint.lon),
                complaint
                    .issue_type
                    .clone()
                    .map_or(DatabaseValue::Null, DatabaseValue::String),
                complaint
                    .intensity
                    .map_or(DatabaseValue::Null, DatabaseValue::Int64),
                complaint
                    .description
                    .clone()
                    .map_or(DatabaseValue::Null, DatabaseValue::String),
                DatabaseValue::String(format_timestamp(complaint.timestamp)),
            ],
        )
        .await?;

    let row = rows.first().ok_or_else(|| DbError::Conversion {
        message: "Failed to get complaint id from insert".to_string(),
    })?;

    let id: i64 = row.to_value("id").map_err(|e| DbError::Conversion {
        message: format!("Failed to parse complaint id: {e}"),
    })?;

    Ok(id)
}

/// Returns the total number of stored complaints.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub async fn count_complaints(db: &dyn Database) -> Result<u64, DbError> {
    let rows = db
        .query_raw_params("SELECT COUNT(*) as cnt FROM complaints", &[])
        .await?;

    let count: i64 = rows.first().map_or(0, |r| r.to_value("cnt").unwrap_or(0));

    Ok(u64::try_from(count).unwrap_or(0))
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses RFC 3339 timestamps, or naive `YYYY-MM-DD HH:MM:SS[.f]` values
/// (treated as UTC) written by older report forms.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    use crate::open_db;

    fn temp_db_path(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "complaint_map_{name}_{}.db",
            uuid::Uuid::new_v4()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn complaint(issue: Option<&str>, intensity: Option<i64>, hour: u32) -> NewComplaint {
        NewComplaint {
            lat: 17.4065,
            lon: 78.4772,
            issue_type: issue.map(String::from),
            intensity,
            description: Some("near the bus stop".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 4, 20, hour, 30, 0).unwrap(),
        }
    }

    #[test]
    fn parses_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 4, 20, 9, 15, 0).unwrap();
        assert_eq!(parse_timestamp("2024-04-20T09:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-04-20T14:45:00+05:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-04-20 09:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-04-20 09:15:00.000000"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[tokio::test]
    async fn insert_and_load_round_trip() {
        let path = temp_db_path("round_trip");
        let db = open_db(&path).await.unwrap();

        let id = insert_complaint(db.as_ref(), &complaint(Some("Heat"), Some(4), 9))
            .await
            .unwrap();
        insert_complaint(db.as_ref(), &complaint(None, None, 8))
            .await
            .unwrap();

        let loaded = load_complaints(db.as_ref()).await.unwrap();
        assert_eq!(loaded.len(), 2);

        // Oldest first regardless of insertion order
        assert_eq!(loaded[0].issue_type, None);
        assert_eq!(loaded[0].intensity, None);
        assert_eq!(loaded[1].id, id);
        assert_eq!(loaded[1].issue_type.as_deref(), Some("Heat"));
        assert_eq!(loaded[1].intensity, Some(4));
        assert_eq!(loaded[1].description.as_deref(), Some("near the bus stop"));
        assert!((loaded[1].lat - 17.4065).abs() < 1e-9);

        assert_eq!(count_complaints(db.as_ref()).await.unwrap(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn skips_rows_with_bad_coordinates() {
        let path = temp_db_path("bad_coords");
        let db = open_db(&path).await.unwrap();

        db.exec_raw(
            "INSERT INTO complaints (lat, lon, issue_type, timestamp)
             VALUES ('unknown', 78.47, 'Noise', '2024-04-20T10:00:00Z')",
        )
        .await
        .unwrap();
        let id = insert_complaint(db.as_ref(), &complaint(Some("Heat"), Some(2), 9))
            .await
            .unwrap();

        let loaded = load_complaints(db.as_ref()).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
        assert_eq!(count_complaints(db.as_ref()).await.unwrap(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn latest_is_newest_timestamp() {
        let path = temp_db_path("latest");
        let db = open_db(&path).await.unwrap();

        assert!(latest_complaint(db.as_ref()).await.unwrap().is_none());

        insert_complaint(db.as_ref(), &complaint(Some("Noise"), Some(2), 15))
            .await
            .unwrap();
        insert_complaint(db.as_ref(), &complaint(Some("Water"), Some(5), 11))
            .await
            .unwrap();

        let latest = latest_complaint(db.as_ref()).await.unwrap().unwrap();
        assert_eq!(latest.issue_type.as_deref(), Some("Noise"));

        let _ = std::fs::remove_file(&path);
    }
}
