use chrono::{NaiveDateTime, SubsecRound, Utc};
use rusqlite::{params, Connection, Row};

use crate::models::Reservation;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const RESERVATION_COLUMNS: &str = "id, confirmation, name, date, time, guests, phone, special_requests, transcript, extra, created_at";

// ── Reservations ──

pub struct ReservationInsert<'a> {
    pub confirmation: &'a str,
    pub name: Option<&'a str>,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
    pub guests: Option<u8>,
    pub phone: Option<&'a str>,
    pub special_requests: Option<&'a str>,
    pub transcript: Option<&'a str>,
    pub extra: &'a serde_json::Map<String, serde_json::Value>,
}

pub fn insert_reservation(
    conn: &Connection,
    r: &ReservationInsert<'_>,
) -> anyhow::Result<Reservation> {
    let extra = serde_json::to_string(r.extra)?;
    // Stored with millisecond precision; truncate so the returned value matches.
    let created_at = Utc::now().naive_utc().trunc_subsecs(3);

    conn.execute(
        "INSERT INTO reservations (confirmation, name, date, time, guests, phone, special_requests, transcript, extra, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            r.confirmation,
            r.name,
            r.date,
            r.time,
            r.guests,
            r.phone,
            r.special_requests,
            r.transcript,
            extra,
            created_at.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )?;

    Ok(Reservation {
        id: conn.last_insert_rowid(),
        confirmation: r.confirmation.to_string(),
        name: r.name.map(str::to_string),
        date: r.date.map(str::to_string),
        time: r.time.map(str::to_string),
        guests: r.guests,
        phone: r.phone.map(str::to_string),
        special_requests: r.special_requests.map(str::to_string),
        transcript: r.transcript.map(str::to_string),
        extra: r.extra.clone(),
        created_at,
    })
}

pub fn confirmation_exists(conn: &Connection, confirmation: &str) -> anyhow::Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM reservations WHERE confirmation = ?1",
        params![confirmation],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Newest first; ties on the timestamp fall back to insertion order.
pub fn list_reservations(conn: &Connection) -> anyhow::Result<Vec<Reservation>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], |row| Ok(parse_reservation_row(row)))?;

    let mut reservations = vec![];
    for row in rows {
        reservations.push(row??);
    }
    Ok(reservations)
}

pub fn get_reservation_by_confirmation(
    conn: &Connection,
    confirmation: &str,
) -> anyhow::Result<Option<Reservation>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE confirmation = ?1"
    ))?;

    let result = stmt.query_row(params![confirmation], |row| Ok(parse_reservation_row(row)));

    match result {
        Ok(reservation) => Ok(Some(reservation?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn delete_reservation_by_confirmation(
    conn: &Connection,
    confirmation: &str,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "DELETE FROM reservations WHERE confirmation = ?1",
        params![confirmation],
    )?;
    Ok(count > 0)
}

pub fn ping(conn: &Connection) -> anyhow::Result<()> {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

fn parse_reservation_row(row: &Row<'_>) -> anyhow::Result<Reservation> {
    let extra_json: String = row.get(9)?;
    let created_at_str: String = row.get(10)?;

    let extra = serde_json::from_str(&extra_json).unwrap_or_default();
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Reservation {
        id: row.get(0)?,
        confirmation: row.get(1)?,
        name: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        guests: row.get(5)?,
        phone: row.get(6)?,
        special_requests: row.get(7)?,
        transcript: row.get(8)?,
        extra,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn insert(conn: &Connection, confirmation: &str, name: &str) -> Reservation {
        let extra = serde_json::Map::new();
        insert_reservation(
            conn,
            &ReservationInsert {
                confirmation,
                name: Some(name),
                date: Some("Friday"),
                time: Some("7:00 PM"),
                guests: Some(2),
                phone: None,
                special_requests: None,
                transcript: None,
                extra: &extra,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let conn = setup_db();
        let created = insert(&conn, "MML000001", "Ada Lovelace");

        let fetched = get_reservation_by_confirmation(&conn, "MML000001")
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(fetched.guests, Some(2));
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn test_get_missing_is_none() {
        let conn = setup_db();
        assert!(get_reservation_by_confirmation(&conn, "NOPE").unwrap().is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let conn = setup_db();
        insert(&conn, "MML000001", "First Guest");
        insert(&conn, "MML000002", "Second Guest");

        let all = list_reservations(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].confirmation, "MML000002");
        assert_eq!(all[1].confirmation, "MML000001");
    }

    #[test]
    fn test_delete() {
        let conn = setup_db();
        insert(&conn, "MML000001", "Ada Lovelace");

        assert!(delete_reservation_by_confirmation(&conn, "MML000001").unwrap());
        assert!(!delete_reservation_by_confirmation(&conn, "MML000001").unwrap());
        assert!(!confirmation_exists(&conn, "MML000001").unwrap());
    }

    #[test]
    fn test_duplicate_confirmation_rejected() {
        let conn = setup_db();
        insert(&conn, "MML000001", "Ada Lovelace");
        let extra = serde_json::Map::new();
        let dup = insert_reservation(
            &conn,
            &ReservationInsert {
                confirmation: "MML000001",
                name: None,
                date: None,
                time: None,
                guests: None,
                phone: None,
                special_requests: None,
                transcript: None,
                extra: &extra,
            },
        );
        assert!(dup.is_err());
    }

    #[test]
    fn test_extra_round_trips() {
        let conn = setup_db();
        let mut extra = serde_json::Map::new();
        extra.insert("occasion".to_string(), serde_json::json!("anniversary"));
        insert_reservation(
            &conn,
            &ReservationInsert {
                confirmation: "MML000003",
                name: None,
                date: None,
                time: None,
                guests: None,
                phone: None,
                special_requests: None,
                transcript: Some("table for two"),
                extra: &extra,
            },
        )
        .unwrap();

        let fetched = get_reservation_by_confirmation(&conn, "MML000003")
            .unwrap()
            .unwrap();
        assert_eq!(fetched.extra["occasion"], "anniversary");
        assert_eq!(fetched.transcript.as_deref(), Some("table for two"));
    }
}
