//! Raw wire deliveries in the source's vocabulary.
//!
//! Builders produce the labelled JSON payloads a real endpoint would
//! deliver, with `source_time` defaulting to now. Use [`at`] to pin a
//! delivery to an explicit source timestamp for clock tests.

use chrono::{DateTime, Utc};
use matchday_feed::RawSourceEvent;
use serde_json::json;
use uuid::Uuid;

/// A fresh source-style event id.
pub fn fresh_id() -> String {
    Uuid::now_v7().to_string()
}

fn delivery(event_type: &str, payload: serde_json::Value) -> RawSourceEvent {
    RawSourceEvent { event_type: event_type.to_string(), payload, source_time: Utc::now() }
}

/// Pin a delivery to an explicit source timestamp.
pub fn at(mut event: RawSourceEvent, source_time: DateTime<Utc>) -> RawSourceEvent {
    event.source_time = source_time;
    event
}

/// sportingEventCreated for teams named after their ids.
pub fn match_created(home: &str, away: &str) -> RawSourceEvent {
    delivery(
        "sportingEventCreated",
        json!({
            "homeTeam": { "teamId": home, "name": format!("{} FC", home) },
            "awayTeam": { "teamId": away, "name": format!("{} FC", away) },
            "scheduledAt": Utc::now()
        }),
    )
}

/// A shot with the given wire result (e.g. "GOAL", "SAVED").
pub fn shot(id: &str, team: &str, result: &str) -> RawSourceEvent {
    delivery(
        "shot",
        json!({
            "id": id,
            "time": Utc::now(),
            "personId": "p-10",
            "person": "Jansen",
            "result": result,
            "type": "open-play",
            "possession": { "teamId": team }
        }),
    )
}

/// goalCorrection crediting `team`.
pub fn goal_correction(id: &str, team: &str) -> RawSourceEvent {
    delivery("goalCorrection", json!({ "id": id, "teamId": team }))
}

/// substitution for `team` with placeholder players.
pub fn substitution(id: &str, team: &str) -> RawSourceEvent {
    delivery(
        "substitution",
        json!({
            "id": id,
            "teamId": team,
            "time": Utc::now(),
            "inPersonId": "p-14",
            "inPerson": "Bakker",
            "outPersonId": "p-7",
            "outPerson": "Visser"
        }),
    )
}

/// startPeriod with an explicit occurredOn instant.
pub fn start_period_at(period: u8, occurred_on: DateTime<Utc>) -> RawSourceEvent {
    delivery("startPeriod", json!({ "period": period, "occurredOn": occurred_on }))
}

/// startPeriod without an instant; ingestion falls back to source_time.
pub fn start_period(period: u8) -> RawSourceEvent {
    delivery("startPeriod", json!({ "period": period }))
}

/// endPeriod for the given period.
pub fn end_period(period: u8) -> RawSourceEvent {
    delivery("endPeriod", json!({ "period": period }))
}

/// observationRemoved retracting `id`.
pub fn removed(id: &str) -> RawSourceEvent {
    delivery("observationRemoved", json!({ "id": id }))
}
