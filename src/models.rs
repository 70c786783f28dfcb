use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ApiObject;
use crate::error::MalformedPartyError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>, // server-assigned object id
    pub title: String,
    pub description: String,
    pub formatted_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    pub male_cost: u32,
    pub female_cost: u32,
    pub byob: bool,
    pub the_word: Vec<String>,
}

impl ApiObject for Party {
    type Error = MalformedPartyError;

    fn to_json(&self) -> String {
        serde_json::to_string(self).expect("party serialization")
    }

    fn from_json(value: &Value) -> Result<Self, MalformedPartyError> {
        let party = Party::deserialize(value)?;
        if party.start_time >= party.end_time {
            return Err(MalformedPartyError::TimeRange {
                start: party.start_time.timestamp_millis(),
                end: party.end_time.timestamp_millis(),
            });
        }
        Ok(party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> Value {
        json!({
            "_id": "55e631fb0ac153b2e6d0f569",
            "title": "Woodlawn Warmup",
            "description": "Pregame before the game",
            "formattedAddress": "629 S Woodlawn Ave.",
            "latitude": 39.165548,
            "longitude": -86.523775,
            "startTime": 1441227600000i64,
            "endTime": 1441242000000i64,
            "maleCost": 5,
            "femaleCost": 0,
            "byob": false,
            "theWord": ["Nothing yet", "Heating up", "Great keg just got here"],
        })
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let party = Party::from_json(&sample_json()).unwrap();
        let wire: Value = serde_json::from_str(&party.to_json()).unwrap();
        let rebuilt = Party::from_json(&wire).unwrap();
        assert_eq!(rebuilt, party);
        assert_eq!(rebuilt.start_time.timestamp_millis(), 1441227600000);
        assert_eq!(rebuilt.end_time.timestamp_millis(), 1441242000000);
        assert_eq!(
            rebuilt.the_word,
            vec!["Nothing yet", "Heating up", "Great keg just got here"]
        );
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut json = sample_json();
        let map = json.as_object_mut().unwrap();
        map.remove("_id");
        map.remove("latitude");
        map.remove("longitude");

        let party = Party::from_json(&json).unwrap();
        assert_eq!(party.id, None);
        assert_eq!(party.latitude, None);

        // absent optionals stay off the wire
        let wire: Value = serde_json::from_str(&party.to_json()).unwrap();
        assert!(wire.get("_id").is_none());
        assert!(wire.get("latitude").is_none());
    }

    #[test]
    fn each_required_key_is_rejected_when_missing() {
        for key in [
            "title",
            "description",
            "formattedAddress",
            "startTime",
            "endTime",
            "maleCost",
            "femaleCost",
            "byob",
            "theWord",
        ] {
            let mut json = sample_json();
            json.as_object_mut().unwrap().remove(key);
            let err = Party::from_json(&json).unwrap_err();
            assert!(
                matches!(err, MalformedPartyError::Decode(_)),
                "missing {key} should fail decoding"
            );
        }
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        let mut json = sample_json();
        json["startTime"] = json!("tonight");
        assert!(matches!(
            Party::from_json(&json),
            Err(MalformedPartyError::Decode(_))
        ));

        let mut json = sample_json();
        json["theWord"] = json!([1, 2, 3]);
        assert!(matches!(
            Party::from_json(&json),
            Err(MalformedPartyError::Decode(_))
        ));

        let mut json = sample_json();
        json["maleCost"] = json!(-5);
        assert!(matches!(
            Party::from_json(&json),
            Err(MalformedPartyError::Decode(_))
        ));
    }

    #[test]
    fn start_must_precede_end() {
        let mut json = sample_json();
        json["endTime"] = json!(1441227600000i64);
        assert!(matches!(
            Party::from_json(&json),
            Err(MalformedPartyError::TimeRange { .. })
        ));
    }
}
