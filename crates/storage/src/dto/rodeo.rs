use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new rodeo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRodeoRequest {
    #[schema(example = "Cheyenne Frontier Days")]
    pub name: String,

    #[schema(example = "Cheyenne, WY")]
    pub location: String,

    #[serde(deserialize_with = "super::datetime::deserialize")]
    #[schema(value_type = String, example = "2024-07-19T00:00:00")]
    pub start_date: NaiveDateTime,

    #[serde(deserialize_with = "super::datetime::deserialize")]
    #[schema(value_type = String, example = "2024-07-28T00:00:00")]
    pub end_date: NaiveDateTime,
}

/// Response containing rodeo details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RodeoResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    #[schema(value_type = String, example = "2024-07-19T00:00:00")]
    pub start_date: NaiveDateTime,
    #[schema(value_type = String, example = "2024-07-28T00:00:00")]
    pub end_date: NaiveDateTime,
}

impl From<crate::models::Rodeo> for RodeoResponse {
    fn from(rodeo: crate::models::Rodeo) -> Self {
        Self {
            id: rodeo.id,
            name: rodeo.name,
            location: rodeo.location,
            start_date: rodeo.start_date,
            end_date: rodeo.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rodeo;

    #[test]
    fn test_request_requires_every_field() {
        let missing_name = r#"{
            "location": "Cheyenne, WY",
            "start_date": "2024-07-19T00:00:00",
            "end_date": "2024-07-28T00:00:00"
        }"#;
        assert!(serde_json::from_str::<CreateRodeoRequest>(missing_name).is_err());
    }

    #[test]
    fn test_request_rejects_unparseable_timestamp() {
        let bad_date = r#"{
            "name": "Cheyenne Frontier Days",
            "location": "Cheyenne, WY",
            "start_date": "late July",
            "end_date": "2024-07-28T00:00:00"
        }"#;
        assert!(serde_json::from_str::<CreateRodeoRequest>(bad_date).is_err());
    }

    #[test]
    fn test_request_accepts_zoned_and_spaced_timestamps() {
        let payload = r#"{
            "name": "Cheyenne Frontier Days",
            "location": "Cheyenne, WY",
            "start_date": "2024-07-19T00:00:00.000Z",
            "end_date": "2024-07-28 00:00"
        }"#;

        let req: CreateRodeoRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(req.start_date, "2024-07-19T00:00:00".parse().unwrap());
        assert_eq!(req.end_date, "2024-07-28T00:00:00".parse().unwrap());
    }

    #[test]
    fn test_request_rejects_non_string_timestamp() {
        let numeric = r#"{
            "name": "Cheyenne Frontier Days",
            "location": "Cheyenne, WY",
            "start_date": 1721347200,
            "end_date": "2024-07-28T00:00:00"
        }"#;
        assert!(serde_json::from_str::<CreateRodeoRequest>(numeric).is_err());
    }

    #[test]
    fn test_response_serializes_iso_timestamps() {
        let rodeo = Rodeo {
            id: 1,
            name: "Cheyenne Frontier Days".to_string(),
            location: "Cheyenne, WY".to_string(),
            start_date: "2024-07-19T00:00:00".parse().unwrap(),
            end_date: "2024-07-28T00:00:00".parse().unwrap(),
        };

        let json = serde_json::to_value(RodeoResponse::from(rodeo)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Cheyenne Frontier Days",
                "location": "Cheyenne, WY",
                "start_date": "2024-07-19T00:00:00",
                "end_date": "2024-07-28T00:00:00"
            })
        );
    }
}
