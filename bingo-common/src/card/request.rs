//! Card generation wire format
//!
//! Two request bodies are accepted on the same endpoint:
//! - `{"include": [..], "exclude": [..], "maybe": [..]}`
//! - `{"selectedPhrases": [..]}` (exactly 24 entries)
//!
//! A body carrying `selectedPhrases` is the fixed form; anything else must be
//! the tri-state form. The response is `{"bingoGrid": [[..], ..]}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{BingoGrid, CardError, CardRequest, TriState};

const SELECTED_PHRASES: &str = "selectedPhrases";

#[derive(Debug, Deserialize)]
struct FixedBody {
    #[serde(rename = "selectedPhrases")]
    selected_phrases: Vec<String>,
}

/// Successful generation response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResponse {
    #[serde(rename = "bingoGrid")]
    pub bingo_grid: BingoGrid,
}

/// Decode a generation request body
///
/// Non-JSON input, non-object bodies, missing lists and non-string entries
/// all fail with `InvalidShape`.
pub fn parse_generate_request(body: &[u8]) -> Result<CardRequest, CardError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| CardError::InvalidShape(format!("body is not JSON ({e})")))?;

    let Some(object) = value.as_object() else {
        return Err(CardError::InvalidShape("body must be a JSON object".to_string()));
    };

    if object.contains_key(SELECTED_PHRASES) {
        let fixed: FixedBody = serde_json::from_value(value)
            .map_err(|e| CardError::InvalidShape(e.to_string()))?;
        return Ok(CardRequest::Fixed(fixed.selected_phrases));
    }

    let selection: TriState =
        serde_json::from_value(value).map_err(|e| CardError::InvalidShape(e.to_string()))?;
    Ok(CardRequest::TriState(selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{build_grid, CardPhrases};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_tri_state() {
        let body = br#"{"include":["A"],"exclude":["Z"],"maybe":["B","C"]}"#;
        let request = parse_generate_request(body).unwrap();
        assert_eq!(
            request,
            CardRequest::TriState(TriState {
                include: vec!["A".into()],
                exclude: vec!["Z".into()],
                maybe: vec!["B".into(), "C".into()],
            })
        );
    }

    #[test]
    fn test_parse_fixed() {
        let body = br#"{"selectedPhrases":["A","B"]}"#;
        let request = parse_generate_request(body).unwrap();
        assert_eq!(request, CardRequest::Fixed(vec!["A".into(), "B".into()]));
    }

    #[test]
    fn test_missing_list_is_invalid_shape() {
        let body = br#"{"include":[],"maybe":[]}"#;
        let err = parse_generate_request(body).unwrap_err();
        assert_eq!(err.kind(), "InvalidShape");
    }

    #[test]
    fn test_non_array_is_invalid_shape() {
        let body = br#"{"include":"A","exclude":[],"maybe":[]}"#;
        assert_eq!(parse_generate_request(body).unwrap_err().kind(), "InvalidShape");

        let body = br#"{"selectedPhrases":"A"}"#;
        assert_eq!(parse_generate_request(body).unwrap_err().kind(), "InvalidShape");
    }

    #[test]
    fn test_non_string_entry_is_invalid_shape() {
        let body = br#"{"include":[1],"exclude":[],"maybe":[]}"#;
        assert_eq!(parse_generate_request(body).unwrap_err().kind(), "InvalidShape");
    }

    #[test]
    fn test_not_json_is_invalid_shape() {
        assert_eq!(parse_generate_request(b"nope").unwrap_err().kind(), "InvalidShape");
        assert_eq!(parse_generate_request(b"[1,2]").unwrap_err().kind(), "InvalidShape");
    }

    #[test]
    fn test_response_body() {
        let phrases: Vec<String> = (0..24).map(|i| format!("p{i}")).collect();
        let grid = build_grid(
            CardPhrases::try_from(phrases).unwrap(),
            &mut StdRng::seed_from_u64(1),
        );
        let body = serde_json::to_value(GenerateResponse { bingo_grid: grid }).unwrap();
        assert_eq!(body["bingoGrid"].as_array().unwrap().len(), 5);
        assert_eq!(body["bingoGrid"][2][2], "FREE");
    }
}
