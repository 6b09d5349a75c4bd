use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A JSON request body that must be an object.
///
/// Extracting a map first keeps arrays out: a derived struct would otherwise
/// accept `["han", "solo"]` by reading its fields positionally.
pub type JsonObject = Result<Json<Map<String, Value>>, JsonRejection>;

/// Decode an object body into a request type.
pub fn decode_object<T: DeserializeOwned>(payload: JsonObject) -> anyhow::Result<T> {
    let Json(object) = payload?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_core::profile::CreateUserRequest;

    #[test]
    fn test_decode_object() {
        let object = serde_json::json!({"username": "han", "password": "solo"});
        let Value::Object(map) = object else {
            unreachable!()
        };

        let request: CreateUserRequest = decode_object(Ok(Json(map))).unwrap();

        assert_eq!(request.username, "han");
        assert_eq!(request.password, "solo");
    }

    #[test]
    fn test_decode_object_reports_missing_key() {
        let mut map = Map::new();
        map.insert("username".to_string(), Value::from("han"));

        let result: anyhow::Result<CreateUserRequest> = decode_object(Ok(Json(map)));

        assert!(result.is_err());
    }
}
