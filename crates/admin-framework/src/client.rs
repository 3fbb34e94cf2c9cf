//! # Generic Resource Client
//!
//! This module defines the typed client for one backend resource.

use crate::entity::ApiResource;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for one
/// [`ApiResource`]. It lowers list/get/create/update/delete/action calls into
/// gateway requests and decodes the backend's JSON envelopes into `T`.
///
/// * **Cloneable** – holds only an `Arc` to the shared gateway.
/// * **Async API** – all methods resolve to `Result<…, GatewayError>`.
/// * **Generic** – works with any type that implements `ApiResource`.
#[derive(Clone)]
pub struct ResourceClient<T: ApiResource> {
    gateway: Arc<dyn Gateway>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: ApiResource> ResourceClient<T> {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            _resource: PhantomData,
        }
    }

    /// `GET` the collection and decode `{LIST_KEY: [...]}`.
    pub async fn list(&self) -> Result<Vec<T>, GatewayError> {
        let body = self.gateway.get(T::COLLECTION).await?;
        decode_field(body, T::LIST_KEY)
    }

    /// `GET` one member. A 404 from the backend maps to `Ok(None)`.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, GatewayError> {
        match self.gateway.get(&T::member_path(&id)).await {
            Ok(body) => decode_field(body, T::ITEM_KEY).map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `POST` to the collection. Returns the created record when the backend echoes it.
    pub async fn create(&self, params: T::Create) -> Result<Option<T>, GatewayError> {
        let body = self.gateway.post(T::COLLECTION, encode(&params)?).await?;
        decode_optional_field(body, T::ITEM_KEY)
    }

    /// `PUT` to a member. Returns the updated record when the backend echoes it.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<Option<T>, GatewayError> {
        let body = self
            .gateway
            .put(&T::member_path(&id), encode(&update)?)
            .await?;
        decode_optional_field(body, T::ITEM_KEY)
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), GatewayError> {
        self.gateway.delete(&T::member_path(&id)).await.map(|_| ())
    }

    /// `PATCH` a sub-path of a member, e.g. `/admin/orders/{id}/status`.
    ///
    /// The response body is returned undecoded; actions answer with
    /// resource-specific shapes.
    pub async fn perform_action<B: Serialize + Sync>(
        &self,
        id: T::Id,
        action: &str,
        body: &B,
    ) -> Result<Value, GatewayError> {
        let path = format!("{}/{}", T::member_path(&id), action);
        self.gateway.patch(&path, encode(body)?).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, GatewayError> {
    serde_json::to_value(body).map_err(|e| GatewayError::Decode(format!("encode failed: {e}")))
}

/// Decodes `body[key]` into `D`. A missing key is a decode error.
pub fn decode_field<D: DeserializeOwned>(body: Value, key: &str) -> Result<D, GatewayError> {
    match body {
        Value::Object(mut map) => {
            let field = map
                .remove(key)
                .ok_or_else(|| GatewayError::Decode(format!("missing field `{key}`")))?;
            serde_json::from_value(field)
                .map_err(|e| GatewayError::Decode(format!("field `{key}`: {e}")))
        }
        other => Err(GatewayError::Decode(format!(
            "expected object with `{key}`, got {}",
            kind_of(&other)
        ))),
    }
}

fn decode_optional_field<D: DeserializeOwned>(
    body: Value,
    key: &str,
) -> Result<Option<D>, GatewayError> {
    match &body {
        Value::Object(map) if map.contains_key(key) => decode_field(body, key).map(Some),
        _ => Ok(None),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_decode_field_reads_envelope() {
        let rows: Vec<Row> = decode_field(json!({"rows": [{"id": 1}, {"id": 2}]}), "rows").unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_decode_field_missing_key() {
        let err = decode_field::<Vec<Row>>(json!({"other": []}), "rows").unwrap_err();
        assert_eq!(err, GatewayError::Decode("missing field `rows`".to_string()));
    }

    #[test]
    fn test_decode_field_rejects_non_object() {
        let err = decode_field::<Vec<Row>>(json!([1, 2]), "rows").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(msg) if msg.contains("array")));
    }

    #[test]
    fn test_decode_optional_field() {
        let none: Option<Row> = decode_optional_field(json!({"message": "ok"}), "row").unwrap();
        assert!(none.is_none());
        let some: Option<Row> = decode_optional_field(json!({"row": {"id": 9}}), "row").unwrap();
        assert_eq!(some, Some(Row { id: 9 }));
    }
}
