//! Procedure input decoding.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// JSON input of a procedure. An empty body decodes as `null`, so procedures
/// whose input is optional can be called without one.
#[derive(Debug)]
pub struct RpcInput<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RpcInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::bad_input(e.body_text()))?;
        decode(&bytes).map(RpcInput)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonApiError> {
    let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"null" } else { bytes };
    serde_json::from_slice(raw).map_err(|e| JsonApiError::bad_input(format!("invalid input: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::{IdParam, ListFilter};

    #[test]
    fn empty_body_is_null() {
        let f: Option<ListFilter> = decode(b"").unwrap();
        assert!(f.is_none());
        let f: Option<ListFilter> = decode(b"  \n").unwrap();
        assert!(f.is_none());
        assert!(decode::<IdParam>(b"").is_err());
    }

    #[test]
    fn wrong_shape_is_bad_input() {
        let err = decode::<IdParam>(br#"{"id":"seven"}"#).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(err.message.starts_with("invalid input"));
        let id: IdParam = decode(br#"{"id":7}"#).unwrap();
        assert_eq!(id.id, 7);
    }
}
