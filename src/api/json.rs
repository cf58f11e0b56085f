//! JSON body extractor whose rejections use the API error shape.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::error::ApiError;

/// `Json<T>` that rejects with [`ApiError`] instead of axum's plain-text body.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteRequest;
    use axum::{body::Body, http::StatusCode};

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/notes");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let req = request(Some("application/json"), r#"{"title":"t","content":"c"}"#);

        let ApiJson(note) = ApiJson::<NoteRequest>::from_request(req, &()).await.unwrap();
        assert_eq!(note.title, "t");
        assert_eq!(note.content, "c");
    }

    #[tokio::test]
    async fn test_rejections_become_bad_requests() {
        let cases = [
            request(Some("application/json"), "{not json"),
            request(Some("application/json"), r#"{"title":5,"content":"c"}"#),
            request(None, r#"{"title":"t","content":"c"}"#),
        ];

        for req in cases {
            let err = ApiJson::<NoteRequest>::from_request(req, &())
                .await
                .unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert!(!err.message().is_empty());
        }
    }
}
