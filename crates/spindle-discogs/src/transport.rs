// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{DiscogsError, Result};

/// Query parameters for one call. Order carries no meaning.
pub(crate) type Params = Vec<(&'static str, String)>;

/// Headers computed once per client and shared by every request it issues.
#[derive(Debug, Clone)]
pub(crate) struct RequestContext {
    headers: HeaderMap,
}

impl RequestContext {
    pub(crate) fn new(user_agent: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);

        if let Some(token) = token {
            // Discogs uses its own scheme, not Bearer.
            let mut value = HeaderValue::from_str(&format!("Discogs token={token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self { headers })
    }

    pub(crate) fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// The request pipeline every service handle delegates to.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: Client,
    context: Arc<RequestContext>,
}

impl Transport {
    pub(crate) fn new(client: Client, context: Arc<RequestContext>) -> Self {
        Self { client, context }
    }

    pub(crate) fn context(&self) -> &RequestContext {
        &self.context
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<Option<T>> {
        self.request_with_method(Method::GET, path, params).await
    }

    pub(crate) async fn request_with_method<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<Option<T>> {
        self.dispatch(method, path, params, None).await
    }

    pub(crate) async fn request_with_json_body<B, T>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        body: &B,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(DiscogsError::Serialize)?;
        self.dispatch(method, path, params, Some(body)).await
    }

    /// Perform one HTTP exchange and decode the result.
    ///
    /// `Ok(None)` means the server answered 204 and nothing was decoded.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        body: Option<Vec<u8>>,
    ) -> Result<Option<T>> {
        trace!(target: "discogs", %method, path, ?params, "sending request");

        let mut request = self
            .client
            .request(method, path)
            .query(params)
            .headers(self.context.headers.clone())
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(target: "discogs", %status, path, "response status");

        match status {
            StatusCode::OK => {}
            StatusCode::NO_CONTENT => return Ok(None),
            StatusCode::UNAUTHORIZED => return Err(DiscogsError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => return Err(DiscogsError::TooManyRequests),
            other => return Err(DiscogsError::UnknownStatus(other)),
        }

        let body = response.bytes().await?;
        trace!(target: "discogs", body = %String::from_utf8_lossy(&body), "response body");

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(DiscogsError::Decode)
    }
}

/// Append `key=value` to `params` when `value` is present.
pub(crate) fn push_opt<V: ToString>(params: &mut Params, key: &'static str, value: Option<V>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Identified {
        id: u64,
    }

    fn transport(token: Option<&str>) -> Transport {
        let context = RequestContext::new("SpindleTest/0.1", token).unwrap();
        Transport::new(Client::new(), Arc::new(context))
    }

    #[test]
    fn context_without_token_has_no_authorization() {
        let context = RequestContext::new("SpindleTest/0.1", None).unwrap();
        assert_eq!(context.headers().get(USER_AGENT).unwrap(), "SpindleTest/0.1");
        assert!(context.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn context_with_token_uses_discogs_scheme() {
        let context = RequestContext::new("SpindleTest/0.1", Some("s3cret")).unwrap();
        let value = context.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(value, "Discogs token=s3cret");
        assert!(value.is_sensitive());
    }

    #[test]
    fn context_rejects_control_characters() {
        let err = RequestContext::new("bad\nagent", None).unwrap_err();
        assert!(matches!(err, DiscogsError::InvalidHeader(_)));
    }

    #[test]
    fn push_opt_skips_missing_values() {
        let mut params = Params::new();
        push_opt(&mut params, "page", Some(2));
        push_opt::<u32>(&mut params, "per_page", None);
        assert_eq!(params, vec![("page", "2".to_string())]);
    }

    #[tokio::test]
    async fn ok_response_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(query_param("page", "2"))
            .and(header("user-agent", "SpindleTest/0.1"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let params: Params = vec![("page", "2".to_string())];
        let decoded: Option<Identified> = transport(None)
            .get(&format!("{}/thing", server.uri()), &params)
            .await
            .unwrap();
        assert_eq!(decoded, Some(Identified { id: 42 }));
    }

    #[tokio::test]
    async fn no_content_decodes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let decoded: Option<Identified> = transport(None)
            .request_with_method(Method::DELETE, &server.uri(), &Params::new())
            .await
            .unwrap();
        assert!(decoded.is_none());
    }

    #[tokio::test]
    async fn unauthorized_skips_decoding() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let err = transport(None)
            .get::<Identified>(&server.uri(), &Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DiscogsError::Unauthorized));
    }

    #[tokio::test]
    async fn too_many_requests_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let err = transport(None)
            .get::<Identified>(&server.uri(), &Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DiscogsError::TooManyRequests));
    }

    #[tokio::test]
    async fn other_status_carries_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Release not found."
            })))
            .mount(&server)
            .await;

        let err = transport(None)
            .get::<Identified>(&server.uri(), &Params::new())
            .await
            .unwrap_err();
        assert!(
            matches!(err, DiscogsError::UnknownStatus(status) if status == StatusCode::NOT_FOUND)
        );
        assert_eq!(err.to_string(), "unknown error: 404 Not Found");
    }

    #[tokio::test]
    async fn created_is_not_treated_as_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let err = transport(None)
            .request_with_json_body::<_, Identified>(
                Method::POST,
                &server.uri(),
                &Params::new(),
                &serde_json::json!({"name": "Jazz"}),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, DiscogsError::UnknownStatus(status) if status == StatusCode::CREATED)
        );
        assert_eq!(err.to_string(), "unknown error: 201 Created");
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json"))
            .mount(&server)
            .await;

        let err = transport(None)
            .get::<Identified>(&server.uri(), &Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DiscogsError::Decode(_)));
    }

    #[tokio::test]
    async fn json_body_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({"name": "Jazz"})))
            .and(header("authorization", "Discogs token=abc"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 7})))
            .expect(1)
            .mount(&server)
            .await;

        let decoded: Option<Identified> = transport(Some("abc"))
            .request_with_json_body(
                Method::POST,
                &server.uri(),
                &Params::new(),
                &serde_json::json!({"name": "Jazz"}),
            )
            .await
            .unwrap();
        assert_eq!(decoded, Some(Identified { id: 7 }));
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        // Nothing listens on port 9 locally.
        let err = transport(None)
            .get::<Identified>("http://127.0.0.1:9/", &Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DiscogsError::Http(_)));
    }
}
