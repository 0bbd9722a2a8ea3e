//! JSON REST client over the request pipeline.

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::middleware::Pipeline;
use crate::utils::endpoint_url;

/// `{base}/{endpoint}` calls with JSON bodies; cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    pipeline: Pipeline,
}

impl ApiClient {
    pub fn new(base_url: &str, pipeline: Pipeline) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            pipeline,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        endpoint_url(&self.base_url, endpoint)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.pipeline.client().request(method, self.url(endpoint))
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, endpoint)).await
    }

    /// GET with a query string built from `query`; `None` fields are left out.
    pub async fn get_with<Q, T>(&self, endpoint: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::GET, endpoint).query(query))
            .await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, endpoint).json(body))
            .await
    }

    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, endpoint).json(body))
            .await
    }

    pub async fn patch<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PATCH, endpoint).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, endpoint)).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let request = match builder.build() {
            Ok(request) => request,
            Err(e) => {
                let path = e.url().map(|u| u.path().to_string()).unwrap_or_default();
                return Err(self.pipeline.report(&path, e.into()));
            }
        };
        let path = request.url().path().to_string();
        let response = self.pipeline.execute(request).await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        match decode(response).await {
            Ok(value) => Ok(value),
            Err(e) => Err(self.pipeline.report(&path, e)),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    // void endpoints answer with an empty body
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    Ok(serde_json::from_slice(body)?)
}
