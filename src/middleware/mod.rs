//! Request pipeline: an ordered chain of interceptors in front of the HTTP client.
//!
//! Each interceptor receives the request and a [`Next`] handle. It may change the
//! request, call `next.run(request)` (or not), and inspect the result on the way
//! back. The first interceptor added is the outermost.

mod auth;
mod error_handler;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

use crate::error::ApiError;

pub use auth::{CredentialInterceptor, SessionInvalidator, is_public_auth_path};
pub use error_handler::{Classification, ErrorClassifier, classify};

pub type InterceptResult = Result<Response, ApiError>;

#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn intercept(&self, request: Request, next: Next<'_>) -> InterceptResult;

    /// Sees failures raised outside the chain: requests that could not be
    /// built and success bodies that could not be decoded.
    fn on_failure(&self, _path: &str, _error: &ApiError) {}
}

/// The rest of the chain after the current interceptor.
pub struct Next<'a> {
    client: &'a Client,
    rest: &'a [Arc<dyn Interceptor>],
}

impl Next<'_> {
    pub async fn run(self, request: Request) -> InterceptResult {
        match self.rest.split_first() {
            Some((current, rest)) => {
                current
                    .intercept(
                        request,
                        Next {
                            client: self.client,
                            rest,
                        },
                    )
                    .await
            }
            None => self.client.execute(request).await.map_err(ApiError::from),
        }
    }
}

#[derive(Clone)]
pub struct Pipeline {
    client: Client,
    interceptors: Arc<[Arc<dyn Interceptor>]>,
}

impl Pipeline {
    pub fn builder(client: Client) -> PipelineBuilder {
        PipelineBuilder {
            client,
            interceptors: Vec::new(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Hands a failure raised outside the chain to every interceptor and
    /// returns it.
    pub fn report(&self, path: &str, error: ApiError) -> ApiError {
        for interceptor in self.interceptors.iter() {
            interceptor.on_failure(path, &error);
        }
        error
    }

    pub async fn execute(&self, request: Request) -> InterceptResult {
        tracing::debug!("{} {}", request.method(), request.url().path());
        Next {
            client: &self.client,
            rest: &self.interceptors,
        }
        .run(request)
        .await
    }
}

pub struct PipelineBuilder {
    client: Client,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl PipelineBuilder {
    pub fn with<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            client: self.client,
            interceptors: self.interceptors.into(),
        }
    }
}
