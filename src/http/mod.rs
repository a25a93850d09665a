use reqwest::Client;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: Option<&str>) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    /// GitHub defaults; bearer auth only when a token is configured.
    fn github_headers(self, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "projectsgen");

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::ResponseStatusError {
                status,
                message: text,
            });
        }

        Ok(text)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Response status {status}: {message}")]
    ResponseStatusError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
