use std::str::FromStr;

use log::debug;
use reqwest::{
    blocking::{Client, RequestBuilder},
    StatusCode,
};
use shared::data::ModelPayload;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Unsupported resource '{0}'. Available resources: models")]
    UnsupportedResource(String),
}

/// Resources the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Models,
}

impl Resource {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Resource::Models => "models",
        }
    }
}

impl FromStr for Resource {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "models" => Ok(Resource::Models),
            other => Err(CliError::UnsupportedResource(other.into())),
        }
    }
}

/// Optional filters for listing a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<u32>,
}

impl ListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("total", limit.to_string()));
        }
        pairs
    }
}

/// What the service answered.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    /// The body, pretty printed when it is JSON.
    #[must_use]
    pub fn pretty_body(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| self.body.clone())
    }
}

pub struct ApiClient {
    client: Client,
    host: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(host: &str) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            host: host.trim_end_matches('/').into(),
        })
    }

    fn url(&self, resource: Resource, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{id}", self.host, resource.path()),
            None => format!("{}/{}", self.host, resource.path()),
        }
    }

    #[must_use]
    pub fn get_request(
        &self,
        resource: Resource,
        id: Option<&str>,
        options: &ListOptions,
    ) -> RequestBuilder {
        self.client
            .get(self.url(resource, id))
            .query(&options.query_pairs())
    }

    #[must_use]
    pub fn create_request(&self, resource: Resource, payload: &ModelPayload) -> RequestBuilder {
        self.client.put(self.url(resource, None)).json(payload)
    }

    #[must_use]
    pub fn update_request(
        &self,
        resource: Resource,
        id: &str,
        payload: &ModelPayload,
    ) -> RequestBuilder {
        self.client.post(self.url(resource, Some(id))).json(payload)
    }

    #[must_use]
    pub fn delete_request(&self, resource: Resource, id: &str) -> RequestBuilder {
        self.client.delete(self.url(resource, Some(id)))
    }

    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the body not read.
    pub fn send(&self, request: RequestBuilder) -> reqwest::Result<Reply> {
        let request = request.build()?;
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request)?;
        let status = response.status();
        let body = response.text()?;
        debug!("Got {status}: {body}");

        Ok(Reply { status, body })
    }
}
