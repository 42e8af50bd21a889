//! HTTP Client Wrapper
//!
//! Thin wrapper over reqwest exposing exactly the four verbs the
//! repository operations need. On wasm32 reqwest lowers to the browser
//! fetch API; a client is a cheap handle, so one is built per call site.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;

pub struct ApiClient {
    base: &'static str,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base: config::api_base(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, reqwest::Error> {
        self.http
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, reqwest::Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.http
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, reqwest::Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.http
            .patch(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), reqwest::Error> {
        self.http
            .delete(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
