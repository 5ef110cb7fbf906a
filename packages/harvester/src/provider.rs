//! [`StatuteProvider`] implementation over the law.go.kr API.

use reqwest::blocking::Client;

use gaejeong_engine::{StatuteDocument, StatuteProvider, StatuteSummary};

use crate::config::ApiConfig;
use crate::document::fetch_statute_document;
use crate::http::create_client;
use crate::search::fetch_statute_list;

/// Statute provider backed by the law.go.kr open API.
#[derive(Debug)]
pub struct ApiStatuteProvider {
    client: Client,
    config: ApiConfig,
}

impl ApiStatuteProvider {
    /// Create a provider with the given configuration.
    pub fn new(config: ApiConfig) -> crate::error::Result<Self> {
        Ok(Self {
            client: create_client()?,
            config,
        })
    }
}

impl StatuteProvider for ApiStatuteProvider {
    fn fetch_candidates(&self, keyword: &str) -> gaejeong_engine::Result<Vec<StatuteSummary>> {
        fetch_statute_list(&self.client, &self.config, keyword).map_err(Into::into)
    }

    fn fetch_document(
        &self,
        summary: &StatuteSummary,
    ) -> gaejeong_engine::Result<Option<StatuteDocument>> {
        fetch_statute_document(&self.client, &self.config, &summary.id, &summary.name)
            .map_err(Into::into)
    }
}
