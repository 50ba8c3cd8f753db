use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use playersearch_interface::errors::{AppError, Result};
use playersearch_interface::players::{
    model::{PlayerListResponse, PlayerRecordResponse, PlayersResponse, ResultSet},
    service::PlayersService,
};

use crate::settings::Service;

const USER_AGENT: &str = concat!("playersearch/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpPlayersService {
    client: Client,
    base_url: Url,
}

impl HttpPlayersService {
    pub fn new(settings: &Service) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| AppError::ConfigError {
            msg: format!("invalid service base_url '{}': {}", settings.base_url, e),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::ConfigError {
                msg: format!("service base_url '{}' cannot be a base", settings.base_url),
            });
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::ConfigError { msg: e.to_string() })?;

        Ok(Self { client, base_url })
    }

    // `{base}/players` followed by the given segments, each one percent-encoded.
    fn players_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("players").extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::FetchError { msg: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchError {
                msg: format!("{} answered with status: {}", response.url(), status),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::FetchError { msg: e.to_string() })
    }
}

#[async_trait]
impl PlayersService for HttpPlayersService {
    async fn search_by_name(&self, query: &str) -> Result<ResultSet> {
        let response = self
            .fetch::<PlayerListResponse>(self.players_url(&[]), &[("search", query)])
            .await?;

        Ok(PlayersResponse::List(response).into_result_set())
    }

    async fn search_by_id(&self, id: &str) -> Result<ResultSet> {
        let response = self
            .fetch::<PlayerRecordResponse>(self.players_url(&[id]), &[])
            .await?;

        Ok(PlayersResponse::Single(response).into_result_set())
    }
}
