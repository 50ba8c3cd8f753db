use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::players::model::{ResultSet, SearchMode};

#[async_trait]
pub trait PlayersService {
    async fn search_by_name(&self, query: &str) -> Result<ResultSet>;
    async fn search_by_id(&self, id: &str) -> Result<ResultSet>;

    async fn search(&self, mode: SearchMode, query: &str) -> Result<ResultSet> {
        match mode {
            SearchMode::ByName => self.search_by_name(query).await,
            SearchMode::ById => self.search_by_id(query).await,
        }
    }
}

pub type PlayersServiceHandle = Arc<dyn PlayersService + Send + Sync>;
