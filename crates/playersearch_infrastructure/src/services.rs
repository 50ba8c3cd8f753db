use std::sync::Arc;

use playersearch_interface::errors::Result;
use playersearch_interface::players::service::PlayersServiceHandle;

pub mod players_service;

use players_service::HttpPlayersService;

use crate::settings::Settings;

#[derive(Clone)]
pub struct ServiceRegistry {
    pub players_service: PlayersServiceHandle,
}

impl ServiceRegistry {
    pub fn new(settings: &Settings) -> Result<Self> {
        let players_service = Arc::new(HttpPlayersService::new(&settings.service)?);

        Ok(Self { players_service })
    }
}
