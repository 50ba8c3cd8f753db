use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use playersearch_infrastructure::settings::Search;
use playersearch_interface::errors::{AppError, Result};
use playersearch_interface::players::model::{Player, ResultSet, SearchMode};
use playersearch_interface::players::service::PlayersServiceHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Populated(ResultSet),
    Empty,
    Failed,
}

impl SearchState {
    pub fn players(&self) -> &[Player] {
        match self {
            SearchState::Populated(players) => players,
            _ => &[],
        }
    }
}

// The one slot every search writes its outcome into.
#[derive(Debug)]
struct StateSlot {
    state: SearchState,
    // Sequence number of the most recently triggered search.
    latest_ticket: u64,
}

pub struct SearchController {
    players_service: PlayersServiceHandle,
    input: String,
    mode: SearchMode,
    discard_stale_responses: bool,
    slot: Arc<Mutex<StateSlot>>,
}

impl SearchController {
    pub fn new(players_service: PlayersServiceHandle, settings: &Search) -> Self {
        Self {
            players_service,
            input: String::new(),
            mode: settings.default_mode,
            discard_stale_responses: settings.discard_stale_responses,
            slot: Arc::new(Mutex::new(StateSlot {
                state: SearchState::Idle,
                latest_ticket: 0,
            })),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    // Only updates the pending query, the next search picks it up.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub async fn state(&self) -> SearchState {
        self.slot.lock().await.state.clone()
    }

    // Validates the input and enters `Loading`. The returned search carries a
    // snapshot of the query and mode so later edits do not affect it.
    pub async fn begin_search(&self) -> Result<PendingSearch> {
        let query = self.input.trim();
        if query.is_empty() {
            return Err(AppError::ValidationError {
                msg: "the search input is empty".to_string(),
            });
        }

        let ticket = {
            let mut slot = self.slot.lock().await;
            slot.latest_ticket += 1;
            slot.state = SearchState::Loading;
            slot.latest_ticket
        };

        Ok(PendingSearch {
            players_service: self.players_service.clone(),
            mode: self.mode,
            query: query.to_string(),
            ticket,
            discard_stale_responses: self.discard_stale_responses,
            slot: self.slot.clone(),
        })
    }

    pub async fn search(&self) -> Result<SearchState> {
        let pending = self.begin_search().await?;
        match pending.run().await {
            Some(state) => Ok(state),
            None => Ok(self.state().await),
        }
    }
}

pub struct PendingSearch {
    players_service: PlayersServiceHandle,
    mode: SearchMode,
    query: String,
    ticket: u64,
    discard_stale_responses: bool,
    slot: Arc<Mutex<StateSlot>>,
}

impl PendingSearch {
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // Performs the request and stores the outcome. Fetch errors end here.
    // Returns `None` when the outcome was dropped because a newer search started.
    pub async fn run(self) -> Option<SearchState> {
        debug!(mode = %self.mode, query = %self.query, ticket = self.ticket, "dispatching search");

        let next = match self.players_service.search(self.mode, &self.query).await {
            Ok(players) if players.is_empty() => {
                info!(mode = %self.mode, query = %self.query, "no players found");
                SearchState::Empty
            }
            Ok(players) => {
                info!(mode = %self.mode, query = %self.query, count = players.len(), "players found");
                SearchState::Populated(players)
            }
            Err(e) => {
                error!(mode = %self.mode, query = %self.query, "error fetching player data: {}", e);
                SearchState::Failed
            }
        };

        let mut slot = self.slot.lock().await;
        if self.discard_stale_responses && slot.latest_ticket != self.ticket {
            warn!(
                ticket = self.ticket,
                latest = slot.latest_ticket,
                "dropping the response of a superseded search"
            );
            return None;
        }

        slot.state = next.clone();
        Some(next)
    }
}
