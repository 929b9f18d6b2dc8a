pub mod fallback;
pub mod state;

use crate::api::transport::{FetchTransport, Transport};
use crate::api::ApiClient;
use crate::error::{ApiError, SearchError, CHANNEL_INFO_FALLBACK_MESSAGE};
use crate::models::{ChannelSummary, DemographicsProfile, SystemHealth, VideoOrder};
use fallback::FALLBACK_DEMOGRAPHICS;
use state::{SearchAction, SearchPhase};
use std::cell::Cell;

/// How many top videos are fetched for a channel.
pub const CHANNEL_VIDEO_COUNT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, nothing happened.
    Ignored,
    /// Another search was still running.
    Rejected,
    /// The owner went away while the search was running.
    Cancelled,
    Completed(SearchPhase),
}

/// Clears the in-flight flag however the search future ends, including
/// being dropped half way.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn claim(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Runs the channel lookup sequence and reports progress as [`SearchAction`]s.
pub struct SearchOrchestrator<T = FetchTransport> {
    client: ApiClient<T>,
    fallback: DemographicsProfile,
    last_ticket: Cell<u64>,
    in_flight: Cell<bool>,
    detached: Cell<bool>,
}

impl<T: Transport> SearchOrchestrator<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self::with_fallback(client, FALLBACK_DEMOGRAPHICS.clone())
    }

    pub fn with_fallback(client: ApiClient<T>, fallback: DemographicsProfile) -> Self {
        Self {
            client,
            fallback,
            last_ticket: Cell::new(0),
            in_flight: Cell::new(false),
            detached: Cell::new(false),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.get()
    }

    /// Whether `perform_search` would start a new search for `query` right now.
    pub fn accepts(&self, query: &str) -> bool {
        !query.trim().is_empty() && !self.is_searching() && !self.detached.get()
    }

    /// Called when the owning view is torn down. Anything still resolving
    /// afterwards is dropped instead of dispatched.
    pub fn detach(&self) {
        self.detached.set(true);
    }

    fn emit<D: Fn(SearchAction)>(&self, dispatch: &D, action: SearchAction) {
        if self.detached.get() {
            log::debug!("dropping {:?} after teardown", action);
            return;
        }
        dispatch(action);
    }

    pub async fn perform_search<D: Fn(SearchAction)>(&self, query: &str, dispatch: D) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Ignored;
        }
        if self.detached.get() {
            return SearchOutcome::Cancelled;
        }
        let Some(_guard) = InFlight::claim(&self.in_flight) else {
            log::warn!("search for '{}' rejected: another search is running", query);
            return SearchOutcome::Rejected;
        };

        let ticket = self.last_ticket.get() + 1;
        self.last_ticket.set(ticket);
        log::info!("searching for channel '{}' (#{})", query, ticket);

        self.emit(
            &dispatch,
            SearchAction::Begin {
                ticket,
                query: query.to_string(),
            },
        );

        let phase = match self.load_channel(query).await {
            Ok(channel) => {
                let channel_id = channel.channel_id.clone();
                self.emit(&dispatch, SearchAction::ChannelLoaded { ticket, channel });
                self.enrich(ticket, &channel_id, &dispatch).await;
                SearchPhase::Success
            }
            Err(e) => {
                log::info!("search #{} failed: {}", ticket, e);
                self.emit(
                    &dispatch,
                    SearchAction::Failed {
                        ticket,
                        message: e.to_string(),
                    },
                );
                SearchPhase::Failed
            }
        };

        self.emit(&dispatch, SearchAction::Finished { ticket });

        if self.detached.get() {
            SearchOutcome::Cancelled
        } else {
            SearchOutcome::Completed(phase)
        }
    }

    async fn load_channel(&self, query: &str) -> Result<ChannelSummary, SearchError> {
        let results = self.client.search_channels(query, 1).await.map_err(|e| {
            log::warn!("channel search failed: {}", e);
            SearchError::NotFound
        })?;
        let hit = results
            .channels
            .into_iter()
            .next()
            .ok_or(SearchError::NotFound)?;

        self.client
            .get_channel_basic_info(&hit.channel_id)
            .await
            .map_err(|e| match e {
                ApiError::Backend { message, .. } | ApiError::Rejected { message, .. }
                    if !message.is_empty() =>
                {
                    SearchError::ChannelInfo(message)
                }
                _ => SearchError::ChannelInfo(CHANNEL_INFO_FALLBACK_MESSAGE.to_string()),
            })
    }

    /// Videos and demographics load side by side. Neither can fail the search.
    async fn enrich<D: Fn(SearchAction)>(&self, ticket: u64, channel_id: &str, dispatch: &D) {
        let videos = async {
            match self
                .client
                .get_channel_videos(channel_id, CHANNEL_VIDEO_COUNT, VideoOrder::ViewCount)
                .await
            {
                Ok(list) => self.emit(
                    dispatch,
                    SearchAction::VideosLoaded {
                        ticket,
                        videos: list.videos,
                    },
                ),
                Err(e) => log::warn!("could not load videos for {}: {}", channel_id, e),
            }
        };

        let demographics = async {
            let profile = match self
                .client
                .get_channel_demographics(channel_id, None, None)
                .await
            {
                Ok(profile) => profile,
                Err(e) => {
                    log::warn!(
                        "demographics unavailable for {} ({}), showing sample audience",
                        channel_id,
                        e
                    );
                    self.fallback.clone()
                }
            };
            self.emit(dispatch, SearchAction::DemographicsLoaded { ticket, profile });
        };

        futures::join!(videos, demographics);
    }

    pub async fn check_system_health<D: Fn(SearchAction)>(&self, dispatch: D) {
        let health = match self.client.get_system_health().await {
            Ok(health) => health,
            Err(e) => {
                log::warn!("system health check failed: {}", e);
                SystemHealth::unhealthy(e.to_string())
            }
        };
        self.emit(&dispatch, SearchAction::HealthChecked(health));
    }
}
