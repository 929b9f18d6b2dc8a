use crate::models::{ChannelSummary, DemographicsProfile, SystemHealth, VideoSummary};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Success,
    Failed,
}

/// Everything the dashboard renders for the current search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    pub query: String,
    pub phase: SearchPhase,
    /// Identifies the search that owns the fields below. Updates carrying
    /// any other ticket are dropped.
    pub ticket: u64,
    pub channel: Option<ChannelSummary>,
    pub videos: Vec<VideoSummary>,
    pub demographics: Option<DemographicsProfile>,
    pub error: Option<String>,
    pub system_health: Option<SystemHealth>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Begin { ticket: u64, query: String },
    ChannelLoaded { ticket: u64, channel: ChannelSummary },
    VideosLoaded { ticket: u64, videos: Vec<VideoSummary> },
    DemographicsLoaded { ticket: u64, profile: DemographicsProfile },
    Failed { ticket: u64, message: String },
    Finished { ticket: u64 },
    HealthChecked(SystemHealth),
}

impl SearchViewState {
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    fn owns(&self, ticket: u64) -> bool {
        self.ticket == ticket && self.is_loading()
    }

    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::Begin { ticket, query } => {
                if ticket <= self.ticket {
                    return;
                }
                // Previous results go away up front so a failed re-search
                // never shows the last channel.
                self.ticket = ticket;
                self.query = query;
                self.phase = SearchPhase::Searching;
                self.channel = None;
                self.videos.clear();
                self.demographics = None;
                self.error = None;
            }
            SearchAction::ChannelLoaded { ticket, channel } => {
                if self.owns(ticket) {
                    self.channel = Some(channel);
                }
            }
            SearchAction::VideosLoaded { ticket, videos } => {
                if self.owns(ticket) {
                    self.videos = videos;
                }
            }
            SearchAction::DemographicsLoaded { ticket, profile } => {
                if self.owns(ticket) {
                    self.demographics = Some(profile);
                }
            }
            SearchAction::Failed { ticket, message } => {
                if self.owns(ticket) {
                    self.channel = None;
                    self.error = Some(message);
                    self.phase = SearchPhase::Failed;
                }
            }
            SearchAction::Finished { ticket } => {
                if self.owns(ticket) {
                    self.phase = if self.channel.is_some() {
                        SearchPhase::Success
                    } else {
                        SearchPhase::Failed
                    };
                }
            }
            SearchAction::HealthChecked(health) => {
                self.system_health = Some(health);
            }
        }
    }
}

impl Reducible for SearchViewState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelStatistics;

    fn channel(id: &str) -> ChannelSummary {
        ChannelSummary {
            channel_id: id.to_string(),
            title: format!("Channel {id}"),
            description: None,
            custom_url: None,
            thumbnails: Default::default(),
            country: None,
            published_at: None,
            last_updated: None,
            statistics: ChannelStatistics::default(),
        }
    }

    fn begin(state: &mut SearchViewState, ticket: u64) {
        state.apply(SearchAction::Begin {
            ticket,
            query: format!("query {ticket}"),
        });
    }

    #[test]
    fn begin_clears_previous_results() {
        let mut state = SearchViewState::default();
        begin(&mut state, 1);
        state.apply(SearchAction::ChannelLoaded {
            ticket: 1,
            channel: channel("UC1"),
        });
        state.apply(SearchAction::DemographicsLoaded {
            ticket: 1,
            profile: DemographicsProfile::default(),
        });
        state.apply(SearchAction::Finished { ticket: 1 });
        assert_eq!(state.phase, SearchPhase::Success);

        begin(&mut state, 2);
        assert!(state.is_loading());
        assert_eq!(state.channel, None);
        assert_eq!(state.demographics, None);
        assert!(state.videos.is_empty());
        assert_eq!(state.query, "query 2");
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut state = SearchViewState::default();
        begin(&mut state, 2);
        state.apply(SearchAction::ChannelLoaded {
            ticket: 1,
            channel: channel("old"),
        });
        state.apply(SearchAction::Finished { ticket: 1 });

        assert!(state.is_loading());
        assert_eq!(state.channel, None);

        // An older Begin can't rewind the ticket either
        begin(&mut state, 1);
        assert_eq!(state.ticket, 2);
    }

    #[test]
    fn updates_after_finish_are_ignored() {
        let mut state = SearchViewState::default();
        begin(&mut state, 1);
        state.apply(SearchAction::Failed {
            ticket: 1,
            message: "No matching channel found".into(),
        });
        state.apply(SearchAction::Finished { ticket: 1 });
        state.apply(SearchAction::ChannelLoaded {
            ticket: 1,
            channel: channel("late"),
        });

        assert_eq!(state.phase, SearchPhase::Failed);
        assert_eq!(state.channel, None);
        assert_eq!(state.error.as_deref(), Some("No matching channel found"));
    }

    #[test]
    fn health_is_recorded_regardless_of_phase() {
        let mut state = SearchViewState::default();
        state.apply(SearchAction::HealthChecked(SystemHealth::unhealthy("down")));
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(!state.system_health.unwrap().is_healthy());
    }

    #[test]
    fn reducer_produces_new_state() {
        let state = Rc::new(SearchViewState::default());
        let next = state.clone().reduce(SearchAction::Begin {
            ticket: 1,
            query: "rust".into(),
        });
        assert!(!state.is_loading());
        assert!(next.is_loading());
    }
}
