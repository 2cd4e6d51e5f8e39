use async_graphql::{Context, Result, Subscription, ID};
use chrono::Utc;
use futures_util::{Stream, StreamExt};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use uuid::Uuid;

use crate::auth::permissions::require_user;
use crate::gql::common::helpers::parse_id;
use crate::gql::common::types::{TournamentEvent, TournamentEventKind};

const CHANNEL_CAPACITY: usize = 100;

/// Per-tournament event channels. A channel is created by its first
/// subscriber and dropped once a publish finds nobody listening.
struct SubscriptionChannels {
    tournaments: HashMap<Uuid, broadcast::Sender<TournamentEvent>>,
}

impl SubscriptionChannels {
    fn new() -> Self {
        Self {
            tournaments: HashMap::new(),
        }
    }

    fn subscribe(&mut self, tournament_id: Uuid) -> broadcast::Receiver<TournamentEvent> {
        self.tournaments
            .entry(tournament_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    fn publish(&mut self, tournament_id: Uuid, event: TournamentEvent) {
        let Some(sender) = self.tournaments.get(&tournament_id) else {
            return;
        };
        if sender.send(event).is_err() {
            self.tournaments.remove(&tournament_id);
        }
    }
}

static CHANNELS: Lazy<Arc<Mutex<SubscriptionChannels>>> =
    Lazy::new(|| Arc::new(Mutex::new(SubscriptionChannels::new())));

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Changes to a tournament's teams, players, matches and stats.
    async fn tournament_events(
        &self,
        ctx: &Context<'_>,
        tournament_id: ID,
    ) -> Result<impl Stream<Item = TournamentEvent>> {
        require_user(ctx)?;
        let tournament_uuid = parse_id(&tournament_id, "tournament")?;

        let receiver = CHANNELS.lock().subscribe(tournament_uuid);
        let mut events = BroadcastStream::new(receiver);

        Ok(async_stream::stream! {
            while let Some(item) = events.next().await {
                match item {
                    Ok(event) => yield event,
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            tournament_id = %tournament_uuid,
                            skipped,
                            "Subscriber lagged behind tournament events"
                        );
                    }
                }
            }
        })
    }
}

/// Notify subscribers of `tournament_id`. No-op when nobody is listening.
pub fn publish_tournament_event(kind: TournamentEventKind, tournament_id: Uuid, entity_id: Uuid) {
    let event = TournamentEvent {
        kind,
        tournament_id: tournament_id.into(),
        entity_id: entity_id.into(),
        occurred_at: Utc::now(),
    };

    CHANNELS.lock().publish(tournament_id, event);
}

/// Open receiver for `tournament_id`, for in-process consumers.
pub fn subscribe_tournament_events(tournament_id: Uuid) -> broadcast::Receiver<TournamentEvent> {
    CHANNELS.lock().subscribe(tournament_id)
}
