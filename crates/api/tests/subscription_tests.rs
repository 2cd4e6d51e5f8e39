mod common;

use std::time::Duration;

use api::auth::permissions::LOGIN_REQUIRED;
use api::gql::common::types::TournamentEventKind;
use api::gql::subscriptions::{publish_tournament_event, subscribe_tournament_events};
use async_graphql::Request;
use common::*;
use futures_util::StreamExt;
use uuid::Uuid;

#[tokio::test]
async fn test_events_reach_only_their_tournament() {
    let tournament_id = Uuid::new_v4();
    let other_tournament = Uuid::new_v4();
    let team_id = Uuid::new_v4();

    let mut receiver = subscribe_tournament_events(tournament_id);
    let mut other_receiver = subscribe_tournament_events(other_tournament);

    publish_tournament_event(TournamentEventKind::TeamAdded, tournament_id, team_id);

    let event = receiver.recv().await.expect("event should be delivered");
    assert_eq!(event.kind, TournamentEventKind::TeamAdded);
    assert_eq!(event.tournament_id.as_str(), tournament_id.to_string());
    assert_eq!(event.entity_id.as_str(), team_id.to_string());

    assert!(other_receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_publishing_without_subscribers_is_a_no_op() {
    publish_tournament_event(
        TournamentEventKind::MatchUpdated,
        Uuid::new_v4(),
        Uuid::new_v4(),
    );
}

#[tokio::test]
async fn test_subscription_requires_a_session() {
    let schema = test_schema(lazy_state());
    let query = format!(
        r#"subscription {{ tournamentEvents(tournamentId: "{}") {{ kind }} }}"#,
        Uuid::new_v4()
    );

    let mut stream = schema.execute_stream(Request::new(query));
    let response = stream.next().await.expect("stream should yield an error");

    assert_eq!(first_error(&response), LOGIN_REQUIRED);
}

#[tokio::test]
async fn test_subscription_streams_published_events() {
    let schema = test_schema(lazy_state());
    let tournament_id = Uuid::new_v4();
    let match_id = Uuid::new_v4();
    let claims = claims_for(Uuid::new_v4(), "viewer@test.com");

    let query = format!(
        r#"subscription {{ tournamentEvents(tournamentId: "{tournament_id}") {{ kind entityId }} }}"#
    );
    let mut stream = schema.execute_stream(Request::new(query).data(claims));
    let next = tokio::spawn(async move { stream.next().await });

    // The channel is joined on first poll; keep publishing until it is.
    for _ in 0..200 {
        if next.is_finished() {
            break;
        }
        publish_tournament_event(TournamentEventKind::MatchScheduled, tournament_id, match_id);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let response = next
        .await
        .expect("subscription task panicked")
        .expect("stream should yield an event");
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["tournamentEvents"]["kind"], "MATCH_SCHEDULED");
    assert_eq!(data["tournamentEvents"]["entityId"], match_id.to_string());
}
