mod common;

use api::auth::permissions::LOGIN_REQUIRED;
use api::gql::domains::matches::service::SAME_TEAM_ERROR;
use async_graphql::Variables;
use common::*;
use serde_json::json;
use uuid::Uuid;

// These run against a pool that never connects; anything reaching the
// database would fail with a connection error instead of the expected one.

#[tokio::test]
async fn test_queries_require_a_session() {
    let schema = test_schema(lazy_state());
    let tournament_id = Uuid::new_v4().to_string();

    let queries = [
        "{ me { id } }".to_string(),
        "{ tournaments { totalCount } }".to_string(),
        format!(r#"{{ tournament(id: "{tournament_id}") {{ id }} }}"#),
        format!(r#"{{ teams(tournamentId: "{tournament_id}") {{ id }} }}"#),
        format!(r#"{{ players(teamId: "{tournament_id}") {{ id }} }}"#),
        format!(r#"{{ tournamentPlayers(tournamentId: "{tournament_id}") {{ id }} }}"#),
        format!(r#"{{ matches(tournamentId: "{tournament_id}") {{ id }} }}"#),
        format!(r#"{{ standings(tournamentId: "{tournament_id}") {{ rank }} }}"#),
        format!(r#"{{ playerStats(tournamentId: "{tournament_id}") {{ id }} }}"#),
    ];

    for query in &queries {
        let response = execute_graphql(&schema, query, None, None).await;
        assert_eq!(first_error(&response), LOGIN_REQUIRED, "query: {query}");
    }
}

#[tokio::test]
async fn test_mutations_require_a_session() {
    let schema = test_schema(lazy_state());
    let id = Uuid::new_v4().to_string();

    let mutations = [
        r#"mutation { createTournament(input: { name: "Cup" }) { id } }"#.to_string(),
        format!(r#"mutation {{ updateTournament(input: {{ id: "{id}", name: "Cup" }}) {{ id }} }}"#),
        format!(r#"mutation {{ addTeam(input: {{ tournamentId: "{id}", name: "XI" }}) {{ id }} }}"#),
        format!(r#"mutation {{ updateTeam(input: {{ id: "{id}", name: "XI" }}) {{ id }} }}"#),
        format!(r#"mutation {{ deleteTeam(id: "{id}") }}"#),
        format!(r#"mutation {{ addPlayer(input: {{ teamId: "{id}", name: "Bat" }}) {{ id }} }}"#),
        format!(
            r#"mutation {{ scheduleMatch(input: {{ tournamentId: "{id}", team1Id: "{id}", team2Id: "{id}" }}) {{ id }} }}"#
        ),
        format!(r#"mutation {{ updateMatch(input: {{ id: "{id}", status: COMPLETED }}) {{ id }} }}"#),
        format!(
            r#"mutation {{ addPlayerStats(input: {{ playerId: "{id}", tournamentId: "{id}", runs: 1, wickets: 0, matchesPlayed: 1, strikeRate: 50.0, average: 1.0 }}) {{ id }} }}"#
        ),
        format!(r#"mutation {{ updatePlayerStats(input: {{ id: "{id}", runs: 5 }}) {{ id }} }}"#),
    ];

    for mutation in &mutations {
        let response = execute_graphql(&schema, mutation, None, None).await;
        assert_eq!(first_error(&response), LOGIN_REQUIRED, "mutation: {mutation}");
    }
}

#[tokio::test]
async fn test_schedule_match_with_same_team_fails_before_any_database_access() {
    let schema = test_schema(lazy_state());
    let claims = claims_for(Uuid::new_v4(), "scorer@test.com");
    let team_id = Uuid::new_v4().to_string();

    let query = r#"
        mutation ScheduleMatch($input: ScheduleMatchInput!) {
            scheduleMatch(input: $input) { id }
        }
    "#;
    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": Uuid::new_v4().to_string(),
            "team1Id": team_id,
            "team2Id": team_id,
            "venue": "Lord's"
        }
    }));

    let response = execute_graphql(&schema, query, Some(variables), Some(claims)).await;

    assert_eq!(first_error(&response), SAME_TEAM_ERROR);
}

#[tokio::test]
async fn test_blank_names_are_rejected_before_any_database_access() {
    let schema = test_schema(lazy_state());
    let claims = claims_for(Uuid::new_v4(), "scorer@test.com");
    let id = Uuid::new_v4().to_string();

    let cases = [
        (
            r#"mutation { createTournament(input: { name: "   " }) { id } }"#.to_string(),
            "Tournament name is required",
        ),
        (
            format!(r#"mutation {{ addTeam(input: {{ tournamentId: "{id}", name: "" }}) {{ id }} }}"#),
            "Team name is required",
        ),
        (
            format!(r#"mutation {{ addPlayer(input: {{ teamId: "{id}", name: " " }}) {{ id }} }}"#),
            "Player name is required",
        ),
    ];

    for (mutation, expected) in &cases {
        let response = execute_graphql(&schema, mutation, None, Some(claims.clone())).await;
        assert_eq!(first_error(&response), *expected, "mutation: {mutation}");
    }
}

#[tokio::test]
async fn test_negative_stats_are_rejected_before_any_database_access() {
    let schema = test_schema(lazy_state());
    let claims = claims_for(Uuid::new_v4(), "scorer@test.com");
    let id = Uuid::new_v4().to_string();

    let mutation = format!(
        r#"mutation {{ updatePlayerStats(input: {{ id: "{id}", wickets: -2 }}) {{ id }} }}"#
    );
    let response = execute_graphql(&schema, &mutation, None, Some(claims)).await;

    assert_eq!(first_error(&response), "Wickets cannot be negative");
}

#[tokio::test]
async fn test_malformed_ids_are_reported() {
    let schema = test_schema(lazy_state());
    let claims = claims_for(Uuid::new_v4(), "scorer@test.com");

    let response = execute_graphql(
        &schema,
        r#"{ teams(tournamentId: "not-a-uuid") { id } }"#,
        None,
        Some(claims),
    )
    .await;

    assert!(
        first_error(&response).starts_with("Invalid tournament ID"),
        "unexpected error: {:?}",
        response.errors
    );
}
