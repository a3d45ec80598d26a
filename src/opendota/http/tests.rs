//! Unit tests for the OpenDota HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn match_payload(match_id: u64) -> serde_json::Value {
        json!({
            "match_id": match_id,
            "duration": 2345,
            "radiant_win": true,
            "radiant_team": { "name": "Tundra Esports" },
            "dire_team": { "name": "Team Liquid" },
            "tower_status_radiant": 1828,
            "tower_status_dire": 0,
            "barracks_status_radiant": 63,
            "barracks_status_dire": 0,
            "players": [
                {
                    "name": "Nine",
                    "personaname": "nine",
                    "player_slot": 1,
                    "kills": 12,
                    "deaths": 2,
                    "assists": 9,
                    "last_hits": 310,
                    "denies": 8,
                    "obs_placed": 1,
                    "sen_placed": 0,
                    "roshans_killed": 2,
                    "win": 1
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_fetch_match_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/matches/7001"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(match_payload(7001)))
            .mount(&mock_server)
            .await;

        let client = OpenDotaClient::with_base_url(format!("{}/api", mock_server.uri()));
        let record = client.fetch_match(MatchId::new(7001)).await.unwrap();

        assert_eq!(record.match_id, MatchId::new(7001));
        assert_eq!(record.duration, 2345);
        assert_eq!(record.players.len(), 1);
        assert_eq!(record.players[0].display_name(), "Nine");
        assert_eq!(record.players[0].roshans_killed, 2);
    }

    #[tokio::test]
    async fn test_fetch_match_not_found_carries_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/matches/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not Found"})))
            .mount(&mock_server)
            .await;

        let client = OpenDotaClient::with_base_url(format!("{}/api", mock_server.uri()));
        let err = client.fetch_match(MatchId::new(404)).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        match err {
            FantasyError::MatchUnavailable { match_id, status } => {
                assert_eq!(match_id, 404);
                assert_eq!(status, Some(404));
            }
            other => panic!("Expected MatchUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_match_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/matches/5"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = OpenDotaClient::with_base_url(format!("{}/api/", mock_server.uri()));
        let err = client.fetch_match(MatchId::new(5)).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_fetch_match_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/matches/6"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = OpenDotaClient::with_base_url(format!("{}/api", mock_server.uri()));
        let err = client.fetch_match(MatchId::new(6)).await.unwrap_err();
        assert!(matches!(err, FantasyError::Json(_)));
    }

    #[test]
    fn test_match_url_trims_trailing_slash() {
        let client = OpenDotaClient::with_base_url("http://localhost:9000/api/");
        assert_eq!(client.base_url(), "http://localhost:9000/api");
        assert_eq!(
            client.match_url(MatchId::new(12)),
            "http://localhost:9000/api/matches/12"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = OpenDotaClient::default();
        assert_eq!(client.base_url(), OPENDOTA_BASE_URL);
    }
}
