//! GitHub profile lookup against a mocked REST API.

use mockito::Server;
use quizalarm_core::{GitHubClient, ProfileError};

#[tokio::test]
async fn test_fetch_user_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat")
        .match_header("user-agent", "quizalarm")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "login": "octocat",
                "id": 583231,
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "name": "The Octocat",
                "followers": 9001,
                "following": 9
            }"#,
        )
        .create_async()
        .await;

    let client = GitHubClient::new(server.url());
    let user = client.fetch_user("octocat").await.unwrap();
    assert_eq!(user.login, "octocat");
    assert_eq!(user.display_name(), "The Octocat");
    assert_eq!(user.followers, 9001);
    assert_eq!(user.following, 9);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_user_without_name_uses_login() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/users/ghost")
        .with_status(200)
        .with_body(r#"{"login": "ghost", "avatar_url": "https://a/ghost", "name": null, "followers": 0, "following": 0}"#)
        .create_async()
        .await;

    let user = GitHubClient::new(server.url()).fetch_user(" ghost ").await.unwrap();
    assert_eq!(user.display_name(), "ghost");
}

#[tokio::test]
async fn test_fetch_user_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/users/nobody-here")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let err = GitHubClient::new(server.url())
        .fetch_user("nobody-here")
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::NotFound));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_fetch_user_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/users/octocat")
        .with_status(500)
        .create_async()
        .await;

    let err = GitHubClient::new(server.url())
        .fetch_user("octocat")
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::Http { status: 500 }));
    assert_eq!(err.to_string(), "Error fetching data");
}
