use aockit_data::Separator;
use aockit_providers::{ProviderError, PuzzleClient, PuzzleId, Session};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer, cache: &tempfile::TempDir) -> PuzzleClient {
    PuzzleClient::new(Session::new("abc123"))
        .with_base_url(server.uri())
        .with_cache_root(cache.path())
}

fn day_one() -> PuzzleId {
    PuzzleId::new(2024, 1).unwrap()
}

const INSTRUCTIONS: &str = r#"<main><article class="day-desc">
<p>For example:</p>
<pre><code>3   4
4   3
2   5
1   3
3   9
3   3
</code></pre>
<p>Adding up all the distances, a total distance of <code><em>11</em></code>!</p>
</article></main>"#;

const LOGIN_REQUIRED: &str =
    "Puzzle inputs differ by user.  Please log in to get your puzzle input.\n";

// ============================================================================
// Download Tests
// ============================================================================

#[tokio::test]
async fn test_input_download_sends_session_cookie() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/2024/day/1/input"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("3   4\n4   3\n"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &cache);
    let data = client.input(day_one()).await.unwrap();

    assert_eq!(data.as_str(), "3   4\n4   3");
    let cached = std::fs::read_to_string(cache.path().join("y2024/d01/data.txt")).unwrap();
    assert_eq!(cached, "3   4\n4   3\n");
}

#[tokio::test]
async fn test_cached_input_is_not_refetched() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/2024/day/1/input"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1\n2\n"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &cache);
    assert!(client.download_input(day_one(), false).await.unwrap());
    assert!(!client.download_input(day_one(), false).await.unwrap());

    let values: Vec<u32> = client
        .input(day_one())
        .await
        .unwrap()
        .items(&Separator::Whitespace)
        .unwrap();
    assert_eq!(values, vec![1, 2]);
}

#[tokio::test]
async fn test_overwrite_refetches() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/2024/day/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INSTRUCTIONS))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, &cache);
    assert!(client.download_instructions(day_one(), false).await.unwrap());
    assert!(client.download_instructions(day_one(), true).await.unwrap());
}

#[tokio::test]
async fn test_error_response_is_still_cached() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/2024/day/1/input"))
        .respond_with(ResponseTemplate::new(400).set_body_string(LOGIN_REQUIRED))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &cache);
    let data = client.input(day_one()).await.unwrap();
    assert!(data.as_str().starts_with("Puzzle inputs differ by user."));

    // The error body now sits in the cache and is served from there.
    let again = client.input(day_one()).await.unwrap();
    assert_eq!(again, data);
}

// ============================================================================
// Instruction Extraction Tests
// ============================================================================

#[tokio::test]
async fn test_value_after_builds_test_case() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/2024/day/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INSTRUCTIONS))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &cache);
    let example = client.value_after(day_one(), "For example:").await.unwrap();
    let answer = client
        .value_after(day_one(), ", a total distance of ")
        .await
        .unwrap();

    let columns: Vec<Vec<i64>> = example.columns(&Separator::Whitespace).unwrap();
    assert_eq!(columns[0], vec![3, 4, 2, 1, 3, 3]);
    assert_eq!(answer.as_int(), Ok(11));
}

#[tokio::test]
async fn test_value_after_missing_marker() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/2024/day/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INSTRUCTIONS))
        .mount(&server)
        .await;

    let client = client_for(&server, &cache);
    match client.value_after(day_one(), "Part Two").await {
        Err(ProviderError::MarkerNotFound(prefix)) => assert_eq!(prefix, "Part Two"),
        other => panic!("Expected MarkerNotFound, got {:?}", other),
    }
}
