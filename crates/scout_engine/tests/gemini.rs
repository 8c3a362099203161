use std::net::TcpListener;
use std::time::Duration;

use pretty_assertions::assert_eq;
use scout_core::{GroundingSource, JobQuery, MediaType, ParsedResumeData};
use scout_engine::{
    encode_bytes, FailureKind, GeminiClient, GeminiSettings, JobSearcher, ResumeAnalyzer,
    NO_RESULTS_TEXT,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    let mut settings = GeminiSettings::new("test-key");
    settings.base_url = server.uri();
    settings.model = "test-model".to_string();
    settings.request_timeout = Some(Duration::from_secs(5));
    GeminiClient::new(settings).expect("client builds")
}

fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

fn analysis_text(score: f64) -> String {
    json!({
        "jobName": "Backend Engineer",
        "experienceYears": "6",
        "skills": "Rust, Postgres, Kafka",
        "certifications": "None",
        "atsScore": score,
        "atsRecommendations": ["Quantify impact", "Add keywords"]
    })
    .to_string()
}

fn query() -> JobQuery {
    JobQuery {
        profile: ParsedResumeData {
            job_name: "Backend Engineer".to_string(),
            experience_years: "6".to_string(),
            skills: "Rust, Postgres".to_string(),
            certifications: "None".to_string(),
            ..ParsedResumeData::default()
        },
        location: "Berlin".to_string(),
        interests: "Remote".to_string(),
    }
}

#[tokio::test]
async fn analyze_returns_the_extracted_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "inlineData": { "mimeType": "application/pdf", "data": "JVBERg==" } }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&analysis_text(82.0))))
        .expect(1)
        .mount(&server)
        .await;

    let attachment = encode_bytes(b"%PDF", MediaType::Pdf);
    let data = client(&server)
        .analyze(&attachment)
        .await
        .expect("analysis ok");

    assert_eq!(
        data,
        ParsedResumeData {
            job_name: "Backend Engineer".to_string(),
            experience_years: "6".to_string(),
            skills: "Rust, Postgres, Kafka".to_string(),
            certifications: "None".to_string(),
            ats_score: Some(82),
            ats_recommendations: vec!["Quantify impact".to_string(), "Add keywords".to_string()],
        }
    );
}

#[tokio::test]
async fn analyze_rounds_fractional_scores() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&analysis_text(71.6))))
        .mount(&server)
        .await;

    let data = client(&server)
        .analyze(&encode_bytes(b"png", MediaType::Png))
        .await
        .expect("analysis ok");
    assert_eq!(data.ats_score, Some(72));
}

#[tokio::test]
async fn analyze_rejects_missing_fields() {
    let server = MockServer::start().await;
    let partial = json!({ "jobName": "Engineer", "skills": "Go" }).to_string();
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&partial)))
        .mount(&server)
        .await;

    let err = client(&server)
        .analyze(&encode_bytes(b"x", MediaType::Pdf))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::SchemaViolation);
}

#[tokio::test]
async fn analyze_rejects_out_of_range_score() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&analysis_text(140.0))))
        .mount(&server)
        .await;

    let err = client(&server)
        .analyze(&encode_bytes(b"x", MediaType::Pdf))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::SchemaViolation);
}

#[tokio::test]
async fn analyze_without_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client(&server)
        .analyze(&encode_bytes(b"x", MediaType::Jpeg))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::EmptyResponse);
}

#[tokio::test]
async fn http_errors_carry_status_and_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "backend unavailable", "status": "INTERNAL" }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .analyze(&encode_bytes(b"x", MediaType::Pdf))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "backend unavailable");
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client(&server).search(&query()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn search_enables_grounding_and_collects_web_sources() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({ "tools": [{ "googleSearch": {} }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "# Group: Remote\n* Rust Dev at Acme" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://jobs.example.com/1", "title": "Acme" } },
                        { "retrievedContext": { "uri": "gs://bucket/doc" } },
                        { "web": { "uri": "https://boards.example.org/2" } },
                        { "web": { "uri": "https://jobs.example.com/1", "title": "Acme" } }
                    ]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).search(&query()).await.expect("search ok");

    assert_eq!(result.text, "# Group: Remote\n* Rust Dev at Acme");
    assert_eq!(
        result.sources,
        vec![
            GroundingSource::new("https://jobs.example.com/1", "Acme"),
            GroundingSource::new("https://boards.example.org/2", ""),
            GroundingSource::new("https://jobs.example.com/1", "Acme"),
        ]
    );
}

#[tokio::test]
async fn search_prompt_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .mount(&server)
        .await;

    client(&server)
        .with_today(|| "2026-10-18".to_string())
        .search(&query())
        .await
        .expect("search ok");

    let requests = server.received_requests().await.expect("recording on");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("- Target Location: Berlin"));
    assert!(prompt.contains("Today's date: 2026-10-18"));
    assert!(body.get("generationConfig").is_none());
}

#[tokio::test]
async fn blank_search_text_falls_back_to_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("   ")))
        .mount(&server)
        .await;

    let result = client(&server).search(&query()).await.expect("search ok");
    assert_eq!(result.text, NO_RESULTS_TEXT);
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn search_http_errors_carry_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client(&server).search(&query()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.message, "overloaded");
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_response("late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut settings = GeminiSettings::new("test-key");
    settings.base_url = server.uri();
    settings.model = "test-model".to_string();
    settings.request_timeout = Some(Duration::from_millis(200));
    let client = GeminiClient::new(settings).unwrap();

    let err = client.search(&query()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let mut settings = GeminiSettings::new("k");
    settings.base_url = format!("http://127.0.0.1:{port}");
    settings.request_timeout = Some(Duration::from_secs(2));
    let client = GeminiClient::new(settings).unwrap();

    let err = client.search(&query()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
