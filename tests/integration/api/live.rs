//! Real MDN integration tests
//!
//! **IMPORTANT**: These tests are only run when:
//! 1. The `integration-tests` feature is enabled
//! 2. The `MDN_REAL_API_TESTS` environment variable is set
//!
//! To run these tests:
//! ```bash
//! MDN_REAL_API_TESTS=1 cargo test --features integration-tests --test live_mdn
//! ```

#[cfg(feature = "integration-tests")]
mod integration_tests {
    use std::env;

    use mdn_event_stubs::{SourceClient, StubGenerator};
    use tracing::info;
    use tracing_test::traced_test;

    fn should_run_real_api_tests() -> bool {
        env::var("MDN_REAL_API_TESTS").is_ok()
    }

    #[tokio::test]
    #[traced_test]
    async fn test_live_event_reference_still_extracts() {
        if !should_run_real_api_tests() {
            info!("Skipping real API test - enable with MDN_REAL_API_TESTS=1");
            return;
        }

        let client = SourceClient::new().unwrap();
        let events = client.fetch_event_types().await.unwrap();

        assert!(events.len() > 100, "only {} events extracted", events.len());
        assert!(events.iter().any(|e| e == "click"));
        assert!(events.iter().all(|e| !e.ends_with(" event")));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_live_stub_renders() {
        if !should_run_real_api_tests() {
            info!("Skipping real API test - enable with MDN_REAL_API_TESTS=1");
            return;
        }

        let generator = StubGenerator::new().unwrap();
        let stub = generator.prepare_event_types_pyi().await.unwrap();

        assert!(stub.contains("EventType = Literal["));
    }
}
