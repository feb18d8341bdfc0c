/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments
/// and `wiremock` as the dependency server.
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Start a dependency server that only answers the given query.
async fn server_for(min_count: &str, view: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nodes"))
        .and(query_param("min_count", min_count))
        .and(query_param("view", view))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "from_package": "openssl", "to_package": "zlib",
                "from_depends": 700, "to_depends": 900
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    server
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_auto_discovery_applies_query_and_endpoint() {
        let server = server_for("300", "3").await;
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depgraph-view.config.yml"),
            &format!(
                r#"
endpoint: {}
min_count: 300
view: gentoo
"#,
                server.uri()
            ),
        );

        let output = cargo_bin_cmd!("depgraph-view")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let option: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(option["series"][0]["data"][0]["name"], "openssl");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_auto_discovery_applies_format_and_output() {
        let server = server_for("1000", "1").await;
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depgraph-view.config.yml"),
            &format!(
                r#"
endpoint: {}
format: html
output: graph.html
title: Configured title
"#,
                server.uri()
            ),
        );

        cargo_bin_cmd!("depgraph-view")
            .current_dir(dir.path())
            .assert()
            .code(0);

        let page = fs::read_to_string(dir.path().join("graph.html")).unwrap();
        assert!(page.contains("<title>Configured title</title>"));
    }

    #[test]
    fn test_unknown_fields_warned() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depgraph-view.config.yml"),
            r#"
endpoint: http://127.0.0.1:9
colour: blue
"#,
        );

        let output = cargo_bin_cmd!("depgraph-view")
            .current_dir(dir.path())
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'colour'"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_explicit_config_path_loads_successfully() {
        let server = server_for("5", "5").await;
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom-config.yml");
        write_config(
            &config_path,
            &format!(
                r#"
endpoint: {}
min_count: 5
view: 5
"#,
                server.uri()
            ),
        );

        let output = cargo_bin_cmd!("depgraph-view")
            .args(["-c", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("depgraph-view")
            .args(["-c", "nonexistent-config.yml"])
            .assert()
            .code(3); // ApplicationError
    }

    #[test]
    fn test_invalid_config_value_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "view: 0\n");

        let output = cargo_bin_cmd!("depgraph-view")
            .args(["-c", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid config"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_cli_overrides_config_query() {
        // Config asks for view 2 / min 10; CLI wins with view 4 / min 77
        let server = server_for("77", "4").await;
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depgraph-view.config.yml"),
            &format!(
                r#"
endpoint: {}
min_count: 10
view: debian
"#,
                server.uri()
            ),
        );

        cargo_bin_cmd!("depgraph-view")
            .current_dir(dir.path())
            .args(["--min-count", "77", "--view", "4"])
            .assert()
            .code(0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_cli_endpoint_overrides_config_endpoint() {
        let server = server_for("1000", "1").await;
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depgraph-view.config.yml"),
            "endpoint: http://127.0.0.1:9\n",
        );

        cargo_bin_cmd!("depgraph-view")
            .current_dir(dir.path())
            .args(["--endpoint", &server.uri()])
            .assert()
            .code(0);
    }
}
