mod common;

use common::{SLIMME_RECYCLING_CSV, TestContext};
use predicates::prelude::*;

const COMPLETION_BODY: &str = r#"{"choices": [{"message": {"role": "assistant", "content": "Onderwerp: Geef plastic een tweede leven\n\nBeste Bakkerij Jansen,\n\nDoe mee!"}}]}"#;

#[test]
fn list_prints_challenge_names() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args(["list", "challenges.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slimme Recycling"))
        .stdout(predicate::str::contains("Zonnedaken"));
}

#[test]
fn list_logs_nothing_below_warn_by_default() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args(["list", "challenges.csv"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    ctx.cli()
        .env("RUST_LOG", "info")
        .args(["list", "challenges.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded 2 challenges"));
}

#[test]
fn list_fails_without_name_column() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", "Title,Description\nSlimme Recycling,x\n");

    ctx.cli()
        .args(["list", "challenges.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid challenge data"))
        .stderr(predicate::str::contains("Challenge Name"));
}

#[test]
fn list_fails_for_missing_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["l", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn prompt_includes_challenge_and_company() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args([
            "prompt",
            "challenges.csv",
            "--challenge",
            "Slimme Recycling",
            "--company",
            "Bakkerij Jansen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slimme Recycling"))
        .stdout(predicate::str::contains("Bakkerij Jansen"))
        .stdout(predicate::str::contains("Plastic recycling project for SMEs"));
}

#[test]
fn prompt_accepts_combined_input() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args(["p", "challenges.csv", "--input", "zonnedaken | Bakkerij Jansen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solar panels on industrial roofs"));
}

#[test]
fn prompt_rejects_malformed_combined_input() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args(["prompt", "challenges.csv", "--input", "Zonnedaken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect format"));
}

#[test]
fn prompt_rejects_empty_company() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args(["prompt", "challenges.csv", "-c", "Slimme Recycling", "-m", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Company name must not be empty"));
}

#[test]
fn prompt_rejects_unknown_challenge() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .args(["prompt", "challenges.csv", "-c", "Windmolens", "-m", "Bakkerij Jansen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No exact match found for challenge 'Windmolens'"));
}

#[test]
fn generate_requires_api_key() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    ctx.cli()
        .env("PITCHMAIL_ENDPOINT", "https://example.openai.azure.com")
        .args(["generate", "challenges.csv", "-c", "Slimme Recycling", "-m", "Bakkerij Jansen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PITCHMAIL_API_KEY"));
}

#[test]
fn generate_prints_subject_and_body() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", mockito::Matcher::Regex(r"^/openai/deployments/gpt-4/".to_string()))
        .match_header("api-key", "test-key")
        .match_body(mockito::Matcher::Regex("Bakkerij Jansen".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COMPLETION_BODY)
        .expect(1)
        .create();

    ctx.cli_with_endpoint(&server.url())
        .args(["generate", "challenges.csv", "-c", "Slimme Recycling", "-m", "Bakkerij Jansen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: Geef plastic een tweede leven"))
        .stdout(predicate::str::contains("Beste Bakkerij Jansen,"));

    mock.assert();
}

#[test]
fn generate_reads_deployment_from_config_file() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);
    ctx.write_file("pitchmail.toml", "[generator]\ndeployment = \"marketing-gpt\"\n");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", mockito::Matcher::Regex(r"^/openai/deployments/marketing-gpt/".to_string()))
        .with_status(200)
        .with_body(COMPLETION_BODY)
        .expect(1)
        .create();

    ctx.cli_with_endpoint(&server.url())
        .args(["g", "challenges.csv", "--input", "Slimme Recycling | Bakkerij Jansen"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn generate_reports_service_errors() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .with_status(500)
        .with_body("upstream unavailable")
        .expect(1)
        .create();

    ctx.cli_with_endpoint(&server.url())
        .args(["generate", "challenges.csv", "-c", "Slimme Recycling", "-m", "Bakkerij Jansen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email generation failed"))
        .stderr(predicate::str::contains("500"));

    mock.assert();
}

#[test]
fn generate_reports_empty_completion() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", SLIMME_RECYCLING_CSV);

    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"choices": [{"message": {"content": "  "}}]}"#)
        .create();

    ctx.cli_with_endpoint(&server.url())
        .args(["generate", "challenges.csv", "-c", "Slimme Recycling", "-m", "Bakkerij Jansen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty completion"));
}

#[test]
fn generate_checks_data_before_configuration() {
    let ctx = TestContext::new();
    ctx.write_file("challenges.csv", "Title,Description\nSlimme Recycling,x\n");

    ctx.cli()
        .args(["generate", "challenges.csv", "-c", "Slimme Recycling", "-m", "Bakkerij Jansen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid challenge data"));
}
