// ABOUTME: Integration tests for the devtoken CLI commands
// ABOUTME: Exit codes and JSON output shapes against an in-memory store

use std::sync::Arc;

use devtoken_cli::commands::{EXIT_FAILURE, EXIT_MALFORMED_TOKEN, EXIT_SUCCESS};
use devtoken_cli::TokenCommands;
use devtoken_security::{TokenService, TokenServiceConfig};
use devtoken_storage::MemoryTokenStore;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn test_service() -> TokenService {
    let config = TokenServiceConfig {
        memory_kib: 256,
        iterations: 1,
        parallelism: 1,
    };
    TokenService::new(Arc::new(MemoryTokenStore::new()), config).unwrap()
}

async fn run(service: &TokenService, command: TokenCommands) -> (i32, String) {
    let mut out = Vec::new();
    let code = command.execute(service, &mut out).await.unwrap();
    (code, String::from_utf8(out).unwrap())
}

async fn issue_json(service: &TokenService) -> Value {
    let (code, output) = run(service, TokenCommands::Issue { json: true }).await;
    assert_eq!(code, EXIT_SUCCESS);
    serde_json::from_str(&output).unwrap()
}

#[tokio::test]
async fn test_issue_json_has_credential_fields() {
    let service = test_service();

    let credential = issue_json(&service).await;

    let object = credential.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["created_at", "id", "plaintext_token"]);

    let id = credential["id"].as_str().unwrap();
    let token = credential["plaintext_token"].as_str().unwrap();
    assert!(service.verify_token(id, token).await.unwrap());
}

#[tokio::test]
async fn test_verify_exit_codes() {
    let service = test_service();
    let credential = issue_json(&service).await;
    let id = credential["id"].as_str().unwrap().to_string();
    let token = credential["plaintext_token"].as_str().unwrap().to_string();

    let (code, output) = run(
        &service,
        TokenCommands::Verify {
            id: id.clone(),
            token: token.clone(),
        },
    )
    .await;
    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.contains("Token verified"));

    let (code, output) = run(
        &service,
        TokenCommands::Verify {
            id: id.clone(),
            token: "3mJr7AoUXx2Wqd".to_string(),
        },
    )
    .await;
    assert_eq!(code, EXIT_FAILURE);
    assert!(output.is_empty());

    let (code, _) = run(
        &service,
        TokenCommands::Verify {
            id: "no-such-id".to_string(),
            token,
        },
    )
    .await;
    assert_eq!(code, EXIT_FAILURE);

    let (code, output) = run(
        &service,
        TokenCommands::Verify {
            id,
            token: "0OIl".to_string(),
        },
    )
    .await;
    assert_eq!(code, EXIT_MALFORMED_TOKEN);
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_show_missing_token_exits_with_failure() {
    let service = test_service();

    let (code, output) = run(
        &service,
        TokenCommands::Show {
            id: "no-such-id".to_string(),
            json: false,
        },
    )
    .await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_show_json_contains_hash_only() {
    let service = test_service();
    let credential = issue_json(&service).await;
    let id = credential["id"].as_str().unwrap().to_string();

    let (code, output) = run(
        &service,
        TokenCommands::Show {
            id: id.clone(),
            json: true,
        },
    )
    .await;
    assert_eq!(code, EXIT_SUCCESS);

    let record: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(record["id"].as_str(), Some(id.as_str()));
    assert!(record.get("plaintext_token").is_none());
    assert!(!output.contains(credential["plaintext_token"].as_str().unwrap()));
}

#[tokio::test]
async fn test_list_json_and_remove() {
    let service = test_service();
    let first = issue_json(&service).await;
    issue_json(&service).await;

    let (code, output) = run(&service, TokenCommands::List { json: true }).await;
    assert_eq!(code, EXIT_SUCCESS);
    let records: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);

    let id = first["id"].as_str().unwrap().to_string();
    let (code, _) = run(&service, TokenCommands::Remove { id: id.clone() }).await;
    assert_eq!(code, EXIT_SUCCESS);

    // Removing again still succeeds
    let (code, _) = run(&service, TokenCommands::Remove { id: id.clone() }).await;
    assert_eq!(code, EXIT_SUCCESS);

    let (code, _) = run(
        &service,
        TokenCommands::Verify {
            id,
            token: first["plaintext_token"].as_str().unwrap().to_string(),
        },
    )
    .await;
    assert_eq!(code, EXIT_FAILURE);
}

#[tokio::test]
async fn test_list_empty_store_succeeds() {
    let service = test_service();

    let (code, output) = run(&service, TokenCommands::List { json: true }).await;

    assert_eq!(code, EXIT_SUCCESS);
    let records: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(records, Value::Array(vec![]));
}
