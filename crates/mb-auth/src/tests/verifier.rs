//! Contract tests: both verifier implementations present the same
//! success/failure surface, so shared scenarios run against each.

use crate::tests::memory_store::MemoryStore;
use crate::{AuthError, DelegatedVerifier, IdentityVerifier, JwtCodec, LocalVerifier};

use mb_core::{CredentialStore, NewUser};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const PEER_TIMEOUT: Duration = Duration::from_millis(250);

async fn seeded_store() -> (Arc<MemoryStore>, i64) {
    let store = Arc::new(MemoryStore::new());
    let user = store
        .create(NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "unused".to_string(),
        })
        .await
        .unwrap();
    (store, user.id)
}

/// Scenarios every verifier must satisfy regardless of strategy.
async fn assert_verifier_contract(verifier: &dyn IdentityVerifier, valid_token: &str) {
    let identity = verifier
        .verify(valid_token)
        .await
        .expect("valid token must verify");
    assert_eq!(identity.email, "alice@example.com");

    assert!(verifier.verify("not-a-token").await.is_err());
    assert!(verifier.verify("aaaa.bbbb.cccc").await.is_err());
}

async fn mount_me_success(server: &MockServer, id: i64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": id, "name": "Alice", "email": "alice@example.com" }
        })))
        .mount(server)
        .await;
}

// =============================================================================
// LocalVerifier
// =============================================================================

#[tokio::test]
async fn given_valid_token_when_locally_verified_then_contract_holds() {
    let (store, user_id) = seeded_store().await;
    let codec = Arc::new(JwtCodec::new(SECRET, 3600));
    let token = codec.mint(user_id, "alice@example.com").unwrap();

    let verifier = LocalVerifier::new(codec, store);

    assert_verifier_contract(&verifier, &token).await;
}

#[tokio::test]
async fn given_token_from_other_secret_when_locally_verified_then_denied() {
    let (store, user_id) = seeded_store().await;
    let other_codec = JwtCodec::new(b"a-completely-different-secret-key", 3600);
    let token = other_codec.mint(user_id, "alice@example.com").unwrap();

    let verifier = LocalVerifier::new(Arc::new(JwtCodec::new(SECRET, 3600)), store);

    assert!(matches!(
        verifier.verify(&token).await,
        Err(AuthError::TokenDecode { .. })
    ));
}

#[tokio::test]
async fn given_deleted_subject_when_locally_verified_then_denied() {
    let (store, user_id) = seeded_store().await;
    let codec = Arc::new(JwtCodec::new(SECRET, 3600));
    let token = codec.mint(user_id, "alice@example.com").unwrap();

    let verifier = LocalVerifier::new(codec, store.clone());
    store.remove(user_id);

    assert!(matches!(
        verifier.verify(&token).await,
        Err(AuthError::UnknownSubject { .. })
    ));
}

// =============================================================================
// DelegatedVerifier
// =============================================================================

#[tokio::test]
async fn given_vouching_peer_when_delegated_then_contract_holds() {
    let server = MockServer::start().await;
    mount_me_success(&server, 42).await;

    let codec = JwtCodec::new(SECRET, 3600);
    let token = codec.mint(42, "alice@example.com").unwrap();

    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    assert_verifier_contract(&verifier, &token).await;
}

#[tokio::test]
async fn given_peer_rejects_token_when_delegated_then_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"code": "UNAUTHORIZED", "message": "Unauthorized"}})),
        )
        .mount(&server)
        .await;

    let token = JwtCodec::new(SECRET, 3600).mint(42, "alice@example.com").unwrap();
    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    assert!(matches!(
        verifier.verify(&token).await,
        Err(AuthError::Delegation { .. })
    ));
}

#[tokio::test]
async fn given_peer_error_when_delegated_then_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let token = JwtCodec::new(SECRET, 3600).mint(42, "alice@example.com").unwrap();
    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    assert!(verifier.verify(&token).await.is_err());
}

#[tokio::test]
async fn given_malformed_peer_body_when_delegated_then_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let token = JwtCodec::new(SECRET, 3600).mint(42, "alice@example.com").unwrap();
    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    assert!(verifier.verify(&token).await.is_err());
}

#[tokio::test]
async fn given_empty_peer_body_when_delegated_then_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let token = JwtCodec::new(SECRET, 3600).mint(42, "alice@example.com").unwrap();
    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    assert!(verifier.verify(&token).await.is_err());
}

#[tokio::test]
async fn given_stalled_peer_when_delegated_then_denied_after_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": {"id": 42, "email": "alice@example.com"}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let token = JwtCodec::new(SECRET, 3600).mint(42, "alice@example.com").unwrap();
    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    // A stalled identity service is a denial, never an indefinite block.
    assert!(matches!(
        verifier.verify(&token).await,
        Err(AuthError::Delegation { .. })
    ));
}

#[tokio::test]
async fn given_unreachable_peer_when_delegated_then_denied() {
    // Reserved port with nothing listening.
    let verifier = DelegatedVerifier::new("http://127.0.0.1:1", PEER_TIMEOUT).unwrap();
    let token = JwtCodec::new(SECRET, 3600).mint(42, "alice@example.com").unwrap();

    assert!(verifier.verify(&token).await.is_err());
}

#[tokio::test]
async fn given_structurally_invalid_token_when_delegated_then_no_peer_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    assert!(verifier.verify("definitely-not-a-jwt").await.is_err());
}

#[tokio::test]
async fn given_token_from_other_secret_when_peer_vouches_then_accepted() {
    // The delegated path holds no signing secret: the peer's answer is the
    // trust decision, even for a token this service could never verify
    // itself. Cross-service secret drift therefore cannot break delegation.
    let server = MockServer::start().await;
    mount_me_success(&server, 42).await;

    let token = JwtCodec::new(b"a-completely-different-secret-key", 3600)
        .mint(42, "alice@example.com")
        .unwrap();
    let verifier = DelegatedVerifier::new(&server.uri(), PEER_TIMEOUT).unwrap();

    let identity = verifier.verify(&token).await.unwrap();
    assert_eq!(identity.id, 42);
}
