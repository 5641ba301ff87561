use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use shophub_api::{
    dto::auth::Claims,
    error::AppError,
    services::auth_service::{decode_token, issue_token},
};
use uuid::Uuid;

const SECRET: &str = "test-secret";

#[test]
fn issued_token_round_trips() {
    let user_id = Uuid::new_v4();
    let token = issue_token(user_id, "alice", SECRET).expect("token");

    let claims = decode_token(&token, SECRET).expect("claims");
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.username, "alice");

    // Expiry sits ten hours out.
    let now = Utc::now().timestamp() as usize;
    assert!(claims.exp > now + 9 * 3600);
    assert!(claims.exp <= now + 10 * 3600 + 60);
}

#[test]
fn expired_token_is_unauthenticated() {
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "bob".into(),
        exp: (Utc::now().timestamp() - 3600) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token");

    let err = decode_token(&token, SECRET).unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
}

#[test]
fn wrong_secret_is_unauthenticated() {
    let token = issue_token(Uuid::new_v4(), "carol", SECRET).expect("token");

    let err = decode_token(&token, "other-secret").unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
}

#[test]
fn garbage_token_is_unauthenticated() {
    let err = decode_token("not.a.token", SECRET).unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
}
