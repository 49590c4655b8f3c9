//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{TestServer, assert_json, assert_status, check_test_env, fixtures::*};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_request_otp() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RequestOtpRequest {
        email: unique_email(),
    };

    let response = server
        .post("/api/v1/auth/otp/request", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_verify_otp_creates_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    let auth = server.sign_in(&email).await.expect("Sign-in failed");

    assert_eq!(auth.user.email, email);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.user.onboarded);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_verify_otp_wrong_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();
    server.seed_otp(&email).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/otp/verify",
            &VerifyOtpRequest {
                email,
                code: "000000".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_verify_otp_same_email_returns_same_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    let first = server.sign_in(&email).await.unwrap();
    let second = server.sign_in(&email).await.unwrap();

    assert_eq!(first.user.id, second.user.id);
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token.clone(),
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());

    // Rotation revokes the old refresh token
    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/auth/logout",
            &auth.access_token,
            &LogoutRequest {
                refresh_token: Some(auth.refresh_token.clone()),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unauthenticated_request_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Profile Tests
// ============================================================================

#[tokio::test]
async fn test_onboarding() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = server.sign_in(&unique_email()).await.unwrap();

    let request = OnboardingRequest::unique();
    let response = server
        .post_auth("/api/v1/users/@me/onboarding", &auth.access_token, &request)
        .await
        .unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(user.onboarded);
    assert_eq!(user.username, request.username);
    assert_eq!(user.college.as_deref(), Some(request.college.as_str()));
    assert_eq!(user.year.as_deref(), Some("2nd"));
}

#[tokio::test]
async fn test_onboarding_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = server.sign_in(&unique_email()).await.unwrap();
    let second = server.sign_in(&unique_email()).await.unwrap();

    let request = OnboardingRequest::unique();
    let response = server
        .post_auth("/api/v1/users/@me/onboarding", &first.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/users/@me/onboarding",
            &second.access_token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = server.sign_in(&unique_email()).await.unwrap();

    let request = UpdateProfileRequest {
        bio: Some("Photography and distributed systems".to_string()),
        interests: Some(vec!["photography".to_string(), "rust".to_string()]),
        ..Default::default()
    };
    let response = server
        .patch_auth("/api/v1/users/@me", &auth.access_token, &request)
        .await
        .unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        user.bio.as_deref(),
        Some("Photography and distributed systems")
    );
    assert_eq!(user.interests.len(), 2);
    // Untouched fields keep their values
    assert_eq!(user.name, auth.user.name);
}

#[tokio::test]
async fn test_discover_excludes_viewer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let viewer = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/discover", &viewer.access_token)
        .await
        .unwrap();
    let results: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(
        results
            .iter()
            .all(|entry| entry["id"].as_str() != Some(viewer.user.id.as_str()))
    );
}

#[tokio::test]
async fn test_get_user_profile_with_relationship() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let viewer = server.sign_in(&unique_email()).await.unwrap();
    let subject = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}", subject.user.id),
            &viewer.access_token,
        )
        .await
        .unwrap();
    let profile: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile["id"].as_str(), Some(subject.user.id.as_str()));
    assert_eq!(profile["relationship"].as_str(), Some("none"));
    // Public profile must not leak the email
    assert!(profile.get("email").is_none());
}

// ============================================================================
// Connection Tests
// ============================================================================

#[tokio::test]
async fn test_connection_request_and_accept() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/connections",
            &alice.access_token,
            &CreateConnectionRequest {
                user_id: bob.user.id.clone(),
            },
        )
        .await
        .unwrap();
    let connection: ConnectionResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(connection.status, "pending");

    // Both sides see a symmetric status
    let response = server
        .get_auth(
            &format!("/api/v1/connections/status/{}", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let status: RelationshipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.relationship, "pending_sent");

    let response = server
        .get_auth(
            &format!("/api/v1/connections/status/{}", alice.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let status: RelationshipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.relationship, "pending_received");

    // Receiver accepts
    let response = server
        .post_auth_empty(
            &format!("/api/v1/connections/{}/accept", connection.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let accepted: ConnectionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted.status, "accepted");

    let response = server
        .get_auth(
            &format!("/api/v1/connections/status/{}", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let status: RelationshipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.relationship, "connected");
}

#[tokio::test]
async fn test_connection_reject() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/connections",
            &alice.access_token,
            &CreateConnectionRequest {
                user_id: bob.user.id.clone(),
            },
        )
        .await
        .unwrap();
    let connection: ConnectionResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Only the receiver may resolve the request
    let response = server
        .post_auth_empty(
            &format!("/api/v1/connections/{}/reject", connection.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/connections/{}/reject", connection.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let rejected: ConnectionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rejected.status, "rejected");

    // A resolved edge cannot be resolved again
    let response = server
        .post_auth_empty(
            &format!("/api/v1/connections/{}/accept", connection.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_connection_rejected_both_directions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/connections",
            &alice.access_token,
            &CreateConnectionRequest {
                user_id: bob.user.id.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Reverse direction is the same pair
    let response = server
        .post_auth(
            "/api/v1/connections",
            &bob.access_token,
            &CreateConnectionRequest {
                user_id: alice.user.id.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_self_connection_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/connections",
            &alice.access_token,
            &CreateConnectionRequest {
                user_id: alice.user.id.clone(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Conversation Tests
// ============================================================================

#[tokio::test]
async fn test_send_and_read_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    for content in ["hey", "are you going to the fest?", "lmk"] {
        let response = server
            .post_auth(
                &format!("/api/v1/conversations/{}", bob.user.id),
                &alice.access_token,
                &SendMessageRequest {
                    content: content.to_string(),
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // Thread is oldest-first
    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}", alice.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let thread: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread.len(), 3);
    assert_eq!(thread[0].content, "hey");
    assert_eq!(thread[2].content, "lmk");

    // Unread badge counts only messages addressed to bob
    let response = server
        .get_auth("/api/v1/conversations/unread-count", &bob.access_token)
        .await
        .unwrap();
    let unread: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread_count, 3);

    let response = server
        .post_auth_empty(
            &format!("/api/v1/conversations/{}/read", alice.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let marked: MarkReadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.marked, 3);

    let response = server
        .get_auth("/api/v1/conversations/unread-count", &bob.access_token)
        .await
        .unwrap();
    let unread: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unread.unread_count, 0);
}

#[tokio::test]
async fn test_conversation_list_aggregates_per_counterpart() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();
    let carol = server.sign_in(&unique_email()).await.unwrap();

    for counterpart in [&bob, &carol] {
        for content in ["first", "second"] {
            server
                .post_auth(
                    &format!("/api/v1/conversations/{}", counterpart.user.id),
                    &alice.access_token,
                    &SendMessageRequest {
                        content: content.to_string(),
                    },
                )
                .await
                .unwrap();
        }
    }

    let response = server
        .get_auth("/api/v1/conversations", &alice.access_token)
        .await
        .unwrap();
    let conversations: Vec<ConversationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    // One entry per counterpart, carrying the latest message
    assert_eq!(conversations.len(), 2);
    for conversation in &conversations {
        assert_eq!(conversation.last_message.content, "second");
        // Messages the viewer sent are not unread for them
        assert_eq!(conversation.unread_count, 0);
    }
}

#[tokio::test]
async fn test_self_message_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}", alice.user.id),
            &alice.access_token,
            &SendMessageRequest {
                content: "talking to myself".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_share_post_into_conversation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/conversations/{}/share", bob.user.id),
            &alice.access_token,
            &SharePostRequest {
                photo_id: photo.id.clone(),
            },
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let shared = message.shared_post.expect("shared post payload missing");
    assert_eq!(shared.post_id, photo.id);
    assert_eq!(shared.username, alice.user.username);
}

// ============================================================================
// Photo Feed Tests
// ============================================================================

#[tokio::test]
async fn test_create_photo_and_feed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(photo.author.id, alice.user.id);
    assert_eq!(photo.like_count, 0);
    assert!(!photo.liked_by_me);

    let response = server
        .get_auth("/api/v1/photos?limit=50", &alice.access_token)
        .await
        .unwrap();
    let feed: Vec<PhotoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.iter().any(|entry| entry.id == photo.id));
}

#[tokio::test]
async fn test_create_photo_caption_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_caption("text-only post"),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(photo.image_url.is_none());
}

#[tokio::test]
async fn test_create_empty_photo_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest {
                image_url: None,
                caption: None,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_like_and_unlike() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/photos/{}/like", photo.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let likes: LikeCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(likes.like_count, 1);
    assert!(likes.liked_by_me);

    // Repeating the like is idempotent: still one like, still liked
    let response = server
        .put_auth(
            &format!("/api/v1/photos/{}/like", photo.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let likes: LikeCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(likes.like_count, 1);
    assert!(likes.liked_by_me);

    let response = server
        .delete_auth(
            &format!("/api/v1/photos/{}/like", photo.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let likes: LikeCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(likes.like_count, 0);
    assert!(!likes.liked_by_me);

    // Removing a like that is already gone is a no-op too
    let response = server
        .delete_auth(
            &format!("/api/v1/photos/{}/like", photo.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let likes: LikeCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(likes.like_count, 0);
}

#[tokio::test]
async fn test_delete_photo_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/photos/{}", photo.id), &bob.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/photos/{}", photo.id), &alice.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_threading() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photo.id),
            &bob.access_token,
            &CreateCommentRequest::root("great shot"),
        )
        .await
        .unwrap();
    let root: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(root.parent_id.is_none());

    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photo.id),
            &alice.access_token,
            &CreateCommentRequest::reply("thanks!", &root.id),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some(root.id.as_str()));

    // A reply to a reply attaches to the thread root
    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photo.id),
            &bob.access_token,
            &CreateCommentRequest::reply("anytime", &reply.id),
        )
        .await
        .unwrap();
    let nested: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(nested.parent_id.as_deref(), Some(root.id.as_str()));

    let response = server
        .get_auth(
            &format!("/api/v1/photos/{}/comments", photo.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let threads: Vec<CommentThreadResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].id, root.id);
    assert_eq!(threads[0].replies.len(), 2);
}

#[tokio::test]
async fn test_comment_parent_must_match_photo() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();

    let mut photos = Vec::new();
    for _ in 0..2 {
        let response = server
            .post_auth(
                "/api/v1/photos",
                &alice.access_token,
                &CreatePhotoRequest::with_image(),
            )
            .await
            .unwrap();
        let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        photos.push(photo);
    }

    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photos[0].id),
            &alice.access_token,
            &CreateCommentRequest::root("on the first photo"),
        )
        .await
        .unwrap();
    let root: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photos[1].id),
            &alice.access_token,
            &CreateCommentRequest::reply("wrong photo", &root.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mention_fans_out_to_dm() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    // Mentions resolve against usernames, so both users onboard first
    let alice_profile = OnboardingRequest::unique();
    server
        .post_auth(
            "/api/v1/users/@me/onboarding",
            &alice.access_token,
            &alice_profile,
        )
        .await
        .unwrap();
    let bob_profile = OnboardingRequest::unique();
    server
        .post_auth(
            "/api/v1/users/@me/onboarding",
            &bob.access_token,
            &bob_profile,
        )
        .await
        .unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photo.id),
            &alice.access_token,
            &CreateCommentRequest::root(&format!("@{} look at this", bob_profile.username)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The mention lands as a direct message from the commenter
    let response = server
        .get_auth(
            &format!("/api/v1/conversations/{}", alice.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    let thread: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(thread.len(), 1);
    assert!(thread[0].content.contains("mentioned you in a comment"));
    assert!(
        thread[0]
            .content
            .contains(&format!("@{}", alice_profile.username))
    );
}

#[tokio::test]
async fn test_delete_comment_requires_authorship() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.sign_in(&unique_email()).await.unwrap();
    let bob = server.sign_in(&unique_email()).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/photos",
            &alice.access_token,
            &CreatePhotoRequest::with_image(),
        )
        .await
        .unwrap();
    let photo: PhotoResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/photos/{}/comments", photo.id),
            &bob.access_token,
            &CreateCommentRequest::root("drive-by comment"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();
}
