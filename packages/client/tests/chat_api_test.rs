//! Integration tests for the HTTP gateway and the chat client against an
//! in-process fake of the Chat API.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use colloquy_client::{
    config::ClientConfig,
    domain::{ChatApiError, ChatGateway, ChatRequest, Mode, Persona, Role, SessionId},
    infrastructure::{dto::http::ChatResponseDto, gateway::HttpChatGateway},
    usecase::{ChatClient, ExchangeOutcome},
};
use colloquy_shared::time::SystemClock;
use tokio::task::JoinHandle;

/// How the fake Chat API answers
#[derive(Clone, Copy)]
enum Behavior {
    /// Echo the question and hand out a new session id on every call
    Echo,
    /// Answer with HTTP 500
    Fail,
    /// Answer 200 with a body that is not JSON
    Malformed,
    /// Wait before answering
    Slow(Duration),
}

struct FakeState {
    behavior: Behavior,
    received: Mutex<Vec<serde_json::Value>>,
}

/// Helper struct to manage the fake Chat API lifecycle
struct FakeChatApi {
    addr: SocketAddr,
    state: Arc<FakeState>,
    handle: JoinHandle<()>,
}

impl FakeChatApi {
    /// Start a fake Chat API on an ephemeral port
    async fn start(behavior: Behavior) -> Self {
        let state = Arc::new(FakeState {
            behavior,
            received: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/api/chat", post(chat_handler))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake Chat API");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeChatApi {
            addr,
            state,
            handle,
        }
    }

    fn config(&self) -> ClientConfig {
        ClientConfig::new(
            &format!("http://{}", self.addr),
            Persona::Augustine,
            Mode::Conversation,
            None,
        )
        .unwrap()
    }

    fn gateway(&self) -> HttpChatGateway {
        HttpChatGateway::new(self.config().chat_endpoint(), None).unwrap()
    }

    /// Request bodies received so far
    fn received(&self) -> Vec<serde_json::Value> {
        self.state.received.lock().unwrap().clone()
    }
}

impl Drop for FakeChatApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn chat_handler(
    State(state): State<Arc<FakeState>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let call_number = {
        let mut received = state.received.lock().unwrap();
        received.push(body.clone());
        received.len()
    };

    match state.behavior {
        Behavior::Echo => Json(ChatResponseDto {
            response: format!(
                "{} heard: {}",
                body["persona"].as_str().unwrap_or_default(),
                body["question"].as_str().unwrap_or_default()
            ),
            session_id: Some(format!("session-{}", call_number)),
        })
        .into_response(),
        Behavior::Fail => (StatusCode::INTERNAL_SERVER_ERROR, "model unavailable").into_response(),
        Behavior::Malformed => (StatusCode::OK, "not json").into_response(),
        Behavior::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(ChatResponseDto {
                response: "late".to_string(),
                session_id: None,
            })
            .into_response()
        }
    }
}

fn request(question: &str) -> ChatRequest {
    ChatRequest {
        question: question.to_string(),
        mode: Mode::Conversation,
        persona: Persona::Augustine,
        session_id: None,
    }
}

fn create_client(api: &FakeChatApi) -> ChatClient {
    ChatClient::new(
        Arc::new(api.gateway()),
        Arc::new(SystemClock),
        Persona::Augustine,
        Mode::Conversation,
    )
}

#[tokio::test]
async fn test_gateway_posts_expected_body() {
    // テスト項目: Chat API に期待どおりの JSON ボディが送信され、返信が変換される
    // given (前提条件):
    let api = FakeChatApi::start(Behavior::Echo).await;
    let gateway = api.gateway();

    // when (操作):
    let reply = gateway.chat(request("Hello")).await.unwrap();

    // then (期待する結果):
    assert_eq!(
        gateway.endpoint().as_str(),
        format!("http://{}/api/chat", api.addr)
    );
    assert_eq!(reply.response, "Augustine heard: Hello");
    assert_eq!(reply.session_id.unwrap().as_str(), "session-1");
    assert_eq!(
        api.received(),
        vec![serde_json::json!({
            "question": "Hello",
            "mode": "conversation",
            "persona": "Augustine",
            "session_id": null
        })]
    );
}

#[tokio::test]
async fn test_gateway_maps_error_status() {
    // テスト項目: 2xx 以外のステータスは Status エラーになる
    // given (前提条件):
    let api = FakeChatApi::start(Behavior::Fail).await;
    let gateway = api.gateway();

    // when (操作):
    let result = gateway.chat(request("Hello")).await;

    // then (期待する結果):
    match result {
        Err(ChatApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "model unavailable");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_gateway_maps_malformed_body() {
    // テスト項目: JSON でないレスポンスは Decode エラーになる
    // given (前提条件):
    let api = FakeChatApi::start(Behavior::Malformed).await;
    let gateway = api.gateway();

    // when (操作):
    let result = gateway.chat(request("Hello")).await;

    // then (期待する結果):
    assert!(matches!(result, Err(ChatApiError::Decode(_))));
}

#[tokio::test]
async fn test_gateway_maps_connection_refused() {
    // テスト項目: 接続できない場合は Transport エラーになる
    // given (前提条件):
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config =
        ClientConfig::new(&format!("http://{}", addr), Persona::Augustine, Mode::Conversation, None)
            .unwrap();
    let gateway = HttpChatGateway::new(config.chat_endpoint(), None).unwrap();

    // when (操作):
    let result = gateway.chat(request("Hello")).await;

    // then (期待する結果):
    assert!(matches!(result, Err(ChatApiError::Transport(_))));
}

#[tokio::test]
async fn test_gateway_timeout() {
    // テスト項目: タイムアウトを超えたリクエストは Transport エラーになる
    // given (前提条件):
    let api = FakeChatApi::start(Behavior::Slow(Duration::from_secs(2))).await;
    let gateway =
        HttpChatGateway::new(api.config().chat_endpoint(), Some(Duration::from_millis(200)))
            .unwrap();

    // when (操作):
    let result = gateway.chat(request("Hello")).await;

    // then (期待する結果):
    assert!(matches!(result, Err(ChatApiError::Transport(_))));
}

#[tokio::test]
async fn test_client_conversation_keeps_first_session() {
    // テスト項目: 会話全体でメッセージが交互に並び、最初のセッション ID が維持・送信される
    // given (前提条件):
    let api = FakeChatApi::start(Behavior::Echo).await;
    let client = create_client(&api);

    // when (操作):
    let first = client.submit_message("Hello").await;
    client.change_persona(Persona::Freud);
    client.change_mode(Mode::Reference);
    let second = client.submit_message("  And dreams?  ").await;
    let memory = client.test_memory().await;

    // then (期待する結果):
    assert_eq!(first, ExchangeOutcome::Replied);
    assert_eq!(second, ExchangeOutcome::Replied);
    assert_eq!(memory, ExchangeOutcome::Replied);

    let state = client.snapshot();
    assert_eq!(state.messages().len(), 6);
    for (i, message) in state.messages().iter().enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(message.role(), expected);
    }
    assert_eq!(state.messages()[3].text(), "Freud heard: And dreams?");
    assert_eq!(
        state.session_id(),
        Some(&SessionId::new("session-1".to_string()).unwrap())
    );

    let received = api.received();
    assert_eq!(received.len(), 3);
    assert_eq!(received[0]["session_id"], serde_json::Value::Null);
    assert_eq!(received[1]["session_id"], "session-1");
    assert_eq!(received[1]["persona"], "Freud");
    assert_eq!(received[1]["mode"], "reference");
    assert_eq!(received[1]["question"], "And dreams?");
    assert_eq!(received[2]["session_id"], "session-1");
    assert_eq!(
        received[2]["question"],
        "What did we discuss in our previous messages?"
    );
}

#[tokio::test]
async fn test_client_failure_is_soft() {
    // テスト項目: API 失敗時はユーザーメッセージのみ残り、エラー表示後も送信を続けられる
    // given (前提条件):
    let api = FakeChatApi::start(Behavior::Fail).await;
    let client = create_client(&api);

    // when (操作):
    let outcome = client.submit_message("Hello").await;

    // then (期待する結果):
    assert_eq!(outcome, ExchangeOutcome::Failed);
    let state = client.snapshot();
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.last_error(), Some("Error fetching response"));
    assert!(!state.is_pending());
    assert_eq!(state.session_id(), None);

    let retry = client.submit_message("Hello again").await;
    assert_eq!(retry, ExchangeOutcome::Failed);
    assert_eq!(client.snapshot().messages().len(), 2);
}
