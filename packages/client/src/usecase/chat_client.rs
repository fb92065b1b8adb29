//! UseCase: チャットの送受信
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ChatClient::submit_message() / test_memory() / change_persona() / change_mode()
//! - PendingExchange::send_to_api() と pending フラグの解放
//!
//! ### なぜこのテストが必要か
//! - 同時に1件しかリクエストを送らないことを保証する
//! - 成功・失敗・キャンセルのいずれでも pending が解放されることを保証する
//! - セッション ID が一度しか設定されないことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信と返信、セッション ID の設定
//! - 異常系：Chat API の失敗
//! - エッジケース：空入力、pending 中の再送信、実行前の破棄、実行中のキャンセル

use std::sync::Arc;

use colloquy_shared::time::Clock;
use tokio::sync::watch;

use crate::domain::{
    ChatGateway, ChatRequest, ConversationState, Mode, Persona, RejectReason, Timestamp,
};

/// Result of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Preconditions failed; nothing was sent and the state is unchanged
    Rejected(RejectReason),
    /// The assistant reply was appended
    Replied,
    /// The Chat API call failed; the error text is set
    Failed,
}

/// Chat client use case
///
/// The conversation state lives in a `watch` channel: this struct is its
/// only writer, and every mutation notifies subscribers.
pub struct ChatClient {
    /// 会話状態（唯一の所有者）
    state: Arc<watch::Sender<ConversationState>>,
    /// ChatGateway（Chat API の抽象化）
    gateway: Arc<dyn ChatGateway>,
    /// Clock（メッセージ時刻の取得）
    clock: Arc<dyn Clock>,
}

impl ChatClient {
    /// 新しい ChatClient を作成
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        clock: Arc<dyn Clock>,
        persona: Persona,
        mode: Mode,
    ) -> Self {
        let (state, _) = watch::channel(ConversationState::new(persona, mode));
        Self {
            state: Arc::new(state),
            gateway,
            clock,
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    /// Send user-entered text and wait for the outcome
    pub async fn submit_message(&self, text: &str) -> ExchangeOutcome {
        match self.begin_message(text) {
            Ok(exchange) => exchange.send_to_api().await,
            Err(reason) => ExchangeOutcome::Rejected(reason),
        }
    }

    /// Ask the backend what was discussed so far and wait for the outcome
    pub async fn test_memory(&self) -> ExchangeOutcome {
        match self.begin_memory_test() {
            Ok(exchange) => exchange.send_to_api().await,
            Err(reason) => ExchangeOutcome::Rejected(reason),
        }
    }

    /// Synchronous half of `submit_message`.
    ///
    /// The user message is in the history and the pending flag is held when
    /// this returns `Ok`, before any network I/O.
    pub fn begin_message(&self, text: &str) -> Result<PendingExchange, RejectReason> {
        self.begin(|state, now| state.begin_exchange(text, now))
    }

    /// Synchronous half of `test_memory`
    pub fn begin_memory_test(&self) -> Result<PendingExchange, RejectReason> {
        self.begin(|state, now| state.begin_memory_test(now))
    }

    /// Change the persona used by the next request
    pub fn change_persona(&self, persona: Persona) {
        self.state.send_if_modified(|state| state.set_persona(persona));
    }

    /// Change the mode used by the next request
    pub fn change_mode(&self, mode: Mode) {
        self.state.send_if_modified(|state| state.set_mode(mode));
    }

    fn begin(
        &self,
        start: impl FnOnce(&mut ConversationState, Timestamp) -> Result<ChatRequest, RejectReason>,
    ) -> Result<PendingExchange, RejectReason> {
        let now = Timestamp::new(self.clock.now_millis());

        // send_if_modified always runs the closure exactly once
        let mut started = Err(RejectReason::RequestPending);
        self.state.send_if_modified(|state| {
            started = start(state, now);
            started.is_ok()
        });

        let request = started.inspect_err(|reason| {
            tracing::debug!("Submission rejected: {:?}", reason);
        })?;

        Ok(PendingExchange {
            request,
            gateway: Arc::clone(&self.gateway),
            clock: Arc::clone(&self.clock),
            guard: PendingGuard {
                state: Arc::clone(&self.state),
                released: false,
            },
        })
    }
}

/// An exchange that holds the pending flag and has not been sent yet
///
/// Dropping it (or the future of `send_to_api`) at any point releases the
/// pending flag.
#[must_use = "the pending flag stays held until the exchange is sent or dropped"]
pub struct PendingExchange {
    request: ChatRequest,
    gateway: Arc<dyn ChatGateway>,
    clock: Arc<dyn Clock>,
    guard: PendingGuard,
}

impl PendingExchange {
    /// Request captured at submission time
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }

    /// Send the captured request and apply the outcome to the state
    pub async fn send_to_api(self) -> ExchangeOutcome {
        let Self {
            request,
            gateway,
            clock,
            guard,
        } = self;

        match gateway.chat(request).await {
            Ok(reply) => {
                let now = Timestamp::new(clock.now_millis());
                guard.complete(|state| state.record_reply(reply, now));
                ExchangeOutcome::Replied
            }
            Err(e) => {
                tracing::warn!("Chat API call failed: {}", e);
                guard.complete(|state| state.record_failure());
                ExchangeOutcome::Failed
            }
        }
    }
}

/// Scope guard for the pending flag
struct PendingGuard {
    state: Arc<watch::Sender<ConversationState>>,
    released: bool,
}

impl PendingGuard {
    /// Apply the outcome and release the flag in one notification
    fn complete(mut self, apply: impl FnOnce(&mut ConversationState)) {
        self.state.send_modify(|state| {
            apply(state);
            state.release_pending();
        });
        self.released = true;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        tracing::debug!("Exchange dropped before completion, releasing pending flag");
        self.state.send_if_modified(|state| state.release_pending());
    }
}
