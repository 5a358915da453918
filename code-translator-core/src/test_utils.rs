//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use code_translator_engine::{EngineError, TranslateRequest, TranslateResponse};
use tokio::sync::{RwLock, Semaphore};

use crate::error::{CoreError, CoreResult};
use crate::services::{HistoryRepository, ServiceContext, SessionContext, TranslationOrchestrator};
use crate::traits::{ClipboardWriter, HistoryStore, Notifier, TranslationEngine};
use crate::types::{Identity, NewTranslation, Notification, TranslationRecord};

// ===== Gate =====

/// Holds a gated call until [`release`](Gate::release) is called.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    fn new() -> Self {
        Self(Arc::new(Semaphore::new(0)))
    }

    pub fn release(&self) {
        self.0.add_permits(1);
    }

    async fn wait(&self) {
        let _permit = self.0.acquire().await;
    }
}

// ===== MockTranslationEngine =====

pub struct MockTranslationEngine {
    response: Mutex<Result<String, EngineError>>,
    requests: Mutex<Vec<TranslateRequest>>,
    calls: AtomicUsize,
    next_gate: Mutex<Option<Gate>>,
}

impl MockTranslationEngine {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(Ok(String::new())),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            next_gate: Mutex::new(None),
        }
    }

    /// Answer every following call with `response`.
    pub fn respond_with(&self, response: Result<String, EngineError>) {
        *self.response.lock().unwrap() = response;
    }

    /// Block the next call until the returned gate is released.
    pub fn gate_next_call(&self) -> Gate {
        let gate = Gate::new();
        *self.next_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<TranslateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationEngine for MockTranslationEngine {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> code_translator_engine::Result<TranslateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        let response = self.response.lock().unwrap().clone();
        let gate = self.next_gate.lock().unwrap().take();

        if let Some(gate) = gate {
            gate.wait().await;
        }

        response.map(|translated_code| TranslateResponse { translated_code })
    }
}

// ===== MockHistoryStore =====

pub struct MockHistoryStore {
    records: RwLock<Vec<TranslationRecord>>,
    creates: RwLock<Vec<(String, NewTranslation)>>,
    /// 如果 Some，list 时返回此错误
    list_error: RwLock<Option<String>>,
    /// 如果 Some，insert 时返回此错误
    insert_error: RwLock<Option<String>>,
    list_calls: AtomicUsize,
    next_list_gate: RwLock<Option<Gate>>,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            creates: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            insert_error: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
            next_list_gate: RwLock::new(None),
        }
    }

    pub async fn seed(&self, record: TranslationRecord) {
        self.records.write().await.push(record);
    }

    pub async fn set_list_error(&self, err: Option<String>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_insert_error(&self, err: Option<String>) {
        *self.insert_error.write().await = err;
    }

    /// Every `insert` call, including failed ones.
    pub async fn create_calls(&self) -> Vec<(String, NewTranslation)> {
        self.creates.read().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Block the next `list_by_owner` call until the gate is released.
    pub async fn gate_next_list(&self) -> Gate {
        let gate = Gate::new();
        *self.next_list_gate.write().await = Some(gate.clone());
        gate
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn list_by_owner(&self, owner_id: &str) -> CoreResult<Vec<TranslationRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.next_list_gate.write().await.take();
        if let Some(gate) = gate {
            gate.wait().await;
        }

        if let Some(ref msg) = *self.list_error.read().await {
            return Err(CoreError::Storage(msg.clone()));
        }
        let mut records: Vec<_> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(TranslationRecord::listing_order);
        Ok(records)
    }

    async fn insert(
        &self,
        owner_id: &str,
        record: &NewTranslation,
    ) -> CoreResult<TranslationRecord> {
        self.creates
            .write()
            .await
            .push((owner_id.to_string(), record.clone()));
        if let Some(ref msg) = *self.insert_error.read().await {
            return Err(CoreError::Storage(msg.clone()));
        }
        let created = TranslationRecord::create(owner_id, record.clone());
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> CoreResult<()> {
        let mut records = self.records.write().await;
        let Some(index) = records
            .iter()
            .position(|r| r.id == id && r.owner_id == owner_id)
        else {
            return Err(CoreError::RecordNotFound(id.to_string()));
        };
        records.remove(index);
        Ok(())
    }
}

// ===== RecordingNotifier =====

pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().unwrap())
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

// ===== MockClipboard =====

pub struct MockClipboard {
    contents: Mutex<Option<String>>,
    denied: AtomicBool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            contents: Mutex::new(None),
            denied: AtomicBool::new(false),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    /// Simulate the platform refusing clipboard access.
    pub fn set_denied(&self, denied: bool) {
        self.denied.store(denied, Ordering::SeqCst);
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&self, text: &str) -> CoreResult<()> {
        if self.denied.load(Ordering::SeqCst) {
            return Err(CoreError::Clipboard("permission denied".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 构造一条测试用记录，`secs` 为创建时间（Unix 秒）
pub fn seed_record(id: &str, owner_id: &str, secs: i64) -> TranslationRecord {
    TranslationRecord {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        source_language: "python".to_string(),
        target_language: "javascript".to_string(),
        input_code: format!("print('{id}')"),
        output_code: format!("console.log('{id}')"),
        created_at: Utc.timestamp_opt(secs, 0).unwrap(),
    }
}

pub fn new_translation(source: &str, target: &str, input: &str, output: &str) -> NewTranslation {
    NewTranslation {
        source_language: source.to_string(),
        target_language: target.to_string(),
        input_code: input.to_string(),
        output_code: output.to_string(),
    }
}

/// 创建测试用 `ServiceContext`（已以 `test-user` 登录）
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockTranslationEngine>,
    Arc<MockHistoryStore>,
    Arc<RecordingNotifier>,
    Arc<MockClipboard>,
) {
    let engine = Arc::new(MockTranslationEngine::new());
    let store = Arc::new(MockHistoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let clipboard = Arc::new(MockClipboard::new());
    let session = SessionContext::signed_in(Identity::new("test-user"));

    let ctx = Arc::new(ServiceContext::new(
        engine.clone(),
        store.clone(),
        notifier.clone(),
        clipboard.clone(),
        session,
    ));

    (ctx, engine, store, notifier, clipboard)
}

pub struct TestOrchestrator {
    pub orchestrator: Arc<TranslationOrchestrator>,
    pub history: Arc<HistoryRepository>,
    pub ctx: Arc<ServiceContext>,
    pub engine: Arc<MockTranslationEngine>,
    pub store: Arc<MockHistoryStore>,
    pub notifier: Arc<RecordingNotifier>,
}

/// 创建测试用 `TranslationOrchestrator` 及其 mock 依赖
pub fn create_test_orchestrator() -> TestOrchestrator {
    let (ctx, engine, store, notifier, _) = create_test_context();
    let history = Arc::new(ctx.history_repository());
    let orchestrator = Arc::new(TranslationOrchestrator::new(ctx.clone(), history.clone()));
    TestOrchestrator {
        orchestrator,
        history,
        ctx,
        engine,
        store,
        notifier,
    }
}
