//! RoleConsole workflow tests
//!
//! Tests for:
//! - Client-side validation before any request
//! - Create/update success and failure paths
//! - Confirmation-gated delete with truthful outcome reporting
//! - Surface state transitions

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ac_client::{CreatedResponse, Error, Result, RoleApi, RoleDraft, RoleItem, RoleList, RoleQuery};
use ac_console::{
    ConfirmGate, ConsoleState, EnglishCatalog, Notice, Notifier, RoleConsole, TableHandle,
};

#[derive(Debug, Clone, PartialEq)]
enum ApiCall {
    Create(RoleDraft),
    Read(RoleQuery),
    Update(RoleItem),
    Delete(Vec<RoleItem>),
}

#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    fail: AtomicBool,
}

impl RecordingApi {
    fn failing() -> Self {
        let api = Self::default();
        api.fail.store(true, Ordering::SeqCst);
        api
    }

    fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Server("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleApi for RecordingApi {
    async fn create_role(&self, draft: &RoleDraft) -> Result<CreatedResponse> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Create(draft.clone()));
        self.check()?;
        Ok(CreatedResponse {
            id: "01HZX".to_string(),
        })
    }

    async fn read_roles(&self, query: &RoleQuery) -> Result<RoleList> {
        self.calls.lock().unwrap().push(ApiCall::Read(query.clone()));
        self.check()?;
        Ok(RoleList {
            data: vec![RoleItem::new("1", "admin")],
            total: 1,
        })
    }

    async fn update_role(&self, item: &RoleItem) -> Result<RoleItem> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Update(item.clone()));
        self.check()?;
        Ok(item.clone())
    }

    async fn delete_roles(&self, items: &[RoleItem]) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Delete(items.to_vec()));
        self.check()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    dismissed: AtomicUsize,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    fn failures(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| matches!(n, Notice::Failure(_)))
            .count()
    }

    fn successes(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| matches!(n, Notice::Success(_)))
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn dismiss(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
    }
}

struct ScriptedGate {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedGate {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ConfirmGate for ScriptedGate {
    async fn confirm(&self, _title: &str, _body: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

#[derive(Default)]
struct RecordingTable {
    reloads: AtomicUsize,
    resets: AtomicUsize,
}

impl TableHandle for RecordingTable {
    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn reload_and_reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

struct Harness {
    api: Arc<RecordingApi>,
    notifier: Arc<RecordingNotifier>,
    gate: Arc<ScriptedGate>,
    table: Arc<RecordingTable>,
    console: RoleConsole,
}

fn harness(api: RecordingApi, confirm_answer: bool) -> Harness {
    let api = Arc::new(api);
    let notifier = Arc::new(RecordingNotifier::default());
    let gate = Arc::new(ScriptedGate::new(confirm_answer));
    let table = Arc::new(RecordingTable::default());

    let console = RoleConsole::new(
        api.clone(),
        notifier.clone(),
        gate.clone(),
        table.clone(),
        Arc::new(EnglishCatalog),
    );

    Harness {
        api,
        notifier,
        gate,
        table,
        console,
    }
}

#[tokio::test]
async fn test_empty_role_name_rejected_before_any_request() {
    let mut h = harness(RecordingApi::default(), true);

    h.console.open_create();
    let ok = h.console.submit_create(RoleDraft::new("  ")).await;

    assert!(!ok);
    assert!(h.api.calls().is_empty());
    assert_eq!(h.notifier.failures(), 1);
    assert_eq!(*h.console.state(), ConsoleState::Creating);
}

#[tokio::test]
async fn test_create_success_closes_modal_and_reloads() {
    let mut h = harness(RecordingApi::default(), true);

    h.console.open_create();
    let ok = h.console.submit_create(RoleDraft::new("auditor")).await;

    assert!(ok);
    assert_eq!(h.api.calls(), vec![ApiCall::Create(RoleDraft::new("auditor"))]);
    assert!(h.console.state().is_idle());
    assert_eq!(h.table.reloads.load(Ordering::SeqCst), 1);
    assert_eq!(h.notifier.failures(), 0);
    assert_eq!(h.notifier.successes(), 1);
}

#[tokio::test]
async fn test_create_failure_keeps_modal_open() {
    let mut h = harness(RecordingApi::failing(), true);

    h.console.open_create();
    let ok = h.console.submit_create(RoleDraft::new("auditor")).await;

    assert!(!ok);
    assert_eq!(*h.console.state(), ConsoleState::Creating);
    assert_eq!(h.table.reloads.load(Ordering::SeqCst), 0);
    assert_eq!(h.notifier.failures(), 1);
    assert_eq!(h.notifier.successes(), 0);
}

#[tokio::test]
async fn test_update_success_closes_modal_and_reloads() {
    let mut h = harness(RecordingApi::default(), true);

    let row = RoleItem::new("1", "admin");
    h.console.open_edit(row.clone());

    let mut edited = row;
    edited.role_name = "administrator".to_string();
    let ok = h.console.submit_update(edited.clone()).await;

    assert!(ok);
    assert_eq!(h.api.calls(), vec![ApiCall::Update(edited)]);
    assert!(h.console.state().is_idle());
    assert_eq!(h.table.reloads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_update_failure_keeps_modal_open() {
    let mut h = harness(RecordingApi::failing(), true);

    let row = RoleItem::new("1", "admin");
    h.console.open_edit(row.clone());
    let ok = h.console.submit_update(row.clone()).await;

    assert!(!ok);
    assert_eq!(*h.console.state(), ConsoleState::Editing { current: row });
    assert_eq!(h.table.reloads.load(Ordering::SeqCst), 0);
    assert_eq!(h.notifier.failures(), 1);
}

#[tokio::test]
async fn test_cancel_issues_no_delete_call() {
    let mut h = harness(RecordingApi::default(), false);

    h.console.set_selection(vec![RoleItem::new("1", "admin")]);
    let ok = h.console.delete_selected().await;

    assert!(!ok);
    assert_eq!(h.gate.asked.load(Ordering::SeqCst), 1);
    assert!(h.api.calls().is_empty());
    assert_eq!(h.console.selection().len(), 1);
}

#[tokio::test]
async fn test_confirm_deletes_selection_once() {
    let mut h = harness(RecordingApi::default(), true);

    let selection = vec![RoleItem::new("1", "admin"), RoleItem::new("2", "viewer")];
    h.console.set_selection(selection.clone());
    let ok = h.console.delete_selected().await;

    assert!(ok);
    assert_eq!(h.api.calls(), vec![ApiCall::Delete(selection)]);
    assert!(h.console.selection().is_empty());
    assert_eq!(h.table.resets.load(Ordering::SeqCst), 1);
    assert_eq!(h.notifier.successes(), 1);
}

#[tokio::test]
async fn test_delete_failure_reports_and_keeps_selection() {
    let mut h = harness(RecordingApi::failing(), true);

    h.console.set_selection(vec![RoleItem::new("1", "admin")]);
    let ok = h.console.delete_selected().await;

    assert!(!ok);
    assert_eq!(h.notifier.failures(), 1);
    assert_eq!(h.notifier.successes(), 0);
    assert_eq!(h.console.selection().len(), 1);
    assert_eq!(h.table.resets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_selection_skips_confirmation() {
    let mut h = harness(RecordingApi::default(), true);

    let ok = h.console.delete_selected().await;

    assert!(!ok);
    assert_eq!(h.gate.asked.load(Ordering::SeqCst), 0);
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_load_forwards_query_untouched() {
    let h = harness(RecordingApi::default(), true);

    let query = RoleQuery::default().with_page(2, 50).with_role_name("adm");
    let list = h.console.load(&query).await.unwrap();

    assert_eq!(list.total, 1);
    assert_eq!(h.api.calls(), vec![ApiCall::Read(query)]);
}

#[tokio::test]
async fn test_detail_row_discarded_on_close() {
    let mut h = harness(RecordingApi::default(), true);

    let row = RoleItem::new("1", "admin");
    h.console.open_detail(row.clone());
    assert_eq!(h.console.state().current_row(), Some(&row));

    h.console.close();
    assert!(h.console.state().is_idle());
    assert!(h.console.state().current_row().is_none());
}

#[tokio::test]
async fn test_opening_a_surface_replaces_the_previous_one() {
    let mut h = harness(RecordingApi::default(), true);

    h.console.open_create();
    h.console.open_detail(RoleItem::new("1", "admin"));

    assert!(matches!(
        h.console.state(),
        ConsoleState::ViewingDetail { .. }
    ));
}
