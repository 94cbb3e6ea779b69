//! Tests for the detail/edit dialog session.

use std::sync::Arc;

use crate::task::{
    adapters::{StaticConfirmation, memory::InMemoryKeyValueStorage},
    domain::{Task, TaskDomainError, TaskFields, TaskId, TaskStatus},
    ports::{ConfirmationRequest, Decision, confirmation::MockConfirmationGate},
    services::{
        DetailOutcome, DetailView, StoreConfig, TaskDetailSession, TaskStore, TaskStoreError,
    },
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestStore = TaskStore<InMemoryKeyValueStorage, DefaultClock>;

#[fixture]
fn store() -> Arc<TestStore> {
    Arc::new(TaskStore::new(
        Arc::new(InMemoryKeyValueStorage::new()),
        Arc::new(DefaultClock),
        StoreConfig::default(),
    ))
}

async fn seed(store: &TestStore) -> Task {
    store
        .create(TaskFields::new("A", "write draft", TaskStatus::Upcoming))
        .await
        .expect("create succeeds")
}

fn gate_answering(request: ConfirmationRequest, decision: Decision) -> MockConfirmationGate {
    let mut gate = MockConfirmationGate::new();
    gate.expect_confirm()
        .withf(move |asked| *asked == request)
        .times(1)
        .returning(move |_| decision);
    gate
}

#[rstest]
#[tokio::test]
async fn open_and_edit_seed_draft_from_store(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let mut session = TaskDetailSession::new(store, Arc::new(StaticConfirmation::approve_all()));

    assert_eq!(session.open(task.id()), Some(task.clone()));
    assert_eq!(session.view(), &DetailView::Viewing(task.id()));
    assert!(session.draft_mut().is_none());

    let draft = session.start_edit().expect("editing starts");
    assert_eq!(*draft, task.fields());
}

#[rstest]
#[tokio::test]
async fn opening_unknown_task_keeps_view(store: Arc<TestStore>) {
    let mut session = TaskDetailSession::new(store, Arc::new(StaticConfirmation::approve_all()));

    assert!(session.open(TaskId::new(99)).is_none());
    assert_eq!(session.view(), &DetailView::Closed);
    assert!(session.start_edit().is_none());
}

#[rstest]
#[tokio::test]
async fn confirmed_save_applies_draft_and_closes(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let gate = gate_answering(ConfirmationRequest::ApplyEdit(task.id()), Decision::Confirmed);
    let mut session = TaskDetailSession::new(Arc::clone(&store), Arc::new(gate));

    session.open(task.id());
    if let Some(draft) = session.start_edit() {
        draft.title = "A2".to_owned();
        draft.status = TaskStatus::Completed;
    }
    let outcome = session.save_edit().await.expect("save succeeds");

    let expected = TaskFields::new("A2", "write draft", TaskStatus::Completed);
    assert!(matches!(outcome, DetailOutcome::Applied(ref saved) if saved.fields() == expected));
    assert_eq!(session.view(), &DetailView::Closed);
    assert_eq!(store.get(task.id()).map(|t| t.fields()), Some(expected));
}

#[rstest]
#[tokio::test]
async fn declined_save_keeps_draft_open(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let gate = gate_answering(ConfirmationRequest::ApplyEdit(task.id()), Decision::Declined);
    let mut session = TaskDetailSession::new(Arc::clone(&store), Arc::new(gate));

    session.open(task.id());
    if let Some(draft) = session.start_edit() {
        draft.text = "changed".to_owned();
    }
    let outcome = session.save_edit().await.expect("decline is not an error");

    assert_eq!(outcome, DetailOutcome::Declined);
    assert_eq!(
        session.draft_mut().map(|draft| draft.text.clone()),
        Some("changed".to_owned())
    );
    assert_eq!(store.get(task.id()), Some(task));
}

#[rstest]
#[tokio::test]
async fn rejected_save_keeps_draft_open(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let mut session = TaskDetailSession::new(
        Arc::clone(&store),
        Arc::new(StaticConfirmation::approve_all()),
    );

    session.open(task.id());
    if let Some(draft) = session.start_edit() {
        draft.text.clear();
    }
    let result = session.save_edit().await;

    assert!(matches!(
        result,
        Err(TaskStoreError::Domain(TaskDomainError::EmptyText))
    ));
    assert!(matches!(session.view(), DetailView::Editing { .. }));
    assert_eq!(store.get(task.id()), Some(task));
}

#[rstest]
#[tokio::test]
async fn save_outside_edit_mode_does_nothing(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let mut session = TaskDetailSession::new(store, Arc::new(MockConfirmationGate::new()));

    session.open(task.id());
    let outcome = session.save_edit().await.expect("no-op");

    assert_eq!(outcome, DetailOutcome::NotApplicable);
    assert_eq!(session.view(), &DetailView::Viewing(task.id()));
}

#[rstest]
#[case(false)]
#[case(true)]
#[tokio::test]
async fn confirmed_delete_removes_and_closes(store: Arc<TestStore>, #[case] editing: bool) {
    let task = seed(&store).await;
    let gate = gate_answering(ConfirmationRequest::DeleteTask(task.id()), Decision::Confirmed);
    let mut session = TaskDetailSession::new(Arc::clone(&store), Arc::new(gate));

    session.open(task.id());
    if editing {
        session.start_edit();
    }
    let outcome = session.delete_open().await.expect("delete succeeds");

    assert_eq!(outcome, DetailOutcome::Applied(task.clone()));
    assert_eq!(session.view(), &DetailView::Closed);
    assert!(store.get(task.id()).is_none());
}

#[rstest]
#[tokio::test]
async fn declined_delete_keeps_task(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let mut session =
        TaskDetailSession::new(Arc::clone(&store), Arc::new(StaticConfirmation::decline_all()));

    session.open(task.id());
    let outcome = session.delete_open().await.expect("decline is not an error");

    assert_eq!(outcome, DetailOutcome::Declined);
    assert_eq!(session.view(), &DetailView::Viewing(task.id()));
    assert_eq!(store.get(task.id()), Some(task));
}

#[rstest]
#[tokio::test]
async fn delete_with_nothing_open_skips_confirmation(store: Arc<TestStore>) {
    let mut session = TaskDetailSession::new(store, Arc::new(MockConfirmationGate::new()));

    let outcome = session.delete_open().await.expect("no-op");

    assert_eq!(outcome, DetailOutcome::NotApplicable);
}

#[rstest]
#[tokio::test]
async fn sync_closes_view_when_task_removed_elsewhere(store: Arc<TestStore>) {
    let task = seed(&store).await;
    let mut session = TaskDetailSession::new(
        Arc::clone(&store),
        Arc::new(StaticConfirmation::approve_all()),
    );
    session.open(task.id());

    assert!(!session.sync());
    store.delete(task.id()).await.expect("delete succeeds");

    assert!(session.open_task().is_none());
    assert!(session.sync());
    assert_eq!(session.view(), &DetailView::Closed);
}

#[rstest]
fn confirmation_prompts_match_actions() {
    let id = TaskId::new(1);
    assert_eq!(
        ConfirmationRequest::DeleteTask(id).prompt(),
        "Are you sure you want to delete this task?"
    );
    assert_eq!(
        ConfirmationRequest::ApplyEdit(id).to_string(),
        "Apply changes to this task?"
    );
    assert_eq!(ConfirmationRequest::ApplyEdit(id).task_id(), id);
}
