use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use super::{NotificationGateway, NotificationRouter, Permission};
use crate::intent::NotificationIntent;
use crate::type_state::NotificationTypeState;

#[derive(Clone)]
struct MockGateway {
    shown: Arc<Mutex<Vec<NotificationIntent>>>,
    accept: bool,
    permission: Permission,
}

impl MockGateway {
    fn new() -> Self {
        Self {
            shown: Arc::new(Mutex::new(Vec::new())),
            accept: true,
            permission: Permission::Granted,
        }
    }

    fn declining() -> Self {
        Self {
            accept: false,
            permission: Permission::Denied,
            ..Self::new()
        }
    }

    fn shown(&self) -> Vec<NotificationIntent> {
        self.shown.lock().unwrap().clone()
    }
}

impl NotificationGateway for MockGateway {
    fn show(&self, intent: &NotificationIntent) -> bool {
        self.shown.lock().unwrap().push(intent.clone());
        self.accept
    }

    fn permission(&self) -> Permission {
        self.permission
    }
}

fn router(gateway: MockGateway, state: NotificationTypeState) -> NotificationRouter<MockGateway> {
    NotificationRouter::new(
        gateway,
        state,
        vec!["ИГРА НАЙДЕНА".to_string(), "НАЙДЕНА".to_string()],
        "kTVCSS",
    )
}

#[tokio::test(start_paused = true)]
async fn marker_title_sets_game_ready() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    let intent = NotificationIntent::from_parts("ИГРА НАЙДЕНА!", "5v5", "", false, None);
    assert!(r.route(&intent));
    assert_eq!(state.get().as_deref(), Some("game-ready"));
    assert_eq!(gateway.shown().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn explicit_category_wins_over_markers() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    let options = json!({ "notificationType": "chat" });
    let intent = NotificationIntent::from_parts("ИГРА НАЙДЕНА!", "", "", false, Some(&options));
    r.route(&intent);
    assert_eq!(state.get().as_deref(), Some("chat"));
}

#[tokio::test(start_paused = true)]
async fn plain_title_sets_no_category() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    let intent = NotificationIntent::from_parts("Новое сообщение", "hi", "", false, None);
    r.route(&intent);
    assert_eq!(state.get(), None);
}

#[tokio::test(start_paused = true)]
async fn gateway_decline_still_records_category() {
    let gateway = MockGateway::declining();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    let intent = NotificationIntent::from_parts("НАЙДЕНА", "", "", false, None);
    assert!(!r.route(&intent));
    assert_eq!(state.get().as_deref(), Some("game-ready"));
}

#[tokio::test(start_paused = true)]
async fn silent_flag_reaches_the_gateway() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state);

    let intent = NotificationIntent::from_parts("Новое сообщение", "hi", "", true, None);
    r.route(&intent);
    assert!(gateway.shown()[0].silent);
}

#[tokio::test(start_paused = true)]
async fn empty_title_gets_the_default() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state);

    let intent = NotificationIntent::from_parts("  ", "body", "", false, None);
    r.route(&intent);
    assert_eq!(gateway.shown()[0].title, "kTVCSS");
}

#[tokio::test(start_paused = true)]
async fn recognized_envelope_is_routed() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    let message = json!({
        "type": "SHOW_NOTIFICATION",
        "payload": {
            "title": "ИГРА НАЙДЕНА!",
            "body": "mirage",
        },
    });
    assert!(r.route_envelope(&message));
    assert_eq!(state.get().as_deref(), Some("game-ready"));
    assert_eq!(gateway.shown().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn unrecognized_message_is_ignored() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    assert!(!r.route_envelope(&json!({ "type": "PING" })));
    assert!(gateway.shown().is_empty());
    assert_eq!(state.get(), None);
}

#[tokio::test(start_paused = true)]
async fn hint_writes_category_without_dispatch() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    let feedback = json!({ "data": { "notificationType": "game-ready" } });
    r.hint(None, Some(&feedback));
    assert_eq!(state.get().as_deref(), Some("game-ready"));
    assert!(gateway.shown().is_empty());
}

#[tokio::test(start_paused = true)]
async fn hint_infers_from_title_markers() {
    let gateway = MockGateway::new();
    let state = NotificationTypeState::new(Duration::from_secs(2));
    let r = router(gateway.clone(), state.clone());

    r.hint(Some("ИГРА НАЙДЕНА!"), None);
    assert_eq!(state.get().as_deref(), Some("game-ready"));
}

#[test]
fn permission_maps_through_the_gateway() {
    let state = NotificationTypeState::default();
    let granted = router(MockGateway::new(), state.clone());
    assert_eq!(granted.permission(), Permission::Granted);
    assert_eq!(granted.request_permission().as_str(), "granted");

    let denied = router(MockGateway::declining(), state);
    assert_eq!(denied.permission().as_str(), "denied");
}
