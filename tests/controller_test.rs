//! Controller tests: key events and intents against the state owner

use std::sync::Arc;

use bookclub_rs::catalog::{catalog, Book};
use bookclub_rs::controller::{AppController, Intent};
use bookclub_rs::model::{ActiveSection, AppModel, CategoryFilter};
use bookclub_rs::persistence::{KeyValueStore, MemoryStore, Persistence, SEARCH_TEXT_KEY};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

fn book(id: u32) -> Book {
    catalog().iter().find(|b| b.id == id).cloned().unwrap()
}

fn setup() -> (AppController, Arc<Mutex<AppModel>>, MemoryStore) {
    let store = MemoryStore::new();
    let model = Arc::new(Mutex::new(AppModel::new(Persistence::new(Box::new(
        store.clone(),
    )))));
    (AppController::new(model.clone()), model, store)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn type_text(controller: &AppController, text: &str) {
    for c in text.chars() {
        controller.handle_key_event(key(KeyCode::Char(c))).await;
    }
}

#[tokio::test]
async fn test_typing_edits_and_persists_search() {
    let (controller, model, store) = setup();

    type_text(&controller, "1984").await;
    assert_eq!(model.lock().await.search_text(), "1984");
    assert_eq!(store.get(SEARCH_TEXT_KEY).unwrap().as_deref(), Some("1984"));

    controller.handle_key_event(key(KeyCode::Backspace)).await;
    assert_eq!(model.lock().await.search_text(), "198");

    controller.handle_key_event(key(KeyCode::Esc)).await;
    assert_eq!(model.lock().await.search_text(), "");
    assert_eq!(store.get(SEARCH_TEXT_KEY).unwrap().as_deref(), Some(""));
}

#[tokio::test]
async fn test_q_is_search_text_but_ctrl_q_quits() {
    let (controller, model, _store) = setup();

    type_text(&controller, "q").await;
    assert_eq!(model.lock().await.search_text(), "q");
    assert!(!model.lock().await.should_quit());

    controller
        .handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
        .await;
    assert!(model.lock().await.should_quit());
}

#[tokio::test]
async fn test_release_events_are_ignored() {
    let (controller, model, _store) = setup();

    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    controller.handle_key_event(release).await;
    assert_eq!(model.lock().await.search_text(), "");
}

#[tokio::test]
async fn test_tab_cycles_sections() {
    let (controller, model, _store) = setup();

    controller.handle_key_event(key(KeyCode::Tab)).await;
    assert_eq!(model.lock().await.ui_state().active_section, ActiveSection::Category);

    controller.handle_key_event(key(KeyCode::BackTab)).await;
    assert_eq!(model.lock().await.ui_state().active_section, ActiveSection::Search);

    controller.handle_key_event(key(KeyCode::BackTab)).await;
    assert_eq!(model.lock().await.ui_state().active_section, ActiveSection::Favorites);
}

#[tokio::test]
async fn test_arrows_change_category() {
    let (controller, model, _store) = setup();
    model.lock().await.set_active_section(ActiveSection::Category);

    controller.handle_key_event(key(KeyCode::Right)).await;
    assert_eq!(model.lock().await.category(), &CategoryFilter::Named("Roman".into()));

    controller.handle_key_event(key(KeyCode::Left)).await;
    controller.handle_key_event(key(KeyCode::Left)).await;
    assert_eq!(
        model.lock().await.category(),
        &CategoryFilter::Named("Modern Klasik".into())
    );
}

#[tokio::test]
async fn test_toggle_and_remove_favorites_from_keys() {
    let (controller, model, _store) = setup();
    model.lock().await.set_active_section(ActiveSection::Books);

    controller.handle_key_event(key(KeyCode::Enter)).await;
    controller.handle_key_event(key(KeyCode::Down)).await;
    controller.handle_key_event(key(KeyCode::Down)).await;
    controller.handle_key_event(key(KeyCode::Char('f'))).await;
    {
        let model = model.lock().await;
        assert_eq!(model.favorites().books(), &[book(1), book(3)]);
        assert_eq!(
            model.ui_state().notice.as_deref(),
            Some("Added Hayvan Çiftliği to favorites")
        );
    }

    controller.handle_key_event(key(KeyCode::Tab)).await;
    controller.handle_key_event(key(KeyCode::Char('x'))).await;
    {
        let model = model.lock().await;
        assert_eq!(model.ui_state().active_section, ActiveSection::Favorites);
        assert_eq!(model.favorites().books(), &[book(3)]);
        assert_eq!(model.ui_state().notice.as_deref(), Some("Removed Simyacı from favorites"));
    }

    controller.handle_key_event(key(KeyCode::Char('c'))).await;
    assert!(model.lock().await.favorites().is_empty());
}

#[tokio::test]
async fn test_help_popup_swallows_keys() {
    let (controller, model, _store) = setup();
    model.lock().await.set_active_section(ActiveSection::Books);

    controller.handle_key_event(key(KeyCode::Char('h'))).await;
    assert!(model.lock().await.is_help_popup_open());

    controller.handle_key_event(key(KeyCode::Char('q'))).await;
    assert!(!model.lock().await.should_quit());

    controller.handle_key_event(key(KeyCode::Esc)).await;
    assert!(!model.lock().await.is_help_popup_open());

    controller.handle_key_event(key(KeyCode::Char('q'))).await;
    assert!(model.lock().await.should_quit());
}

#[tokio::test]
async fn test_dispatch_intents() {
    let (controller, model, _store) = setup();

    controller
        .dispatch(Intent::SearchTextChanged("  HAYVAN ".into()))
        .await;
    controller
        .dispatch(Intent::CategoryChanged(CategoryFilter::Named("Siyaset".into())))
        .await;
    assert_eq!(model.lock().await.filtered_books(), vec![&book(3)]);

    controller.dispatch(Intent::FavoriteToggled(book(6))).await;
    controller.dispatch(Intent::FavoriteToggled(book(6))).await;
    assert!(model.lock().await.favorites().is_empty());

    controller.dispatch(Intent::FavoriteToggled(book(8))).await;
    controller.dispatch(Intent::FavoritesCleared).await;
    let model = model.lock().await;
    assert!(model.favorites().is_empty());
    assert_eq!(model.ui_state().notice.as_deref(), Some("Favorites cleared"));
}
