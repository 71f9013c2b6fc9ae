//! Multiple subscribers, notification order and unsubscribing.

use reflow::Store;

#[derive(Clone, Debug, Default)]
struct AppState {
    messages: Vec<String>,
}

enum AppAction {
    Init,
    Post(String),
    Clear,
}

fn app_reducer(state: &AppState, action: &AppAction) -> AppState {
    match action {
        AppAction::Post(text) => {
            let mut messages = state.messages.clone();
            messages.push(text.clone());
            AppState { messages }
        }
        AppAction::Clear => AppState::default(),
        AppAction::Init => state.clone(),
    }
}

fn main() {
    println!("=== Subscriptions ===\n");

    let store = Store::new(app_reducer, AppAction::Init);

    println!("1. Registering two subscribers");
    let first = store.clone();
    let audit = store.subscribe(move || {
        println!("   [audit] {} message(s)", first.read(|s| s.messages.len()));
    });
    let second = store.clone();
    store.subscribe(move || {
        if let Some(last) = second.read(|s| s.messages.last().cloned()) {
            println!("   [display] latest: {last}");
        } else {
            println!("   [display] empty");
        }
    });

    println!("\n2. Posting messages");
    store
        .dispatch(AppAction::Post("hello".to_string()))
        .expect("dispatch post");
    store
        .dispatch(AppAction::Post("world".to_string()))
        .expect("dispatch post");

    println!("\n3. Unsubscribing the audit subscriber");
    audit.unsubscribe();
    audit.unsubscribe(); // second call is a no-op

    store
        .dispatch(AppAction::Post("goodbye".to_string()))
        .expect("dispatch post");

    println!("\n4. Clearing");
    store.dispatch(AppAction::Clear).expect("dispatch clear");

    println!("\nFinal state: {:#?}", store.get());
}
