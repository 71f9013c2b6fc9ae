//! The classic counter: one store, one subscriber, two dispatches.

use reflow::Store;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Clone, Debug, Default, PartialEq)]
struct CounterState {
    counter: i64,
}

enum CounterAction {
    Init,
    Increment,
    Decrement,
}

fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            counter: state.counter + 1,
        },
        CounterAction::Decrement => CounterState {
            counter: state.counter - 1,
        },
        // Unrecognized actions, including Init, leave the state unchanged.
        _ => state.clone(),
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("initialize logger");

    let store = Store::new(counter_reducer, CounterAction::Init);
    println!("Initial state {:?}", store.get());

    // The subscriber gets no payload; it reads the latest snapshot from
    // its own handle to the store.
    let reader = store.clone();
    store.subscribe(move || {
        println!("{:?}", reader.get());
    });

    store
        .dispatch(CounterAction::Increment)
        .expect("dispatch increment");
    store
        .dispatch(CounterAction::Decrement)
        .expect("dispatch decrement");
}
