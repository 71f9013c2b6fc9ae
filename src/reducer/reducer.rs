/// A pure state-transition function.
///
/// Given the current state and an action, a reducer returns the next state.
/// Reducers must be pure: no side effects, no mutation of the input, the
/// same output for the same inputs.
///
/// Contract: for any action the reducer does not recognize (including the
/// initialization action passed to [`Store::new`](crate::Store::new)) it
/// must return the input state unchanged in value.
pub trait Reducer<S, A> {
    /// Compute the state that follows `state` when `action` is applied.
    fn reduce(&self, state: &S, action: &A) -> S;
}

/// Plain functions and closures of the right shape are reducers.
impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        total: i32,
    }

    enum Adjust {
        Add(i32),
        Clear,
        Noop,
    }

    fn tally_reducer(state: &Tally, action: &Adjust) -> Tally {
        match action {
            Adjust::Add(n) => Tally {
                total: state.total + n,
            },
            Adjust::Clear => Tally { total: 0 },
            Adjust::Noop => state.clone(),
        }
    }

    #[test]
    fn fn_reducer_applies() {
        let state = Tally { total: 3 };
        assert_eq!(tally_reducer.reduce(&state, &Adjust::Add(4)).total, 7);
        assert_eq!(tally_reducer.reduce(&state, &Adjust::Clear).total, 0);
    }

    #[test]
    fn unrecognized_action_returns_input_unchanged() {
        let state = Tally { total: 5 };
        assert_eq!(tally_reducer.reduce(&state, &Adjust::Noop), state);
    }

    #[test]
    fn closure_is_a_reducer() {
        let doubler = |state: &i32, _action: &()| state * 2;
        assert_eq!(doubler.reduce(&8, &()), 16);
    }
}
