//! Table-driven finite state machine for interaction tools.
//!
//! A machine holds the current state and a table `state -> event -> transition`.
//! Events are named after the state they lead to: dispatching `event` from a
//! state that accepts it makes `event` the current state, then runs the
//! transition's handler. Events the current state does not list are ignored,
//! so stray input (a move before any press, a draw while idle) is inert.
//!
//! ## Follow-up Transitions
//!
//! A handler may ask for another transition by returning `Some(event)`. The
//! engine dispatches it with default params once the handler has returned,
//! still inside the original `dispatch` call. Everything is synchronous and
//! runs to completion; nothing is queued across calls.
//!
//! ```text
//! dispatch(MouseUp) -> state = MouseUp -> mouseup() returns Some(Off)
//!                   -> state = Off     -> off() returns None
//! ```

use crate::constants::MAX_CHAINED_DISPATCHES;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// Handler invoked when a transition fires.
pub type Handler<S, C, P> = Box<dyn Fn(&mut C, P) -> Option<S>>;

/// What happens when an accepted event is dispatched.
pub enum Transition<S, C, P> {
    /// Switch state, then run the handler
    Handler(Handler<S, C, P>),
    /// Switch state only
    Leaf,
}

/// Generic state machine over states `S`, a handler context `C` and
/// event parameters `P`.
///
/// The context is passed to [`StateMachine::dispatch`] rather than owned, so
/// a tool can keep its own fields next to the machine and lend them to the
/// handlers.
pub struct StateMachine<S, C, P> {
    state: S,
    transitions: HashMap<S, Vec<(S, Transition<S, C, P>)>>,
}

impl<S, C, P> StateMachine<S, C, P>
where
    S: Copy + Eq + Hash + Debug,
    P: Default,
{
    pub fn builder(initial: S) -> StateMachineBuilder<S, C, P> {
        StateMachineBuilder::new(initial)
    }

    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    /// Whether the current state has a transition for `event`.
    pub fn accepts(&self, event: S) -> bool {
        self.transitions
            .get(&self.state)
            .is_some_and(|row| row.iter().any(|(e, _)| *e == event))
    }

    /// Events accepted by `state`, in registration order.
    pub fn events_for(&self, state: S) -> Vec<S> {
        self.transitions
            .get(&state)
            .map(|row| row.iter().map(|(e, _)| *e).collect())
            .unwrap_or_default()
    }

    /// Force the current state without running any handler.
    pub fn reset(&mut self, state: S) {
        self.state = state;
    }

    /// Dispatch `event` with `params`.
    ///
    /// Returns `true` if the current state accepted the event. Follow-up
    /// transitions requested by handlers are run before returning.
    pub fn dispatch(&mut self, ctx: &mut C, event: S, params: P) -> bool {
        let mut pending = Some((event, params));
        let mut steps = 0;
        let mut accepted = false;

        while let Some((event, params)) = pending.take() {
            if steps > MAX_CHAINED_DISPATCHES {
                warn!(
                    state = ?self.state,
                    event = ?event,
                    "Dispatch chain exceeded {} steps, stopping",
                    MAX_CHAINED_DISPATCHES
                );
                break;
            }

            let Some(transition) = self
                .transitions
                .get(&self.state)
                .and_then(|row| row.iter().find(|(e, _)| *e == event))
                .map(|(_, t)| t)
            else {
                trace!(state = ?self.state, event = ?event, "Event not accepted, ignoring");
                break;
            };

            debug!(from = ?self.state, to = ?event, "Transition");
            self.state = event;
            if steps == 0 {
                accepted = true;
            }
            steps += 1;

            let follow_up = match transition {
                Transition::Handler(handler) => handler(ctx, params),
                Transition::Leaf => None,
            };
            pending = follow_up.map(|next| (next, P::default()));
        }

        accepted
    }
}

/// Assembles a [`StateMachine`] transition table.
pub struct StateMachineBuilder<S, C, P> {
    initial: S,
    transitions: HashMap<S, Vec<(S, Transition<S, C, P>)>>,
}

impl<S, C, P> StateMachineBuilder<S, C, P>
where
    S: Copy + Eq + Hash + Debug,
    P: Default,
{
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            transitions: HashMap::new(),
        }
    }

    /// Declare `state` with no outgoing transitions (yet).
    pub fn state(mut self, state: S) -> Self {
        self.transitions.entry(state).or_default();
        self
    }

    /// Accept `event` in `state`, running `handler` after the switch.
    pub fn on<F>(self, state: S, event: S, handler: F) -> Self
    where
        F: Fn(&mut C, P) -> Option<S> + 'static,
    {
        self.insert(state, event, Transition::Handler(Box::new(handler)))
    }

    /// Accept `event` in `state` as a plain state switch.
    pub fn leaf(self, state: S, event: S) -> Self {
        self.insert(state, event, Transition::Leaf)
    }

    fn insert(mut self, state: S, event: S, transition: Transition<S, C, P>) -> Self {
        let row = self.transitions.entry(state).or_default();
        match row.iter_mut().find(|(e, _)| *e == event) {
            Some(slot) => slot.1 = transition,
            None => row.push((event, transition)),
        }
        self
    }

    pub fn build(self) -> StateMachine<S, C, P> {
        StateMachine {
            state: self.initial,
            transitions: self.transitions,
        }
    }
}
