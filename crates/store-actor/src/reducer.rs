//! # Reducer Trait
//!
//! The `Reducer` trait is the contract for any state managed by a
//! [`StoreActor`](crate::StoreActor). It names the action type the state accepts
//! and the pure transition function that applies one action.
//!
//! # Architecture Note
//! `reduce` takes `&self` and returns a fresh value. The store never mutates a
//! published snapshot in place, so a reader holding an older [`Snapshot`] keeps
//! seeing exactly the state it was handed.

use std::fmt::Debug;
use std::sync::Arc;

/// An immutable, shareable view of a store's state.
pub type Snapshot<S> = Arc<S>;

/// State that can be owned by a [`StoreActor`](crate::StoreActor).
///
/// # Example
///
/// ```rust
/// use store_actor::Reducer;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Tally(Vec<String>);
///
/// #[derive(Clone, Debug)]
/// enum TallyAction {
///     Push(String),
/// }
///
/// impl Reducer for Tally {
///     type Action = TallyAction;
///
///     fn reduce(&self, action: TallyAction) -> Self {
///         match action {
///             TallyAction::Push(name) => {
///                 let mut names = self.0.clone();
///                 names.push(name);
///                 Tally(names)
///             }
///         }
///     }
/// }
///
/// let empty = Tally::default();
/// let one = empty.reduce(TallyAction::Push("espresso".into()));
/// assert!(empty.0.is_empty());
/// assert_eq!(one.0, vec!["espresso".to_string()]);
/// ```
pub trait Reducer: Clone + Debug + Send + Sync + 'static {
    /// The actions this state accepts (e.g. `AddItem`, `Clear`).
    type Action: Clone + Debug + Send + 'static;

    /// Apply one action and return the next state.
    ///
    /// Must not fail and must not have side effects; anything that can fail
    /// (network calls, validation) happens before the action is dispatched.
    fn reduce(&self, action: Self::Action) -> Self;
}
