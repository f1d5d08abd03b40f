//! Core ordering logic for Slice.
//!
//! This crate turns normalized utterances into [`Intent`](slice_types::Intent)s
//! and applies them to a [`Check`](slice_types::Check):
//! quantity resolution, vocabulary tables, intent extraction, check mutation,
//! check rendering and the per-customer [`OrderSession`].
//!
//! ```text
//! raw line -> Normalizer -> tokens -> extract() -> Intent -> apply(&mut Check)
//! ```

mod extract;
pub mod grammar;
mod mutate;
pub mod normalize;
pub mod quantity;
pub mod session;
mod summary;
pub mod vocabulary;

pub use extract::extract;
pub use grammar::{GrammarError, check_initial_line};
pub use mutate::apply;
pub use normalize::{Normalizer, StemmingNormalizer};
pub use quantity::resolve_quantity;
pub use session::{LineError, OrderPhase, OrderSession, Utterance, UtteranceKind, UtteranceLog};
pub use summary::{SummaryOptions, drink_menu, flavor_menu, render_check};
