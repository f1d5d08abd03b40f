//! One customer's ordering session.
//!
//! The session owns its check and the log of accepted utterances; nothing is
//! shared between sessions.

use std::fmt;

use slice_types::{Check, ExtractError, Intent};
use thiserror::Error;

use crate::extract::extract;
use crate::grammar::{GrammarError, check_initial_line};
use crate::mutate::apply;
use crate::normalize::{Normalizer, StemmingNormalizer};

/// Which part of the initial order a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPhase {
    Pizzas,
    Drinks,
}

impl OrderPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderPhase::Pizzas => "pizzas",
            OrderPhase::Drinks => "drinks",
        }
    }
}

impl fmt::Display for OrderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an accepted utterance entered the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceKind {
    Initial(OrderPhase),
    Change,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    kind: UtteranceKind,
    text: String,
}

impl Utterance {
    #[must_use]
    pub fn kind(&self) -> UtteranceKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only record of the utterances a session accepted.
#[derive(Debug, Clone, Default)]
pub struct UtteranceLog {
    items: Vec<Utterance>,
}

impl UtteranceLog {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Utterance> {
        self.items.iter()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Utterance> {
        self.items.last()
    }

    fn push(&mut self, kind: UtteranceKind, text: &str) {
        self.items.push(Utterance {
            kind,
            text: text.trim().to_string(),
        });
    }
}

/// Why a line was not taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Malformed(#[from] GrammarError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// A valid line naming nothing from the phase being ordered.
    #[error("Seems to be something we don't have among our {phase}, please enter your request again")]
    WrongPhase { phase: OrderPhase },
}

/// A session's check, utterance log and normalizer.
#[derive(Debug)]
pub struct OrderSession<N = StemmingNormalizer> {
    normalizer: N,
    check: Check,
    log: UtteranceLog,
}

impl OrderSession<StemmingNormalizer> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_normalizer(StemmingNormalizer::new())
    }
}

impl Default for OrderSession<StemmingNormalizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Normalizer> OrderSession<N> {
    #[must_use]
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            normalizer,
            check: Check::new(),
            log: UtteranceLog::default(),
        }
    }

    #[must_use]
    pub fn check(&self) -> &Check {
        &self.check
    }

    #[must_use]
    pub fn log(&self) -> &UtteranceLog {
        &self.log
    }

    #[must_use]
    pub fn into_check(self) -> Check {
        self.check
    }

    /// Take one initial-order line for `phase`.
    ///
    /// The line must match the initial-order shape and name an item from the
    /// phase's category. The named item's quantity is set, replacing any
    /// earlier line for the same item.
    pub fn take_initial(&mut self, phase: OrderPhase, line: &str) -> Result<Intent, LineError> {
        check_initial_line(line)?;
        let intent = self.interpret(line)?;
        let qty = intent.quantity().get();

        match phase {
            OrderPhase::Pizzas => {
                let flavor = intent.target().pizza().ok_or(LineError::WrongPhase { phase })?;
                self.check.set_pizza(flavor, qty);
            }
            OrderPhase::Drinks => {
                let category = intent.target().drink().ok_or(LineError::WrongPhase { phase })?;
                self.check.set_drink(category, qty);
            }
        }

        self.log.push(UtteranceKind::Initial(phase), line);
        tracing::info!(%phase, %intent, "Initial order line accepted");
        Ok(intent)
    }

    /// Interpret a free-form change request and apply it to the check.
    pub fn change(&mut self, line: &str) -> Result<Intent, ExtractError> {
        let intent = self.interpret(line)?;
        apply(&mut self.check, &intent);
        self.log.push(UtteranceKind::Change, line);
        tracing::info!(%intent, "Change request applied");
        Ok(intent)
    }

    fn interpret(&self, line: &str) -> Result<Intent, ExtractError> {
        let tokens = self.normalizer.normalize(line);
        tracing::debug!(?tokens, "Normalized utterance");
        extract(&tokens).inspect_err(|err| {
            tracing::info!(%err, line, "Utterance rejected");
        })
    }
}
