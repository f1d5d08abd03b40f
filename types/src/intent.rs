//! Structured change requests extracted from a single utterance.

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

use crate::menu::{DrinkCategory, PizzaFlavor};

/// What an utterance asks the check to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// No verb recognized falls back here.
    #[default]
    Add,
    /// Move units between drink categories ("make one soda regular").
    Update,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strictly positive item count.
///
/// Zero is unrepresentable: an utterance whose only number is zero carries no
/// quantity at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The item(s) an intent acts on.
///
/// An utterance naming both a flavor and a drink category keeps both; the
/// mutator handles each side independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Pizza(PizzaFlavor),
    Drink(DrinkCategory),
    Both {
        pizza: PizzaFlavor,
        drink: DrinkCategory,
    },
}

impl Target {
    /// Combine optional signals into a target. `None` when neither is present.
    #[must_use]
    pub const fn from_parts(pizza: Option<PizzaFlavor>, drink: Option<DrinkCategory>) -> Option<Self> {
        match (pizza, drink) {
            (Some(pizza), Some(drink)) => Some(Target::Both { pizza, drink }),
            (Some(pizza), None) => Some(Target::Pizza(pizza)),
            (None, Some(drink)) => Some(Target::Drink(drink)),
            (None, None) => None,
        }
    }

    #[must_use]
    pub const fn pizza(self) -> Option<PizzaFlavor> {
        match self {
            Target::Pizza(pizza) | Target::Both { pizza, .. } => Some(pizza),
            Target::Drink(_) => None,
        }
    }

    #[must_use]
    pub const fn drink(self) -> Option<DrinkCategory> {
        match self {
            Target::Drink(drink) | Target::Both { drink, .. } => Some(drink),
            Target::Pizza(_) => None,
        }
    }
}

/// A validated `(action, quantity, target)` record.
///
/// Holding an `Intent` proves the utterance named a positive quantity and at
/// least one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Intent {
    action: Action,
    quantity: Quantity,
    target: Target,
}

impl Intent {
    #[must_use]
    pub const fn new(action: Action, quantity: Quantity, target: Target) -> Self {
        Self {
            action,
            quantity,
            target,
        }
    }

    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.quantity)?;
        if let Some(pizza) = self.target.pizza() {
            write!(f, " {pizza} pizza")?;
        }
        if let Some(drink) = self.target.drink() {
            write!(f, " {drink} soda")?;
        }
        Ok(())
    }
}

/// Failure to read a quantity out of a token or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("'{word}' is not a number")]
    NotANumber { word: String },
    #[error("'{phrase}' is too large to count")]
    Overflow { phrase: String },
}

/// Why an utterance could not become an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A numeric token that cannot be used as an item count.
    #[error("'{token}' is not a quantity we can take")]
    NotANumber { token: String },
    #[error("You need to specify an amount, please enter your request again")]
    MissingQuantity,
    #[error("Seems to be something we don't have, please enter your request again")]
    UnknownItem,
}
