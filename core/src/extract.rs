//! Intent extraction from normalized tokens.
//!
//! A single left-to-right pass classifies each token against the vocabulary in
//! fixed priority order (verb, number, pizza flavor, drink word). Later signals
//! of the same kind overwrite earlier ones.

use slice_types::{
    Action, DrinkCategory, ExtractError, Intent, PizzaFlavor, Quantity, QuantityError, Target,
};

use crate::quantity::{is_connective, resolve_quantity};
use crate::vocabulary::{self, DrinkWord};

/// The role a token plays, decided by the first table it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Verb(Action),
    Number(u64),
    Pizza(PizzaFlavor),
    Drink(DrinkWord),
    Unclassified,
}

fn classify(token: &str) -> Result<Role, ExtractError> {
    if let Some(action) = vocabulary::verb(token) {
        return Ok(Role::Verb(action));
    }

    if !is_connective(token) {
        match resolve_quantity(token) {
            Ok(value) => return Ok(Role::Number(value)),
            Err(QuantityError::Overflow { .. }) => {
                return Err(ExtractError::NotANumber {
                    token: token.to_string(),
                });
            }
            Err(QuantityError::NotANumber { .. }) => {}
        }
    }

    if let Some(flavor) = vocabulary::pizza_flavor(token) {
        return Ok(Role::Pizza(flavor));
    }

    Ok(vocabulary::drink_word(token).map_or(Role::Unclassified, Role::Drink))
}

/// Build an [`Intent`] from one utterance's normalized tokens.
///
/// Fails with `MissingQuantity` when no positive count was found, then with
/// `UnknownItem` when neither a pizza flavor nor a drink category was named.
/// Generic drink words ("soda") are consumed but never pick a category.
pub fn extract<S: AsRef<str>>(tokens: &[S]) -> Result<Intent, ExtractError> {
    let mut action: Option<Action> = None;
    let mut quantity: u32 = 0;
    let mut pizza: Option<PizzaFlavor> = None;
    let mut drink: Option<DrinkCategory> = None;

    for token in tokens {
        let token = token.as_ref();
        match classify(token)? {
            Role::Verb(verb) => action = Some(verb),
            Role::Number(value) => {
                quantity = u32::try_from(value).map_err(|_| {
                    tracing::warn!(token, value, "Quantity out of range");
                    ExtractError::NotANumber {
                        token: token.to_string(),
                    }
                })?;
            }
            Role::Pizza(flavor) => pizza = Some(flavor),
            Role::Drink(DrinkWord::Category(category)) => drink = Some(category),
            Role::Drink(DrinkWord::Synonym) | Role::Unclassified => {}
        }
    }

    let quantity = Quantity::new(quantity).ok_or(ExtractError::MissingQuantity)?;
    let target = Target::from_parts(pizza, drink).ok_or(ExtractError::UnknownItem)?;
    let intent = Intent::new(action.unwrap_or_default(), quantity, target);

    tracing::debug!(%intent, "Extracted intent");
    Ok(intent)
}
