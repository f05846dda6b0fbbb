use super::ordering::is_exact_yes;
use crate::domain::money::Money;
use crate::domain::order::Customer;
use crate::domain::payment::{
    PaymentMethod, PaymentOutcome, Settlement, settle, validate_card_number, validate_phone_number,
    validate_pin_code,
};
use crate::domain::ports::Console;
use crate::error::Result;
use crate::interfaces::receipt::{DashedRule, Price};
use tracing::{debug, info};

/// States of the payment dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DialogueState {
    ChoosingMethod,
    ECash,
    Bank,
    CashOnDelivery,
    Done(PaymentOutcome),
}

/// Drives the payment dialogue for `total` and returns how it ended.
///
/// Phone, card and PIN are stored on `customer` as soon as they pass
/// validation. A cancelled order leaves the customer untouched otherwise.
pub fn run_payment_dialogue<C: Console>(
    console: &mut C,
    customer: &mut Customer,
    total: Money,
) -> Result<PaymentOutcome> {
    let mut state = DialogueState::ChoosingMethod;
    loop {
        state = match state {
            DialogueState::ChoosingMethod => {
                let method = choose_method(console)?;
                info!(%method, "payment method chosen");
                match method {
                    PaymentMethod::ECash => DialogueState::ECash,
                    PaymentMethod::Bank => DialogueState::Bank,
                    PaymentMethod::CashOnDelivery => DialogueState::CashOnDelivery,
                }
            }
            DialogueState::CashOnDelivery => {
                let confirm = console.prompt("confirmation", "Confirm order? (y/n): ")?;
                if is_exact_yes(&confirm) {
                    console.say("Order successful. Payment will be done on delivery.")?;
                    DialogueState::Done(PaymentOutcome::PayOnDelivery)
                } else {
                    console.say("Order canceled.")?;
                    DialogueState::Done(PaymentOutcome::Cancelled)
                }
            }
            DialogueState::ECash => {
                let phone_number = prompt_until_valid(
                    console,
                    "phone number",
                    "Enter your phone number: ",
                    validate_phone_number,
                )?;
                customer.record_phone_number(phone_number);
                DialogueState::Done(collect_payment(console, PaymentMethod::ECash, total)?)
            }
            DialogueState::Bank => {
                let card_number = prompt_until_valid(
                    console,
                    "card number",
                    "Enter your card number (16 digits): ",
                    validate_card_number,
                )?;
                let pin_code = prompt_until_valid(
                    console,
                    "pin code",
                    "Enter your 4-digit pin code: ",
                    validate_pin_code,
                )?;
                customer.record_card(card_number, pin_code);
                DialogueState::Done(collect_payment(console, PaymentMethod::Bank, total)?)
            }
            DialogueState::Done(outcome) => {
                info!(?outcome, "payment dialogue finished");
                return Ok(outcome);
            }
        };
    }
}

fn choose_method<C: Console>(console: &mut C) -> Result<PaymentMethod> {
    loop {
        let input = console.prompt(
            "payment method",
            "Choose a payment method (e-cash, bank, cash on delivery): ",
        )?;
        match input.parse() {
            Ok(method) => return Ok(method),
            Err(e) => debug!("{}", e),
        }
    }
}

fn prompt_until_valid<C, F>(
    console: &mut C,
    field: &'static str,
    message: &str,
    validate: F,
) -> Result<String>
where
    C: Console,
    F: Fn(&str) -> Result<()>,
{
    loop {
        let input = console.prompt(field, message)?;
        match validate(&input) {
            Ok(()) => return Ok(input),
            Err(e) => debug!("{}", e),
        }
    }
}

/// Asks for an amount until it covers `total`; identity details are not
/// asked for again.
fn collect_payment<C: Console>(
    console: &mut C,
    method: PaymentMethod,
    total: Money,
) -> Result<PaymentOutcome> {
    loop {
        console.say(&DashedRule.to_string())?;
        let input = console.prompt("payment amount", "Enter the amount: PHP ")?;
        let settled = input
            .parse::<Money>()
            .and_then(|tendered| settle(tendered, total).map(|s| (tendered, s)));
        let (tendered, settlement) = match settled {
            Ok(settled) => settled,
            Err(e) => {
                debug!("{}", e);
                console.say("Invalid amount.")?;
                continue;
            }
        };

        let change = match settlement {
            Settlement::Insufficient => {
                debug!(%tendered, %total, "insufficient payment");
                console.say("Insufficient payment amount.")?;
                continue;
            }
            Settlement::Exact => {
                console.say("Payment successful.")?;
                None
            }
            Settlement::Change(change) => {
                console.say("Payment successful.")?;
                console.say(&format!("Change: {}", Price(change)))?;
                Some(change)
            }
        };
        return Ok(PaymentOutcome::Paid {
            method,
            tendered,
            change,
        });
    }
}
