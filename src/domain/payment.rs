use super::money::Money;
use crate::error::{PosError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const PHONE_NUMBER_LEN: usize = 11;
pub const CARD_NUMBER_LEN: usize = 16;
pub const PIN_CODE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    ECash,
    Bank,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::ECash => "e-cash",
            PaymentMethod::Bank => "bank",
            PaymentMethod::CashOnDelivery => "cash on delivery",
        }
    }
}

/// Only the exact, case-sensitive literals are accepted.
impl FromStr for PaymentMethod {
    type Err = PosError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "e-cash" => Ok(PaymentMethod::ECash),
            "bank" => Ok(PaymentMethod::Bank),
            "cash on delivery" => Ok(PaymentMethod::CashOnDelivery),
            other => Err(PosError::ValidationError(format!(
                "Unknown payment method '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn validate_length(field: &str, value: &str, expected: usize) -> Result<()> {
    let actual = value.len();
    if actual == expected {
        Ok(())
    } else {
        Err(PosError::ValidationError(format!(
            "{} must be {} bytes long, got {}",
            field, expected, actual
        )))
    }
}

// Length is the only rule; content is not checked for digits.
pub fn validate_phone_number(phone_number: &str) -> Result<()> {
    validate_length("Phone number", phone_number, PHONE_NUMBER_LEN)
}

pub fn validate_card_number(card_number: &str) -> Result<()> {
    validate_length("Card number", card_number, CARD_NUMBER_LEN)
}

pub fn validate_pin_code(pin_code: &str) -> Result<()> {
    validate_length("PIN code", pin_code, PIN_CODE_LEN)
}

/// Result of comparing a tendered amount against the amount due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Insufficient,
    Exact,
    Change(Money),
}

/// Compares `tendered` with `total`. The branch is chosen by comparison
/// alone; an amount whose change cannot be represented is rejected.
pub fn settle(tendered: Money, total: Money) -> Result<Settlement> {
    if tendered < total {
        Ok(Settlement::Insufficient)
    } else if tendered > total {
        tendered
            .checked_sub(total)
            .map(Settlement::Change)
            .ok_or_else(|| {
                PosError::ValidationError(format!(
                    "Change for {} against {} overflows",
                    tendered, total
                ))
            })
    } else {
        Ok(Settlement::Exact)
    }
}

/// How the payment dialogue ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum PaymentOutcome {
    Paid {
        method: PaymentMethod,
        tendered: Money,
        change: Option<Money>,
    },
    PayOnDelivery,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_method_exact_literals() {
        assert_eq!("e-cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::ECash);
        assert_eq!("bank".parse::<PaymentMethod>().unwrap(), PaymentMethod::Bank);
        assert_eq!(
            "cash on delivery".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CashOnDelivery
        );
    }

    #[test]
    fn test_payment_method_rejects_variants() {
        for input in ["E-cash", "Bank", "cod", "bank ", "", "cash  on delivery"] {
            assert!(
                matches!(input.parse::<PaymentMethod>(), Err(PosError::ValidationError(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_phone_number_length_only() {
        assert!(validate_phone_number("12345678901").is_ok());
        // Length is measured in bytes: 11 chars, 12 bytes.
        assert!(validate_phone_number("0917123456\u{e9}").is_err());
        assert!(validate_phone_number("091712345\u{e9}").is_ok());
        assert!(validate_phone_number("abcdefghijk").is_ok());
        assert!(validate_phone_number("1234567890").is_err());
        assert!(validate_phone_number("123456789012").is_err());
    }

    #[test]
    fn test_card_number_length_only() {
        assert!(validate_card_number("1234567812345678").is_ok());
        assert!(validate_card_number("xxxx-xxxx-xxxx-x").is_ok());
        assert!(validate_card_number("123456781234567").is_err());
    }

    #[test]
    fn test_pin_code_length_only() {
        assert!(validate_pin_code("1234").is_ok());
        assert!(validate_pin_code("ab c").is_ok());
        assert!(validate_pin_code("123").is_err());
        assert!(validate_pin_code("12345").is_err());
    }

    #[test]
    fn test_settle_against_total() {
        let total = Money::new(dec!(20.40));
        assert_eq!(settle(Money::new(dec!(20.40)), total).unwrap(), Settlement::Exact);
        assert_eq!(
            settle(Money::new(dec!(25.00)), total).unwrap(),
            Settlement::Change(Money::new(dec!(4.60)))
        );
        assert_eq!(
            settle(Money::new(dec!(10.00)), total).unwrap(),
            Settlement::Insufficient
        );
    }

    #[test]
    fn test_zero_total_is_settled_by_zero() {
        assert_eq!(settle(Money::ZERO, Money::ZERO).unwrap(), Settlement::Exact);
    }

    #[test]
    fn test_settle_extreme_amounts_without_overflow() {
        let total = Money::new(dec!(20.40));
        assert_eq!(
            settle(Money::new(Decimal::MIN), total).unwrap(),
            Settlement::Insufficient
        );
        assert!(matches!(
            settle(Money::new(Decimal::MAX), Money::new(dec!(-20.40))),
            Err(PosError::ValidationError(_))
        ));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = PaymentOutcome::Paid {
            method: PaymentMethod::ECash,
            tendered: Money::new(dec!(25.00)),
            change: Some(Money::new(dec!(4.60))),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "paid");
        assert_eq!(json["method"], "e-cash");
        assert_eq!(json["change"], "4.60");

        let json = serde_json::to_value(PaymentOutcome::PayOnDelivery).unwrap();
        assert_eq!(json["status"], "pay-on-delivery");
    }
}
