use serde::Serialize;

/// One (medicine, quantity) pair as typed at the counter.
///
/// The name is kept verbatim rather than normalized to catalog casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub medicine_name: String,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(medicine_name: impl Into<String>, quantity: i64) -> Self {
        Self {
            medicine_name: medicine_name.into(),
            quantity,
        }
    }
}

/// The single customer served by a session.
///
/// Orders only ever grow. The payment fields stay `None` unless the matching
/// payment method collected them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub card_number: Option<String>,
    pub pin_code: Option<String>,
    pub orders: Vec<OrderLine>,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone_number: None,
            card_number: None,
            pin_code: None,
            orders: Vec::new(),
        }
    }

    pub fn add_order(&mut self, line: OrderLine) {
        self.orders.push(line);
    }

    pub fn record_phone_number(&mut self, phone_number: String) {
        self.phone_number = Some(phone_number);
    }

    pub fn record_card(&mut self, card_number: String, pin_code: String) {
        self.card_number = Some(card_number);
        self.pin_code = Some(pin_code);
    }
}
