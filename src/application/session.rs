use super::ordering::take_orders;
use super::payment::run_payment_dialogue;
use crate::config::{SessionConfig, SummaryFormat};
use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::domain::order::Customer;
use crate::domain::payment::PaymentOutcome;
use crate::domain::ports::Console;
use crate::domain::pricing::compute_total;
use crate::error::Result;
use crate::interfaces::receipt::{Banner, CustomerList, OrderSummary};
use serde::Serialize;
use tracing::{debug, info};

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub customer: Customer,
    pub total: Money,
    pub payment: PaymentOutcome,
}

/// Reads the answer to "proceed to checkout?" from its first non-blank
/// character. Anything but 'y' or 'Y' means keep ordering.
fn wants_checkout(input: &str) -> bool {
    matches!(input.trim_start().chars().next(), Some('y' | 'Y'))
}

/// Serves one customer from identity capture through payment and the
/// closing summary.
pub struct Session<C: Console> {
    console: C,
    config: SessionConfig,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, config: SessionConfig) -> Self {
        Self { console, config }
    }

    pub fn run(&mut self) -> Result<SessionReport> {
        info!("session started");
        let mut customer = self.collect_customer()?;
        let catalog = Catalog::seeded()?;

        loop {
            take_orders(&mut self.console, &catalog, &mut customer)?;
            if self.confirm_checkout()? {
                break;
            }
        }

        let report = self.process_order(customer, &catalog)?;
        self.print_summary(&report, &catalog)?;
        info!(total = %report.total, "session finished");
        Ok(report)
    }

    /// Consumes the session and hands back its console.
    pub fn into_console(self) -> C {
        self.console
    }

    fn collect_customer(&mut self) -> Result<Customer> {
        self.console.say(&Banner("Customer Information").to_string())?;
        let name = self.console.prompt("name", "Enter your name: ")?;
        let address = self.console.prompt("address", "Enter your address: ")?;
        Ok(Customer::new(name, address))
    }

    fn confirm_checkout(&mut self) -> Result<bool> {
        let input = self
            .console
            .prompt("checkout", "Do you want to proceed to checkout? (y/n) ")?;
        let proceed = wants_checkout(&input);
        if !proceed {
            debug!(answer = %input, "back to order entry");
        }
        Ok(proceed)
    }

    fn process_order(&mut self, mut customer: Customer, catalog: &Catalog) -> Result<SessionReport> {
        let total = compute_total(&customer.orders, catalog);
        info!(lines = customer.orders.len(), %total, "checkout");
        let summary = OrderSummary {
            customer: &customer,
            total,
        };
        self.console.say(&summary.to_string())?;
        self.console.say(&Banner("Payment Process").to_string())?;

        let payment = run_payment_dialogue(&mut self.console, &mut customer, total)?;
        Ok(SessionReport {
            customer,
            total,
            payment,
        })
    }

    fn print_summary(&mut self, report: &SessionReport, catalog: &Catalog) -> Result<()> {
        match self.config.summary_format {
            SummaryFormat::Text => {
                let list = CustomerList {
                    customers: std::slice::from_ref(&report.customer),
                    catalog,
                };
                self.console.say(&list.to_string())
            }
            SummaryFormat::Json => {
                let json = serde_json::to_string_pretty(report)?;
                self.console.say(&json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderLine;
    use crate::error::PosError;
    use crate::infrastructure::console::LineConsole;
    use rust_decimal_macros::dec;

    fn run(script: &str, summary_format: SummaryFormat) -> (Result<SessionReport>, String) {
        let console = LineConsole::new(script.as_bytes(), Vec::new());
        let mut session = Session::new(console, SessionConfig { summary_format });
        let result = session.run();
        let output = String::from_utf8(session.into_console().into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_checkout_answer_parsing() {
        assert!(wants_checkout("y"));
        assert!(wants_checkout("  Yes"));
        assert!(!wants_checkout("N"));
        assert!(!wants_checkout("nope"));
        assert!(!wants_checkout(""));
        assert!(!wants_checkout("maybe"));
        assert!(!wants_checkout("x"));
    }

    #[test]
    fn test_cash_on_delivery_session() {
        let script = "Juan\nManila\nBiogesic\n2\ny\nAlaxan\n1\nn\ny\ncash on delivery\ny\n";
        let (result, output) = run(script, SummaryFormat::Text);
        let report = result.unwrap();

        assert_eq!(report.total, Money::new(dec!(18.45)));
        assert_eq!(report.payment, PaymentOutcome::PayOnDelivery);
        assert_eq!(
            report.customer.orders,
            vec![OrderLine::new("Biogesic", 2), OrderLine::new("Alaxan", 1)]
        );
        assert!(output.contains("Customer: Juan, Address: Manila"));
        assert!(output.contains("Order successful. Payment will be done on delivery."));
        assert!(!output.contains("Enter the amount"));
        assert!(output.contains("Customer List"));
        assert!(output.ends_with("Medicine: Alaxan, Quantity: 1\nTotal Price: PHP 18.45\n"));
    }

    #[test]
    fn test_empty_order_reaches_checkout() {
        let (result, output) = run("Ana\nCebu\n\ny\ncash on delivery\ny\n", SummaryFormat::Text);
        let report = result.unwrap();
        assert!(report.customer.orders.is_empty());
        assert_eq!(report.total, Money::ZERO);
        assert!(output.contains("Medicine(s):\nTotal Price: PHP 0.00\n"));
        assert!(output.ends_with("Order Summary:\nTotal Price: PHP 0.00\n"));
    }

    #[test]
    fn test_declining_checkout_returns_to_ordering() {
        let script = "Ana\nCebu\nNeozep\n1\nn\nN\nneozep\n2\nn\nx\n\ny\ncash on delivery\nn\n";
        let (result, output) = run(script, SummaryFormat::Text);
        let report = result.unwrap();
        assert_eq!(report.customer.orders.len(), 2);
        assert_eq!(report.total, Money::new(dec!(20.10)));
        assert_eq!(report.payment, PaymentOutcome::Cancelled);
        // Cancellation keeps the accumulated orders in the final listing.
        assert!(output.contains("Medicine: neozep, Quantity: 2"));
        assert_eq!(output.matches("Do you want to proceed to checkout?").count(), 3);
    }

    #[test]
    fn test_unrecognised_checkout_answer_returns_to_ordering() {
        let script = "Juan\nManila\nBioflu\n1\nn\nx\nNeozep\n1\nn\ny\ncash on delivery\ny\n";
        let (result, _) = run(script, SummaryFormat::Text);
        let report = result.unwrap();
        assert_eq!(
            report.customer.orders,
            vec![OrderLine::new("Bioflu", 1), OrderLine::new("Neozep", 1)]
        );
        assert_eq!(report.total, Money::new(dec!(15.70)));
        assert_eq!(report.payment, PaymentOutcome::PayOnDelivery);
    }

    #[test]
    fn test_json_summary() {
        let script = "Juan\nManila\nBioflu\n1\nn\ny\ne-cash\n09171234567\n10\n";
        let (result, output) = run(script, SummaryFormat::Json);
        let report = result.unwrap();
        assert!(!output.contains("Customer List"));

        let json_start = output.find("{\n").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();
        assert_eq!(json["customer"]["name"], "Juan");
        assert_eq!(json["customer"]["phone_number"], "09171234567");
        assert_eq!(json["customer"]["orders"][0]["medicine_name"], "Bioflu");
        assert_eq!(json["total"], "9.00");
        assert_eq!(json["payment"]["status"], "paid");
        assert_eq!(json["payment"]["change"], "1.00");
        assert_eq!(json["payment"]["tendered"], "10.00");
        assert_eq!(report.customer.phone_number.as_deref(), Some("09171234567"));
    }

    #[test]
    fn test_input_closed_before_checkout() {
        let (result, _) = run("Juan\nManila\n\n", SummaryFormat::Text);
        assert!(matches!(result, Err(PosError::InputClosed("checkout"))));
    }
}
