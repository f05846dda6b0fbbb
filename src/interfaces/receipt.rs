use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::domain::order::Customer;
use crate::domain::pricing::compute_total;
use std::fmt;

pub const RECEIPT_WIDTH: usize = 84;
pub const CURRENCY: &str = "PHP";

/// Full-width rule printed above every prompt for a medicine name.
pub struct Rule;

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&"=".repeat(RECEIPT_WIDTH))
    }
}

/// Full-width dashed line printed above every amount prompt.
pub struct DashedRule;

impl fmt::Display for DashedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&"-".repeat(RECEIPT_WIDTH))
    }
}

/// A section title centered in a full-width rule of `=`.
///
/// When the padding is odd the extra `=` goes on the left.
pub struct Banner<'a>(pub &'a str);

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!(" {} ", self.0);
        let padding = RECEIPT_WIDTH.saturating_sub(title.chars().count());
        let right = padding / 2;
        let left = padding - right;
        write!(f, "{}{}{}", "=".repeat(left), title, "=".repeat(right))
    }
}

/// `PHP 4.75`
pub struct Price(pub Money);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CURRENCY, self.0)
    }
}

pub struct CatalogListing<'a>(pub &'a Catalog);

impl fmt::Display for CatalogListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Banner("Medicine List"))?;
        for medicine in self.0.medicines() {
            write!(f, "\n{} - {}", medicine.name, Price(medicine.unit_price))?;
        }
        Ok(())
    }
}

/// The checkout summary shown before the payment dialogue.
pub struct OrderSummary<'a> {
    pub customer: &'a Customer,
    pub total: Money,
}

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Banner("Order Summary"))?;
        writeln!(
            f,
            "Customer: {}, Address: {}",
            self.customer.name, self.customer.address
        )?;
        writeln!(f, "Medicine(s):")?;
        for line in &self.customer.orders {
            writeln!(f, "Name: {}, Quantity: {}", line.medicine_name, line.quantity)?;
        }
        write!(f, "Total Price: {}", Price(self.total))
    }
}

/// The closing listing of every customer served with their orders and totals.
pub struct CustomerList<'a> {
    pub customers: &'a [Customer],
    pub catalog: &'a Catalog,
}

impl fmt::Display for CustomerList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Banner("Customer List"))?;
        for customer in self.customers {
            write!(
                f,
                "\nName: {}, Address: {}\nOrder Summary:",
                customer.name, customer.address
            )?;
            for line in &customer.orders {
                write!(
                    f,
                    "\nMedicine: {}, Quantity: {}",
                    line.medicine_name, line.quantity
                )?;
            }
            let total = compute_total(&customer.orders, self.catalog);
            write!(f, "\nTotal Price: {}", Price(total))?;
        }
        Ok(())
    }
}
