use crate::domain::catalog::Catalog;
use crate::domain::order::{Customer, OrderLine};
use crate::domain::ports::Console;
use crate::error::{PosError, Result};
use crate::interfaces::receipt::{CatalogListing, Rule};
use tracing::{debug, info, warn};

/// `"y"` or `"Y"` and nothing else.
pub(crate) fn is_exact_yes(answer: &str) -> bool {
    answer == "y" || answer == "Y"
}

/// Runs the order-taking loop for `customer` until they stop adding lines.
///
/// Every pass redisplays the catalog. An empty medicine name ends the loop
/// at once. A name missing from the catalog is reported and the loop starts
/// over without recording anything. Accepted lines keep the name exactly as
/// typed.
pub fn take_orders<C: Console>(
    console: &mut C,
    catalog: &Catalog,
    customer: &mut Customer,
) -> Result<()> {
    loop {
        console.say(&CatalogListing(catalog).to_string())?;
        console.say(&Rule.to_string())?;
        let name = console.prompt(
            "medicine name",
            "Enter the name of the medicine you want to order (press enter to finish): ",
        )?;
        if name.is_empty() {
            debug!("order entry finished");
            return Ok(());
        }

        let quantity = read_quantity(console)?;

        if catalog.lookup(&name).is_none() {
            warn!(medicine = %name, "medicine not in catalog");
            console.say("Invalid medicine name.")?;
            continue;
        }

        info!(medicine = %name, quantity, "order line accepted");
        customer.add_order(OrderLine::new(name, quantity));

        let more = console.prompt("more orders", "Do you want to add more orders? (y/n) ")?;
        if !is_exact_yes(&more) {
            return Ok(());
        }
    }
}

fn parse_quantity(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|e| PosError::ValidationError(format!("'{}' is not a quantity: {}", input, e)))
}

fn read_quantity<C: Console>(console: &mut C) -> Result<i64> {
    loop {
        let input = console.prompt("quantity", "Enter the quantity: ")?;
        match parse_quantity(&input) {
            Ok(quantity) => return Ok(quantity),
            Err(e) => {
                debug!("{}", e);
                console.say("Invalid quantity.")?;
            }
        }
    }
}
