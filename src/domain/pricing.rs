use super::catalog::Catalog;
use super::money::Money;
use super::order::OrderLine;

/// Sums `unit_price × quantity` over every line that names a catalog entry.
///
/// Lines with no matching medicine add nothing. The result is never cached;
/// callers recompute it whenever the order list may have changed.
pub fn compute_total(lines: &[OrderLine], catalog: &Catalog) -> Money {
    lines
        .iter()
        .filter_map(|line| {
            catalog
                .lookup(&line.medicine_name)
                .map(|medicine| medicine.unit_price * line.quantity)
        })
        .sum()
}
