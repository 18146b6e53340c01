//! Totals engine: pure reductions over order lines.

use crate::catalog::PACK_WEIGHT_GRAMS;
use crate::order::model::{LineItems, OrderLine};

/// Price of a single line, in rupees.
pub fn line_amount(line: &OrderLine) -> u64 {
    line.amount()
}

/// Sum of quantity x unit price over all lines, in rupees.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn order_total<O: LineItems + ?Sized>(order: &O) -> u64 {
    order
        .lines()
        .iter()
        .map(line_amount)
        .fold(0, u64::saturating_add)
}

/// Total weight of the order in grams (250g per pack).
pub fn order_weight_grams<O: LineItems + ?Sized>(order: &O) -> u64 {
    order
        .lines()
        .iter()
        .map(|line| u64::from(line.quantity).saturating_mul(PACK_WEIGHT_GRAMS))
        .fold(0, u64::saturating_add)
}

/// Sum of [`order_total`] across all orders. Zero for no orders.
pub fn grand_total<O: LineItems>(orders: &[O]) -> u64 {
    orders
        .iter()
        .map(|order| order_total(order))
        .fold(0, u64::saturating_add)
}

/// Lines with at least one pack ordered, for display.
pub fn non_zero_lines<O: LineItems + ?Sized>(order: &O) -> impl Iterator<Item = &OrderLine> {
    order.lines().iter().filter(|line| line.quantity > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::model::{DraftOrder, SubmittedOrder};
    use chrono::NaiveDate;

    fn draft_with(quantities: &[u32]) -> DraftOrder {
        let mut draft = DraftOrder::blank(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        for (i, q) in quantities.iter().enumerate() {
            draft.set_quantity(i, *q);
        }
        draft
    }

    #[test]
    fn test_order_total_sums_quantity_times_price() {
        let draft = draft_with(&[2, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(order_total(&draft), 270);
    }

    #[test]
    fn test_order_total_mixed_prices() {
        // 1 x 90 + 2 x 100 + 3 x 95
        let draft = draft_with(&[1, 0, 0, 0, 0, 0, 2, 0, 3, 0]);
        assert_eq!(order_total(&draft), 90 + 200 + 285);
    }

    #[test]
    fn test_weight_is_250g_per_pack() {
        let draft = draft_with(&[2, 0, 1, 0, 0, 0, 4, 0, 0, 1]);
        assert_eq!(order_weight_grams(&draft), 250 * 8);
    }

    #[test]
    fn test_empty_draft_totals_are_zero() {
        let draft = draft_with(&[]);
        assert_eq!(order_total(&draft), 0);
        assert_eq!(order_weight_grams(&draft), 0);
        assert_eq!(non_zero_lines(&draft).count(), 0);
    }

    #[test]
    fn test_grand_total() {
        let orders = vec![
            SubmittedOrder::from_draft(&draft_with(&[2, 0, 1])),
            SubmittedOrder::from_draft(&draft_with(&[0, 0, 0, 0, 0, 0, 1])),
        ];
        assert_eq!(grand_total(&orders), 270 + 100);
    }

    #[test]
    fn test_grand_total_of_no_orders_is_zero() {
        let orders: Vec<SubmittedOrder> = Vec::new();
        assert_eq!(grand_total(&orders), 0);
    }

    #[test]
    fn test_totals_saturate_on_huge_stored_lines() {
        let huge = OrderLine {
            name: "Omapodi (250GMS)".to_string(),
            unit_price: u32::MAX,
            quantity: u32::MAX,
        };
        let order = SubmittedOrder::restore(
            "Asha".into(),
            "9000000000".into(),
            String::new(),
            true,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            vec![huge.clone(), huge],
        );

        assert_eq!(order_total(&order), u64::MAX);
        assert_eq!(order_weight_grams(&order), 2 * u64::from(u32::MAX) * 250);
        assert_eq!(grand_total(&[order.clone(), order]), u64::MAX);
    }

    #[test]
    fn test_non_zero_lines_skip_empty_quantities() {
        let draft = draft_with(&[0, 3, 0, 1]);
        let names: Vec<_> = non_zero_lines(&draft).map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Omapodi (250GMS)", "Thenkuzhal (250GMS)"]);
    }
}
