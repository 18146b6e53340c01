//! Text rendering for the form and the order summary.

use colored::Colorize;

use rusikaram_application::{OrderSummary, OrdersOverview};
use rusikaram_core::order::{DraftOrder, LineItems, line_amount, order_total, order_weight_grams};

fn payment_status(received: bool) -> String {
    if received {
        "✅ Received".green().to_string()
    } else {
        "❌ Pending".red().to_string()
    }
}

/// The draft as a numbered item table with running totals.
pub fn render_form(draft: &DraftOrder) -> String {
    let mut lines = vec![
        format!("{}", "Rusikaram Order Form".bright_magenta().bold()),
        format!("{:<9}{}", "Date:", draft.order_date.format("%Y-%m-%d")),
        format!("{:<9}{}", "Phone:", draft.phone),
        format!("{:<9}{}", "Name:", draft.customer_name),
        format!("{:<9}{}", "Address:", draft.address),
        format!("{:<9}{}", "Payment:", payment_status(draft.payment_received)),
        String::new(),
        format!(
            "{}",
            format!("{:>3}  {:<30} {:>6} {:>5} {:>8}", "#", "Item", "Price", "Qty", "Amount").bold()
        ),
    ];

    for (i, line) in draft.lines().iter().enumerate() {
        let row = format!(
            "{:>3}  {:<30} {:>6} {:>5} {:>8}",
            i + 1,
            line.name,
            format!("₹{}", line.unit_price),
            line.quantity,
            format!("₹{}", line_amount(line)),
        );
        if line.quantity > 0 {
            lines.push(row.bright_white().to_string());
        } else {
            lines.push(row.bright_black().to_string());
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} ₹{}   {} {}g",
        "Total:".bold(),
        order_total(draft),
        "Weight:".bold(),
        order_weight_grams(draft)
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_order(summary: &OrderSummary) -> Vec<String> {
    let mut lines = vec![
        format!(
            "#{} {} – {} ({}) – ₹{}",
            summary.number(),
            summary.order_date.format("%Y-%m-%d"),
            summary.name,
            summary.phone,
            summary.total
        )
        .bold()
        .to_string(),
        format!("  Address: {}", summary.address),
    ];

    for line in &summary.lines {
        lines.push(format!(
            "  {}: {} packs = ₹{}",
            line.name, line.quantity, line.amount
        ));
    }

    lines.push(format!("  Total Weight: {}g", summary.weight_grams));
    lines.push(format!(
        "  Payment: {}",
        payment_status(summary.payment_received)
    ));
    if summary.notify_available {
        lines.push(
            format!("  Send payment notice: notify {}", summary.number())
                .bright_cyan()
                .to_string(),
        );
    }
    lines
}

/// Every submitted order followed by the grand total.
pub fn render_overview(overview: &OrdersOverview) -> String {
    let mut lines = vec![format!("{}", "Order Summary".bright_magenta().bold())];

    if overview.is_empty() {
        lines.push("No orders yet.".bright_black().to_string());
    } else {
        for summary in &overview.orders {
            lines.extend(render_order(summary));
            lines.push(String::new());
        }
    }

    lines.push(format!("Grand Total: ₹{}", overview.grand_total).bold().to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rusikaram_core::order::SubmittedOrder;

    fn draft() -> DraftOrder {
        colored::control::set_override(false);
        let mut draft = DraftOrder::blank(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        draft.customer_name = "Asha".into();
        draft.phone = "9000000000".into();
        draft.address = "12 Temple Street".into();
        draft.set_quantity(0, 2);
        draft.set_quantity(2, 1);
        draft
    }

    #[test]
    fn test_render_form_shows_totals() {
        let text = render_form(&draft());

        assert!(text.contains("Date:    2025-06-01"));
        assert!(text.contains("Phone:   9000000000"));
        assert!(text.contains("❌ Pending"));
        assert!(text.contains("South Indian mixture (250GMS)"));
        assert!(text.contains("Kambu mullu murukku (250GMS)"));
        assert!(text.contains("Total: ₹270   Weight: 750g"));
    }

    #[test]
    fn test_render_empty_overview() {
        colored::control::set_override(false);
        let text = render_overview(&OrdersOverview::default());

        assert!(text.contains("No orders yet."));
        assert!(text.contains("Grand Total: ₹0"));
    }

    #[test]
    fn test_render_overview_lists_orders() {
        let mut paid = draft();
        paid.payment_received = true;
        let orders = vec![
            SubmittedOrder::from_draft(&draft()),
            SubmittedOrder::from_draft(&paid),
        ];
        let text = render_overview(&OrdersOverview::from_orders(&orders));

        assert!(text.contains("#1 2025-06-01 – Asha (9000000000) – ₹270"));
        assert!(text.contains("  Address: 12 Temple Street"));
        assert!(text.contains("  South Indian mixture (250GMS): 2 packs = ₹180"));
        assert!(!text.contains("Omapodi"));
        assert!(text.contains("  Total Weight: 750g"));
        assert!(text.contains("✅ Received"));
        assert!(!text.contains("notify 1"));
        assert!(text.contains("notify 2"));
        assert!(text.contains("Grand Total: ₹540"));
    }
}
