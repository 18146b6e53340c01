//! Interactive order form on top of rustyline.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::ops::ControlFlow;

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use rusikaram_application::OrderFormController;
use rusikaram_core::RusikaramError;
use rusikaram_core::catalog::CATALOG;
use rusikaram_core::form::Transition;
use rusikaram_core::order::{order_total, order_weight_grams};

use crate::render::{render_form, render_overview};

const COMMANDS: [&str; 13] = [
    "date", "phone", "name", "address", "paid", "qty", "show", "submit", "orders", "notify",
    "help", "quit", "exit",
];

const HELP: &str = "\
Commands:
  date YYYY-MM-DD       set the order date
  phone <number>        set the phone (fills name and address for known customers)
  name <name>           set the customer name
  address <address>     set the delivery address
  paid [yes|no]         mark payment as received or pending
  qty <item#> <count>   set the number of packs for a catalog item
  show                  print the form
  submit                save the order and start a new one
  orders                print all orders and the grand total
  notify <order#>       send the payment confirmation for a paid order
  quit | exit           leave";

/// Completion, hints and highlighting for form commands.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        if self.commands.iter().any(|cmd| cmd == word) {
            let separator = if line.len() > word.len() { " " } else { "" };
            Owned(format!("{}{}{}", word.bright_cyan(), separator, rest))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Date(NaiveDate),
    Phone(String),
    Name(String),
    Address(String),
    Paid(bool),
    /// `item` is one-based as printed in the form.
    Quantity { item: usize, raw: String },
    Show,
    Submit,
    Orders,
    /// One-based order number.
    Notify(usize),
    Help,
    Quit,
}

fn parse_number(arg: &str, what: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Expected {} number starting at 1, got '{}'", what, arg)),
    }
}

fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let (word, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
    let rest = rest.trim();

    match word {
        "date" => NaiveDate::parse_from_str(rest, "%Y-%m-%d")
            .map(ReplCommand::Date)
            .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", rest)),
        "phone" => Ok(ReplCommand::Phone(rest.to_string())),
        "name" => Ok(ReplCommand::Name(rest.to_string())),
        "address" => Ok(ReplCommand::Address(rest.to_string())),
        "paid" => match rest.to_ascii_lowercase().as_str() {
            "" | "yes" | "y" | "true" => Ok(ReplCommand::Paid(true)),
            "no" | "n" | "false" => Ok(ReplCommand::Paid(false)),
            other => Err(format!("Expected yes or no, got '{}'", other)),
        },
        "qty" => {
            let (item, raw) = rest.split_once(' ').unwrap_or((rest, ""));
            if item.is_empty() {
                return Err("Usage: qty <item#> <count>".to_string());
            }
            let item = parse_number(item, "an item")?;
            if item > CATALOG.len() {
                return Err(format!("No catalog item #{}", item));
            }
            Ok(ReplCommand::Quantity {
                item,
                raw: raw.trim().to_string(),
            })
        }
        "show" => Ok(ReplCommand::Show),
        "submit" => Ok(ReplCommand::Submit),
        "orders" => Ok(ReplCommand::Orders),
        "notify" => parse_number(rest, "an order").map(ReplCommand::Notify),
        "help" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
    }
}

fn print_running_total(controller: &OrderFormController) {
    let draft = controller.draft();
    println!(
        "{}",
        format!(
            "Total: ₹{}   Weight: {}g",
            order_total(draft),
            order_weight_grams(draft)
        )
        .bright_black()
    );
}

/// Sends the payment notice for a one-based order number and prints the
/// message and link.
pub fn send_notice(
    controller: &OrderFormController,
    order: usize,
) -> rusikaram_core::error::Result<()> {
    let index = order
        .checked_sub(1)
        .ok_or_else(|| RusikaramError::validation("Order numbers start at 1"))?;

    let notice = controller.notify(index)?;
    println!("{}", notice.message.green());
    if !notice.opened {
        println!("{}", "Open this link to send the message:".yellow());
    }
    println!("{}", notice.link);
    Ok(())
}

fn execute(controller: &mut OrderFormController, command: ReplCommand) -> ControlFlow<()> {
    match command {
        ReplCommand::Date(date) => {
            controller.set_date(date);
        }
        ReplCommand::Phone(phone) => {
            let known = controller.customers().lookup(&phone).is_some();
            controller.set_phone(phone);
            if known {
                let draft = controller.draft();
                println!(
                    "{}",
                    format!("Returning customer: {}, {}", draft.customer_name, draft.address)
                        .bright_blue()
                );
            }
        }
        ReplCommand::Name(name) => {
            controller.set_name(name);
        }
        ReplCommand::Address(address) => {
            controller.set_address(address);
        }
        ReplCommand::Paid(received) => {
            controller.set_payment_received(received);
        }
        ReplCommand::Quantity { item, raw } => {
            if controller.set_quantity(item - 1, raw) != Transition::Unchanged {
                print_running_total(controller);
            }
        }
        ReplCommand::Show => print!("{}", render_form(controller.draft())),
        ReplCommand::Submit => match controller.submit() {
            Ok(receipt) => println!(
                "{}",
                format!(
                    "Order #{} saved: ₹{}, {}g",
                    receipt.index + 1,
                    receipt.total,
                    receipt.weight_grams
                )
                .green()
            ),
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        ReplCommand::Orders => print!("{}", render_overview(&controller.overview())),
        ReplCommand::Notify(order) => {
            if let Err(e) = send_notice(controller, order) {
                eprintln!("{}", e.to_string().red());
            }
        }
        ReplCommand::Help => println!("{}", HELP),
        ReplCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

/// Runs the interactive form until `quit` or end of input.
pub fn run(controller: &mut OrderFormController) -> Result<()> {
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    print!("{}", render_form(controller.draft()));
    println!("{}", "Type 'help' for commands, 'quit' to exit.".bright_black());
    println!();

    loop {
        match rl.readline("order> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_command(trimmed) {
                    Ok(command) => {
                        if execute(controller, command).is_break() {
                            println!("{}", "Goodbye!".bright_green());
                            break;
                        }
                    }
                    Err(message) => eprintln!("{}", message.red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!(error = %err, "Input error");
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_commands() {
        assert_eq!(
            parse_command("phone 9000000000"),
            Ok(ReplCommand::Phone("9000000000".into()))
        );
        assert_eq!(
            parse_command("address  12 Temple Street "),
            Ok(ReplCommand::Address("12 Temple Street".into()))
        );
        assert_eq!(parse_command("name"), Ok(ReplCommand::Name(String::new())));
        assert_eq!(parse_command("paid"), Ok(ReplCommand::Paid(true)));
        assert_eq!(parse_command("paid No"), Ok(ReplCommand::Paid(false)));
        assert!(parse_command("paid maybe").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_command("date 2025-06-01"),
            Ok(ReplCommand::Date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()))
        );
        assert!(parse_command("date 2025-13-01").is_err());
        assert!(parse_command("date tomorrow").is_err());
    }

    #[test]
    fn test_parse_quantity_keeps_raw_text() {
        assert_eq!(
            parse_command("qty 3 2 packs"),
            Ok(ReplCommand::Quantity {
                item: 3,
                raw: "2 packs".into()
            })
        );
        assert_eq!(
            parse_command("qty 10"),
            Ok(ReplCommand::Quantity {
                item: 10,
                raw: String::new()
            })
        );
        assert!(parse_command("qty 0 1").is_err());
        assert!(parse_command("qty 11 1").is_err());
        assert!(parse_command("qty").is_err());
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_command("notify 2"), Ok(ReplCommand::Notify(2)));
        assert!(parse_command("notify").is_err());
        assert_eq!(parse_command("exit"), Ok(ReplCommand::Quit));
        assert_eq!(parse_command(" submit "), Ok(ReplCommand::Submit));
        assert!(parse_command("delete 1").is_err());
    }

    fn empty_controller() -> OrderFormController {
        use std::sync::Arc;

        use rusikaram_application::{FixedClock, NotificationService, RecordingLinkOpener};
        use rusikaram_infrastructure::{KeyValueOrderRepository, MemoryStore};

        OrderFormController::open(
            Arc::new(KeyValueOrderRepository::new(Arc::new(MemoryStore::new()))),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())),
            NotificationService::new(Arc::new(RecordingLinkOpener::new())),
        )
    }

    #[test]
    fn test_send_notice_reports_bad_order_numbers() {
        let controller = empty_controller();

        assert!(send_notice(&controller, 0).unwrap_err().is_validation());
        assert!(send_notice(&controller, 1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_hint_completes_command() {
        let helper = ReplHelper::new();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        assert_eq!(helper.hint("sub", 3, &ctx), Some("mit".to_string()));
        assert_eq!(helper.hint("submit", 6, &ctx), None);
        assert_eq!(helper.hint("qty 1", 5, &ctx), None);
    }
}
