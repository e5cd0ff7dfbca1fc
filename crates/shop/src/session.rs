//! The ordering dialogue.
//!
//! One pass through the loop is one order: pick a base, stack toppings, review
//! the total, pay, then see the remaining stock. Typing `0` at the base menu
//! (or closing the input) ends the session.

use std::io::{BufRead, Write};

use thiserror::Error;

use pizzeria_core::{DomainError, Money, OrderId};
use pizzeria_inventory::StockLedger;
use pizzeria_menu::{Menu, OrderableItem};
use pizzeria_payments::{PaymentChoice, PaymentReceipt};

use crate::config::ShopConfig;

const EXIT_CHOICE: &str = "0";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid shop configuration: {0}")]
    Config(#[from] DomainError),
}

/// What a finished session sold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub orders_paid: usize,
    pub revenue: Money,
}

impl SessionSummary {
    fn record(&mut self, receipt: &PaymentReceipt) {
        self.orders_paid += 1;
        self.revenue = self.revenue + receipt.amount;
    }
}

/// A single customer session at the counter.
///
/// Owns the stock ledger for its whole lifetime; the ledger is created from the
/// configuration when the session opens and dropped with it.
pub struct Session<R, W> {
    menu: Menu,
    ledger: StockLedger,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(config: &ShopConfig, input: R, output: W) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            menu: config.menu.clone(),
            ledger: config.ledger(),
            input,
            output,
        })
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Give back the output stream (e.g. to inspect a captured transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Serve orders until the customer exits or the input ends.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        writeln!(self.output, "Welcome to the Pizza Restaurant!")?;
        let mut summary = SessionSummary::default();

        loop {
            self.show_base_menu()?;
            let Some(answer) = self.prompt()? else {
                tracing::info!("input closed at base menu");
                break;
            };

            if answer == EXIT_CHOICE {
                writeln!(self.output, "Thanks for visiting! See you next time!")?;
                break;
            }

            let Some(pizza) = self.take_base(&answer) else {
                writeln!(self.output, "Pizza unavailable or out of stock!")?;
                continue;
            };

            let order_id = OrderId::new();
            let span = tracing::info_span!("order", %order_id);
            let _enter = span.enter();
            tracing::info!(base = pizza.base_name(), "order started");

            let Some(pizza) = self.add_toppings(pizza)? else {
                tracing::info!("input closed while choosing toppings");
                break;
            };

            self.show_summary(&pizza)?;
            self.show_payment_menu()?;
            let Some(answer) = self.prompt()? else {
                tracing::info!("input closed at payment");
                break;
            };

            let Some(choice) = parse_choice(&answer).and_then(PaymentChoice::from_menu) else {
                writeln!(self.output, "Invalid payment method! Please try again.")?;
                tracing::warn!(answer = %answer, "order abandoned at payment");
                continue;
            };

            let receipt = choice.into_method().pay(order_id, pizza.cost());
            writeln!(self.output, "{}", receipt.confirmation())?;
            summary.record(&receipt);

            self.show_inventory()?;
        }

        Ok(summary)
    }

    /// Resolve a base menu answer and take one unit of it from stock.
    fn take_base(&mut self, answer: &str) -> Option<OrderableItem> {
        let base = parse_choice(answer).and_then(|n| self.menu.base(n))?;
        if !self.ledger.check_and_decrement(&base.name) {
            return None;
        }
        Some(OrderableItem::base(base))
    }

    /// Topping loop. `None` means the input closed before the order was finished.
    fn add_toppings(
        &mut self,
        mut pizza: OrderableItem,
    ) -> Result<Option<OrderableItem>, SessionError> {
        let finish = self.menu.finish_choice();

        loop {
            self.show_topping_menu()?;
            let Some(answer) = self.prompt()? else {
                return Ok(None);
            };

            let choice = parse_choice(&answer);
            if choice == Some(finish) {
                return Ok(Some(pizza));
            }

            match choice.and_then(|n| self.menu.topping(n)) {
                Some(topping) if self.ledger.check_and_decrement(&topping.name) => {
                    tracing::debug!(topping = %topping.name, "topping added");
                    pizza = pizza.with_topping(topping);
                }
                _ => writeln!(self.output, "Topping unavailable or out of stock!")?,
            }
        }
    }

    fn prompt(&mut self) -> Result<Option<String>, SessionError> {
        write!(self.output, "Enter the number of your choice: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show_base_menu(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nChoose your base pizza:")?;
        for (i, base) in self.menu.bases.iter().enumerate() {
            writeln!(self.output, "{}. {} ({})", i + 1, base.name, base.price)?;
        }
        writeln!(self.output, "{EXIT_CHOICE} => Exit")?;
        Ok(())
    }

    fn show_topping_menu(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nAvailable toppings:")?;
        for (i, topping) in self.menu.toppings.iter().enumerate() {
            writeln!(self.output, "{}. {} ({})", i + 1, topping.name, topping.price_delta)?;
        }
        writeln!(self.output, "{}. Finish order", self.menu.finish_choice())?;
        Ok(())
    }

    fn show_summary(&mut self, pizza: &OrderableItem) -> Result<(), SessionError> {
        writeln!(self.output, "\nYour order summary:")?;
        writeln!(self.output, "Description: {}", pizza.description())?;
        writeln!(self.output, "Total cost: {}", pizza.cost())?;
        Ok(())
    }

    fn show_payment_menu(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nChoose payment method:")?;
        for (i, choice) in PaymentChoice::all().into_iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn show_inventory(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nUpdated Inventory:")?;
        for entry in self.ledger.snapshot() {
            writeln!(self.output, "  {}: {}", entry.name, entry.count)?;
        }
        Ok(())
    }
}

fn parse_choice(answer: &str) -> Option<usize> {
    answer.parse().ok()
}
