use std::io::Cursor;

use pizzeria_core::Money;
use pizzeria_inventory::StockLedger;
use pizzeria_shop::{Session, SessionSummary, ShopConfig};

struct Transcript {
    summary: SessionSummary,
    ledger: StockLedger,
    text: String,
}

fn run(config: &ShopConfig, script: &str) -> Transcript {
    let mut session = Session::new(config, Cursor::new(script.to_string()), Vec::new())
        .expect("config should be valid");
    let summary = session.run().expect("in-memory session should not fail");
    let ledger = session.ledger().clone();
    let text = String::from_utf8(session.into_output()).expect("transcript is utf-8");

    Transcript {
        summary,
        ledger,
        text,
    }
}

fn run_default(script: &str) -> Transcript {
    run(&ShopConfig::default(), script)
}

fn config_with_stock(stock: &str) -> ShopConfig {
    ShopConfig::from_json(&format!(r#"{{ "starting_stock": {stock} }}"#))
        .expect("test config should parse")
}

#[test]
fn full_order_is_priced_paid_and_deducted() {
    // Margherita, Cheese, Olives, finish, PayPal, exit.
    let t = run_default("1\n1\n2\n4\n1\n0\n");

    assert!(t.text.contains("Description: Margherita, Cheese, Olives"));
    assert!(t.text.contains("Total cost: $6.50"));
    assert!(t.text.contains("Paid $6.50 using PayPal. Payment Successful!"));
    let inventory = concat!(
        "Updated Inventory:\n",
        "  Margherita: 9\n",
        "  Pepperoni: 10\n",
        "  Cheese: 14\n",
        "  Olives: 9\n",
        "  Mushrooms: 12\n",
    );
    assert!(t.text.contains(inventory));

    assert_eq!(t.summary.orders_paid, 1);
    assert_eq!(t.summary.revenue, Money::from_cents(650));
}

#[test]
fn repeated_topping_consumes_stock_each_time() {
    // Pepperoni, Mushrooms twice, finish, Credit Card, exit.
    let t = run_default("2\n3\n3\n4\n2\n0\n");

    assert!(t.text.contains("Description: Pepperoni, Mushrooms, Mushrooms"));
    assert!(t.text.contains("Total cost: $7.40"));
    assert!(t.text.contains("Paid $7.40 using Credit Card. Payment Successful!"));
    assert_eq!(t.ledger.available("Mushrooms"), 10);
    assert_eq!(t.ledger.available("Pepperoni"), 9);
}

#[test]
fn menus_list_prices_and_reserved_choices() {
    let t = run_default("0\n");

    assert!(t.text.contains("Choose your base pizza:"));
    assert!(t.text.contains("1. Margherita ($5.00)"));
    assert!(t.text.contains("2. Pepperoni ($6.00)"));
    assert!(t.text.contains("0 => Exit"));
    assert!(!t.text.contains("Available toppings:"));
}

#[test]
fn sold_out_base_reprompts() {
    let config = config_with_stock(
        r#"[
            { "name": "Margherita", "count": 1 },
            { "name": "Cheese", "count": 5 }
        ]"#,
    );

    // First Margherita sells, second is refused, then exit.
    let t = run(&config, "1\n4\n1\n1\n0\n");

    assert_eq!(t.text.matches("Pizza unavailable or out of stock!").count(), 1);
    assert_eq!(t.summary.orders_paid, 1);
    assert_eq!(t.ledger.available("Margherita"), 0);
    assert!(t.text.ends_with("Thanks for visiting! See you next time!\n"));
}

#[test]
fn base_without_stock_entry_is_unavailable() {
    let config = config_with_stock(r#"[{ "name": "Margherita", "count": 3 }]"#);

    let t = run(&config, "2\n0\n");

    assert!(t.text.contains("Pizza unavailable or out of stock!"));
    assert_eq!(t.ledger.available("Pepperoni"), 0);
    assert_eq!(t.ledger.available("Margherita"), 3);
}

#[test]
fn out_of_range_base_reprompts() {
    let t = run_default("7\nx\n0\n");

    assert_eq!(t.text.matches("Pizza unavailable or out of stock!").count(), 2);
    assert_eq!(t.summary, SessionSummary::default());
}

#[test]
fn bad_or_sold_out_topping_keeps_the_order_open() {
    let config = config_with_stock(
        r#"[
            { "name": "Margherita", "count": 2 },
            { "name": "Olives", "count": 1 }
        ]"#,
    );

    // Olives twice (second sold out), unknown 9, text, finish, PayPal, exit.
    let t = run(&config, "1\n2\n2\n9\nolives\n4\n1\n0\n");

    assert_eq!(t.text.matches("Topping unavailable or out of stock!").count(), 3);
    assert!(t.text.contains("Description: Margherita, Olives\n"));
    assert!(t.text.contains("Total cost: $5.50"));
    assert_eq!(t.ledger.available("Olives"), 0);
}

#[test]
fn invalid_payment_discards_order_but_not_consumed_stock() {
    // Margherita, Cheese, finish, payment 3 (invalid), exit.
    let t = run_default("1\n1\n4\n3\n0\n");

    assert!(t.text.contains("Invalid payment method! Please try again."));
    assert!(!t.text.contains("Payment Successful!"));
    assert!(!t.text.contains("Updated Inventory:"));
    assert_eq!(t.summary.orders_paid, 0);
    assert_eq!(t.ledger.available("Margherita"), 9);
    assert_eq!(t.ledger.available("Cheese"), 14);
    assert_eq!(t.text.matches("Choose your base pizza:").count(), 2);
}

#[test]
fn closed_input_ends_the_session_quietly() {
    let t = run_default("1\n1\n");

    assert!(!t.text.contains("Your order summary:"));
    assert!(!t.text.contains("Thanks for visiting!"));
    assert_eq!(t.summary.orders_paid, 0);
    assert_eq!(t.ledger.available("Cheese"), 14);
}

#[test]
fn inventory_is_listed_in_starting_stock_order() {
    let config = config_with_stock(
        r#"[
            { "name": "Olives", "count": 3 },
            { "name": "Pepperoni", "count": 2 },
            { "name": "Margherita", "count": 1 }
        ]"#,
    );

    // Pepperoni with Olives, finish, PayPal, exit.
    let t = run(&config, "2\n2\n4\n1\n0\n");

    let inventory = "Updated Inventory:\n  Olives: 2\n  Pepperoni: 1\n  Margherita: 1\n";
    assert!(t.text.contains(inventory));
}

#[test]
fn several_orders_accumulate_revenue() {
    // Margherita plain via PayPal, Pepperoni + Cheese via card, exit.
    let t = run_default("1\n4\n1\n2\n1\n4\n2\n0\n");

    assert_eq!(t.summary.orders_paid, 2);
    assert_eq!(t.summary.revenue, Money::from_cents(500 + 700));
    assert_eq!(t.text.matches("Updated Inventory:").count(), 2);
}
