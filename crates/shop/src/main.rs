use std::io;

use anyhow::Context;

use pizzeria_shop::{Session, ShopConfig};

fn main() -> anyhow::Result<()> {
    pizzeria_observability::init();

    let config = ShopConfig::default();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(&config, stdin.lock(), stdout.lock())
        .context("failed to open the shop")?;
    let summary = session.run().context("ordering session aborted")?;

    tracing::info!(
        orders_paid = summary.orders_paid,
        revenue = summary.revenue.cents(),
        "shop closed"
    );
    Ok(())
}
