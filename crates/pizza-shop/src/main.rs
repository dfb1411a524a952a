//! Demo binary: loads config, shows startup progress, then places one order.
//!
//! Set `PIZZA_SHOP_CONFIG` to a TOML file to override the defaults, or
//! `PIZZA_SHOP_AUTO_CONFIRM=true` to answer every prompt with yes.

use order_framework::tracing::setup_tracing;
use pizza_shop::config::{load_config, load_from_env, CONFIG_PATH_VAR};
use pizza_shop::lifecycle::{show_splash, ShopSystem};
use pizza_shop::mediator::OrderOutcome;
use pizza_shop::model::{PizzaSize, CHICKEN_PIZZA, VEGGIE_PIZZA};
use pizza_shop::presenter::ConsolePresenter;
use pizza_shop::session::PizzaSelection;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_config(&path),
        Err(_) => load_from_env(),
    }
    .map_err(|e| e.to_string())?;

    info!(shop = %config.shop_name, "Starting pizza shop");

    show_splash(config.splash_tick(), |value| {
        if value % 25 == 0 {
            info!(progress = value, "Loading");
        }
    })
    .await;

    let system = ShopSystem::new(&config);
    let presenter = Arc::new(ConsolePresenter::new(config.auto_confirm));

    let span = tracing::info_span!("order_session");
    let outcome = async {
        let mut session = system.open_session(presenter);
        session.login("Guest").map_err(|e| e.to_string())?;

        let classic = session
            .add_pizza(PizzaSelection::new(CHICKEN_PIZZA.name).quantity(2))
            .await
            .map_err(|e| e.to_string())?;
        println!("{}\n", classic.summary());

        let custom = session
            .add_pizza(
                PizzaSelection::new(VEGGIE_PIZZA.name)
                    .size(PizzaSize::Large)
                    .extra("Mushrooms")
                    .extra("Onions"),
            )
            .await
            .map_err(|e| e.to_string())?;
        println!("{}\n", custom.summary());

        session.submit().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    match outcome {
        OrderOutcome::Delivered(report) => {
            info!(steps = report.completed.len(), "Order delivered")
        }
        OrderOutcome::Cancelled => info!("Order cancelled"),
        OrderOutcome::Aborted(e) => error!(error = %e, "Order aborted"),
    }

    system.shutdown().await?;

    info!("Pizza shop closed");
    Ok(())
}
