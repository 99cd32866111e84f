use furniture_storefront::cart::AppState;
use furniture_storefront::config::StorefrontConfig;
use furniture_storefront::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default to INFO, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,furniture_storefront=debug")),
        )
        .init();

    let config = StorefrontConfig::from_env()?;

    // Initialize application state
    let state = Arc::new(AppState::new(config.pricing.clone()));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    tracing::info!(addr = %config.bind_addr, "storefront listening");

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use furniture_storefront::cart::helpers::{build_cart_view, update_cart_with_new_items};
    use furniture_storefront::cart::state::AppState;
    use furniture_storefront::pricing::{LineItem, ShippingTier};
    use rust_decimal_macros::dec;

    #[test]
    fn test_state_merge_and_quote() {
        let state = AppState::default();
        let cart_id = "test_cart_1";

        // 1. Initial insert (simulate sync)
        state.carts.insert(
            cart_id.into(),
            vec![LineItem::new("flow-chair-brown", "Flow Side Chair", dec!(62483.00), 1)],
        );

        // 2. Merge more of the same chair plus a lamp
        {
            let mut items = state.carts.get_mut(cart_id).unwrap();
            update_cart_with_new_items(
                &mut items,
                vec![
                    LineItem::new("flow-chair-brown", "Flow Side Chair", dec!(62483.00), 1),
                    LineItem::new("pendant-lamp-black", "Aura Pendant Lamp", dec!(35875.00), 1),
                ],
            );
        }

        // 3. Verify
        let items = state.carts.get(cart_id).unwrap().clone();
        let view =
            build_cart_view(cart_id.into(), items, ShippingTier::Standard, &state.pricing).unwrap();

        assert_eq!(view.items[0].quantity, 2, "chair quantity should aggregate to 2");
        assert_eq!(view.totals.subtotal, dec!(160841.00));
        assert_eq!(view.totals.grand_total, dec!(183358.74));
    }
}
