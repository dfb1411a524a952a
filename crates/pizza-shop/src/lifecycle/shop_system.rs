use crate::cart_actor;
use crate::clients::CartClient;
use crate::config::ShopConfig;
use crate::model::CartLimits;
use crate::presenter::Presenter;
use crate::session::ShopSession;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running cart actor and hands out sessions bound to it.
///
/// # Example
///
/// ```rust
/// use pizza_shop::config::ShopConfig;
/// use pizza_shop::lifecycle::ShopSystem;
/// use pizza_shop::presenter::ScriptedPresenter;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = ShopSystem::new(&ShopConfig::default());
///     {
///         let mut session = system.open_session(Arc::new(ScriptedPresenter::default()));
///         session.login("alice").map_err(|e| e.to_string())?;
///     }
///     system.shutdown().await
/// }
/// ```
pub struct ShopSystem {
    /// Client for the cart actor.
    pub cart: CartClient,

    config: ShopConfig,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns the cart actor with the configured row limits.
    pub fn new(config: &ShopConfig) -> Self {
        let (cart_actor, cart) = cart_actor::new();
        let limits = CartLimits {
            max_quantity: config.max_quantity,
        };
        let cart_handle = tokio::spawn(cart_actor.run(limits));

        info!(shop = %config.shop_name, max_quantity = config.max_quantity, "Shop system started");

        Self {
            cart,
            config: config.clone(),
            handles: vec![cart_handle],
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// A new session sharing this system's cart.
    pub fn open_session(&self, presenter: Arc<dyn Presenter>) -> ShopSession {
        ShopSession::new(self.cart.clone(), presenter, &self.config)
    }

    /// Drops the system's client and waits for the actors to stop.
    ///
    /// Every session opened from this system holds a cart client, so drop them first or
    /// this will not return.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system...");
        drop(self.cart);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(format!("Actor task failed: {e}"));
            }
        }

        info!("Shop system shut down");
        Ok(())
    }
}
