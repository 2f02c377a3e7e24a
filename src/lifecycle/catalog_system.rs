use crate::clients::CategoryClient;
use crate::lifecycle::Config;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running store actor and hands out the client the HTTP layer uses.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&Config::default());
/// let app = catalog_api::api::router(system.category_client.clone());
/// // ... serve until shutdown ...
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub category_client: CategoryClient,
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the Category actor. Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (category_actor, category_client) =
            crate::category_actor::new(config.channel_capacity);
        let category_handle = tokio::spawn(category_actor.run(()));

        Self {
            category_client,
            handles: vec![category_handle],
        }
    }

    /// Drops this system's client and waits for the actor to drain and exit.
    ///
    /// Clones of the client held elsewhere (e.g. by a router) keep the actor alive, so drop
    /// those first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog...");
        drop(self.category_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
