use crate::api_backend::ApiClient;
use crate::errors::{ApiError, CoinError};
use crate::session_store::SessionStore;

pub fn logger_init(module_path: &str, verbose: bool) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(
            module_path,
            if verbose
                || std::env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV)
                    .unwrap_or_default()
                    == "debug"
            {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Coins(#[from] CoinError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Optimistic favorites toggle: flip locally for immediate UI feedback,
/// then persist. A failed persistence rolls the local flip back so the
/// mirror never silently diverges from the backend.
pub async fn toggle_favorite_synced(
    store: &mut SessionStore,
    api: &ApiClient,
    product_id: u64,
) -> Result<(), SyncError> {
    let applied = store.toggle_favorite(product_id);

    if let Err(e) = api.toggle_favorite(product_id).await {
        store.revert_favorite(product_id, applied);
        log::warn!("favorite toggle for product {} not persisted: {}", product_id, e);
        return Err(e.into());
    }
    Ok(())
}

/// Spend coins locally (the store refuses overspends), persist the spend
/// to the backend ledger, and reconcile the mirror with the ledger's
/// answer. A failed request restores the spent amount.
pub async fn spend_coins_synced(
    store: &mut SessionStore,
    api: &ApiClient,
    amount: u64,
) -> Result<u64, SyncError> {
    store.spend_coins(amount)?;

    match api.spend_coins(amount).await {
        Ok(ledger_balance) => {
            let balance = store.set_coins(ledger_balance)?;
            Ok(balance)
        }
        Err(e) => {
            store.add_coins(amount)?;
            log::warn!("coin spend of {} not persisted: {}", amount, e);
            Err(e.into())
        }
    }
}
