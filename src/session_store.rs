use std::collections::BTreeSet;

use crate::data_types::{FavoriteToggle, Principal};
use crate::errors::CoinError;

/// Session-scoped identity state: the logged-in principal, their
/// favorites, and a local mirror of the coin balance. Rebuilt from the
/// backend on each login; nothing here survives the session.
#[derive(Debug, Default)]
pub struct SessionStore {
    principal: Option<Principal>,
    favorites: BTreeSet<u64>,
    token: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, principal: Principal, token: String, favorites: Vec<u64>) {
        self.favorites = favorites.into_iter().collect();
        self.principal = Some(principal);
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.principal = None;
        self.favorites.clear();
        self.token = None;
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.principal.is_some()
    }

    pub fn favorites(&self) -> &BTreeSet<u64> {
        &self.favorites
    }

    pub fn is_favorite(&self, product_id: u64) -> bool {
        self.favorites.contains(&product_id)
    }

    /// Add if absent, remove if present. Applied locally before any
    /// backend confirmation; the returned direction lets the caller
    /// undo the toggle if persistence fails.
    pub fn toggle_favorite(&mut self, product_id: u64) -> FavoriteToggle {
        if self.favorites.remove(&product_id) {
            FavoriteToggle::Removed
        } else {
            self.favorites.insert(product_id);
            FavoriteToggle::Added
        }
    }

    /// Undo a previously recorded toggle after its background sync failed.
    pub fn revert_favorite(&mut self, product_id: u64, applied: FavoriteToggle) {
        match applied {
            FavoriteToggle::Added => {
                self.favorites.remove(&product_id);
            }
            FavoriteToggle::Removed => {
                self.favorites.insert(product_id);
            }
        }
    }

    pub fn coin_balance(&self) -> u64 {
        self.principal.as_ref().map(|p| p.coins).unwrap_or(0)
    }

    pub fn add_coins(&mut self, amount: u64) -> Result<u64, CoinError> {
        let principal = self.principal.as_mut().ok_or(CoinError::NoSession)?;
        principal.coins = principal.coins.saturating_add(amount);
        Ok(principal.coins)
    }

    /// Refuses the spend when the balance is insufficient; the balance
    /// is never left negative and the guard cannot be bypassed by callers.
    pub fn spend_coins(&mut self, amount: u64) -> Result<u64, CoinError> {
        let principal = self.principal.as_mut().ok_or(CoinError::NoSession)?;
        if amount > principal.coins {
            return Err(CoinError::InsufficientBalance {
                requested: amount,
                balance: principal.coins,
            });
        }
        principal.coins -= amount;
        Ok(principal.coins)
    }

    /// Absolute set, not a delta. Used when the backend ledger answer
    /// replaces the local mirror.
    pub fn set_coins(&mut self, amount: u64) -> Result<u64, CoinError> {
        let principal = self.principal.as_mut().ok_or(CoinError::NoSession)?;
        principal.coins = amount;
        Ok(principal.coins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::Role;

    fn logged_in_store() -> SessionStore {
        let mut store = SessionStore::new();
        store.login(
            Principal {
                id: 1,
                name: "Maria".into(),
                email: "maria@example.com".into(),
                phone: None,
                role: Role::Client,
                coins: 0,
            },
            "token-abc".into(),
            vec![10, 20],
        );
        store
    }

    #[test]
    fn double_toggle_returns_favorites_to_original_membership() {
        let mut store = logged_in_store();
        let before = store.favorites().clone();

        store.toggle_favorite(10);
        store.toggle_favorite(10);
        assert_eq!(store.favorites(), &before);

        store.toggle_favorite(99);
        store.toggle_favorite(99);
        assert_eq!(store.favorites(), &before);
    }

    #[test]
    fn revert_undoes_the_recorded_toggle() {
        let mut store = logged_in_store();

        let applied = store.toggle_favorite(30);
        assert_eq!(applied, FavoriteToggle::Added);
        store.revert_favorite(30, applied);
        assert!(!store.is_favorite(30));

        let applied = store.toggle_favorite(10);
        assert_eq!(applied, FavoriteToggle::Removed);
        store.revert_favorite(10, applied);
        assert!(store.is_favorite(10));
    }

    #[test]
    fn overspend_is_refused_and_balance_unchanged() {
        let mut store = logged_in_store();
        store.add_coins(100).unwrap();

        let err = store.spend_coins(150).unwrap_err();
        assert_eq!(
            err,
            CoinError::InsufficientBalance {
                requested: 150,
                balance: 100
            }
        );
        assert_eq!(store.coin_balance(), 100);

        assert_eq!(store.spend_coins(40).unwrap(), 60);
    }

    #[test]
    fn coin_scenario_add_reject_then_absolute_set() {
        let mut store = logged_in_store();
        assert_eq!(store.coin_balance(), 0);

        store.add_coins(100).unwrap();
        assert_eq!(store.coin_balance(), 100);

        assert!(store.spend_coins(150).is_err());
        assert_eq!(store.coin_balance(), 100);

        store.set_coins(50).unwrap();
        assert_eq!(store.coin_balance(), 50);
    }

    #[test]
    fn coin_mutations_require_a_session() {
        let mut store = SessionStore::new();
        assert_eq!(store.add_coins(5), Err(CoinError::NoSession));
        assert_eq!(store.spend_coins(5), Err(CoinError::NoSession));
        assert_eq!(store.set_coins(5), Err(CoinError::NoSession));
    }

    #[test]
    fn logout_clears_principal_favorites_and_token() {
        let mut store = logged_in_store();
        store.logout();
        assert!(!store.is_logged_in());
        assert!(store.favorites().is_empty());
        assert!(store.token().is_none());
    }
}
