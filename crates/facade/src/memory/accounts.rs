use async_trait::async_trait;

use crate::facades::AccountFacade;
use crate::models::Account;
use crate::result::FacadeResult;

/// Fixed set of accounts, typically loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccounts {
    accounts: Vec<Account>,
}

impl MemoryAccounts {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountFacade for MemoryAccounts {
    async fn find_by_username(&self, username: &str) -> FacadeResult<Account> {
        match self.accounts.iter().find(|account| account.username == username) {
            Some(account) => FacadeResult::ok(account.clone()),
            None => FacadeResult::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_accounts_by_exact_username() {
        let accounts = MemoryAccounts::new(vec![Account {
            id: 1,
            username: "admin".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            roles: vec!["ADMIN".to_string()],
        }]);

        let found = accounts.find_by_username("admin").await.into_data();
        assert_eq!(found.map(|account| account.id), Some(1));

        assert!(accounts.find_by_username("Admin").await.into_data().is_none());
    }
}
