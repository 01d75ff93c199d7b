use std::fmt;

use serde::Serialize;

/// One of the independently fetched page collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Cards,
    Transactions,
    UserData,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Cards, Self::Transactions, Self::UserData];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Transactions => "transactions",
            Self::UserData => "user_data",
        }
    }

    /// Message shown in place of the collection when its fetch fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Cards => "Failed to load debit cards",
            Self::Transactions => "Failed to load transactions",
            Self::UserData => "Failed to load user data",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
