use std::{collections::BTreeMap, str::FromStr};

use crate::logic::{errors::Rejection, player::PlayerId};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identity {
    pub user_id: PlayerId,
    pub display_name: String,
}

/// Resolves an opaque token to the identity behind it.
pub trait IdentityVerifier: Send + Sync {
    fn verify(&self, id_token: &str) -> Result<Identity, Rejection>;
}

/// Fixed token table, for the command-line driver and tests.
#[derive(Debug, Default, Clone)]
pub struct TokenTable {
    tokens: BTreeMap<String, Identity>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str, user_id: &str, display_name: &str) {
        self.tokens.insert(
            token.to_string(),
            Identity {
                user_id: PlayerId::from(user_id),
                display_name: display_name.to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl IdentityVerifier for TokenTable {
    fn verify(&self, id_token: &str) -> Result<Identity, Rejection> {
        self.tokens
            .get(id_token)
            .cloned()
            .ok_or(Rejection::Unauthenticated)
    }
}

impl FromIterator<TokenEntry> for TokenTable {
    fn from_iter<I: IntoIterator<Item = TokenEntry>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|entry| (entry.token, entry.identity))
                .collect(),
        }
    }
}

/// `token=user_id:Display Name`, as given on the command line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TokenEntry {
    pub token: String,
    pub identity: Identity,
}

impl FromStr for TokenEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (token, rest) = s
            .split_once('=')
            .ok_or_else(|| format!("expected token=user_id:name, got {:?}", s))?;
        let (user_id, display_name) = rest.split_once(':').unwrap_or((rest, rest));

        if token.is_empty() || user_id.is_empty() {
            return Err(format!("token and user id must not be empty in {:?}", s));
        }

        Ok(TokenEntry {
            token: token.to_string(),
            identity: Identity {
                user_id: PlayerId::from(user_id),
                display_name: display_name.to_string(),
            },
        })
    }
}
