use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error thrown when parsing a [`Coin`] or [`Coins`] string
pub enum CoinError {
    /// The string is not of the `{amount}{denom}` form
    #[error("failed to parse coin: {0:?}")]
    InvalidFormat(String),

    /// The denomination is not a valid denom string
    #[error("invalid denomination: {0:?}")]
    InvalidDenom(String),
}

/// A single coin amount, e.g. `1000000uatom`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "string_amount")]
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Coin { denom: denom.into(), amount }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.find(|c: char| !c.is_ascii_digit());
        let (amount, denom) = match split {
            Some(at) if at > 0 => s.split_at(at),
            _ => return Err(CoinError::InvalidFormat(s.to_string())),
        };
        if !is_valid_denom(denom) {
            return Err(CoinError::InvalidDenom(denom.to_string()));
        }
        let amount = amount
            .parse()
            .map_err(|_| CoinError::InvalidFormat(s.to_string()))?;
        Ok(Coin::new(denom, amount))
    }
}

// Denoms are lowercase alphanumerics with `/` path separators, starting
// with a letter, per the chain's bank module rules.
fn is_valid_denom(denom: &str) -> bool {
    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    (3..=128).contains(&denom.len())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/')
}

/// An ordered collection of coins, canonically sorted by denomination.
///
/// The textual form is comma-separated: `12uatom,500uion`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        let mut coins = coins;
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        Coins(coins)
    }

    pub fn get(&self, denom: &str) -> Option<&Coin> {
        self.0.iter().find(|coin| coin.denom == denom)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Coins(vec![coin])
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Coins::new(coins)
    }
}

impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        Coins::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Coins {
    type Item = Coin;
    type IntoIter = std::vec::IntoIter<Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for coin in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", coin)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = CoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Coins::default());
        }
        s.split(',').map(str::parse).collect()
    }
}

// The chain quotes coin amounts as JSON strings; older nodes emit plain
// integers, so both are accepted on the way in.
mod string_amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrString {
            Int(u64),
            String(String),
        }
        match IntOrString::deserialize(deserializer)? {
            IntOrString::Int(n) => Ok(n.into()),
            IntOrString::String(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coin() {
        let coin = "1000000uatom".parse::<Coin>().unwrap();
        assert_eq!(coin, Coin::new("uatom", 1_000_000));
        assert_eq!(coin.to_string(), "1000000uatom");
    }

    #[test]
    fn rejects_malformed_coins() {
        assert!(matches!("uatom".parse::<Coin>(), Err(CoinError::InvalidFormat(_))));
        assert!(matches!("1000".parse::<Coin>(), Err(CoinError::InvalidFormat(_))));
        assert!(matches!("1000UATOM".parse::<Coin>(), Err(CoinError::InvalidDenom(_))));
        assert!(matches!("1000ua".parse::<Coin>(), Err(CoinError::InvalidDenom(_))));
    }

    #[test]
    fn coins_sort_by_denom() {
        let coins = Coins::new(vec![Coin::new("uion", 500), Coin::new("uatom", 12)]);
        assert_eq!(coins.to_string(), "12uatom,500uion");
    }

    #[test]
    fn coins_parse_round_trip() {
        let coins = "12uatom,500uion".parse::<Coins>().unwrap();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins.get("uion"), Some(&Coin::new("uion", 500)));
        assert_eq!(coins.to_string(), "12uatom,500uion");
        assert_eq!("".parse::<Coins>().unwrap(), Coins::default());
    }

    #[test]
    fn amount_serializes_as_string() {
        let json = serde_json::to_value(Coin::new("uatom", 7)).unwrap();
        assert_eq!(json["amount"], "7");
        let coin: Coin = serde_json::from_str(r#"{"denom":"uatom","amount":42}"#).unwrap();
        assert_eq!(coin.amount, 42);
    }
}
