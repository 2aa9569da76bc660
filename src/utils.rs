use std::borrow::Borrow;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

pub fn log_error<E: core::fmt::Display>(error: E) -> String {
    log::error!("{error}");
    error.to_string()
}
pub fn timestamp_to_date_string(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .expect("invalid timestamp")
        .date_naive()
        .to_string()
}

/// Shortens a wallet address for display: `0x1f9840…01F984`.
///
/// Strings too short to be worth shortening come back whole.
pub fn truncate_address(addr: &str) -> String {
    const HEAD: usize = 8;
    const TAIL: usize = 6;
    if addr.len() <= HEAD + TAIL + 1 {
        addr.to_owned()
    } else {
        format!("{}…{}", &addr[..HEAD], &addr[addr.len() - TAIL..])
    }
}

// pub type CheapClone<T> = std::sync::Arc<T>;
pub type CheapClone<T> = std::rc::Rc<T>;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl Serialize for CCStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_ref())
    }
}

impl<'de> Deserialize<'de> for CCStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| CCStr(CheapClone::from(s)))
    }
}

impl core::str::FromStr for CCStr {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CCStr(CheapClone::from(s)))
    }
}
impl From<String> for CCStr {
    fn from(value: String) -> Self {
        value.parse().unwrap()
    }
}
impl From<&String> for CCStr {
    fn from(value: &String) -> Self {
        value.parse().unwrap()
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        value.parse().unwrap()
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for CCStr {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_address_keeps_short_strings_whole() {
        assert_eq!(truncate_address("0xdeadbeef"), "0xdeadbeef");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn truncate_address_shortens_long_addresses() {
        let addr = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";
        assert_eq!(truncate_address(addr), "0x1f9840…01F984");
    }

    #[test]
    fn ccstr_round_trips_through_serde() {
        let s = CCStr::from("hello");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"hello\"");
        let back: CCStr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
