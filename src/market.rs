use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::{CCStr, CheapClone};

/// USDC amount in micro-units (6 decimals).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(u64);

const MICRO_PER_TOKEN: u64 = 1_000_000;

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub fn from_micro(micro: u64) -> Self {
        Self(micro)
    }
    pub fn micro(self) -> u64 {
        self.0
    }
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl core::str::FromStr for TokenAmount {
    type Err = CCStr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CCStr::from("Amount is required"));
        }
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(CCStr::from("Invalid amount"));
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CCStr::from("Amount must be a positive number"));
        }
        if frac_part.len() > 6 {
            return Err(CCStr::from("USDC amounts have at most 6 decimal places"));
        }
        let int: u64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| CCStr::from("Amount is too large"))?
        };
        let frac: u64 = if frac_part.is_empty() {
            0
        } else {
            // Right-pad to micro-units: "5" → 500_000
            frac_part.parse::<u64>().expect("digits checked above")
                * 10u64.pow(6 - frac_part.len() as u32)
        };
        int.checked_mul(MICRO_PER_TOKEN)
            .and_then(|m| m.checked_add(frac))
            .map(Self)
            .ok_or_else(|| CCStr::from("Amount is too large"))
    }
}

impl core::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let int = self.0 / MICRO_PER_TOKEN;
        let frac = self.0 % MICRO_PER_TOKEN;
        if frac == 0 {
            write!(f, "{int}")
        } else {
            let frac = format!("{frac:06}");
            write!(f, "{int}.{}", frac.trim_end_matches('0'))
        }
    }
}

/// Price of one USDC, in basis points of a dollar (10_000 = $1.0000).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UsdPrice(u32);

impl UsdPrice {
    pub const PAR: UsdPrice = UsdPrice(10_000);

    pub fn from_bps(bps: u32) -> Self {
        Self(bps)
    }
    pub fn bps(self) -> u32 {
        self.0
    }

    /// Dollar cost of `amount` at this price, in cents, rounded up.
    pub fn cost(self, amount: TokenAmount) -> UsdCents {
        // micro-USDC × bps / 1e8 = cents
        let num = amount.micro() as u128 * self.0 as u128;
        UsdCents(num.div_ceil(100_000_000) as u64)
    }
}

impl core::str::FromStr for UsdPrice {
    type Err = CCStr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CCStr::from("Price is required"));
        }
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty()
            || !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CCStr::from("Price must be a positive number"));
        }
        if frac_part.len() > 4 {
            return Err(CCStr::from("Prices have at most 4 decimal places"));
        }
        let int: u32 = int_part
            .parse()
            .map_err(|_| CCStr::from("Price is too large"))?;
        let frac: u32 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse::<u32>().expect("digits checked above")
                * 10u32.pow(4 - frac_part.len() as u32)
        };
        int.checked_mul(10_000)
            .and_then(|b| b.checked_add(frac))
            .map(Self)
            .ok_or_else(|| CCStr::from("Price is too large"))
    }
}

impl core::fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:04}", self.0 / 10_000, self.0 % 10_000)
    }
}

/// A dollar amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UsdCents(u64);

impl UsdCents {
    pub fn cents(self) -> u64 {
        self.0
    }
}
impl core::fmt::Display for UsdCents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A registered liquidity deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: Uuid,
    pub venmo_handle: CCStr,
    pub remaining: TokenAmount,
    pub price: UsdPrice,
    pub created_at: DateTime<Utc>,
}

impl Deposit {
    pub fn new(venmo_handle: impl Into<CCStr>, remaining: TokenAmount, price: UsdPrice) -> Self {
        Self {
            id: Uuid::new_v4(),
            venmo_handle: venmo_handle.into(),
            remaining,
            price,
            created_at: Utc::now(),
        }
    }
}

/// A requested amount matched against the deposit book.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub deposit_id: Uuid,
    pub venmo_handle: CCStr,
    pub amount: TokenAmount,
    pub price: UsdPrice,
    pub cost: UsdCents,
}

/// Matches `requested` against the deposit offering the lowest price with
/// enough remaining liquidity. Price ties go to the older deposit.
pub fn best_quote(deposits: &[CheapClone<Deposit>], requested: TokenAmount) -> Option<Quote> {
    if requested.is_zero() {
        return None;
    }
    deposits
        .iter()
        .filter(|d| d.remaining >= requested)
        .min_by_key(|d| (d.price, d.created_at))
        .map(|d| Quote {
            deposit_id: d.id,
            venmo_handle: d.venmo_handle.clone(),
            amount: requested,
            price: d.price,
            cost: d.price.cost(requested),
        })
}

static VENMO_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?[A-Za-z0-9][A-Za-z0-9_-]{4,29}$").unwrap());
static WALLET_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

pub fn is_valid_venmo_handle(handle: &str) -> bool {
    VENMO_HANDLE_RE.is_match(handle)
}

pub fn is_valid_wallet_address(addr: &str) -> bool {
    WALLET_ADDRESS_RE.is_match(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit(handle: &str, remaining: &str, price: &str) -> CheapClone<Deposit> {
        CheapClone::new(Deposit::new(
            handle,
            remaining.parse().unwrap(),
            price.parse().unwrap(),
        ))
    }

    #[test]
    fn token_amount_parses_decimals() {
        assert_eq!("25".parse::<TokenAmount>().unwrap().micro(), 25_000_000);
        assert_eq!("0.5".parse::<TokenAmount>().unwrap().micro(), 500_000);
        assert_eq!(
            "1234.000001".parse::<TokenAmount>().unwrap().micro(),
            1_234_000_001
        );
        assert_eq!(".25".parse::<TokenAmount>().unwrap().micro(), 250_000);
    }

    #[test]
    fn token_amount_rejects_garbage() {
        assert!("".parse::<TokenAmount>().is_err());
        assert!(".".parse::<TokenAmount>().is_err());
        assert!("-5".parse::<TokenAmount>().is_err());
        assert!("12a".parse::<TokenAmount>().is_err());
        assert!("1.2345678".parse::<TokenAmount>().is_err());
        assert!("99999999999999999999".parse::<TokenAmount>().is_err());
    }

    #[test]
    fn token_amount_display_trims_trailing_zeros() {
        assert_eq!(TokenAmount::from_micro(25_000_000).to_string(), "25");
        assert_eq!(TokenAmount::from_micro(500_000).to_string(), "0.5");
        assert_eq!(TokenAmount::from_micro(1_000_001).to_string(), "1.000001");
    }

    #[test]
    fn price_parses_and_displays() {
        assert_eq!("1.003".parse::<UsdPrice>().unwrap().bps(), 10_030);
        assert_eq!("1".parse::<UsdPrice>().unwrap(), UsdPrice::PAR);
        assert!("1.00305".parse::<UsdPrice>().is_err());
        assert!(".5".parse::<UsdPrice>().is_err());
        assert_eq!(UsdPrice::from_bps(10_030).to_string(), "1.0030");
    }

    #[test]
    fn cost_rounds_up_to_the_cent() {
        // 10 USDC at $1.0030 = $10.03
        let amount: TokenAmount = "10".parse().unwrap();
        assert_eq!(UsdPrice::from_bps(10_030).cost(amount).cents(), 1003);
        // 0.001 USDC at par rounds up to one cent
        let dust: TokenAmount = "0.001".parse().unwrap();
        assert_eq!(UsdPrice::PAR.cost(dust).cents(), 1);
    }

    #[test]
    fn best_quote_picks_lowest_price_with_capacity() {
        let deposits = vec![
            deposit("@alice", "100", "1.01"),
            deposit("@bob", "100", "1.002"),
            deposit("@carol", "5", "1.0001"),
        ];
        // Carol is cheapest but cannot fill 50 USDC
        let q = best_quote(&deposits, "50".parse().unwrap()).unwrap();
        assert_eq!(q.venmo_handle, CCStr::from("@bob"));
        assert_eq!(q.cost.cents(), 5010);
        // A small request lands on Carol
        let q = best_quote(&deposits, "2".parse().unwrap()).unwrap();
        assert_eq!(q.venmo_handle, CCStr::from("@carol"));
    }

    #[test]
    fn best_quote_is_none_without_liquidity() {
        let deposits = vec![deposit("@alice", "10", "1.01")];
        assert!(best_quote(&deposits, "11".parse().unwrap()).is_none());
        assert!(best_quote(&deposits, TokenAmount::ZERO).is_none());
        assert!(best_quote(&[], "1".parse().unwrap()).is_none());
    }

    #[test]
    fn venmo_handle_format() {
        assert!(is_valid_venmo_handle("@alice-pays"));
        assert!(is_valid_venmo_handle("alice_pays"));
        assert!(!is_valid_venmo_handle("@abc"));
        assert!(!is_valid_venmo_handle("@has spaces"));
        assert!(!is_valid_venmo_handle(""));
    }

    #[test]
    fn wallet_address_format() {
        assert!(is_valid_wallet_address(
            "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984"
        ));
        assert!(!is_valid_wallet_address("1f9840a85d5aF5bf1D1762F925BDADdC4201F984"));
        assert!(!is_valid_wallet_address("0x1234"));
        assert!(!is_valid_wallet_address("0xZZ9840a85d5aF5bf1D1762F925BDADdC4201F984"));
    }
}
