use std::fmt;

/// Currency offered by the configurator's left/right switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Eur,
    Usd,
}

impl Currency {
    /// Display symbol shown on every price card for this currency.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

/// Server category tabs above the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    Dedicated,
    Virtual,
}

impl ServerKind {
    /// Position of this tab in the page's button list.
    pub fn button_index(&self) -> usize {
        match self {
            ServerKind::Dedicated => 3,
            ServerKind::Virtual => 4,
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerKind::Dedicated => write!(f, "dedicated"),
            ServerKind::Virtual => write!(f, "virtual"),
        }
    }
}

/// Price bounds of the configurator, read from the input placeholders at
/// page load. `min <= max` is assumed, not enforced here: rejecting values
/// outside the range is the page's job and exactly what the suite checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// Whether the page should accept `candidate` as the new minimum.
    pub fn min_accepts(&self, candidate: i64) -> bool {
        candidate >= self.min
    }

    /// Whether the page should accept `candidate` as the new maximum.
    pub fn max_accepts(&self, candidate: i64) -> bool {
        candidate <= self.max
    }

    pub fn contains(&self, amount: f64) -> bool {
        self.min as f64 <= amount && amount <= self.max as f64
    }
}

/// One rendered price card, parsed fresh from its text on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCard {
    pub symbol: String,
    pub amount: f64,
}

/// Result of probing the "Out of range" validation message.
///
/// `Unknown` keeps a driver fault apart from a genuinely absent indicator:
/// an absent message on a healthy page means the input was accepted, while
/// a page that failed to render proves nothing either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeIndicator {
    InRange,
    OutOfRange,
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Usd.symbol(), "$");
    }

    #[test]
    fn test_bounds_min_rule() {
        let bounds = Bounds { min: 1, max: 100 };
        assert!(bounds.min_accepts(1));
        assert!(bounds.min_accepts(11));
        assert!(!bounds.min_accepts(0));
    }

    #[test]
    fn test_bounds_max_rule() {
        let bounds = Bounds { min: 1, max: 100 };
        assert!(bounds.max_accepts(100));
        assert!(bounds.max_accepts(90));
        assert!(!bounds.max_accepts(101));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds { min: 11, max: 90 };
        assert!(bounds.contains(11.0));
        assert!(bounds.contains(45.5));
        assert!(bounds.contains(90.0));
        assert!(!bounds.contains(10.99));
        assert!(!bounds.contains(90.01));
    }
}
