use crate::error::PageError;
use crate::model::PriceCard;
use regex::Regex;

/// Parses one price-card text into its currency symbol and amount.
/// Examples: "€ 90", "$ 1,200.50"
pub fn parse_price_card(text: &str) -> Result<PriceCard, PageError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(PageError::Parse {
            what: "price card",
            text: text.to_string(),
        });
    }

    let symbol = tokens[0];
    // Thousands separators are display sugar, stripped before comparison
    let cleaned = tokens[1].replace(',', "");

    let re = Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").map_err(|e| PageError::Parse {
        what: "price pattern",
        text: e.to_string(),
    })?;
    if !re.is_match(&cleaned) {
        return Err(PageError::Parse {
            what: "price amount",
            text: tokens[1].to_string(),
        });
    }

    let amount = cleaned.parse::<f64>().map_err(|_| PageError::Parse {
        what: "price amount",
        text: tokens[1].to_string(),
    })?;

    Ok(PriceCard {
        symbol: symbol.to_string(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_card() {
        let card = parse_price_card("€ 90").unwrap();
        assert_eq!(card.symbol, "€");
        assert_eq!(card.amount, 90.0);
    }

    #[test]
    fn test_parse_thousands_separator() {
        let card = parse_price_card("$ 1,200.50").unwrap();
        assert_eq!(card.symbol, "$");
        assert_eq!(card.amount, 1200.50);

        let card = parse_price_card("$ 12,345").unwrap();
        assert_eq!(card.amount, 12345.0);
    }

    #[test]
    fn test_parse_decimal_card() {
        let card = parse_price_card("€ 0.99").unwrap();
        assert_eq!(card.amount, 0.99);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_price_card("").is_err());
        assert!(parse_price_card("€").is_err());
        assert!(parse_price_card("€ 90 /month").is_err());
        assert!(parse_price_card("€ ninety").is_err());
        assert!(parse_price_card("€ 9.").is_err());
    }
}
