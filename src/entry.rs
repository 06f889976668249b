use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Indent applied to comment and posting lines within an entry.
const MARGIN: &str = "    ";

/// A single ledger journal entry: a date/payee header, comment annotations,
/// and posting lines.
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub payee: String,
    /// Annotation lines, without the leading "; " marker.
    pub comments: Vec<String>,
    pub postings: Vec<Posting>,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} * {}", self.date.format("%Y-%m-%d"), self.payee)?;
        for comment in &self.comments {
            write!(f, "\n{}; {}", MARGIN, comment)?;
        }
        for posting in &self.postings {
            write!(f, "\n{}{}", MARGIN, posting)?;
        }
        Ok(())
    }
}

/// One account line of an entry. The amount is elided on the balancing
/// posting.
pub struct Posting {
    pub account: String,
    pub amount: Option<Amount>,
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.amount {
            Some(amount) => write!(f, "{}  {}", self.account, amount),
            None => f.write_str(&self.account),
        }
    }
}

/// A quantity of some currency. Displays with exactly two decimal places
/// followed by the currency label verbatim.
pub struct Amount {
    pub quantity: Decimal,
    pub currency: String,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.2} {}", self.quantity, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn amount(quantity: Decimal) -> Amount {
        Amount {
            quantity,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn amount_display() {
        let tests: Vec<(Decimal, &'static str)> = vec![
            (Decimal::new(0, 0), "0.00 USD"),
            (Decimal::new(125, 1), "12.50 USD"),
            (Decimal::new(4250, 2), "42.50 USD"),
            (Decimal::new(1, 0), "1.00 USD"),
            (Decimal::new(5, 1), "0.50 USD"),
            (Decimal::new(-310, 2), "-3.10 USD"),
        ];
        for (quantity, want) in tests {
            let got = format!("{}", amount(quantity));
            assert_eq!(want, got);
        }
    }

    #[test]
    fn amount_display_keeps_currency_verbatim() {
        let got = format!(
            "{}",
            Amount {
                quantity: Decimal::new(100, 1),
                currency: "₪".to_string(),
            }
        );
        assert_eq!("10.00 ₪", got);
    }

    #[test]
    fn entry_display() {
        let entry = LedgerEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            payee: "ACME Store".to_string(),
            comments: vec!["Transaction ID: T1".to_string(), "Refund".to_string()],
            postings: vec![
                Posting {
                    account: "Expense:Restaurants".to_string(),
                    amount: Some(amount(Decimal::new(4250, 2))),
                },
                Posting {
                    account: "Liabilities:CreditCard:Cal:1234".to_string(),
                    amount: None,
                },
            ],
        };

        let want = textwrap::dedent(
            "
            2024-03-01 * ACME Store
                ; Transaction ID: T1
                ; Refund
                Expense:Restaurants  42.50 USD
                Liabilities:CreditCard:Cal:1234",
        );
        assert_eq!(want.trim_start(), format!("{}", entry));
    }

    #[test]
    fn entry_display_without_comments() {
        let entry = LedgerEntry {
            date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            payee: "Some Merchant".to_string(),
            comments: Vec::new(),
            postings: vec![
                Posting {
                    account: "Expense:Uncategorized".to_string(),
                    amount: Some(amount(Decimal::new(100, 0))),
                },
                Posting {
                    account: "Liabilities:CreditCard:Cal:9".to_string(),
                    amount: None,
                },
            ],
        };

        let want = textwrap::dedent(
            "
            2023-12-31 * Some Merchant
                Expense:Uncategorized  100.00 USD
                Liabilities:CreditCard:Cal:9",
        );
        assert_eq!(want.trim_start(), format!("{}", entry));
    }
}
