//! Converts a transaction export from Cal (cal-online.co.il) to Ledger
//! entries.
//!
//! The input is the JSON document served by the card issuer's transaction
//! search API, shaped as `{"result": {"transArr": [...]}}`. Each transaction
//! becomes one entry: a date/merchant header, annotation comments drawn from
//! the optional fields, an expense posting categorized by MCC, and a
//! balancing posting against the card's liability account.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use itertools::Itertools;
use log::debug;

use crate::categories::{CategoryLookup, UNCATEGORIZED};
use crate::entry::{Amount, LedgerEntry, Posting};
use crate::importers::ImportError;
use crate::textutil::normalize_whitespace;

/// Account that every entry balances against, suffixed with the card's
/// unique identifier.
const LIABILITY_ACCOUNT_PREFIX: &str = "Liabilities:CreditCard:Cal";

/// Converts a whole export document to ledger entry text: one entry per
/// transaction, in array order, separated by blank lines.
///
/// The conversion is all or nothing. The first transaction that fails a
/// required-field check aborts the document and no output is produced.
pub fn convert_document(
    json: &str,
    categories: &dyn CategoryLookup,
) -> Result<String, ImportError> {
    let export: de::Export = serde_json::from_str(json)?;
    let transactions = export
        .result
        .ok_or_else(|| ImportError::missing_field("result"))?
        .trans_arr
        .ok_or_else(|| ImportError::missing_field("result.transArr"))?;
    debug!("export contains {} transactions", transactions.len());

    let entries: Vec<LedgerEntry> = transactions
        .iter()
        .map(|record| form_entry(record, categories))
        .collect::<Result<_, _>>()?;

    Ok(entries.iter().join("\n\n"))
}

/// Forms the ledger entry for a single transaction record.
fn form_entry(
    record: &de::Record,
    categories: &dyn CategoryLookup,
) -> Result<LedgerEntry, ImportError> {
    let date = purchase_date(record)?;
    let card_id = require_str(&record.card_unique_id, "cardUniqueId")?;
    let payee = normalize_whitespace(require_str(&record.merchant_name, "merchantName")?);

    let mcc = record.international_branch_id.as_deref().unwrap_or("");
    let category = categories.lookup(mcc).unwrap_or(UNCATEGORIZED);

    let quantity = record
        .amount_for_display
        .ok_or_else(|| ImportError::missing_field("amountForDisplay"))?;
    let currency = require_str(&record.currency_for_display, "currencyForDisplay")?;

    let comments = metadata_comments(record)?;

    Ok(LedgerEntry {
        date,
        payee,
        comments,
        postings: vec![
            Posting {
                account: category.to_string(),
                amount: Some(Amount {
                    quantity,
                    currency: currency.to_string(),
                }),
            },
            Posting {
                account: format!("{}:{}", LIABILITY_ACCOUNT_PREFIX, card_id),
                amount: None,
            },
        ],
    })
}

/// Parses the purchase timestamp and keeps the date portion. The export
/// carries ISO 8601 date times without an offset, but offset and date-only
/// forms are accepted too; time of day and offset are discarded.
fn purchase_date(record: &de::Record) -> Result<NaiveDate, ImportError> {
    let raw = record
        .trn_purchase_date
        .as_deref()
        .ok_or_else(|| ImportError::missing_field("trnPurchaseDate"))?;
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }
    raw.parse::<NaiveDate>()
        .map_err(|err| ImportError::MalformedValue {
            field: "trnPurchaseDate",
            reason: err.to_string(),
        })
}

/// Builds the annotation lines for a transaction, in a fixed order. Each
/// line is optional on its own; string fields contribute only when present
/// and non-empty. The card present indicator is the exception: an explicit
/// `false` still produces a line.
fn metadata_comments(record: &de::Record) -> Result<Vec<String>, ImportError> {
    let mut comments = Vec::new();

    if let Some(id) = present(&record.trn_int_id) {
        comments.push(format!("Transaction ID: {}", id));
    }
    if let Some(address) = present(&record.merchant_address) {
        comments.push(format!("Address: {}", normalize_whitespace(address)));
    }
    if let Some(phone) = present(&record.merchant_phone_no) {
        comments.push(format!("Phone: {}", phone));
    }
    if let Some(id) = present(&record.merchant_id) {
        comments.push(format!("Merchant ID: {}", id));
    }
    if let Some(card_present) = record.trans_card_present_ind {
        comments.push(format!(
            "Card Present: {}",
            if card_present { "Yes" } else { "No" }
        ));
    }
    if let Some(trn_type) = present(&record.trn_type) {
        comments.push(format!("Transaction Type: {}", trn_type));
    }
    if let Some(mcc) = present(&record.international_branch_id) {
        comments.push(format!("MCC: {}", mcc));
    }
    if let Some(total) = record.num_of_payments.filter(|&n| n > 0) {
        // The export promises a current payment number whenever a positive
        // payment total is present; hold it to that.
        let current = record
            .cur_payment_num
            .ok_or_else(|| ImportError::missing_field("curPaymentNum"))?;
        comments.push(format!("Payment {} of {}", current, total));
    }
    if record.is_abroad_transaction.unwrap_or(false) {
        comments.push("Foreign Transaction".to_string());
    }
    if record.refund_ind.unwrap_or(false) {
        comments.push("Refund".to_string());
    }
    if let Some(notes) = &record.comments {
        // The whole record is serialized, not just a chosen field;
        // downstream tooling reads the full structure.
        for note in notes {
            comments.push(format!("Comment: {}", normalize_whitespace(&note.to_string())));
        }
    }

    Ok(comments)
}

fn require_str<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ImportError> {
    value
        .as_deref()
        .ok_or_else(|| ImportError::missing_field(field))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

mod de {
    use rust_decimal::Decimal;
    use serde_derive::Deserialize;
    use serde_json::Value;

    /// The envelope the card issuer wraps search results in.
    #[derive(Debug, Deserialize)]
    pub struct Export {
        pub result: Option<ExportResult>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExportResult {
        pub trans_arr: Option<Vec<Record>>,
    }

    /// One transaction from the export. Every field is optional at this
    /// level and unknown fields are ignored (the upstream record carries
    /// dozens more); required fields are enforced when the entry is formed,
    /// so that the failure names the offending field.
    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Record {
        pub trn_int_id: Option<String>,
        pub card_unique_id: Option<String>,
        pub merchant_name: Option<String>,
        pub amount_for_display: Option<Decimal>,
        pub currency_for_display: Option<String>,
        pub trn_purchase_date: Option<String>,
        pub merchant_address: Option<String>,
        pub merchant_phone_no: Option<String>,
        pub merchant_id: Option<String>,
        pub trans_card_present_ind: Option<bool>,
        pub trn_type: Option<String>,
        #[serde(rename = "internationalBranchID")]
        pub international_branch_id: Option<String>,
        pub cur_payment_num: Option<i64>,
        pub num_of_payments: Option<i64>,
        pub is_abroad_transaction: Option<bool>,
        pub refund_ind: Option<bool>,
        pub comments: Option<Vec<Value>>,
    }
}
