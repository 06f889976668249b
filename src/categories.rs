//! Mapping from merchant category codes (MCC) to expense accounts.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Account used when the MCC is absent or not in the table.
pub const UNCATEGORIZED: &str = "Expense:Uncategorized";

/// Read-only lookup from an MCC to an expense account name. The production
/// table is [`MccTable`]; tests substitute their own.
pub trait CategoryLookup {
    /// Returns the account for the given code, or `None` if the code is
    /// unknown. Resolution never fails; callers fall back to
    /// [`UNCATEGORIZED`].
    fn lookup(&self, mcc: &str) -> Option<&str>;
}

/// The built-in table of MCC assignments.
pub struct MccTable;

impl CategoryLookup for MccTable {
    fn lookup(&self, mcc: &str) -> Option<&str> {
        MCC_EXPENSE_CATEGORIES.get(mcc).copied()
    }
}

lazy_static! {
    static ref MCC_EXPENSE_CATEGORIES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("4111", "Expense:Transport");
        m.insert("4121", "Expense:Transport:Taxi");
        m.insert("4511", "Expense:Travel:Flights");
        m.insert("4722", "Expense:Travel");
        m.insert("4814", "Expense:Utilities:Phone");
        m.insert("4899", "Expense:Utilities:Media");
        m.insert("4900", "Expense:Utilities");
        m.insert("5211", "Expense:Home:Improvement");
        m.insert("5311", "Expense:Shopping");
        m.insert("5411", "Expense:Groceries");
        m.insert("5462", "Expense:Groceries:Bakery");
        m.insert("5499", "Expense:Groceries");
        m.insert("5541", "Expense:Auto:Fuel");
        m.insert("5651", "Expense:Clothing");
        m.insert("5661", "Expense:Clothing:Shoes");
        m.insert("5691", "Expense:Clothing");
        m.insert("5712", "Expense:Home:Furniture");
        m.insert("5732", "Expense:Electronics");
        m.insert("5811", "Expense:Restaurants:Catering");
        m.insert("5812", "Expense:Restaurants");
        m.insert("5813", "Expense:Restaurants:Bars");
        m.insert("5814", "Expense:Restaurants:FastFood");
        m.insert("5912", "Expense:Health:Pharmacy");
        m.insert("5921", "Expense:Groceries:Alcohol");
        m.insert("5941", "Expense:Sports");
        m.insert("5942", "Expense:Books");
        m.insert("5999", "Expense:Shopping");
        m.insert("6300", "Expense:Insurance");
        m.insert("7011", "Expense:Travel:Lodging");
        m.insert("7230", "Expense:Personal:Grooming");
        m.insert("7832", "Expense:Entertainment:Movies");
        m.insert("7997", "Expense:Health:Fitness");
        m.insert("8011", "Expense:Health:Medical");
        m.insert("8021", "Expense:Health:Dental");
        m.insert("8062", "Expense:Health:Medical");
        m.insert("8211", "Expense:Education");
        m.insert("8220", "Expense:Education");
        m.insert("8398", "Expense:Charity");
        m.insert("9399", "Expense:Government");
        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_maps_to_account() {
        assert_eq!(Some("Expense:Restaurants"), MccTable.lookup("5812"));
        assert_eq!(Some("Expense:Groceries"), MccTable.lookup("5411"));
    }

    #[test]
    fn unknown_code_maps_to_none() {
        assert_eq!(None, MccTable.lookup("0000"));
        assert_eq!(None, MccTable.lookup(""));
    }
}
