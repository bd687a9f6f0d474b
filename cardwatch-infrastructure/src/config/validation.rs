use anyhow::{anyhow, Result};

/// Table names are spliced into SQL, so only plain identifiers with an
/// optional `database.` qualifier pass.
pub fn validate_table_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("transactions_table is empty"));
    }
    if value.split('.').count() > 2 {
        return Err(anyhow!("transactions_table must be table or database.table"));
    }
    for part in value.split('.') {
        if part.is_empty() {
            return Err(anyhow!("transactions_table has an empty segment"));
        }
        if part.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(anyhow!("transactions_table segment starts with a digit"));
        }
        if !part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(anyhow!("transactions_table contains invalid characters"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_qualified_names() {
        assert!(validate_table_name("creditcard_transactions").is_ok());
        assert!(validate_table_name("cc_fins.CREDITCARD_TRANSACTIONS").is_ok());
    }

    #[test]
    fn rejects_injection_and_malformed_names() {
        for name in ["", "a.b.c", "t; DROP TABLE t", "db.", "1table", "t-1"] {
            assert!(validate_table_name(name).is_err(), "{name:?}");
        }
    }
}
