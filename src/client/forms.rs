//! Write forms with client-side validation. Field values are kept as the
//! raw text the user typed; `validate` reports every violation with the
//! message shown on screen, and a form that fails validation never issues
//! a request.

use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;

/// Account create/edit form. `id` present means edit (PUT), absent means
/// register (POST).
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub bank_account_number: String,
}

impl AccountForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if self.address.trim().is_empty() {
            errors.push("Address is required".to_string());
        }
        let phone = self.phone_number.trim();
        if phone.is_empty() {
            errors.push("Phone number is required".to_string());
        } else if !phone.chars().all(|c| c.is_ascii_digit()) {
            errors.push("Phone must be digits only".to_string());
        }
        let ban = self.bank_account_number.trim();
        if !ban.is_empty() && !matches!(ban.parse::<i64>(), Ok(n) if n > 0) {
            errors.push("Bank account must be a positive integer".to_string());
        }
        errors
    }

    /// JSON body for POST/PUT. An empty bank account field is omitted, so
    /// the server stores NULL rather than a bogus zero.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "name": self.name.trim(),
            "address": self.address.trim(),
            "phoneNumber": self.phone_number.trim(),
        });
        if let Ok(n) = self.bank_account_number.trim().parse::<i64>() {
            payload["bankAccountNumber"] = json!(n);
        }
        payload
    }
}

/// Payment create/edit form. Status is chosen from the three defined codes.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    pub id: Option<i64>,
    pub account_id: i64,
    pub amount: String,
    pub recipient_name: String,
    pub recipient_bank: String,
    pub recipient_ban: String,
    pub status: i64,
    pub notes: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            id: None,
            account_id: 0,
            amount: String::new(),
            recipient_name: String::new(),
            recipient_bank: String::new(),
            recipient_ban: String::new(),
            status: 1,
            notes: String::new(),
        }
    }
}

impl PaymentForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.account_id <= 0 {
            errors.push("Account is required".to_string());
        }
        match Decimal::from_str(self.amount.trim()) {
            Ok(amount) if amount > Decimal::ZERO => {}
            _ => errors.push("Amount must be positive".to_string()),
        }
        if self.recipient_name.trim().is_empty() {
            errors.push("Recipient name is required".to_string());
        }
        if self.recipient_bank.trim().is_empty() {
            errors.push("Recipient bank is required".to_string());
        }
        if self.recipient_ban.trim().parse::<i64>().is_err() {
            errors.push("Recipient BAN must be an integer".to_string());
        }
        if !(1..=3).contains(&self.status) {
            errors.push("Status must be Pending, Approved or Cancelled".to_string());
        }
        errors
    }

    /// JSON body for POST/PUT. Empty notes are omitted so the server
    /// stores NULL.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "accountId": self.account_id,
            "amount": self.amount.trim(),
            "recipientName": self.recipient_name.trim(),
            "recipientBank": self.recipient_bank.trim(),
            "recipientBAN": self.recipient_ban.trim().parse::<i64>().unwrap_or(0),
            "status": self.status,
        });
        let notes = self.notes.trim();
        if !notes.is_empty() {
            payload["notes"] = json!(notes);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_account_form_yields_three_required_messages() {
        let errors = AccountForm::default().validate();
        assert_eq!(
            errors,
            [
                "Name is required",
                "Address is required",
                "Phone number is required",
            ]
        );
    }

    #[test]
    fn phone_must_be_digits_only() {
        let form = AccountForm {
            name: "Foo".to_string(),
            address: "Bar".to_string(),
            phone_number: "12a4".to_string(),
            ..AccountForm::default()
        };
        assert_eq!(form.validate(), ["Phone must be digits only"]);
    }

    #[test]
    fn bank_account_must_be_positive_when_given() {
        let mut form = AccountForm {
            name: "Foo".to_string(),
            address: "Bar".to_string(),
            phone_number: "123".to_string(),
            bank_account_number: "-5".to_string(),
            ..AccountForm::default()
        };
        assert_eq!(form.validate(), ["Bank account must be a positive integer"]);

        form.bank_account_number.clear();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn account_payload_omits_empty_bank_account() {
        let form = AccountForm {
            name: "Foo".to_string(),
            address: "Bar".to_string(),
            phone_number: "123".to_string(),
            ..AccountForm::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload["phoneNumber"], "123");
        assert!(payload.get("bankAccountNumber").is_none());
    }

    #[test]
    fn valid_payment_form_passes() {
        let form = PaymentForm {
            account_id: 1,
            amount: "10.50".to_string(),
            recipient_name: "Alice".to_string(),
            recipient_bank: "First".to_string(),
            recipient_ban: "4242".to_string(),
            status: 2,
            ..PaymentForm::default()
        };
        assert!(form.validate().is_empty());

        let payload = form.to_payload();
        assert_eq!(payload["recipientBAN"], 4242);
        assert!(payload.get("notes").is_none());
    }

    #[test]
    fn payment_form_flags_each_violation() {
        let form = PaymentForm {
            account_id: 0,
            amount: "-3".to_string(),
            recipient_ban: "abc".to_string(),
            status: 7,
            ..PaymentForm::default()
        };
        let errors = form.validate();
        assert!(errors.contains(&"Account is required".to_string()));
        assert!(errors.contains(&"Amount must be positive".to_string()));
        assert!(errors.contains(&"Recipient name is required".to_string()));
        assert!(errors.contains(&"Recipient bank is required".to_string()));
        assert!(errors.contains(&"Recipient BAN must be an integer".to_string()));
        assert!(errors.contains(&"Status must be Pending, Approved or Cancelled".to_string()));
    }
}
