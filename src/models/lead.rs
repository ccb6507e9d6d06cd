use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{LeadStore, StorageError};

const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number needs at least 7 digits")]
    InvalidPhone,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LeadForm {
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(LeadError::InvalidEmail);
        }
        let phone = self.phone.trim();
        if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
            return Err(LeadError::InvalidPhone);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Validates the form and appends one new record to `store`. The id is the
/// capture time in milliseconds, bumped past any id already stored.
pub fn capture_lead<S: LeadStore + ?Sized>(
    store: &S,
    form: &LeadForm,
    now: DateTime<Utc>,
) -> Result<LeadRecord, LeadError> {
    form.validate()?;

    let existing = store.load()?;
    let mut stamp = now.timestamp_millis();
    while existing.iter().any(|lead| lead.id == stamp.to_string()) {
        stamp += 1;
    }

    let record = LeadRecord {
        id: stamp.to_string(),
        name: form.name.trim().to_string(),
        email: form.email.trim().to_lowercase(),
        phone: form.phone.trim().to_string(),
        timestamp: now,
    };

    store.append(record.clone())?;
    log::info!("Captured lead {}", record.id);
    Ok(record)
}
