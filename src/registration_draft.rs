use std::collections::BTreeSet;

use regex_lite::Regex;
use serde::Serialize;
use static_init::dynamic;

use crate::constants::MIN_PASSWORD_LEN;
use crate::errors::DraftError;

fn is_valid_email(email: &str) -> bool {
    #[dynamic]
    static EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegistrationStep {
    Company,
    Interests,
    Credentials,
}

/// Accumulates signup answers across the registration steps before the
/// single final submission. Discarded after a successful submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
    pub interests: BTreeSet<u32>,
    pub password: String,
}

/// Payload for the backend's register endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegistrationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_name: String,
    pub interests: Vec<u32>,
    pub password: String,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the category id if absent, remove it if present.
    pub fn toggle_interest(&mut self, category_id: u32) {
        if !self.interests.remove(&category_id) {
            self.interests.insert(category_id);
        }
    }

    pub fn step_complete(&self, step: RegistrationStep) -> bool {
        self.check_step(step).is_ok()
    }

    fn check_step(&self, step: RegistrationStep) -> Result<(), DraftError> {
        match step {
            RegistrationStep::Company => {
                if self.first_name.trim().is_empty()
                    || self.last_name.trim().is_empty()
                    || self.company_name.trim().is_empty()
                    || self.address.trim().is_empty()
                {
                    return Err(DraftError::CompanyIncomplete);
                }
            }
            RegistrationStep::Interests => {
                if self.interests.is_empty() {
                    return Err(DraftError::NoInterestsSelected);
                }
            }
            RegistrationStep::Credentials => {
                if !is_valid_email(&self.email) {
                    return Err(DraftError::InvalidEmail);
                }
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(DraftError::PasswordTooShort {
                        min: MIN_PASSWORD_LEN,
                    });
                }
            }
        }
        Ok(())
    }

    /// Produces the submission payload once every step validates.
    pub fn finalize(&self) -> Result<RegistrationSubmission, DraftError> {
        self.check_step(RegistrationStep::Company)?;
        self.check_step(RegistrationStep::Interests)?;
        self.check_step(RegistrationStep::Credentials)?;

        Ok(RegistrationSubmission {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            company_name: self.company_name.clone(),
            interests: self.interests.iter().copied().collect(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.first_name = "Ana".into();
        draft.last_name = "López".into();
        draft.email = "ana@example.com".into();
        draft.phone = "+34123456".into();
        draft.address = "Calle Mayor 1".into();
        draft.company_name = "Ana Catering".into();
        draft.toggle_interest(4);
        draft.password = "supersecret".into();
        draft
    }

    #[test]
    fn interest_toggle_adds_then_removes() {
        let mut draft = RegistrationDraft::new();
        draft.toggle_interest(4);
        assert!(draft.interests.contains(&4));
        draft.toggle_interest(4);
        assert!(!draft.interests.contains(&4));
    }

    #[test]
    fn finalize_succeeds_for_a_complete_draft() {
        let submission = complete_draft().finalize().unwrap();
        assert_eq!(submission.interests, vec![4]);
        assert_eq!(submission.email, "ana@example.com");
    }

    #[test]
    fn finalize_rejects_missing_company_fields() {
        let mut draft = complete_draft();
        draft.company_name.clear();
        assert_eq!(draft.finalize(), Err(DraftError::CompanyIncomplete));
        assert!(!draft.step_complete(RegistrationStep::Company));
    }

    #[test]
    fn finalize_rejects_bad_email_and_short_password() {
        let mut draft = complete_draft();
        draft.email = "not-an-email".into();
        assert_eq!(draft.finalize(), Err(DraftError::InvalidEmail));

        draft.email = "ana@example.com".into();
        draft.password = "short".into();
        assert_eq!(
            draft.finalize(),
            Err(DraftError::PasswordTooShort { min: 8 })
        );
    }

    #[test]
    fn finalize_requires_at_least_one_interest() {
        let mut draft = complete_draft();
        draft.toggle_interest(4);
        assert_eq!(draft.finalize(), Err(DraftError::NoInterestsSelected));
    }
}
