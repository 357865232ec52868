//! Contact form model and the submit path.
//!
//! Nothing is sent anywhere: a valid submission produces one acknowledgment
//! and the draft is thrown away.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::notify::Notify;

pub const SUBMITTED_MESSAGE: &str =
    "Thank you for reaching out! Our team will get back to you soon.";

// Same rule browsers apply to <input type="email">. Domains must already be
// ASCII: browsers punycode an internationalized domain before matching, this
// check does not, so `a@müller.de` is rejected here while `a@xn--mller-kva.de`
// passes.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Student,
    Educator,
    Volunteer,
    Donor,
    Corporate,
    NgoPartner,
    Other,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Student,
        Role::Educator,
        Role::Volunteer,
        Role::Donor,
        Role::Corporate,
        Role::NgoPartner,
        Role::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Educator => "Educator",
            Role::Volunteer => "Volunteer",
            Role::Donor => "Donor",
            Role::Corporate => "Corporate / CSR",
            Role::NgoPartner => "NGO partner",
            Role::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interest {
    Education,
    Health,
    Environment,
    WomenEmpowerment,
    ChildWelfare,
    DisasterRelief,
    Fundraising,
}

impl Interest {
    pub const ALL: [Interest; 7] = [
        Interest::Education,
        Interest::Health,
        Interest::Environment,
        Interest::WomenEmpowerment,
        Interest::ChildWelfare,
        Interest::DisasterRelief,
        Interest::Fundraising,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::Education => "Education",
            Interest::Health => "Health",
            Interest::Environment => "Environment",
            Interest::WomenEmpowerment => "Women empowerment",
            Interest::ChildWelfare => "Child welfare",
            Interest::DisasterRelief => "Disaster relief",
            Interest::Fundraising => "Fundraising",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Organization,
    Role,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please fill in your full name.")]
    MissingName,
    #[error("Please fill in your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in your organization.")]
    MissingOrganization,
    #[error("Please choose the option that best describes you.")]
    MissingRole,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::MissingName => Field::FullName,
            FieldError::MissingEmail | FieldError::InvalidEmail => Field::Email,
            FieldError::MissingOrganization => Field::Organization,
            FieldError::MissingRole => Field::Role,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub role: Option<Role>,
    pub interests: BTreeSet<Interest>,
    pub message: String,
}

impl ContactForm {
    pub fn toggle_interest(&mut self, interest: Interest, checked: bool) {
        if checked {
            self.interests.insert(interest);
        } else {
            self.interests.remove(&interest);
        }
    }

    /// Every failing field, in form order. Empty means submittable.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.full_name.trim().is_empty() {
            errors.push(FieldError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::MissingEmail);
        } else if !is_valid_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.organization.trim().is_empty() {
            errors.push(FieldError::MissingOrganization);
        }
        if self.role.is_none() {
            errors.push(FieldError::MissingRole);
        }
        errors
    }

    pub fn submit(&self, notify: &Notify) -> Result<(), Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            log::warn!("contact submit blocked: {} field(s) invalid", errors.len());
            return Err(errors);
        }
        log::debug!(
            "contact submit accepted ({} interest(s), message {} chars); not transmitted",
            self.interests.len(),
            self.message.chars().count()
        );
        notify.acknowledge(SUBMITTED_MESSAGE);
        Ok(())
    }
}
