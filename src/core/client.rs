use serde::{Deserialize, Serialize};

/// Enriched client profile, stored as `fullData` on a [`ClientRecord`].
///
/// This is also the candidate passed to the registry when adding a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company name. Blank means the client is a private individual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// ISO 3166-1 alpha-2 country code; France when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Business is registered for VAT (assujetti).
    #[serde(default, alias = "tvaAssujetti")]
    pub vat_registered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// How VAT applies to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    /// Private individual (no company name).
    Individual,
    /// Business client.
    Business {
        /// Registered for VAT; the invoice is reverse-charged.
        vat_registered: bool,
    },
}

impl ClientProfile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn vat_registered(mut self, registered: bool) -> Self {
        self.vat_registered = registered;
        self
    }

    pub fn vat_number(mut self, number: impl Into<String>) -> Self {
        self.vat_number = Some(number.into());
        self
    }

    /// Trimmed company name, `None` when absent or blank.
    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn kind(&self) -> ClientKind {
        match self.company_name() {
            None => ClientKind::Individual,
            Some(_) => ClientKind::Business {
                vat_registered: self.vat_registered,
            },
        }
    }

    pub fn is_business(&self) -> bool {
        matches!(self.kind(), ClientKind::Business { .. })
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "First Last (Company)" for businesses, otherwise "First Last".
    pub fn display_name(&self) -> String {
        match self.company_name() {
            Some(company) => format!("{} ({company})", self.full_name()),
            None => self.full_name(),
        }
    }
}

/// Whether the VAT-registration question must be asked for `company`:
/// only business clients can be reverse-charged.
pub fn needs_vat_question(company: &str) -> bool {
    !company.trim().is_empty()
}

/// A client as persisted in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: u64,
    /// Display name.
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_data: Option<ClientProfile>,
}

impl ClientRecord {
    /// Summary record without an enriched profile.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            full_data: None,
        }
    }

    /// Build the summary fields from `profile` and keep it as `fullData`.
    pub fn from_profile(id: u64, profile: ClientProfile) -> Self {
        Self {
            id,
            name: profile.display_name(),
            email: profile.email.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
            full_data: Some(profile),
        }
    }

    /// Classification, when the enriched profile is present.
    pub fn kind(&self) -> Option<ClientKind> {
        self.full_data.as_ref().map(ClientProfile::kind)
    }
}

/// Partial update of a [`ClientRecord`]; set fields replace the record's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_data: Option<ClientProfile>,
}

impl ClientPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn full_data(mut self, profile: ClientProfile) -> Self {
        self.full_data = Some(profile);
        self
    }

    /// Shallow merge into `record`. The id is never patched.
    pub fn apply(self, record: &mut ClientRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(phone) = self.phone {
            record.phone = phone;
        }
        if let Some(profile) = self.full_data {
            record.full_data = Some(profile);
        }
    }
}
