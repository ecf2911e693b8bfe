//! Site parameters model
//!
//! A single-record collection holding the shop's identity and contact info.

use serde::{Deserialize, Serialize};

use super::content::{ContentObject, ImageRef};

/// Object type slug for the site parameters singleton
pub const SITE_PARAMETERS_TYPE: &str = "parametres";

/// Site parameter metafields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteParametersMetadata {
    /// Shop name
    #[serde(rename = "nom_site", default)]
    pub site_name: Option<String>,
    /// Shop description
    #[serde(default)]
    pub description: Option<String>,
    /// Logo
    #[serde(rename = "logo_principal", default)]
    pub logo: Option<ImageRef>,
    /// Contact email
    #[serde(rename = "email_contact", default)]
    pub contact_email: Option<String>,
    /// Contact phone
    #[serde(rename = "telephone", default)]
    pub phone: Option<String>,
    /// Postal address
    #[serde(rename = "adresse", default)]
    pub address: Option<String>,
}

/// The site parameters singleton
pub type SiteParameters = ContentObject<SiteParametersMetadata>;
