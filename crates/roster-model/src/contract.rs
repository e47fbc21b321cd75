//! Fixed names shared with the vendor export and the target import format.

use serde::{Deserialize, Serialize};

/// Per-record identifier in the source export.
pub const SOURCE_ID_COLUMN: &str = "Id";

/// Comma-separated certification list in the source export.
pub const CERTIFICATIONS_COLUMN: &str = "Allied Certifications";

/// Specialty fields in the source export, read in this order.
pub const SPECIALTY_COLUMNS: [&str; 3] = [
    "Allied/Ancillary Specialty 1",
    "Allied/Ancillary Specialty 2",
    "Allied/Ancillary Specialty 3",
];

/// Back-reference column in both child tables.
pub const PERSON_KEY_COLUMN: &str = "Person_key";

/// Certification name column in the required-docs table.
pub const CERTIFICATION_NAME_COLUMN: &str = "CertificationCredentialName";

/// Specialty name column in the specialty table.
pub const SPECIALTY_NAME_COLUMN: &str = "Specialty";

/// Archive bundling all three outputs.
pub const ARCHIVE_FILE_NAME: &str = "BlueSky_All_Files.zip";

/// The three destination tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    General,
    RequiredDocs,
    Specialty,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::General, Self::RequiredDocs, Self::Specialty];

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Info",
            Self::RequiredDocs => "Required Docs",
            Self::Specialty => "Specialty",
        }
    }

    /// File name of this table inside the output directory and the archive.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::General => "BlueSky_Caregiver_General_Info.csv",
            Self::RequiredDocs => "BlueSky_Caregiver_RequiredDocs_Info.csv",
            Self::Specialty => "BlueSky_Caregiver_Specialty_Info.csv",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
