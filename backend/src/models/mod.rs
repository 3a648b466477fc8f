//! Record shapes of the hardware database.
//!
//! A [`Submission`] is one physical unit someone documented. Its metadata is
//! console specific (see [`metadata`]) and nests boards which in turn hold
//! [`Chip`]s. Anything may be missing: submissions are filled in by hand
//! over many years, so every leaf field is optional and records
//! deserialize leniently.

pub mod metadata;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ConsoleType;

pub use metadata::*;

// =============================================================================
// Lenient fields
// =============================================================================

/// Deserialize an optional field, turning a value of the wrong shape into
/// `None` instead of failing the whole record.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`] for fields that are always present.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Dates
// =============================================================================

/// Something with a (partial) manufacturing date.
pub trait Dated {
    fn year(&self) -> Option<u16>;

    fn month(&self) -> Option<u8> {
        None
    }

    fn week(&self) -> Option<u8> {
        None
    }
}

/// Implements [`Dated`] for structs with `year` and some of `month`/`week`.
macro_rules! impl_dated {
    ($ty:ty { $($field:ident),+ }) => {
        impl $crate::models::Dated for $ty {
            fn year(&self) -> Option<u16> {
                self.year
            }
            $(
                fn $field(&self) -> Option<u8> {
                    self.$field
                }
            )+
        }
    };
}

pub(crate) use impl_dated;

// =============================================================================
// Chip
// =============================================================================

/// A physical component on a board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chip {
    /// Part type, e.g. `LH5164AN-10L`
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    /// Full label text as printed
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    /// Manufacturer code, see [`crate::export::manufacturer_name`]
    #[serde(deserialize_with = "lenient")]
    pub manufacturer: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<u16>,
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub week: Option<u8>,
}

impl_dated!(Chip { month, week });

// =============================================================================
// Submission
// =============================================================================

/// One documented console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission<M> {
    #[serde(rename = "type")]
    pub console: ConsoleType,
    pub title: String,
    /// Identifier used in the submission's page URL
    pub slug: String,
    #[serde(default, deserialize_with = "lenient")]
    pub contributor: Option<String>,
    pub metadata: Option<M>,
}

impl<M> Submission<M> {
    pub fn new(console: ConsoleType, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            console,
            title: title.into(),
            slug: slug.into(),
            contributor: None,
            metadata: None,
        }
    }

    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }

    pub fn with_metadata(mut self, metadata: M) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

pub type DmgSubmission = Submission<DmgMetadata>;
pub type SgbSubmission = Submission<SgbMetadata>;
pub type MgbSubmission = Submission<MgbMetadata>;
pub type MglSubmission = Submission<MglMetadata>;
pub type Sgb2Submission = Submission<Sgb2Metadata>;
pub type CgbSubmission = Submission<CgbMetadata>;
pub type AgbSubmission = Submission<AgbMetadata>;
pub type AgsSubmission = Submission<AgsMetadata>;
pub type GbsSubmission = Submission<GbsMetadata>;
pub type OxySubmission = Submission<OxyMetadata>;
