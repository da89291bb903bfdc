//! Supported correction table kinds

use crate::period::Period;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MINIMUM_REFERENCE: Period = Period::new_unchecked(1986, 8);

/// Correction tables the service knows how to build or forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionTableKind {
    /// Monthly SELIC rate published by the Brazilian central bank
    Selic,
    /// Federal justice (CJF) monetary correction table
    JusticaFederal,
}

impl CorrectionTableKind {
    /// All kinds, in a stable order
    pub const ALL: [CorrectionTableKind; 2] =
        [CorrectionTableKind::Selic, CorrectionTableKind::JusticaFederal];

    /// Name used on the wire and as the model artifact key
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionTableKind::Selic => "selic",
            CorrectionTableKind::JusticaFederal => "justica_federal",
        }
    }

    /// File name of the persisted model for this kind
    pub fn model_file_name(&self) -> String {
        format!("{}.apk", self.as_str())
    }

    /// Earliest reference month accepted for corrections (August 1986)
    pub fn minimum_reference(&self) -> Period {
        match self {
            CorrectionTableKind::Selic | CorrectionTableKind::JusticaFederal => MINIMUM_REFERENCE,
        }
    }
}

impl fmt::Display for CorrectionTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionTableKind {
    type Err = crate::CorrectionError;

    fn from_str(s: &str) -> crate::Result<Self> {
        CorrectionTableKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                crate::CorrectionError::InvalidInput(format!("Unknown correction table: {}", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in CorrectionTableKind::ALL {
            assert_eq!(kind.as_str().parse::<CorrectionTableKind>().unwrap(), kind);
        }
        assert!("encoge".parse::<CorrectionTableKind>().is_err());
    }

    #[test]
    fn test_model_file_name() {
        assert_eq!(CorrectionTableKind::Selic.model_file_name(), "selic.apk");
        assert_eq!(
            CorrectionTableKind::Selic.minimum_reference(),
            Period::new(1986, 8).unwrap()
        );
    }
}
