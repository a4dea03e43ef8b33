//! The fixed set of binaries that ship as container images.

use crate::error::{BinaryError, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Keyword that selects every known binary
pub const ALL_KEYWORD: &str = "all";

/// A binary that is packaged as its own docker image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Binary {
    // Variant order matches name order so the derived Ord sorts by name.
    /// Acnodal-backed controller
    ControllerAcnodal,
    /// Address-pool controller
    ControllerPool,
    /// Acnodal-backed speaker
    SpeakerAcnodal,
    /// Local speaker
    SpeakerLocal,
}

impl Binary {
    /// Every known binary, sorted by name
    pub const ALL: [Binary; 4] = [
        Binary::ControllerAcnodal,
        Binary::ControllerPool,
        Binary::SpeakerAcnodal,
        Binary::SpeakerLocal,
    ];

    /// Name used for the image, the `cmd` build arg and the Dockerfile suffix
    pub fn name(&self) -> &'static str {
        match self {
            Binary::ControllerAcnodal => "controller-acnodal",
            Binary::ControllerPool => "controller-pool",
            Binary::SpeakerAcnodal => "speaker-acnodal",
            Binary::SpeakerLocal => "speaker-local",
        }
    }

    /// Sorted list of known names
    pub fn known_names() -> Vec<String> {
        Self::ALL.iter().map(|b| b.name().to_string()).collect()
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Binary {
    type Err = BinaryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| BinaryError::Unknown {
                name: s.to_string(),
                known: Self::known_names(),
            })
    }
}

/// Resolve requested binary names into a sorted, deduplicated selection.
///
/// `all` expands to every binary. An empty request also selects every binary.
/// The first unknown name aborts the whole selection.
pub fn check_binaries(requested: &[String]) -> Result<Vec<Binary>> {
    let mut out = BTreeSet::new();

    for name in requested {
        if name == ALL_KEYWORD {
            out.extend(Binary::ALL);
        } else {
            out.insert(name.parse::<Binary>()?);
        }
    }

    if out.is_empty() {
        out.extend(Binary::ALL);
    }

    Ok(out.into_iter().collect())
}
