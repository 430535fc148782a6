//! Build ids and the branch namespace derived from them.
//!
//! Every run mints a `BuildId` and derives all of its branch names from it,
//! so concurrent or repeated builds never collide and a failed build leaves
//! only branches that are trivial to identify and delete.

use crate::error::Error;
use rand::{thread_rng, Rng};
use std::fmt;
use std::str::FromStr;

/// Prefix under which every branch created by a build lives.
pub const BRANCH_PREFIX: &str = "repoweave";

/// Hex characters in a build id or staging token.
const TOKEN_LEN: usize = 8;

/// Random token scoping the branches of one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildId(String);

impl BuildId {
    /// Mint a fresh id from the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(&mut thread_rng())
    }

    /// Mint an id from the given RNG. Tests pin the seed.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        BuildId(random_token(rng))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Branch holding the raw fetch of the named source.
    pub fn base_branch(&self, name: &str) -> String {
        format!("{}/{}/base/{}", BRANCH_PREFIX, self.0, name)
    }

    /// Branch holding the named source's tree for mapping number `idx`.
    pub fn map_branch(&self, name: &str, idx: usize) -> String {
        format!("{}/{}/map/{}/{}", BRANCH_PREFIX, self.0, name, idx)
    }

    /// Branch the assembled meta-repository accumulates on.
    pub fn dst_branch(&self) -> String {
        format!("{}/{}/dst", BRANCH_PREFIX, self.0)
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BuildId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed =
            s.len() == TOKEN_LEN && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if well_formed {
            Ok(BuildId(s.to_string()))
        } else {
            Err(Error::InvalidBuildId {
                value: s.to_string(),
            })
        }
    }
}

/// Eight random lowercase hex characters.
pub(crate) fn random_token<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; TOKEN_LEN / 2];
    rng.fill(&mut bytes);
    hex::encode(bytes)
}
