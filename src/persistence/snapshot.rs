//! Snapshot codec: the JSON form of a trained model.
//!
//! ```json
//! {
//!   "version": 1,
//!   "categories": {
//!     "spam": { "tally": 3, "tokens": { "free": 2, "money": 1 } }
//!   },
//!   "tokenizer": { "language": "english", "removeStopWords": false }
//! }
//! ```
//!
//! Decoding validates the whole payload before anything is returned, so a
//! rejected snapshot never reaches the engine's live model.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::TokenizerConfig;
use crate::classifier::is_valid_category_name;
use crate::classifier::store::{CategoryState, Model, fold_token};
use crate::error::{Result, SnapshotError, TextBayesError};

/// The only snapshot version this build reads and writes.
pub const SNAPSHOT_VERSION: i64 = 1;

/// Wire form of a whole model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedModel {
    pub version: i64,
    #[serde(default)]
    pub categories: BTreeMap<String, PersistedCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenizer: Option<TokenizerConfig>,
}

/// Wire form of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedCategory {
    pub tally: i64,
    #[serde(default)]
    pub tokens: BTreeMap<String, i64>,
}

/// A validated snapshot ready to be installed. Priors are not computed yet.
#[derive(Debug)]
pub struct DecodedSnapshot {
    pub model: Model,
    pub tokenizer: Option<TokenizerConfig>,
}

impl PersistedModel {
    /// Copy a live model into its wire form.
    pub fn capture(model: &Model, tokenizer: Option<TokenizerConfig>) -> Self {
        let categories = model
            .categories()
            .map(|category| {
                let tokens = category
                    .tokens()
                    .map(|(token, count)| (token.to_string(), saturating_i64(count)))
                    .collect();
                let persisted = PersistedCategory {
                    tally: saturating_i64(category.token_tally()),
                    tokens,
                };
                (category.name().to_string(), persisted)
            })
            .collect();

        PersistedModel {
            version: SNAPSHOT_VERSION,
            categories,
            tokenizer,
        }
    }

    /// Check every structural rule and build the model. The first failing check wins.
    pub fn validate(self) -> std::result::Result<DecodedSnapshot, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let mut model = Model::new();
        for (name, category) in self.categories {
            if !is_valid_category_name(&name) {
                return Err(SnapshotError::InvalidCategoryName(name));
            }
            if model.contains(&name) {
                return Err(SnapshotError::DuplicateCategory(name));
            }

            let state = validate_category(&name, category)?;
            model.insert_new(state);
        }

        Ok(DecodedSnapshot {
            model,
            tokenizer: self.tokenizer,
        })
    }
}

fn validate_category(
    name: &str,
    category: PersistedCategory,
) -> std::result::Result<CategoryState, SnapshotError> {
    if category.tally < 0 {
        return Err(SnapshotError::InvalidTally {
            category: name.to_string(),
            tally: category.tally,
        });
    }

    let mut sum: i128 = 0;
    let mut token_counts: AHashMap<String, u64> = AHashMap::with_capacity(category.tokens.len());
    for (token, count) in category.tokens {
        if token.trim().is_empty() {
            return Err(SnapshotError::InvalidTokenName(name.to_string()));
        }
        if count <= 0 {
            return Err(SnapshotError::InvalidTokenCount {
                category: name.to_string(),
                count,
            });
        }

        sum += i128::from(count);
        // count > 0 was checked above
        *token_counts.entry(fold_token(&token)).or_insert(0) += count as u64;
    }

    if sum != i128::from(category.tally) {
        return Err(SnapshotError::TallyMismatch {
            category: name.to_string(),
            tally: category.tally,
            sum: i64::try_from(sum).unwrap_or(i64::MAX),
        });
    }

    Ok(CategoryState::from_counts(
        name,
        token_counts,
        category.tally as u64,
    ))
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Write a snapshot as JSON.
pub fn encode<W: Write>(snapshot: &PersistedModel, writer: W) -> Result<()> {
    serde_json::to_writer(writer, snapshot)?;
    Ok(())
}

/// Read, parse and validate a snapshot.
///
/// Read failures surface as [`TextBayesError::Io`]; anything that is not a
/// well-formed, consistent model surfaces as [`TextBayesError::InvalidData`].
pub fn decode<R: Read>(reader: R) -> Result<DecodedSnapshot> {
    let parsed: Option<PersistedModel> = match serde_json::from_reader(reader) {
        Ok(parsed) => parsed,
        Err(err) if err.is_io() => return Err(TextBayesError::Io(io::Error::from(err))),
        Err(err) => return Err(SnapshotError::Unreadable(err.to_string()).into()),
    };

    let persisted = parsed.ok_or_else(|| SnapshotError::Unreadable("payload is null".to_string()))?;
    Ok(persisted.validate()?)
}
