//! Field mapper resolution.

use std::collections::{BTreeMap, HashSet};

use roster_model::{FieldMapping, MappingEntry, MappingOrigin};
use tracing::{debug, warn};

use crate::error::MappingError;
use crate::normalize::NormalizedLookup;

/// Destination column → chosen source column, matched exactly. A blank value unmaps.
pub type ManualOverrides = BTreeMap<String, String>;

/// Resolves one destination template against the source columns.
///
/// - Entries from `existing` are carried over unless their source column no
///   longer exists.
/// - A manual override replaces the entry unconditionally; a blank choice
///   records a deliberate unmapping.
/// - With `auto_match`, entries without an override take the single source
///   column whose normalized name equals the destination's. Manual entries
///   are never replaced, and zero or several candidates leave the entry as is.
///
/// The result has exactly one entry per destination column.
pub fn resolve(
    destination_columns: &[String],
    source_columns: &[String],
    existing: &FieldMapping,
    auto_match: bool,
    overrides: &ManualOverrides,
) -> Result<FieldMapping, MappingError> {
    let sources: HashSet<&str> = source_columns.iter().map(String::as_str).collect();
    validate_overrides(destination_columns, &sources, overrides)?;

    let lookup = NormalizedLookup::new(source_columns);
    let mut resolved = FieldMapping::new();

    for destination in destination_columns {
        let mut entry = match existing.get(destination) {
            Some(entry) if entry.source().is_none_or(|s| sources.contains(s)) => entry.clone(),
            Some(entry) => {
                debug!(
                    destination = %destination,
                    source = entry.source().unwrap_or_default(),
                    "dropping mapping to a column no longer in the export"
                );
                MappingEntry::unmapped()
            }
            None => MappingEntry::unmapped(),
        };

        if let Some(choice) = overrides.get(destination) {
            entry = if choice.trim().is_empty() {
                MappingEntry::manual(None)
            } else {
                MappingEntry::manual(Some(choice.clone()))
            };
        } else if auto_match && !entry.is_manual() {
            match lookup.candidates(destination) {
                [only] => entry = MappingEntry::auto(only.clone()),
                [] => {}
                many => warn!(
                    destination = %destination,
                    candidates = many.len(),
                    "ambiguous auto-match left for manual resolution"
                ),
            }
        }

        resolved.insert(destination.clone(), entry);
    }

    Ok(resolved)
}

/// Fills still-unmapped entries from a destination → source hint table.
///
/// A hint applies only when the entry has no source and was not deliberately
/// unmapped, and the hinted column exists (exact name first, then a unique
/// normalized match). Returns the number of entries filled.
pub fn apply_fallback(
    mapping: &mut FieldMapping,
    source_columns: &[String],
    fallback: &BTreeMap<String, String>,
) -> usize {
    let lookup = NormalizedLookup::new(source_columns);
    let mut filled = 0;
    for (destination, hint) in fallback {
        let open = mapping
            .get(destination)
            .is_some_and(|entry| entry.origin == MappingOrigin::Unmapped);
        if !open {
            continue;
        }
        let found = source_columns
            .iter()
            .find(|column| *column == hint)
            .map(String::as_str)
            .or_else(|| lookup.unique_match(hint));
        if let Some(source) = found {
            mapping.insert(destination.clone(), MappingEntry::fallback(source));
            filled += 1;
        }
    }
    filled
}

fn validate_overrides(
    destination_columns: &[String],
    sources: &HashSet<&str>,
    overrides: &ManualOverrides,
) -> Result<(), MappingError> {
    for (destination, choice) in overrides {
        if !destination_columns.iter().any(|d| d == destination) {
            return Err(MappingError::DestinationNotFound(destination.clone()));
        }
        if !choice.trim().is_empty() && !sources.contains(choice.as_str()) {
            return Err(MappingError::SourceNotFound {
                destination: destination.clone(),
                column: choice.clone(),
            });
        }
    }
    Ok(())
}
