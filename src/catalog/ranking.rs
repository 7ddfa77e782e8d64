//! Deadline ranking — soonest deadline first, stable on ties.

use crate::catalog::Opportunity;
use crate::error::CatalogError;

/// Order opportunities ascending by deadline. The sort is stable, so
/// records with identical deadlines keep their relative input order.
/// Any unparsable deadline fails the whole call; callers should
/// pre-validate the catalog (see [`crate::catalog::Catalog::from_json_file`]).
pub fn rank_by_deadline(
    opportunities: Vec<Opportunity>,
) -> Result<Vec<Opportunity>, CatalogError> {
    let mut keyed = opportunities
        .into_iter()
        .map(|opp| opp.deadline_date().map(|date| (date, opp)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(date, _)| *date);
    Ok(keyed.into_iter().map(|(_, opp)| opp).collect())
}
