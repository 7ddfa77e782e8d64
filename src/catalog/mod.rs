//! Opportunity catalog — structured records the ranking pipeline runs over.

pub mod alternatives;
pub mod eligibility;
pub mod explain;
pub mod ranking;

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::eligibility::Eligibility;
use crate::catalog::explain::ExplanationGenerator;
use crate::error::CatalogError;

/// Deadlines are calendar dates in this fixed textual format.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive age bounds for an opportunity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeBounds {
    pub min_age: u32,
    pub max_age: u32,
}

/// One opportunity record from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub category: String,
    pub education_level: String,
    pub eligibility: AgeBounds,
    /// Calendar date, [`DEADLINE_FORMAT`].
    pub deadline: String,
    pub link: String,
}

impl Opportunity {
    /// Parse the deadline. An unparsable deadline is a data error, never
    /// silently coerced to an arbitrary position.
    pub fn deadline_date(&self) -> Result<NaiveDate, CatalogError> {
        NaiveDate::parse_from_str(&self.deadline, DEADLINE_FORMAT).map_err(|_| {
            CatalogError::InvalidDeadline {
                id: self.id.clone(),
                deadline: self.deadline.clone(),
            }
        })
    }
}

/// Student profile for the ranking path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub age: u32,
    pub education_level: String,
}

/// One entry of the `/recommend` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub deadline: String,
    pub link: String,
    pub explanation: String,
}

/// The loaded opportunity catalog. Read once at startup, immutable after.
#[derive(Debug, Default)]
pub struct Catalog {
    opportunities: Vec<Opportunity>,
}

impl Catalog {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self { opportunities }
    }

    /// Load the catalog from a JSON file and pre-validate every deadline,
    /// so bad records fail at startup rather than mid-request.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let opportunities: Vec<Opportunity> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;
        for opp in &opportunities {
            opp.deadline_date()?;
        }
        info!(path = %path.display(), count = opportunities.len(), "Opportunity catalog loaded");
        Ok(Self { opportunities })
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }
}

/// The full ranking path: filter by eligibility, order by deadline,
/// annotate each survivor with an explanation.
pub fn recommend(
    student: &StudentProfile,
    catalog: &Catalog,
    explainer: &dyn ExplanationGenerator,
) -> Result<Vec<Recommendation>, CatalogError> {
    let eligible: Vec<Opportunity> = catalog
        .opportunities()
        .iter()
        .filter(|opp| matches!(eligibility::check(student, opp), Eligibility::Eligible))
        .cloned()
        .collect();

    let ranked = ranking::rank_by_deadline(eligible)?;

    Ok(ranked
        .into_iter()
        .map(|opp| {
            let explanation = explainer.explain(student, &opp);
            Recommendation {
                id: opp.id,
                title: opp.title,
                deadline: opp.deadline,
                link: opp.link,
                explanation,
            }
        })
        .collect())
}

#[cfg(test)]
pub(crate) fn sample_opportunity(id: &str, deadline: &str) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: format!("Opportunity {id}"),
        category: "scholarship".to_string(),
        education_level: "graduate".to_string(),
        eligibility: AgeBounds {
            min_age: 18,
            max_age: 25,
        },
        deadline: deadline.to_string(),
        link: format!("https://example.org/{id}"),
    }
}
