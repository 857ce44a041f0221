use std::collections::BTreeMap;

use crate::country;

use super::filter::{filtered_indices, FilterSelection};
use super::model::{SalaryDataset, SalaryRecord};

/// How many roles the "top roles by mean salary" view keeps.
pub const TOP_ROLES: usize = 10;

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Scalar summary statistics over the filtered salary column.
///
/// `mean`, `median` and `max` are `None` when the filtered view is empty;
/// the presentation layer renders those as "n/a" instead of a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
}

/// Mean salary for one country, with the resolved display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryMean {
    /// ISO-3166 alpha-3 code.
    pub code: String,
    /// Display name; falls back to the code when unresolved.
    pub name: String,
    pub mean: f64,
}

/// Mean salary for one category (contract type or role).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
}

/// Record count for one category (seniority or work modality).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
}

/// Everything the dashboard renders for one filter state. Built from scratch
/// on every filter change and replaced wholesale; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBundle {
    /// Indices of the records passing the current filters, in file order.
    pub row_indices: Vec<usize>,
    pub kpis: Kpis,
    /// Mean salary per country, sorted by country code.
    pub country_means: Vec<CountryMean>,
    /// Mean salary per contract type, sorted by label.
    pub contract_means: Vec<GroupMean>,
    /// Record count per seniority level, sorted by label.
    pub seniority_counts: Vec<GroupCount>,
    /// Record count per work modality, sorted by label.
    pub remote_counts: Vec<GroupCount>,
    /// Up to [`TOP_ROLES`] roles, descending by mean salary (ties broken by
    /// role name so the order is deterministic).
    pub top_roles: Vec<GroupMean>,
}

// ---------------------------------------------------------------------------
// The filter-and-aggregate pipeline
// ---------------------------------------------------------------------------

/// Compute every derived view for the given dataset and filter state.
///
/// Pure and deterministic: identical inputs produce identical bundles, and
/// nothing outside the returned value is touched. Categories with no
/// surviving rows are omitted from all aggregates rather than reported with
/// zero counts, and an empty filtered view is valid output, not an error.
pub fn compute_views(dataset: &SalaryDataset, selection: &FilterSelection) -> ViewBundle {
    let row_indices = filtered_indices(dataset, selection);
    let rows: Vec<&SalaryRecord> = row_indices.iter().map(|&i| &dataset.records[i]).collect();

    let kpis = compute_kpis(&rows);

    let country_means = mean_by(&rows, |r| r.country.as_str())
        .into_iter()
        .map(|g| CountryMean {
            name: country::name(&g.label).to_string(),
            code: g.label,
            mean: g.mean,
        })
        .collect();

    let contract_means = mean_by(&rows, |r| r.contract.as_str());
    let seniority_counts = count_by(&rows, |r| r.seniority.as_str());
    let remote_counts = count_by(&rows, |r| r.remote.as_str());

    let mut top_roles = mean_by(&rows, |r| r.role.as_str());
    top_roles.sort_by(|a, b| b.mean.total_cmp(&a.mean).then_with(|| a.label.cmp(&b.label)));
    top_roles.truncate(TOP_ROLES);

    ViewBundle {
        row_indices,
        kpis,
        country_means,
        contract_means,
        seniority_counts,
        remote_counts,
        top_roles,
    }
}

fn compute_kpis(rows: &[&SalaryRecord]) -> Kpis {
    let count = rows.len();
    if count == 0 {
        return Kpis {
            mean: None,
            median: None,
            max: None,
            count: 0,
        };
    }

    let mut salaries: Vec<f64> = rows.iter().map(|r| r.usd).collect();
    salaries.sort_by(|a, b| a.total_cmp(b));

    let sum: f64 = salaries.iter().sum();
    // Standard median: average of the two middle values for even counts.
    let median = if count % 2 == 0 {
        (salaries[count / 2 - 1] + salaries[count / 2]) / 2.0
    } else {
        salaries[count / 2]
    };

    Kpis {
        mean: Some(sum / count as f64),
        median: Some(median),
        max: Some(salaries[count - 1]),
        count,
    }
}

/// Group rows by `key` and compute the mean salary per group, sorted by key.
fn mean_by<'a>(
    rows: &[&'a SalaryRecord],
    key: impl Fn(&'a SalaryRecord) -> &'a str,
) -> Vec<GroupMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &rec in rows {
        let entry = groups.entry(key(rec)).or_insert((0.0, 0));
        entry.0 += rec.usd;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, (sum, n))| GroupMean {
            label: label.to_string(),
            mean: sum / n as f64,
        })
        .collect()
}

/// Group rows by `key` and count records per group, sorted by key.
fn count_by<'a>(
    rows: &[&'a SalaryRecord],
    key: impl Fn(&'a SalaryRecord) -> &'a str,
) -> Vec<GroupCount> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for &rec in rows {
        *groups.entry(key(rec)).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|(label, count)| GroupCount {
            label: label.to_string(),
            count,
        })
        .collect()
}
