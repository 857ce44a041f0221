use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single salary observation (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRecord {
    pub year: i32,
    pub seniority: String,
    /// Contract type (e.g. "CLT", "PJ", "Freelancer").
    pub contract: String,
    /// Work modality (e.g. "Presencial", "Hibrido", "Remoto").
    pub remote: String,
    /// Job title.
    pub role: String,
    /// Country of residence, ISO-3166 alpha-3 code.
    pub country: String,
    /// Yearly salary in USD. Non-negative; enforced at load time.
    pub usd: f64,
}

// ---------------------------------------------------------------------------
// Dimension – the filterable columns
// ---------------------------------------------------------------------------

/// The four categorical columns the dashboard can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Year,
    Seniority,
    Contract,
    Remote,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Seniority,
        Dimension::Contract,
        Dimension::Remote,
    ];

    /// Human-readable widget label.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Seniority => "Seniority",
            Dimension::Contract => "Contract type",
            Dimension::Remote => "Work modality",
        }
    }
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the sorted domain of every filterable column.
/// Immutable after load; duplicate rows are allowed.
#[derive(Debug, Clone)]
pub struct SalaryDataset {
    /// All records (rows), in file order.
    pub records: Vec<SalaryRecord>,
    /// Distinct years observed, sorted.
    pub years: BTreeSet<i32>,
    /// Distinct seniority levels observed, sorted.
    pub seniorities: BTreeSet<String>,
    /// Distinct contract types observed, sorted.
    pub contracts: BTreeSet<String>,
    /// Distinct work modalities observed, sorted.
    pub remotes: BTreeSet<String>,
}

impl SalaryDataset {
    /// Build the per-dimension domain indices from the loaded records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        let mut years = BTreeSet::new();
        let mut seniorities = BTreeSet::new();
        let mut contracts = BTreeSet::new();
        let mut remotes = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            seniorities.insert(rec.seniority.clone());
            contracts.insert(rec.contract.clone());
            remotes.insert(rec.remote.clone());
        }

        SalaryDataset {
            records,
            years,
            seniorities,
            contracts,
            remotes,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted domain of a string-valued dimension. `None` for [`Dimension::Year`],
    /// whose values are integers (see [`SalaryDataset::years`]).
    pub fn string_domain(&self, dim: Dimension) -> Option<&BTreeSet<String>> {
        match dim {
            Dimension::Year => None,
            Dimension::Seniority => Some(&self.seniorities),
            Dimension::Contract => Some(&self.contracts),
            Dimension::Remote => Some(&self.remotes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, seniority: &str, contract: &str, remote: &str) -> SalaryRecord {
        SalaryRecord {
            year,
            seniority: seniority.to_string(),
            contract: contract.to_string(),
            remote: remote.to_string(),
            role: "Data Scientist".to_string(),
            country: "BRA".to_string(),
            usd: 90_000.0,
        }
    }

    #[test]
    fn domains_are_sorted_and_deduplicated() {
        let ds = SalaryDataset::from_records(vec![
            record(2023, "Senior", "CLT", "Remoto"),
            record(2021, "Junior", "PJ", "Presencial"),
            record(2023, "Senior", "CLT", "Remoto"),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![2021, 2023]);
        assert_eq!(
            ds.seniorities.iter().cloned().collect::<Vec<_>>(),
            vec!["Junior".to_string(), "Senior".to_string()]
        );
        assert_eq!(ds.contracts.len(), 2);
        assert_eq!(ds.remotes.len(), 2);
    }

    #[test]
    fn string_domain_covers_non_year_dimensions() {
        let ds = SalaryDataset::from_records(vec![record(2023, "Senior", "CLT", "Remoto")]);

        assert!(ds.string_domain(Dimension::Year).is_none());
        for dim in [Dimension::Seniority, Dimension::Contract, Dimension::Remote] {
            assert_eq!(ds.string_domain(dim).map(|s| s.len()), Some(1));
        }
    }

    #[test]
    fn empty_dataset_has_empty_domains() {
        let ds = SalaryDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.years.is_empty());
        assert!(ds.seniorities.is_empty());
    }
}
