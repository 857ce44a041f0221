use std::collections::BTreeSet;

use super::model::{Dimension, SalaryDataset, SalaryRecord};

// ---------------------------------------------------------------------------
// FilterSelection: which values are selected per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state. A record is visible when its value on
/// every dimension is contained in that dimension's selected set, so an
/// empty set hides all records for that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub remotes: BTreeSet<String>,
}

impl FilterSelection {
    /// Selection with every observed value selected (i.e., unfiltered).
    /// This is the default state after a dataset is loaded.
    pub fn all_selected(dataset: &SalaryDataset) -> Self {
        FilterSelection {
            years: dataset.years.clone(),
            seniorities: dataset.seniorities.clone(),
            contracts: dataset.contracts.clone(),
            remotes: dataset.remotes.clone(),
        }
    }

    /// Whether a record passes all four dimension filters (logical AND).
    pub fn matches(&self, record: &SalaryRecord) -> bool {
        self.years.contains(&record.year)
            && self.seniorities.contains(record.seniority.as_str())
            && self.contracts.contains(record.contract.as_str())
            && self.remotes.contains(record.remote.as_str())
    }

    /// Select every observed value of one dimension.
    pub fn select_all(&mut self, dataset: &SalaryDataset, dim: Dimension) {
        match dim {
            Dimension::Year => self.years = dataset.years.clone(),
            Dimension::Seniority => self.seniorities = dataset.seniorities.clone(),
            Dimension::Contract => self.contracts = dataset.contracts.clone(),
            Dimension::Remote => self.remotes = dataset.remotes.clone(),
        }
    }

    /// Deselect every value of one dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        match dim {
            Dimension::Year => self.years.clear(),
            Dimension::Seniority => self.seniorities.clear(),
            Dimension::Contract => self.contracts.clear(),
            Dimension::Remote => self.remotes.clear(),
        }
    }

    /// Toggle a single year. Years outside the dataset's domain are ignored.
    pub fn toggle_year(&mut self, dataset: &SalaryDataset, year: i32) {
        if !dataset.years.contains(&year) {
            return;
        }
        if !self.years.remove(&year) {
            self.years.insert(year);
        }
    }

    /// Toggle a single value of a string-valued dimension. Values outside the
    /// dataset's domain (and the Year dimension) are ignored.
    pub fn toggle_value(&mut self, dataset: &SalaryDataset, dim: Dimension, value: &str) {
        let Some(domain) = dataset.string_domain(dim) else {
            return;
        };
        if !domain.contains(value) {
            return;
        }
        let selected = match dim {
            Dimension::Year => return,
            Dimension::Seniority => &mut self.seniorities,
            Dimension::Contract => &mut self.contracts,
            Dimension::Remote => &mut self.remotes,
        };
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    /// Number of selected values for one dimension (for widget headers).
    pub fn selected_count(&self, dim: Dimension) -> usize {
        match dim {
            Dimension::Year => self.years.len(),
            Dimension::Seniority => self.seniorities.len(),
            Dimension::Contract => self.contracts.len(),
            Dimension::Remote => self.remotes.len(),
        }
    }
}

/// Return indices of records that pass all active filters, in file order.
pub fn filtered_indices(dataset: &SalaryDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
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
            role: "Analyst".to_string(),
            country: "USA".to_string(),
            usd: 50_000.0,
        }
    }

    fn dataset() -> SalaryDataset {
        SalaryDataset::from_records(vec![
            record(2023, "Senior", "CLT", "Remoto"),
            record(2023, "Junior", "CLT", "Presencial"),
            record(2022, "Senior", "PJ", "Remoto"),
        ])
    }

    #[test]
    fn all_selected_passes_every_record() {
        let ds = dataset();
        let sel = FilterSelection::all_selected(&ds);
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1, 2]);
    }

    #[test]
    fn filters_combine_with_logical_and() {
        let ds = dataset();
        let mut sel = FilterSelection::all_selected(&ds);
        sel.toggle_year(&ds, 2022); // deselect 2022
        sel.toggle_value(&ds, Dimension::Seniority, "Junior"); // deselect Junior

        // Only the 2023 Senior row survives both constraints.
        assert_eq!(filtered_indices(&ds, &sel), vec![0]);
    }

    #[test]
    fn empty_dimension_selection_hides_everything() {
        let ds = dataset();
        let mut sel = FilterSelection::all_selected(&ds);
        sel.select_none(Dimension::Contract);
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn select_all_restores_the_full_domain() {
        let ds = dataset();
        let mut sel = FilterSelection::all_selected(&ds);
        sel.select_none(Dimension::Remote);
        sel.select_all(&ds, Dimension::Remote);
        assert_eq!(sel, FilterSelection::all_selected(&ds));
    }

    #[test]
    fn toggling_unknown_values_is_a_no_op() {
        let ds = dataset();
        let mut sel = FilterSelection::all_selected(&ds);
        let before = sel.clone();

        sel.toggle_year(&ds, 1999);
        sel.toggle_value(&ds, Dimension::Seniority, "Intern");
        sel.toggle_value(&ds, Dimension::Year, "2023");

        assert_eq!(sel, before);
    }

    #[test]
    fn selected_counts_track_mutations() {
        let ds = dataset();
        let mut sel = FilterSelection::all_selected(&ds);
        assert_eq!(sel.selected_count(Dimension::Year), 2);

        sel.toggle_year(&ds, 2023);
        assert_eq!(sel.selected_count(Dimension::Year), 1);
    }
}
