use watch_store_models::ViewableItem;

/// Client-side narrowing of fetched catalog results: an exact-year match
/// and a minimum-rating threshold, both optional.
#[derive(Debug, Default, Clone)]
pub struct CatalogFilter {
    pub year: Option<String>,
    pub min_rating: Option<f64>,
}

impl CatalogFilter {
    pub fn is_active(&self) -> bool {
        self.year.is_some() || self.min_rating.is_some()
    }

    /// An item passes when its year matches exactly (if a year is set)
    /// and its rating parses to a number at or above the threshold (if
    /// one is set). An unparseable rating fails any rating threshold.
    pub fn matches(&self, item: &ViewableItem) -> bool {
        if let Some(year) = &self.year {
            if &item.year != year {
                return false;
            }
        }

        if let Some(threshold) = self.min_rating {
            match item.rating.parse::<f64>() {
                Ok(rating) if rating >= threshold => {}
                _ => return false,
            }
        }

        true
    }

    pub fn apply(&self, items: &[ViewableItem]) -> Vec<ViewableItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

/// Distinct years across a result page, for a year-filter dropdown.
/// Numeric years sort newest first; non-numeric values go after them in
/// lexicographic order. Empty years are skipped.
pub fn collect_years(items: &[ViewableItem]) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for item in items {
        if item.year.is_empty() {
            continue;
        }
        if !years.contains(&item.year) {
            years.push(item.year.clone());
        }
    }

    years.sort_by(|a, b| match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a_num), Ok(b_num)) => b_num.cmp(&a_num),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    years
}
