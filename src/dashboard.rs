//! Admin dashboard view-model: the fetched list, the two filter inputs and
//! the detail panel state.

use crate::models::Application;

/// Applications whose name contains `search_term` (ignoring case) and whose
/// category equals `category` exactly. An empty `category` matches everything.
pub fn filter_applications<'a>(
    applications: &'a [Application],
    search_term: &str,
    category: &str,
) -> Vec<&'a Application> {
    let needle = search_term.to_lowercase();
    applications
        .iter()
        .filter(|app| app.name.to_lowercase().contains(&needle))
        .filter(|app| category.is_empty() || app.loan_category == category)
        .collect()
}

/// Distinct categories across `applications`, in first-seen order.
pub fn loan_categories(applications: &[Application]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for app in applications {
        if !seen.contains(&app.loan_category.as_str()) {
            seen.push(&app.loan_category);
        }
    }
    seen
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailView {
    #[default]
    Closed,
    Open(Application),
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    applications: Vec<Application>,
    loaded: bool,
    pub search_term: String,
    pub filter_category: String,
    detail: DetailView,
}

impl Dashboard {
    /// Swaps in a freshly fetched list. An open detail panel follows its item
    /// into the new list, or closes when the item is gone.
    pub fn replace(&mut self, applications: Vec<Application>) {
        let detail = match &self.detail {
            DetailView::Open(open) => applications
                .iter()
                .find(|app| app.id == open.id)
                .cloned()
                .map_or(DetailView::Closed, DetailView::Open),
            DetailView::Closed => DetailView::Closed,
        };
        self.detail = detail;
        self.applications = applications;
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn find(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    /// Absent inputs keep their previous value.
    pub fn set_filters(&mut self, search_term: Option<String>, category: Option<String>) {
        if let Some(search_term) = search_term {
            self.search_term = search_term;
        }
        if let Some(category) = category {
            self.filter_category = category;
        }
    }

    pub fn filtered(&self) -> Vec<&Application> {
        filter_applications(&self.applications, &self.search_term, &self.filter_category)
    }

    pub fn loan_categories(&self) -> Vec<&str> {
        loan_categories(&self.applications)
    }

    pub fn detail(&self) -> Option<&Application> {
        match &self.detail {
            DetailView::Open(app) => Some(app),
            DetailView::Closed => None,
        }
    }

    /// closed -> open(item). Returns false when nothing changed.
    pub fn view(&mut self, id: &str) -> bool {
        if self.detail != DetailView::Closed {
            return false;
        }
        match self.find(id).cloned() {
            Some(app) => {
                self.detail = DetailView::Open(app);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.detail = DetailView::Closed;
    }

    /// Applies a confirmed delete: drops the item by identity and closes the
    /// detail panel.
    pub fn remove(&mut self, id: &str) -> Option<Application> {
        let index = self.applications.iter().position(|app| app.id == id)?;
        self.close();
        Some(self.applications.remove(index))
    }
}
