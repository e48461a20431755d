//! Recommendation form state

use super::field::FormField;
use crate::state::FormInput;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// The focused text field; `None` when a button row has focus
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Business profile form
#[derive(Debug, Clone)]
pub struct RecommendationForm {
    pub industry: FormField,
    pub company_size: FormField,
    pub business_context: FormField,
    pub problem: FormField,
    pub active_field_index: usize,
}

impl RecommendationForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 4;

    pub fn new() -> Self {
        Self {
            industry: FormField::required(
                "industry",
                "Industry",
                "e.g., Retail, Manufacturing, Healthcare",
                false,
            ),
            company_size: FormField::required(
                "company_size",
                "Company Size",
                "e.g., 10-50 employees",
                false,
            ),
            business_context: FormField::optional(
                "business_context",
                "Business Context",
                "Brief overview of your current operations...",
                true,
            ),
            problem: FormField::required(
                "problem",
                "Primary Challenge",
                "Describe the specific business problem or challenge you're facing...",
                true,
            ),
            active_field_index: 0,
        }
    }

    /// Restore a form from previously entered input
    pub fn from_input(input: &FormInput) -> Self {
        let mut form = Self::new();
        form.industry.set_text(input.industry.clone());
        form.company_size.set_text(input.company_size.clone());
        form.business_context
            .set_text(input.business_context.clone());
        form.problem.set_text(input.problem.clone());
        form
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// All required fields are filled in
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Required fields that are still blank
    pub fn missing_fields(&self) -> Vec<&FormField> {
        [
            &self.industry,
            &self.company_size,
            &self.business_context,
            &self.problem,
        ]
        .into_iter()
        .filter(|field| field.is_missing())
        .collect()
    }

    /// Comma-separated labels of the blank required fields
    pub fn missing_labels(&self) -> String {
        self.missing_fields()
            .iter()
            .map(|field| field.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Snapshot of the current values for submission
    pub fn to_input(&self) -> FormInput {
        FormInput::new(
            self.industry.as_text(),
            self.company_size.as_text(),
            self.business_context.as_text(),
            self.problem.as_text(),
        )
    }

    /// Nothing has been typed yet
    pub fn is_blank(&self) -> bool {
        (0..Self::SUBMIT_ROW)
            .filter_map(|i| self.get_field(i))
            .all(|field| field.as_text().is_empty())
    }
}

impl Default for RecommendationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RecommendationForm {
    fn field_count(&self) -> usize {
        5 // industry, company size, context, problem, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.industry),
            1 => Some(&mut self.company_size),
            2 => Some(&mut self.business_context),
            3 => Some(&mut self.problem),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.industry),
            1 => Some(&self.company_size),
            2 => Some(&self.business_context),
            3 => Some(&self.problem),
            // Index 4 is the submit row, no FormField for it
            _ => None,
        }
    }
}
