//! Query parameter validation
//!
//! Turns untyped key/value pairs (a URL query string) into a typed filter and
//! sort, or every reason why that is not possible.

use std::collections::HashMap;

use super::filter::{FilterSpec, StatusFilter};
use super::sort::{SortField, SortOrder, SortSpec};
use crate::task::TaskPriority;
use crate::validation::{ValidationErrors, SEARCH_MAX_LEN};

/// A filter and optional sort that passed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub filter: FilterSpec,
    /// `None` selects the default list ordering
    pub sort: Option<SortSpec>,
}

impl ValidatedQuery {
    /// Validate raw query parameters. Unknown keys are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut filter = FilterSpec::new();

        if let Some(raw) = params.get("status") {
            match StatusFilter::parse(raw) {
                Some(status) => filter.status = status,
                None => errors.push(
                    "status",
                    format!(
                        "invalid status \"{}\": expected one of {}",
                        raw,
                        StatusFilter::allowed()
                    ),
                ),
            }
        }

        if let Some(raw) = params.get("priority") {
            match TaskPriority::parse(raw) {
                Some(priority) => filter.priority = Some(priority),
                None => errors.push(
                    "priority",
                    format!(
                        "invalid priority \"{}\": expected one of {}",
                        raw,
                        TaskPriority::allowed()
                    ),
                ),
            }
        }

        if let Some(raw) = params.get("category") {
            filter = filter.with_category(raw.as_str());
        }

        if let Some(raw) = params.get("search") {
            let before = errors.len();
            errors.check_max_len("search", raw, SEARCH_MAX_LEN);
            if errors.len() == before {
                filter = filter.with_search(raw.as_str());
            }
        }

        let sort = parse_sort(params, &mut errors);

        errors.into_result(Self { filter, sort })
    }
}

fn parse_sort(params: &HashMap<String, String>, errors: &mut ValidationErrors) -> Option<SortSpec> {
    let field = match params.get("sortBy") {
        Some(raw) => {
            let field = SortField::parse(raw);
            if field.is_none() {
                errors.push(
                    "sortBy",
                    format!(
                        "invalid sortBy \"{}\": expected one of {}",
                        raw,
                        SortField::allowed()
                    ),
                );
            }
            field
        }
        None => None,
    };

    let order = match params.get("sortOrder") {
        Some(raw) => {
            let order = SortOrder::parse(raw);
            if order.is_none() {
                errors.push(
                    "sortOrder",
                    format!("invalid sortOrder \"{}\": expected one of asc, desc", raw),
                );
            } else if !params.contains_key("sortBy") {
                errors.push("sortOrder", "sortOrder requires sortBy");
            }
            order
        }
        None => None,
    };

    field.map(|field| SortSpec::new(field, order.unwrap_or_else(|| field.default_order())))
}
