//! Markup id contract check.
//!
//! Handlers find forms, lists and containers by id. After the page mounts,
//! every id of every registered entity kind and of the hierarchy form must be
//! present in the live document.

use contracts::domain::common::EntityKind;

use crate::projections::p001_hierarchy::ui::{FORM_ID, RESPONSE_ID};

// ── Result types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedId {
    /// Владелец id: коллекция или `hierarchy`
    pub owner: &'static str,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub missing: Vec<ExpectedId>,
    pub checked: usize,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|m| format!("{}: элемент '{}' не найден", m.owner, m.id))
            .collect()
    }
}

// ── Validator ─────────────────────────────────────────────────────────────────

pub fn expected_ids(kinds: &[EntityKind]) -> Vec<ExpectedId> {
    let mut expected: Vec<ExpectedId> = kinds
        .iter()
        .flat_map(|kind| {
            let owner = kind.collection();
            let ids = kind.dom_ids();
            ids.all()
                .into_iter()
                .map(|id| ExpectedId {
                    owner,
                    id: id.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    for id in [FORM_ID, RESPONSE_ID] {
        expected.push(ExpectedId {
            owner: "hierarchy",
            id: id.to_string(),
        });
    }
    expected
}

pub fn missing_ids(expected: Vec<ExpectedId>, exists: impl Fn(&str) -> bool) -> ValidationReport {
    let checked = expected.len();
    let missing = expected.into_iter().filter(|e| !exists(&e.id)).collect();
    ValidationReport { missing, checked }
}

/// Run the check against the live DOM and log every missing id
pub fn validate_page(kinds: &[EntityKind]) -> ValidationReport {
    let document = web_sys::window().and_then(|w| w.document());
    let report = missing_ids(expected_ids(kinds), |id| {
        document
            .as_ref()
            .map(|d| d.get_element_by_id(id).is_some())
            .unwrap_or(false)
    });

    if report.is_ok() {
        log::debug!("markup check: {} ids present", report.checked);
    } else {
        for message in report.messages() {
            log::error!("{}", message);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_ids_cover_every_kind() {
        let expected = expected_ids(&EntityKind::all());
        assert_eq!(expected.len(), 3 * 6 + 2);
        assert!(expected.iter().any(|e| e.id == "updateSectionsFormContainer"));
        assert!(expected.iter().any(|e| e.id == "equipmentList"));
        assert!(expected.iter().any(|e| e.id == "hierarchyForm"));
    }

    #[test]
    fn test_missing_ids_reported() {
        let report = missing_ids(expected_ids(&[EntityKind::Factories]), |id| {
            id != "factoriesResponse"
        });
        assert!(!report.is_ok());
        assert_eq!(report.checked, 8);
        assert_eq!(
            report.messages(),
            vec!["factories: элемент 'factoriesResponse' не найден".to_string()]
        );
    }

    #[test]
    fn test_all_present() {
        let report = missing_ids(expected_ids(&EntityKind::all()), |_| true);
        assert!(report.is_ok());
    }
}
