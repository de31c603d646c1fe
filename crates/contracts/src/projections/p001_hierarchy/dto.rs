use serde::{Deserialize, Serialize};

/// Родительский объект в иерархии
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyParent {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: i64,
    pub name: String,
}

/// Дочерний объект в иерархии (рекурсивно)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyChild {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub children: Option<Vec<HierarchyChild>>,
}

impl HierarchyChild {
    pub fn children(&self) -> &[HierarchyChild] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Ответ `GET /hierarchy/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyResponse {
    pub entity_type: String,
    pub entity_id: i64,
    pub entity_name: String,
    #[serde(default)]
    pub parents: Vec<HierarchyParent>,
    #[serde(default)]
    pub children: Vec<HierarchyChild>,
}

impl HierarchyResponse {
    /// Общее число дочерних объектов на всех уровнях
    pub fn descendant_count(&self) -> usize {
        fn count(nodes: &[HierarchyChild]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_factory_hierarchy() {
        let value = json!({
            "entity_type": "factory",
            "entity_id": 1,
            "entity_name": "Фабрика для Иерархии",
            "parents": [],
            "children": [
                {
                    "type": "section",
                    "id": 2,
                    "name": "Участок",
                    "children": [{"type": "equipment", "id": 3, "name": "Станок", "children": []}]
                }
            ]
        });
        let resp: HierarchyResponse = serde_json::from_value(value).unwrap();
        assert!(resp.parents.is_empty());
        assert_eq!(resp.children[0].entity_type, "section");
        assert_eq!(resp.children[0].children()[0].id, 3);
        assert_eq!(resp.descendant_count(), 2);
    }

    #[test]
    fn test_children_may_be_null() {
        let value = json!({
            "entity_type": "equipment",
            "entity_id": 3,
            "entity_name": "Станок",
            "parents": [
                {"type": "section", "id": 2, "name": "Участок"},
                {"type": "factory", "id": 1, "name": "Фабрика"}
            ],
            "children": [{"type": "equipment", "id": 9, "name": "Узел", "children": null}]
        });
        let resp: HierarchyResponse = serde_json::from_value(value).unwrap();
        assert_eq!(resp.parents.len(), 2);
        assert!(resp.children[0].children().is_empty());
    }
}
