use serde::{Deserialize, Serialize};

/// Краткая ссылка на связанную сущность (`{id, name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    /// Сервер может не вернуть id для вложенной связи
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Список id связей; ссылки без id пропускаются
pub fn relation_ids(refs: &[RelationRef]) -> Vec<i64> {
    refs.iter().filter_map(|r| r.id).collect()
}

/// Наименования связей через запятую
pub fn relation_names(refs: &[RelationRef]) -> String {
    refs.iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
