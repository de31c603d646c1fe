use serde::{Deserialize, Serialize};

/// Максимальное число записей, запрашиваемых для списков и выпадающих списков
pub const LIST_LIMIT: u32 = 1000;

/// Параметры `GET /{entity}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: u32,
    pub include_inactive: bool,
}

/// Параметры `GET /hierarchy/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyQuery {
    pub entity_type: String,
    pub entity_id: i64,
}
