//! Document-store query shape produced by the query builder and interpreted
//! by the camp store.

use serde_json::{json, Map, Value};

/// Document paths of the camp fields that queries touch
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const LOCATION: &str = "location";
    pub const CATEGORY: &str = "category";
    pub const AGE_MIN: &str = "ageRange.min";
    pub const AGE_MAX: &str = "ageRange.max";
    pub const PRICE: &str = "price";
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
    pub const IS_DELETED: &str = "isDeleted";
    pub const STATUS: &str = "status";
}

/// Comparison applied to a single document field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOp {
    Eq(Value),
    /// Also true when the field is missing
    Ne(Value),
    Gte(Value),
    Lte(Value),
    /// Literal, case-insensitive substring match on a string field
    ContainsIgnoreCase(String),
}

/// A match expression over camp documents
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// Every sub-expression must hold; empty means "match everything"
    All(Vec<Criteria>),
    /// At least one sub-expression must hold; empty matches nothing
    Any(Vec<Criteria>),
    Field { path: &'static str, op: FieldOp },
}

impl Criteria {
    pub fn field(path: &'static str, op: FieldOp) -> Self {
        Criteria::Field { path, op }
    }

    /// Whether any condition in this expression looks at `path`
    pub fn references(&self, path: &str) -> bool {
        match self {
            Criteria::All(parts) | Criteria::Any(parts) => {
                parts.iter().any(|part| part.references(path))
            }
            Criteria::Field { path: field, .. } => *field == path,
        }
    }

    /// Mongo-style rendering, used for logging
    pub fn to_document(&self) -> Value {
        match self {
            Criteria::All(parts) => {
                json!({ "$and": parts.iter().map(Criteria::to_document).collect::<Vec<_>>() })
            }
            Criteria::Any(parts) => {
                json!({ "$or": parts.iter().map(Criteria::to_document).collect::<Vec<_>>() })
            }
            Criteria::Field { path, op } => {
                let condition = match op {
                    FieldOp::Eq(value) => json!({ "$eq": value }),
                    FieldOp::Ne(value) => json!({ "$ne": value }),
                    FieldOp::Gte(value) => json!({ "$gte": value }),
                    FieldOp::Lte(value) => json!({ "$lte": value }),
                    FieldOp::ContainsIgnoreCase(text) => {
                        json!({ "$regex": escape_regex(text), "$options": "i" })
                    }
                };
                let mut document = Map::new();
                document.insert((*path).to_string(), condition);
                Value::Object(document)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl From<shared::SortOrder> for SortDirection {
    fn from(order: shared::SortOrder) -> Self {
        match order {
            shared::SortOrder::Asc => SortDirection::Ascending,
            shared::SortOrder::Desc => SortDirection::Descending,
        }
    }
}

/// Single-field ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Which soft-deleted records a query may see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    ActiveOnly,
    IncludeDeleted,
}

/// A complete store query: match expression plus optional ordering
#[derive(Debug, Clone, PartialEq)]
pub struct CampQuery {
    pub criteria: Criteria,
    /// `None` keeps insertion order
    pub sort: Option<SortSpec>,
}

impl CampQuery {
    pub fn to_document(&self) -> Value {
        let sort = match self.sort {
            Some(spec) => {
                let direction = match spec.direction {
                    SortDirection::Ascending => 1,
                    SortDirection::Descending => -1,
                };
                let mut document = Map::new();
                document.insert(spec.field.to_string(), json!(direction));
                Value::Object(document)
            }
            None => Value::Null,
        };
        json!({ "match": self.criteria.to_document(), "sort": sort })
    }
}

fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_walks_nested_expressions() {
        let criteria = Criteria::All(vec![
            Criteria::field(fields::STATUS, FieldOp::Eq(json!("active"))),
            Criteria::Any(vec![Criteria::field(
                fields::NAME,
                FieldOp::ContainsIgnoreCase("lake".to_string()),
            )]),
        ]);
        assert!(criteria.references(fields::NAME));
        assert!(criteria.references(fields::STATUS));
        assert!(!criteria.references(fields::PRICE));
    }

    #[test]
    fn test_to_document_renders_mongo_shape() {
        let query = CampQuery {
            criteria: Criteria::All(vec![
                Criteria::field(fields::PRICE, FieldOp::Gte(json!(100.0))),
                Criteria::field(fields::NAME, FieldOp::ContainsIgnoreCase("a.b".to_string())),
            ]),
            sort: Some(SortSpec {
                field: fields::PRICE,
                direction: SortDirection::Descending,
            }),
        };

        assert_eq!(
            query.to_document(),
            json!({
                "match": {"$and": [
                    {"price": {"$gte": 100.0}},
                    {"name": {"$regex": "a\\.b", "$options": "i"}}
                ]},
                "sort": {"price": -1}
            })
        );
    }

    #[test]
    fn test_unsorted_query_renders_null_sort() {
        let query = CampQuery {
            criteria: Criteria::All(Vec::new()),
            sort: None,
        };
        assert_eq!(query.to_document()["sort"], Value::Null);
    }
}
