// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::ast::Value;

/// Constants defined so far in one parse session.
///
/// Entries are only ever added or overwritten. Lookups hand out the value
/// as it is *now*; callers clone it, so a later redefinition never reaches
/// back into values that were already copied out.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    values: IndexMap<String, Value>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines or overwrites `name`, returning the previous value.
    pub fn define(&mut self, name: &str, value: Value) -> Option<Value> {
        self.values.insert(name.to_string(), value)
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Constants in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut table = ConstantTable::new();
        assert!(table.is_empty());

        assert_eq!(table.define("port", Value::Integer(8080)), None);
        assert_eq!(table.lookup("port"), Some(&Value::Integer(8080)));
        assert!(table.contains("port"));
        assert!(!table.contains("host"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_redefinition_overwrites_in_place() {
        let mut table = ConstantTable::new();
        table.define("a", Value::Integer(1));
        table.define("b", Value::Text("x".into()));

        let previous = table.define("a", Value::Integer(2));
        assert_eq!(previous, Some(Value::Integer(1)));
        assert_eq!(table.lookup("a"), Some(&Value::Integer(2)));

        let names: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
