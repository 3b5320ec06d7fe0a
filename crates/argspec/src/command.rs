//! Matched command instances.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// One command recognized in an argument vector.
///
/// Values are kept per parameter in declaration order. Parameters that
/// received no value are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstance {
    name: String,
    values: Vec<(String, Vec<String>)>,
    implicit: bool,
}

impl CommandInstance {
    /// Creates an instance with no values.
    pub fn new(name: impl Into<String>) -> Self {
        CommandInstance {
            name: name.into(),
            values: Vec::new(),
            implicit: false,
        }
    }

    /// Creates the instance for an implicit `-D<key>=<value>` property.
    pub(crate) fn property(name: &str, key: &str, value: String) -> Self {
        let mut instance = CommandInstance::new(name);
        instance.implicit = true;
        instance.insert(key, vec![value]);
        instance
    }

    pub(crate) fn insert(&mut self, parameter: &str, values: Vec<String>) {
        self.values.push((parameter.to_string(), values));
    }

    /// The alias the command was invoked by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values recorded for `parameter`.
    pub fn values(&self, parameter: &str) -> Option<&[String]> {
        self.values
            .iter()
            .find(|(name, _)| name == parameter)
            .map(|(_, values)| values.as_slice())
    }

    /// First value recorded for `parameter`.
    pub fn value(&self, parameter: &str) -> Option<&str> {
        self.values(parameter)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns true if any parameter received a value.
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// Parameters that received values, in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns true for commands synthesized from `-D<key>=<value>`.
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }
}

struct Values<'a>(&'a [(String, Vec<String>)]);

impl Serialize for Values<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, values) in self.0 {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl Serialize for CommandInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CommandInstance", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("values", &Values(&self.values))?;
        state.serialize_field("implicit", &self.implicit)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommandInstance {
        let mut instance = CommandInstance::new("-f");
        instance.insert("fileName1", vec!["file1.txt".into()]);
        instance.insert("fileNames", vec!["file2.txt".into(), "file3.txt".into()]);
        instance
    }

    #[test]
    fn accessors() {
        let instance = sample();
        assert_eq!(instance.name(), "-f");
        assert!(instance.has_values());
        assert!(!instance.is_implicit());
        assert_eq!(instance.value("fileName1"), Some("file1.txt"));
        assert_eq!(
            instance.values("fileNames").unwrap(),
            ["file2.txt", "file3.txt"]
        );
        assert!(instance.values("other").is_none());
        assert!(instance.value("other").is_none());
    }

    #[test]
    fn parameters_in_order() {
        let instance = sample();
        let names: Vec<&str> = instance.parameters().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["fileName1", "fileNames"]);
    }

    #[test]
    fn without_values() {
        let instance = CommandInstance::new("--list");
        assert!(!instance.has_values());
        assert_eq!(instance.parameters().count(), 0);
    }

    #[test]
    fn property_instance() {
        let instance = CommandInstance::property("-Dapp.debug", "app.debug", "true".into());
        assert!(instance.is_implicit());
        assert_eq!(instance.name(), "-Dapp.debug");
        assert_eq!(instance.value("app.debug"), Some("true"));
    }

    #[test]
    fn serializes_values_as_ordered_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"-f","values":{"fileName1":["file1.txt"],"fileNames":["file2.txt","file3.txt"]},"implicit":false}"#
        );
    }
}
