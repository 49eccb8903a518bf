use crate::span_data::InstrumentationLibrary;
use crate::telemetry::{AttributeMap, Attributes};

/// Builds and merges vendor attribute containers from typed sources.
///
/// The adapter takes its merge rules through this trait so tests (or an
/// embedding exporter) can substitute their own.
pub trait AttributeMerger {
    /// Convert a recorded attribute mapping into a fresh container.
    fn make_attributes(&self, values: &AttributeMap) -> Attributes;

    /// Merge instrumentation-library name and version, then any resource
    /// attributes, into the container.
    fn populate_library_info(
        &self,
        attributes: Attributes,
        library: Option<&InstrumentationLibrary>,
        resource: Option<&AttributeMap>,
    ) -> Attributes;

    /// Merge resource attributes into the container.
    fn add_resource_attributes(
        &self,
        attributes: Attributes,
        resource: Option<&AttributeMap>,
    ) -> Attributes;
}

/// Default merge rules.
///
/// Library metadata lands under `instrumentation.name` and
/// `instrumentation.version`; empty strings are treated as absent metadata
/// and skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributesSupport;

impl AttributeMerger for AttributesSupport {
    fn make_attributes(&self, values: &AttributeMap) -> Attributes {
        Attributes::from(values.clone())
    }

    fn populate_library_info(
        &self,
        mut attributes: Attributes,
        library: Option<&InstrumentationLibrary>,
        resource: Option<&AttributeMap>,
    ) -> Attributes {
        if let Some(library) = library {
            if !library.name.is_empty() {
                attributes.insert("instrumentation.name", library.name.clone());
            }
            if !library.version.is_empty() {
                attributes.insert("instrumentation.version", library.version.clone());
            }
        }
        self.add_resource_attributes(attributes, resource)
    }

    fn add_resource_attributes(
        &self,
        mut attributes: Attributes,
        resource: Option<&AttributeMap>,
    ) -> Attributes {
        if let Some(resource) = resource {
            for (key, value) in resource {
                attributes.insert(key.clone(), value.clone());
            }
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::AttributeValue;

    fn map(pairs: &[(&str, AttributeValue)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn make_attributes_copies_every_entry() {
        let recorded = map(&[
            ("a", AttributeValue::Int(1)),
            ("b", AttributeValue::Bool(true)),
        ]);

        let attributes = AttributesSupport.make_attributes(&recorded);
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("a"), Some(&AttributeValue::Int(1)));
        assert_eq!(attributes.get("b"), Some(&AttributeValue::Bool(true)));
    }

    #[test]
    fn library_info_lands_under_instrumentation_keys() {
        let library = InstrumentationLibrary::new("sample-app", "1.0");
        let attributes =
            AttributesSupport.populate_library_info(Attributes::new(), Some(&library), None);

        assert_eq!(
            attributes.get("instrumentation.name"),
            Some(&AttributeValue::String("sample-app".into()))
        );
        assert_eq!(
            attributes.get("instrumentation.version"),
            Some(&AttributeValue::String("1.0".into()))
        );
    }

    #[test]
    fn empty_library_fields_are_skipped() {
        let library = InstrumentationLibrary::new("", "");
        let attributes =
            AttributesSupport.populate_library_info(Attributes::new(), Some(&library), None);
        assert!(attributes.is_empty());

        let attributes = AttributesSupport.populate_library_info(Attributes::new(), None, None);
        assert!(attributes.is_empty());
    }

    #[test]
    fn library_info_merges_resource_in_the_same_call() {
        let library = InstrumentationLibrary::new("sample-app", "1.0");
        let resource = map(&[("host.name", AttributeValue::from("web-1"))]);

        let attributes = AttributesSupport.populate_library_info(
            Attributes::new(),
            Some(&library),
            Some(&resource),
        );

        assert!(attributes.contains_key("instrumentation.name"));
        assert_eq!(
            attributes.get("host.name"),
            Some(&AttributeValue::String("web-1".into()))
        );
    }

    #[test]
    fn resource_merge_overwrites_existing_keys() {
        let existing = Attributes::new().put("host.name", "stale");
        let resource = map(&[("host.name", AttributeValue::from("web-1"))]);

        let attributes = AttributesSupport.add_resource_attributes(existing, Some(&resource));
        assert_eq!(
            attributes.get("host.name"),
            Some(&AttributeValue::String("web-1".into()))
        );

        let untouched =
            AttributesSupport.add_resource_attributes(Attributes::new().put("k", 1i64), None);
        assert_eq!(untouched.len(), 1);
    }
}
