//! Categorized collections of [`PropertyDescriptor`]s.
//!
//! [`build_groups`] scans a type and all of its ancestors, keeps the fields
//! carrying an [`Editable`](crate::info::Editable) marker and groups them by
//! category. Categories are ordered by their first appearance, properties keep
//! the scan order: own fields first, then the parent's, and so on.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::Any;
use core::slice;

use vc_utils::hash::HashMap;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::introspect::collect_all_fields;
use crate::property::PropertyDescriptor;

// -----------------------------------------------------------------------------
// PropertyGroup

/// The properties of one category.
#[derive(Clone, Debug)]
pub struct PropertyGroup {
    category: &'static str,
    properties: Vec<PropertyDescriptor>,
}

impl PropertyGroup {
    #[inline]
    pub const fn category(&self) -> &'static str {
        self.category
    }

    #[inline]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PropertyDescriptor> {
        self.properties.iter()
    }

    /// Returns the first property with the given name.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|property| property.name() == name)
    }
}

impl<'a> IntoIterator for &'a PropertyGroup {
    type Item = &'a PropertyDescriptor;
    type IntoIter = slice::Iter<'a, PropertyDescriptor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// PropertyGroups

/// Ordered mapping from category to properties.
///
/// Empty categories are never stored.
#[derive(Clone, Debug, Default)]
pub struct PropertyGroups {
    groups: Vec<PropertyGroup>,
    index: HashMap<&'static str, usize>,
}

impl PropertyGroups {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property to the group of its category.
    pub fn push(&mut self, property: PropertyDescriptor) {
        let category = property.category();
        let index = *self.index.entry(category).or_insert_with(|| {
            self.groups.push(PropertyGroup {
                category,
                properties: Vec::new(),
            });
            self.groups.len() - 1
        });
        self.groups[index].properties.push(property);
    }

    /// Returns the group of a category.
    pub fn get(&self, category: &str) -> Option<&PropertyGroup> {
        self.index.get(category).map(|&index| &self.groups[index])
    }

    /// Iterate over the categories in order.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.groups.iter().map(PropertyGroup::category)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PropertyGroup> {
        self.groups.iter()
    }

    /// Iterate over all properties, category by category.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.groups.iter().flat_map(PropertyGroup::iter)
    }

    /// Returns the first property with the given name in any category.
    pub fn find(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties().find(|property| property.name() == name)
    }

    /// Returns the number of categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of properties over all categories.
    pub fn property_count(&self) -> usize {
        self.groups.iter().map(PropertyGroup::len).sum()
    }

    /// Render every property of `object`: a line per category, followed by a
    /// tab-indented `name value` line per property.
    ///
    /// Unset values show as `<unset>`, unreadable ones as `<unavailable>`.
    pub fn describe(&self, object: &dyn Any) -> String {
        let mut out = String::new();
        for group in &self.groups {
            out.push_str(group.category);
            out.push('\n');
            for property in group {
                let value = match property.read(object) {
                    Ok(Some(value)) => value.to_string(),
                    Ok(None) => String::from("<unset>"),
                    Err(_) => String::from("<unavailable>"),
                };
                out.push_str(&format!("\t{property} {value}\n"));
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a PropertyGroups {
    type Item = &'a PropertyGroup;
    type IntoIter = slice::Iter<'a, PropertyGroup>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Builders

/// Collect the editable properties of a type, including inherited ones.
///
/// Private marked fields are made accessible through their descriptors.
pub fn build_groups(type_info: &'static TypeInfo) -> PropertyGroups {
    let mut groups = PropertyGroups::new();

    for mut field in collect_all_fields(type_info) {
        let Some(editable) = field.info().editable().copied() else {
            continue;
        };
        field.relax_access();
        debug_trace!(
            "`{}`: property `{}` in category `{}`",
            type_info.type_path(),
            field.name(),
            editable.category(),
        );
        groups.push(PropertyDescriptor::new(type_info, field, editable));
    }

    groups
}

/// [`build_groups`] for the runtime type of `object`.
#[inline]
pub fn build_groups_of(object: &dyn Reflect) -> PropertyGroups {
    build_groups(object.reflect_type_info())
}

/// [`build_groups`] for `T`.
#[inline]
pub fn build_groups_for<T: Typed>() -> PropertyGroups {
    build_groups(T::type_info())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{PropertyGroups, build_groups, build_groups_for, build_groups_of};
    use crate::Reflect;
    use crate::fixtures::{Mode, Player};
    use crate::info::Typed;

    #[test]
    fn grouped_in_first_appearance_order() {
        let groups = build_groups_for::<Player>();

        assert_eq!(
            groups.categories().collect::<Vec<_>>(),
            ["Identity", "Stats", "Object"]
        );
        let names = |category| {
            groups
                .get(category)
                .unwrap()
                .iter()
                .map(|property| property.name())
                .collect::<Vec<_>>()
        };
        assert_eq!(names("Identity"), ["name", "id"]);
        assert_eq!(names("Stats"), ["level", "mode", "health"]);
        assert_eq!(names("Object"), ["nickname"]);
        assert_eq!(groups.property_count(), 6);
        assert!(groups.find("level_label").is_none());
    }

    #[test]
    fn private_properties_are_accessible() {
        let groups = build_groups_for::<Player>();
        assert!(groups.properties().all(|property| property.field().is_accessible()));
    }

    #[test]
    fn types_without_properties() {
        assert!(build_groups(i32::type_info()).is_empty());
        assert!(build_groups(Mode::type_info()).is_empty());
        assert_eq!(PropertyGroups::new().len(), 0);
    }

    #[test]
    fn same_catalog_from_value() {
        let player: &dyn Reflect = &Player::sample();
        let groups = build_groups_of(player);
        assert_eq!(groups.property_count(), build_groups_for::<Player>().property_count());
    }

    #[test]
    fn describe_object() {
        let groups = build_groups_for::<Player>();
        let text = groups.describe(&Player::sample());

        assert_eq!(
            text,
            "Identity\n\tname Ada\n\tid 7\nStats\n\tlevel 3\n\tmode Idle\n\thealth 0\nObject\n\tnickname <unset>\n"
        );

        let other = groups.describe(&0_u8);
        assert!(other.contains("\tname <unavailable>\n"));
    }
}
