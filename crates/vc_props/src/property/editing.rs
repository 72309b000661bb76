use alloc::string::String;
use core::any::Any;

use crate::catalog::{PropertyGroups, build_groups_of};
use crate::parse::ParserRegistry;
use crate::property::PropertyDescriptor;

/// The result of [`PropertyDescriptor::submit_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text was converted and written.
    Applied,
    /// Nothing was written. Holds the display text to restore, `None` if unset.
    Rejected { previous: Option<String> },
}

impl EditOutcome {
    #[inline]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl PropertyDescriptor {
    /// Returns `true` if the value can not be edited as text,
    /// and should be edited through its own properties instead.
    pub fn is_complex(&self, registry: &ParserRegistry) -> bool {
        !self.is_enum_value() && !registry.can_parse(self.field_type())
    }

    /// The properties of the current value, for nested editing.
    ///
    /// Returns `None` if the value is unset, unreadable or has no editable fields.
    /// The descriptors work on the value itself, reach it through
    /// [`read_mut`](Self::read_mut) to edit it.
    pub fn nested_groups(&self, object: &dyn Any) -> Option<PropertyGroups> {
        let value = self.read_checked(object)?;
        let groups = build_groups_of(value);
        (!groups.is_empty()).then_some(groups)
    }

    /// Write `text` the way a text field commits its content.
    ///
    /// On rejection the previous display text is returned so the editor can revert.
    pub fn submit_text(
        &self,
        object: &mut dyn Any,
        text: &str,
        registry: &ParserRegistry,
    ) -> EditOutcome {
        let previous = self.read_text(&*object);
        if self.write_from_text(object, text, registry) {
            EditOutcome::Applied
        } else {
            EditOutcome::Rejected { previous }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::EditOutcome;
    use crate::catalog::build_groups_for;
    use crate::fixtures::{Entity, Player};
    use crate::info::{Editable, FieldInfo, StructInfo, TypeInfo, Typed};
    use crate::impls::NonGenericTypeInfoCell;
    use crate::parse::ParserRegistry;

    #[derive(Clone, Debug, Default)]
    struct Squad {
        leader: Player,
    }

    impl Typed for Squad {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Struct(
                    StructInfo::builder::<Self>()
                        .field(
                            FieldInfo::new::<Self, Player>("leader", |s| &s.leader, |s| {
                                &mut s.leader
                            })
                            .with_editable(Editable::new()),
                        )
                        .build(),
                )
            })
        }
    }

    impl crate::Reflect for Squad {
        fn reflect_clone(&self) -> alloc::boxed::Box<dyn crate::Reflect> {
            alloc::boxed::Box::new(self.clone())
        }

        fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            core::fmt::Debug::fmt(self, f)
        }
    }

    #[test]
    fn submit_reports_previous_text() {
        let registry = ParserRegistry::with_defaults();
        let groups = build_groups_for::<Player>();
        let level = groups.find("level").unwrap();
        let mut player = Player::sample();

        assert_eq!(
            level.submit_text(&mut player, "oops", &registry),
            EditOutcome::Rejected {
                previous: Some(String::from("3"))
            }
        );
        assert!(level.submit_text(&mut player, "4", &registry).is_applied());
        assert_eq!(player.level, 4);
    }

    #[test]
    fn nested_editing() {
        let registry = ParserRegistry::with_defaults();
        let groups = build_groups_for::<Squad>();
        let leader = groups.find("leader").unwrap();
        let mut squad = Squad {
            leader: Player::sample(),
        };

        assert!(leader.is_complex(&registry));
        assert!(!groups.find("leader").unwrap().is_enum_value());

        let nested = leader.nested_groups(&squad).unwrap();
        let name = nested.find("name").unwrap();
        let value = leader.read_mut(&mut squad).unwrap().unwrap();
        assert!(name.write_from_text(value.as_any_mut(), "Lin", &registry));
        assert_eq!(squad.leader.name, "Lin");
    }

    #[test]
    fn scalars_and_enums_are_not_complex() {
        let registry = ParserRegistry::with_defaults();
        let groups = build_groups_for::<Player>();

        assert!(!groups.find("level").unwrap().is_complex(&registry));
        assert!(!groups.find("mode").unwrap().is_complex(&registry));
        assert!(groups.find("id").unwrap().nested_groups(&Player::sample()).is_none());
        assert!(build_groups_for::<Entity>().find("id").is_some());
    }
}
