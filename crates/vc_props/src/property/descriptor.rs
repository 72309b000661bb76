use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Reflect;
use crate::error::{AccessError, InvokeError};
use crate::info::{Editable, TypeInfo};
use crate::introspect::{FieldRef, MethodRef, find_public_method, upcast};
use crate::parse::ParserRegistry;

// -----------------------------------------------------------------------------
// PropertyDescriptor

/// One editable field of a scanned type.
///
/// The descriptor works on instances of the scanned type (its owner), even when
/// the field is declared by an ancestor. If the marker names a setter, the public
/// method with that name taking exactly the field's declared type is resolved
/// once at construction; writes go through it when present.
///
/// Two descriptors are equal when they describe the same field of the same owner.
#[derive(Clone)]
pub struct PropertyDescriptor {
    owner: &'static TypeInfo,
    field: FieldRef,
    editable: Editable,
    setter: Option<MethodRef>,
}

impl PropertyDescriptor {
    /// Creates a descriptor and resolves its setter.
    ///
    /// A setter name without a matching public method is not an error,
    /// writes then assign the field directly.
    pub fn new(owner: &'static TypeInfo, field: FieldRef, editable: Editable) -> Self {
        let setter = editable.setter_name().and_then(|setter_name| {
            let setter = find_public_method(owner, setter_name, &[field.info().type_info()]);
            if setter.is_none() {
                log::debug!(
                    "setter `{setter_name}` of `{}` not found on `{}`, fields will be assigned directly",
                    field.name(),
                    owner.type_path(),
                );
            }
            setter
        });

        Self {
            owner,
            field,
            editable,
            setter,
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Returns the scanned type.
    #[inline]
    pub const fn owner(&self) -> &'static TypeInfo {
        self.owner
    }

    #[inline]
    pub const fn field(&self) -> &FieldRef {
        &self.field
    }

    #[inline]
    pub const fn editable(&self) -> &Editable {
        &self.editable
    }

    #[inline]
    pub const fn category(&self) -> &'static str {
        self.editable.category()
    }

    /// Returns the [`TypeInfo`] of the declared field type.
    #[inline]
    pub fn field_type(&self) -> &'static TypeInfo {
        self.field.info().type_info()
    }

    /// Returns the resolved setter, if any.
    #[inline]
    pub const fn setter(&self) -> Option<&MethodRef> {
        self.setter.as_ref()
    }

    /// Returns `true` if the declared field type is an enumeration.
    #[inline]
    pub fn is_enum_value(&self) -> bool {
        self.field_type().is_enum()
    }

    // -------------------------------------------------------------------------
    // Read

    /// Read the current value, `Ok(None)` if the field is unset.
    #[inline]
    pub fn read<'a>(&self, object: &'a dyn Any) -> Result<Option<&'a dyn Reflect>, AccessError> {
        self.field.get(object)
    }

    /// Read the current value, treating access failures as an unset value.
    ///
    /// Failures are logged at `warn` level.
    pub fn read_checked<'a>(&self, object: &'a dyn Any) -> Option<&'a dyn Reflect> {
        self.read(object)
            .inspect_err(|err| log::warn!("failed to read property `{self}`: {err}"))
            .ok()
            .flatten()
    }

    /// Mutable access to the current value, for editing nested properties in place.
    #[inline]
    pub fn read_mut<'a>(
        &self,
        object: &'a mut dyn Any,
    ) -> Result<Option<&'a mut dyn Reflect>, AccessError> {
        self.field.get_mut(object)
    }

    /// The display text of the current value, `None` if unset or unreadable.
    pub fn read_text(&self, object: &dyn Any) -> Option<String> {
        self.read_checked(object).map(ToString::to_string)
    }

    // -------------------------------------------------------------------------
    // Write

    /// Set the field to `value`.
    ///
    /// A value of a descendant type is narrowed to the ancestor it embeds.
    /// With a setter, the setter is invoked. If it fails, the failure is logged
    /// and the field is assigned directly instead. The direct assignment never
    /// writes a value of the wrong type.
    pub fn try_write(&self, object: &mut dyn Any, value: &dyn Reflect) -> Result<(), AccessError> {
        let value = upcast(value, self.field_type()).unwrap_or(value);
        if let Some(setter) = &self.setter {
            match setter.invoke(object, &[value]) {
                Ok(()) => return Ok(()),
                Err(err) => self.setter_failed(setter, &err),
            }
        }
        self.field.set(object, value)
    }

    fn setter_failed(&self, setter: &MethodRef, err: &InvokeError) {
        log::warn!(
            "setter `{}` of property `{self}` failed, assigning directly: {err}",
            setter.name(),
        );
    }

    /// Like [`try_write`](Self::try_write), reporting only success.
    ///
    /// Failures are logged at `warn` level.
    pub fn write(&self, object: &mut dyn Any, value: &dyn Reflect) -> bool {
        self.try_write(object, value)
            .inspect_err(|err| log::warn!("failed to write property `{self}`: {err}"))
            .is_ok()
    }

    /// Parse `text` and write the result.
    ///
    /// If no parser handles the field type and the field is an enum, the text is
    /// taken as a variant name of the current value's type. An unset enum field can
    /// not be written this way because there is no value to take the type from.
    pub fn write_from_text(
        &self,
        object: &mut dyn Any,
        text: &str,
        registry: &ParserRegistry,
    ) -> bool {
        if let Some(value) = registry.parse(self.field_type(), text) {
            return self.write(object, &*value);
        }

        if !self.is_enum_value() {
            debug_trace!("`{text}` is not a valid value of property `{self}`");
            return false;
        }

        match self.variant_by_name(&*object, text) {
            Some(value) => self.write(object, &*value),
            None => false,
        }
    }

    fn variant_by_name(&self, object: &dyn Any, name: &str) -> Option<Box<dyn Reflect>> {
        let current = match self.read(object) {
            Ok(Some(current)) => current,
            Ok(None) => {
                log::debug!("property `{self}` is unset, its variants can not be looked up");
                return None;
            }
            Err(err) => {
                log::debug!("failed to read property `{self}`: {err}");
                return None;
            }
        };

        let info = current.reflect_type_info().as_enum().ok()?;
        info.variant_from_name(name)
            .inspect_err(|err| log::debug!("{err}"))
            .ok()
    }
}

// -----------------------------------------------------------------------------
// Traits

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name())
            .field("owner", &self.owner.type_path())
            .field("category", &self.category())
            .field("setter", &self.setter.as_ref().map(MethodRef::name))
            .finish()
    }
}

impl PartialEq for PropertyDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
    }
}

impl Eq for PropertyDescriptor {}

impl Hash for PropertyDescriptor {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use core::fmt;

    use vc_utils::hash::HashMap;

    use super::PropertyDescriptor;
    use crate::Reflect;
    use crate::error::{AccessError, ParseFailure};
    use crate::fixtures::{Entity, Mode, Player};
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{Editable, FieldInfo, StructInfo, TypeInfo, Typed};
    use crate::introspect::{FieldRef, collect_all_fields};
    use crate::parse::{Parser, ParserRegistry};

    #[derive(Clone, Debug, Default)]
    struct Holder {
        owner: Entity,
    }

    impl Typed for Holder {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Struct(
                    StructInfo::builder::<Self>()
                        .field(
                            FieldInfo::new::<Self, Entity>("owner", |h| &h.owner, |h| &mut h.owner)
                                .with_editable(Editable::new()),
                        )
                        .build(),
                )
            })
        }
    }

    impl Reflect for Holder {
        fn reflect_clone(&self) -> Box<dyn Reflect> {
            Box::new(self.clone())
        }

        fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Debug::fmt(self, f)
        }
    }

    fn field(name: &str) -> FieldRef {
        let mut field = collect_all_fields(Player::type_info())
            .into_iter()
            .find(|field| field.name() == name)
            .unwrap();
        field.relax_access();
        field
    }

    fn descriptor(name: &str) -> PropertyDescriptor {
        let field = field(name);
        let editable = *field.info().editable().unwrap();
        PropertyDescriptor::new(Player::type_info(), field, editable)
    }

    #[test]
    fn setter_is_resolved_by_field_type() {
        let level = descriptor("level");
        assert_eq!(level.setter().unwrap().name(), "set_level");

        let mut player = Player::sample();
        assert!(level.write(&mut player, &12_i32));
        assert_eq!(player.level, 12);
        assert_eq!(player.level_label, "Lv 12");
    }

    #[test]
    fn missing_setter_falls_back_to_assignment() {
        let field = field("name");
        let name = PropertyDescriptor::new(
            Player::type_info(),
            field,
            Editable::new().with_setter("rename"),
        );
        assert!(name.setter().is_none());

        let mut player = Player::sample();
        assert!(name.write(&mut player, &String::from("Grace")));
        assert_eq!(player.name, "Grace");
    }

    #[test]
    fn failing_setter_falls_back_to_assignment() {
        let health = descriptor("health");
        let mut player = Player::sample();

        assert!(health.write(&mut player, &40_u32));
        assert_eq!(player.health, 40);

        // `set_health` rejects values above 100.
        assert!(health.write(&mut player, &150_u32));
        assert_eq!(player.health, 150);
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let level = descriptor("level");
        let mut player = Player::sample();

        assert!(!level.write(&mut player, &String::from("high")));
        assert!(matches!(
            level.try_write(&mut player, &1.5_f64),
            Err(AccessError::ValueMismatch { field: "level", .. })
        ));
        assert_eq!(player.level, 3);
        assert_eq!(player.level_label, "Lv 3");
    }

    #[test]
    fn text_round_trip() {
        let registry = ParserRegistry::with_defaults();
        let level = descriptor("level");
        let mut player = Player::sample();

        assert!(level.write_from_text(&mut player, "42", &registry));
        assert_eq!(level.read_text(&player).as_deref(), Some("42"));
        assert_eq!(player.level_label, "Lv 42");

        assert!(!level.write_from_text(&mut player, "forty", &registry));
        assert_eq!(player.level, 42);
    }

    #[test]
    fn enum_by_variant_name() {
        let registry = ParserRegistry::with_defaults();
        let mode = descriptor("mode");
        let mut player = Player::sample();

        assert!(mode.is_enum_value());
        assert!(mode.write_from_text(&mut player, "Running", &registry));
        assert_eq!(player.mode, Mode::Running);
        assert_eq!(mode.read_text(&player).as_deref(), Some("Running"));

        assert!(!mode.write_from_text(&mut player, "running", &registry));
        assert_eq!(player.mode, Mode::Running);
    }

    #[test]
    fn unset_values() {
        let registry = ParserRegistry::with_defaults();
        let nickname = descriptor("nickname");
        let mut player = Player::sample();

        assert!(nickname.read(&player).unwrap().is_none());
        assert_eq!(nickname.read_text(&player), None);

        assert!(nickname.write_from_text(&mut player, "Countess", &registry));
        assert_eq!(player.nickname.as_deref(), Some("Countess"));
    }

    #[test]
    fn inherited_property() {
        let id = descriptor("id");
        let mut player = Player::sample();

        assert_eq!(id.setter().unwrap().depth(), 1);
        assert!(id.write(&mut player, &99_u64));
        assert_eq!(player.base.id, 99);
        assert_eq!(player.base.tag(), "#99");
    }

    #[test]
    fn private_field_without_relaxed_access() {
        let field = collect_all_fields(Player::type_info())
            .into_iter()
            .find(|field| field.name() == "name")
            .unwrap();
        let name = PropertyDescriptor::new(Player::type_info(), field, Editable::new());
        let mut player = Player::sample();

        assert!(matches!(name.read(&player), Err(AccessError::Inaccessible { .. })));
        assert!(name.read_checked(&player).is_none());
        assert!(!name.write(&mut player, &String::from("x")));
        assert_eq!(player.name, "Ada");
    }

    #[test]
    fn identity_and_display() {
        let a = descriptor("level");
        let b = descriptor("level");
        let c = descriptor("mode");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(alloc::format!("{a}"), "level");

        let mut seen: HashMap<PropertyDescriptor, usize> = HashMap::default();
        for descriptor in [a, b, c] {
            *seen.entry(descriptor).or_default() += 1;
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn descendant_value_narrows_to_field_type() {
        // Only the descendant `Player` can be parsed.
        let mut registry = ParserRegistry::default();
        registry.register_type::<Player>(Parser::typed(|text: &str| {
            let id = text.parse().map_err(|err: core::num::ParseIntError| {
                ParseFailure::Malformed {
                    type_path: "Player",
                    text: text.into(),
                    reason: err.to_string(),
                }
            })?;
            let mut player = Player::default();
            player.base.id = id;
            Ok(player)
        }));

        let field = collect_all_fields(Holder::type_info()).remove(0);
        let owner = PropertyDescriptor::new(Holder::type_info(), field, Editable::new());
        let mut holder = Holder::default();

        assert!(registry.can_parse(Entity::type_info()));
        assert!(!owner.is_complex(&registry));
        assert!(owner.write_from_text(&mut holder, "12", &registry));
        assert_eq!(holder.owner.id, 12);

        assert!(owner.write(&mut holder, &Player::sample()));
        assert_eq!(holder.owner.id, 7);
        assert_eq!(holder.owner.tag(), "#7");

        assert!(!owner.write(&mut holder, &Mode::Running));
        assert_eq!(holder.owner.id, 7);
    }
}
