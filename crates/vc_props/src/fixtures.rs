//! Hand-written type info shared by unit tests.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{
    Editable, EnumInfo, FieldInfo, MethodInfo, StructInfo, TypeInfo, Typed, Visibility,
};

macro_rules! impl_reflect_by_debug {
    ($ty:ty) => {
        impl Reflect for $ty {
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(self.clone())
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Mode

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mode {
    #[default]
    Idle,
    Running,
}

impl Typed for Mode {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Enum(EnumInfo::new::<Self>([
                ("Idle", Self::Idle),
                ("Running", Self::Running),
            ]))
        })
    }
}

impl Reflect for Mode {
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(*self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
        })
    }
}

// -----------------------------------------------------------------------------
// Entity

#[derive(Clone, Debug, Default)]
pub(crate) struct Entity {
    pub id: u64,
    tag: String,
}

impl Entity {
    fn set_id(&mut self, id: u64) {
        self.id = id;
        self.tag = format!("#{id}");
    }

    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }
}

impl Typed for Entity {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Struct(
                StructInfo::builder::<Self>()
                    .field(
                        FieldInfo::new::<Self, u64>("id", |e| &e.id, |e| &mut e.id).with_editable(
                            Editable::new()
                                .with_category("Identity")
                                .with_setter("set_id"),
                        ),
                    )
                    .field(
                        FieldInfo::new::<Self, String>("tag", |e| &e.tag, |e| &mut e.tag)
                            .with_visibility(Visibility::Private),
                    )
                    .method(MethodInfo::setter("set_id", Self::set_id))
                    .build(),
            )
        })
    }
}

impl_reflect_by_debug!(Entity);

// -----------------------------------------------------------------------------
// Player

#[derive(Clone, Debug, Default)]
pub(crate) struct Player {
    pub base: Entity,
    pub name: String,
    pub level: i32,
    pub level_label: String,
    pub mode: Mode,
    pub health: u32,
    pub nickname: Option<String>,
}

impl Player {
    fn set_level(&mut self, level: i32) {
        self.level = level;
        self.level_label = format!("Lv {level}");
    }

    fn set_level_text(&mut self, text: String) {
        self.level_label = text;
    }

    fn set_health(&mut self, health: u32) -> Result<(), &'static str> {
        if health > 100 {
            return Err("health is capped at 100");
        }
        self.health = health;
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Typed for Player {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            let private = Visibility::Private;
            TypeInfo::Struct(
                StructInfo::builder::<Self>()
                    .parent::<Entity>(|p| &p.base, |p| &mut p.base)
                    .field(
                        FieldInfo::new::<Self, String>("name", |p| &p.name, |p| &mut p.name)
                            .with_visibility(private)
                            .with_editable(Editable::new().with_category("Identity")),
                    )
                    .field(
                        FieldInfo::new::<Self, i32>("level", |p| &p.level, |p| &mut p.level)
                            .with_visibility(private)
                            .with_editable(
                                Editable::new()
                                    .with_category("Stats")
                                    .with_setter("set_level"),
                            ),
                    )
                    .field(
                        FieldInfo::read_only::<Self, String>("level_label", |p| &p.level_label)
                            .with_visibility(private),
                    )
                    .field(
                        FieldInfo::new::<Self, Mode>("mode", |p| &p.mode, |p| &mut p.mode)
                            .with_visibility(private)
                            .with_editable(Editable::new().with_category("Stats")),
                    )
                    .field(
                        FieldInfo::new::<Self, u32>("health", |p| &p.health, |p| &mut p.health)
                            .with_visibility(private)
                            .with_editable(
                                Editable::new()
                                    .with_category("Stats")
                                    .with_setter("set_health"),
                            ),
                    )
                    .field(
                        FieldInfo::optional::<Self, String>(
                            "nickname",
                            |p| &p.nickname,
                            |p| &mut p.nickname,
                        )
                        .with_editable(Editable::new()),
                    )
                    .method(MethodInfo::setter("set_level", Self::set_level))
                    .method(MethodInfo::setter("set_level", Self::set_level_text))
                    .method(MethodInfo::fallible_setter("set_health", Self::set_health))
                    .method(MethodInfo::action("reset", Self::reset).with_visibility(private))
                    .build(),
            )
        })
    }
}

impl_reflect_by_debug!(Player);

impl Player {
    pub(crate) fn sample() -> Self {
        Self {
            base: Entity {
                id: 7,
                tag: String::from("#7"),
            },
            name: String::from("Ada"),
            level: 3,
            level_label: String::from("Lv 3"),
            ..Default::default()
        }
    }
}
