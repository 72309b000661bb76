use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::error::InvokeError;
use crate::info::{Type, TypeInfo, Typed, Visibility};

// -----------------------------------------------------------------------------
// Invoker

enum Rejected {
    Target,
    Argument(usize),
    Failed(String),
}

trait Invoker: Send + Sync {
    fn invoke(&self, target: &mut dyn Any, args: &[&dyn Reflect]) -> Result<(), Rejected>;
}

fn argument<A: Reflect + Clone>(args: &[&dyn Reflect], index: usize) -> Result<A, Rejected> {
    args.get(index)
        .and_then(|arg| arg.downcast_ref::<A>())
        .cloned()
        .ok_or(Rejected::Argument(index))
}

struct Action<T> {
    func: fn(&mut T),
}

impl<T: Any> Invoker for Action<T> {
    fn invoke(&self, target: &mut dyn Any, _: &[&dyn Reflect]) -> Result<(), Rejected> {
        let target = target.downcast_mut::<T>().ok_or(Rejected::Target)?;
        (self.func)(target);
        Ok(())
    }
}

struct Setter<T, A> {
    func: fn(&mut T, A),
}

impl<T: Any, A: Reflect + Clone> Invoker for Setter<T, A> {
    fn invoke(&self, target: &mut dyn Any, args: &[&dyn Reflect]) -> Result<(), Rejected> {
        let target = target.downcast_mut::<T>().ok_or(Rejected::Target)?;
        let arg = argument::<A>(args, 0)?;
        (self.func)(target, arg);
        Ok(())
    }
}

struct FallibleSetter<T, A, E> {
    func: fn(&mut T, A) -> Result<(), E>,
}

impl<T: Any, A: Reflect + Clone, E: fmt::Display + 'static> Invoker for FallibleSetter<T, A, E> {
    fn invoke(&self, target: &mut dyn Any, args: &[&dyn Reflect]) -> Result<(), Rejected> {
        let target = target.downcast_mut::<T>().ok_or(Rejected::Target)?;
        let arg = argument::<A>(args, 0)?;
        (self.func)(target, arg).map_err(|err| Rejected::Failed(err.to_string()))
    }
}

fn single_param<A: Typed>() -> Box<[fn() -> &'static TypeInfo]> {
    let param: fn() -> &'static TypeInfo = A::type_info;
    Box::new([param])
}

// -----------------------------------------------------------------------------
// MethodInfo

/// Compile-time info of a callable method that returns nothing.
///
/// Methods are matched by name and exact parameter types, so a type may
/// register several methods with the same name.
///
/// # Examples
///
/// ```
/// use vc_props::info::MethodInfo;
///
/// struct Counter {
///     value: i32,
/// }
///
/// impl Counter {
///     fn set_value(&mut self, value: i32) {
///         self.value = value.max(0);
///     }
/// }
///
/// let method = MethodInfo::setter("set_value", Counter::set_value);
/// let mut counter = Counter { value: 1 };
///
/// method.invoke(&mut counter, &[&-5_i32]).unwrap();
/// assert_eq!(counter.value, 0);
/// assert!(method.invoke(&mut counter, &[]).is_err());
/// ```
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    owner: Type,
    params: Box<[fn() -> &'static TypeInfo]>,
    visibility: Visibility,
    invoker: Arc<dyn Invoker>,
}

impl MethodInfo {
    fn with_invoker<T: Any>(
        name: &'static str,
        params: Box<[fn() -> &'static TypeInfo]>,
        invoker: Arc<dyn Invoker>,
    ) -> Self {
        Self {
            name,
            owner: Type::of::<T>(),
            params,
            visibility: Visibility::Public,
            invoker,
        }
    }

    /// A method without parameters.
    pub fn action<T: Any>(name: &'static str, func: fn(&mut T)) -> Self {
        Self::with_invoker::<T>(name, Box::default(), Arc::new(Action { func }))
    }

    /// A method taking one argument of type `A`.
    pub fn setter<T: Any, A: Typed + Reflect + Clone>(
        name: &'static str,
        func: fn(&mut T, A),
    ) -> Self {
        Self::with_invoker::<T>(name, single_param::<A>(), Arc::new(Setter { func }))
    }

    /// A one-argument method that may fail.
    ///
    /// An `Err` is reported as [`InvokeError::Failed`] with the error's display text.
    pub fn fallible_setter<T: Any, A: Typed + Reflect + Clone, E: fmt::Display + 'static>(
        name: &'static str,
        func: fn(&mut T, A) -> Result<(), E>,
    ) -> Self {
        Self::with_invoker::<T>(
            name,
            single_param::<A>(),
            Arc::new(FallibleSetter { func }),
        )
    }

    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] that declares this method.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn param_len(&self) -> usize {
        self.params.len()
    }

    /// Iterate over the parameter types in declaration order.
    pub fn params(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.params.iter().map(|param| param())
    }

    /// Returns `true` if the parameter types are exactly `params`.
    pub fn has_signature(&self, params: &[&TypeInfo]) -> bool {
        self.params.len() == params.len()
            && self
                .params()
                .zip(params)
                .all(|(declared, given)| declared.ty() == given.ty())
    }

    /// Invoke the method on an instance of the declaring type.
    ///
    /// Arguments are type-checked before the method runs.
    pub fn invoke(&self, target: &mut dyn Any, args: &[&dyn Reflect]) -> Result<(), InvokeError> {
        if args.len() != self.params.len() {
            return Err(InvokeError::ArgumentCount {
                method: self.name,
                expected: self.params.len(),
                found: args.len(),
            });
        }

        self.invoker.invoke(target, args).map_err(|rejected| match rejected {
            Rejected::Target => InvokeError::TargetMismatch {
                method: self.name,
                expected: self.owner.path(),
            },
            Rejected::Argument(index) => InvokeError::ArgumentMismatch {
                method: self.name,
                index,
                expected: self.params[index]().type_path(),
                found: args[index].reflect_type_info().type_path(),
            },
            Rejected::Failed(reason) => InvokeError::Failed {
                method: self.name,
                reason,
            },
        })
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("param_len", &self.params.len())
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::MethodInfo;
    use crate::error::InvokeError;
    use crate::info::Typed;

    #[derive(Default)]
    struct Door {
        open: bool,
        label: String,
    }

    impl Door {
        fn toggle(&mut self) {
            self.open = !self.open;
        }

        fn relabel(&mut self, label: String) -> Result<(), &'static str> {
            if label.is_empty() {
                return Err("label must not be empty");
            }
            self.label = label;
            Ok(())
        }
    }

    #[test]
    fn action_and_signature() {
        let method = MethodInfo::action("toggle", Door::toggle);
        let mut door = Door::default();

        method.invoke(&mut door, &[]).unwrap();
        assert!(door.open);
        assert!(method.has_signature(&[]));
        assert!(!method.has_signature(&[bool::type_info()]));
    }

    #[test]
    fn failures_are_reported() {
        let method = MethodInfo::fallible_setter("relabel", Door::relabel);
        let mut door = Door::default();

        let err = method.invoke(&mut door, &[&String::new()]).unwrap_err();
        assert_eq!(
            err,
            InvokeError::Failed {
                method: "relabel",
                reason: "label must not be empty".into(),
            }
        );

        let err = method.invoke(&mut door, &[&3_i32]).unwrap_err();
        assert!(matches!(err, InvokeError::ArgumentMismatch { index: 0, found: "i32", .. }));

        method.invoke(&mut door, &[&String::from("front")]).unwrap();
        assert_eq!(door.label, "front");
    }

    #[test]
    fn wrong_receiver() {
        let method = MethodInfo::action("toggle", Door::toggle);
        let mut other = 0_u8;
        assert!(matches!(
            method.invoke(&mut other, &[]),
            Err(InvokeError::TargetMismatch { method: "toggle", .. })
        ));
    }
}
