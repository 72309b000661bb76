// -----------------------------------------------------------------------------
// Editable

/// The marker that makes a field show up as an editable property.
///
/// A field without this marker still belongs to its type's schema,
/// but catalogs skip it.
///
/// # Examples
///
/// ```
/// use vc_props::info::Editable;
///
/// let plain = Editable::new();
/// assert_eq!(plain.category(), "Object");
/// assert_eq!(plain.setter_name(), None);
///
/// let stats = Editable::new().with_category("Stats").with_setter("set_level");
/// assert_eq!(stats.category(), "Stats");
/// assert_eq!(stats.setter_name(), Some("set_level"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Editable {
    category: &'static str,
    setter_name: Option<&'static str>,
}

impl Editable {
    /// Category used when none is given.
    pub const DEFAULT_CATEGORY: &'static str = "Object";

    /// A marker in [`DEFAULT_CATEGORY`](Self::DEFAULT_CATEGORY) without setter.
    #[inline]
    pub const fn new() -> Self {
        Self {
            category: Self::DEFAULT_CATEGORY,
            setter_name: None,
        }
    }

    /// Replace the category label.
    #[inline]
    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    /// Name a public one-argument method used instead of direct assignment.
    #[inline]
    pub const fn with_setter(mut self, setter_name: &'static str) -> Self {
        self.setter_name = Some(setter_name);
        self
    }

    #[inline]
    pub const fn category(&self) -> &'static str {
        self.category
    }

    #[inline]
    pub const fn setter_name(&self) -> Option<&'static str> {
        self.setter_name
    }
}

impl Default for Editable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
