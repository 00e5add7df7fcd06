/// The structural identity of a model type, including any generic parameter
/// bindings (e.g. `Page<User>`).
///
/// Two [`TypeDescriptor`]s are equal iff their raw types are equal and all of
/// their generic arguments are (recursively) equal. This structural equality
/// is what [`CycleTracker`](crate::operation::CycleTracker) relies on to
/// detect that a type re-occurs along a traversal path.
///
/// Collections are expressed as a descriptor whose raw type is
/// [`TypeDescriptor::LIST_RAW_TYPE`] with the element type as its single
/// generic argument (see [`TypeDescriptor::list_of()`]).
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct TypeDescriptor {
    raw_type: String,
    generic_arguments: Vec<TypeDescriptor>,
}
impl TypeDescriptor {
    pub const LIST_RAW_TYPE: &'static str = "List";

    /// A descriptor for a non-generic type.
    pub fn new(raw_type: impl Into<String>) -> Self {
        Self {
            raw_type: raw_type.into(),
            generic_arguments: vec![],
        }
    }

    /// A descriptor for a generic type bound to the given arguments.
    pub fn generic(
        raw_type: impl Into<String>,
        generic_arguments: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        Self {
            raw_type: raw_type.into(),
            generic_arguments: generic_arguments.into_iter().collect(),
        }
    }

    /// A descriptor for a list whose elements are `element_type`.
    pub fn list_of(element_type: TypeDescriptor) -> Self {
        Self::generic(Self::LIST_RAW_TYPE, [element_type])
    }

    /// Unwrap one level of list, if this descriptor is a list. Otherwise
    /// returns `self`.
    pub fn element_type(&self) -> &TypeDescriptor {
        match (self.is_list(), self.generic_arguments.first()) {
            (true, Some(element_type)) => element_type,
            _ => self,
        }
    }

    /// Unwrap every level of list, e.g. `List<List<User>>` yields `User`.
    pub fn innermost_element_type(&self) -> &TypeDescriptor {
        let mut current = self;
        while current.is_list() {
            current = current.element_type();
        }
        current
    }

    pub fn generic_arguments(&self) -> &[TypeDescriptor] {
        self.generic_arguments.as_slice()
    }

    pub fn is_list(&self) -> bool {
        self.raw_type == Self::LIST_RAW_TYPE
            && self.generic_arguments.len() == 1
    }

    pub fn raw_type(&self) -> &str {
        self.raw_type.as_str()
    }

    /// Replace every occurrence of a type parameter named in `params` with the
    /// corresponding entry in `args`.
    ///
    /// Used to bind the member types of a generic model (e.g. a member typed
    /// `List<T>` on `Page<T>`) to the arguments of the concrete descriptor
    /// being traversed (e.g. `Page<User>` yields `List<User>`). Parameters
    /// without a corresponding argument are left untouched.
    pub fn substitute(
        &self,
        params: &[String],
        args: &[TypeDescriptor],
    ) -> TypeDescriptor {
        if self.generic_arguments.is_empty()
            && let Some(idx) = params.iter().position(|p| *p == self.raw_type)
            && let Some(bound) = args.get(idx) {
            return bound.clone();
        }

        Self {
            raw_type: self.raw_type.clone(),
            generic_arguments: self.generic_arguments.iter()
                .map(|arg| arg.substitute(params, args))
                .collect(),
        }
    }
}
impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_type)?;
        if !self.generic_arguments.is_empty() {
            write!(f, "<")?;
            for (idx, arg) in self.generic_arguments.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
impl std::convert::From<&str> for TypeDescriptor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeDescriptor;

    #[test]
    fn structural_equality_includes_generic_arguments() {
        let page_of_users = TypeDescriptor::generic("Page", ["User".into()]);
        let page_of_posts = TypeDescriptor::generic("Page", ["Post".into()]);

        assert_eq!(
            page_of_users,
            TypeDescriptor::generic("Page", [TypeDescriptor::new("User")]),
        );
        assert_ne!(page_of_users, page_of_posts);
        assert_ne!(page_of_users, TypeDescriptor::new("Page"));
    }

    #[test]
    fn element_type_unwraps_exactly_one_list_level() {
        let nested = TypeDescriptor::list_of(
            TypeDescriptor::list_of("Item".into()),
        );

        assert_eq!(
            nested.element_type(),
            &TypeDescriptor::list_of("Item".into()),
        );
        assert_eq!(
            TypeDescriptor::new("Item").element_type(),
            &TypeDescriptor::new("Item"),
        );
        assert_eq!(nested.innermost_element_type(), &TypeDescriptor::new("Item"));
    }

    #[test]
    fn substitute_binds_nested_type_parameters() {
        let member_type = TypeDescriptor::list_of("T".into());
        let bound = member_type.substitute(
            &["T".to_string()],
            &[TypeDescriptor::new("User")],
        );

        assert_eq!(bound, TypeDescriptor::list_of("User".into()));
        assert_eq!(bound.to_string(), "List<User>");
    }
}
