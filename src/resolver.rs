use introspection::{TypeKind, TypeRef};

/// How many `ofType` levels the introspection query asks for, i.e. how many wrappers can be
/// unwrapped before reaching the named type. Anything nested deeper is not resolved.
pub const MAX_TYPE_REF_DEPTH: usize = 6;

/// An argument must be supplied iff the outermost wrapper of its type is `NON_NULL`.
///
/// A non-null list of nullable elements is still required. A missing or unknown kind is not.
pub fn is_required(type_ref: &TypeRef) -> bool {
    type_ref.kind() == Some(TypeKind::NonNull)
}

/// The result of walking a type reference chain down to its named type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwrappedType<'a> {
    /// Wrappers from the outermost inwards.
    pub wrappers: Vec<TypeKind>,
    /// The named type at the end of the chain, if it was reached.
    pub named: Option<&'a TypeRef>,
    /// Whether the chain went on past `MAX_TYPE_REF_DEPTH`, or ended on a malformed link.
    pub opaque: bool,
}

/// Iteratively unwraps `LIST` and `NON_NULL` links, at most `MAX_TYPE_REF_DEPTH` of them in
/// total. Whatever lies beyond is treated as opaque.
pub fn unwrap_type_ref(type_ref: &TypeRef) -> UnwrappedType {
    let mut wrappers = Vec::new();
    let mut current = type_ref;

    for _ in 0..MAX_TYPE_REF_DEPTH {
        match current.kind() {
            Some(kind) if kind.is_wrapper() => match current.of_type {
                Some(ref inner) => {
                    wrappers.push(kind);
                    current = &**inner;
                }
                None => {
                    wrappers.push(kind);
                    return UnwrappedType {
                        wrappers,
                        named: None,
                        opaque: true,
                    };
                }
            },
            Some(_) => {
                return UnwrappedType {
                    wrappers,
                    named: Some(current),
                    opaque: false,
                }
            }
            None => {
                return UnwrappedType {
                    wrappers,
                    named: None,
                    opaque: true,
                }
            }
        }
    }

    match current.kind() {
        Some(kind) if !kind.is_wrapper() => UnwrappedType {
            wrappers,
            named: Some(current),
            opaque: false,
        },
        _ => UnwrappedType {
            wrappers,
            named: None,
            opaque: true,
        },
    }
}

/// Renders the chain in SDL notation, e.g. `[[String!]]!`. An unresolved inner type shows up
/// as `?`.
pub fn signature(type_ref: &TypeRef) -> String {
    let unwrapped = unwrap_type_ref(type_ref);
    let mut rendered = unwrapped
        .named
        .and_then(|named| named.name.clone())
        .unwrap_or_else(|| "?".to_string());

    for wrapper in unwrapped.wrappers.iter().rev() {
        rendered = match wrapper {
            TypeKind::NonNull => format!("{}!", rendered),
            _ => format!("[{}]", rendered),
        };
    }

    rendered
}
