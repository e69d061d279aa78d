//! These types are directly adapted from the introspection schema, as returned by a server
//! answering the query in `introspection_query.graphql`.
//! See https://github.com/facebook/graphql/blob/master/spec/Section%204%20--%20Introspection.md

use errors::InspectError;
use serde_json as json;
use shared::{lenient, nullable_list};
use std::fmt;
use std::str::FromStr;

/// The root type name used when the schema does not declare one.
pub const DEFAULT_QUERY_TYPE_NAME: &str = "Query";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub fn is_wrapper(self) -> bool {
        match self {
            TypeKind::List | TypeKind::NonNull => true,
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownTypeKind(pub String);

impl FromStr for TypeKind {
    type Err = UnknownTypeKind;

    fn from_str(kind: &str) -> Result<TypeKind, UnknownTypeKind> {
        match kind {
            "SCALAR" => Ok(TypeKind::Scalar),
            "OBJECT" => Ok(TypeKind::Object),
            "INTERFACE" => Ok(TypeKind::Interface),
            "UNION" => Ok(TypeKind::Union),
            "ENUM" => Ok(TypeKind::Enum),
            "INPUT_OBJECT" => Ok(TypeKind::InputObject),
            "LIST" => Ok(TypeKind::List),
            "NON_NULL" => Ok(TypeKind::NonNull),
            other => Err(UnknownTypeKind(other.to_string())),
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        };
        f.write_str(kind)
    }
}

/// A link in a type reference chain. Wrappers (`LIST`, `NON_NULL`) carry the wrapped type in
/// `of_type`, named types carry a `name`.
///
/// The kind is kept as received: an unknown or missing kind is a data-quality problem of the
/// target, not a reason to reject the whole schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeRef {
    #[serde(default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "ofType", default, deserialize_with = "lenient")]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn named(kind: TypeKind, name: &str) -> TypeRef {
        TypeRef {
            kind: Some(kind.to_string()),
            name: Some(name.to_string()),
            of_type: None,
        }
    }

    pub fn non_null(inner: TypeRef) -> TypeRef {
        TypeRef::wrapping(TypeKind::NonNull, inner)
    }

    pub fn list(inner: TypeRef) -> TypeRef {
        TypeRef::wrapping(TypeKind::List, inner)
    }

    fn wrapping(kind: TypeKind, inner: TypeRef) -> TypeRef {
        TypeRef {
            kind: Some(kind.to_string()),
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// `None` when the kind is missing or not one of the introspection `__TypeKind` values.
    pub fn kind(&self) -> Option<TypeKind> {
        self.kind.as_ref().and_then(|kind| kind.parse().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` if the server sent no usable type reference.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub type_: Option<TypeRef>,
    #[serde(rename = "defaultValue", default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub args: Vec<InputValue>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub type_: Option<TypeRef>,
    #[serde(rename = "isDeprecated", default)]
    pub is_deprecated: bool,
    #[serde(rename = "deprecationReason", default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isDeprecated", default)]
    pub is_deprecated: bool,
    #[serde(rename = "deprecationReason", default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Type {
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub fields: Vec<Field>,
    #[serde(rename = "inputFields", default, deserialize_with = "nullable_list")]
    pub input_fields: Vec<InputValue>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub interfaces: Vec<TypeRef>,
    #[serde(rename = "enumValues", default, deserialize_with = "nullable_list")]
    pub enum_values: Vec<EnumValue>,
    #[serde(rename = "possibleTypes", default, deserialize_with = "nullable_list")]
    pub possible_types: Vec<TypeRef>,
}

impl Type {
    pub fn kind(&self) -> Option<TypeKind> {
        self.kind.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub args: Vec<InputValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RootTypeName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schema {
    #[serde(rename = "queryType", default, deserialize_with = "lenient")]
    pub query_type: Option<RootTypeName>,
    #[serde(rename = "mutationType", default, deserialize_with = "lenient")]
    pub mutation_type: Option<RootTypeName>,
    #[serde(rename = "subscriptionType", default, deserialize_with = "lenient")]
    pub subscription_type: Option<RootTypeName>,
    pub types: Vec<Type>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Deserialize)]
struct SchemaData {
    #[serde(rename = "__schema")]
    schema: Schema,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    #[serde(default)]
    data: Option<json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    errors: Option<Vec<GraphqlError>>,
}

impl Schema {
    /// Validates the minimal shape of an introspection response (`data.__schema.types[]`, each
    /// type with a `kind`) and extracts the schema.
    pub fn from_response(response: json::Value) -> Result<Schema, InspectError> {
        let response: IntrospectionResponse = json::from_value(response).map_err(|err| {
            InspectError::schema_shape(format!("unexpected introspection response ({})", err))
        })?;

        let data = match response.data {
            None => {
                let reason = response
                    .errors
                    .and_then(|errors| errors.into_iter().next())
                    .map(|error| format!("the server returned no data: {}", error.message))
                    .unwrap_or_else(|| "the response has no `data`".to_string());
                return Err(InspectError::schema_shape(reason));
            }
            Some(data) => data,
        };

        let data: SchemaData = json::from_value(data).map_err(|err| {
            InspectError::schema_shape(format!("malformed `data.__schema` ({})", err))
        })?;

        Ok(data.schema)
    }

    /// The name the root query type is looked up by: the declared one, or `Query`.
    pub fn query_type_name(&self) -> &str {
        self.query_type
            .as_ref()
            .map(|root| root.name.as_str())
            .unwrap_or(DEFAULT_QUERY_TYPE_NAME)
    }

    /// Finds the OBJECT type acting as the root query type.
    pub fn locate_query_type(&self) -> Result<&Type, InspectError> {
        let name = self.query_type_name();

        if name != DEFAULT_QUERY_TYPE_NAME {
            info!("the schema declares `{}` as its root query type", name);
        }

        self.types
            .iter()
            .find(|ty| {
                ty.name.as_ref().map(String::as_str) == Some(name)
                    && ty.kind() == Some(TypeKind::Object)
            })
            .ok_or_else(|| InspectError::schema_shape(format!("query type `{}` not found", name)))
    }
}
