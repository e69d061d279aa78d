use introspection::{InputValue, Type};
use resolver;

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSummary {
    pub name: String,
    pub required: bool,
    /// SDL rendering of the argument type, `None` when the reference was malformed.
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldArguments {
    pub field: String,
    pub arguments: Vec<ArgumentSummary>,
}

/// The fields of a root query type, split by whether they take arguments. Both groups keep the
/// order in which the schema declared the fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    pub with_arguments: Vec<FieldArguments>,
    pub without_arguments: Vec<String>,
}

impl Classification {
    pub fn field_count(&self) -> usize {
        self.with_arguments.len() + self.without_arguments.len()
    }

    pub fn arguments_of(&self, field: &str) -> Option<&[ArgumentSummary]> {
        self.with_arguments
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.arguments.as_slice())
    }
}

pub fn classify(query_type: &Type) -> Classification {
    let mut classification = Classification::default();

    for field in query_type.fields.iter() {
        if field.args.is_empty() {
            classification.without_arguments.push(field.name.clone());
            continue;
        }

        let arguments = field
            .args
            .iter()
            .map(|argument| summarize_argument(&field.name, argument))
            .collect();

        classification.with_arguments.push(FieldArguments {
            field: field.name.clone(),
            arguments,
        });
    }

    debug!(
        "classified {} fields: {} with arguments, {} without",
        classification.field_count(),
        classification.with_arguments.len(),
        classification.without_arguments.len()
    );

    classification
}

fn summarize_argument(field: &str, argument: &InputValue) -> ArgumentSummary {
    match argument.type_ {
        Some(ref type_ref) => {
            if type_ref.kind().is_none() {
                warn!(
                    "argument `{}` of `{}` has an unrecognized type kind {:?}, treating it as optional",
                    argument.name, field, type_ref.kind
                );
            }

            ArgumentSummary {
                name: argument.name.clone(),
                required: resolver::is_required(type_ref),
                signature: Some(resolver::signature(type_ref)),
            }
        }
        None => {
            warn!(
                "argument `{}` of `{}` has no usable type reference, treating it as optional",
                argument.name, field
            );

            ArgumentSummary {
                name: argument.name.clone(),
                required: false,
                signature: None,
            }
        }
    }
}
