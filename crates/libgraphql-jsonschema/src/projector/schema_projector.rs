use crate::OperationKind;
use crate::Schema;
use crate::projector::ProjectionError;
use crate::projector::Result;
use crate::types::Dimensionality;
use crate::types::EnumType;
use crate::types::ListType;
use crate::types::Nullability;
use crate::types::ObjectType;
use crate::types::ReferenceType;
use crate::types::TypeModel;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";
const DOCUMENT_DESCRIPTION: &str = "JSON schema converted from GraphQL schema.";

/// Turns the operations of a [`Schema`] into JSON Schema documents.
///
/// References are inlined: each one is replaced by the projection of the type
/// it names. A reference back to a type that is already being expanded on the
/// current path renders only that type's `"type"` keyword.
#[derive(Clone, Copy, Debug)]
pub struct SchemaProjector<'a> {
    schema: &'a Schema,
}
impl<'a> SchemaProjector<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
        }
    }

    /// Projects the operation named `name` (its full declaration signature,
    /// arguments included) of the given kind.
    pub fn convert(&self, kind: OperationKind, name: &str) -> Result<Value> {
        let operations = self.schema.operations(kind);
        let Some(type_model) = operations.get(name) else {
            return Err(ProjectionError::UnknownOperation {
                kind,
                name: name.to_string(),
                known_names: operations.keys().cloned().collect(),
            });
        };

        log::debug!("Projecting {kind} `{name}`");
        self.project(type_model)
    }

    pub fn convert_mutation(&self, name: &str) -> Result<Value> {
        self.convert(OperationKind::Mutation, name)
    }

    pub fn convert_query(&self, name: &str) -> Result<Value> {
        self.convert(OperationKind::Query, name)
    }

    pub fn convert_subscription(&self, name: &str) -> Result<Value> {
        self.convert(OperationKind::Subscription, name)
    }

    /// Projects an arbitrary node, resolving references against the
    /// projector's schema.
    pub fn project(&self, type_model: &TypeModel) -> Result<Value> {
        let mut expanding = vec![];
        self.project_node(type_model, &mut expanding)
    }

    /// The value of the `"type"` keyword for `type_model`: the bare kind
    /// name when non-null, `[kind, "null"]` otherwise.
    ///
    /// Enums and references have no type definition of their own.
    pub fn type_definition(type_model: &TypeModel) -> Option<Value> {
        let kind_name = match type_model {
            TypeModel::List(_) => "array",
            TypeModel::Object(_) => "object",
            TypeModel::Scalar(scalar_type) => scalar_type.kind().json_type_name(),
            TypeModel::Enum(_) | TypeModel::Reference(_) => return None,
        };
        Some(kind_definition(kind_name, type_model.nullability()))
    }

    fn project_node(
        &self,
        type_model: &TypeModel,
        expanding: &mut Vec<String>,
    ) -> Result<Value> {
        match type_model {
            TypeModel::Enum(enum_type) => Ok(project_enum(enum_type)),
            TypeModel::List(list_type) => self.project_list(list_type, expanding),
            TypeModel::Object(object_type) => self.project_object(object_type, expanding),
            TypeModel::Reference(reference_type) =>
                self.project_reference(reference_type, expanding),
            TypeModel::Scalar(_) => Ok(shallow_projection(type_model)),
        }
    }

    fn project_list(
        &self,
        list_type: &ListType,
        expanding: &mut Vec<String>,
    ) -> Result<Value> {
        let list_definition = kind_definition("array", list_type.nullability());
        let element = self.project_node(list_type.element(), expanding)?;
        let items = match list_type.dimensionality() {
            Dimensionality::Single => element,

            // The row level reuses the outer list's type definition.
            Dimensionality::Multi => json!({
                "type": list_definition.clone(),
                "items": element,
            }),
        };

        Ok(json!({
            "type": list_definition,
            "items": items,
        }))
    }

    fn project_object(
        &self,
        object_type: &ObjectType,
        expanding: &mut Vec<String>,
    ) -> Result<Value> {
        let mut properties = Map::new();
        for (field_name, field_type) in object_type.fields() {
            properties.insert(field_name.clone(), self.project_node(field_type, expanding)?);
        }

        Ok(json!({
            "type": kind_definition("object", object_type.nullability()),
            "properties": properties,
        }))
    }

    fn project_reference(
        &self,
        reference_type: &ReferenceType,
        expanding: &mut Vec<String>,
    ) -> Result<Value> {
        let target_name = reference_type.target_name();
        let target = self.schema.types().get(target_name).ok_or_else(|| {
            ProjectionError::UnresolvedReference {
                name: target_name.to_string(),
            }
        })?;

        let mut node =
            if expanding.iter().any(|name| name == target_name) {
                log::debug!("Not expanding recursive reference to `{target_name}`");
                shallow_projection(target)
            } else {
                expanding.push(target_name.to_string());
                let node = self.project_node(target, expanding);
                expanding.pop();
                node?
            };

        if !reference_type.nullability().is_nullable() {
            collapse_nullable_type(&mut node);
        }
        Ok(node)
    }
}

/// Prepends the draft-04 document keywords (`$schema`, `title`,
/// `description`) to a projected node.
pub fn wrap_document(title: &str, node: Value) -> Value {
    let mut document = Map::new();
    document.insert("$schema".to_string(), json!(DRAFT_04_SCHEMA_URI));
    document.insert("title".to_string(), json!(title));
    document.insert("description".to_string(), json!(DOCUMENT_DESCRIPTION));
    match node {
        Value::Object(fields) => document.extend(fields),
        other => {
            document.insert("items".to_string(), other);
        },
    }
    Value::Object(document)
}

/// Narrows a `[kind, "null"]` type definition down to `kind`.
fn collapse_nullable_type(node: &mut Value) {
    let Some(type_definition) = node.get_mut("type") else {
        return;
    };
    let Value::Array(kind_names) = type_definition else {
        return;
    };
    if kind_names.len() < 2 {
        return;
    }

    let non_null_kind = kind_names.iter()
        .filter_map(Value::as_str)
        .filter(|kind_name| !kind_name.eq_ignore_ascii_case("null"))
        .last()
        .map(str::to_string);
    if let Some(non_null_kind) = non_null_kind {
        *type_definition = Value::String(non_null_kind);
    }
}

fn kind_definition(kind_name: &str, nullability: Nullability) -> Value {
    match nullability {
        Nullability::Nullable => json!([kind_name, "null"]),
        Nullability::NonNull => json!(kind_name),
    }
}

fn project_enum(enum_type: &EnumType) -> Value {
    json!({
        "enum": enum_type.values(),
    })
}

/// The projection of `type_model` without descending into fields, items or
/// references.
fn shallow_projection(type_model: &TypeModel) -> Value {
    match type_model {
        TypeModel::Enum(enum_type) => project_enum(enum_type),
        _ => match SchemaProjector::type_definition(type_model) {
            Some(type_definition) => json!({
                "type": type_definition,
            }),
            None => json!({}),
        },
    }
}
