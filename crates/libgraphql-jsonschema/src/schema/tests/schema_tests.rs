use crate::OperationKind;
use crate::Schema;
use crate::types::EnumType;
use crate::types::ObjectType;
use crate::types::ScalarKind;
use crate::types::TypeModel;

fn person(fields: &[(&str, ScalarKind)]) -> TypeModel {
    let mut object_type = ObjectType::new();
    for (name, kind) in fields {
        object_type.add_field(*name, TypeModel::scalar(*kind));
    }
    object_type.into()
}

#[test]
fn new_schema_is_empty_with_default_root_names() {
    let schema = Schema::new();
    assert!(schema.is_empty());
    assert_eq!(schema.query_type_name(), "Query");
    assert_eq!(schema.mutation_type_name(), "Mutation");
    assert_eq!(schema.subscription_type_name(), "Subscription");
}

#[test]
fn operations_are_routed_by_kind() {
    let mut schema = Schema::new();
    schema.add_query("me", TypeModel::reference("User"));
    schema.add_mutation("like(id: ID)", TypeModel::scalar(ScalarKind::Boolean));
    schema.add_subscription("onLike", TypeModel::reference("Like"));
    schema.add_operation(OperationKind::Query, "version", TypeModel::scalar(ScalarKind::String));

    assert_eq!(schema.queries().keys().collect::<Vec<_>>(), vec!["me", "version"]);
    assert!(schema.mutations().contains_key("like(id: ID)"));
    assert!(schema.subscriptions().contains_key("onLike"));
    assert_eq!(schema.operations(OperationKind::Query), schema.queries());
    assert_eq!(schema.operations(OperationKind::Mutation), schema.mutations());
    assert_eq!(schema.operations(OperationKind::Subscription), schema.subscriptions());
    assert!(!schema.is_empty());
}

#[test]
fn root_type_names_can_be_rebound() {
    let mut schema = Schema::new();
    schema.set_root_type_name(OperationKind::Query, "MyQueryRootType");
    assert_eq!(schema.query_type_name(), "MyQueryRootType");
    assert_eq!(
        schema.operation_kind_for_root_type("MyQueryRootType"),
        Some(OperationKind::Query),
    );
    assert_eq!(schema.operation_kind_for_root_type("Query"), None);
    assert_eq!(
        schema.operation_kind_for_root_type("Mutation"),
        Some(OperationKind::Mutation),
    );
}

#[test]
fn custom_scalars_register_as_strings() {
    let mut schema = Schema::new();
    schema.add_scalar("UUID");
    assert_eq!(schema.types().get("UUID"), Some(&TypeModel::scalar(ScalarKind::String)));
}

#[test]
fn merge_is_last_write_wins() {
    let mut first = Schema::new();
    first.add_type("Person", person(&[("name", ScalarKind::String)]));
    first.add_type("Direction", EnumType::from_iter(["NORTH", "SOUTH"]).into());
    first.add_query("me", TypeModel::reference("Person"));
    first.add_union("SearchResult", vec!["Photo".to_string()]);

    let mut second = Schema::new();
    second.add_type("Person", person(&[("age", ScalarKind::Int)]));
    second.add_query("you", TypeModel::reference("Person"));
    second.add_union("SearchResult", vec!["Photo".to_string(), "Person".to_string()]);

    let mut aggregate = Schema::new();
    aggregate.merge(first);
    aggregate.merge(second);

    assert_eq!(
        aggregate.types().get("Person"),
        Some(&person(&[("age", ScalarKind::Int)])),
    );
    assert!(aggregate.types().contains_key("Direction"));
    assert_eq!(aggregate.queries().len(), 2);
    assert_eq!(aggregate.unions().get("SearchResult").map(Vec::len), Some(2));
}

#[test]
fn merge_carries_root_bindings_over() {
    let mut first = Schema::new();
    first.set_root_type_name(OperationKind::Query, "RootQuery");
    first.set_root_type_name(OperationKind::Mutation, "RootMutation");

    let mut second = Schema::new();
    second.set_root_type_name(OperationKind::Mutation, "OtherMutation");

    let mut aggregate = Schema::new();
    aggregate.merge(first);
    aggregate.merge(second);

    assert_eq!(aggregate.query_type_name(), "RootQuery");
    assert_eq!(aggregate.mutation_type_name(), "OtherMutation");
    assert_eq!(aggregate.subscription_type_name(), "Subscription");
}
