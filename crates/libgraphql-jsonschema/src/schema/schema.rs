use crate::OperationKind;
use crate::types::ScalarKind;
use crate::types::TypeModel;
use indexmap::IndexMap;

/// The aggregate produced by parsing one or more schema fragments.
///
/// Operation maps are keyed by declaration signature: the field name plus its
/// raw argument list, if any (e.g. `translate(text: String)`). Every map
/// follows a last-write-wins policy, both within a fragment and when
/// fragments are [merged](Schema::merge).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    mutation_type_name: Option<String>,
    mutations: IndexMap<String, TypeModel>,
    queries: IndexMap<String, TypeModel>,
    query_type_name: Option<String>,
    subscription_type_name: Option<String>,
    subscriptions: IndexMap<String, TypeModel>,
    types: IndexMap<String, TypeModel>,
    unions: IndexMap<String, Vec<String>>,
}
impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mutation(&mut self, key: impl Into<String>, value: TypeModel) {
        self.mutations.insert(key.into(), value);
    }

    pub fn add_operation(
        &mut self,
        kind: OperationKind,
        key: impl Into<String>,
        value: TypeModel,
    ) {
        self.operations_mut(kind).insert(key.into(), value);
    }

    pub fn add_query(&mut self, key: impl Into<String>, value: TypeModel) {
        self.queries.insert(key.into(), value);
    }

    /// Registers a custom `scalar` declaration. Custom scalars have no
    /// native representation, so they are modeled as `String`s.
    pub fn add_scalar(&mut self, name: impl Into<String>) {
        self.add_type(name, TypeModel::scalar(ScalarKind::String));
    }

    pub fn add_subscription(&mut self, key: impl Into<String>, value: TypeModel) {
        self.subscriptions.insert(key.into(), value);
    }

    pub fn add_type(&mut self, name: impl Into<String>, value: TypeModel) {
        self.types.insert(name.into(), value);
    }

    pub fn add_union(&mut self, name: impl Into<String>, members: Vec<String>) {
        self.unions.insert(name.into(), members);
    }

    /// Copies `other`'s explicit root type name bindings (but nothing else)
    /// into `self`.
    pub(crate) fn inherit_root_bindings(&mut self, other: &Schema) {
        self.query_type_name.clone_from(&other.query_type_name);
        self.mutation_type_name.clone_from(&other.mutation_type_name);
        self.subscription_type_name.clone_from(&other.subscription_type_name);
    }

    /// Whether nothing at all was declared into this [`Schema`].
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
            && self.mutations.is_empty()
            && self.subscriptions.is_empty()
            && self.types.is_empty()
            && self.unions.is_empty()
            && self.query_type_name.is_none()
            && self.mutation_type_name.is_none()
            && self.subscription_type_name.is_none()
    }

    /// Folds `other` into `self`. Entries from `other` replace same-named
    /// entries already present, including root type name bindings.
    pub fn merge(&mut self, other: Schema) {
        let Schema {
            mutation_type_name,
            mutations,
            queries,
            query_type_name,
            subscription_type_name,
            subscriptions,
            types,
            unions,
        } = other;

        self.mutations.extend(mutations);
        self.queries.extend(queries);
        self.subscriptions.extend(subscriptions);
        self.types.extend(types);
        self.unions.extend(unions);

        if query_type_name.is_some() {
            self.query_type_name = query_type_name;
        }
        if mutation_type_name.is_some() {
            self.mutation_type_name = mutation_type_name;
        }
        if subscription_type_name.is_some() {
            self.subscription_type_name = subscription_type_name;
        }
    }

    pub fn mutations(&self) -> &IndexMap<String, TypeModel> {
        &self.mutations
    }

    /// The name of the object type whose fields are mutations. Defaults to
    /// `"Mutation"` unless a `schema { mutation: ... }` block rebinds it.
    pub fn mutation_type_name(&self) -> &str {
        self.root_type_name(OperationKind::Mutation)
    }

    /// The [`OperationKind`] whose root type is named `type_name`, if any.
    ///
    /// Query takes precedence over mutation, and mutation over subscription,
    /// should a schema bind the same object type to more than one root.
    pub fn operation_kind_for_root_type(&self, type_name: &str) -> Option<OperationKind> {
        OperationKind::ALL.into_iter()
            .find(|kind| self.root_type_name(*kind) == type_name)
    }

    pub fn operations(&self, kind: OperationKind) -> &IndexMap<String, TypeModel> {
        match kind {
            OperationKind::Mutation => &self.mutations,
            OperationKind::Query => &self.queries,
            OperationKind::Subscription => &self.subscriptions,
        }
    }

    fn operations_mut(&mut self, kind: OperationKind) -> &mut IndexMap<String, TypeModel> {
        match kind {
            OperationKind::Mutation => &mut self.mutations,
            OperationKind::Query => &mut self.queries,
            OperationKind::Subscription => &mut self.subscriptions,
        }
    }

    pub fn queries(&self) -> &IndexMap<String, TypeModel> {
        &self.queries
    }

    /// The name of the object type whose fields are queries. Defaults to
    /// `"Query"` unless a `schema { query: ... }` block rebinds it.
    pub fn query_type_name(&self) -> &str {
        self.root_type_name(OperationKind::Query)
    }

    pub fn root_type_name(&self, kind: OperationKind) -> &str {
        let bound_name = match kind {
            OperationKind::Mutation => &self.mutation_type_name,
            OperationKind::Query => &self.query_type_name,
            OperationKind::Subscription => &self.subscription_type_name,
        };
        bound_name.as_deref()
            .unwrap_or_else(|| kind.default_root_type_name())
    }

    pub fn set_root_type_name(&mut self, kind: OperationKind, type_name: impl Into<String>) {
        let type_name = Some(type_name.into());
        match kind {
            OperationKind::Mutation => self.mutation_type_name = type_name,
            OperationKind::Query => self.query_type_name = type_name,
            OperationKind::Subscription => self.subscription_type_name = type_name,
        }
    }

    pub fn subscriptions(&self) -> &IndexMap<String, TypeModel> {
        &self.subscriptions
    }

    /// The name of the object type whose fields are subscriptions. Defaults to
    /// `"Subscription"` unless a `schema { subscription: ... }` block rebinds
    /// it.
    pub fn subscription_type_name(&self) -> &str {
        self.root_type_name(OperationKind::Subscription)
    }

    pub fn types(&self) -> &IndexMap<String, TypeModel> {
        &self.types
    }

    pub fn unions(&self) -> &IndexMap<String, Vec<String>> {
        &self.unions
    }
}
