use serde::Serialize;

/// Declarative description of a JSON value's shape and constraints.
///
/// The same schema drives request validation and the generated API document,
/// so a route's documented contract and its enforced contract cannot drift.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String(StringSchema),
    Integer,
    Number,
    /// A boolean that must equal the given value (`success: true`)
    Literal(bool),
    Array(Box<Schema>),
    Object(ObjectSchema),
    /// Object field that may be left out; checked only when present
    Optional(Box<Schema>),
}

impl Schema {
    pub fn string() -> StringSchema {
        StringSchema::default()
    }

    pub fn integer() -> Self {
        Schema::Integer
    }

    pub fn number() -> Self {
        Schema::Number
    }

    pub fn literal(value: bool) -> Self {
        Schema::Literal(value)
    }

    pub fn array(item: impl Into<Schema>) -> Self {
        Schema::Array(Box::new(item.into()))
    }

    pub fn object() -> ObjectSchema {
        ObjectSchema::default()
    }

    pub fn optional(inner: impl Into<Schema>) -> Self {
        Schema::Optional(Box::new(inner.into()))
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Schema::Optional(_))
    }

    /// Name of the expected type, as used in issue messages
    pub fn type_name(&self) -> String {
        match self {
            Schema::String(_) => "string".to_string(),
            Schema::Integer => "integer".to_string(),
            Schema::Number => "number".to_string(),
            Schema::Literal(value) => value.to_string(),
            Schema::Array(_) => "Array".to_string(),
            Schema::Object(_) => "Object".to_string(),
            Schema::Optional(inner) => inner.type_name(),
        }
    }
}

/// String constraints, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringCheck {
    Email,
    MinLength(usize),
    MaxLength(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub checks: Vec<StringCheck>,
}

impl StringSchema {
    pub fn email(mut self) -> Self {
        self.checks.push(StringCheck::Email);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.checks.push(StringCheck::MinLength(min));
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.checks.push(StringCheck::MaxLength(max));
        self
    }

    pub fn is_email(&self) -> bool {
        self.checks.contains(&StringCheck::Email)
    }

    /// Tightest lower bound declared, if any
    pub fn min(&self) -> Option<usize> {
        self.checks
            .iter()
            .filter_map(|c| match c {
                StringCheck::MinLength(n) => Some(*n),
                _ => None,
            })
            .max()
    }

    /// Tightest upper bound declared, if any
    pub fn max(&self) -> Option<usize> {
        self.checks
            .iter()
            .filter_map(|c| match c {
                StringCheck::MaxLength(n) => Some(*n),
                _ => None,
            })
            .min()
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

/// Object with an ordered list of fields, required unless wrapped in
/// [`Schema::optional`]. Keys not declared here are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub fields: Vec<(String, Schema)>,
}

impl ObjectSchema {
    /// Start from every field of `base`; fields added afterwards extend it,
    /// and a field re-declared with the same name replaces the base one.
    pub fn extend(base: &ObjectSchema) -> Self {
        base.clone()
    }

    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let name = name.into();
        let schema = schema.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, schema)| schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub message: String,
    pub path: Vec<IssuePathItem>,
}

/// One level of an issue's location: the field key and the input found there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePathItem {
    pub key: String,
    /// Absent when the field itself was missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Issue {
    /// Issue about the whole body rather than one field
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// Dotted field path, e.g. `user.email`
    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .map(|p| p.key.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}
