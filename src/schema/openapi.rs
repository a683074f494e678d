use utoipa::openapi::schema::{
    ArrayBuilder, Object, ObjectBuilder, Schema as OpenApiSchema, SchemaFormat, SchemaType,
};
use utoipa::openapi::RefOr;

use super::types::{ObjectSchema, Schema, StringSchema};

impl Schema {
    /// Render as an OpenAPI schema object for the generated document
    pub fn to_openapi(&self) -> RefOr<OpenApiSchema> {
        let schema = match self {
            Schema::String(string) => OpenApiSchema::Object(string_object(string)),
            Schema::Integer => OpenApiSchema::Object(
                ObjectBuilder::new().schema_type(SchemaType::Integer).build(),
            ),
            Schema::Number => OpenApiSchema::Object(
                ObjectBuilder::new().schema_type(SchemaType::Number).build(),
            ),
            Schema::Literal(value) => OpenApiSchema::Object(
                ObjectBuilder::new()
                    .schema_type(SchemaType::Boolean)
                    .enum_values(Some([*value]))
                    .build(),
            ),
            Schema::Array(item) => {
                OpenApiSchema::Array(ArrayBuilder::new().items(item.to_openapi()).build())
            }
            Schema::Object(object) => OpenApiSchema::Object(object_object(object)),
            Schema::Optional(inner) => return inner.to_openapi(),
        };
        RefOr::T(schema)
    }
}

fn string_object(string: &StringSchema) -> Object {
    let format = string
        .is_email()
        .then(|| SchemaFormat::Custom("email".to_string()));

    ObjectBuilder::new()
        .schema_type(SchemaType::String)
        .format(format)
        .min_length(string.min())
        .max_length(string.max())
        .build()
}

fn object_object(object: &ObjectSchema) -> Object {
    object
        .fields
        .iter()
        .fold(
            ObjectBuilder::new().schema_type(SchemaType::Object),
            |builder, (name, field)| {
                let builder = builder.property(name, field.to_openapi());
                if field.is_required() {
                    builder.required(name)
                } else {
                    builder
                }
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rendered(schema: &Schema) -> Value {
        serde_json::to_value(schema.to_openapi()).unwrap()
    }

    #[test]
    fn renders_string_constraints() {
        let schema: Schema = Schema::string().email().min_length(1).max_length(255).into();
        let value = rendered(&schema);

        assert_eq!(value["type"], "string");
        assert_eq!(value["format"], "email");
        assert_eq!(value["minLength"], 1);
        assert_eq!(value["maxLength"], 255);
    }

    #[test]
    fn renders_object_with_required_fields() {
        let schema: Schema = Schema::object()
            .field("success", Schema::literal(true))
            .field("token", Schema::string())
            .into();
        let value = rendered(&schema);

        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["success"]["type"], "boolean");
        assert_eq!(value["properties"]["success"]["enum"], json!([true]));
        assert_eq!(value["properties"]["token"]["type"], "string");
        assert_eq!(value["required"], json!(["success", "token"]));
    }

    #[test]
    fn optional_fields_are_not_required() {
        let schema: Schema = Schema::object()
            .field("key", Schema::string())
            .field("value", Schema::optional(Schema::string()))
            .into();
        let value = rendered(&schema);

        assert_eq!(value["properties"]["value"]["type"], "string");
        assert_eq!(value["required"], json!(["key"]));
    }

    #[test]
    fn renders_arrays_of_objects() {
        let schema = Schema::array(Schema::object().field("key", Schema::string()));
        let value = rendered(&schema);

        assert_eq!(value["type"], "array");
        assert_eq!(value["items"]["type"], "object");
        assert_eq!(value["items"]["properties"]["key"]["type"], "string");
    }
}
