// Route documentation registry and OpenAPI generation.
//
// Registrations are documentation metadata. The only runtime effect is for
// routes flagged with `validate_response`, whose bodies are checked against
// the declared schema before being sent.

use axum::http::Method;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::info::InfoBuilder;
use utoipa::openapi::path::{Operation, OperationBuilder, PathItem, PathItemType, PathsBuilder};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::ResponseBuilder;
use utoipa::openapi::server::ServerBuilder;
use utoipa::openapi::{OpenApi, OpenApiBuilder, RefOr, Required};

use crate::config::{DocsConfig, ValidationConfig};
use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::schema::{self, Schema};

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ResponseDoc {
    pub description: String,
    pub schema: Schema,
}

/// Documentation attached to one method + path
#[derive(Debug, Clone)]
pub struct RouteDoc {
    pub method: Method,
    pub path: String,
    pub description: String,
    pub request: Option<Schema>,
    pub responses: BTreeMap<u16, ResponseDoc>,
    pub validate_response: bool,
}

impl RouteDoc {
    pub fn new(method: Method, path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            description: description.into(),
            request: None,
            responses: BTreeMap::new(),
            validate_response: false,
        }
    }

    pub fn request(mut self, schema: Schema) -> Self {
        self.request = Some(schema);
        self
    }

    pub fn response(mut self, status: u16, description: impl Into<String>, schema: Schema) -> Self {
        self.responses.insert(
            status,
            ResponseDoc {
                description: description.into(),
                schema,
            },
        );
        self
    }

    /// Check this route's produced bodies against the declared schemas
    pub fn validate_response(mut self) -> Self {
        self.validate_response = true;
        self
    }

    fn operation(&self) -> Operation {
        let mut builder = OperationBuilder::new().description(Some(self.description.clone()));

        if let Some(request) = &self.request {
            let body = RequestBodyBuilder::new()
                .content(JSON, ContentBuilder::new().schema(request.to_openapi()).build())
                .required(Some(Required::True))
                .build();
            builder = builder.request_body(Some(body));
        }

        for (status, response) in &self.responses {
            let response = ResponseBuilder::new()
                .description(response.description.clone())
                .content(JSON, ContentBuilder::new().schema(response.schema.to_openapi()).build())
                .build();
            builder = builder.response(status.to_string(), RefOr::T(response));
        }

        builder.build()
    }
}

/// Every documented route plus the document-level metadata
#[derive(Debug, Clone)]
pub struct ApiDocs {
    info: DocsConfig,
    routes: Vec<RouteDoc>,
}

impl ApiDocs {
    pub fn new(info: DocsConfig) -> Self {
        Self {
            info,
            routes: Vec::new(),
        }
    }

    /// Add a route; a later registration for the same method + path replaces the earlier one
    pub fn register(&mut self, route: RouteDoc) -> &mut Self {
        self.routes
            .retain(|r| !(r.method == route.method && r.path == route.path));
        self.routes.push(route);
        self
    }

    pub fn info(&self) -> &DocsConfig {
        &self.info
    }

    pub fn routes(&self) -> &[RouteDoc] {
        &self.routes
    }

    pub fn route(&self, method: &Method, path: &str) -> Option<&RouteDoc> {
        self.routes
            .iter()
            .find(|r| r.method == *method && r.path == path)
    }

    /// Build the OpenAPI document from the current registrations
    pub fn generate(&self) -> OpenApi {
        let mut items: BTreeMap<String, PathItem> = BTreeMap::new();

        for route in &self.routes {
            let Some(item_type) = path_item_type(&route.method) else {
                tracing::warn!("Skipping {} {}: method not representable in OpenAPI", route.method, route.path);
                continue;
            };
            let operation = route.operation();
            match items.get_mut(&route.path) {
                Some(item) => {
                    item.operations.insert(item_type, operation);
                }
                None => {
                    items.insert(route.path.clone(), PathItem::new(item_type, operation));
                }
            }
        }

        let paths = items
            .into_iter()
            .fold(PathsBuilder::new(), |paths, (path, item)| paths.path(path, item))
            .build();

        let info = InfoBuilder::new()
            .title(self.info.title.clone())
            .version(self.info.version.clone())
            .description(Some(self.info.description.clone()))
            .build();

        let server = ServerBuilder::new()
            .url(self.info.server_url.clone())
            .description(Some(self.info.server_description.clone()))
            .build();

        OpenApiBuilder::new()
            .info(info)
            .servers(Some(vec![server]))
            .paths(paths)
            .build()
    }

    /// Hold a response to the route's declared contract.
    ///
    /// No-op unless the route opted in with `validate_response` and declares
    /// a schema for the response's status code.
    pub fn check_response<T: Serialize>(
        &self,
        method: &Method,
        path: &str,
        response: &ApiResponse<T>,
        config: &ValidationConfig,
    ) -> Result<(), ApiError> {
        let Some(route) = self.route(method, path).filter(|r| r.validate_response) else {
            return Ok(());
        };
        let Some(declared) = route.responses.get(&response.status().as_u16()) else {
            return Ok(());
        };

        let body = response.to_value().map_err(|e| {
            tracing::error!("Failed to serialize response for {} {}: {}", method, path, e);
            ApiError::internal_server_error("Failed to serialize response data")
        })?;

        schema::validate(&declared.schema, &body, config).map_err(|issues| {
            tracing::error!(
                "Response for {} {} breaks its declared schema: {:?}",
                method,
                path,
                issues
            );
            ApiError::internal_server_error("Response validation failed")
        })
    }
}

fn path_item_type(method: &Method) -> Option<PathItemType> {
    match *method {
        Method::GET => Some(PathItemType::Get),
        Method::POST => Some(PathItemType::Post),
        Method::PUT => Some(PathItemType::Put),
        Method::DELETE => Some(PathItemType::Delete),
        Method::PATCH => Some(PathItemType::Patch),
        Method::HEAD => Some(PathItemType::Head),
        Method::OPTIONS => Some(PathItemType::Options),
        Method::TRACE => Some(PathItemType::Trace),
        _ => None,
    }
}
