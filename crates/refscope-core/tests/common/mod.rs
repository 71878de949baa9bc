use serde_json::{json, Value};

/// A small pet store document exercising every reference shape
///
/// - `Pet` is reached from two places (diamond through `Owner` and `Order`)
/// - `Node.next` refers back to `Node` (self reference)
/// - `Category.parent` refers to `Category` (recursive but optional)
/// - `Broken.link` points at a schema that does not exist
/// - `Alias` is a reference to a reference
/// - `Animal` is a `oneOf` over `Cat` and `Dog`
#[allow(dead_code)]
pub fn petstore() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {"title": "Pet Store", "version": "1.0.0"},
        "paths": {
            "/pets": {
                "parameters": [
                    {"name": "X-Trace", "in": "header", "schema": {"type": "string"}}
                ],
                "get": {
                    "operationId": "listPets",
                    "summary": "List all pets",
                    "parameters": [
                        {"$ref": "#/components/parameters/Limit"},
                        {"name": "status", "in": "query", "schema": {"$ref": "#/components/schemas/Status"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "A list of pets",
                            "content": {
                                "application/json": {
                                    "schema": {"type": "array", "items": {"$ref": "#/components/schemas/Pet"}}
                                }
                            }
                        },
                        "default": {"$ref": "#/components/responses/Error"}
                    }
                },
                "post": {
                    "operationId": "createPet",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
                        }
                    },
                    "responses": {"201": {"description": "Created"}}
                }
            },
            "/pets/{petId}": {
                "get": {
                    "operationId": "showPet",
                    "deprecated": true,
                    "parameters": [
                        {"name": "petId", "in": "path", "required": true, "schema": {"type": "string", "format": "uuid"}}
                    ],
                    "responses": {"200": {"description": "One pet"}}
                }
            }
        },
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "description": "A pet",
                    "required": ["id", "name"],
                    "properties": {
                        "id": {"type": "integer", "format": "int64"},
                        "name": {"type": "string"},
                        "status": {"$ref": "#/components/schemas/Status"},
                        "category": {"$ref": "#/components/schemas/Category"},
                        "tags": {"type": "array", "items": {"type": "string"}}
                    }
                },
                "Status": {"type": "string", "enum": ["available", "pending", "sold"]},
                "Category": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "parent": {"$ref": "#/components/schemas/Category"}
                    }
                },
                "Owner": {
                    "type": "object",
                    "properties": {
                        "pet": {"$ref": "#/components/schemas/Pet"},
                        "order": {"$ref": "#/components/schemas/Order"}
                    }
                },
                "Order": {
                    "type": "object",
                    "properties": {
                        "pet": {"$ref": "#/components/schemas/Pet"},
                        "quantity": {"type": "integer", "format": "int32"}
                    }
                },
                "Node": {
                    "type": "object",
                    "properties": {
                        "value": {"type": "string"},
                        "next": {"$ref": "#/components/schemas/Node"}
                    }
                },
                "Broken": {
                    "type": "object",
                    "properties": {
                        "link": {"$ref": "#/components/schemas/Missing"}
                    }
                },
                "Alias": {"$ref": "#/components/schemas/Pet"},
                "Cat": {
                    "type": "object",
                    "properties": {"meows": {"type": "boolean"}}
                },
                "Dog": {
                    "type": "object",
                    "title": "Good Dog",
                    "properties": {"barks": {"type": "boolean"}}
                },
                "Animal": {
                    "oneOf": [
                        {"$ref": "#/components/schemas/Cat"},
                        {"$ref": "#/components/schemas/Dog"}
                    ]
                }
            },
            "parameters": {
                "Limit": {
                    "name": "limit",
                    "in": "query",
                    "description": "How many items to return",
                    "schema": {"type": "integer", "format": "int32"}
                }
            },
            "responses": {
                "Error": {
                    "description": "Unexpected error",
                    "content": {
                        "application/json": {
                            "schema": {"type": "object", "properties": {"code": {"type": "integer"}}}
                        }
                    }
                }
            }
        }
    })
}

/// Reference node for a schema under `components.schemas`
#[allow(dead_code)]
pub fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

/// A linear chain `S0 -> S1 -> ... -> S{depth}` of nested objects
#[allow(dead_code)]
pub fn nested_chain(depth: usize) -> Value {
    let mut schemas = serde_json::Map::new();
    for i in 0..depth {
        schemas.insert(
            format!("S{}", i),
            json!({
                "type": "object",
                "properties": {"child": {"$ref": format!("#/components/schemas/S{}", i + 1)}}
            }),
        );
    }
    schemas.insert(format!("S{}", depth), json!({"type": "string"}));
    json!({"components": {"schemas": schemas}})
}
