//! Stub CRM tools: list, create, and update customers.
//!
//! None of these touch real storage. Listing serves a fixed in-memory
//! record set, creation synthesizes an identifier from the clock, and
//! updates echo the caller's fields back with placeholders for anything
//! omitted.

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::mcp::types::{CallToolResult, ToolDescriptor};
use crate::tools::types::{Tool, ToolError};

/// A customer record as served by `get_customers`.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
}

/// The fixed record set the stub serves in place of a database.
pub fn customer_fixtures() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company: "Acme Corp".to_string(),
        },
        Customer {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            company: "Tech Inc".to_string(),
        },
    ]
}

fn required_str<'a>(args: &'a serde_json::Value, field: &str) -> Result<&'a str, ToolError> {
    args.get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ToolError::InvalidInput(format!("{} is required", field)))
}

fn optional_str<'a>(args: &'a serde_json::Value, field: &str) -> Option<&'a str> {
    args.get(field).and_then(|v| v.as_str())
}

fn pretty(value: &serde_json::Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::Execution(e.to_string()))
}

/// Tool for listing customers with limit/offset paging.
pub struct GetCustomersTool;

#[async_trait]
impl Tool for GetCustomersTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "get_customers".into(),
            description: "Retrieve all customers from the CRM database".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of customers to return",
                        "default": 10
                    },
                    "offset": {
                        "type": "number",
                        "description": "Number of customers to skip",
                        "default": 0
                    }
                }
            }),
        }
    }

    async fn invoke(&self, args: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let limit = args.get("limit").and_then(|v| v.as_u64()).unwrap_or(10) as usize;
        let offset = args.get("offset").and_then(|v| v.as_u64()).unwrap_or(0) as usize;

        // Out-of-range offset/limit degrades to a partial or empty listing.
        let results: Vec<Customer> = customer_fixtures()
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect();

        let listing = serde_json::to_value(&results).map_err(|e| ToolError::Execution(e.to_string()))?;
        Ok(CallToolResult::text(format!(
            "Retrieved {} customers:\n{}",
            results.len(),
            pretty(&listing)?
        )))
    }
}

/// Tool for creating a customer.
pub struct CreateCustomerTool;

#[async_trait]
impl Tool for CreateCustomerTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "create_customer".into(),
            description: "Create a new customer in the CRM".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Customer name"
                    },
                    "email": {
                        "type": "string",
                        "description": "Customer email address"
                    },
                    "company": {
                        "type": "string",
                        "description": "Customer company name"
                    }
                },
                "required": ["name", "email"]
            }),
        }
    }

    async fn invoke(&self, args: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let name = required_str(&args, "name")?;
        let email = required_str(&args, "email")?;
        let company = optional_str(&args, "company");

        let now = Utc::now();
        let new_customer = serde_json::json!({
            // Monotonically-derived token standing in for a real id.
            "id": now.timestamp_millis().to_string(),
            "name": name,
            "email": email,
            "company": company,
            "createdAt": now.to_rfc3339(),
        });

        Ok(CallToolResult::text(format!(
            "Created customer successfully:\n{}",
            pretty(&new_customer)?
        )))
    }
}

/// Tool for updating a customer.
pub struct UpdateCustomerTool;

#[async_trait]
impl Tool for UpdateCustomerTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: "update_customer".into(),
            description: "Update an existing customer".into(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Customer ID"
                    },
                    "name": {
                        "type": "string",
                        "description": "Customer name"
                    },
                    "email": {
                        "type": "string",
                        "description": "Customer email address"
                    },
                    "company": {
                        "type": "string",
                        "description": "Customer company name"
                    }
                },
                "required": ["id"]
            }),
        }
    }

    async fn invoke(&self, args: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let id = required_str(&args, "id")?;

        let updated_customer = serde_json::json!({
            "id": id,
            "name": optional_str(&args, "name").unwrap_or("Existing Name"),
            "email": optional_str(&args, "email").unwrap_or("existing@example.com"),
            "company": optional_str(&args, "company").unwrap_or("Existing Company"),
            "updatedAt": Utc::now().to_rfc3339(),
        });

        Ok(CallToolResult::text(format!(
            "Updated customer successfully:\n{}",
            pretty(&updated_customer)?
        )))
    }
}
