//! Test fixtures for the WordEmbeddings client.
//!
//! Response bodies shaped like the ones the service returns.

use serde_json::{json, Value};

/// `/customer` body for a known customer
pub fn customer_exists() -> Value {
    json!({ "exists": true })
}

/// `/customer` body for an unknown customer
pub fn customer_missing() -> Value {
    json!({ "exists": false })
}

/// `/models` listing
pub fn models_response() -> Value {
    json!({
        "models": [
            { "id": "model-1", "name": "food model" },
            { "id": "model-2", "name": "support tickets" }
        ]
    })
}

/// `/model` creation result
pub fn created_model() -> Value {
    json!({ "id": "model-1" })
}

/// `/model_versions` listing
pub fn model_versions_response() -> Value {
    json!([
        { "id": "mv-1", "model_id": "model-1", "status": "succeeded" },
        { "id": "mv-2", "model_id": "model-1", "status": "running" }
    ])
}

/// `/finetune_model` submission result
pub fn finetune_job() -> Value {
    json!({
        "finetune_id": "ft-123",
        "model_id": "model-1",
        "model_version_id": "mv-3"
    })
}

/// `/status_model` result
pub fn finetune_status(status: &str) -> Value {
    json!({
        "finetune_id": "ft-123",
        "model_id": "model-1",
        "model_version_id": "mv-3",
        "status": status
    })
}

/// `/inference` result with one vector per input
pub fn embeddings(count: usize) -> Value {
    let vectors: Vec<Vec<f64>> = (0..count)
        .map(|i| vec![i as f64, i as f64 + 0.5, -(i as f64)])
        .collect();
    json!(vectors)
}

/// `/evaluation` result
pub fn evaluation_results() -> Value {
    json!([
        { "anchor": "Cheeseburger", "positive": 0.91, "negative": 0.12 },
        { "anchor": "Sushi", "positive": 0.88, "negative": 0.20 }
    ])
}
