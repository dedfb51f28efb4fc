use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "threshold": { "type": ["number", "string"] },
            "highlight_threshold": { "type": "number", "minimum": 0 },
            "heading": { "type": "string", "minLength": 1 },
            "results_file": { "type": "string", "minLength": 1 }
        },
        "additionalProperties": false
    })
});
