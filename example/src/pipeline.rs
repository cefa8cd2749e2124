//! A miniature structured-logging pipeline: the rendered line goes to
//! the human-facing subscriber, the extracted pairs go to a JSON
//! payload the way an indexing backend would consume them.

use message_template::{MessageTemplate, TemplateValue};
use serde_json::{Map, Value};
use tracing::info;

/// Renders one event and returns the structured payload.
pub fn structured_event(template: &MessageTemplate, values: &[TemplateValue]) -> Value {
    let mut fields = Map::new();
    for (name, value) in template.get_values(values) {
        if name.is_empty() {
            continue;
        }
        let value = serde_json::to_value(value).expect("template values serialize");
        fields.insert(name.to_string(), value);
    }
    Value::Object(fields)
}

pub fn log_event(template: &MessageTemplate, values: &[TemplateValue]) {
    let rendered = template
        .format(values)
        .expect("one value per template hole");
    info!("{rendered}");
    println!("{}", structured_event(template, values));
}
