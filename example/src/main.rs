mod pipeline;


use message_template::{MessageTemplate, values};

fn main() {
    tracing_subscriber::fmt().init();

    let login = MessageTemplate::new("User {UserId} logged in from {IpAddress}");
    pipeline::log_event(&login, &values![42, "10.0.0.17"]);

    let batch = MessageTemplate::new("Processed {Count,4} items in {Elapsed:F1}ms");
    pipeline::log_event(&batch, &values![128, 7.3]);

    let retry = MessageTemplate::new("Retrying {Endpoint} with backoff {Delays}");
    pipeline::log_event(&retry, &values!["/api/v1/sync", vec![1, 2, 4]]);
}
