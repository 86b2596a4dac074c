use opentelemetry::trace::{Span as _, Tracer, TracerProvider as _};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::testing::trace::InMemorySpanExporter;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::json;
use span_attrs_extract::{AttributeSpecifier, BoundContext, extract_with_settings};
use span_attrs_otel::record_on_span;

#[test]
fn extracted_attributes_land_on_exported_span() {
    let exporter = InMemorySpanExporter::default();
    let provider = TracerProvider::builder()
        .with_simple_exporter(exporter.clone())
        .build();
    let tracer = provider.tracer("record_test");

    let ctx = BoundContext::new()
        .with("attempt", 2)
        .with("user", json!({"name": "ada"}))
        .with_result("ok");
    let attrs = extract_with_settings(
        &ctx,
        &[
            AttributeSpecifier::flat("attempt"),
            AttributeSpecifier::nested(["user", "name"]),
            AttributeSpecifier::flat("result"),
        ],
        None,
        &span_attrs_core::ExtractSettings::default(),
    );

    let mut span = tracer.start("traced_operation");
    record_on_span(&mut span, &attrs);
    span.end();

    let finished = exporter.get_finished_spans().expect("finished spans");
    assert_eq!(finished.len(), 1);
    let recorded = &finished[0].attributes;
    assert!(recorded.contains(&KeyValue::new("attempt", Value::I64(2))));
    assert!(recorded.contains(&KeyValue::new("user_name", Value::String("ada".into()))));
    assert!(recorded.contains(&KeyValue::new("result", Value::String("ok".into()))));
}
