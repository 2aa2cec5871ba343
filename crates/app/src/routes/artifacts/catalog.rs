use shared_types::SearchedArtifact;

fn artifact(
    id: &str,
    group_id: &str,
    name: Option<&str>,
    description: &str,
    artifact_type: &str,
    labels: &[&str],
) -> SearchedArtifact {
    SearchedArtifact {
        id: id.to_string(),
        group_id: Some(group_id.to_string()),
        name: name.map(str::to_string),
        description: Some(description.to_string()),
        created_on: "2020-07-01T12:00:00Z".to_string(),
        created_by: "registry".to_string(),
        artifact_type: artifact_type.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        state: "ENABLED".to_string(),
        version: Some("1".to_string()),
    }
}

/// Artifacts listed when no registry backend is connected.
pub fn sample_artifacts() -> Vec<SearchedArtifact> {
    vec![
        artifact(
            "petstore",
            "examples",
            Some("Petstore API"),
            "Sample OpenAPI definition of a pet store",
            "OPENAPI",
            &["openapi", "sample"],
        ),
        artifact(
            "order-placed",
            "shop.events",
            Some("OrderPlaced"),
            "Emitted when a customer places an order",
            "AVRO",
            &["kafka", "orders"],
        ),
        artifact(
            "order-shipped",
            "shop.events",
            Some("OrderShipped"),
            "Emitted when an order leaves the warehouse",
            "AVRO",
            &["kafka", "orders"],
        ),
        artifact(
            "customer",
            "shop.model",
            None,
            "Customer record shared by all shop services",
            "JSON",
            &["model"],
        ),
        artifact(
            "payment-command",
            "bank.commands",
            Some("PaymentCommand"),
            "Command requesting a card payment",
            "PROTOBUF",
            &["grpc", "billing"],
        ),
        artifact(
            "account-snapshot",
            "bank.events",
            Some("AccountSnapshot"),
            "Periodic account balance snapshot",
            "AVRO",
            &["kafka", "billing"],
        ),
        artifact(
            "inventory-api",
            "shop.apis",
            Some("Inventory API"),
            "Stock levels per warehouse",
            "OPENAPI",
            &["openapi"],
        ),
        artifact(
            "notifications",
            "shop.apis",
            Some("Notifications"),
            "Async API for customer notifications",
            "ASYNCAPI",
            &["asyncapi", "kafka"],
        ),
        artifact("address", "shop.model", Some("Address"), "Postal address", "JSON", &["model"]),
        artifact(
            "ledger",
            "bank.model",
            Some("Ledger"),
            "Double-entry ledger schema",
            "PROTOBUF",
            &["grpc"],
        ),
        artifact(
            "refund-issued",
            "bank.events",
            Some("RefundIssued"),
            "Emitted when a refund is booked",
            "AVRO",
            &["kafka", "billing"],
        ),
        artifact(
            "catalog-graph",
            "shop.apis",
            Some("Catalog Graph"),
            "GraphQL schema of the product catalog",
            "GRAPHQL",
            &["graphql"],
        ),
    ]
}
