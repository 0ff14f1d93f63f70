use retail_catalog::{demo, AppContext, CatalogError, Config, ReportFormat};
use rust_decimal::Decimal;

fn run_demo(config: Config) -> String {
    let ctx = AppContext::new(config).unwrap();
    let mut buf = Vec::new();
    demo::run(&ctx, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_text_report() {
    let output = run_demo(Config::default());

    assert!(output.starts_with("Product: Guitar\nPrice: 1400.000000\nQuantity: 10\n"));
    assert!(output.contains(
        "Product: Electric Bass Guitar\nPrice: 2300.000000\nQuantity: 10\nDiscount: 15.000000%\nDiscounted price: 1955.000000\n"
    ));
    let (head, _) = output.split_once("Category: Instruments\n").unwrap();
    assert_eq!(head.matches("Product: Electric Bass Guitar\n").count(), 2);
    assert_eq!(head.matches("Discounted price: 1955.000000\n").count(), 2);
    assert!(output.contains("Products in the cart:\n"));
    assert!(output.contains("Order History for Artem:\nOrder ID: 1\nStatus: In process\nTotal Amount: 67100.000000\nProducts:\n"));
}

#[test]
fn test_order_ids_follow_configured_start() {
    let output = run_demo(Config { order_id_start: 500, ..Config::default() });
    assert!(output.contains("Order ID: 500\n"));
}

#[test]
fn test_contexts_are_isolated() {
    let first = run_demo(Config::default());
    let second = run_demo(Config::default());
    assert!(first.contains("Order ID: 1\n"));
    assert!(second.contains("Order ID: 1\n"));
}

#[test]
fn test_json_report() {
    let output = run_demo(Config { format: ReportFormat::Json, ..Config::default() });
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["products"].as_array().unwrap().len(), 2);
    assert_eq!(json["category"]["name"], "Instruments");
    assert_eq!(json["category"]["product_count"], 2);
    assert_eq!(json["cart"]["products"].as_array().unwrap().len(), 4);

    let order = &json["history"]["orders"][0];
    assert_eq!(order["order_id"], 1);
    assert_eq!(order["status"], "In process");
    let total: Decimal = order["total"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, Decimal::new(67100, 0));
}

#[test]
fn test_zero_order_id_start_is_rejected() {
    let err = AppContext::new(Config { order_id_start: 0, ..Config::default() }).unwrap_err();
    assert!(matches!(err, CatalogError::Config { .. }));
}
