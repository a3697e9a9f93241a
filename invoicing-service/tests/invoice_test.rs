mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn create_invoice_computes_totals_and_number() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;

    let response = app
        .post_json(
            "/invoices",
            &json!({
                "clientId": client["id"],
                "issueDate": "2026-03-01",
                "dueDate": "2026-03-31",
                "items": [
                    { "description": "Diseño web", "quantity": 2.0, "unitPrice": 50.0 },
                    { "description": "Hosting", "quantity": 1.0, "unitPrice": 100.0 }
                ],
                "taxRate": 21.0,
                "notes": "Gracias"
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let invoice: Value = response.json().await.unwrap();
    assert_eq!(invoice["invoiceNumber"], "F-000001");
    assert_eq!(invoice["status"], "pending");
    assert_eq!(invoice["items"][0]["total"], 100.0);
    assert_eq!(invoice["subtotal"], 200.0);
    assert_eq!(invoice["taxAmount"], 42.0);
    assert_eq!(invoice["total"], 242.0);
    assert_eq!(invoice["client"]["name"], "Acme");
    assert_eq!(invoice["issueDate"], "2026-03-01T00:00:00Z");
    assert_eq!(invoice["notes"], "Gracias");
}

#[tokio::test]
async fn numbers_increase_and_next_number_previews() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let client_id = client["id"].as_str().unwrap();

    let preview: Value = app.get("/invoices/next-number").await.json().await.unwrap();
    assert_eq!(preview["invoiceNumber"], "F-000001");

    app.create_invoice(client_id, "2026-01-01", "2026-02-01", 10.0)
        .await;
    let second = app
        .create_invoice(client_id, "2026-01-02", "2026-02-02", 10.0)
        .await;
    assert_eq!(second["invoiceNumber"], "F-000002");

    let preview: Value = app.get("/invoices/next-number").await.json().await.unwrap();
    assert_eq!(preview["invoiceNumber"], "F-000003");
}

#[tokio::test]
async fn defaults_apply_when_tax_and_due_date_are_omitted() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;

    let response = app
        .post_json(
            "/invoices",
            &json!({
                "clientId": client["id"],
                "issueDate": "2026-01-01",
                "items": [{ "description": "Soporte", "quantity": 1.0, "unitPrice": 100.0 }]
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let invoice: Value = response.json().await.unwrap();
    assert_eq!(invoice["taxRate"], 21.0);
    assert_eq!(invoice["total"], 121.0);
    assert_eq!(invoice["dueDate"], "2026-01-31T00:00:00Z");
}

#[tokio::test]
async fn past_due_pending_invoice_reads_overdue() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let client_id = client["id"].as_str().unwrap();

    let late = app
        .create_invoice(client_id, "2020-01-01", "2020-01-31", 50.0)
        .await;
    assert_eq!(late["status"], "pending");
    assert_eq!(late["effectiveStatus"], "overdue");

    let future = app
        .create_invoice(client_id, "2020-01-01", "2099-01-01", 50.0)
        .await;
    assert_eq!(future["effectiveStatus"], "pending");
}

#[tokio::test]
async fn marking_paid_clears_overdue() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let invoice = app
        .create_invoice(client["id"].as_str().unwrap(), "2020-01-01", "2020-01-31", 50.0)
        .await;
    let invoice_id = invoice["id"].as_str().unwrap();

    let response = app.set_status(invoice_id, "paid").await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["status"], "paid");
    assert_eq!(updated["effectiveStatus"], "paid");

    // Any transition is allowed, including back to pending
    let updated: Value = app
        .set_status(invoice_id, "pending")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(updated["effectiveStatus"], "overdue");
}

#[tokio::test]
async fn update_invoice_recomputes_totals() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let invoice = app
        .create_invoice(client["id"].as_str().unwrap(), "2026-01-01", "2026-02-01", 100.0)
        .await;
    let invoice_id = invoice["id"].as_str().unwrap();

    let response = app
        .put_json(
            &format!("/invoices/{}", invoice_id),
            &json!({
                "clientId": client["id"],
                "issueDate": "2026-01-01",
                "dueDate": "2026-02-01",
                "items": [
                    { "id": invoice["items"][0]["id"], "description": "Consultoría", "quantity": 3.0, "unitPrice": 100.0 }
                ],
                "taxRate": 10.0
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["invoiceNumber"], invoice["invoiceNumber"]);
    assert_eq!(updated["items"][0]["id"], invoice["items"][0]["id"]);
    assert_eq!(updated["subtotal"], 300.0);
    assert_eq!(updated["taxAmount"], 30.0);
    assert_eq!(updated["total"], 330.0);
}

#[tokio::test]
async fn invalid_invoice_payloads_are_rejected() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;

    let no_items = app
        .post_json(
            "/invoices",
            &json!({ "clientId": client["id"], "issueDate": "2026-01-01", "items": [] }),
        )
        .await;
    assert_eq!(no_items.status().as_u16(), 422);

    let bad_tax = app
        .post_json(
            "/invoices",
            &json!({
                "clientId": client["id"],
                "issueDate": "2026-01-01",
                "items": [{ "description": "X", "quantity": 1.0, "unitPrice": 1.0 }],
                "taxRate": 150.0
            }),
        )
        .await;
    assert_eq!(bad_tax.status().as_u16(), 422);

    let unknown_client = app
        .post_json(
            "/invoices",
            &json!({
                "clientId": "missing",
                "issueDate": "2026-01-01",
                "items": [{ "description": "X", "quantity": 1.0, "unitPrice": 1.0 }]
            }),
        )
        .await;
    assert_eq!(unknown_client.status().as_u16(), 400);
}

#[tokio::test]
async fn missing_invoice_is_404() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/invoices/nope").await.status().as_u16(), 404);
    assert_eq!(app.delete("/invoices/nope").await.status().as_u16(), 404);
    assert_eq!(app.set_status("nope", "paid").await.status().as_u16(), 404);
}

#[tokio::test]
async fn email_draft_is_addressed_to_client() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let invoice = app
        .create_invoice(client["id"].as_str().unwrap(), "2026-01-01", "2026-02-01", 100.0)
        .await;

    let response = app
        .get(&format!("/invoices/{}/email", invoice["id"].as_str().unwrap()))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let draft: Value = response.json().await.unwrap();
    assert_eq!(draft["to"], "acme@example.com");
    assert_eq!(draft["subject"], "Factura F-000001 - Acme");
    assert!(draft["message"].as_str().unwrap().contains("Consultoría"));
}

#[tokio::test]
async fn deleted_invoice_disappears_from_listing() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let invoice = app
        .create_invoice(client["id"].as_str().unwrap(), "2026-01-01", "2026-02-01", 100.0)
        .await;

    let response = app
        .delete(&format!("/invoices/{}", invoice["id"].as_str().unwrap()))
        .await;
    assert_eq!(response.status().as_u16(), 204);

    let list: Vec<Value> = app.get("/invoices").await.json().await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn sending_email_applies_edits() {
    let app = TestApp::spawn().await;
    let client = app.create_client("Acme").await;
    let invoice = app
        .create_invoice(client["id"].as_str().unwrap(), "2026-01-01", "2026-02-01", 100.0)
        .await;
    let path = format!("/invoices/{}/email", invoice["id"].as_str().unwrap());

    let response = app
        .post_json(
            &path,
            &json!({ "to": "billing@acme.example", "message": "Adjunto la factura." }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let sent: Value = response.json().await.unwrap();
    assert_eq!(sent["to"], "billing@acme.example");
    assert_eq!(sent["subject"], "Factura F-000001 - Acme");
    assert_eq!(sent["message"], "Adjunto la factura.");

    let rejected = app.post_json(&path, &json!({ "to": "not-an-email" })).await;
    assert_eq!(rejected.status().as_u16(), 422);

    let missing = app.post_json("/invoices/nope/email", &json!({})).await;
    assert_eq!(missing.status().as_u16(), 404);
}
