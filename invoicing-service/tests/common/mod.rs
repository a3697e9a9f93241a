use invoicing_service::config::{InvoiceDefaults, InvoicingConfig, StorageBackend, StorageConfig};
use invoicing_service::startup::Application;
use reqwest::Client;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = InvoicingConfig {
            common: CoreConfig {
                port: 0, // Random port for testing
                log_level: "info".to_string(),
                environment: "test".to_string(),
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                data_dir: String::new(),
            },
            defaults: InvoiceDefaults::default(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create a client and return its JSON representation.
    pub async fn create_client(&self, name: &str) -> Value {
        let response = self
            .post_json(
                "/clients",
                &json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                    "phone": "+34 600 000 000",
                    "address": "Calle Mayor 1, Madrid",
                    "taxId": "B12345678"
                }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse client")
    }

    /// Create an invoice with a single line item and return its JSON representation.
    pub async fn create_invoice(
        &self,
        client_id: &str,
        issue_date: &str,
        due_date: &str,
        amount: f64,
    ) -> Value {
        let response = self
            .post_json(
                "/invoices",
                &json!({
                    "clientId": client_id,
                    "issueDate": issue_date,
                    "dueDate": due_date,
                    "items": [
                        { "description": "Consultoría", "quantity": 1.0, "unitPrice": amount }
                    ],
                    "taxRate": 0.0
                }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse invoice")
    }

    pub async fn set_status(&self, invoice_id: &str, status: &str) -> reqwest::Response {
        self.put_json(
            &format!("/invoices/{}/status", invoice_id),
            &json!({ "status": status }),
        )
        .await
    }
}
