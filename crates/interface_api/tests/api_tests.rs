//! End-to-end tests of the HTTP API

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::{json, Value};

use interface_api::config::ApiConfig;
use interface_api::create_router;
use test_utils::{assert_png, not_a_pdf, sample_pdf, SampleTexts};

fn server() -> TestServer {
    let config = ApiConfig {
        jwt_secret: "api-test-secret".to_string(),
        ..ApiConfig::default()
    };
    TestServer::new(create_router(config)).unwrap()
}

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "demo", "password": "demo" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");
    body["access_token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

fn pdf_part(pages: &[&str], filename: &str) -> Part {
    Part::bytes(sample_pdf(pages))
        .file_name(filename)
        .mime_type("application/pdf")
}

mod health_and_auth {
    use super::*;

    #[tokio::test]
    async fn test_health_is_public() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let response = server()
            .post("/api/auth/login")
            .json(&json!({ "username": "demo", "password": "wrong" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let response = server()
            .post("/api/normalize-claim")
            .json(&json!({ "text": "car accident" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let response = server()
            .post("/api/normalize-claim")
            .add_header(header::AUTHORIZATION, bearer("not-a-jwt"))
            .json(&json!({ "text": "car accident" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_revokes_token() {
        let server = server();
        let token = login(&server).await;

        server
            .post("/api/auth/logout")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .post("/api/normalize-claim")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "text": "car accident" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_other_sessions_survive_logout() {
        let server = server();
        let first = login(&server).await;
        let second = login(&server).await;

        server
            .post("/api/auth/logout")
            .add_header(header::AUTHORIZATION, bearer(&first))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .post("/api/normalize-claim")
            .add_header(header::AUTHORIZATION, bearer(&second))
            .json(&json!({ "text": "car accident" }))
            .await
            .assert_status_ok();
    }
}

mod text_endpoints {
    use super::*;

    #[tokio::test]
    async fn test_normalize_claim() {
        let server = server();
        let token = login(&server).await;

        let response = server
            .post("/api/normalize-claim")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "text": SampleTexts::motor_accident() }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["loss_type"], "Accident");
        assert_eq!(body["severity"], "Medium");
        assert_eq!(body["claimed_amount"], 65000);
        assert_eq!(body["estimated_repair_amount"], 42000);
    }

    #[tokio::test]
    async fn test_blank_text_is_unprocessable() {
        let server = server();
        let token = login(&server).await;

        let response = server
            .post("/api/normalize-claim")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "text": "   " }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_fraud_score_with_amounts() {
        let server = server();
        let token = login(&server).await;

        let response = server
            .post("/api/fraud-score")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({
                "text": SampleTexts::suspicious_claim(),
                "claimed_amount": 90000,
                "estimated_amount": 30000,
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["fraud_risk_level"], "High");
        assert_eq!(body["fraud_score"], 9);
        assert_eq!(body["reasons"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_pipeline_from_text() {
        let server = server();
        let token = login(&server).await;

        let response = server
            .post("/api/pipeline-from-text")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "claim_text": "Claim 85000 against estimate 40000" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["normalized_claim"]["claimed_amount"], 85000);
        assert_eq!(body["fraud_insights"]["fraud_score"], 2);
        assert_eq!(body["fraud_insights"]["fraud_risk_level"], "Medium");
    }
}

mod document_endpoints {
    use super::*;

    const CLAIM_FORM_PAGE: &str =
        "CLAIM FORM Policy Number MTR-2291 Insured Name R Sharma Date of Loss 12-03-2024 Claimant signed";

    #[tokio::test]
    async fn test_classify_document() {
        let server = server();
        let token = login(&server).await;

        let form = MultipartForm::new().add_part("file", pdf_part(&[CLAIM_FORM_PAGE], "claim.pdf"));
        let response = server
            .post("/api/classify-document")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["predicted_type"], "claim_form");
        assert_eq!(body["predicted_type_label"], "Claim Form");
        assert!(body["quality_flags"].as_array().unwrap().is_empty());
        assert!(body["raw_text_excerpt"].as_str().unwrap().contains("CLAIM FORM"));
    }

    #[tokio::test]
    async fn test_excerpt_is_truncated() {
        let server = server();
        let token = login(&server).await;
        let long_page = "invoice ".repeat(200);

        let form = MultipartForm::new().add_part("file", pdf_part(&[long_page.as_str()], "long.pdf"));
        let response = server
            .post("/api/classify-document")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let excerpt = body["raw_text_excerpt"].as_str().unwrap();
        assert_eq!(excerpt.chars().count(), 800);
        assert!(excerpt.trim_start().starts_with("invoice invoice"));
        assert_eq!(body["predicted_type"], "invoice");
    }

    #[tokio::test]
    async fn test_non_pdf_filename_rejected() {
        let server = server();
        let token = login(&server).await;

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(sample_pdf(&["claim form"])).file_name("claim.txt"),
        );
        let response = server
            .post("/api/classify-document")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Only PDF files are supported for now.");
    }

    #[tokio::test]
    async fn test_unreadable_pdf_rejected() {
        let server = server();
        let token = login(&server).await;

        let form = MultipartForm::new()
            .add_part("file", Part::bytes(not_a_pdf()).file_name("broken.pdf"));
        let response = server
            .post("/api/classify-document")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["message"].as_str().unwrap().starts_with("Failed to read PDF: "));
    }

    #[tokio::test]
    async fn test_blank_pdf_rejected() {
        let server = server();
        let token = login(&server).await;

        let form = MultipartForm::new().add_part("file", pdf_part(&["   "], "blank.pdf"));
        let response = server
            .post("/api/classify-document")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Could not extract text from PDF.");
    }

    #[tokio::test]
    async fn test_missing_file_rejected() {
        let server = server();
        let token = login(&server).await;

        let form = MultipartForm::new().add_text("claim_text", "car accident");
        let response = server
            .post("/api/classify-document")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pipeline_from_pdf_with_claim_text() {
        let server = server();
        let token = login(&server).await;
        let page = "TAX INVOICE Bill To City Motors Total Amount 5000";

        let form = MultipartForm::new()
            .add_part("file", pdf_part(&[page], "invoice.pdf"))
            .add_text("claim_text", "Car stolen from parking, no police report")
            .add_text("claimed_amount", "85000")
            .add_text("estimated_amount", "40000");
        let response = server
            .post("/api/pipeline-from-pdf")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["document_classification"]["predicted_type"], "invoice");
        assert_eq!(body["normalized_claim"]["loss_type"], "Theft");
        assert!(body["normalized_claim"]["claimed_amount"].is_null());
        assert_eq!(body["fraud_insights"]["fraud_score"], 4);
        assert!(body["fraud_insights"]["reasons"][1]
            .as_str()
            .unwrap()
            .contains("(85000)"));
        assert_eq!(body["fraud_insights"]["fraud_risk_level"], "High");
        assert_eq!(body["source_text_excerpt"], "Car stolen from parking, no police report");
    }

    #[tokio::test]
    async fn test_pipeline_from_pdf_uses_document_text() {
        let server = server();
        let token = login(&server).await;
        let page = "Repair Estimate from City Workshop parts 12000 labour 4500";

        let form = MultipartForm::new().add_part("file", pdf_part(&[page], "estimate.pdf"));
        let response = server
            .post("/api/pipeline-from-pdf")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["document_classification"]["predicted_type"], "repair_estimate");
        assert_eq!(body["normalized_claim"]["claimed_amount"], 12000);
        assert_eq!(body["normalized_claim"]["estimated_repair_amount"], 4500);
    }

    #[tokio::test]
    async fn test_bad_amount_rejected() {
        let server = server();
        let token = login(&server).await;

        let form = MultipartForm::new()
            .add_part("file", pdf_part(&[CLAIM_FORM_PAGE], "claim.pdf"))
            .add_text("claimed_amount", "lots");
        let response = server
            .post("/api/pipeline-from-pdf")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .multipart(form)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "'claimed_amount' must be an integer");
    }
}

mod chart_endpoints {
    use super::*;

    #[tokio::test]
    async fn test_fraud_chart_is_png() {
        let server = server();
        let token = login(&server).await;

        let assessment = server
            .post("/api/fraud-score")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "text": SampleTexts::suspicious_claim() }))
            .await
            .json::<Value>();

        let response = server
            .post("/api/charts/fraud")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&assessment)
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(header::CONTENT_TYPE), "image/png");
        assert_png(response.as_bytes());
    }

    #[tokio::test]
    async fn test_severity_chart_is_png() {
        let server = server();
        let token = login(&server).await;

        let claim = server
            .post("/api/normalize-claim")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "text": SampleTexts::motor_accident() }))
            .await
            .json::<Value>();

        let response = server
            .post("/api/charts/severity")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&claim)
            .await;

        response.assert_status_ok();
        assert_png(response.as_bytes());
    }

    #[tokio::test]
    async fn test_classification_chart_is_png() {
        let server = server();
        let token = login(&server).await;

        let result = json!({
            "predicted_type": "invoice",
            "predicted_type_label": "Invoice",
            "confidence": 0.38,
            "matched_keywords": ["invoice", "gst", "amount due"],
            "quality_flags": [],
            "reasoning": "Detected 3 keywords associated with Invoice."
        });
        let response = server
            .post("/api/charts/classification")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&result)
            .await;

        response.assert_status_ok();
        assert_png(response.as_bytes());
    }

    #[tokio::test]
    async fn test_chart_rejects_malformed_result() {
        let server = server();
        let token = login(&server).await;

        let response = server
            .post("/api/charts/severity")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "severity": "Catastrophic" }))
            .await;

        assert!(response.status_code().is_client_error());
    }
}
