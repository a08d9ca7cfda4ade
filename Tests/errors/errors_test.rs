#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use validator::Validate;
    use veterinaria_api::datalayer::CRUD::clients::ClientFields;
    use veterinaria_api::errors::{ErrorResponse, ServiceError, ServiceResult};

    async fn body_of(error: ServiceError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_display_messages() {
        assert_eq!(ServiceError::NotFound("Client").to_string(), "Client not found");
        assert_eq!(
            ServiceError::NotFound("Medical record").to_string(),
            "Medical record not found"
        );
        assert_eq!(
            ServiceError::DatabaseConnectionError.to_string(),
            "Database connection failed"
        );
        assert_eq!(
            ServiceError::InvalidId("abc".to_string()).to_string(),
            "Invalid id: abc"
        );
    }

    #[test]
    fn test_client_errors_are_bad_request() {
        for error in [
            ServiceError::InvalidId("x".to_string()),
            ServiceError::InvalidInput("EOF while parsing".to_string()),
            ServiceError::ValidationError("name is required".to_string()),
        ] {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{error}");
        }
    }

    #[test]
    fn test_server_errors_are_internal() {
        assert_eq!(
            ServiceError::DatabaseError("Error fetching pets".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::DatabaseConnectionError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ServiceError::NotFound("Pet").error_code(), "NOT_FOUND");
        assert_eq!(
            ServiceError::DatabaseError(String::new()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            ServiceError::ValidationError(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[tokio::test]
    async fn test_response_body_has_single_error_field() {
        let (status, body) = body_of(ServiceError::NotFound("Veterinarian")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            ErrorResponse {
                error: "Veterinarian not found".to_string()
            }
        );

        let (status, body) =
            body_of(ServiceError::DatabaseError("Error updating appointment".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Error updating appointment");
    }

    #[tokio::test]
    async fn test_validation_errors_convert_to_bad_request() {
        let fields = ClientFields {
            email: Some("nope".to_string()),
            ..Default::default()
        };

        let error: ServiceError = fields.validate().unwrap_err().into();
        let message = error.to_string();
        assert!(message.starts_with("Validation error"));
        assert!(message.contains("name is required"));
        assert!(message.contains("email must be a valid address"));

        let (status, _) = body_of(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_result_propagates_with_question_mark() {
        fn find(id: i32) -> ServiceResult<i32> {
            if id > 0 { Ok(id) } else { Err(ServiceError::NotFound("Pet")) }
        }

        fn lookup(id: i32) -> ServiceResult<i32> {
            let found = find(id)?;
            Ok(found * 2)
        }

        assert_eq!(lookup(2).unwrap(), 4);
        assert!(matches!(lookup(0), Err(ServiceError::NotFound("Pet"))));
    }
}
