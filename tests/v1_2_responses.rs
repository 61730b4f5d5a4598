/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use smugmug_legacy::v1_2::{
        payload, Album, ApiErrorCode, ApiResponse, ErrorDetail, ResponseEnvelope, SmugMugError,
    };

    #[test]
    fn blank_text_yields_a_fully_absent_envelope() {
        for text in ["", "   ", "\n"] {
            let envelope = ResponseEnvelope::parse(text).unwrap();
            assert_eq!(envelope.status, None);
            assert_eq!(envelope.method, None);
            assert!(!envelope.is_error());
        }
    }

    #[test]
    fn ok_reply_parses_status_and_method() {
        let envelope =
            ResponseEnvelope::parse(r#"{"stat":"ok","method":"smugmug.albums.get"}"#).unwrap();
        assert_eq!(envelope.status.as_deref(), Some("ok"));
        assert_eq!(envelope.method.as_deref(), Some("smugmug.albums.get"));
        assert!(!envelope.is_error());
    }

    #[test]
    fn fail_reply_with_code_and_message_is_an_error() {
        let envelope =
            ResponseEnvelope::parse(r#"{"stat":"fail","code":15,"message":"bad"}"#).unwrap();
        assert!(envelope.is_error());
        assert_eq!(
            envelope.error,
            Some(ErrorDetail {
                code: 15,
                message: "bad".to_string()
            })
        );
    }

    // The service's observed leniency: one of code/message alone does not
    // make an error. Carried forward deliberately.
    #[test]
    fn code_without_message_is_not_an_error() {
        let envelope = ResponseEnvelope::parse(r#"{"stat":"fail","code":15}"#).unwrap();
        assert!(!envelope.is_error());
    }

    #[test]
    fn message_without_code_is_not_an_error() {
        let envelope = ResponseEnvelope::parse(r#"{"stat":"fail","message":"bad"}"#).unwrap();
        assert!(!envelope.is_error());
    }

    #[test]
    fn malformed_json_is_a_parse_failure() {
        assert!(matches!(
            ResponseEnvelope::parse("{not json"),
            Err(SmugMugError::ResponseMalformed(_))
        ));
    }

    #[test]
    fn missing_stat_is_a_parse_failure() {
        assert!(matches!(
            ResponseEnvelope::parse(r#"{"method":"smugmug.logout"}"#),
            Err(SmugMugError::PayloadMissing("stat"))
        ));
    }

    #[test]
    fn non_object_reply_is_a_parse_failure() {
        assert!(ResponseEnvelope::parse("[1,2,3]").is_err());
    }

    #[test]
    fn known_error_codes_map_to_kinds() {
        let error = ErrorDetail {
            code: 15,
            message: "invalid user".to_string(),
        };
        assert_eq!(error.kind(), Some(ApiErrorCode::InvalidUser));
        let unknown = ErrorDetail {
            code: 9999,
            message: "?".to_string(),
        };
        assert_eq!(unknown.kind(), None);
    }

    #[test]
    fn payload_extracted_only_on_success() {
        let reply = r#"{"stat":"ok","Album":{"id":3,"Key":"k"}}"#;
        let resp =
            ApiResponse::parse_with(reply, payload::object("Album", Album::from_json)).unwrap();
        let album = resp.payload.unwrap();
        assert_eq!(album.id, Some(3));
        assert_eq!(album.key.as_deref(), Some("k"));
    }

    #[test]
    fn payload_extractor_is_skipped_on_failure_replies() {
        let reply = r#"{"stat":"fail","code":5,"message":"system error"}"#;
        // The extractor would fail if it ran; a fail reply must not reach it.
        let resp =
            ApiResponse::parse_with(reply, payload::object("Album", Album::from_json)).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.payload, None);
    }

    #[test]
    fn successful_reply_without_the_payload_key_is_a_parse_failure() {
        let reply = r#"{"stat":"ok","method":"smugmug.albums.getInfo"}"#;
        let result = ApiResponse::parse_with(reply, payload::object("Album", Album::from_json));
        assert!(matches!(result, Err(SmugMugError::PayloadMissing("Album"))));
    }

    #[test]
    fn list_payload_maps_each_object() {
        let reply = r#"{"stat":"ok","Albums":[{"id":1},{"id":2}]}"#;
        let resp =
            ApiResponse::parse_with(reply, payload::list("Albums", Album::from_json)).unwrap();
        let ids: Vec<_> = resp.payload.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn blank_text_has_no_payload_and_no_error() {
        let resp = ApiResponse::parse_with("", payload::object("Album", Album::from_json)).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.payload, None);
        assert_eq!(resp.envelope.status, None);
    }
}
