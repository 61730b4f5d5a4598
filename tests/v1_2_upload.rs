/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use bytes::Bytes;
    use smugmug_legacy::v1_2::{ImageUpload, SmugMugError, UPLOAD_HEADERS};

    const OK_IMAGE: &str =
        r#"{"stat":"ok","method":"smugmug.images.upload","Image":{"id":7,"Key":"imgkey"}}"#;

    fn header<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
        request.headers.get(name).map(|v| v.to_str().unwrap())
    }

    #[tokio::test]
    async fn put_carries_headers_body_and_checksum() -> anyhow::Result<()> {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let upload = ImageUpload {
            caption: Some("at the lake".to_string()),
            ..ImageUpload::into_album("photo.jpg", 42)
        };
        let resp = client
            .upload("s1", &upload, Bytes::from_static(b"hello world"))
            .await?;

        let image = resp.payload.unwrap();
        assert_eq!(image.id, Some(7));
        assert_eq!(image.key.as_deref(), Some("imgkey"));

        let request = helpers::only_request(&server).await;
        assert_eq!(request.method.as_str(), "PUT");
        assert_eq!(request.url.path(), "/photo.jpg");
        assert_eq!(request.body, b"hello world");
        assert_eq!(header(&request, "X-Smug-SessionID"), Some("s1"));
        assert_eq!(header(&request, "X-Smug-AlbumID"), Some("42"));
        assert_eq!(header(&request, "X-Smug-FileName"), Some("photo.jpg"));
        assert_eq!(header(&request, "X-Smug-Caption"), Some("at the lake"));
        assert_eq!(header(&request, "X-Smug-ImageID"), None);
        assert_eq!(header(&request, "X-Smug-ResponseType"), Some("JSON"));
        assert_eq!(header(&request, "X-Smug-Version"), Some("1.2.0"));
        assert_eq!(
            header(&request, "Content-MD5"),
            Some("5eb63bbbe01eeed093cb22bb8f5acdc3")
        );
        Ok(())
    }

    #[tokio::test]
    async fn album_and_image_targets_are_mutually_exclusive() {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let upload = ImageUpload {
            image_id: Some(9),
            ..ImageUpload::into_album("photo.jpg", 42)
        };
        let result = client
            .upload("s1", &upload, Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(SmugMugError::InvalidRequest(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_file_name_is_rejected() {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let upload = ImageUpload {
            file_name: "  ".to_string(),
            album_id: Some(42),
            ..ImageUpload::default()
        };
        let result = client
            .upload("s1", &upload, Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(SmugMugError::InvalidRequest(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_header_value_count_is_rejected() {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let result = client
            .api()
            .put_binary(
                &server.uri(),
                UPLOAD_HEADERS,
                &[Some("s1".to_string())],
                Bytes::from_static(b"x"),
            )
            .await;
        assert!(matches!(result, Err(SmugMugError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn caller_supplied_forced_headers_are_overwritten() -> anyhow::Result<()> {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let mut values: Vec<Option<String>> = vec![None; UPLOAD_HEADERS.len()];
        values[0] = Some("s1".to_string());
        values[1] = Some("0.9".to_string()); // X-Smug-Version
        values[2] = Some("XML".to_string()); // X-Smug-ResponseType
        values[3] = Some("42".to_string()); // X-Smug-AlbumID
        values[5] = Some("photo.jpg".to_string()); // X-Smug-FileName
        client
            .api()
            .put_binary(&server.uri(), UPLOAD_HEADERS, &values, Bytes::from_static(b"x"))
            .await?;

        let request = helpers::only_request(&server).await;
        assert_eq!(header(&request, "X-Smug-ResponseType"), Some("JSON"));
        assert_eq!(header(&request, "X-Smug-Version"), Some("1.2.0"));
        Ok(())
    }

    #[tokio::test]
    async fn forced_headers_are_sent_even_when_not_declared() -> anyhow::Result<()> {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        // A custom header-name list without the response-format and version
        // headers must not bypass them.
        client
            .api()
            .put_binary(
                &server.uri(),
                &["X-Smug-SessionID", "X-Smug-AlbumID", "X-Smug-FileName"],
                &[
                    Some("s1".to_string()),
                    Some("42".to_string()),
                    Some("photo.jpg".to_string()),
                ],
                Bytes::from_static(b"x"),
            )
            .await?;

        let request = helpers::only_request(&server).await;
        assert_eq!(header(&request, "X-Smug-ResponseType"), Some("JSON"));
        assert_eq!(header(&request, "X-Smug-Version"), Some("1.2.0"));
        assert_eq!(header(&request, "X-Smug-SessionID"), Some("s1"));
        Ok(())
    }

    #[tokio::test]
    async fn file_name_is_url_encoded_into_the_path() -> anyhow::Result<()> {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let upload = ImageUpload::into_album("my photo.jpg", 42);
        client
            .upload("s1", &upload, Bytes::from_static(b"x"))
            .await?;
        let request = helpers::only_request(&server).await;
        assert_eq!(request.url.path(), "/my%20photo.jpg");
        Ok(())
    }

    #[tokio::test]
    async fn reader_is_fully_drained_before_the_put() -> anyhow::Result<()> {
        let (server, client) = helpers::put_server(OK_IMAGE).await;
        let upload = ImageUpload::replacing_image("photo.jpg", 9);
        let data = b"some image bytes".to_vec();
        client
            .upload_from_reader("s1", &upload, &mut data.as_slice())
            .await?;

        let request = helpers::only_request(&server).await;
        assert_eq!(request.body, data);
        assert_eq!(header(&request, "X-Smug-ImageID"), Some("9"));
        assert_eq!(header(&request, "X-Smug-AlbumID"), None);
        Ok(())
    }

    #[tokio::test]
    async fn legacy_base64_upload_goes_over_post() -> anyhow::Result<()> {
        let (server, client) = helpers::post_server(OK_IMAGE).await;
        let upload = ImageUpload::into_album("a.jpg", 42);
        let resp = client.upload_base64("s1", &upload, b"abc").await?;
        assert_eq!(resp.payload.unwrap().id, Some(7));

        let request = helpers::only_request(&server).await;
        assert_eq!(request.method.as_str(), "POST");
        let pairs = helpers::form_pairs(&request);
        assert_eq!(
            pairs,
            vec![
                "method=smugmug.images.upload",
                "SessionID=s1",
                "Data=YWJj",
                "FileName=a.jpg",
                "AlbumID=42",
                "ByteCount=3",
                "MD5Sum=900150983cd24fb0d6963f7d28e17f72",
            ]
        );
        Ok(())
    }
}
