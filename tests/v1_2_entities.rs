/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use smugmug_legacy::v1_2::json::JsonObject;
    use smugmug_legacy::v1_2::{
        Album, AlbumTemplate, AlbumTransferStats, Category, Image, ImageTransferStats, Login,
    };

    fn obj(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn album_round_trips_through_the_vendor_shape() {
        let album = Album {
            id: Some(100),
            key: Some("abc".to_string()),
            title: Some("Trip".to_string()),
            description: Some("Summer trip".to_string()),
            keywords: Some("lake;boat".to_string()),
            category_id: Some(7),
            sub_category_id: Some(12),
            position: Some(3),
            image_count: Some(250),
            is_public: Some(true),
            password: Some("pw".to_string()),
            password_hint: Some("the usual".to_string()),
            last_updated: NaiveDate::from_ymd_opt(2009, 3, 1)
                .unwrap()
                .and_hms_opt(14, 35, 12),
            highlight: Some(Box::new(Image {
                id: Some(55),
                key: Some("imgkey".to_string()),
                ..Image::default()
            })),
        };
        let rendered = album.to_json();
        assert_eq!(Album::from_json(&obj(rendered)), album);
    }

    #[test]
    fn image_round_trips_through_the_vendor_shape() {
        let image = Image {
            id: Some(55),
            key: Some("imgkey".to_string()),
            caption: Some("at the lake".to_string()),
            file_name: Some("dsc_0042.jpg".to_string()),
            format: Some("JPG".to_string()),
            size: Some(123456),
            width: Some(3008),
            height: Some(2000),
            position: Some(1),
            md5_sum: Some("900150983cd24fb0d6963f7d28e17f72".to_string()),
            is_hidden: Some(false),
            latitude: Some(45.5),
            longitude: Some(-122.25),
            altitude: Some(50),
            last_updated: NaiveDate::from_ymd_opt(2009, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5),
            thumb_url: Some("http://x/Th.jpg".to_string()),
            small_url: Some("http://x/S.jpg".to_string()),
            medium_url: Some("http://x/M.jpg".to_string()),
            large_url: Some("http://x/L.jpg".to_string()),
            original_url: Some("http://x/O.jpg".to_string()),
            album: Some(Box::new(Album {
                id: Some(100),
                key: Some("abc".to_string()),
                ..Album::default()
            })),
        };
        let rendered = image.to_json();
        assert_eq!(Image::from_json(&obj(rendered)), image);
    }

    #[test]
    fn missing_fields_are_absent_never_an_error() {
        assert_eq!(Album::from_json(&JsonObject::new()), Album::default());
        assert_eq!(Image::from_json(&JsonObject::new()), Image::default());
        assert_eq!(Login::from_json(&JsonObject::new()), Login::default());
        assert_eq!(
            AlbumTemplate::from_json(&JsonObject::new()),
            AlbumTemplate::default()
        );
        let category = Category::from_json(&JsonObject::new());
        assert_eq!(category.id, None);
        assert!(category.albums.is_empty());
        assert!(category.subcategories.is_empty());
        let stats = AlbumTransferStats::from_json(&JsonObject::new());
        assert!(stats.images.is_empty());
    }

    #[test]
    fn booleans_accept_the_vendor_numeric_encoding() {
        let album = Album::from_json(&obj(serde_json::json!({"Public": 1})));
        assert_eq!(album.is_public, Some(true));
        let album = Album::from_json(&obj(serde_json::json!({"Public": 0})));
        assert_eq!(album.is_public, Some(false));
        let album = Album::from_json(&obj(serde_json::json!({})));
        assert_eq!(album.is_public, None);

        // string and native forms are tolerated too
        let image = Image::from_json(&obj(serde_json::json!({"Hidden": "1"})));
        assert_eq!(image.is_hidden, Some(true));
        let image = Image::from_json(&obj(serde_json::json!({"Hidden": false})));
        assert_eq!(image.is_hidden, Some(false));
    }

    #[test]
    fn category_display_name_falls_back_to_title() {
        let category = Category::from_json(&obj(serde_json::json!({"Name": "Travel"})));
        assert_eq!(category.name.as_deref(), Some("Travel"));
        let category = Category::from_json(&obj(serde_json::json!({"Title": "Travel"})));
        assert_eq!(category.name.as_deref(), Some("Travel"));
        let category =
            Category::from_json(&obj(serde_json::json!({"Name": "First", "Title": "Second"})));
        assert_eq!(category.name.as_deref(), Some("First"));
    }

    #[test]
    fn category_tree_parses_recursively() {
        let category = Category::from_json(&obj(serde_json::json!({
            "id": 1,
            "Name": "Travel",
            "Category": {"id": 99},
            "Albums": [{"id": 100, "Title": "Trip"}],
            "SubCategories": [{
                "id": 2,
                "Name": "Europe",
                "Albums": [{"id": 101}]
            }]
        })));
        assert_eq!(category.id, Some(1));
        assert_eq!(category.parent_id, Some(99));
        assert_eq!(category.albums.len(), 1);
        assert_eq!(category.albums[0].title.as_deref(), Some("Trip"));
        assert_eq!(category.subcategories.len(), 1);
        let sub = &category.subcategories[0];
        assert_eq!(sub.name.as_deref(), Some("Europe"));
        assert_eq!(sub.albums[0].id, Some(101));
        assert!(sub.subcategories.is_empty());
    }

    #[test]
    fn category_round_trips_through_the_vendor_shape() {
        let category = Category {
            id: Some(1),
            name: Some("Travel".to_string()),
            nice_name: Some("travel".to_string()),
            parent_id: Some(99),
            albums: vec![Album {
                id: Some(100),
                ..Album::default()
            }],
            subcategories: vec![Category {
                id: Some(2),
                name: Some("Europe".to_string()),
                ..Category::default()
            }],
        };
        let rendered = category.to_json();
        assert_eq!(Category::from_json(&obj(rendered)), category);
    }

    #[test]
    fn nested_album_category_reference_wins_over_flat_id() {
        let album = Album::from_json(&obj(serde_json::json!({
            "id": 100,
            "Category": {"id": 7, "Name": "Travel"},
            "SubCategory": {"id": 12, "Name": "Europe"}
        })));
        assert_eq!(album.category_id, Some(7));
        assert_eq!(album.sub_category_id, Some(12));
    }

    #[test]
    fn transfer_stats_round_trip_with_image_breakdown() {
        let stats = AlbumTransferStats {
            id: Some(100),
            bytes: Some(1_000_000),
            hits: Some(321),
            small: Some(100),
            medium: Some(150),
            large: Some(71),
            original: Some(0),
            images: vec![ImageTransferStats {
                id: Some(55),
                bytes: Some(5000),
                hits: Some(3),
                ..ImageTransferStats::default()
            }],
        };
        let rendered = stats.to_json();
        assert_eq!(AlbumTransferStats::from_json(&obj(rendered)), stats);
    }

    #[test]
    fn login_round_trips_through_the_nested_shape() {
        let login = Login {
            session_id: Some("sess-123".to_string()),
            account_type: Some("Power".to_string()),
            file_size_limit: Some(33_554_432),
            user_id: Some(42),
            nick_name: Some("apidemo".to_string()),
            display_name: Some("API Demo".to_string()),
            password_hash: Some("deadbeef".to_string()),
            has_smug_vault: Some(true),
        };
        let rendered = login.to_json();
        assert_eq!(Login::from_json(&obj(rendered)), login);
    }

    #[test]
    fn numeric_fields_accept_string_encoding() {
        let album = Album::from_json(&obj(serde_json::json!({"id": "100", "Position": "3"})));
        assert_eq!(album.id, Some(100));
        assert_eq!(album.position, Some(3));
    }

    #[test]
    fn empty_strings_are_treated_as_unset() {
        let album = Album::from_json(&obj(serde_json::json!({"Password": "", "Title": "Trip"})));
        assert_eq!(album.password, None);
        assert_eq!(album.title.as_deref(), Some("Trip"));
    }
}
