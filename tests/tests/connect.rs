use clubhouse::{Config, Db, PlaceRegistry};
use pretty_assertions::assert_eq;
use tests::{block_on, db::sqlite::SetupSqliteFile, init_tracing};

#[test]
fn connect_with_default_config() {
    init_tracing();

    block_on(async {
        let mut db = Db::connect(&Config::default()).await.unwrap();

        let created = PlaceRegistry
            .get_or_create(&mut db, 65199, "Wiesbaden")
            .await
            .unwrap();
        assert!(created.was_created);
    });
}

#[test]
fn handles_on_a_file_database_share_rows() {
    init_tracing();
    let setup = SetupSqliteFile::new();

    block_on(async {
        let config = Config {
            database_url: setup.url(),
            ..Config::default()
        };

        let mut first = Db::connect(&config).await.unwrap();
        let mut second = first.clone();

        let created = PlaceRegistry
            .get_or_create(&mut first, 10115, "Berlin")
            .await
            .unwrap();
        let found = PlaceRegistry
            .get_or_create(&mut second, 10115, "Berlin")
            .await
            .unwrap();

        assert!(created.was_created);
        assert!(!found.was_created);
        assert_eq!(created.entity.id, found.entity.id);
    });
}

#[test]
fn connecting_twice_keeps_existing_tables() {
    init_tracing();
    let setup = SetupSqliteFile::new();

    block_on(async {
        let config = Config {
            database_url: setup.url(),
            ..Config::default()
        };

        let place = {
            let mut db = Db::connect(&config).await.unwrap();
            PlaceRegistry
                .get_or_create(&mut db, 65199, "Wiesbaden")
                .await
                .unwrap()
                .into_entity()
        };

        let mut db = Db::connect(&config).await.unwrap();
        let again = PlaceRegistry.get(&mut db, place.id).await.unwrap();
        assert_eq!(again, place);
    });
}

#[test]
fn unsupported_urls_are_rejected() {
    init_tracing();

    block_on(async {
        for url in ["postgresql://localhost/clubs", "not a url"] {
            let config = Config {
                database_url: url.to_string(),
                ..Config::default()
            };

            let err = Db::connect(&config).await.unwrap_err();
            assert!(err.is_invalid_connection_url(), "{url}: {err}");
        }
    });
}
